use crate::catalog::criteria::{
    BedroomFloor, FilterCriteria, Selection, SortOrder, DEFAULT_PRICE_CEILING,
};
use crate::catalog::filter::filter_indices;
use crate::catalog::options::FilterOptions;
use crate::models::{PropertyKind, PropertyListing};
use tracing::debug;

/// Holds the resident catalog and the current criteria, and keeps the
/// filtered view up to date.
///
/// Every setter re-evaluates the view before returning, so `filtered_view`
/// always reflects the latest selections.
pub struct CatalogFilter {
    catalog: Vec<PropertyListing>,
    criteria: FilterCriteria,
    base_ceiling: u64,
    default_ceiling: u64,
    /// The user chose a price ceiling rather than taking the default
    ceiling_touched: bool,
    options: FilterOptions,
    view: Vec<usize>,
}

impl CatalogFilter {
    /// Create an engine over `catalog` with the stock ₹20 Cr slider ceiling
    pub fn new(catalog: Vec<PropertyListing>) -> Self {
        Self::with_price_ceiling(catalog, DEFAULT_PRICE_CEILING)
    }

    /// Create an engine whose default price ceiling is `ceiling`, raised to
    /// the most expensive listing when the catalog exceeds it.
    pub fn with_price_ceiling(catalog: Vec<PropertyListing>, ceiling: u64) -> Self {
        let default_ceiling = effective_ceiling(&catalog, ceiling);
        let options = FilterOptions::derive(&catalog);
        let mut engine = Self {
            catalog,
            criteria: FilterCriteria::with_ceiling(default_ceiling),
            base_ceiling: ceiling,
            default_ceiling,
            ceiling_touched: false,
            options,
            view: Vec::new(),
        };
        engine.evaluate();
        engine
    }

    fn evaluate(&mut self) {
        self.view = filter_indices(&self.catalog, &self.criteria);
        debug!(
            search = %self.criteria.search_text,
            kind = %self.criteria.kind,
            location = %self.criteria.location,
            min_bedrooms = %self.criteria.min_bedrooms,
            max_price = self.criteria.max_price,
            sort = ?self.criteria.sort,
            matched = self.view.len(),
            "Filter pass"
        );
    }

    /// The listings matching the current criteria, in the current order
    pub fn filtered_view(&self) -> Vec<&PropertyListing> {
        self.view.iter().map(|&i| &self.catalog[i]).collect()
    }

    pub fn result_count(&self) -> usize {
        self.view.len()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn catalog(&self) -> &[PropertyListing] {
        &self.catalog
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Price ceiling applied when the user has not moved the slider
    pub fn default_ceiling(&self) -> u64 {
        self.default_ceiling
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.ceiling_touched = true;
        self.evaluate();
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.criteria.search_text = text.into();
        self.evaluate();
    }

    pub fn set_kind(&mut self, kind: Selection<PropertyKind>) {
        self.criteria.kind = kind;
        self.evaluate();
    }

    pub fn set_location(&mut self, location: Selection<String>) {
        self.criteria.location = location;
        self.evaluate();
    }

    pub fn set_min_bedrooms(&mut self, floor: BedroomFloor) {
        self.criteria.min_bedrooms = floor;
        self.evaluate();
    }

    pub fn set_max_price(&mut self, max_price: u64) {
        self.criteria.max_price = max_price;
        self.ceiling_touched = true;
        self.evaluate();
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.criteria.sort = sort;
        self.evaluate();
    }

    /// Back to the unfiltered, newest-first view
    pub fn reset(&mut self) {
        self.criteria = FilterCriteria::with_ceiling(self.default_ceiling);
        self.ceiling_touched = false;
        self.evaluate();
    }

    /// Swap in a freshly loaded catalog.
    ///
    /// Option lists and the default ceiling are re-derived. A price ceiling
    /// the user never touched follows the new default; other selections are
    /// kept as they are.
    pub fn replace_catalog(&mut self, catalog: Vec<PropertyListing>) {
        self.default_ceiling = effective_ceiling(&catalog, self.base_ceiling);
        self.options = FilterOptions::derive(&catalog);
        self.catalog = catalog;
        if !self.ceiling_touched {
            self.criteria.max_price = self.default_ceiling;
        }
        self.evaluate();
    }

    pub fn get(&self, id: &str) -> Option<&PropertyListing> {
        self.catalog.iter().find(|l| l.id == id)
    }

    /// Listings in `city`, ignoring case, in catalog order
    pub fn in_city(&self, city: &str) -> Vec<&PropertyListing> {
        let city = city.to_lowercase();
        self.catalog
            .iter()
            .filter(|l| l.location.to_lowercase() == city)
            .collect()
    }

    pub fn featured(&self) -> Vec<&PropertyListing> {
        self.catalog.iter().filter(|l| l.featured).collect()
    }
}

fn effective_ceiling(catalog: &[PropertyListing], ceiling: u64) -> u64 {
    catalog
        .iter()
        .map(|l| l.price)
        .max()
        .map_or(ceiling, |top| top.max(ceiling))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::sample_catalog;

    fn ids(engine: &CatalogFilter) -> Vec<&str> {
        engine.filtered_view().iter().map(|l| l.id.as_str()).collect()
    }

    #[test]
    fn test_view_follows_each_change() {
        let mut engine = CatalogFilter::new(sample_catalog());
        assert_eq!(engine.result_count(), 6);

        engine.set_kind(Selection::Only(PropertyKind::House));
        assert_eq!(ids(&engine), ["2", "4"]);

        engine.set_sort(SortOrder::PriceAscending);
        assert_eq!(ids(&engine), ["4", "2"]);

        engine.set_max_price(50_000_000);
        assert_eq!(ids(&engine), ["4"]);

        engine.set_location(Selection::Only("Alibaug".to_string()));
        assert!(engine.filtered_view().is_empty());
    }

    #[test]
    fn test_reset_restores_default_view() {
        let mut engine = CatalogFilter::new(sample_catalog());
        engine.set_search_text("villa");
        engine.set_min_bedrooms(BedroomFloor::AtLeast(4));
        engine.set_sort(SortOrder::PriceDescending);
        assert_eq!(ids(&engine), ["4"]);

        engine.reset();
        assert_eq!(engine.criteria(), &FilterCriteria::with_ceiling(DEFAULT_PRICE_CEILING));
        assert_eq!(ids(&engine), ["1", "3", "2", "4", "5", "6"]);
    }

    #[test]
    fn test_default_ceiling_covers_most_expensive_listing() {
        let mut catalog = sample_catalog();
        catalog[1].price = 350_000_000;

        let engine = CatalogFilter::new(catalog);
        assert_eq!(engine.default_ceiling(), 350_000_000);
        assert_eq!(engine.result_count(), 6);
    }

    #[test]
    fn test_replace_catalog_moves_untouched_ceiling() {
        let mut engine = CatalogFilter::new(sample_catalog());
        engine.set_location(Selection::Only("Goa".to_string()));

        let mut bigger = sample_catalog();
        bigger[3].price = 300_000_000;
        engine.replace_catalog(bigger);

        assert_eq!(engine.criteria().max_price, 300_000_000);
        assert_eq!(ids(&engine), ["4"]);
    }

    #[test]
    fn test_replace_catalog_keeps_user_ceiling() {
        let mut engine = CatalogFilter::new(sample_catalog());
        engine.set_max_price(20_000_000);

        engine.replace_catalog(sample_catalog());
        assert_eq!(engine.criteria().max_price, 20_000_000);
        assert_eq!(engine.result_count(), 2);
    }

    #[test]
    fn test_replace_catalog_keeps_chosen_default_ceiling() {
        let mut engine = CatalogFilter::new(sample_catalog());
        engine.set_max_price(DEFAULT_PRICE_CEILING);

        let mut bigger = sample_catalog();
        bigger[1].price = 300_000_000;
        engine.replace_catalog(bigger);

        assert_eq!(engine.default_ceiling(), 300_000_000);
        assert_eq!(engine.criteria().max_price, DEFAULT_PRICE_CEILING);
        assert!(engine.get("2").is_some());
        assert_eq!(engine.result_count(), 5);
    }

    #[test]
    fn test_reset_releases_ceiling() {
        let mut engine = CatalogFilter::new(sample_catalog());
        engine.set_max_price(20_000_000);
        engine.reset();

        let mut bigger = sample_catalog();
        bigger[1].price = 300_000_000;
        engine.replace_catalog(bigger);

        assert_eq!(engine.criteria().max_price, 300_000_000);
        assert_eq!(engine.result_count(), 6);
    }

    #[test]
    fn test_replace_catalog_rederives_options() {
        let mut engine = CatalogFilter::new(sample_catalog());
        engine.replace_catalog(sample_catalog().into_iter().take(2).collect());
        assert_eq!(engine.options().locations.len(), 3);
    }

    #[test]
    fn test_in_city_ignores_case() {
        let engine = CatalogFilter::new(sample_catalog());
        let goa: Vec<&str> = engine.in_city("goa").iter().map(|l| l.title.as_str()).collect();
        assert_eq!(goa, ["Sunset Villa"]);
        assert!(engine.in_city("Chennai").is_empty());
    }

    #[test]
    fn test_lookup_and_featured() {
        let engine = CatalogFilter::new(sample_catalog());
        assert_eq!(engine.get("3").map(|l| l.title.as_str()), Some("Urban Loft"));
        assert!(engine.get("99").is_none());

        let featured: Vec<&str> = engine.featured().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(featured, ["1", "2"]);
    }

    #[test]
    fn test_empty_catalog() {
        let engine = CatalogFilter::new(Vec::new());
        assert!(engine.filtered_view().is_empty());
        assert_eq!(engine.default_ceiling(), DEFAULT_PRICE_CEILING);
    }
}
