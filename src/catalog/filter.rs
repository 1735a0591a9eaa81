use crate::catalog::criteria::{FilterCriteria, SortOrder};
use crate::models::PropertyListing;
use std::cmp::Ordering;

/// True when `listing` satisfies every active constraint in `criteria`
pub fn matches(listing: &PropertyListing, criteria: &FilterCriteria) -> bool {
    listing.price <= criteria.max_price
        && criteria.kind.admits(&listing.kind)
        && criteria.location.admits(&listing.location)
        && criteria.min_bedrooms.admits(listing.bedrooms)
        && matches_search(listing, &criteria.search_text)
}

fn matches_search(listing: &PropertyListing, text: &str) -> bool {
    if text.is_empty() {
        return true;
    }
    let needle = text.to_lowercase();
    listing.title.to_lowercase().contains(&needle)
        || listing.location.to_lowercase().contains(&needle)
}

/// Relative order of two listings under `order`
pub fn compare(a: &PropertyListing, b: &PropertyListing, order: SortOrder) -> Ordering {
    match order {
        SortOrder::NewestFirst => b.created_at.cmp(&a.created_at),
        SortOrder::PriceAscending => a.price.cmp(&b.price),
        SortOrder::PriceDescending => b.price.cmp(&a.price),
    }
}

/// Positions in `catalog` of the listings matching `criteria`, in the
/// requested order. The sort is stable, so ties keep catalog order.
pub fn filter_indices(catalog: &[PropertyListing], criteria: &FilterCriteria) -> Vec<usize> {
    let mut hits: Vec<usize> = catalog
        .iter()
        .enumerate()
        .filter(|(_, listing)| matches(listing, criteria))
        .map(|(i, _)| i)
        .collect();
    hits.sort_by(|&a, &b| compare(&catalog[a], &catalog[b], criteria.sort));
    hits
}

/// Listings of `catalog` matching `criteria`, in the requested order.
///
/// Pure: borrows the catalog and never mutates it. An empty result is a
/// normal outcome.
pub fn filter_catalog<'a>(
    catalog: &'a [PropertyListing],
    criteria: &FilterCriteria,
) -> Vec<&'a PropertyListing> {
    filter_indices(catalog, criteria)
        .into_iter()
        .map(|i| &catalog[i])
        .collect()
}
