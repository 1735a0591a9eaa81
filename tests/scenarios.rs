use estate_catalog::catalog::{
    filter_catalog, BedroomFloor, CatalogFilter, FilterCriteria, FilterOptions, Selection,
    SortOrder,
};
use estate_catalog::catalog::fixtures::sample_catalog;
use estate_catalog::wishlist::{FileStorage, KeyValueStorage, MemoryStorage, WishlistStore};
use estate_catalog::PropertyKind;
use std::collections::HashSet;
use std::sync::Arc;
use tempfile::tempdir;

fn ids(results: &[&estate_catalog::PropertyListing]) -> Vec<String> {
    results.iter().map(|l| l.id.clone()).collect()
}

#[test]
fn test_goa_filter_returns_sunset_villa() {
    let catalog = sample_catalog();
    let results = filter_catalog(&catalog, &FilterCriteria::default().location("Goa"));

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "4");
    assert_eq!(results[0].title, "Sunset Villa");
    assert_eq!(results[0].price, 35_000_000);
}

#[test]
fn test_price_ceiling_sorted_ascending() {
    let catalog = sample_catalog();
    let criteria = FilterCriteria::default()
        .max_price(20_000_000)
        .sorted(SortOrder::PriceAscending);

    assert_eq!(ids(&filter_catalog(&catalog, &criteria)), ["6", "3"]);
}

#[test]
fn test_loft_search_matches_title_with_all_locations() {
    let mut engine = CatalogFilter::new(sample_catalog());
    engine.set_location(Selection::All);
    engine.set_search_text("loft");

    assert_eq!(ids(&engine.filtered_view()), ["3"]);
}

#[test]
fn test_wishlist_toggle_scenario() {
    let storage = Arc::new(MemoryStorage::new());
    let store = WishlistStore::initialize(storage.clone());

    assert!(!store.is_saved("1"));

    store.toggle("1");
    assert!(store.is_saved("1"));
    assert_eq!(storage.read("luxe_wishlist").unwrap().as_deref(), Some(r#"["1"]"#));

    store.toggle("1");
    assert!(!store.is_saved("1"));
    assert_eq!(storage.read("luxe_wishlist").unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_wishlist_survives_sessions_on_disk() {
    let dir = tempdir().unwrap();

    {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(FileStorage::at_dir(dir.path()));
        let store = WishlistStore::initialize(storage);
        store.toggle("2");
        store.toggle("5");
        store.teardown();
    }

    let storage: Arc<dyn KeyValueStorage> = Arc::new(FileStorage::at_dir(dir.path()));
    let store = WishlistStore::initialize(storage);
    assert_eq!(store.ids(), ["2", "5"]);
}

#[test]
fn test_sort_orders_hold_for_every_adjacent_pair() {
    let catalog = sample_catalog();

    let asc = filter_catalog(&catalog, &FilterCriteria::default().sorted(SortOrder::PriceAscending));
    assert!(asc.windows(2).all(|w| w[0].price <= w[1].price));

    let desc = filter_catalog(&catalog, &FilterCriteria::default().sorted(SortOrder::PriceDescending));
    assert!(desc.windows(2).all(|w| w[0].price >= w[1].price));

    let newest = filter_catalog(&catalog, &FilterCriteria::default());
    assert!(newest.windows(2).all(|w| w[0].created_at >= w[1].created_at));
}

#[test]
fn test_results_are_exactly_the_matching_listings() {
    let catalog = sample_catalog();
    let searches = ["", "a", "pune", "ESTATE", "zzz"];
    let kinds = [
        Selection::All,
        Selection::Only(PropertyKind::Flat),
        Selection::Only(PropertyKind::Plot),
    ];
    let floors = [BedroomFloor::Any, BedroomFloor::AtLeast(3)];
    let ceilings = [10_000_000, 40_000_000, 200_000_000];

    for search in searches {
        for kind in &kinds {
            for floor in floors {
                for ceiling in ceilings {
                    let criteria = FilterCriteria {
                        search_text: search.to_string(),
                        kind: kind.clone(),
                        location: Selection::All,
                        min_bedrooms: floor,
                        max_price: ceiling,
                        sort: SortOrder::NewestFirst,
                    };
                    let got: HashSet<String> =
                        filter_catalog(&catalog, &criteria).iter().map(|l| l.id.clone()).collect();

                    let needle = search.to_lowercase();
                    let expected: HashSet<String> = catalog
                        .iter()
                        .filter(|l| {
                            (l.title.to_lowercase().contains(&needle)
                                || l.location.to_lowercase().contains(&needle))
                                && kind.admits(&l.kind)
                                && floor.admits(l.bedrooms)
                                && l.price <= ceiling
                        })
                        .map(|l| l.id.clone())
                        .collect();

                    assert_eq!(got, expected, "criteria {criteria:?}");
                }
            }
        }
    }
}

#[test]
fn test_options_hold_one_sentinel_and_each_catalog_value() {
    let catalog = sample_catalog();
    let options = FilterOptions::derive(&catalog);

    let sentinels = options.locations.iter().filter(|o| **o == Selection::All).count();
    assert_eq!(sentinels, 1);
    assert_eq!(options.locations[0], Selection::All);

    let offered: HashSet<&str> = options
        .locations
        .iter()
        .filter_map(|o| match o {
            Selection::Only(l) => Some(l.as_str()),
            Selection::All => None,
        })
        .collect();
    let present: HashSet<&str> = catalog.iter().map(|l| l.location.as_str()).collect();
    assert_eq!(offered, present);
    assert_eq!(offered.len(), options.locations.len() - 1);
}
