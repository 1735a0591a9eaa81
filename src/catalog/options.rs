use crate::catalog::criteria::{BedroomFloor, Selection};
use crate::models::{PropertyKind, PropertyListing};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;

/// Choices offered by the filter panel, derived from what the catalog holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub kinds: Vec<Selection<PropertyKind>>,
    pub locations: Vec<Selection<String>>,
    pub bedrooms: Vec<BedroomFloor>,
}

/// "All" followed by each distinct value, in order of first appearance
fn distinct_with_all<T, I>(values: I) -> Vec<Selection<T>>
where
    T: Clone + Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    let mut options = vec![Selection::All];
    for value in values {
        if seen.insert(value.clone()) {
            options.push(Selection::Only(value));
        }
    }
    options
}

pub fn kind_options(catalog: &[PropertyListing]) -> Vec<Selection<PropertyKind>> {
    distinct_with_all(catalog.iter().map(|l| l.kind.clone()))
}

pub fn location_options(catalog: &[PropertyListing]) -> Vec<Selection<String>> {
    distinct_with_all(catalog.iter().map(|l| l.location.clone()))
}

/// "Any" followed by each distinct bedroom count, ascending
pub fn bedroom_options(catalog: &[PropertyListing]) -> Vec<BedroomFloor> {
    let counts: BTreeSet<u32> = catalog.iter().map(|l| l.bedrooms).collect();
    std::iter::once(BedroomFloor::Any)
        .chain(counts.into_iter().map(BedroomFloor::AtLeast))
        .collect()
}

impl FilterOptions {
    pub fn derive(catalog: &[PropertyListing]) -> Self {
        Self {
            kinds: kind_options(catalog),
            locations: location_options(catalog),
            bedrooms: bedroom_options(catalog),
        }
    }
}
