use crate::models::PropertyKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label of the "no constraint" choice for type and location
pub const ALL: &str = "All";
/// Label of the "no constraint" choice for bedrooms
pub const ANY: &str = "Any";

/// Ceiling of the price slider when nothing in the catalog costs more (₹20 Cr)
pub const DEFAULT_PRICE_CEILING: u64 = 200_000_000;

/// An exact-match choice that may be switched off with the "All" sentinel
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str(ALL),
            Selection::Only(value) => value.fmt(f),
        }
    }
}

impl FromStr for Selection<String> {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            ALL | "" => Selection::All,
            other => Selection::Only(other.to_string()),
        })
    }
}

impl FromStr for Selection<PropertyKind> {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            ALL | "" => Selection::All,
            other => Selection::Only(PropertyKind::from(other)),
        })
    }
}

/// Inclusive lower bound on bedrooms, or "Any"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BedroomFloor {
    #[default]
    Any,
    AtLeast(u32),
}

impl BedroomFloor {
    pub fn admits(&self, bedrooms: u32) -> bool {
        match self {
            BedroomFloor::Any => true,
            BedroomFloor::AtLeast(min) => bedrooms >= *min,
        }
    }
}

impl fmt::Display for BedroomFloor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BedroomFloor::Any => f.write_str(ANY),
            BedroomFloor::AtLeast(n) => write!(f, "{n}+"),
        }
    }
}

impl FromStr for BedroomFloor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ANY || s.is_empty() {
            return Ok(BedroomFloor::Any);
        }
        s.trim_end_matches('+')
            .parse::<u32>()
            .map(BedroomFloor::AtLeast)
            .map_err(|_| format!("expected a bedroom count or \"{ANY}\", got {s:?}"))
    }
}

/// Order of the published view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    NewestFirst,
    PriceAscending,
    PriceDescending,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" | "newest-first" => Ok(SortOrder::NewestFirst),
            "price-asc" | "price-ascending" => Ok(SortOrder::PriceAscending),
            "price-desc" | "price-descending" => Ok(SortOrder::PriceDescending),
            other => Err(format!(
                "unknown sort order {other:?} (expected newest, price-asc or price-desc)"
            )),
        }
    }
}

/// Current filter and sort selections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring of title or location; empty matches everything
    pub search_text: String,
    pub kind: Selection<PropertyKind>,
    pub location: Selection<String>,
    pub min_bedrooms: BedroomFloor,
    /// Inclusive price ceiling in rupees; always applied
    pub max_price: u64,
    pub sort: SortOrder,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::with_ceiling(DEFAULT_PRICE_CEILING)
    }
}

impl FilterCriteria {
    /// Unconstrained criteria whose price ceiling is `ceiling`
    pub fn with_ceiling(ceiling: u64) -> Self {
        Self {
            search_text: String::new(),
            kind: Selection::All,
            location: Selection::All,
            min_bedrooms: BedroomFloor::Any,
            max_price: ceiling,
            sort: SortOrder::NewestFirst,
        }
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn kind(mut self, kind: impl Into<PropertyKind>) -> Self {
        self.kind = Selection::Only(kind.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Selection::Only(location.into());
        self
    }

    pub fn min_bedrooms(mut self, min: u32) -> Self {
        self.min_bedrooms = BedroomFloor::AtLeast(min);
        self
    }

    pub fn max_price(mut self, max: u64) -> Self {
        self.max_price = max;
        self
    }

    pub fn sorted(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }
}
