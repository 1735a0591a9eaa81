use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Kind of property on offer.
///
/// The site ships Flat, House and Plot, but the set comes from whatever the
/// admin dashboard writes, so anything else is kept verbatim as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyKind {
    Flat,
    House,
    Plot,
    Other(String),
}

impl PropertyKind {
    pub fn as_str(&self) -> &str {
        match self {
            PropertyKind::Flat => "Flat",
            PropertyKind::House => "House",
            PropertyKind::Plot => "Plot",
            PropertyKind::Other(tag) => tag,
        }
    }
}

impl From<String> for PropertyKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "Flat" => PropertyKind::Flat,
            "House" => PropertyKind::House,
            "Plot" => PropertyKind::Plot,
            _ => PropertyKind::Other(tag),
        }
    }
}

impl From<&str> for PropertyKind {
    fn from(tag: &str) -> Self {
        PropertyKind::from(tag.to_string())
    }
}

impl From<PropertyKind> for String {
    fn from(kind: PropertyKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geographic position used by the map pin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// One sellable unit in the catalog.
///
/// Listings are created and destroyed by the admin backend; everything in
/// this crate only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyListing {
    pub id: String,
    pub title: String,
    /// Whole rupees
    pub price: u64,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: PropertyKind,
    /// Plots carry no bedrooms; a missing or null value reads as zero.
    #[serde(default, deserialize_with = "deserialize_bedrooms")]
    pub bedrooms: u32,
    #[serde(deserialize_with = "deserialize_created_at")]
    pub created_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(flatten)]
    pub geo: Option<GeoPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, rename = "isFeatured")]
    pub featured: bool,
    #[serde(default, rename = "isNew")]
    pub is_new: bool,
}

fn deserialize_bedrooms<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(0))
}

/// Accepts full RFC 3339 timestamps from the database as well as the bare
/// `YYYY-MM-DD` dates used in hand-written catalog files.
fn deserialize_created_at<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_created_at(&raw).map_err(serde::de::Error::custom)
}

pub fn parse_created_at(raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("invalid created_at timestamp: {raw:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_minimal_listing() {
        let listing: PropertyListing = serde_json::from_value(json!({
            "id": "6",
            "title": "Acacia Plots",
            "price": 8500000,
            "location": "Mysore",
            "type": "Plot",
            "created_at": "2024-01-01"
        }))
        .unwrap();

        assert_eq!(listing.kind, PropertyKind::Plot);
        assert_eq!(listing.bedrooms, 0);
        assert!(listing.geo.is_none());
        assert_eq!(listing.created_at.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_null_bedrooms_read_as_zero() {
        let listing: PropertyListing = serde_json::from_value(json!({
            "id": "7",
            "title": "Riverside Land",
            "price": 4000000,
            "location": "Nashik",
            "type": "Plot",
            "bedrooms": null,
            "created_at": "2024-03-01"
        }))
        .unwrap();

        assert_eq!(listing.bedrooms, 0);
    }

    #[test]
    fn test_deserialize_database_row() {
        let listing: PropertyListing = serde_json::from_value(json!({
            "id": "b1f0",
            "title": "Harbour View",
            "price": 52000000,
            "location": "Mumbai",
            "type": "Penthouse",
            "bedrooms": 5,
            "latitude": 18.92,
            "longitude": 72.83,
            "amenities": ["Pool", "Gym"],
            "created_at": "2024-02-03T10:15:00+05:30"
        }))
        .unwrap();

        assert_eq!(listing.kind, PropertyKind::Other("Penthouse".to_string()));
        assert_eq!(listing.kind.to_string(), "Penthouse");
        assert_eq!(listing.geo.map(|g| g.latitude), Some(18.92));
        assert_eq!(listing.created_at.to_rfc3339(), "2024-02-03T04:45:00+00:00");
    }

    #[test]
    fn test_rejects_garbage_timestamp() {
        assert!(parse_created_at("last tuesday").is_err());
    }
}
