use crate::models::{parse_created_at, PropertyKind, PropertyListing};
use chrono::{DateTime, Utc};

struct Seed {
    id: &'static str,
    title: &'static str,
    price: u64,
    location: &'static str,
    kind: PropertyKind,
    bedrooms: u32,
    area: &'static str,
    image: &'static str,
    created_at: &'static str,
    status: &'static str,
    featured: bool,
    is_new: bool,
}

fn date(raw: &str) -> DateTime<Utc> {
    parse_created_at(raw).unwrap_or_default()
}

/// The showcase catalog the public site ships with before the database is
/// populated.
pub fn sample_catalog() -> Vec<PropertyListing> {
    let seeds = [
        Seed {
            id: "1",
            title: "Skylight Penthouse",
            price: 45_000_000,
            location: "Mumbai",
            kind: PropertyKind::Flat,
            bedrooms: 4,
            area: "3200 sq.ft",
            image: "https://images.unsplash.com/photo-1512917774080-9991f1c4c750",
            created_at: "2024-01-20",
            status: "Ready to Move",
            featured: true,
            is_new: true,
        },
        Seed {
            id: "2",
            title: "Emerald Estate",
            price: 125_000_000,
            location: "Alibaug",
            kind: PropertyKind::House,
            bedrooms: 6,
            area: "8500 sq.ft",
            image: "https://images.unsplash.com/photo-1613490493576-7fde63acd811",
            created_at: "2024-01-15",
            status: "Ready to Move",
            featured: true,
            is_new: false,
        },
        Seed {
            id: "3",
            title: "Urban Loft",
            price: 18_000_000,
            location: "Bangalore",
            kind: PropertyKind::Flat,
            bedrooms: 2,
            area: "1800 sq.ft",
            image: "https://images.unsplash.com/photo-1493809842364-78817add7ffb",
            created_at: "2024-01-18",
            status: "Under Construction",
            featured: false,
            is_new: true,
        },
        Seed {
            id: "4",
            title: "Sunset Villa",
            price: 35_000_000,
            location: "Goa",
            kind: PropertyKind::House,
            bedrooms: 4,
            area: "4000 sq.ft",
            image: "https://images.unsplash.com/photo-1564013799919-ab600027ffc6",
            created_at: "2024-01-10",
            status: "Ready to Move",
            featured: false,
            is_new: false,
        },
        Seed {
            id: "5",
            title: "Palm Residency",
            price: 22_000_000,
            location: "Pune",
            kind: PropertyKind::Flat,
            bedrooms: 3,
            area: "2100 sq.ft",
            image: "https://images.unsplash.com/photo-1545324418-cc1a3fa10c00",
            created_at: "2024-01-05",
            status: "Ready to Move",
            featured: false,
            is_new: false,
        },
        Seed {
            id: "6",
            title: "Acacia Plots",
            price: 8_500_000,
            location: "Mysore",
            kind: PropertyKind::Plot,
            bedrooms: 0,
            area: "5000 sq.ft",
            image: "https://images.unsplash.com/photo-1500382017468-9049fed747ef",
            created_at: "2024-01-01",
            status: "New Launch",
            featured: false,
            is_new: false,
        },
    ];

    seeds
        .into_iter()
        .map(|seed| PropertyListing {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            price: seed.price,
            location: seed.location.to_string(),
            kind: seed.kind,
            bedrooms: seed.bedrooms,
            created_at: date(seed.created_at),
            area: Some(seed.area.to_string()),
            bathrooms: None,
            description: None,
            amenities: vec![],
            images: vec![seed.image.to_string()],
            geo: None,
            status: Some(seed.status.to_string()),
            featured: seed.featured,
            is_new: seed.is_new,
        })
        .collect()
}
