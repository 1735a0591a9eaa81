use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use estate_catalog::catalog::{
    BedroomFloor, CatalogFilter, CatalogSource, FilterCriteria, FixtureCatalog, JsonFileCatalog,
    Selection, SortOrder,
};
use estate_catalog::format::{format_price, format_price_short, whatsapp_link};
use estate_catalog::models::{PropertyKind, PropertyListing};
use estate_catalog::recent::{RecentlyViewed, DISPLAY_LIMIT};
use estate_catalog::wishlist::{FileStorage, KeyValueStorage, WishlistStore};
use estate_catalog::AppConfig;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "estate-catalog")]
#[command(about = "Browse, filter and shortlist property listings")]
#[command(version)]
struct Cli {
    /// JSON catalog file (defaults to the built-in showcase listings)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Directory for the wishlist and recently-viewed files
    #[arg(long, global = true)]
    storage_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List listings matching the given filters
    List {
        /// Text to find in the title or location
        #[arg(short, long, default_value = "")]
        search: String,

        /// Property type, or "All"
        #[arg(short = 't', long = "type", default_value = "All")]
        kind: Selection<PropertyKind>,

        /// Location, or "All"
        #[arg(short, long, default_value = "All")]
        location: Selection<String>,

        /// Minimum bedrooms, or "Any"
        #[arg(short = 'b', long, default_value = "Any")]
        min_bedrooms: BedroomFloor,

        /// Price ceiling in rupees (defaults to the slider maximum)
        #[arg(short = 'p', long)]
        max_price: Option<u64>,

        /// newest, price-asc or price-desc
        #[arg(long, default_value = "newest")]
        sort: SortOrder,
    },

    /// Show the filter choices the catalog offers
    Options,

    /// List everything in one city
    City { name: String },

    /// Show one listing in full
    Show { id: String },

    /// Save or unsave a listing
    Save { id: String },

    /// List saved listings
    Wishlist,

    /// List recently viewed listings
    Recent,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for listings
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::from_env()?;
    if let Some(path) = cli.catalog {
        config.catalog_path = Some(path);
    }
    if let Some(dir) = cli.storage_dir {
        config.storage_dir = dir;
    }

    let source: Box<dyn CatalogSource> = match &config.catalog_path {
        Some(path) => Box::new(JsonFileCatalog::new(path)),
        None => Box::new(FixtureCatalog),
    };
    let listings = source
        .load()
        .await
        .with_context(|| format!("Failed to load catalog from {}", source.source_name()))?;
    info!("Catalog ready: {} listings from {}", listings.len(), source.source_name());

    let mut engine = CatalogFilter::with_price_ceiling(listings, config.default_price_ceiling);
    let storage: Arc<dyn KeyValueStorage> = Arc::new(FileStorage::at_dir(&config.storage_dir));

    match cli.command {
        Commands::List {
            search,
            kind,
            location,
            min_bedrooms,
            max_price,
            sort,
        } => {
            engine.set_criteria(FilterCriteria {
                search_text: search,
                kind,
                location,
                min_bedrooms,
                max_price: max_price.unwrap_or(engine.default_ceiling()),
                sort,
            });

            let results = engine.filtered_view();
            if results.is_empty() {
                println!("No properties found matching your criteria.");
                println!("Try adjusting your filters or search term.");
            }
            for (i, listing) in results.iter().enumerate() {
                print_card(i + 1, listing);
            }
        }

        Commands::Options => {
            let options = engine.options();
            let join = |items: Vec<String>| items.join(", ");
            println!("Type:     {}", join(options.kinds.iter().map(ToString::to_string).collect()));
            println!("Location: {}", join(options.locations.iter().map(ToString::to_string).collect()));
            println!("Bedrooms: {}", join(options.bedrooms.iter().map(ToString::to_string).collect()));
            println!("Max price: {}", format_price(engine.default_ceiling()));
        }

        Commands::City { name } => {
            let listings = engine.in_city(&name);
            println!("{} properties in {}", listings.len(), name);
            for (i, listing) in listings.iter().enumerate() {
                print_card(i + 1, listing);
            }
        }

        Commands::Show { id } => {
            let listing = engine
                .get(&id)
                .with_context(|| format!("No listing with id {id}"))?;

            let mut recent = RecentlyViewed::initialize_at(
                storage.clone(),
                config.recent_key.clone(),
                config.recent_capacity,
            );
            recent.record_view(&listing.id);

            let wishlist = WishlistStore::initialize_at(storage, config.wishlist_key.clone());
            print_detail(listing, wishlist.is_saved(&listing.id), &config)?;
            wishlist.teardown();
        }

        Commands::Save { id } => {
            let wishlist = WishlistStore::initialize_at(storage, config.wishlist_key.clone());
            let title = engine.get(&id).map(|l| l.title.as_str()).unwrap_or("unknown listing");
            if wishlist.toggle(&id) {
                println!("♥ Saved {id} ({title})");
            } else {
                println!("♡ Removed {id} ({title})");
            }
            if !wishlist.is_durable() {
                println!("(wishlist storage unavailable; change kept for this session only)");
            }
            wishlist.teardown();
        }

        Commands::Wishlist => {
            let wishlist = WishlistStore::initialize_at(storage, config.wishlist_key.clone());
            let saved = wishlist.saved_listings(engine.catalog());
            if saved.is_empty() {
                println!("Your wishlist is empty.");
            }
            for (i, listing) in saved.iter().enumerate() {
                print_card(i + 1, listing);
            }
            wishlist.teardown();
        }

        Commands::Recent => {
            let recent = RecentlyViewed::initialize_at(
                storage,
                config.recent_key.clone(),
                config.recent_capacity,
            );
            for (i, listing) in recent.resolve(engine.catalog(), DISPLAY_LIMIT).iter().enumerate() {
                print_card(i + 1, listing);
            }
        }
    }

    Ok(())
}

fn print_card(position: usize, listing: &PropertyListing) {
    println!("{}. {} ({})", position, listing.title, format_price_short(listing.price));
    println!("   {} · {}", listing.kind, listing.location);
    if listing.bedrooms > 0 {
        println!("   {} bedrooms", listing.bedrooms);
    }
    println!("   ID: {}", listing.id);
    println!();
}

fn print_detail(listing: &PropertyListing, saved: bool, config: &AppConfig) -> Result<()> {
    let price = format_price(listing.price);
    println!("{}{}", listing.title, if saved { "  ♥" } else { "" });
    println!("{} · {}", listing.kind, listing.location);
    println!("Price: {price}");
    println!("Bedrooms: {}", listing.bedrooms);
    if let Some(area) = &listing.area {
        println!("Area: {area}");
    }
    if let Some(status) = &listing.status {
        println!("Status: {status}");
    }
    if !listing.amenities.is_empty() {
        println!("Amenities: {}", listing.amenities.join(", "));
    }
    if let Some(description) = &listing.description {
        println!();
        println!("{description}");
    }

    let link = whatsapp_link(&config.whatsapp_number, &listing.title, &listing.location, &price)
        .context("Failed to build WhatsApp link")?;
    println!();
    println!("Enquire: {link}");
    Ok(())
}
