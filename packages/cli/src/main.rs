#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line access to the QuartierSpots helpers.
//!
//! Useful for checking how an address will be normalized, what slug a name
//! produces, or whether a location falls inside an event boundary without
//! starting the server.

use clap::{Parser, Subcommand};
use quartier_spots_address::normalize_address;
use quartier_spots_geo::{
    Boundary, Coordinate, RADIUS_PRESETS, calculate_distance_meters, format_distance,
};
use quartier_spots_geocoder::{Geocoder as _, nominatim::NominatimGeocoder};
use quartier_spots_slug::generate_slug;
use quartier_spots_terminology::{SpotTerms, all_presets, get_spot_terms};

// ---------------------------------------------------------------------------
// CLI definitions
// ---------------------------------------------------------------------------

/// Address, distance, slug, and terminology helpers for QuartierSpots.
#[derive(Parser)]
#[command(name = "quartier_spots")]
#[command(about = "Address, distance, slug, and terminology helpers")]
struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Normalize a German address.
    Normalize {
        #[arg(long)]
        street: Option<String>,
        #[arg(long)]
        house_number: Option<String>,
        #[arg(long)]
        zip: Option<String>,
        #[arg(long)]
        city: Option<String>,
    },

    /// Generate a URL slug from a name.
    Slug {
        /// Display name (e.g. "Flohmarkt Südstadt").
        name: String,
    },

    /// Great-circle distance between two points.
    #[command(allow_negative_numbers = true)]
    Distance {
        lat1: f64,
        lng1: f64,
        lat2: f64,
        lng2: f64,
    },

    /// Check whether a spot lies inside an event boundary.
    #[command(allow_negative_numbers = true)]
    Boundary {
        #[arg(long)]
        spot_lat: f64,
        #[arg(long)]
        spot_lng: f64,
        #[arg(long)]
        center_lat: f64,
        #[arg(long)]
        center_lng: f64,
        /// Boundary radius in meters (omit for unrestricted).
        #[arg(long)]
        radius: Option<f64>,
    },

    /// Show the display strings for a spot noun pair.
    Terms {
        #[arg(long)]
        singular: Option<String>,
        #[arg(long)]
        plural: Option<String>,
        /// Print as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// List radius and terminology presets.
    Presets,

    /// Geocode a one-line address with Nominatim.
    Geocode {
        /// Address (e.g. "Hauptstraße 42, 90402 Nürnberg").
        query: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_custom_env("RUST_LOG");
    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize {
            street,
            house_number,
            zip,
            city,
        } => {
            cmd_normalize(
                street.as_deref(),
                house_number.as_deref(),
                zip.as_deref(),
                city.as_deref(),
            );
            Ok(())
        }
        Commands::Slug { name } => {
            println!("{}", generate_slug(&name));
            Ok(())
        }
        Commands::Distance {
            lat1,
            lng1,
            lat2,
            lng2,
        } => {
            let meters = calculate_distance_meters(lat1, lng1, lat2, lng2);
            println!("{meters:.1} m ({})", format_distance(meters));
            Ok(())
        }
        Commands::Boundary {
            spot_lat,
            spot_lng,
            center_lat,
            center_lng,
            radius,
        } => {
            cmd_boundary(
                Coordinate::new(spot_lat, spot_lng),
                Boundary::new(Coordinate::new(center_lat, center_lng), radius),
            );
            Ok(())
        }
        Commands::Terms {
            singular,
            plural,
            json,
        } => cmd_terms(
            &get_spot_terms(singular.as_deref(), plural.as_deref()),
            json,
        ),
        Commands::Presets => {
            cmd_presets();
            Ok(())
        }
        Commands::Geocode { query } => cmd_geocode(&query).await,
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_normalize(
    street: Option<&str>,
    house_number: Option<&str>,
    zip: Option<&str>,
    city: Option<&str>,
) {
    let address = normalize_address(street, house_number, zip, city);

    println!("Street:       {}", address.street.as_deref().unwrap_or("-"));
    println!("House number: {}", address.house_number.as_deref().unwrap_or("-"));
    println!("Zip:          {}", address.zip.as_deref().unwrap_or("-"));
    println!("City:         {}", address.city.as_deref().unwrap_or("-"));
    println!();
    println!("{address}");

    if !address.is_complete() {
        log::warn!("Street and city are required for geocoding");
    }
}

fn cmd_boundary(spot: Coordinate, boundary: Boundary) {
    let distance = boundary.distance_from_center(&spot);
    let radius = boundary
        .radius_meters
        .map_or_else(|| "unrestricted".to_string(), format_distance);

    let verdict = if boundary.contains(&spot) {
        "inside"
    } else {
        "outside"
    };
    println!(
        "{verdict} ({} from center, radius {radius})",
        format_distance(distance)
    );
}

fn cmd_terms(terms: &SpotTerms, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(terms)?);
        return Ok(());
    }

    let rows = [
        ("singular", &terms.singular),
        ("plural", &terms.plural),
        ("allSpots", &terms.all_spots),
        ("noSpots", &terms.no_spots),
        ("spotCount", &terms.spot_count),
        ("registerSpot", &terms.register_spot),
        ("addSpot", &terms.add_spot),
        ("saveSpot", &terms.save_spot),
        ("deleteSpot", &terms.delete_spot),
        ("requestDeletion", &terms.request_deletion),
        ("deletionRequests", &terms.deletion_requests),
        ("spotsOnMap", &terms.spots_on_map),
        ("outsideBoundary", &terms.outside_boundary),
        ("manageSpots", &terms.manage_spots),
        ("spotOverview", &terms.spot_overview),
        ("contactAboutSpot", &terms.contact_about_spot),
    ];
    for (key, value) in rows {
        println!("{key:<18} {value}");
    }

    Ok(())
}

fn cmd_presets() {
    println!("=== Radius presets ===");
    for preset in RADIUS_PRESETS {
        println!("  {:>6} m  {}", preset.meters, preset.label);
    }

    println!();
    println!("=== Terminology presets ===");
    for preset in all_presets() {
        println!(
            "  {:<12} {:<22} {} / {}",
            preset.id, preset.event_type, preset.singular, preset.plural
        );
    }
}

async fn cmd_geocode(query: &str) -> Result<(), Box<dyn std::error::Error>> {
    let geocoder = NominatimGeocoder::from_env()?;

    match geocoder.geocode(query).await? {
        Some(found) => {
            println!("{:.6}, {:.6}", found.location.lat, found.location.lng);
            if let Some(matched) = found.matched_address {
                println!("{matched}");
            }
        }
        None => {
            log::warn!("No match for '{query}'");
            println!("not found");
        }
    }

    Ok(())
}
