#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Binary entry point for the QuartierSpots API server.

use std::sync::Arc;

use quartier_spots_geocoder::nominatim::NominatimGeocoder;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let geocoder = NominatimGeocoder::from_env().map_err(std::io::Error::other)?;

    quartier_spots_server::run_server(Arc::new(geocoder)).await
}
