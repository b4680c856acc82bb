#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the QuartierSpots application.
//!
//! Exposes the address, distance, slug, and terminology helpers to the
//! browser UI as JSON endpoints under `/api`, plus geocoding of normalized
//! addresses through the configured [`Geocoder`].

mod handlers;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use quartier_spots_geocoder::Geocoder;

/// Shared application state.
pub struct AppState {
    /// Geocoder for `/api/geocode`.
    pub geocoder: Arc<dyn Geocoder>,
}

/// Registers the `/api` routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/address/normalize", web::post().to(handlers::normalize_address))
            .route("/geocode", web::post().to(handlers::geocode))
            .route("/slug", web::get().to(handlers::slug))
            .route("/distance", web::get().to(handlers::distance))
            .route("/boundary/check", web::post().to(handlers::boundary_check))
            .route("/terms", web::get().to(handlers::terms))
            .route("/presets/radius", web::get().to(handlers::radius_presets))
            .route(
                "/presets/terminology",
                web::get().to(handlers::terminology_presets),
            ),
    );
}

/// Starts the HTTP server on `BIND_ADDR`:`PORT` (default `127.0.0.1:8080`).
///
/// # Errors
///
/// Returns an error if the server fails to bind or encounters a runtime
/// error.
pub async fn run_server(geocoder: Arc<dyn Geocoder>) -> std::io::Result<()> {
    let state = web::Data::new(AppState { geocoder });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
