//! HTTP handler functions for the QuartierSpots API.

use actix_web::{HttpResponse, web};
use quartier_spots_geo::{Boundary, RADIUS_PRESETS, calculate_distance_meters, format_distance};
use quartier_spots_geocoder::GeocodeError;
use quartier_spots_registration::{AddressFragments, RegistrationError};
use quartier_spots_server_models::{
    ApiAddressInput, ApiBoundaryCheck, ApiDistance, ApiError, ApiGeocodeResult, ApiHealth,
    ApiNormalizedAddress, ApiSlug, BoundaryCheckRequest, DistanceQueryParams, SlugQueryParams,
    TermsQueryParams,
};
use quartier_spots_slug::generate_slug;
use quartier_spots_terminology::{all_presets, get_spot_terms};

use crate::AppState;

fn fragments(input: ApiAddressInput) -> AddressFragments {
    AddressFragments {
        street: input.street,
        house_number: input.house_number,
        zip: input.zip,
        city: input.city,
    }
}

fn error_body(message: impl ToString) -> ApiError {
    ApiError {
        error: message.to_string(),
    }
}

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `POST /api/address/normalize`
pub async fn normalize_address(body: web::Json<ApiAddressInput>) -> HttpResponse {
    let normalized = fragments(body.into_inner()).normalize();
    HttpResponse::Ok().json(ApiNormalizedAddress::from(normalized))
}

/// `POST /api/geocode`
///
/// Normalizes the address and resolves it to coordinates. Responds with
/// `400` for an incomplete address, `404` when nothing matched, `429` when
/// the provider is rate limiting, and `502` for other provider failures.
pub async fn geocode(state: web::Data<AppState>, body: web::Json<ApiAddressInput>) -> HttpResponse {
    let normalized = fragments(body.into_inner()).normalize();
    if !normalized.is_complete() {
        return HttpResponse::BadRequest().json(error_body(RegistrationError::IncompleteAddress));
    }

    let query = normalized.one_line();
    match state.geocoder.geocode(&query).await {
        Ok(Some(found)) => HttpResponse::Ok().json(ApiGeocodeResult {
            address: ApiNormalizedAddress::from(normalized),
            location: found.location,
            matched_address: found.matched_address,
        }),
        Ok(None) => {
            log::debug!("No geocoding match for '{query}'");
            HttpResponse::NotFound().json(error_body(RegistrationError::AddressNotFound { query }))
        }
        Err(GeocodeError::RateLimited) => {
            log::warn!("Geocoder rate limited while looking up '{query}'");
            HttpResponse::TooManyRequests().json(error_body(GeocodeError::RateLimited))
        }
        Err(e) => {
            log::error!("Failed to geocode '{query}': {e}");
            HttpResponse::BadGateway().json(error_body(RegistrationError::Geocode(e)))
        }
    }
}

/// `GET /api/slug?name=...`
pub async fn slug(params: web::Query<SlugQueryParams>) -> HttpResponse {
    HttpResponse::Ok().json(ApiSlug {
        slug: generate_slug(&params.name),
    })
}

/// `GET /api/distance?fromLat=..&fromLng=..&toLat=..&toLng=..`
pub async fn distance(params: web::Query<DistanceQueryParams>) -> HttpResponse {
    let meters =
        calculate_distance_meters(params.from_lat, params.from_lng, params.to_lat, params.to_lng);
    HttpResponse::Ok().json(ApiDistance {
        meters,
        formatted: format_distance(meters),
    })
}

/// `POST /api/boundary/check`
pub async fn boundary_check(body: web::Json<BoundaryCheckRequest>) -> HttpResponse {
    let boundary = Boundary::new(body.center, body.radius_meters);
    let distance_meters = boundary.distance_from_center(&body.spot);
    HttpResponse::Ok().json(ApiBoundaryCheck {
        within: boundary.contains(&body.spot),
        distance_meters,
        formatted: format_distance(distance_meters),
    })
}

/// `GET /api/terms?singular=..&plural=..`
pub async fn terms(params: web::Query<TermsQueryParams>) -> HttpResponse {
    HttpResponse::Ok().json(get_spot_terms(
        params.singular.as_deref(),
        params.plural.as_deref(),
    ))
}

/// `GET /api/presets/radius`
pub async fn radius_presets() -> HttpResponse {
    HttpResponse::Ok().json(RADIUS_PRESETS)
}

/// `GET /api/presets/terminology`
pub async fn terminology_presets() -> HttpResponse {
    HttpResponse::Ok().json(all_presets())
}
