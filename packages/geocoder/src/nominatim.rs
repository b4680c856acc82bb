//! Nominatim / OpenStreetMap geocoder client.
//!
//! The public instance allows at most **1 request per second**, so
//! [`NominatimGeocoder`] spaces its requests by the configured
//! `rate_limit_ms` no matter how many tasks share it.
//!
//! See <https://nominatim.org/release-docs/develop/api/Search/>

use std::time::Duration;

use quartier_spots_geo::Coordinate;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::service::NominatimService;
use crate::{GeocodeError, GeocodedAddress, Geocoder};

/// Enforces a minimum interval between consecutive calls.
#[derive(Debug)]
pub struct Throttle {
    interval: Duration,
    last: Mutex<Option<Instant>>,
}

impl Throttle {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Mutex::new(None),
        }
    }

    /// Waits until `interval` has passed since the previous call returned.
    pub async fn wait(&self) {
        let mut last = self.last.lock().await;
        if let Some(previous) = *last {
            let ready_at = previous + self.interval;
            if Instant::now() < ready_at {
                tokio::time::sleep_until(ready_at).await;
            }
        }
        *last = Some(Instant::now());
    }
}

/// Geocoder backed by a Nominatim search endpoint.
pub struct NominatimGeocoder {
    client: reqwest::Client,
    service: NominatimService,
    throttle: Throttle,
}

impl NominatimGeocoder {
    /// Creates a geocoder for `service`.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the HTTP client cannot be built.
    pub fn new(service: NominatimService) -> Result<Self, GeocodeError> {
        let client = reqwest::Client::builder()
            .user_agent(service.user_agent.clone())
            .build()?;
        let throttle = Throttle::new(service.rate_limit());

        Ok(Self {
            client,
            service,
            throttle,
        })
    }

    /// Creates a geocoder from the embedded configuration plus environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the HTTP client cannot be built.
    pub fn from_env() -> Result<Self, GeocodeError> {
        Self::new(NominatimService::from_env())
    }
}

#[async_trait::async_trait]
impl Geocoder for NominatimGeocoder {
    async fn geocode(&self, query: &str) -> Result<Option<GeocodedAddress>, GeocodeError> {
        self.throttle.wait().await;

        log::debug!("Nominatim lookup: {query}");

        let resp = self
            .client
            .get(&self.service.base_url)
            .query(&[
                ("q", query),
                ("countrycodes", self.service.country_code.as_str()),
                ("format", "jsonv2"),
                ("limit", "1"),
            ])
            .send()
            .await?;

        if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            log::warn!("Nominatim rate limit hit for query: {query}");
            return Err(GeocodeError::RateLimited);
        }

        let body: serde_json::Value = resp.error_for_status()?.json().await?;
        let result = parse_response(&body)?;

        if result.is_none() {
            log::info!("Nominatim found no match for: {query}");
        }

        Ok(result)
    }
}

/// Parses Nominatim JSON response.
fn parse_response(body: &serde_json::Value) -> Result<Option<GeocodedAddress>, GeocodeError> {
    let results = body.as_array().ok_or_else(|| GeocodeError::Parse {
        message: "Nominatim response is not an array".to_string(),
    })?;

    let Some(first) = results.first() else {
        return Ok(None);
    };

    let lat = first["lat"]
        .as_str()
        .and_then(|s| s.parse::<f64>().ok())
        .ok_or_else(|| GeocodeError::Parse {
            message: "Missing lat in Nominatim response".to_string(),
        })?;

    let lng = first["lon"]
        .as_str()
        .and_then(|s| s.parse::<f64>().ok())
        .ok_or_else(|| GeocodeError::Parse {
            message: "Missing lon in Nominatim response".to_string(),
        })?;

    let display_name = first["display_name"].as_str().map(String::from);

    Ok(Some(GeocodedAddress {
        location: Coordinate::new(lat, lng),
        matched_address: display_name,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nominatim_result() {
        let body = serde_json::json!([{
            "lat": "49.4478",
            "lon": "11.0683",
            "display_name": "42a, Hauptstraße, Altstadt, Nürnberg, Bayern, 90402, Deutschland"
        }]);
        let result = parse_response(&body).unwrap().unwrap();
        assert!((result.location.lat - 49.4478).abs() < 1e-4);
        assert!((result.location.lng - 11.0683).abs() < 1e-4);
        assert!(result.matched_address.unwrap().contains("Nürnberg"));
    }

    #[test]
    fn parses_nominatim_empty() {
        let body = serde_json::json!([]);
        assert!(parse_response(&body).unwrap().is_none());
    }

    #[test]
    fn rejects_non_array_response() {
        let body = serde_json::json!({ "error": "Unable to geocode" });
        assert!(matches!(
            parse_response(&body),
            Err(GeocodeError::Parse { .. })
        ));
    }

    #[test]
    fn rejects_missing_coordinates() {
        let body = serde_json::json!([{ "lat": "49.4", "display_name": "x" }]);
        assert!(matches!(
            parse_response(&body),
            Err(GeocodeError::Parse { .. })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn throttle_spaces_calls() {
        let throttle = Throttle::new(Duration::from_millis(1000));
        let start = Instant::now();

        throttle.wait().await;
        assert!(start.elapsed() < Duration::from_millis(1));

        throttle.wait().await;
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }

    #[test]
    fn builds_from_embedded_service() {
        assert!(NominatimGeocoder::new(NominatimService::embedded()).is_ok());
    }
}
