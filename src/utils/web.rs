//! Blocking calls to third-party exchange-rate and geocoding APIs, plus a
//! plain file download.
//!
//! Lookups never fail outright: transport, status and decode errors are
//! logged and the lookup's fallback value is returned. Every call opens and
//! closes a single response body.

use log::{debug, warn};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Returned by [`ApiClient::road_for`] when no address is available
pub const ROAD_NOT_FOUND: &str = "Not found";

/// Errors that can occur while downloading
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to write '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Base URLs of the third-party services
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ApiEndpoints {
    /// Keyed conversion-rate service (`/v6/{key}/latest/{currency}`)
    #[serde(default = "default_exchange_rate_api_url")]
    pub exchange_rate_api_url: String,
    /// Keyless rates service (`/latest?base={currency}`)
    #[serde(default = "default_rates_api_url")]
    pub rates_api_url: String,
    /// Reverse geocoding service (`/geocode/v1/json?q=..&key=..`)
    #[serde(default = "default_geocode_api_url")]
    pub geocode_api_url: String,
}

fn default_exchange_rate_api_url() -> String {
    "https://v6.exchangerate-api.com".to_string()
}

fn default_rates_api_url() -> String {
    "https://api.exchangeratesapi.io".to_string()
}

fn default_geocode_api_url() -> String {
    "https://api.opencagedata.com".to_string()
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self {
            exchange_rate_api_url: default_exchange_rate_api_url(),
            rates_api_url: default_rates_api_url(),
            geocode_api_url: default_geocode_api_url(),
        }
    }
}

impl ApiEndpoints {
    /// Every service at the same base URL
    pub fn all_at(base_url: &str) -> Self {
        Self {
            exchange_rate_api_url: base_url.to_string(),
            rates_api_url: base_url.to_string(),
            geocode_api_url: base_url.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConversionRatesResponse {
    conversion_rates: HashMap<String, f64>,
}

#[derive(Debug, Deserialize)]
struct RatesResponse {
    rates: HashMap<String, f64>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    formatted: String,
}

/// Client for the exchange-rate and geocoding services
pub struct ApiClient {
    client: Client,
    endpoints: ApiEndpoints,
}

impl ApiClient {
    /// Build a client with a request timeout and rustls TLS
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(endpoints: ApiEndpoints) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .use_rustls_tls()
            .build()?;

        Ok(Self::with_client(client, endpoints))
    }

    /// Use an already configured HTTP client
    pub fn with_client(client: Client, endpoints: ApiEndpoints) -> Self {
        Self { client, endpoints }
    }

    /// Rate from `currency` to `target` from the keyed conversion-rate
    /// service, or `fallback` when the lookup fails or lacks `target`.
    pub fn conversion_rate(
        &self,
        api_key: &str,
        currency: &str,
        target: &str,
        fallback: f64,
    ) -> f64 {
        debug!("Fetching conversion rates for {}", currency);
        let url = format!(
            "{}/v6/{}/latest/{}",
            trim_base(&self.endpoints.exchange_rate_api_url),
            api_key,
            currency
        );

        match self.get_json::<ConversionRatesResponse>(&url, &[]) {
            Ok(response) => match response.conversion_rates.get(target) {
                Some(rate) => *rate,
                None => {
                    warn!("No {} rate for {}, falling back on {}", target, currency, fallback);
                    fallback
                }
            },
            Err(e) => {
                warn!("Conversion rate lookup failed, falling back on {}. Error: {}", fallback, e);
                fallback
            }
        }
    }

    /// Rate from `currency` to `to_currency` from the keyless rates service,
    /// `0.0` when the lookup fails or lacks `to_currency`.
    pub fn exchange_rate_for(&self, currency: &str, to_currency: &str) -> f64 {
        debug!("Fetching rates based on {}", currency);
        let url = format!("{}/latest", trim_base(&self.endpoints.rates_api_url));

        match self.get_json::<RatesResponse>(&url, &[("base", currency)]) {
            Ok(response) => response.rates.get(to_currency).copied().unwrap_or_else(|| {
                warn!("No {} rate based on {}", to_currency, currency);
                0.0
            }),
            Err(e) => {
                warn!("Exchange rate lookup failed: {}", e);
                0.0
            }
        }
    }

    /// First formatted address for a coordinate pair, or [`ROAD_NOT_FOUND`]
    pub fn road_for(&self, lat: &str, long: &str, api_key: &str) -> String {
        let url = format!("{}/geocode/v1/json", trim_base(&self.endpoints.geocode_api_url));
        let position = format!("{} {}", lat, long);

        let query = [("q", position.as_str()), ("key", api_key)];
        match self.get_json::<GeocodeResponse>(&url, &query) {
            Ok(response) => response
                .results
                .into_iter()
                .next()
                .map(|result| result.formatted)
                .unwrap_or_else(|| ROAD_NOT_FOUND.to_string()),
            Err(e) => {
                warn!("Geocoding {} failed: {}", position, e);
                ROAD_NOT_FOUND.to_string()
            }
        }
    }

    /// Stream the body at `url` into a new file at `path`.
    ///
    /// Returns the number of bytes written. Non-success statuses are errors
    /// and leave no file behind.
    pub fn download_to_file(&self, url: &str, path: &Path) -> Result<u64, ApiError> {
        let mut response = self.client.get(url).send()?.error_for_status()?;

        let io_error = |source: std::io::Error| ApiError::Io {
            path: path.display().to_string(),
            source,
        };
        let mut file = File::create(path).map_err(io_error)?;
        let written = std::io::copy(&mut response, &mut file).map_err(io_error)?;

        debug!("Saved {} bytes from {} to {:?}", written, url, path);
        Ok(written)
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, reqwest::Error> {
        self.client
            .get(url)
            .query(query)
            .send()?
            .error_for_status()?
            .json::<T>()
    }
}

fn trim_base(url: &str) -> &str {
    url.trim_end_matches('/')
}
