use async_trait::async_trait;

use crate::domain::entities::country::Country;
use crate::usecase::ports::source::{CountrySource, FetchError};

/// Fixed endpoint: the full recognized-country set, narrowed to the fields
/// the cards render. All filtering and pagination happen client-side.
pub const COUNTRIES_ENDPOINT: &str = "https://restcountries.com/v3.1/all?status=true&fields=languages,capital,area,population,continents,currencies,name";

pub struct RestCountriesClient {
    client: reqwest::Client,
    endpoint: String,
}

impl RestCountriesClient {
    pub fn new() -> Self {
        Self::with_endpoint(COUNTRIES_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Default for RestCountriesClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CountrySource for RestCountriesClient {
    async fn fetch_all(&self) -> Result<Vec<Country>, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|err| FetchError::Transport {
                message: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|err| FetchError::Transport {
            message: err.to_string(),
        })?;

        decode_countries(&body)
    }
}

pub fn decode_countries(body: &str) -> Result<Vec<Country>, FetchError> {
    serde_json::from_str(body).map_err(|err| FetchError::Decode {
        message: err.to_string(),
    })
}
