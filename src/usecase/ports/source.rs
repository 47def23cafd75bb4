use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::country::Country;

/// Why the one-shot country fetch failed. All variants are terminal: the
/// fetch is attempted exactly once per application lifetime and none of
/// these trigger a retry. Messages are captured as strings so the failure
/// can live inside view state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network request failed: {message}")]
    Transport { message: String },

    #[error("server responded with HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("malformed countries payload: {message}")]
    Decode { message: String },
}

#[async_trait]
pub trait CountrySource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Country>, FetchError>;
}
