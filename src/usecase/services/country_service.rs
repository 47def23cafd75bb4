use std::sync::Arc;

use crate::domain::entities::country::Country;
use crate::usecase::ports::source::{CountrySource, FetchError};

pub struct CountryService {
    source: Arc<dyn CountrySource>,
}

impl CountryService {
    pub fn new(source: Arc<dyn CountrySource>) -> Self {
        Self { source }
    }

    pub async fn fetch_all(&self) -> Result<Vec<Country>, FetchError> {
        self.source.fetch_all().await
    }
}
