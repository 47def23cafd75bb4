use std::collections::BTreeMap;

use serde::Deserialize;

/// One country record as served by the REST Countries API. Every field
/// except the official name may be absent from the payload; absent fields
/// deserialize to `None` and render as a placeholder, never as an error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Country {
    pub name: CountryName,
    pub capital: Option<Vec<String>>,
    pub area: Option<f64>,
    pub population: Option<u64>,
    pub continents: Option<Vec<String>>,
    pub languages: Option<BTreeMap<String, String>>,
    pub currencies: Option<BTreeMap<String, Currency>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountryName {
    pub official: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Currency {
    pub name: String,
    pub symbol: Option<String>,
}
