use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct GeocodingQuery<'a> {
    pub q: &'a str,
    pub limit: u8,
    pub appid: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ForecastQuery<'a> {
    pub lat: f64,
    pub lon: f64,
    pub units: &'a str,
    pub appid: &'a str,
}

/// One candidate returned by the direct geocoding endpoint. Only the coordinates are kept.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GeocodingMatch {
    pub lat: f64,
    pub lon: f64,
}
