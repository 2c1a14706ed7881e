use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ForecastRequest {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}
