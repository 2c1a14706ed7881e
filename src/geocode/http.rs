use crate::app_context::AppContext;
use crate::geocode::requests::GeocodeRequest;
use crate::geocode::responses::GeocodeResponse;
use crate::http::errors::ApiError;

pub struct GeocodeHttpHandler<'a> {
    app_context: &'a AppContext,
}

impl<'a> GeocodeHttpHandler<'a> {
    pub fn new(app_context: &'a AppContext) -> Self {
        Self { app_context }
    }

    pub async fn geocode(&self, request: GeocodeRequest) -> Result<GeocodeResponse, ApiError> {
        let location = request.query()?;
        let matches = self.app_context.openweather.geocode(&location).await?;
        // The upstream query asks for a single result, but only the first one counts either way.
        let best_match = matches
            .into_iter()
            .next()
            .ok_or(ApiError::LocationNotFound)?;
        Ok(GeocodeResponse {
            lat: best_match.lat,
            lng: best_match.lon,
        })
    }
}
