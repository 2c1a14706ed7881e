use crate::app_context::AppContext;
use crate::http::errors::ApiError;
use crate::weather::requests::ForecastRequest;

pub struct ForecastHttpHandler<'a> {
    app_context: &'a AppContext,
}

impl<'a> ForecastHttpHandler<'a> {
    pub fn new(app_context: &'a AppContext) -> Self {
        Self { app_context }
    }

    /// Returns the provider's forecast payload untouched.
    pub async fn forecast(&self, request: ForecastRequest) -> Result<serde_json::Value, ApiError> {
        let (Some(lat), Some(lng)) = (request.lat, request.lng) else {
            return Err(ApiError::CoordinatesMissing);
        };
        let forecast = self.app_context.openweather.forecast(lat, lng).await?;
        Ok(forecast)
    }
}
