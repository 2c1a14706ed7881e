use crate::app_context::AppContext;
use crate::http::errors::ApiError;
use crate::http::extractors::ApiJson;
use crate::weather::http::ForecastHttpHandler;
use crate::weather::requests::ForecastRequest;
use axum::extract::State;
use axum::response::Json;

#[axum::debug_handler]
pub async fn forecast(
    State(app_context): State<AppContext>,
    ApiJson(payload): ApiJson<ForecastRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let response = ForecastHttpHandler::new(&app_context)
        .forecast(payload)
        .await?;
    Ok(Json(response))
}
