use crate::app_context::AppContext;
use crate::geocode::http::GeocodeHttpHandler;
use crate::geocode::requests::GeocodeRequest;
use crate::geocode::responses::GeocodeResponse;
use crate::http::errors::ApiError;
use crate::http::extractors::ApiJson;
use axum::extract::State;
use axum::response::Json;

#[axum::debug_handler]
pub async fn geocode(
    State(app_context): State<AppContext>,
    ApiJson(payload): ApiJson<GeocodeRequest>,
) -> Result<Json<GeocodeResponse>, ApiError> {
    let response = GeocodeHttpHandler::new(&app_context)
        .geocode(payload)
        .await?;
    Ok(Json(response))
}
