use crate::app_context::AppContext;
use crate::cli::Args;
use crate::http::{cors, middleware};
use crate::{geocode, weather};
use axum::{routing::post, Router};
use tower::ServiceBuilder;

pub fn new(args: &Args, app_context: AppContext) -> Router {
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let api_routes = Router::new()
        .route("/geocode", post(geocode::handlers::geocode))
        .route("/weather", post(weather::handlers::forecast));

    Router::new().nest("/api", api_routes).with_state(app_context).layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn(middleware::tracing))
            .layer(cors_policy),
    )
}
