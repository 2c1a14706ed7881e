use crate::cli::Args;
use http::Method;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

pub fn layer(args: &Args) -> CorsLayer {
    // tower-http refuses `*` inside an origin list, so a wildcard entry means any origin.
    let any_origin = args.allowed_origins.is_empty()
        || args.allowed_origins.iter().any(|origin| origin == "*");
    let allow_origin = if any_origin {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(args.allowed_origins.iter().cloned())
    };
    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers(AllowHeaders::mirror_request())
        .allow_methods([Method::POST, Method::OPTIONS])
}
