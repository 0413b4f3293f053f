use crate::cli::Args;
use http::Method;
use tower_http::cors::{Any, CorsLayer};

/// Any origin may call any route on this service.
pub fn layer(_args: &Args) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}
