use crate::app_context::AppContext;
use crate::cli::Args;
use crate::convert;
use crate::http::cors;
use axum::{routing::post, Router};

pub fn new(args: &Args, app_context: AppContext) -> Router {
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    Router::new()
        .route("/convert", post(convert::handlers::convert_image))
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(crate::http::middleware::tracing))
}
