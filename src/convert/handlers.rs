use crate::app_context::AppContext;
use crate::convert::errors::ConvertError;
use crate::convert::requests::ConversionRequest;
use crate::convert::responses::ConversionResponse;
use crate::convert::serialize;
use crate::fetch;
use crate::img;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::Json;
use serde_json::Value;

/// `POST /convert`: validate, fetch, decode, resize, serialize. Any stage's
/// failure short-circuits to a JSON error body.
///
/// The body is taken raw and parsed here rather than through the `Json`
/// extractor, so a malformed body answers with the same JSON error shape as
/// every other failure instead of an extractor's plain-text rejection.
#[axum::debug_handler]
pub async fn convert_image(
    State(app_context): State<AppContext>,
    body: Bytes,
) -> Result<Json<ConversionResponse>, ConvertError> {
    let body: Value = serde_json::from_slice(&body)
        .map_err(|err| ConvertError::validation(format!("Invalid JSON body: {err}")))?;
    let ConversionRequest { url, width, height } =
        ConversionRequest::from_json(&body, app_context.max_pixels)?;
    tracing::info!(
        task = "conversion",
        url = %url,
        width,
        height,
        "Processing conversion request.",
    );

    let image_bytes = fetch::image_bytes(&app_context.http_client, &url).await?;

    // Decoding, resizing and flattening are CPU-bound; keep them off the
    // runtime workers.
    let rgb_data = tokio::task::spawn_blocking(move || {
        let resized = img::decode_and_resize(&image_bytes, width, height)?;
        Ok::<_, ConvertError>(serialize::rgb_data(&resized))
    })
    .await
    .map_err(ConvertError::internal)??;

    let pixel_count = u64::from(width) * u64::from(height);
    tracing::info!(
        task = "conversion",
        url = %url,
        pixel_count,
        "Conversion succeeded.",
    );

    Ok(Json(ConversionResponse {
        success: true,
        rgb_data,
        width,
        height,
        pixel_count,
    }))
}
