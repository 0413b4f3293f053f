use crate::convert::errors::ConvertError;
use axum::body::Bytes;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Upper bound on one whole download, connect included.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Downloads the resource at `url` and returns the whole response body.
///
/// One GET per call, no retries. A network failure, the timeout, or a non-2xx
/// status all surface as [`ConvertError::Fetch`] carrying the upstream detail.
pub async fn image_bytes(client: &Client, url: &Url) -> Result<Bytes, ConvertError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(ConvertError::fetch)?
        .error_for_status()
        .map_err(ConvertError::fetch)?;
    response.bytes().await.map_err(ConvertError::fetch)
}
