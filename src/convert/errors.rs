use crate::convert::responses::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use std::fmt;

/// Everything that can go wrong while serving a conversion request.
#[derive(Debug)]
pub enum ConvertError {
    /// Malformed or missing request fields.
    Validation(String),
    /// The remote URL was unreachable, timed out, or answered with a non-2xx
    /// status.
    Fetch(String),
    /// The fetched bytes were not a decodable image, or some other internal
    /// failure.
    Decode(String),
}

impl ConvertError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn fetch(err: reqwest::Error) -> Self {
        Self::Fetch(format!("Failed to download image: {err}"))
    }

    pub fn internal(err: impl fmt::Display) -> Self {
        Self::Decode(format!("An unexpected error occurred: {err}"))
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(message) | Self::Fetch(message) | Self::Decode(message) => {
                write!(f, "{message}")
            }
        }
    }
}

impl IntoResponse for ConvertError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Validation(_) | Self::Fetch(_) => StatusCode::BAD_REQUEST,
            Self::Decode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::warn!(task = "conversion", error = %self, "Conversion request failed.");
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}
