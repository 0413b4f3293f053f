use crate::convert::errors::ConvertError;
use serde_json::Value;
use url::Url;

pub const DEFAULT_WIDTH: u32 = 100;
pub const DEFAULT_HEIGHT: u32 = 100;

/// A validated `/convert` request body.
#[derive(Debug, PartialEq)]
pub struct ConversionRequest {
    pub url: Url,
    pub width: u32,
    pub height: u32,
}

impl ConversionRequest {
    /// Extracts `url`, `width` and `height` from a parsed JSON body.
    ///
    /// A missing or empty `url` fails validation, as does one that is not an
    /// HTTP(S) URL. Absent dimensions default to 100x100; present ones go
    /// through numeric coercion (see [`dimension`]) and must be positive.
    /// Requests whose `width * height` exceeds `max_pixels` are rejected
    /// before any bytes are fetched.
    pub fn from_json(body: &Value, max_pixels: u64) -> Result<Self, ConvertError> {
        let url = match body.get("url") {
            Some(Value::String(url)) if !url.is_empty() => Url::parse(url)
                .map_err(|err| ConvertError::validation(format!("Invalid image URL: {err}")))?,
            _ => return Err(ConvertError::validation("Image URL (url) is required")),
        };
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConvertError::validation(format!(
                "Image URL must be an HTTP(S) URL, got scheme `{}`",
                url.scheme()
            )));
        }

        let width = dimension(body, "width", DEFAULT_WIDTH)?;
        let height = dimension(body, "height", DEFAULT_HEIGHT)?;
        let pixel_count = u64::from(width) * u64::from(height);
        if pixel_count > max_pixels {
            return Err(ConvertError::validation(format!(
                "Requested {width}x{height} exceeds the {max_pixels} pixel limit"
            )));
        }

        Ok(Self { url, width, height })
    }
}

/// Coerces a dimension field to a positive integer: JSON integers pass
/// through, floats truncate toward zero, decimal strings parse. Anything
/// else fails validation.
fn dimension(body: &Value, field: &str, default: u32) -> Result<u32, ConvertError> {
    let value = match body.get(field) {
        None | Some(Value::Null) => return Ok(default),
        Some(value) => value,
    };
    let coerced = match value {
        Value::Number(number) => match (number.as_i64(), number.as_f64()) {
            (Some(int), _) => int,
            (None, Some(float)) => float.trunc() as i64,
            (None, None) => {
                return Err(ConvertError::validation(format!(
                    "`{field}` must be an integer"
                )))
            }
        },
        Value::String(text) => text.trim().parse::<i64>().map_err(|_| {
            ConvertError::validation(format!("`{field}` must be an integer, got `{text}`"))
        })?,
        _ => {
            return Err(ConvertError::validation(format!(
                "`{field}` must be an integer"
            )))
        }
    };
    if coerced <= 0 {
        return Err(ConvertError::validation(format!(
            "`{field}` must be a positive integer"
        )));
    }
    u32::try_from(coerced)
        .map_err(|_| ConvertError::validation(format!("`{field}` is too large")))
}
