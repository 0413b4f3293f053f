use crate::convert::errors::ConvertError;
use axum::body::Bytes;
use image::imageops::FilterType;
use image::{ImageReader, RgbImage};
use std::io::Cursor;

#[cfg(test)]
pub mod tests;

/// Decodes `image_bytes` and stretches the result to exactly
/// `width` x `height` RGB pixels.
///
/// The format is sniffed from the bytes themselves, never from a declared
/// content type or URL suffix. The target box is honored regardless of the
/// source aspect ratio, so a mismatched request comes back distorted rather
/// than letterboxed. Alpha channels are dropped, not composited.
pub fn decode_and_resize(
    image_bytes: &Bytes,
    width: u32,
    height: u32,
) -> Result<RgbImage, ConvertError> {
    let cursor = Cursor::new(image_bytes.as_ref());
    let image = ImageReader::new(cursor)
        .with_guessed_format()
        .map_err(ConvertError::internal)?
        .decode()
        .map_err(ConvertError::internal)?;
    let resized = image.resize_exact(width, height, FilterType::Lanczos3);
    Ok(resized.to_rgb8())
}
