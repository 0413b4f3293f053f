use crate::convert::errors::ConvertError;
use crate::img;
use axum::body::Bytes;
use image::{DynamicImage, ImageFormat, LumaA, Rgba};
use std::io::Cursor;

fn encode_png(image: DynamicImage) -> Bytes {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .expect("Failed to encode the fixture image.");
    Bytes::from(buffer.into_inner())
}

#[test]
fn test_resizes_to_exact_target_box() {
    let source = DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
        10,
        4,
        Rgba([50, 100, 150, 255]),
    ));

    let resized =
        img::decode_and_resize(&encode_png(source), 6, 6).expect("Decoding a PNG must succeed.");

    assert_eq!((resized.width(), resized.height()), (6, 6));
}

#[test]
fn test_alpha_channel_is_dropped_not_composited() {
    // Fully transparent pixels keep their color channels on the way to RGB.
    let source = DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(8, 8, Rgba([10, 20, 30, 0])));

    let resized =
        img::decode_and_resize(&encode_png(source), 4, 4).expect("Decoding a PNG must succeed.");

    for pixel in resized.pixels() {
        assert_eq!(pixel.0, [10, 20, 30]);
    }
}

#[test]
fn test_grayscale_normalizes_to_three_channels() {
    let source =
        DynamicImage::ImageLumaA8(image::GrayAlphaImage::from_pixel(5, 5, LumaA([77, 255])));

    let resized =
        img::decode_and_resize(&encode_png(source), 3, 3).expect("Decoding a PNG must succeed.");

    for pixel in resized.pixels() {
        assert_eq!(pixel.0, [77, 77, 77]);
    }
}

#[test]
fn test_garbage_bytes_fail_to_decode() {
    let err = img::decode_and_resize(&Bytes::from_static(b"not an image"), 10, 10)
        .expect_err("Garbage bytes must not decode.");

    assert!(matches!(err, ConvertError::Decode(_)));
}
