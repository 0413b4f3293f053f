use image::RgbImage;
use std::fmt::Write;

/// Flattens the pixel grid into `R,G,B` tokens joined by `;`, row 0 left to
/// right, then row 1, and so on. No trailing separator.
///
/// The output string is the dominant memory cost for large targets, so the
/// pixels are streamed into one pre-sized buffer in a single forward pass
/// instead of collecting the channel tuples first.
pub fn rgb_data(image: &RgbImage) -> String {
    let pixel_count = (image.width() as usize) * (image.height() as usize);
    // Worst case is "255,255,255;" at 12 bytes per pixel.
    let mut output = String::with_capacity(pixel_count.saturating_mul(12));
    for (index, pixel) in image.pixels().enumerate() {
        if index > 0 {
            output.push(';');
        }
        let [r, g, b] = pixel.0;
        write!(output, "{r},{g},{b}").expect("Writing to a string never fails.");
    }
    output
}
