use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ConversionResponse {
    pub success: bool,
    /// Semicolon-joined `R,G,B` triples in row-major pixel order.
    pub rgb_data: String,
    pub width: u32,
    pub height: u32,
    pub pixel_count: u64,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
