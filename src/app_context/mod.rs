use crate::cli::Args;
use crate::fetch::FETCH_TIMEOUT;
use reqwest::Client;

/// State shared by every request handler. The client is internally
/// synchronized; nothing here is mutated after startup.
#[derive(Clone)]
pub struct AppContext {
    pub http_client: Client,
    pub max_pixels: u64,
}

pub fn init(args: &Args) -> AppContext {
    let http_client = Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .expect("Failed to build the HTTP client.");
    AppContext {
        http_client,
        max_pixels: args.max_pixels,
    }
}
