use clap::Parser;
use std::net::SocketAddr;


#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:5000")]
    pub listen_address: SocketAddr,
    /// Number of runtime worker threads serving requests.
    #[arg(long)]
    #[arg(default_value_t = 4)]
    pub worker_threads: usize,
    /// Largest `width * height` a conversion request may ask for.
    #[arg(long)]
    #[arg(default_value_t = 25_000_000)]
    pub max_pixels: u64,
}
