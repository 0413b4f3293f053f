use clap::Parser;

mod app_context;
mod cli;
mod convert;
mod fetch;
mod http;
mod img;
mod logging;

fn main() {
    let args = cli::Args::parse();
    logging::init(&args);

    // The worker-thread count is part of the server configuration, so the
    // runtime is built by hand instead of through `#[tokio::main]`.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(args.worker_threads)
        .enable_all()
        .build()
        .expect("Failed to build the tokio runtime.");

    runtime.block_on(async {
        let app_context = app_context::init(&args);
        let router = http::router::new(&args, app_context);
        let listener = tokio::net::TcpListener::bind(args.listen_address)
            .await
            .expect("Failed to bind the listen address.");
        tracing::info!("Listening on http://{}...", args.listen_address);
        axum::serve(listener, router)
            .await
            .expect("Failed to run the HTTP server.");
    });
}
