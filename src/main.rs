use anyhow::Context;
use clap::Parser;
use cli::Args;
use config::Config;
use tokio::net::TcpListener;

mod app_context;
mod cli;
mod config;
mod geocode;
mod http;
mod logging;
mod openweather;
mod weather;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing `.env` file is fine, the key may come from the real environment.
    let _ = dotenv::dotenv();
    let args = Args::parse();
    logging::init();

    let config = Config::from_args(&args)?;
    let app_context =
        app_context::init(config).context("Failed to build the upstream HTTP client.")?;
    let router = http::router::new(&args, app_context);

    let listener = TcpListener::bind(args.listen_address)
        .await
        .with_context(|| format!("Failed to bind to {}.", args.listen_address))?;
    tracing::info!("Listening on {}.", args.listen_address);
    axum::serve(listener, router)
        .await
        .context("HTTP server terminated unexpectedly.")?;
    Ok(())
}
