use clap::Parser;
use http::HeaderValue;
use std::net::SocketAddr;
use url::Url;

#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "127.0.0.1:5000")]
    pub listen_address: SocketAddr,
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub openweather_api_key: Option<String>,
    #[arg(long)]
    #[arg(default_value = "http://api.openweathermap.org/geo/1.0/direct")]
    pub geocoding_url: Url,
    #[arg(long)]
    #[arg(default_value = "https://api.openweathermap.org/data/2.5/forecast")]
    pub forecast_url: Url,
    /// Upstream requests wait indefinitely when unset.
    #[arg(long)]
    pub upstream_timeout_secs: Option<u64>,
    /// Comma-separated list of origins allowed to call the API. Any origin when empty.
    #[arg(long, value_delimiter = ',')]
    pub allowed_origins: Vec<HeaderValue>,
}
