use crate::config::Config;
use crate::openweather::OpenWeatherClient;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct AppContext {
    pub openweather: OpenWeatherClient,
}

pub fn init(config: Config) -> Result<AppContext, reqwest::Error> {
    let openweather = OpenWeatherClient::new(Arc::new(config))?;
    tracing::info!("Initialized OpenWeather client.");
    Ok(AppContext { openweather })
}
