//! Wiring & DI. Entry point: load config, bootstrap adapters, inject into the
//! search service, run the prompt. No business logic here.

use city_weather::adapters::geocoding::NominatimGeocoder;
use city_weather::adapters::http::build_client;
use city_weather::adapters::ui::{TerminalCard, TuiInputPort};
use city_weather::adapters::weather::OpenMeteoAdapter;
use city_weather::ports::{GeocoderPort, InputPort, PresentationPort, WeatherPort};
use city_weather::shared::config::AppConfig;
use city_weather::usecases::SearchService;
use dotenv::dotenv;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    // Logs go to stderr and default to warn so they stay out of the prompt.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(_) => debug!("no .env found"),
    }

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "config load failed, using defaults");
        AppConfig::default()
    });
    let geocoding_url = cfg.geocoding_url_or_default();
    let weather_url = cfg.weather_url_or_default();
    info!(
        geocoding_url = %geocoding_url,
        weather_url = %weather_url,
        timeout_secs = cfg.request_timeout_secs,
        "endpoints configured"
    );

    let client = build_client(&cfg.user_agent_or_default(), cfg.request_timeout())
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    // --- Adapters ---
    let geocoder: Arc<dyn GeocoderPort> =
        Arc::new(NominatimGeocoder::new(client.clone(), geocoding_url));
    let weather: Arc<dyn WeatherPort> = Arc::new(OpenMeteoAdapter::new(client, weather_url));
    let card = Arc::new(TerminalCard::new());
    let surface: Arc<dyn PresentationPort> = Arc::clone(&card) as Arc<dyn PresentationPort>;

    // --- Service ---
    let search_service = Arc::new(SearchService::new(geocoder, weather, surface));

    city_weather::adapters::ui::init_ui();

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(search_service, card));
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
