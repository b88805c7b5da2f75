//! End-to-end search cycles: real adapters against mock Nominatim / Open-Meteo.

use city_weather::adapters::geocoding::NominatimGeocoder;
use city_weather::adapters::http::build_client;
use city_weather::adapters::ui::{MemorySurface, SurfaceWrite};
use city_weather::adapters::weather::OpenMeteoAdapter;
use city_weather::usecases::{SearchOutcome, SearchService};
use std::sync::Arc;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// One mock server hosts both endpoints.
fn service(server: &MockServer, surface: &Arc<MemorySurface>) -> SearchService {
    #[allow(clippy::expect_used)]
    let client = build_client("city-weather-tests/1.0", None).expect("client");
    let geocoder = NominatimGeocoder::new(client.clone(), format!("{}/search", server.uri()));
    let weather = OpenMeteoAdapter::new(client, format!("{}/v1/forecast", server.uri()));
    SearchService::new(Arc::new(geocoder), Arc::new(weather), surface.clone())
}

async fn mount_paris_geocode(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Paris"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([{"lat": "48.85", "lon": "2.35"}])),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_paris_scenario() {
    let server = MockServer::start().await;
    mount_paris_geocode(&server).await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "48.85"))
        .and(query_param("longitude", "2.35"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "current": {
                "temperature_2m": 15,
                "relative_humidity_2m": 70,
                "weather_code": 3,
                "wind_speed_10m": 4.2
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let surface = Arc::new(MemorySurface::new());
    let outcome = service(&server, &surface).search("Paris").await;

    assert_eq!(outcome, SearchOutcome::Rendered);
    assert_eq!(
        surface.writes(),
        vec![
            SurfaceWrite::Title("Weather in Paris".into()),
            SurfaceWrite::Temperature("Temperature: 15°C".into()),
            SurfaceWrite::ListItem(0, "Humidity: 70%".into()),
            SurfaceWrite::ListItem(1, "Wind Speed: 4.2 m/s".into()),
            SurfaceWrite::ListItem(2, "Condition: Overcast".into()),
        ]
    );
}

#[tokio::test]
async fn test_unknown_city_never_fetches_weather() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let surface = Arc::new(MemorySurface::new());
    let outcome = service(&server, &surface).search("Zzzznotacity").await;

    assert_eq!(outcome, SearchOutcome::CityNotFound);
    assert_eq!(
        surface.alerts(),
        vec!["City not found. Please try again.".to_string()]
    );
    assert!(surface.element_writes().is_empty());
}

#[tokio::test]
async fn test_blank_input_makes_no_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let surface = Arc::new(MemorySurface::new());
    let svc = service(&server, &surface);

    assert_eq!(svc.search("").await, SearchOutcome::EmptyQuery);
    assert_eq!(svc.search("    ").await, SearchOutcome::EmptyQuery);
    assert_eq!(
        surface.alerts(),
        vec![
            "Please enter a city name.".to_string(),
            "Please enter a city name.".to_string()
        ]
    );
}

#[tokio::test]
async fn test_weather_outage_alerts_user() {
    let server = MockServer::start().await;
    mount_paris_geocode(&server).await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let surface = Arc::new(MemorySurface::new());
    let outcome = service(&server, &surface).search(" Paris ").await;

    assert_eq!(outcome, SearchOutcome::WeatherUnavailable);
    assert_eq!(
        surface.alerts(),
        vec!["Unable to fetch weather data. Please try again.".to_string()]
    );
    assert!(surface.element_writes().is_empty());
}

#[tokio::test]
async fn test_non_finite_coordinates_stop_at_city_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([{"lat": "NaN", "lon": "inf"}])),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let surface = Arc::new(MemorySurface::new());
    let outcome = service(&server, &surface).search("Paris").await;

    assert_eq!(outcome, SearchOutcome::CityNotFound);
    assert_eq!(
        surface.alerts(),
        vec!["City not found. Please try again.".to_string()]
    );
}
