use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::model::CurrentConditions;

use super::{ProviderError, WeatherProvider};

const BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// OpenWeather current-weather client: one GET per lookup, metric units,
/// Russian condition descriptions. No timeout, no retry, no cancellation.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: BASE_URL.to_string(),
            http: Client::new(),
        }
    }

    #[cfg(test)]
    fn with_base_url(api_key: String, base_url: &str) -> Self {
        Self {
            api_key,
            base_url: base_url.to_string(),
            http: Client::new(),
        }
    }

    async fn fetch_current(&self, city: &str) -> Result<CurrentConditions, ProviderError> {
        let url = format!("{}/weather", self.base_url);

        tracing::debug!("requesting current weather for {city:?}");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
                ("lang", "ru"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body)?;

        let weather = parsed
            .weather
            .into_iter()
            .next()
            .ok_or(ProviderError::Malformed("weather array is empty"))?;

        let observed_at = DateTime::from_timestamp(parsed.dt, 0).unwrap_or_else(Utc::now);

        Ok(CurrentConditions {
            city: parsed.name,
            country: parsed.sys.country,
            temperature_c: parsed.main.temp,
            temp_min_c: parsed.main.temp_min,
            temp_max_c: parsed.main.temp_max,
            humidity_pct: parsed.main.humidity,
            condition_id: weather.id,
            description: weather.description,
            observed_at,
        })
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    temp_min: f64,
    temp_max: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: u16,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    dt: i64,
    sys: OwSys,
    main: OwMain,
    weather: Vec<OwWeather>,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<CurrentConditions, ProviderError> {
        self.fetch_current(city).await
    }
}

/// Error bodies can carry localized text; cut on char boundaries.
fn truncate_body(body: &str) -> String {
    const MAX_CHARS: usize = 200;

    if body.chars().count() <= MAX_CHARS {
        return body.to_string();
    }

    let cut: String = body.chars().take(MAX_CHARS).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::model::ConditionKind;
    use crate::search::{LOOKUP_FAILED_MESSAGE, SearchSession};

    fn london_body() -> serde_json::Value {
        serde_json::json!({
            "name": "London",
            "dt": 1_700_000_000i64,
            "sys": { "country": "GB" },
            "main": { "temp": 15.2, "temp_min": 13.0, "temp_max": 16.8, "humidity": 60 },
            "weather": [ { "id": 800, "description": "clear sky" } ]
        })
    }

    #[tokio::test]
    async fn maps_a_successful_response() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .and(query_param("q", "London"))
            .and(query_param("appid", "test-key"))
            .and(query_param("units", "metric"))
            .and(query_param("lang", "ru"))
            .respond_with(ResponseTemplate::new(200).set_body_json(london_body()))
            .mount(&server)
            .await;

        let provider = OpenWeatherProvider::with_base_url("test-key".to_string(), &server.uri());
        let conditions = provider.current_weather("London").await.unwrap();

        assert_eq!(conditions.city, "London");
        assert_eq!(conditions.country, "GB");
        assert_eq!(conditions.temperature_rounded(), 15);
        assert_eq!(conditions.humidity_pct, 60);
        assert_eq!(conditions.condition(), ConditionKind::Clear);
        assert_eq!(conditions.description, "clear sky");
        assert_eq!(conditions.observed_at.timestamp(), 1_700_000_000);
    }

    #[tokio::test]
    async fn not_found_maps_to_a_status_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .and(query_param("q", "Zzzzz"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "cod": "404",
                "message": "city not found"
            })))
            .mount(&server)
            .await;

        let provider = OpenWeatherProvider::with_base_url("test-key".to_string(), &server.uri());
        let err = provider.current_weather("Zzzzz").await.unwrap_err();

        match err {
            ProviderError::Status { status, body } => {
                assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
                assert!(body.contains("city not found"));
            }
            other => panic!("expected a status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_body_maps_to_a_parse_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let provider = OpenWeatherProvider::with_base_url("test-key".to_string(), &server.uri());
        let err = provider.current_weather("London").await.unwrap_err();

        assert!(matches!(err, ProviderError::Parse(_)));
    }

    #[tokio::test]
    async fn empty_weather_array_is_malformed() {
        let server = MockServer::start().await;

        let mut body = london_body();
        body["weather"] = serde_json::json!([]);

        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let provider = OpenWeatherProvider::with_base_url("test-key".to_string(), &server.uri());
        let err = provider.current_weather("London").await.unwrap_err();

        assert!(matches!(err, ProviderError::Malformed(_)));
    }

    #[tokio::test]
    async fn a_404_surfaces_as_the_fixed_search_message() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "cod": "404",
                "message": "city not found"
            })))
            .mount(&server)
            .await;

        let provider = OpenWeatherProvider::with_base_url("test-key".to_string(), &server.uri());
        let mut session = SearchSession::new(provider);
        session.input("Zzzzz");
        session.submit().await;

        assert_eq!(session.state().error(), Some(LOOKUP_FAILED_MESSAGE));
        assert!(!session.state().is_loading());
    }

    #[test]
    fn long_bodies_are_truncated_on_char_boundaries() {
        let body = "г".repeat(500);
        let truncated = truncate_body(&body);

        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.chars().count(), 203);
    }

    #[test]
    fn short_bodies_are_kept_verbatim() {
        assert_eq!(truncate_body("{}"), "{}");
    }
}
