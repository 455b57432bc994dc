//! OpenWeather current-weather client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::{fmt::Debug, time::Duration};
use tracing::{debug, instrument, warn};

use crate::{
    config::Config,
    error::WidgetError,
    model::{Condition, WeatherQuery, WeatherRecord},
};

const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

/// One network round trip per lookup, no retries.
#[async_trait]
pub trait WeatherFetcher: Send + Sync + Debug {
    async fn fetch_weather(&self, query: &WeatherQuery) -> Result<WeatherRecord, WidgetError>;
}

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: crate::config::DEFAULT_BASE_URL.to_string(),
            http: Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let api_key = config.require_api_key()?;

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;

        Ok(Self { api_key: api_key.to_owned(), base_url: config.base_url.clone(), http })
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), CURRENT_WEATHER_PATH)
    }
}

#[async_trait]
impl WeatherFetcher for OpenWeatherClient {
    #[instrument(skip(self, query), fields(city = %query.city()))]
    async fn fetch_weather(&self, query: &WeatherQuery) -> Result<WeatherRecord, WidgetError> {
        let url = self.endpoint();
        debug!(url = %url, "Fetching current weather");

        let res = self
            .http
            .get(&url)
            .query(&[("q", query.city()), ("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| WidgetError::Transport(e.to_string()))?;

        let status = res.status();
        let body = res.text().await.map_err(|e| WidgetError::Transport(e.to_string()))?;

        if !status.is_success() {
            warn!(%status, body = %truncate_body(&body), "OpenWeather request failed");
            return Err(WidgetError::FetchFailure);
        }

        parse_current(&body)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
    id: i64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
}

fn parse_current(body: &str) -> Result<WeatherRecord, WidgetError> {
    let parsed: OwCurrentResponse =
        serde_json::from_str(body).map_err(|e| WidgetError::Deserialization(e.to_string()))?;

    let conditions = parsed
        .weather
        .into_iter()
        .map(|w| Condition { description: w.description, code: w.id })
        .collect();

    WeatherRecord::new(parsed.name, parsed.main.temp, parsed.main.humidity, conditions)
}

fn truncate_body(body: &str) -> &str {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_current_keeps_all_conditions() {
        let body = r#"{
            "name": "London",
            "dt": 1700000000,
            "main": {"temp": 283.15, "feels_like": 281.0, "humidity": 70},
            "weather": [
                {"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"},
                {"id": 701, "main": "Mist", "description": "mist", "icon": "50d"}
            ]
        }"#;

        let record = parse_current(body).expect("valid body");
        assert_eq!(record.city, "London");
        assert_eq!(record.humidity_pct, 70);
        assert_eq!(record.conditions().len(), 2);
        assert_eq!(record.primary().code, 800);
        assert_eq!(record.primary().description, "clear sky");
    }

    #[test]
    fn parse_current_rejects_missing_main() {
        let body = r#"{"name": "London", "weather": [{"id": 800, "description": "clear sky"}]}"#;
        let err = parse_current(body).unwrap_err();

        match err {
            WidgetError::Deserialization(msg) => assert!(msg.contains("main")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_current_rejects_empty_weather() {
        let body = r#"{"name": "London", "main": {"temp": 280.0, "humidity": 1}, "weather": []}"#;
        assert!(matches!(parse_current(body), Err(WidgetError::Deserialization(_))));
    }

    #[test]
    fn parse_current_rejects_non_json() {
        assert!(matches!(parse_current("<html>"), Err(WidgetError::Deserialization(_))));
    }

    #[test]
    fn endpoint_joins_base_url() {
        let client = OpenWeatherClient::new("KEY".into()).with_base_url("http://localhost:1234/");
        assert_eq!(client.endpoint(), "http://localhost:1234/data/2.5/weather");

        let client = OpenWeatherClient::new("KEY".into());
        assert_eq!(client.endpoint(), "https://api.openweathermap.org/data/2.5/weather");
    }

    #[test]
    fn from_config_requires_key() {
        let err = OpenWeatherClient::from_config(&Config::default()).unwrap_err();
        assert!(err.to_string().contains("No OpenWeather API key configured"));
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let long = "é".repeat(300);
        assert_eq!(truncate_body(&long).chars().count(), 200);
        assert_eq!(truncate_body("short"), "short");
    }
}
