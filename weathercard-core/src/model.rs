use crate::{
    error::WidgetError,
    style::{ConditionGroup, kelvin_to_fahrenheit, temp_color_for},
};

/// A trimmed, non-empty city name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    city: String,
}

impl WeatherQuery {
    pub fn parse(raw: &str) -> Result<Self, WidgetError> {
        let city = raw.trim();
        if city.is_empty() {
            return Err(WidgetError::Validation);
        }

        Ok(Self { city: city.to_string() })
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub description: String,
    pub code: i64,
}

/// Result of one successful lookup. Always carries at least one condition.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRecord {
    pub city: String,
    pub temp_kelvin: f64,
    pub humidity_pct: u8,
    conditions: Vec<Condition>,
}

impl WeatherRecord {
    pub fn new(
        city: String,
        temp_kelvin: f64,
        humidity_pct: u8,
        conditions: Vec<Condition>,
    ) -> Result<Self, WidgetError> {
        if conditions.is_empty() {
            return Err(WidgetError::Deserialization(
                "response contained no weather conditions".to_string(),
            ));
        }

        Ok(Self { city, temp_kelvin, humidity_pct, conditions })
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Only the first condition is displayed.
    pub fn primary(&self) -> &Condition {
        &self.conditions[0]
    }

    pub fn temp_fahrenheit(&self) -> f64 {
        kelvin_to_fahrenheit(self.temp_kelvin)
    }
}

/// Display fields derived from a [`WeatherRecord`].
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub city: String,
    pub temperature: String,
    pub humidity: String,
    pub description: String,
    pub emoji: &'static str,
    pub gradient: &'static str,
    pub border: String,
}

/// Heading border width, in CSS pixels.
pub const BORDER_WIDTH_PX: u32 = 15;

impl From<&WeatherRecord> for CardView {
    fn from(record: &WeatherRecord) -> Self {
        let primary = record.primary();
        let group = ConditionGroup::from_code(primary.code);

        Self {
            city: record.city.clone(),
            temperature: format!("Temperature: {:.1}°F", record.temp_fahrenheit()),
            humidity: format!("Humidity: {}%", record.humidity_pct),
            description: primary.description.clone(),
            emoji: group.emoji(),
            gradient: group.gradient(),
            border: format!("{BORDER_WIDTH_PX}px solid {}", temp_color_for(record.temp_kelvin)),
        }
    }
}

/// What the display container currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DisplayState {
    #[default]
    Idle,
    Populated(CardView),
    Error(String),
}
