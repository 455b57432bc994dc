//! Condition code and temperature styling.
//!
//! Everything here is pure and total: every condition code maps to exactly one
//! [`ConditionGroup`], every temperature maps to exactly one [`TempBand`].

use std::ops::Range;

/// Coarse classification of an OpenWeather condition code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionGroup {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Atmosphere,
    Clear,
    Clouds,
    Unknown,
}

/// Half-open code ranges, checked in order. Codes outside every range
/// (e.g. 400..500, 810 and up) are [`ConditionGroup::Unknown`].
const CONDITION_RANGES: [(Range<i64>, ConditionGroup); 7] = [
    (200..300, ConditionGroup::Thunderstorm),
    (300..400, ConditionGroup::Drizzle),
    (500..600, ConditionGroup::Rain),
    (600..700, ConditionGroup::Snow),
    (700..800, ConditionGroup::Atmosphere),
    (800..801, ConditionGroup::Clear),
    (801..810, ConditionGroup::Clouds),
];

impl ConditionGroup {
    pub fn from_code(code: i64) -> Self {
        CONDITION_RANGES
            .iter()
            .find(|(range, _)| range.contains(&code))
            .map_or(Self::Unknown, |(_, group)| *group)
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Thunderstorm => "⛈️",
            Self::Drizzle | Self::Rain => "🌧️",
            Self::Snow => "❄️",
            Self::Atmosphere => "🌫️",
            Self::Clear => "☀️",
            Self::Clouds => "☁️",
            Self::Unknown => "❓",
        }
    }

    /// CSS background value for the card.
    pub fn gradient(&self) -> &'static str {
        match self {
            Self::Thunderstorm => {
                "linear-gradient(180deg, hsl(207, 7.80%, 22.50%), hsl(225, 39.50%, 48.60%))"
            }
            Self::Drizzle => {
                "linear-gradient(180deg, hsl(206, 7.20%, 81.00%), hsl(202, 55.20%, 73.70%))"
            }
            Self::Rain => {
                "linear-gradient(180deg, hsl(210, 5.70%, 47.80%), hsl(202, 33.90%, 49.20%))"
            }
            Self::Snow => {
                "linear-gradient(180deg, hsl(203, 75.50%, 69.60%), hsl(202, 56.50%, 82.00%))"
            }
            Self::Atmosphere => {
                "linear-gradient(180deg, hsl(214, 4.70%, 29.20%), hsl(210, 1.60%, 48.20%))"
            }
            Self::Clear => "linear-gradient(180deg, hsl(210, 100%, 75%), hsl(40, 100%, 75%))",
            Self::Clouds => {
                "linear-gradient(180deg, hsl(210, 7.40%, 73.30%), hsl(210, 100%, 75%), hsl(40, 100%, 75%))"
            }
            Self::Unknown => "hsl(0, 0.00%, 100.00%)",
        }
    }
}

pub fn emoji_for(code: i64) -> &'static str {
    ConditionGroup::from_code(code).emoji()
}

pub fn gradient_for(code: i64) -> &'static str {
    ConditionGroup::from_code(code).gradient()
}

/// Kelvin to Fahrenheit, rounded to one decimal place (half away from zero).
pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    let fahrenheit = (kelvin - 273.15) * (9.0 / 5.0) + 32.0;
    (fahrenheit * 10.0).round() / 10.0
}

/// Temperature bucket used for the heading border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TempBand {
    DeepCold,
    Cold,
    Cool,
    Warm,
    Hot,
    VeryHot,
}

/// Inclusive upper bounds in °F. Below 0 is `DeepCold`, above the last bound
/// is `VeryHot`.
const TEMP_UPPER_BOUNDS: [(f64, TempBand); 4] = [
    (32.0, TempBand::Cold),
    (60.0, TempBand::Cool),
    (80.0, TempBand::Warm),
    (100.0, TempBand::Hot),
];

impl TempBand {
    /// NaN falls through every comparison and lands in `VeryHot`.
    pub fn from_fahrenheit(fahrenheit: f64) -> Self {
        if fahrenheit < 0.0 {
            return Self::DeepCold;
        }

        TEMP_UPPER_BOUNDS
            .iter()
            .find(|(upper, _)| fahrenheit <= *upper)
            .map_or(Self::VeryHot, |(_, band)| *band)
    }

    pub fn from_kelvin(kelvin: f64) -> Self {
        Self::from_fahrenheit(kelvin_to_fahrenheit(kelvin))
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::DeepCold => "hsl(240, 100%, 50%)",
            Self::Cold => "hsl(194, 81.00%, 50.60%)",
            Self::Cool => "hsl(201, 64.00%, 49.00%)",
            Self::Warm => "hsl(50, 100%, 50%)",
            Self::Hot => "hsl(38, 100.00%, 50.00%)",
            Self::VeryHot => "hsl(18, 100.00%, 50.00%)",
        }
    }
}

pub fn temp_color_for(kelvin: f64) -> &'static str {
    TempBand::from_kelvin(kelvin).color()
}

/// A single HSL color, as found inside CSS style values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    /// Extract the first `hsl(h, s%, l%)` triple from a CSS value such as a
    /// gradient or a border color.
    pub fn parse_css(value: &str) -> Option<Self> {
        let start = value.find("hsl(")? + "hsl(".len();
        let end = start + value[start..].find(')')?;

        let mut parts = value[start..end]
            .split(',')
            .map(|part| part.trim().trim_end_matches('%').parse::<f64>());

        let hue = parts.next()?.ok()?;
        let saturation = parts.next()?.ok()?;
        let lightness = parts.next()?.ok()?;
        if parts.next().is_some() {
            return None;
        }

        Some(Self { hue, saturation, lightness })
    }

    pub fn to_rgb(&self) -> (u8, u8, u8) {
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let l = (self.lightness / 100.0).clamp(0.0, 1.0);
        let h = self.hue.rem_euclid(360.0) / 60.0;

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u8 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;

        let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        (channel(r), channel(g), channel(b))
    }
}
