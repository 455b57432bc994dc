//! Core library for the `weathercard` widget.
//!
//! This crate defines:
//! - Condition-code and temperature styling (emoji, gradients, border colors)
//! - The OpenWeather fetch client
//! - The display container abstraction and the render controller
//! - Configuration & credentials handling
//!
//! It is used by `weathercard-cli`, but any host that can provide a
//! [`DisplaySurface`] can drive a [`Controller`].

pub mod client;
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod model;
pub mod style;

pub use client::{OpenWeatherClient, WeatherFetcher};
pub use config::Config;
pub use controller::{Controller, Outcome};
pub use display::{Card, DisplaySurface, Element, Tag};
pub use error::WidgetError;
pub use model::{CardView, Condition, DisplayState, WeatherQuery, WeatherRecord};
pub use style::{ConditionGroup, Hsl, TempBand};
