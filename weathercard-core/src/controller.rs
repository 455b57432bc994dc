//! Turns form submissions into rendered cards.
//!
//! Every submission takes a fresh token. A finished lookup is rendered only if
//! its token is still the newest one issued, so overlapping submissions can
//! never leave an older city on screen.

use std::sync::{
    Mutex, MutexGuard, PoisonError,
    atomic::{AtomicU64, Ordering},
};

use tracing::{debug, error};

use crate::{
    client::WeatherFetcher,
    display::{DisplaySurface, Element},
    error::WidgetError,
    model::{CardView, DisplayState, WeatherQuery},
};

/// What happened to one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Populated,
    Failed(WidgetError),
    /// A newer submission was issued before this one finished; nothing rendered.
    Stale,
}

#[derive(Debug)]
struct Screen<S> {
    surface: S,
    state: DisplayState,
}

#[derive(Debug)]
pub struct Controller<F, S> {
    fetcher: F,
    screen: Mutex<Screen<S>>,
    latest: AtomicU64,
}

impl<F, S> Controller<F, S>
where
    F: WeatherFetcher,
    S: DisplaySurface,
{
    pub fn new(fetcher: F, surface: S) -> Self {
        Self {
            fetcher,
            screen: Mutex::new(Screen { surface, state: DisplayState::Idle }),
            latest: AtomicU64::new(0),
        }
    }

    /// Handle one form submission with the raw input text.
    pub async fn submit(&self, raw_input: &str) -> Outcome {
        let token = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        let query = match WeatherQuery::parse(raw_input) {
            Ok(query) => query,
            Err(err) => return self.apply(token, Err(err)),
        };

        let result =
            self.fetcher.fetch_weather(&query).await.map(|record| CardView::from(&record));
        if let Err(err) = &result {
            error!(city = %query.city(), error = %err, "Weather lookup failed");
        }

        self.apply(token, result)
    }

    pub fn state(&self) -> DisplayState {
        self.screen().state.clone()
    }

    /// Read access to the host surface, e.g. to draw it.
    pub fn with_surface<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.screen().surface)
    }

    pub fn into_surface(self) -> S {
        self.screen.into_inner().unwrap_or_else(PoisonError::into_inner).surface
    }

    fn screen(&self) -> MutexGuard<'_, Screen<S>> {
        self.screen.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn apply(&self, token: u64, result: Result<CardView, WidgetError>) -> Outcome {
        let mut screen = self.screen();

        // Checked under the lock so a render can't interleave with a newer one.
        if token != self.latest.load(Ordering::SeqCst) {
            debug!(token, "Discarding stale weather response");
            return Outcome::Stale;
        }

        match result {
            Ok(view) => {
                render_populated(&mut screen.surface, &view);
                screen.state = DisplayState::Populated(view);
                Outcome::Populated
            }
            Err(err) => {
                let message = err.to_string();
                render_error(&mut screen.surface, &message);
                screen.state = DisplayState::Error(message);
                Outcome::Failed(err)
            }
        }
    }
}

/// Full reset, then heading, temperature, humidity, description, emoji.
pub fn render_populated<S: DisplaySurface + ?Sized>(surface: &mut S, view: &CardView) {
    surface.clear();
    surface.set_visible(true);
    surface.set_background(view.gradient);

    surface.append(
        Element::heading(view.city.as_str(), "cityDisplay")
            .with_background(view.gradient)
            .with_border(view.border.as_str()),
    );
    surface.append(Element::paragraph(view.temperature.as_str(), "tempDisplay"));
    surface.append(Element::paragraph(view.humidity.as_str(), "humidityDisplay"));
    surface.append(Element::paragraph(view.description.as_str(), "descDisplay"));
    surface.append(Element::paragraph(view.emoji, "weatherEmoji"));
}

pub fn render_error<S: DisplaySurface + ?Sized>(surface: &mut S, message: &str) {
    surface.clear();
    surface.set_visible(true);
    surface.append(Element::paragraph(message, "errorDisplay"));
}
