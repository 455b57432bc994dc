use thiserror::Error;

pub const VALIDATION_MESSAGE: &str = "Please enter a valid city...";
pub const FETCH_FAILURE_MESSAGE: &str = "Could not fetch weather data";

/// Everything that can end a submission. None of these are fatal: the
/// controller renders the message and stays usable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WidgetError {
    /// Blank city input; caught before any request is made.
    #[error("{}", VALIDATION_MESSAGE)]
    Validation,

    /// Non-success HTTP status. The status itself is only logged.
    #[error("{}", FETCH_FAILURE_MESSAGE)]
    FetchFailure,

    /// Body did not match the expected weather shape.
    #[error("Could not read weather data: {0}")]
    Deserialization(String),

    /// DNS, connect, TLS or timeout failure.
    #[error("Could not reach weather service: {0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_messages() {
        assert_eq!(WidgetError::Validation.to_string(), "Please enter a valid city...");
        assert_eq!(WidgetError::FetchFailure.to_string(), "Could not fetch weather data");
    }

    #[test]
    fn detail_is_kept_for_parse_and_transport() {
        let err = WidgetError::Deserialization("missing field `main`".into());
        assert!(err.to_string().contains("missing field `main`"));

        let err = WidgetError::Transport("connection refused".into());
        assert!(err.to_string().contains("connection refused"));
    }
}
