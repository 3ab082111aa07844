// SPDX-License-Identifier: MPL-2.0
//! Error types shared across the crate.
//!
//! [`Error`] covers application-level failures (configuration, audio device,
//! I/O). [`LoadError`] is the question-loading failure that ends a session
//! before it starts; it is `Clone` so it can travel inside iced messages.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Audio Error: {0}")]
    Audio(String),
}

/// Reasons a question set could not be obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The source file could not be read.
    #[error("Failed to read questions: {0}")]
    Io(String),

    /// The HTTP request failed or returned a non-success status.
    #[error("Failed to load questions: {0}")]
    Http(String),

    /// The payload is not valid JSON of the expected shape.
    #[error("Invalid question data: {0}")]
    Parse(String),

    /// The payload parsed, but a question breaks an invariant.
    #[error("Question {position}: {reason}")]
    Malformed {
        /// One-based position of the offending question.
        position: usize,
        reason: String,
    },

    /// The source contained no questions at all.
    #[error("The question list is empty")]
    Empty,

    /// The embedded default question set is missing from the binary.
    #[error("Embedded question set not found")]
    MissingEmbedded,
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn audio_error_formats_properly() {
        let err = Error::Audio("no device".into());
        assert_eq!(format!("{}", err), "Audio Error: no device");
    }

    #[test]
    fn malformed_error_names_position() {
        let err = LoadError::Malformed {
            position: 3,
            reason: "needs at least 2 options".into(),
        };
        assert_eq!(err.to_string(), "Question 3: needs at least 2 options");
    }

    #[test]
    fn json_error_maps_to_parse() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err: LoadError = json_err.into();
        assert!(matches!(err, LoadError::Parse(_)));
    }
}
