// SPDX-License-Identifier: MPL-2.0
//! Question loading from the embedded set, a local file, or a URL.
//!
//! The payload is a JSON array of
//! `{ "question": string, "options": [string, ...], "correct": integer }`.
//! Every entry is validated into a domain [`Question`]; the first invalid
//! entry fails the whole load.

use crate::domain::quiz::{Question, QuestionError, QuestionSet};
use crate::error::LoadError;
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

#[derive(RustEmbed)]
#[folder = "assets/questions/"]
struct Asset;

/// File name of the built-in question set inside `assets/questions/`.
const EMBEDDED_FILE: &str = "default.json";

/// Where questions come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QuestionSource {
    /// The set compiled into the binary.
    #[default]
    Embedded,
    /// A JSON file on disk.
    File(PathBuf),
    /// A JSON document fetched with a single HTTP GET.
    Url(String),
}

impl QuestionSource {
    /// Interprets a user-supplied location: `http(s)://` prefixes are URLs,
    /// anything else is a file path.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            QuestionSource::Embedded
        } else if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            QuestionSource::Url(trimmed.to_string())
        } else {
            QuestionSource::File(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for QuestionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionSource::Embedded => write!(f, "built-in questions"),
            QuestionSource::File(path) => write!(f, "{}", path.display()),
            QuestionSource::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Wire shape of one question.
#[derive(Debug, Deserialize)]
struct RawQuestion {
    question: String,
    options: Vec<String>,
    correct: usize,
}

/// Parses and validates a JSON question list.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] for JSON that does not match the wire shape,
/// [`LoadError::Empty`] for an empty list, and [`LoadError::Malformed`] for the
/// first question that breaks a domain rule.
pub fn parse_questions(bytes: &[u8]) -> Result<QuestionSet, LoadError> {
    let raw: Vec<RawQuestion> = serde_json::from_slice(bytes)?;
    if raw.is_empty() {
        return Err(LoadError::Empty);
    }

    let questions = raw
        .into_iter()
        .enumerate()
        .map(|(i, q)| {
            Question::new(q.question, q.options, q.correct).map_err(|err| malformed(i, &err))
        })
        .collect::<Result<Vec<_>, _>>()?;

    QuestionSet::new(questions).map_err(|_| LoadError::Empty)
}

fn malformed(index: usize, err: &QuestionError) -> LoadError {
    LoadError::Malformed {
        position: index + 1,
        reason: err.to_string(),
    }
}

/// Loads the built-in question set.
///
/// # Errors
///
/// Fails only if the embedded asset is missing or invalid, which indicates a
/// broken build.
pub fn load_embedded() -> Result<QuestionSet, LoadError> {
    let file = Asset::get(EMBEDDED_FILE).ok_or(LoadError::MissingEmbedded)?;
    parse_questions(file.data.as_ref())
}

/// Loads questions from `source`. Runs once per controller; no retry.
///
/// # Errors
///
/// See [`LoadError`] for the failure cases of each source.
pub async fn load(source: QuestionSource) -> Result<QuestionSet, LoadError> {
    tracing::info!(%source, "loading questions");
    match source {
        QuestionSource::Embedded => load_embedded(),
        QuestionSource::File(path) => {
            let bytes = tokio::fs::read(&path)
                .await
                .map_err(|e| LoadError::Io(format!("{}: {e}", path.display())))?;
            parse_questions(&bytes)
        }
        QuestionSource::Url(url) => {
            let response = reqwest::get(&url)
                .await
                .map_err(|e| LoadError::Http(e.to_string()))?;
            let status = response.status();
            if !status.is_success() {
                return Err(LoadError::Http(format!("HTTP {status}")));
            }
            let bytes = response
                .bytes()
                .await
                .map_err(|e| LoadError::Http(e.to_string()))?;
            parse_questions(&bytes)
        }
    }
}
