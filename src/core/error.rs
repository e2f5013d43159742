//! Structured error handling for the emotion pipeline
//!
//! One error enum covers lexicon loading, script resolution, dataset
//! construction and configuration. A lack of recognized words is not an
//! error: see [`crate::emotion::EmotionRates::NoSignal`].

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias with EmotionError
pub type Result<T> = std::result::Result<T, EmotionError>;

/// Kind of work a script belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkKind {
    Book,
    Film,
}

impl fmt::Display for WorkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkKind::Book => write!(f, "book"),
            WorkKind::Film => write!(f, "film"),
        }
    }
}

/// Main error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EmotionError {
    /// Lexicon source missing or malformed
    #[error("Lexicon load error ({}{}): {message}", .path.display(), fmt_line(.line))]
    LexiconLoad {
        message: String,
        path: PathBuf,
        line: Option<u64>,
    },

    /// No script text exists for the requested work
    #[error("No {kind} script for '{title}'{} at {}", fmt_year(.year), .path.display())]
    NotFound {
        kind: WorkKind,
        title: String,
        year: Option<i32>,
        path: PathBuf,
    },

    /// Books/films tables unreadable or malformed
    #[error("Dataset error: {message}")]
    Dataset {
        message: String,
        path: Option<PathBuf>,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid caller input
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// I/O errors
    #[error("I/O error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },
}

fn fmt_line(line: &Option<u64>) -> String {
    line.map(|l| format!(", line {}", l)).unwrap_or_default()
}

fn fmt_year(year: &Option<i32>) -> String {
    year.map(|y| format!(" ({})", y)).unwrap_or_default()
}

impl EmotionError {
    /// Shorthand for a validation error on a named field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        EmotionError::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// A missing script: the caller reports "no script available" and
    /// carries on
    pub fn is_recoverable(&self) -> bool {
        matches!(self, EmotionError::NotFound { .. })
    }
}

/// Convert from std::io::Error
impl From<std::io::Error> for EmotionError {
    fn from(err: std::io::Error) -> Self {
        EmotionError::Io {
            message: err.to_string(),
            path: None,
        }
    }
}

/// Convert from csv::Error
impl From<csv::Error> for EmotionError {
    fn from(err: csv::Error) -> Self {
        EmotionError::Dataset {
            message: err.to_string(),
            path: None,
        }
    }
}
