//! Ordered emotion label set
//!
//! Every weight vector, emotion vector and printed column follows the order
//! of the label set it was built with.

use std::collections::HashSet;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::core::error::{EmotionError, Result};

/// Default labels, in lexicon column order
pub const DEFAULT_LABELS: [&str; 7] = [
    "disgust", "surprise", "neutral", "anger", "sad", "happy", "fear",
];

/// Fixed, ordered, non-empty set of distinct emotion names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct EmotionLabels {
    names: Vec<String>,
}

impl EmotionLabels {
    /// Build a label set, rejecting empty, blank or duplicate names
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|n| Into::<String>::into(n).trim().to_lowercase())
            .collect();

        if names.is_empty() {
            return Err(EmotionError::validation("labels", "label set is empty"));
        }

        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if name.is_empty() {
                return Err(EmotionError::validation("labels", "label names must not be blank"));
            }
            if !seen.insert(name.as_str()) {
                return Err(EmotionError::validation(
                    "labels",
                    format!("duplicate label '{}'", name),
                ));
            }
        }

        Ok(Self { names })
    }

    /// Number of labels (the length of every weight and emotion vector)
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Position of a label
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n.eq_ignore_ascii_case(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for EmotionLabels {
    fn default() -> Self {
        Self {
            names: DEFAULT_LABELS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Index<usize> for EmotionLabels {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.names[index]
    }
}

impl TryFrom<Vec<String>> for EmotionLabels {
    type Error = EmotionError;

    fn try_from(names: Vec<String>) -> Result<Self> {
        Self::new(names)
    }
}

impl From<EmotionLabels> for Vec<String> {
    fn from(labels: EmotionLabels) -> Self {
        labels.names
    }
}
