//! Word counting
//!
//! Turns the first line of a text into a multiset of normalized words.
//! Script exports are single-line, so anything after the first line break is
//! ignored.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use indexmap::{map, IndexMap};
use tracing::debug;

use super::TokenNormalizer;
use crate::core::error::{EmotionError, Result};

/// Normalized word -> occurrence count, iterated in first-occurrence order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounts(IndexMap<String, usize>);

impl WordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `word`
    pub fn add(&mut self, word: impl Into<String>) {
        *self.0.entry(word.into()).or_insert(0) += 1;
    }

    pub fn get(&self, word: &str) -> usize {
        self.0.get(word).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> map::Iter<'_, String, usize> {
        self.0.iter()
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }
}

impl FromIterator<(String, usize)> for WordCounts {
    fn from_iter<T: IntoIterator<Item = (String, usize)>>(iter: T) -> Self {
        let mut counts = IndexMap::new();
        for (word, count) in iter {
            *counts.entry(word).or_insert(0) += count;
        }
        Self(counts)
    }
}

impl<'a> IntoIterator for &'a WordCounts {
    type Item = (&'a String, &'a usize);
    type IntoIter = map::Iter<'a, String, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Whitespace tokenizer producing [`WordCounts`]
#[derive(Debug, Clone, Default)]
pub struct WordTokenizer {
    normalizer: TokenNormalizer,
}

impl WordTokenizer {
    pub fn new(normalizer: TokenNormalizer) -> Self {
        Self { normalizer }
    }

    /// Count the words on the first line of `text`.
    ///
    /// Tokens that are empty after punctuation stripping are counted under
    /// the empty string; they never match a lexicon entry.
    pub fn tokenize(&self, text: &str) -> WordCounts {
        let mut counts = WordCounts::new();
        let first_line = text.lines().next().unwrap_or("");
        for token in first_line.split_whitespace() {
            counts.add(self.normalizer.normalize(token));
        }
        counts
    }

    /// Count the words on the first line of a file.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn tokenize_file<P: AsRef<Path>>(&self, path: P) -> Result<Option<WordCounts>> {
        let path = path.as_ref();

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No text source at {:?}", path);
                return Ok(None);
            }
            Err(e) => {
                return Err(EmotionError::Io {
                    message: format!("cannot open text source: {}", e),
                    path: Some(path.to_path_buf()),
                })
            }
        };

        let mut line = String::new();
        BufReader::new(file)
            .read_line(&mut line)
            .map_err(|e| EmotionError::Io {
                message: format!("cannot read text source: {}", e),
                path: Some(path.to_path_buf()),
            })?;

        let counts = self.tokenize(&line);
        debug!(
            "Tokenized {:?}: {} tokens, {} distinct",
            path,
            counts.total(),
            counts.len()
        );
        Ok(Some(counts))
    }
}

/// Tokenize with the default normalizer
pub fn tokenize(text: &str) -> WordCounts {
    WordTokenizer::default().tokenize(text)
}
