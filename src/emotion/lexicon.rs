//! Word-to-emotion lexicon
//!
//! The lexicon file is a CSV with one header row. The first column holds the
//! word followed by a single marker character (exported as e.g. `sky#`), the
//! remaining columns hold one weight per label, in label order.

use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::labels::EmotionLabels;
use crate::core::error::{EmotionError, Result};

/// Read-only mapping from lowercase word to per-label weights
#[derive(Debug, Clone)]
pub struct Lexicon {
    labels: EmotionLabels,
    entries: HashMap<String, Vec<f64>>,
}

impl Lexicon {
    /// Load a lexicon CSV against the given label set
    pub fn load<P: AsRef<Path>>(path: P, labels: EmotionLabels) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| EmotionError::LexiconLoad {
            message: format!("cannot open lexicon: {}", e),
            path: path.to_path_buf(),
            line: None,
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let expected = labels.len() + 1;
        let mut entries = HashMap::new();

        for record in reader.records() {
            let record = record.map_err(|e| load_error(path, e.position().map(|p| p.line()), e.to_string()))?;
            let line = record.position().map(|p| p.line());

            if record.len() != expected {
                return Err(load_error(
                    path,
                    line,
                    format!("expected {} columns, found {}", expected, record.len()),
                ));
            }

            let word = strip_marker(&record[0])
                .ok_or_else(|| load_error(path, line, "empty word".to_string()))?;

            let weights = record
                .iter()
                .skip(1)
                .map(|field| parse_weight(field).map_err(|msg| load_error(path, line, msg)))
                .collect::<Result<Vec<f64>>>()?;

            if entries.insert(word.clone(), weights).is_some() {
                debug!("Lexicon word '{}' redefined at line {:?}", word, line);
            }
        }

        info!("Loaded {} lexicon entries from {:?}", entries.len(), path);

        Ok(Self { labels, entries })
    }

    /// Build a lexicon in memory. Words are taken as-is (no marker) and
    /// lowercased; weights are validated like file rows.
    pub fn from_entries<I, S>(labels: EmotionLabels, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<f64>)>,
        S: Into<String>,
    {
        let mut map = HashMap::new();
        for (word, weights) in entries {
            let word = word.into().to_lowercase();
            if weights.len() != labels.len() {
                return Err(EmotionError::validation(
                    "weights",
                    format!(
                        "'{}' has {} weights, expected {}",
                        word,
                        weights.len(),
                        labels.len()
                    ),
                ));
            }
            if let Some(w) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
                return Err(EmotionError::validation(
                    "weights",
                    format!("'{}' has invalid weight {}", word, w),
                ));
            }
            map.insert(word, weights);
        }
        Ok(Self { labels, entries: map })
    }

    /// Weights for a word; `None` means the word carries no emotion
    pub fn weights(&self, word: &str) -> Option<&[f64]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    pub fn labels(&self) -> &EmotionLabels {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn load_error(path: &Path, line: Option<u64>, message: String) -> EmotionError {
    EmotionError::LexiconLoad {
        message,
        path: PathBuf::from(path),
        line,
    }
}

/// Drop the trailing marker character and lowercase the word
fn strip_marker(raw: &str) -> Option<String> {
    let mut chars = raw.trim().chars();
    chars.next_back()?;
    let word = chars.as_str().to_lowercase();
    if word.is_empty() {
        None
    } else {
        Some(word)
    }
}

fn parse_weight(field: &str) -> std::result::Result<f64, String> {
    let value: f64 = field
        .trim()
        .parse()
        .map_err(|_| format!("invalid weight '{}'", field))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("weight out of range '{}'", field));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "word,disgust,surprise,neutral,anger,sad,happy,fear\n";

    fn write_lexicon(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(HEADER.as_bytes()).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_strips_marker() {
        let file = write_lexicon(
            "sky#,0,0.04407295,0.1,0,0,0.2,0\n\
             Warning#,0.005494506,0,0,0.3,0,0,0.6\n",
        );
        let lexicon = Lexicon::load(file.path(), EmotionLabels::default()).unwrap();

        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.weights("sky").unwrap()[1], 0.04407295);
        assert_eq!(lexicon.weights("warning").unwrap()[0], 0.005494506);
        assert!(lexicon.weights("sky#").is_none());
        assert!(lexicon.weights("unknown").is_none());
    }

    #[test]
    fn test_missing_file() {
        let err = Lexicon::load("/nonexistent/emotions.csv", EmotionLabels::default()).unwrap_err();
        assert!(matches!(err, EmotionError::LexiconLoad { line: None, .. }));
    }

    #[test]
    fn test_wrong_column_count() {
        let file = write_lexicon("sky#,0,0.1,0\n");
        let err = Lexicon::load(file.path(), EmotionLabels::default()).unwrap_err();
        match err {
            EmotionError::LexiconLoad { message, line, .. } => {
                assert!(message.contains("expected 8 columns, found 4"));
                assert_eq!(line, Some(2));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unparsable_weight() {
        let file = write_lexicon("sky#,0,abc,0,0,0,0,0\n");
        let err = Lexicon::load(file.path(), EmotionLabels::default()).unwrap_err();
        assert!(err.to_string().contains("invalid weight 'abc'"));
    }

    #[test]
    fn test_negative_weight() {
        let file = write_lexicon("sky#,0,-0.5,0,0,0,0,0\n");
        assert!(Lexicon::load(file.path(), EmotionLabels::default()).is_err());
    }

    #[test]
    fn test_custom_labels_drive_column_count() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "word,joy,fear").unwrap();
        writeln!(file, "sun*,0.9,0.0").unwrap();
        let labels = EmotionLabels::new(["joy", "fear"]).unwrap();
        let lexicon = Lexicon::load(file.path(), labels).unwrap();
        assert_eq!(lexicon.weights("sun"), Some(&[0.9, 0.0][..]));
    }

    #[test]
    fn test_from_entries_validates_length() {
        let err = Lexicon::from_entries(EmotionLabels::default(), [("sky", vec![0.1])]).unwrap_err();
        assert!(matches!(err, EmotionError::Validation { .. }));
    }
}
