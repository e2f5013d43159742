//! Application configuration
//!
//! Every field has a default matching the conventional project layout, so an
//! empty file (or no file at all) is a valid configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::error::{EmotionError, Result};
use crate::emotion::{EmotionLabels, DEFAULT_LABELS};

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Emotion labels, in lexicon column order
    pub labels: Vec<String>,

    /// Lexicon CSV
    pub lexicon_path: PathBuf,

    /// Film scripts, named `<title> <year>.txt`
    pub scripts_dir: PathBuf,

    /// Book texts, named `<title>.txt`
    pub books_dir: PathBuf,

    /// Derived `books.csv` and `films.csv`
    pub data_dir: PathBuf,

    /// Author whose books are selected from the raw books dataset
    pub author: String,

    /// Raw dataset sources
    pub raw: RawSources,
}

/// Raw dataset locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSources {
    /// Goodreads-style books CSV
    pub books: PathBuf,
    /// IMDb `title.basics.tsv`
    pub film_basics: PathBuf,
    /// IMDb `title.ratings.tsv`
    pub film_ratings: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            labels: DEFAULT_LABELS.iter().map(|s| s.to_string()).collect(),
            lexicon_path: PathBuf::from("data/emotions.csv"),
            scripts_dir: PathBuf::from("scripts"),
            books_dir: PathBuf::from("books"),
            data_dir: PathBuf::from("data"),
            author: "H.G. Wells".to_string(),
            raw: RawSources::default(),
        }
    }
}

impl Default for RawSources {
    fn default() -> Self {
        Self {
            books: PathBuf::from("raw_data/books.csv"),
            film_basics: PathBuf::from("raw_data/title.basics.tsv"),
            film_ratings: PathBuf::from("raw_data/title.ratings.tsv"),
        }
    }
}

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Toml,
    Yaml,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Ok(Format::Toml),
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            other => Err(EmotionError::Config {
                message: format!("unsupported config format: {:?}", other),
                path: Some(path.to_path_buf()),
            }),
        }
    }
}

impl AppConfig {
    /// Load configuration from a `.toml`, `.yaml` or `.yml` file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = Format::from_path(path)?;

        let content = std::fs::read_to_string(path).map_err(|e| EmotionError::Io {
            message: format!("Failed to read config file: {}", e),
            path: Some(path.to_path_buf()),
        })?;

        let config: Self = match format {
            Format::Toml => toml::from_str::<Self>(&content).map_err(|e| e.to_string()),
            Format::Yaml => serde_yaml::from_str::<Self>(&content).map_err(|e| e.to_string()),
        }
        .map_err(|message| EmotionError::Config {
            message: format!("Failed to parse config file: {}", message),
            path: Some(path.to_path_buf()),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration, format chosen by extension
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content = match Format::from_path(path)? {
            Format::Toml => toml::to_string_pretty(self).map_err(|e| e.to_string()),
            Format::Yaml => serde_yaml::to_string(self).map_err(|e| e.to_string()),
        }
        .map_err(|message| EmotionError::Config {
            message: format!("Failed to serialize config: {}", message),
            path: None,
        })?;

        std::fs::write(path, content).map_err(|e| EmotionError::Io {
            message: format!("Failed to write config file: {}", e),
            path: Some(path.to_path_buf()),
        })
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<()> {
        self.emotion_labels().map(|_| ())
    }

    pub fn emotion_labels(&self) -> Result<EmotionLabels> {
        EmotionLabels::new(self.labels.iter().cloned())
    }

    pub fn books_table(&self) -> PathBuf {
        self.data_dir.join("books.csv")
    }

    pub fn films_table(&self) -> PathBuf {
        self.data_dir.join("films.csv")
    }

    /// Re-root every relative path onto `base`
    pub fn rebase(mut self, base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        for path in [
            &mut self.lexicon_path,
            &mut self.scripts_dir,
            &mut self.books_dir,
            &mut self.data_dir,
            &mut self.raw.books,
            &mut self.raw.film_basics,
            &mut self.raw.film_ratings,
        ] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
        self
    }
}
