//! # emotions-comparison
//!
//! Compares the emotional tone of books with their film adaptations.
//!
//! A lexicon maps words to per-emotion weights. The first line of a book
//! text or film script is tokenized into word counts, matched against the
//! lexicon and normalized into an emotion rate vector. Rates and ratings of
//! a book and a film are then shown side by side.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use emotions_comparison::{EmotionLabels, Lexicon, ScriptResolver, WorkKind};
//!
//! let lexicon = Lexicon::load("data/emotions.csv", EmotionLabels::default())?;
//! let resolver = ScriptResolver::new(Arc::new(lexicon), "books", "scripts");
//!
//! let rates = resolver.emotions_for(WorkKind::Film, "The Invisible Man", Some(1933))?;
//! if let Some(vector) = rates.as_vector() {
//!     for (label, rate) in vector.iter() {
//!         println!("{label}: {rate:.3}");
//!     }
//! }
//! ```
//!
//! ## Pipeline
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | Tokenize | [`text`] | [`WordCounts`] |
//! | Aggregate | [`emotion`] | [`EmotionRates`] |
//! | Resolve | [`script`] | rates per book/film |
//! | Present | [`report`] | table, chart |

pub mod app;
pub mod config;
pub mod core;
pub mod dataset;
pub mod emotion;
pub mod report;
pub mod script;
pub mod text;

pub use config::AppConfig;
pub use core::error::{EmotionError, Result, WorkKind};
pub use dataset::{BookRecord, Catalogue, FilmRecord};
pub use emotion::{aggregate, EmotionLabels, EmotionRates, EmotionVector, Lexicon};
pub use script::{ScriptResolver, WorkId};
pub use text::{tokenize, WordCounts, WordTokenizer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
