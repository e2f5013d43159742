//! Emotion rate computation
//!
//! - `labels`: the ordered emotion label set
//! - `lexicon`: word -> per-label weights
//! - `aggregator`: word counts + lexicon -> emotion rates
//! - `vector`: emotion vectors and the measured/no-signal outcome

pub mod aggregator;
pub mod labels;
pub mod lexicon;
pub mod vector;

pub use aggregator::aggregate;
pub use labels::{EmotionLabels, DEFAULT_LABELS};
pub use lexicon::Lexicon;
pub use vector::{EmotionRates, EmotionVector};
