//! Text processing modules
//!
//! - Token normalization (case folding, boundary punctuation)
//! - Word counting over the first line of a script

mod normalizer;
mod tokenizer;

pub use normalizer::{TokenNormalizer, BOUNDARY_PUNCTUATION};
pub use tokenizer::{tokenize, WordCounts, WordTokenizer};
