//! Token normalization
//!
//! Case-folds a raw whitespace-separated token and strips punctuation from
//! its boundaries. Punctuation inside the token is left alone, so
//! `"don't"` and `"well-known"` survive intact.

/// Characters stripped from both ends of every token
pub const BOUNDARY_PUNCTUATION: [char; 7] = ['.', ',', '!', '?', ';', ':', '-'];

/// Normalizes single tokens before counting
#[derive(Debug, Clone)]
pub struct TokenNormalizer {
    strip: Vec<char>,
}

impl Default for TokenNormalizer {
    fn default() -> Self {
        Self::new(&BOUNDARY_PUNCTUATION)
    }
}

impl TokenNormalizer {
    /// Create a normalizer stripping the given boundary characters
    pub fn new(strip: &[char]) -> Self {
        Self {
            strip: strip.to_vec(),
        }
    }

    /// Normalize one token. An all-punctuation token becomes `""`.
    pub fn normalize(&self, token: &str) -> String {
        token
            .trim_matches(|c: char| self.strip.contains(&c))
            .to_lowercase()
    }
}
