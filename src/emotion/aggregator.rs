//! Emotion rate aggregation
//!
//! Each recognized word type adds its lexicon weights once, while the
//! normalizing total grows by the word's full occurrence count. Weights are
//! not multiplied by the count.

use tracing::debug;

use super::lexicon::Lexicon;
use super::vector::{EmotionRates, EmotionVector};
use crate::text::WordCounts;

/// Combine word counts with the lexicon into per-label percentage rates.
///
/// Words are visited in first-occurrence order, which fixes the order of
/// the floating-point sum. Returns [`EmotionRates::NoSignal`] when no counted word is
/// in the lexicon.
pub fn aggregate(counts: &WordCounts, lexicon: &Lexicon) -> EmotionRates {
    let labels = lexicon.labels();
    let mut rates = vec![0.0f64; labels.len()];
    let mut total: usize = 0;

    for (word, &count) in counts {
        let Some(weights) = lexicon.weights(word) else {
            continue;
        };

        total += count;

        for (rate, weight) in rates.iter_mut().zip(weights) {
            *rate += weight;
        }
    }

    if total == 0 {
        debug!("No lexicon words among {} distinct words", counts.len());
        return EmotionRates::NoSignal;
    }

    let scale = 100.0 / total as f64;
    for rate in &mut rates {
        *rate *= scale;
    }

    EmotionRates::Measured(EmotionVector::new(labels.clone(), rates))
}
