//! Emotion rate vectors

use std::ops::Index;

use serde::Serialize;

use super::labels::EmotionLabels;

/// Percentage rate of each emotion in a work's text, in label order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionVector {
    labels: EmotionLabels,
    values: Vec<f64>,
}

impl EmotionVector {
    /// Pair values with their labels. Lengths are checked by the aggregator,
    /// which is the only producer outside tests.
    pub(crate) fn new(labels: EmotionLabels, values: Vec<f64>) -> Self {
        debug_assert_eq!(labels.len(), values.len());
        Self { labels, values }
    }

    pub fn labels(&self) -> &EmotionLabels {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Rate for a label by name
    pub fn get(&self, label: &str) -> Option<f64> {
        self.labels.index_of(label).map(|i| self.values[i])
    }

    /// (label, rate) pairs in label order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels.iter().zip(self.values.iter().copied())
    }

    /// Label with the highest rate; first wins on ties
    pub fn dominant(&self) -> Option<(&str, f64)> {
        self.iter().fold(None, |best, (label, rate)| match best {
            Some((_, r)) if r >= rate => best,
            _ => Some((label, rate)),
        })
    }
}

impl Index<usize> for EmotionVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}

/// Outcome of aggregating one text against the lexicon
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "rates", rename_all = "snake_case")]
pub enum EmotionRates {
    /// At least one lexicon word was recognized
    Measured(EmotionVector),
    /// No lexicon word was recognized, so no rate can be computed
    NoSignal,
}

impl EmotionRates {
    pub fn as_vector(&self) -> Option<&EmotionVector> {
        match self {
            EmotionRates::Measured(v) => Some(v),
            EmotionRates::NoSignal => None,
        }
    }

    pub fn into_vector(self) -> Option<EmotionVector> {
        match self {
            EmotionRates::Measured(v) => Some(v),
            EmotionRates::NoSignal => None,
        }
    }

    pub fn is_no_signal(&self) -> bool {
        matches!(self, EmotionRates::NoSignal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EmotionVector {
        EmotionVector::new(
            EmotionLabels::default(),
            vec![0.5, 0.2, 0.3, 0.4, 0.6, 0.7, 0.1],
        )
    }

    #[test]
    fn test_lookup_by_label() {
        let v = sample();
        assert_eq!(v.len(), 7);
        assert_eq!(v.get("sad"), Some(0.6));
        assert_eq!(v.get("calm"), None);
        assert_eq!(v[0], 0.5);
    }

    #[test]
    fn test_dominant() {
        assert_eq!(sample().dominant(), Some(("happy", 0.7)));
    }

    #[test]
    fn test_rates_serialize_tagged() {
        let json = serde_json::to_value(EmotionRates::NoSignal).unwrap();
        assert_eq!(json["status"], "no_signal");

        let json = serde_json::to_value(EmotionRates::Measured(sample())).unwrap();
        assert_eq!(json["status"], "measured");
        assert_eq!(json["rates"]["labels"][1], "surprise");
        assert_eq!(json["rates"]["values"][5], 0.7);
    }
}
