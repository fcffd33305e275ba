//! Sentiment classification and per-class counts.

use serde::{Deserialize, Serialize};

use crate::review::Review;

/// Sentiment class assigned by the backend to titles and reviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Sentiment {
    Positive,
    /// Also used when the backend omits the field.
    #[default]
    Neutral,
    Negative,
}

impl Sentiment {
    /// All classes in canonical display order.
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Some(Sentiment::Positive),
            "neutral" => Some(Sentiment::Neutral),
            "negative" => Some(Sentiment::Negative),
            _ => None,
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Review counts per sentiment class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    #[serde(rename = "Positive", default)]
    pub positive: u32,
    #[serde(rename = "Neutral", default)]
    pub neutral: u32,
    #[serde(rename = "Negative", default)]
    pub negative: u32,
}

impl SentimentCounts {
    pub fn new(positive: u32, neutral: u32, negative: u32) -> Self {
        Self {
            positive,
            neutral,
            negative,
        }
    }

    /// Count reviews per sentiment.
    pub fn tally(reviews: &[Review]) -> Self {
        reviews.iter().fold(Self::default(), |mut counts, review| {
            match review.sentiment {
                Sentiment::Positive => counts.positive += 1,
                Sentiment::Neutral => counts.neutral += 1,
                Sentiment::Negative => counts.negative += 1,
            }
            counts
        })
    }

    /// Count for one class.
    pub fn get(&self, sentiment: Sentiment) -> u32 {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }

    /// Sum across all classes.
    pub fn total(&self) -> u32 {
        self.positive
            .saturating_add(self.neutral)
            .saturating_add(self.negative)
    }

    /// Percentage of the total for one class.
    pub fn share(&self, sentiment: Sentiment) -> f32 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.get(sentiment) as f32 / total as f32) * 100.0
    }

    /// Iterate `(class, count)` pairs in canonical order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (Sentiment, u32)> + '_ {
        Sentiment::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_wire_names() {
        assert_eq!(serde_json::to_string(&Sentiment::Positive).unwrap(), "\"Positive\"");
        let s: Sentiment = serde_json::from_str("\"Negative\"").unwrap();
        assert_eq!(s, Sentiment::Negative);
    }

    #[test]
    fn test_sentiment_from_str() {
        assert_eq!(Sentiment::from_str("neutral"), Some(Sentiment::Neutral));
        assert_eq!(Sentiment::from_str("mixed"), None);
    }

    #[test]
    fn test_counts_deserialize_backend_shape() {
        let counts: SentimentCounts =
            serde_json::from_str(r#"{"Positive": 3, "Negative": 1, "Neutral": 0}"#).unwrap();
        assert_eq!(counts, SentimentCounts::new(3, 0, 1));
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn test_counts_share() {
        let counts = SentimentCounts::new(3, 0, 1);
        assert!((counts.share(Sentiment::Positive) - 75.0).abs() < 0.001);
        assert_eq!(SentimentCounts::default().share(Sentiment::Positive), 0.0);
    }

    #[test]
    fn test_counts_tally() {
        let reviews = vec![
            Review::new(Sentiment::Positive),
            Review::new(Sentiment::Negative),
            Review::new(Sentiment::Positive),
        ];
        assert_eq!(SentimentCounts::tally(&reviews), SentimentCounts::new(2, 0, 1));
    }

    #[test]
    fn test_counts_iter_keeps_order_and_zeros() {
        let counts = SentimentCounts::new(0, 5, 2);
        let pairs: Vec<_> = counts.iter().collect();
        assert_eq!(
            pairs,
            vec![
                (Sentiment::Positive, 0),
                (Sentiment::Neutral, 5),
                (Sentiment::Negative, 2),
            ]
        );
    }
}
