//! Chart-ready projection of sentiment counts.
//!
//! The series is recomputed from the current `ReviewSet` whenever it is
//! needed. Chart instance lifecycle belongs to whatever renders it.

use serde::Serialize;

use crate::sentiment::{Sentiment, SentimentCounts};

/// Fill color for a chart slice, as a CSS hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ChartColor(&'static str);

impl ChartColor {
    pub const GREEN: ChartColor = ChartColor("#10b981");
    pub const GRAY: ChartColor = ChartColor("#6b7280");
    pub const RED: ChartColor = ChartColor("#ef4444");

    pub fn hex(&self) -> &'static str {
        self.0
    }
}

impl Sentiment {
    /// Fixed color table: positive green, neutral gray, negative red.
    pub fn color(&self) -> ChartColor {
        match self {
            Sentiment::Positive => ChartColor::GREEN,
            Sentiment::Neutral => ChartColor::GRAY,
            Sentiment::Negative => ChartColor::RED,
        }
    }
}

/// One labeled, colored slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartSlice {
    pub label: Sentiment,
    pub value: u32,
    pub color: ChartColor,
}

impl ChartSlice {
    /// Share of `total` as a percentage.
    pub fn percentage(&self, total: u32) -> f32 {
        if total == 0 {
            return 0.0;
        }
        (self.value as f32 / total as f32) * 100.0
    }
}

/// Ordered, zero-filtered slices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SentimentSeries(Vec<ChartSlice>);

impl SentimentSeries {
    pub fn iter(&self) -> std::slice::Iter<'_, ChartSlice> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[ChartSlice] {
        &self.0
    }

    /// Sum of slice values.
    pub fn total(&self) -> u32 {
        self.0.iter().fold(0u32, |acc, slice| acc.saturating_add(slice.value))
    }

    /// Find the slice for one class, if it survived filtering.
    pub fn get(&self, sentiment: Sentiment) -> Option<&ChartSlice> {
        self.0.iter().find(|slice| slice.label == sentiment)
    }
}

impl IntoIterator for SentimentSeries {
    type Item = ChartSlice;
    type IntoIter = std::vec::IntoIter<ChartSlice>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SentimentSeries {
    type Item = &'a ChartSlice;
    type IntoIter = std::slice::Iter<'a, ChartSlice>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Project counts into slices in `Positive, Neutral, Negative` order,
/// dropping classes with a zero count.
pub fn sentiment_series(counts: &SentimentCounts) -> SentimentSeries {
    SentimentSeries(
        counts
            .iter()
            .filter(|(_, value)| *value > 0)
            .map(|(label, value)| ChartSlice {
                label,
                value,
                color: label.color(),
            })
            .collect(),
    )
}
