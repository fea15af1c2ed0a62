//! Dimension identifiers and per-dimension containers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The seven normalized axes of a respondent profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Religiosity,
    AiOpenness,
    SacredBoundary,
    EthicalConcern,
    PsychologicalPerception,
    CommunityInfluence,
    FutureOrientation,
}

impl Dimension {
    /// Declaration order; every per-dimension iteration follows it.
    pub const ALL: [Dimension; 7] = [
        Dimension::Religiosity,
        Dimension::AiOpenness,
        Dimension::SacredBoundary,
        Dimension::EthicalConcern,
        Dimension::PsychologicalPerception,
        Dimension::CommunityInfluence,
        Dimension::FutureOrientation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Religiosity => "religiosity",
            Self::AiOpenness => "aiOpenness",
            Self::SacredBoundary => "sacredBoundary",
            Self::EthicalConcern => "ethicalConcern",
            Self::PsychologicalPerception => "psychologicalPerception",
            Self::CommunityInfluence => "communityInfluence",
            Self::FutureOrientation => "futureOrientation",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Religiosity => "Religiosity",
            Self::AiOpenness => "AI openness",
            Self::SacredBoundary => "Sacred boundary",
            Self::EthicalConcern => "Ethical concern",
            Self::PsychologicalPerception => "Psychological perception",
            Self::CommunityInfluence => "Community influence",
            Self::FutureOrientation => "Future orientation",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == id)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value per dimension. Always total: there is no way to build one
/// with a dimension missing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionMap<T> {
    pub religiosity: T,
    pub ai_openness: T,
    pub sacred_boundary: T,
    pub ethical_concern: T,
    pub psychological_perception: T,
    pub community_influence: T,
    pub future_orientation: T,
}

impl<T> DimensionMap<T> {
    /// Build by evaluating `f` once per dimension, in declaration order.
    pub fn from_fn(mut f: impl FnMut(Dimension) -> T) -> Self {
        Self {
            religiosity: f(Dimension::Religiosity),
            ai_openness: f(Dimension::AiOpenness),
            sacred_boundary: f(Dimension::SacredBoundary),
            ethical_concern: f(Dimension::EthicalConcern),
            psychological_perception: f(Dimension::PsychologicalPerception),
            community_influence: f(Dimension::CommunityInfluence),
            future_orientation: f(Dimension::FutureOrientation),
        }
    }

    pub fn get(&self, dim: Dimension) -> &T {
        match dim {
            Dimension::Religiosity => &self.religiosity,
            Dimension::AiOpenness => &self.ai_openness,
            Dimension::SacredBoundary => &self.sacred_boundary,
            Dimension::EthicalConcern => &self.ethical_concern,
            Dimension::PsychologicalPerception => &self.psychological_perception,
            Dimension::CommunityInfluence => &self.community_influence,
            Dimension::FutureOrientation => &self.future_orientation,
        }
    }

    pub fn get_mut(&mut self, dim: Dimension) -> &mut T {
        match dim {
            Dimension::Religiosity => &mut self.religiosity,
            Dimension::AiOpenness => &mut self.ai_openness,
            Dimension::SacredBoundary => &mut self.sacred_boundary,
            Dimension::EthicalConcern => &mut self.ethical_concern,
            Dimension::PsychologicalPerception => &mut self.psychological_perception,
            Dimension::CommunityInfluence => &mut self.community_influence,
            Dimension::FutureOrientation => &mut self.future_orientation,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(Dimension, &T) -> U) -> DimensionMap<U> {
        DimensionMap::from_fn(|dim| f(dim, self.get(dim)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &T)> + '_ {
        Dimension::ALL.into_iter().map(move |dim| (dim, self.get(dim)))
    }
}

impl<T: Copy> DimensionMap<T> {
    pub fn splat(value: T) -> Self {
        Self::from_fn(|_| value)
    }
}

/// Score of one dimension for one respondent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    /// Bias-adjusted weighted average, in [1, 5].
    pub value: f64,
    /// In [0, 1]; discounted by bias and by unanswered questions.
    pub confidence: f64,
    /// Against the provisional population parameters, in [1, 99].
    pub percentile: u8,
}

/// The full seven-dimension vector.
pub type SevenDimensions = DimensionMap<DimensionScore>;

impl SevenDimensions {
    /// Plain values, for matching against centroids.
    pub fn values(&self) -> DimensionMap<f64> {
        self.map(|_, score| score.value)
    }

    pub fn mean_confidence(&self) -> f64 {
        self.iter().map(|(_, s)| s.confidence).sum::<f64>() / Dimension::ALL.len() as f64
    }
}

/// Coarse level used by legacy views and narrative text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionLevel {
    Low,
    Moderate,
    High,
}

impl DimensionLevel {
    pub fn classify(value: f64, low_threshold: f64, high_threshold: f64) -> Self {
        if value < low_threshold {
            Self::Low
        } else if value > high_threshold {
            Self::High
        } else {
            Self::Moderate
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_parse() {
        for dim in Dimension::ALL {
            assert_eq!(Dimension::parse(dim.as_str()), Some(dim));
            let json = serde_json::to_string(&dim).unwrap();
            assert_eq!(json, format!("\"{}\"", dim.as_str()));
        }
        assert_eq!(Dimension::parse("nope"), None);
    }

    #[test]
    fn map_serializes_with_all_seven_keys() {
        let map = DimensionMap::from_fn(|d| d as usize);
        let json = serde_json::to_value(map).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 7);
        for dim in Dimension::ALL {
            assert!(obj.contains_key(dim.as_str()), "missing {}", dim);
        }
    }

    #[test]
    fn get_mut_targets_the_right_field() {
        let mut map = DimensionMap::splat(0.0);
        *map.get_mut(Dimension::CommunityInfluence) = 4.5;
        assert_eq!(map.community_influence, 4.5);
        assert_eq!(map.iter().filter(|(_, v)| **v != 0.0).count(), 1);
    }
}
