//! Tension points: dimension pairs pulling in opposite directions.
//!
//! A tension is reported when the respondent shows a pattern across two
//! dimensions that their matched profile does not itself expect. A devout
//! early adopter is unremarkable for a Digital Pioneer but worth naming for
//! a Guardian of Tradition.

use serde::Serialize;

use crate::config::ScoringConfig;
use crate::dimensions::{Dimension, DimensionMap};
use crate::profiles::Centroid;
use crate::score_maps::{SCALE_MAX, SCALE_MIN};
use crate::stats::round2;

/// How the two dimensions of a rule must sit for the rule to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TensionPattern {
    /// Both dimensions at or above the high threshold.
    BothHigh,
    /// First dimension high, second at or below the low threshold.
    HighLow,
}

#[derive(Debug, Clone, Copy)]
pub struct TensionRule {
    pub first: Dimension,
    pub second: Dimension,
    pub pattern: TensionPattern,
    pub title: &'static str,
    pub description: &'static str,
    pub suggestion: &'static str,
}

impl TensionRule {
    /// Stable key for the dimension pair, e.g. `religiosity+aiOpenness`.
    pub fn pair_key(&self) -> String {
        format!("{}+{}", self.first, self.second)
    }

    fn exhibited_by(&self, values: &DimensionMap<f64>, config: &ScoringConfig) -> bool {
        let first = *values.get(self.first);
        let second = *values.get(self.second);
        match self.pattern {
            TensionPattern::BothHigh => {
                first >= config.high_threshold && second >= config.high_threshold
            }
            TensionPattern::HighLow => {
                first >= config.high_threshold && second <= config.low_threshold
            }
        }
    }
}

pub static TENSION_RULES: &[TensionRule] = &[
    TensionRule {
        first: Dimension::Religiosity,
        second: Dimension::AiOpenness,
        pattern: TensionPattern::BothHigh,
        title: "Devout and digitally eager",
        description: concat!(
            "A strong religious life sits next to enthusiastic AI use. Many in your ",
            "tradition would expect the two to pull apart.",
        ),
        suggestion: concat!(
            "Name the places where AI serves your faith and the places where it ",
            "should step back, and talk them through with someone you trust.",
        ),
    },
    TensionRule {
        first: Dimension::AiOpenness,
        second: Dimension::SacredBoundary,
        pattern: TensionPattern::BothHigh,
        title: "Heavy use, firm limits",
        description: concat!(
            "You use AI a great deal while holding that the sacred must stay out of ",
            "its reach. The line between the two may be less clear in practice.",
        ),
        suggestion: "Write down where exactly your limit runs and check your habits against it.",
    },
    TensionRule {
        first: Dimension::EthicalConcern,
        second: Dimension::AiOpenness,
        pattern: TensionPattern::BothHigh,
        title: "Worried user",
        description: concat!(
            "Strong ethical concerns coexist with frequent use. This can be lucid ",
            "engagement or an unresolved unease.",
        ),
        suggestion: "Pick one concern and one concrete habit that would answer it.",
    },
    TensionRule {
        first: Dimension::PsychologicalPerception,
        second: Dimension::SacredBoundary,
        pattern: TensionPattern::BothHigh,
        title: "Close to the machine, guarding the sacred",
        description: concat!(
            "You relate to AI as more than a tool while insisting that spiritual ",
            "life belongs to humans alone.",
        ),
        suggestion: "Ask what the AI gives you that you do not find elsewhere, and whether a person could offer it.",
    },
    TensionRule {
        first: Dimension::FutureOrientation,
        second: Dimension::EthicalConcern,
        pattern: TensionPattern::BothHigh,
        title: "Hopeful and alarmed",
        description: "You see a bright future for AI in the church and serious ethical risks at once.",
        suggestion: "Turn the hope into conditions: what would have to be true for the risks to be handled?",
    },
    TensionRule {
        first: Dimension::Religiosity,
        second: Dimension::CommunityInfluence,
        pattern: TensionPattern::HighLow,
        title: "Faith without a sounding board",
        description: concat!(
            "Your faith is intense but your community weighs little on how you judge ",
            "AI. Discernment happens mostly alone.",
        ),
        suggestion: "Bring one question about AI to a group or a guide in your community.",
    },
    TensionRule {
        first: Dimension::AiOpenness,
        second: Dimension::FutureOrientation,
        pattern: TensionPattern::HighLow,
        title: "Using what you distrust",
        description: "You use AI readily yet expect its place in the church to be harmful or declining.",
        suggestion: "Look at whether your own use is the exception you believe it is.",
    },
    TensionRule {
        first: Dimension::Religiosity,
        second: Dimension::SacredBoundary,
        pattern: TensionPattern::HighLow,
        title: "Devout without sacred limits",
        description: concat!(
            "A strong religious life with few reservations about AI in prayer or ",
            "sacraments. Your tradition may see this differently.",
        ),
        suggestion: "Compare your view with your tradition's teaching on the sacraments.",
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TensionPoint {
    pub dimensions: [Dimension; 2],
    pub pattern: TensionPattern,
    /// In [0, 1]; how far past the thresholds the respondent sits.
    pub intensity: f64,
    pub title: &'static str,
    pub description: &'static str,
    pub suggestion: &'static str,
}

impl TensionPoint {
    pub fn pair_key(&self) -> String {
        format!("{}+{}", self.dimensions[0], self.dimensions[1])
    }
}

fn excess_above(value: f64, threshold: f64) -> f64 {
    let span = SCALE_MAX - threshold;
    if span <= 0.0 {
        return 1.0;
    }
    ((value - threshold) / span).clamp(0.0, 1.0)
}

fn excess_below(value: f64, threshold: f64) -> f64 {
    let span = threshold - SCALE_MIN;
    if span <= 0.0 {
        return 1.0;
    }
    ((threshold - value) / span).clamp(0.0, 1.0)
}

/// Scaled so that sitting exactly on the thresholds gives 0.4 and the scale
/// extremes give 1.0.
fn intensity(rule: &TensionRule, values: &DimensionMap<f64>, config: &ScoringConfig) -> f64 {
    let first = excess_above(*values.get(rule.first), config.high_threshold);
    let second = match rule.pattern {
        TensionPattern::BothHigh => excess_above(*values.get(rule.second), config.high_threshold),
        TensionPattern::HighLow => excess_below(*values.get(rule.second), config.low_threshold),
    };
    round2(0.4 + 0.6 * (first + second) / 2.0)
}

/// Tensions for `values` relative to the matched profile's centroid, most
/// intense first, capped at `max_tensions`.
pub fn detect_tensions(
    values: &DimensionMap<f64>,
    centroid: &Centroid,
    config: &ScoringConfig,
) -> Vec<TensionPoint> {
    let mut points: Vec<TensionPoint> = TENSION_RULES
        .iter()
        .filter(|rule| rule.exhibited_by(values, config))
        .filter(|rule| !rule.exhibited_by(&centroid.targets, config))
        .map(|rule| TensionPoint {
            dimensions: [rule.first, rule.second],
            pattern: rule.pattern,
            intensity: intensity(rule, values, config),
            title: rule.title,
            description: rule.description,
            suggestion: rule.suggestion,
        })
        .collect();

    points.sort_by(|a, b| {
        b.intensity
            .partial_cmp(&a.intensity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    points.truncate(config.max_tensions);
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::{PrimaryProfile, ProfileCatalog};

    fn centroid(id: PrimaryProfile) -> Centroid {
        ProfileCatalog::builtin().profile(id).unwrap().centroid
    }

    #[test]
    fn rule_pairs_are_unique_and_distinct() {
        let mut keys: Vec<String> = TENSION_RULES.iter().map(|r| r.pair_key()).collect();
        assert!(TENSION_RULES.iter().all(|r| r.first != r.second));
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), TENSION_RULES.len());
    }

    #[test]
    fn devout_adopter_is_a_tension_for_the_guardian_only() {
        let config = ScoringConfig::default();
        let mut values = DimensionMap::splat(3.0);
        values.religiosity = 4.6;
        values.ai_openness = 4.4;

        let for_guardian =
            detect_tensions(&values, &centroid(PrimaryProfile::GardienTradition), &config);
        assert!(for_guardian
            .iter()
            .any(|t| t.dimensions == [Dimension::Religiosity, Dimension::AiOpenness]));

        // The explorer centroid already sits high on both.
        let for_explorer =
            detect_tensions(&values, &centroid(PrimaryProfile::ExplorateurSpirituel), &config);
        assert!(!for_explorer
            .iter()
            .any(|t| t.dimensions == [Dimension::Religiosity, Dimension::AiOpenness]));
    }

    #[test]
    fn neutral_respondent_has_no_tensions() {
        let config = ScoringConfig::default();
        let values = DimensionMap::splat(3.0);
        for id in PrimaryProfile::ALL {
            assert!(detect_tensions(&values, &centroid(id), &config).is_empty());
        }
    }

    #[test]
    fn sorted_capped_and_bounded() {
        let config = ScoringConfig::default();
        let mut values = DimensionMap::splat(5.0);
        values.community_influence = 1.0;
        let tensions =
            detect_tensions(&values, &centroid(PrimaryProfile::ObservateurDistant), &config);
        assert_eq!(tensions.len(), config.max_tensions);
        for w in tensions.windows(2) {
            assert!(w[0].intensity >= w[1].intensity);
        }
        assert!(tensions.iter().all(|t| (0.0..=1.0).contains(&t.intensity)));
        assert_eq!(tensions[0].intensity, 1.0);
    }

    #[test]
    fn intensity_grows_with_distance_past_threshold() {
        let config = ScoringConfig::default();
        let c = centroid(PrimaryProfile::GardienTradition);
        let at = |v: f64| {
            let mut values = DimensionMap::splat(3.0);
            values.religiosity = v;
            values.ai_openness = v;
            detect_tensions(&values, &c, &config)[0].intensity
        };
        assert_eq!(at(3.5), 0.4);
        assert!(at(4.0) < at(4.5));
    }
}
