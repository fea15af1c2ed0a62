//! Social desirability correction.
//!
//! Five Marlowe–Crowne short-form items estimate how strongly a respondent
//! over-claims virtuous behaviour. The resulting 0..10 score discounts
//! dimension confidence and deflates the dimensions most prone to flattering
//! self-report.
//!
//! The model only ever deflates: self-report inflation is assumed to be the
//! dominant bias direction for this survey.

use crate::answers::{get_string_answer, Answers};
use crate::stats::round1;

/// Score returned when no calibration item was answered.
pub const NEUTRAL_BIAS_SCORE: f64 = 5.0;

/// Bias scores at or below this leave dimension values untouched.
pub const BIAS_ADJUSTMENT_THRESHOLD: f64 = 4.0;

const ADJUSTMENT_SCALE: f64 = 1.0;

/// A calibration statement and the answer that signals over-claiming.
#[derive(Debug, Clone, Copy)]
pub struct CalibrationItem {
    pub question: &'static str,
    pub bias_target: &'static str,
}

/// "vrai" on an implausibly virtuous statement, "faux" on an admission
/// nearly everyone could honestly make.
pub const CALIBRATION_ITEMS: [CalibrationItem; 5] = [
    CalibrationItem {
        question: "mc_jamais_menti",
        bias_target: "vrai",
    },
    CalibrationItem {
        question: "mc_toujours_courtois",
        bias_target: "vrai",
    },
    CalibrationItem {
        question: "mc_jamais_rancune",
        bias_target: "vrai",
    },
    CalibrationItem {
        question: "mc_parfois_profiter",
        bias_target: "faux",
    },
    CalibrationItem {
        question: "mc_parfois_irrite",
        bias_target: "faux",
    },
];

const TRUE_FALSE_TOKENS: [&str; 2] = ["vrai", "faux"];

/// Social desirability score in [0, 10].
///
/// Only items answered with a recognised true/false token count. With no
/// usable answers the neutral 5.0 is returned: missing data is not evidence
/// of candour.
pub fn calculate_social_desirability_score(answers: &Answers) -> f64 {
    let mut answered = 0usize;
    let mut matches = 0usize;
    for item in &CALIBRATION_ITEMS {
        let answer = get_string_answer(answers, item.question);
        if !TRUE_FALSE_TOKENS.contains(&answer) {
            continue;
        }
        answered += 1;
        if answer == item.bias_target {
            matches += 1;
        }
    }
    if answered == 0 {
        return NEUTRAL_BIAS_SCORE;
    }
    round1(matches as f64 / answered as f64 * 10.0)
}

/// Confidence discount for a bias score. Non-increasing in `bias_score`.
pub fn get_bias_confidence_multiplier(bias_score: f64) -> f64 {
    if bias_score <= 3.0 {
        1.0
    } else if bias_score <= 6.0 {
        0.9
    } else if bias_score <= 8.0 {
        0.8
    } else {
        0.7
    }
}

/// Deflate `raw_score` in proportion to the bias score and the dimension's
/// sensitivity. Identity for `bias_score <= 4`; never drops below 1.
pub fn adjust_score_for_bias(raw_score: f64, bias_score: f64, sensitivity: f64) -> f64 {
    if bias_score <= BIAS_ADJUSTMENT_THRESHOLD {
        return raw_score;
    }
    let bias_factor = ((bias_score - BIAS_ADJUSTMENT_THRESHOLD) / 6.0).clamp(0.0, 1.0);
    let adjustment = bias_factor * sensitivity * ADJUSTMENT_SCALE;
    round1(raw_score - adjustment).max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::AnswerValue;

    fn with_items(tokens: &[(&str, &str)]) -> Answers {
        tokens
            .iter()
            .map(|(q, a)| (q.to_string(), AnswerValue::Choice(a.to_string())))
            .collect()
    }

    #[test]
    fn empty_answers_are_neutral_not_unbiased() {
        assert_eq!(calculate_social_desirability_score(&Answers::new()), 5.0);
    }

    #[test]
    fn counts_only_answered_items() {
        let answers = with_items(&[("mc_jamais_menti", "vrai"), ("mc_parfois_irrite", "vrai")]);
        assert_eq!(calculate_social_desirability_score(&answers), 5.0);

        let answers = with_items(&[("mc_jamais_menti", "vrai"), ("mc_parfois_irrite", "peut-etre")]);
        assert_eq!(calculate_social_desirability_score(&answers), 10.0);

        let answers = with_items(&[
            ("mc_jamais_menti", "faux"),
            ("mc_toujours_courtois", "faux"),
            ("mc_jamais_rancune", "vrai"),
        ]);
        assert_eq!(calculate_social_desirability_score(&answers), 3.3);
    }

    #[test]
    fn multiplier_steps() {
        assert_eq!(get_bias_confidence_multiplier(0.0), 1.0);
        assert_eq!(get_bias_confidence_multiplier(3.0), 1.0);
        assert_eq!(get_bias_confidence_multiplier(3.1), 0.9);
        assert_eq!(get_bias_confidence_multiplier(6.0), 0.9);
        assert_eq!(get_bias_confidence_multiplier(8.0), 0.8);
        assert_eq!(get_bias_confidence_multiplier(10.0), 0.7);
    }

    #[test]
    fn adjustment_is_identity_at_or_below_threshold() {
        for bias in [0.0, 2.0, 4.0] {
            assert_eq!(adjust_score_for_bias(3.7, bias, 0.8), 3.7);
        }
    }

    #[test]
    fn adjustment_deflates_and_floors_at_one() {
        assert_eq!(adjust_score_for_bias(4.0, 10.0, 0.8), 3.2);
        assert_eq!(adjust_score_for_bias(4.0, 7.0, 0.6), 3.7);
        assert_eq!(adjust_score_for_bias(1.2, 10.0, 0.8), 1.0);
    }
}
