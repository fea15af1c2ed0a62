//! The seven dimension calculators.
//!
//! Each dimension is a declarative list of contributing questions. Clergy and
//! laypeople see different questions for the same construct, so the list is
//! chosen from the respondent's role before scoring.

use crate::answers::{
    get_matrix_answer, get_string_answer, number_answer, AnswerValue, Answers, RespondentRole,
};
use crate::bias::{
    adjust_score_for_bias, calculate_social_desirability_score, get_bias_confidence_multiplier,
};
use crate::config::ScoringConfig;
use crate::score_maps::{
    ScoreMap, AGREEMENT, AI_USAGE_FREQUENCY, BELIEF_INTENSITY, COMMUNITY_INFLUENCE,
    ETHICAL_CONCERN, FUTURE_ADOPTION, FUTURE_ORIENTATION, LAY_PRAYER_USE, MINISTRY_USAGE,
    PASTORAL_CARE, PSYCHOLOGICAL_PERCEPTION, RELIGIOUS_FREQUENCY, SACRED_BOUNDARY, SCALE_MAX,
    SCALE_MIN,
};
use crate::stats::{
    calculate_percentile, calculate_weighted_average, round1, round2, WeightedValue,
};

use super::types::{Dimension, DimensionScore, SevenDimensions};

/// How one question's answer becomes a 1..5 value.
#[derive(Debug, Clone, Copy)]
pub enum Scorer {
    /// Single choice looked up in a score map.
    Token(ScoreMap),
    /// Numeric answer, clamped to the scale.
    Scale,
    /// Multi-select: one point per selection on top of 1, capped at 5.
    /// Selecting `none_token` scores 1.
    Count { none_token: &'static str },
    /// Matrix question: mean of its numeric rows, clamped to the scale.
    Matrix,
}

/// One question contributing to a dimension.
#[derive(Debug, Clone, Copy)]
pub struct QuestionItem {
    pub question: &'static str,
    pub weight: f64,
    pub scorer: Scorer,
}

const fn item(question: &'static str, weight: f64, scorer: Scorer) -> QuestionItem {
    QuestionItem {
        question,
        weight,
        scorer,
    }
}

fn clamp_scale(v: f64) -> f64 {
    v.clamp(SCALE_MIN, SCALE_MAX)
}

/// Score one answer; `None` when the question was skipped or has the wrong shape.
pub fn score_item(answers: &Answers, item: &QuestionItem) -> Option<f64> {
    match item.scorer {
        Scorer::Token(map) => {
            let token = get_string_answer(answers, item.question);
            if token.is_empty() {
                None
            } else {
                Some(map.score(token))
            }
        }
        Scorer::Scale => number_answer(answers, item.question).map(clamp_scale),
        Scorer::Count { none_token } => match answers.get(item.question) {
            Some(AnswerValue::Multi(selected)) => {
                if selected.iter().any(|s| s == none_token) {
                    Some(SCALE_MIN)
                } else {
                    Some(clamp_scale(1.0 + selected.len() as f64))
                }
            }
            _ => None,
        },
        Scorer::Matrix => {
            let rows = get_matrix_answer(answers, item.question)?;
            let values: Vec<f64> = rows
                .values()
                .filter(|v| v.is_finite())
                .map(|v| clamp_scale(*v))
                .collect();
            if values.is_empty() {
                return None;
            }
            Some(values.iter().sum::<f64>() / values.len() as f64)
        }
    }
}

// ---------------------------------------------------------------------
//  Question lists
// ---------------------------------------------------------------------

const RELIGIOSITY_COMMON: &[QuestionItem] = &[
    item("crs_intellect", 1.0, Scorer::Token(RELIGIOUS_FREQUENCY)),
    item("crs_ideologie", 1.2, Scorer::Token(BELIEF_INTENSITY)),
    item("crs_pratique_privee", 1.0, Scorer::Token(RELIGIOUS_FREQUENCY)),
    item("crs_experience", 0.8, Scorer::Token(RELIGIOUS_FREQUENCY)),
];
// Clergy attend services by vocation, so public practice says nothing for them.
const RELIGIOSITY_CLERGY: &[QuestionItem] = &[item(
    "clerge_vie_spirituelle",
    1.0,
    Scorer::Token(RELIGIOUS_FREQUENCY),
)];
const RELIGIOSITY_LAY: &[QuestionItem] = &[item(
    "crs_pratique_publique",
    1.0,
    Scorer::Token(RELIGIOUS_FREQUENCY),
)];

const AI_OPENNESS_COMMON: &[QuestionItem] = &[
    item("ia_frequence_usage", 1.2, Scorer::Token(AI_USAGE_FREQUENCY)),
    item("ia_outils_utilises", 0.6, Scorer::Count { none_token: "aucun" }),
    item("ia_confort", 1.0, Scorer::Scale),
];
const AI_OPENNESS_CLERGY: &[QuestionItem] = &[
    item("clerge_ia_ministere", 1.0, Scorer::Matrix),
    item("clerge_ia_homelie", 0.8, Scorer::Token(MINISTRY_USAGE)),
    item("clerge_ia_pastorale", 0.8, Scorer::Token(PASTORAL_CARE)),
];
const AI_OPENNESS_LAY: &[QuestionItem] = &[item(
    "laic_ia_priere",
    0.8,
    Scorer::Token(LAY_PRAYER_USE),
)];

const SACRED_BOUNDARY_ITEMS: &[QuestionItem] = &[
    item("sacre_ia_sacrements", 1.2, Scorer::Token(SACRED_BOUNDARY)),
    item("sacre_ia_priere_generee", 1.0, Scorer::Token(SACRED_BOUNDARY)),
    item("sacre_limites", 0.6, Scorer::Count { none_token: "aucune" }),
    item("sacre_spiritualite_authentique", 0.8, Scorer::Scale),
];

const ETHICAL_CONCERN_ITEMS: &[QuestionItem] = &[
    item("ethique_inquietude_globale", 1.2, Scorer::Token(ETHICAL_CONCERN)),
    item("ethique_preoccupations", 1.0, Scorer::Matrix),
    item("ethique_regulation", 0.8, Scorer::Token(AGREEMENT)),
];

const PSYCHOLOGICAL_PERCEPTION_ITEMS: &[QuestionItem] = &[
    item("psy_perception_ia", 1.0, Scorer::Token(PSYCHOLOGICAL_PERCEPTION)),
    item("psy_attachement", 1.0, Scorer::Scale),
    item("psy_reconfort", 0.8, Scorer::Token(AGREEMENT)),
];

const COMMUNITY_INFLUENCE_ITEMS: &[QuestionItem] = &[
    item("communaute_influence", 1.2, Scorer::Token(COMMUNITY_INFLUENCE)),
    item("communaute_discussion", 0.8, Scorer::Token(RELIGIOUS_FREQUENCY)),
    item("communaute_suivi_autorite", 1.0, Scorer::Token(AGREEMENT)),
];

const FUTURE_ORIENTATION_ITEMS: &[QuestionItem] = &[
    item("futur_ia_eglise", 1.2, Scorer::Token(FUTURE_ORIENTATION)),
    item("futur_adoption", 1.0, Scorer::Token(FUTURE_ADOPTION)),
    item("futur_formation", 0.8, Scorer::Token(AGREEMENT)),
];

/// Questions that feed `dim` for a respondent with `role`.
pub fn relevant_questions(dim: Dimension, role: RespondentRole) -> Vec<QuestionItem> {
    let (common, clergy, lay): (&[QuestionItem], &[QuestionItem], &[QuestionItem]) = match dim {
        Dimension::Religiosity => (RELIGIOSITY_COMMON, RELIGIOSITY_CLERGY, RELIGIOSITY_LAY),
        Dimension::AiOpenness => (AI_OPENNESS_COMMON, AI_OPENNESS_CLERGY, AI_OPENNESS_LAY),
        Dimension::SacredBoundary => (SACRED_BOUNDARY_ITEMS, &[], &[]),
        Dimension::EthicalConcern => (ETHICAL_CONCERN_ITEMS, &[], &[]),
        Dimension::PsychologicalPerception => (PSYCHOLOGICAL_PERCEPTION_ITEMS, &[], &[]),
        Dimension::CommunityInfluence => (COMMUNITY_INFLUENCE_ITEMS, &[], &[]),
        Dimension::FutureOrientation => (FUTURE_ORIENTATION_ITEMS, &[], &[]),
    };
    let branch = match role {
        RespondentRole::Clergy => clergy,
        RespondentRole::Layperson => lay,
    };
    common.iter().chain(branch.iter()).copied().collect()
}

// ---------------------------------------------------------------------
//  Scoring
// ---------------------------------------------------------------------

fn scored_items(answers: &Answers, questions: &[QuestionItem]) -> Vec<WeightedValue> {
    questions
        .iter()
        .filter_map(|q| score_item(answers, q).map(|v| WeightedValue::new(v, q.weight)))
        .collect()
}

/// Weighted average of the answered questions before any bias correction.
/// `None` when nothing relevant was answered.
pub fn calculate_raw_dimension_value(
    dim: Dimension,
    answers: &Answers,
    role: RespondentRole,
) -> Option<f64> {
    let questions = relevant_questions(dim, role);
    calculate_weighted_average(&scored_items(answers, &questions)).map(round1)
}

/// Score one dimension.
pub fn calculate_dimension(
    dim: Dimension,
    answers: &Answers,
    role: RespondentRole,
    config: &ScoringConfig,
) -> DimensionScore {
    let settings = config.settings(dim);
    let population = settings.population;
    let questions = relevant_questions(dim, role);
    let scored = scored_items(answers, &questions);

    let Some(raw) = calculate_weighted_average(&scored) else {
        let value = settings.neutral_default;
        return DimensionScore {
            value,
            confidence: config.empty_confidence,
            percentile: calculate_percentile(value, population.mean, population.std_dev),
        };
    };

    let bias_score = calculate_social_desirability_score(answers);
    let value = clamp_scale(adjust_score_for_bias(round1(raw), bias_score, settings.sensitivity));

    let answered_fraction = scored.len() as f64 / questions.len() as f64;
    let confidence =
        round2(get_bias_confidence_multiplier(bias_score) * answered_fraction).clamp(0.0, 1.0);

    DimensionScore {
        value,
        confidence,
        percentile: calculate_percentile(value, population.mean, population.std_dev),
    }
}

pub fn calculate_religiosity_dimension(
    answers: &Answers,
    role: RespondentRole,
    config: &ScoringConfig,
) -> DimensionScore {
    calculate_dimension(Dimension::Religiosity, answers, role, config)
}

pub fn calculate_ai_openness_dimension(
    answers: &Answers,
    role: RespondentRole,
    config: &ScoringConfig,
) -> DimensionScore {
    calculate_dimension(Dimension::AiOpenness, answers, role, config)
}

pub fn calculate_sacred_boundary_dimension(
    answers: &Answers,
    role: RespondentRole,
    config: &ScoringConfig,
) -> DimensionScore {
    calculate_dimension(Dimension::SacredBoundary, answers, role, config)
}

pub fn calculate_ethical_concern_dimension(
    answers: &Answers,
    role: RespondentRole,
    config: &ScoringConfig,
) -> DimensionScore {
    calculate_dimension(Dimension::EthicalConcern, answers, role, config)
}

pub fn calculate_psychological_perception_dimension(
    answers: &Answers,
    role: RespondentRole,
    config: &ScoringConfig,
) -> DimensionScore {
    calculate_dimension(Dimension::PsychologicalPerception, answers, role, config)
}

pub fn calculate_community_influence_dimension(
    answers: &Answers,
    role: RespondentRole,
    config: &ScoringConfig,
) -> DimensionScore {
    calculate_dimension(Dimension::CommunityInfluence, answers, role, config)
}

pub fn calculate_future_orientation_dimension(
    answers: &Answers,
    role: RespondentRole,
    config: &ScoringConfig,
) -> DimensionScore {
    calculate_dimension(Dimension::FutureOrientation, answers, role, config)
}

/// All seven dimensions with the default configuration.
pub fn calculate_all_dimensions(answers: &Answers) -> SevenDimensions {
    calculate_all_dimensions_with(answers, &ScoringConfig::default())
}

/// All seven dimensions. Total on any input, including an empty answer set.
pub fn calculate_all_dimensions_with(answers: &Answers, config: &ScoringConfig) -> SevenDimensions {
    let role = RespondentRole::from_answers(answers);
    SevenDimensions::from_fn(|dim| calculate_dimension(dim, answers, role, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn choice(s: &str) -> AnswerValue {
        AnswerValue::Choice(s.to_string())
    }

    #[test]
    fn role_changes_question_set() {
        let clergy = relevant_questions(Dimension::Religiosity, RespondentRole::Clergy);
        let lay = relevant_questions(Dimension::Religiosity, RespondentRole::Layperson);
        assert!(clergy.iter().any(|q| q.question == "clerge_vie_spirituelle"));
        assert!(!clergy.iter().any(|q| q.question == "crs_pratique_publique"));
        assert!(lay.iter().any(|q| q.question == "crs_pratique_publique"));
        assert_eq!(
            relevant_questions(Dimension::EthicalConcern, RespondentRole::Clergy).len(),
            relevant_questions(Dimension::EthicalConcern, RespondentRole::Layperson).len()
        );
    }

    #[test]
    fn scorers_handle_each_shape() {
        let mut rows = BTreeMap::new();
        rows.insert("vie_privee".to_string(), 5.0);
        rows.insert("verite".to_string(), 9.0);
        let answers = Answers::new()
            .with("tok", choice("souvent"))
            .with("num", AnswerValue::Scale(7.0))
            .with("multi", AnswerValue::Multi(vec!["a".into(), "b".into()]))
            .with("none", AnswerValue::Multi(vec!["aucune".into(), "a".into()]))
            .with("mx", AnswerValue::Matrix(rows));

        let tok = item("tok", 1.0, Scorer::Token(RELIGIOUS_FREQUENCY));
        assert_eq!(score_item(&answers, &tok), Some(4.0));
        assert_eq!(score_item(&answers, &item("num", 1.0, Scorer::Scale)), Some(5.0));
        let count = Scorer::Count { none_token: "aucune" };
        assert_eq!(score_item(&answers, &item("multi", 1.0, count)), Some(3.0));
        assert_eq!(score_item(&answers, &item("none", 1.0, count)), Some(1.0));
        assert_eq!(score_item(&answers, &item("mx", 1.0, Scorer::Matrix)), Some(5.0));
        assert_eq!(score_item(&answers, &item("missing", 1.0, Scorer::Scale)), None);
        // Wrong shape reads as skipped.
        assert_eq!(score_item(&answers, &item("num", 1.0, count)), None);
    }

    #[test]
    fn empty_dimension_is_neutral_without_bias_adjustment() {
        let config = ScoringConfig::default();
        let score = calculate_religiosity_dimension(&Answers::new(), RespondentRole::Layperson, &config);
        assert_eq!(score.value, 3.0);
        assert_eq!(score.confidence, config.empty_confidence);
        assert_eq!(
            score.percentile,
            calculate_percentile(3.0, 3.2, 0.9)
        );
    }

    #[test]
    fn confidence_tracks_answered_fraction() {
        let config = ScoringConfig::default();
        let answers = Answers::new()
            .with("futur_ia_eglise", choice("opportunite"))
            // Honest on every calibration item: bias 0, multiplier 1.0.
            .with("mc_jamais_menti", choice("faux"))
            .with("mc_toujours_courtois", choice("faux"))
            .with("mc_jamais_rancune", choice("faux"))
            .with("mc_parfois_profiter", choice("vrai"))
            .with("mc_parfois_irrite", choice("vrai"));
        let score =
            calculate_future_orientation_dimension(&answers, RespondentRole::Layperson, &config);
        assert_eq!(score.value, 4.0);
        assert_eq!(score.confidence, 0.33);
    }

    #[test]
    fn neutral_bias_deflates_sensitive_dimensions() {
        // No calibration answers -> bias 5 -> small deflation.
        let config = ScoringConfig::default();
        let answers = Answers::new().with("crs_ideologie", choice("totalement"));
        let score = calculate_religiosity_dimension(&answers, RespondentRole::Layperson, &config);
        // 5.0 - (1/6 * 0.8) = 4.87 -> 4.9
        assert_eq!(score.value, 4.9);
        assert_eq!(score.confidence, 0.18);
    }
}
