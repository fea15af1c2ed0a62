//! Synthetic respondents for offline checks of the scoring engine.
//!
//! Each persona has a latent level per dimension. Answers are drawn around
//! those levels with Gaussian noise, pushed through the same question lists
//! the calculators use, and scored end to end. A persona should land on its
//! expected profile far more often than not.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::answers::{AnswerValue, Answers, RespondentRole, ROLE_QUESTION};
use crate::bias::CALIBRATION_ITEMS;
use crate::config::ScoringConfig;
use crate::dimensions::{relevant_questions, Dimension, DimensionMap, QuestionItem, Scorer};
use crate::error::ScoringError;
use crate::profiles::{PrimaryProfile, ProfileCatalog};
use crate::score_maps::{ScoreMap, SCALE_MAX, SCALE_MIN};
use crate::spectrum::calculate_profile_spectrum_with;

/// Spread of individual answers around the persona's latent level.
pub const ANSWER_NOISE_SIGMA: f64 = 0.6;

/// Probability that any given question is skipped.
pub const SKIP_RATE: f64 = 0.1;

/// Probability of giving the flattering answer on each calibration item.
pub const DESIRABILITY_RATE: f64 = 0.25;

/// Match score above which a hit counts as a strong one.
pub const STRONG_MATCH_SCORE: f64 = 70.0;

const MATRIX_ROWS: [&str; 3] = ["ligne_1", "ligne_2", "ligne_3"];
const MATRIX_ROW_NOISE: f64 = 0.3;

// =============================================================================
// Personas
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    Traditionalist,
    Pioneer,
    PrudentDiscerner,
    Pragmatist,
    Critic,
    Seeker,
    CommunityBuilder,
    DistantObserver,
}

impl Persona {
    pub const ALL: [Persona; 8] = [
        Persona::Traditionalist,
        Persona::Pioneer,
        Persona::PrudentDiscerner,
        Persona::Pragmatist,
        Persona::Critic,
        Persona::Seeker,
        Persona::CommunityBuilder,
        Persona::DistantObserver,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Traditionalist => "traditionalist",
            Self::Pioneer => "pioneer",
            Self::PrudentDiscerner => "prudent_discerner",
            Self::Pragmatist => "pragmatist",
            Self::Critic => "critic",
            Self::Seeker => "seeker",
            Self::CommunityBuilder => "community_builder",
            Self::DistantObserver => "distant_observer",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == id)
    }

    pub fn expected_profile(&self) -> PrimaryProfile {
        match self {
            Self::Traditionalist => PrimaryProfile::GardienTradition,
            Self::Pioneer => PrimaryProfile::PionnierNumerique,
            Self::PrudentDiscerner => PrimaryProfile::DiscerneurPrudent,
            Self::Pragmatist => PrimaryProfile::PragmatiqueSerein,
            Self::Critic => PrimaryProfile::VigilantCritique,
            Self::Seeker => PrimaryProfile::ExplorateurSpirituel,
            Self::CommunityBuilder => PrimaryProfile::BatisseurCommunautaire,
            Self::DistantObserver => PrimaryProfile::ObservateurDistant,
        }
    }

    /// Survey branch the persona answers.
    pub fn role(&self) -> RespondentRole {
        match self {
            Self::PrudentDiscerner | Self::CommunityBuilder => RespondentRole::Clergy,
            _ => RespondentRole::Layperson,
        }
    }

    /// Latent level per dimension, on the 1..5 scale.
    pub fn tendencies(&self) -> DimensionMap<f64> {
        use crate::profiles::definitions::dims;
        match self {
            Self::Traditionalist => dims(4.6, 1.6, 4.6, 4.0, 1.4, 4.0, 1.8),
            Self::Pioneer => dims(3.4, 4.6, 2.2, 2.4, 3.0, 2.6, 4.6),
            Self::PrudentDiscerner => dims(4.0, 3.0, 3.8, 4.0, 1.8, 3.4, 3.0),
            Self::Pragmatist => dims(3.0, 3.8, 2.6, 2.8, 2.0, 2.4, 3.6),
            Self::Critic => dims(2.4, 1.8, 3.4, 4.7, 1.5, 2.2, 1.6),
            Self::Seeker => dims(3.8, 3.8, 2.2, 2.8, 4.2, 2.0, 3.8),
            Self::CommunityBuilder => dims(3.8, 3.2, 3.0, 3.2, 2.2, 4.6, 3.4),
            Self::DistantObserver => dims(1.7, 2.4, 2.0, 2.4, 1.8, 1.6, 2.6),
        }
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Answer generation
// =============================================================================

fn sample_normal(rng: &mut impl Rng, mean: f64, std: f64) -> f64 {
    if std <= 0.0 {
        return mean;
    }
    let u1: f64 = rng.gen::<f64>().max(1e-12);
    let u2: f64 = rng.gen::<f64>();
    let z0 = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    mean + z0 * std
}

fn clamp_scale(v: f64) -> f64 {
    v.clamp(SCALE_MIN, SCALE_MAX)
}

/// Token whose score is closest to `level`; the first one wins on ties.
fn nearest_token(map: &ScoreMap, level: f64) -> Option<&'static str> {
    let mut best: Option<(&'static str, f64)> = None;
    for token in map.tokens() {
        let Some(score) = map.get(token) else {
            continue;
        };
        let gap = (score - level).abs();
        if best.map_or(true, |(_, best_gap)| gap < best_gap) {
            best = Some((token, gap));
        }
    }
    best.map(|(token, _)| token)
}

fn answer_for(item: &QuestionItem, level: f64, rng: &mut impl Rng) -> Option<AnswerValue> {
    match item.scorer {
        Scorer::Token(map) => {
            nearest_token(&map, level).map(|token| AnswerValue::Choice(token.to_string()))
        }
        Scorer::Scale => Some(AnswerValue::Scale(level.round())),
        Scorer::Count { none_token } => {
            let picks = (level.round() - 1.0).max(0.0) as usize;
            let selected = if picks == 0 {
                vec![none_token.to_string()]
            } else {
                (1..=picks).map(|i| format!("option_{i}")).collect()
            };
            Some(AnswerValue::Multi(selected))
        }
        Scorer::Matrix => {
            let rows: BTreeMap<String, f64> = MATRIX_ROWS
                .iter()
                .map(|row| {
                    let v = clamp_scale(sample_normal(rng, level, MATRIX_ROW_NOISE)).round();
                    (row.to_string(), v)
                })
                .collect();
            Some(AnswerValue::Matrix(rows))
        }
    }
}

/// One synthetic answer set for `persona`.
pub fn simulate_answers(persona: Persona, rng: &mut impl Rng) -> Answers {
    let role = persona.role();
    let tendencies = persona.tendencies();
    let mut answers = Answers::new();

    let status = match role {
        RespondentRole::Clergy => "clerge",
        RespondentRole::Layperson => "laic",
    };
    answers.insert(ROLE_QUESTION, AnswerValue::Choice(status.to_string()));

    for dim in Dimension::ALL {
        let target = *tendencies.get(dim);
        for item in relevant_questions(dim, role) {
            if rng.gen_bool(SKIP_RATE) {
                continue;
            }
            let level = clamp_scale(sample_normal(rng, target, ANSWER_NOISE_SIGMA));
            if let Some(value) = answer_for(&item, level, rng) {
                answers.insert(item.question, value);
            }
        }
    }

    for item in &CALIBRATION_ITEMS {
        let flattering = rng.gen_bool(DESIRABILITY_RATE);
        let token = match (flattering, item.bias_target) {
            (true, target) => target,
            (false, "vrai") => "faux",
            (false, _) => "vrai",
        };
        answers.insert(item.question, AnswerValue::Choice(token.to_string()));
    }

    answers
}

// =============================================================================
// Runs
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationTrial {
    pub primary: PrimaryProfile,
    pub match_score: f64,
    pub sub_profile: &'static str,
    pub bias_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSummary {
    pub persona: Persona,
    pub expected: PrimaryProfile,
    pub seed: u64,
    pub trials: Vec<SimulationTrial>,
    /// Share of trials whose primary is the expected profile.
    pub hit_rate: f64,
    /// Share of trials that hit with a match score above [`STRONG_MATCH_SCORE`].
    pub strong_hit_rate: f64,
}

pub fn run_simulation(
    persona: Persona,
    trials: usize,
    seed: u64,
) -> Result<SimulationSummary, ScoringError> {
    run_simulation_with(
        persona,
        trials,
        seed,
        &ScoringConfig::default(),
        ProfileCatalog::builtin(),
    )
}

/// Deterministic for a given seed, config and catalog.
pub fn run_simulation_with(
    persona: Persona,
    trials: usize,
    seed: u64,
    config: &ScoringConfig,
    catalog: &ProfileCatalog,
) -> Result<SimulationSummary, ScoringError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let expected = persona.expected_profile();

    let mut results = Vec::with_capacity(trials);
    for _ in 0..trials {
        let answers = simulate_answers(persona, &mut rng);
        let spectrum = calculate_profile_spectrum_with(&answers, config, catalog)?;
        results.push(SimulationTrial {
            primary: spectrum.primary.profile,
            match_score: spectrum.primary.match_score,
            sub_profile: spectrum.sub_profile.sub_profile,
            bias_score: spectrum.bias_score,
        });
    }

    let share = |count: usize| {
        if trials == 0 {
            0.0
        } else {
            count as f64 / trials as f64
        }
    };
    let hits = results.iter().filter(|t| t.primary == expected).count();
    let strong = results
        .iter()
        .filter(|t| t.primary == expected && t.match_score > STRONG_MATCH_SCORE)
        .count();

    Ok(SimulationSummary {
        persona,
        expected,
        seed,
        trials: results,
        hit_rate: share(hits),
        strong_hit_rate: share(strong),
    })
}
