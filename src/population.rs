//! Aggregation of many spectra into a dashboard summary.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::answers::{Answers, RespondentRole};
use crate::config::ScoringConfig;
use crate::dimensions::{Dimension, DimensionMap};
use crate::error::ScoringError;
use crate::profiles::{PrimaryProfile, ProfileCatalog};
use crate::spectrum::{calculate_profile_spectrum_with, ProfileSpectrum};
use crate::stats::round2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileShare {
    pub profile: PrimaryProfile,
    pub count: usize,
    /// Fraction of respondents in [0, 1].
    pub share: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionStats {
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleCounts {
    pub clergy: usize,
    pub layperson: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulationSummary {
    pub respondents: usize,
    /// Every primary profile, in declaration order, including empty ones.
    pub profile_distribution: Vec<ProfileShare>,
    pub sub_profile_counts: BTreeMap<String, usize>,
    pub dimensions: DimensionMap<DimensionStats>,
    pub mean_confidence: f64,
    pub mean_bias_score: f64,
    /// Keyed by dimension pair, e.g. `religiosity+aiOpenness`.
    pub tension_frequencies: BTreeMap<String, usize>,
    pub roles: RoleCounts,
}

fn dimension_stats(values: &[f64]) -> DimensionStats {
    if values.is_empty() {
        return DimensionStats::default();
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
    DimensionStats {
        mean: round2(mean),
        std_dev: round2(variance.sqrt()),
        min,
        max,
    }
}

/// Summarize `spectra`. An empty slice yields zero counts and zeroed
/// statistics rather than NaN.
pub fn summarize_population(spectra: &[ProfileSpectrum]) -> PopulationSummary {
    let respondents = spectra.len();
    let share = |count: usize| {
        if respondents == 0 {
            0.0
        } else {
            round2(count as f64 / respondents as f64)
        }
    };

    let profile_distribution = PrimaryProfile::ALL
        .into_iter()
        .map(|profile| {
            let count = spectra.iter().filter(|s| s.primary.profile == profile).count();
            ProfileShare {
                profile,
                count,
                share: share(count),
            }
        })
        .collect();

    let mut sub_profile_counts = BTreeMap::new();
    let mut tension_frequencies = BTreeMap::new();
    let mut roles = RoleCounts::default();
    for spectrum in spectra {
        *sub_profile_counts
            .entry(spectrum.sub_profile.sub_profile.to_string())
            .or_insert(0) += 1;
        for tension in &spectrum.tensions {
            *tension_frequencies.entry(tension.pair_key()).or_insert(0) += 1;
        }
        match spectrum.role {
            RespondentRole::Clergy => roles.clergy += 1,
            RespondentRole::Layperson => roles.layperson += 1,
        }
    }

    let dimensions = DimensionMap::from_fn(|dim: Dimension| {
        let values: Vec<f64> = spectra.iter().map(|s| s.dimensions.get(dim).value).collect();
        dimension_stats(&values)
    });

    let mean_of = |f: &dyn Fn(&ProfileSpectrum) -> f64| {
        if respondents == 0 {
            0.0
        } else {
            round2(spectra.iter().map(f).sum::<f64>() / respondents as f64)
        }
    };

    PopulationSummary {
        respondents,
        profile_distribution,
        sub_profile_counts,
        dimensions,
        mean_confidence: mean_of(&|s| s.dimensions.mean_confidence()),
        mean_bias_score: mean_of(&|s| s.bias_score),
        tension_frequencies,
        roles,
    }
}

/// Score every answer set. Respondent input never fails; an `Err` means the
/// configuration or catalog is broken and aborts the whole batch.
pub fn score_population<'a, I>(
    responses: I,
    config: &ScoringConfig,
    catalog: &ProfileCatalog,
) -> Result<Vec<ProfileSpectrum>, ScoringError>
where
    I: IntoIterator<Item = &'a Answers>,
{
    let spectra = responses
        .into_iter()
        .map(|answers| calculate_profile_spectrum_with(answers, config, catalog))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(respondents = spectra.len(), "scored population");
    Ok(spectra)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::AnswerValue;

    fn answers(pairs: &[(&str, &str)]) -> Answers {
        pairs
            .iter()
            .map(|(q, a)| (q.to_string(), AnswerValue::Choice(a.to_string())))
            .collect()
    }

    #[test]
    fn empty_population_is_zeroed() {
        let summary = summarize_population(&[]);
        assert_eq!(summary.respondents, 0);
        assert_eq!(summary.profile_distribution.len(), 8);
        assert!(summary.profile_distribution.iter().all(|p| p.count == 0 && p.share == 0.0));
        assert_eq!(summary.dimensions.religiosity, DimensionStats::default());
        assert_eq!(summary.mean_confidence, 0.0);
        assert!(summary.sub_profile_counts.is_empty());
    }

    #[test]
    fn counts_and_stats_add_up() {
        let responses = vec![
            Answers::new(),
            answers(&[("profil_statut", "clerge"), ("crs_intellect", "tres_souvent")]),
            answers(&[("crs_intellect", "jamais")]),
        ];
        let spectra =
            score_population(&responses, &ScoringConfig::default(), ProfileCatalog::builtin())
                .unwrap();
        let summary = summarize_population(&spectra);

        assert_eq!(summary.respondents, 3);
        let total: usize = summary.profile_distribution.iter().map(|p| p.count).sum();
        assert_eq!(total, 3);
        assert_eq!(summary.sub_profile_counts.values().sum::<usize>(), 3);
        assert_eq!(summary.roles, RoleCounts { clergy: 1, layperson: 2 });

        let order: Vec<_> = summary.profile_distribution.iter().map(|p| p.profile).collect();
        assert_eq!(order, PrimaryProfile::ALL.to_vec());

        let rel = summary.dimensions.religiosity;
        assert!(rel.min <= rel.mean && rel.mean <= rel.max);
        assert!(rel.std_dev > 0.0);
        // No AI question answered by anyone.
        assert_eq!(summary.dimensions.ai_openness.std_dev, 0.0);
        assert_eq!(summary.dimensions.ai_openness.mean, 3.0);
    }

    #[test]
    fn population_std_dev_matches_hand_computation() {
        let stats = dimension_stats(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.std_dev, 2.0);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 9.0);
    }
}
