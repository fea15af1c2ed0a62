//! Two-stage nearest-centroid matching.
//!
//! Stage one scores the respondent against every primary profile; stage two
//! picks the closest sub-profile among the primary's children. Scores are
//! independent similarities in [0, 100], not shares of a whole.

use std::cmp::Ordering;

use serde::Serialize;

use crate::answers::RespondentRole;
use crate::config::ScoringConfig;
use crate::dimensions::{Dimension, DimensionMap};
use crate::error::ScoringError;
use crate::stats::round1;

use super::catalog::ProfileCatalog;
use super::definitions::{Centroid, PrimaryProfile};

/// Largest possible distance between two points of the 1..5 scale.
pub const MAX_DISTANCE: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileMatch {
    pub profile: PrimaryProfile,
    pub match_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubProfileMatch {
    pub sub_profile: &'static str,
    pub parent: PrimaryProfile,
    pub match_score: f64,
}

/// Result of both matching stages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileMatching {
    pub all_matches: Vec<ProfileMatch>,
    pub primary: ProfileMatch,
    pub secondary: Option<ProfileMatch>,
    pub sub_profile: SubProfileMatch,
}

/// Weighted RMS distance between `values` and the centroid's targets.
pub fn weighted_distance(values: &DimensionMap<f64>, centroid: &Centroid) -> f64 {
    let mut sum = 0.0;
    let mut total_weight = 0.0;
    for dim in Dimension::ALL {
        let w = centroid.weight(dim);
        let d = values.get(dim) - centroid.target(dim);
        sum += w * d * d;
        total_weight += w;
    }
    if total_weight <= 0.0 {
        return MAX_DISTANCE;
    }
    (sum / total_weight).sqrt()
}

/// Similarity in [0, 100]: 100 on the centroid, 0 at maximum distance.
pub fn centroid_similarity(values: &DimensionMap<f64>, centroid: &Centroid) -> f64 {
    let d = weighted_distance(values, centroid);
    round1(100.0 * (1.0 - d / MAX_DISTANCE)).clamp(0.0, 100.0)
}

fn by_score_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// Every primary profile, best first. The sort is stable, so exact ties keep
/// catalog declaration order.
pub fn rank_profiles(
    values: &DimensionMap<f64>,
    catalog: &ProfileCatalog,
) -> Result<Vec<ProfileMatch>, ScoringError> {
    let mut matches: Vec<ProfileMatch> = catalog
        .profiles()
        .iter()
        .map(|p| ProfileMatch {
            profile: p.id,
            match_score: centroid_similarity(values, &p.centroid),
        })
        .collect();
    if matches.is_empty() {
        return Err(ScoringError::EmptyProfileTable);
    }
    matches.sort_by(|a, b| by_score_desc(a.match_score, b.match_score));
    Ok(matches)
}

/// The runner-up, only when it trails the leader by less than `gap_threshold`.
pub fn select_secondary(matches: &[ProfileMatch], gap_threshold: f64) -> Option<ProfileMatch> {
    let (first, second) = match matches {
        [first, second, ..] => (first, second),
        _ => return None,
    };
    if first.match_score - second.match_score < gap_threshold {
        Some(*second)
    } else {
        None
    }
}

/// Best sub-profile under `primary`. Variants whose role qualifier excludes
/// the respondent are considered only if no variant qualifies.
pub fn match_sub_profile(
    values: &DimensionMap<f64>,
    primary: PrimaryProfile,
    role: RespondentRole,
    catalog: &ProfileCatalog,
) -> Result<SubProfileMatch, ScoringError> {
    let mut candidates: Vec<(bool, SubProfileMatch)> = catalog
        .children_of(primary)
        .map(|sub| {
            (
                sub.qualifies(role),
                SubProfileMatch {
                    sub_profile: sub.id,
                    parent: sub.parent,
                    match_score: centroid_similarity(values, &sub.centroid),
                },
            )
        })
        .collect();

    if candidates.iter().any(|(qualified, _)| *qualified) {
        candidates.retain(|(qualified, _)| *qualified);
    }
    candidates.sort_by(|a, b| by_score_desc(a.1.match_score, b.1.match_score));
    candidates
        .first()
        .map(|(_, m)| *m)
        .ok_or_else(|| ScoringError::invalid_catalog(format!("profile {primary} has no sub-profiles")))
}

/// Run both stages.
pub fn match_profiles(
    values: &DimensionMap<f64>,
    role: RespondentRole,
    config: &ScoringConfig,
    catalog: &ProfileCatalog,
) -> Result<ProfileMatching, ScoringError> {
    let all_matches = rank_profiles(values, catalog)?;
    let primary = *all_matches.first().ok_or(ScoringError::EmptyProfileTable)?;
    let secondary = select_secondary(&all_matches, config.secondary_gap_threshold);
    let sub_profile = match_sub_profile(values, primary.profile, role, catalog)?;
    Ok(ProfileMatching {
        all_matches,
        primary,
        secondary,
        sub_profile,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::definitions::{primary_profiles, ProfileDefinition};
    use crate::profiles::sub_profiles::sub_profiles;

    fn centroid_of(id: PrimaryProfile) -> Centroid {
        ProfileCatalog::builtin().profile(id).unwrap().centroid
    }

    #[test]
    fn centroid_scores_100() {
        for id in PrimaryProfile::ALL {
            let c = centroid_of(id);
            assert_eq!(centroid_similarity(&c.targets, &c), 100.0);
        }
    }

    #[test]
    fn similarity_bounds() {
        let c = centroid_of(PrimaryProfile::GardienTradition);
        for v in [1.0, 3.0, 5.0] {
            let s = centroid_similarity(&DimensionMap::splat(v), &c);
            assert!((0.0..=100.0).contains(&s));
        }
    }

    #[test]
    fn each_centroid_ranks_itself_first() {
        let catalog = ProfileCatalog::builtin();
        for id in PrimaryProfile::ALL {
            let ranked = rank_profiles(&centroid_of(id).targets, catalog).unwrap();
            assert_eq!(ranked.len(), 8);
            assert_eq!(ranked[0].profile, id);
            for w in ranked.windows(2) {
                assert!(w[0].match_score >= w[1].match_score);
            }
        }
    }

    #[test]
    fn exact_ties_keep_declaration_order() {
        let mut profiles: Vec<ProfileDefinition> = primary_profiles();
        let shared = profiles[0].centroid;
        for p in profiles.iter_mut() {
            p.centroid = shared;
        }
        let catalog = ProfileCatalog::new(profiles, sub_profiles()).unwrap();
        let ranked = rank_profiles(&DimensionMap::splat(3.0), &catalog).unwrap();
        let order: Vec<_> = ranked.iter().map(|m| m.profile).collect();
        assert_eq!(order, PrimaryProfile::ALL.to_vec());
    }

    #[test]
    fn secondary_requires_close_runner_up() {
        let m = |profile, match_score| ProfileMatch {
            profile,
            match_score,
        };
        let close = [
            m(PrimaryProfile::GardienTradition, 80.0),
            m(PrimaryProfile::VigilantCritique, 75.0),
        ];
        assert_eq!(
            select_secondary(&close, 10.0).map(|s| s.profile),
            Some(PrimaryProfile::VigilantCritique)
        );
        let far = [
            m(PrimaryProfile::GardienTradition, 80.0),
            m(PrimaryProfile::VigilantCritique, 70.0),
        ];
        assert_eq!(select_secondary(&far, 10.0), None);
        assert_eq!(select_secondary(&far[..1], 10.0), None);
    }

    #[test]
    fn role_qualifier_filters_sub_profiles() {
        let catalog = ProfileCatalog::builtin();
        let pastor = catalog.sub_profile("gardien_pasteur").unwrap().centroid.targets;

        let clergy =
            match_sub_profile(&pastor, PrimaryProfile::GardienTradition, RespondentRole::Clergy, catalog)
                .unwrap();
        assert_eq!(clergy.sub_profile, "gardien_pasteur");

        let lay = match_sub_profile(
            &pastor,
            PrimaryProfile::GardienTradition,
            RespondentRole::Layperson,
            catalog,
        )
        .unwrap();
        assert_ne!(lay.sub_profile, "gardien_pasteur");
        assert_eq!(lay.parent, PrimaryProfile::GardienTradition);
    }
}
