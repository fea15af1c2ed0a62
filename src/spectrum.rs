//! Public entry point: answers in, full profile spectrum out.

use serde::Serialize;

use crate::answers::{Answers, RespondentRole};
use crate::bias::calculate_social_desirability_score;
use crate::config::ScoringConfig;
use crate::dimensions::{
    calculate_all_dimensions_with, Dimension, DimensionLevel, DimensionMap, SevenDimensions,
};
use crate::error::ScoringError;
use crate::insights::{
    build_interpretation, generate_insights, identify_growth_areas, AdvancedInsight, GrowthArea,
    InsightContext, Interpretation,
};
use crate::profiles::{match_profiles, PrimaryProfile, ProfileCatalog, ProfileMatch, SubProfileMatch};
use crate::tensions::{detect_tensions, TensionPoint};

/// Everything known about one respondent after scoring.
///
/// `all_matches` always covers every primary profile, best first, and
/// `primary` is its first element. Match scores are independent
/// similarities; they do not sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSpectrum {
    pub dimensions: SevenDimensions,
    pub all_matches: Vec<ProfileMatch>,
    pub primary: ProfileMatch,
    pub secondary: Option<ProfileMatch>,
    pub sub_profile: SubProfileMatch,
    pub interpretation: Interpretation,
    pub tensions: Vec<TensionPoint>,
    pub growth_areas: Vec<GrowthArea>,
    pub insights: Vec<AdvancedInsight>,
    pub role: RespondentRole,
    pub bias_score: f64,
}

/// Score `answers` with the default configuration and the built-in profiles.
///
/// Returns `Err` only when the static tables are broken; no answer set,
/// including an empty one, produces an error.
pub fn calculate_profile_spectrum(answers: &Answers) -> Result<ProfileSpectrum, ScoringError> {
    calculate_profile_spectrum_with(answers, &ScoringConfig::default(), ProfileCatalog::builtin())
}

pub fn calculate_profile_spectrum_with(
    answers: &Answers,
    config: &ScoringConfig,
    catalog: &ProfileCatalog,
) -> Result<ProfileSpectrum, ScoringError> {
    let dimensions = calculate_all_dimensions_with(answers, config);
    let role = RespondentRole::from_answers(answers);
    let bias_score = calculate_social_desirability_score(answers);
    spectrum_from_dimensions(dimensions, role, bias_score, config, catalog)
}

/// The matching half of the pipeline, for callers that already hold
/// dimension scores.
pub fn spectrum_from_dimensions(
    dimensions: SevenDimensions,
    role: RespondentRole,
    bias_score: f64,
    config: &ScoringConfig,
    catalog: &ProfileCatalog,
) -> Result<ProfileSpectrum, ScoringError> {
    let values = dimensions.values();
    let matching = match_profiles(&values, role, config, catalog)?;
    let centroid = catalog.require_profile(matching.primary.profile)?.centroid;
    let tensions = detect_tensions(&values, &centroid, config);
    let growth_areas = identify_growth_areas(&dimensions, role, config);

    let ctx = InsightContext {
        dimensions: &dimensions,
        role,
        bias_score,
        matching: &matching,
        tensions: &tensions,
        catalog,
        config,
    };
    let insights = generate_insights(&ctx)?;
    let interpretation = build_interpretation(&ctx)?;

    Ok(ProfileSpectrum {
        dimensions,
        all_matches: matching.all_matches,
        primary: matching.primary,
        secondary: matching.secondary,
        sub_profile: matching.sub_profile,
        interpretation,
        tensions,
        growth_areas,
        insights,
        role,
        bias_score,
    })
}

// -----------------------------------------------------------------------------
// Condensed views
// -----------------------------------------------------------------------------

/// Minimal summary for list views.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleProfile {
    pub id: PrimaryProfile,
    pub title: &'static str,
    pub score: f64,
    pub top_dimensions: Vec<Dimension>,
}

/// The two highest dimensions; ties keep declaration order.
pub fn top_dimensions(dimensions: &SevenDimensions, n: usize) -> Vec<Dimension> {
    let mut ranked: Vec<(Dimension, f64)> =
        dimensions.iter().map(|(dim, s)| (dim, s.value)).collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked.into_iter().take(n).map(|(dim, _)| dim).collect()
}

pub fn simple_profile(
    spectrum: &ProfileSpectrum,
    catalog: &ProfileCatalog,
) -> Result<SimpleProfile, ScoringError> {
    let definition = catalog.require_profile(spectrum.primary.profile)?;
    Ok(SimpleProfile {
        id: definition.id,
        title: definition.title,
        score: spectrum.primary.match_score,
        top_dimensions: top_dimensions(&spectrum.dimensions, 2),
    })
}

pub fn get_simple_profile(answers: &Answers) -> Result<SimpleProfile, ScoringError> {
    let spectrum = calculate_profile_spectrum(answers)?;
    simple_profile(&spectrum, ProfileCatalog::builtin())
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelledDimension {
    pub value: f64,
    pub confidence: f64,
    pub percentile: u8,
    pub level: DimensionLevel,
}

/// Legacy view: matches plus dimensions labelled low / moderate / high.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedProfileData {
    pub primary: ProfileMatch,
    pub primary_title: &'static str,
    pub secondary: Option<ProfileMatch>,
    pub sub_profile: SubProfileMatch,
    pub sub_profile_title: &'static str,
    pub dimensions: DimensionMap<LabelledDimension>,
}

pub fn enhanced_profile_data(
    spectrum: &ProfileSpectrum,
    config: &ScoringConfig,
    catalog: &ProfileCatalog,
) -> Result<EnhancedProfileData, ScoringError> {
    let primary = catalog.require_profile(spectrum.primary.profile)?;
    let sub = catalog.require_sub_profile(spectrum.sub_profile.sub_profile)?;
    let dimensions = spectrum.dimensions.map(|_, s| LabelledDimension {
        value: s.value,
        confidence: s.confidence,
        percentile: s.percentile,
        level: DimensionLevel::classify(s.value, config.low_threshold, config.high_threshold),
    });
    Ok(EnhancedProfileData {
        primary: spectrum.primary,
        primary_title: primary.title,
        secondary: spectrum.secondary,
        sub_profile: spectrum.sub_profile,
        sub_profile_title: sub.title,
        dimensions,
    })
}

pub fn get_enhanced_profile_data(answers: &Answers) -> Result<EnhancedProfileData, ScoringError> {
    let spectrum = calculate_profile_spectrum(answers)?;
    enhanced_profile_data(&spectrum, &ScoringConfig::default(), ProfileCatalog::builtin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::AnswerValue;

    fn choice(s: &str) -> AnswerValue {
        AnswerValue::Choice(s.to_string())
    }

    fn traditionalist() -> Answers {
        Answers::new()
            .with("crs_intellect", choice("tres_souvent"))
            .with("crs_ideologie", choice("totalement"))
            .with("crs_pratique_privee", choice("tres_souvent"))
            .with("crs_experience", choice("souvent"))
            .with("crs_pratique_publique", choice("tres_souvent"))
            .with("ia_frequence_usage", choice("jamais"))
            .with("ia_confort", AnswerValue::Scale(1.0))
            .with("laic_ia_priere", choice("jamais"))
            .with("sacre_ia_sacrements", choice("inacceptable"))
            .with("sacre_ia_priere_generee", choice("inacceptable"))
            .with("psy_perception_ia", choice("outil"))
            .with("psy_attachement", AnswerValue::Scale(1.0))
            .with("communaute_influence", choice("forte"))
            .with("communaute_suivi_autorite", choice("tout_a_fait_d_accord"))
            .with("futur_ia_eglise", choice("menace"))
            .with("futur_adoption", choice("jamais"))
    }

    #[test]
    fn traditionalist_matches_the_guardian() {
        let spectrum = calculate_profile_spectrum(&traditionalist()).unwrap();
        assert_eq!(spectrum.primary.profile, PrimaryProfile::GardienTradition);
        assert_eq!(spectrum.primary, spectrum.all_matches[0]);
        assert_eq!(spectrum.sub_profile.parent, PrimaryProfile::GardienTradition);
        assert_eq!(spectrum.role, RespondentRole::Layperson);
    }

    #[test]
    fn simple_profile_reports_top_two_dimensions() {
        let simple = get_simple_profile(&traditionalist()).unwrap();
        assert_eq!(simple.id, PrimaryProfile::GardienTradition);
        assert_eq!(simple.top_dimensions.len(), 2);
        assert!(simple.top_dimensions.contains(&Dimension::SacredBoundary));
    }

    #[test]
    fn top_dimensions_ties_keep_declaration_order() {
        let dims = calculate_all_dimensions_with(&Answers::new(), &ScoringConfig::default());
        assert_eq!(
            top_dimensions(&dims, 2),
            vec![Dimension::Religiosity, Dimension::AiOpenness]
        );
    }

    #[test]
    fn enhanced_data_labels_levels() {
        let data = get_enhanced_profile_data(&traditionalist()).unwrap();
        assert_eq!(data.dimensions.ai_openness.level, DimensionLevel::Low);
        assert_eq!(data.dimensions.sacred_boundary.level, DimensionLevel::High);
        // No ethics question answered: neutral default.
        assert_eq!(data.dimensions.ethical_concern.level, DimensionLevel::Moderate);
        assert_eq!(data.primary_title, "Guardian of Tradition");
    }

    #[test]
    fn output_uses_camel_case_keys() {
        let spectrum = calculate_profile_spectrum(&Answers::new()).unwrap();
        let json = serde_json::to_value(&spectrum).unwrap();
        for key in [
            "dimensions",
            "allMatches",
            "primary",
            "secondary",
            "subProfile",
            "interpretation",
            "tensions",
            "growthAreas",
            "insights",
            "role",
            "biasScore",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert!(json["dimensions"].get("aiOpenness").is_some());
        assert!(json["primary"].get("matchScore").is_some());
    }
}
