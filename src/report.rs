//! Human-readable reports for one scored respondent.

use serde::Serialize;

use crate::answers::{Answers, RespondentRole};
use crate::config::ScoringConfig;
use crate::dimensions::{Dimension, DimensionLevel};
use crate::error::ScoringError;
use crate::insights::{AdvancedInsight, GrowthArea};
use crate::profiles::{PrimaryProfile, ProfileCatalog, ProfileMatch};
use crate::spectrum::ProfileSpectrum;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpectrumReport {
    pub answers_hash: String,
    pub answered_questions: usize,
    pub role: RespondentRole,
    pub bias_score: f64,
    pub headline: String,
    pub narrative: String,
    pub primary: ReportProfile,
    pub secondary: Option<ReportProfile>,
    pub sub_profile: ReportSubProfile,
    pub dimensions: Vec<ReportDimension>,
    pub ranking: Vec<ReportProfile>,
    pub tensions: Vec<ReportTension>,
    pub growth_areas: Vec<GrowthArea>,
    pub insights: Vec<AdvancedInsight>,
    pub strengths: Vec<String>,
    pub unique_aspects: Vec<String>,
    pub blind_spots: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportProfile {
    pub id: PrimaryProfile,
    pub title: &'static str,
    pub match_score: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSubProfile {
    pub id: &'static str,
    pub title: &'static str,
    pub match_score: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDimension {
    pub dimension: Dimension,
    pub label: &'static str,
    pub value: f64,
    pub confidence: f64,
    pub percentile: u8,
    pub level: DimensionLevel,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTension {
    pub pair: String,
    pub title: &'static str,
    pub intensity: f64,
    pub suggestion: &'static str,
}

pub fn build_report(
    answers: &Answers,
    spectrum: &ProfileSpectrum,
) -> Result<SpectrumReport, ScoringError> {
    build_report_with(
        answers,
        spectrum,
        &ScoringConfig::default(),
        ProfileCatalog::builtin(),
    )
}

pub fn build_report_with(
    answers: &Answers,
    spectrum: &ProfileSpectrum,
    config: &ScoringConfig,
    catalog: &ProfileCatalog,
) -> Result<SpectrumReport, ScoringError> {
    let profile = |m: &ProfileMatch| -> Result<ReportProfile, ScoringError> {
        Ok(ReportProfile {
            id: m.profile,
            title: catalog.require_profile(m.profile)?.title,
            match_score: m.match_score,
        })
    };

    let sub = catalog.require_sub_profile(spectrum.sub_profile.sub_profile)?;
    let dimensions = spectrum
        .dimensions
        .iter()
        .map(|(dim, s)| ReportDimension {
            dimension: dim,
            label: dim.label(),
            value: s.value,
            confidence: s.confidence,
            percentile: s.percentile,
            level: DimensionLevel::classify(s.value, config.low_threshold, config.high_threshold),
        })
        .collect();

    let interpretation = &spectrum.interpretation;
    Ok(SpectrumReport {
        answers_hash: hash_answers(answers),
        answered_questions: answers.len(),
        role: spectrum.role,
        bias_score: spectrum.bias_score,
        headline: interpretation.headline.clone(),
        narrative: interpretation.narrative.clone(),
        primary: profile(&spectrum.primary)?,
        secondary: spectrum.secondary.as_ref().map(&profile).transpose()?,
        sub_profile: ReportSubProfile {
            id: sub.id,
            title: sub.title,
            match_score: spectrum.sub_profile.match_score,
        },
        dimensions,
        ranking: spectrum
            .all_matches
            .iter()
            .map(&profile)
            .collect::<Result<Vec<_>, _>>()?,
        tensions: spectrum
            .tensions
            .iter()
            .map(|t| ReportTension {
                pair: t.pair_key(),
                title: t.title,
                intensity: t.intensity,
                suggestion: t.suggestion,
            })
            .collect(),
        growth_areas: spectrum.growth_areas.clone(),
        insights: spectrum.insights.clone(),
        strengths: interpretation.strengths.clone(),
        unique_aspects: interpretation.unique_aspects.clone(),
        blind_spots: interpretation.blind_spots.clone(),
    })
}

pub fn render_report_markdown(report: &SpectrumReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {}\n\n", report.headline));
    out.push_str(&format!("- Answers hash: `{}`\n", report.answers_hash));
    out.push_str(&format!("- Answered questions: {}\n", report.answered_questions));
    out.push_str(&format!("- Role: {}\n", report.role.as_str()));
    out.push_str(&format!("- Social desirability score: {:.1}/10\n", report.bias_score));
    out.push_str(&format!(
        "- Primary: {} ({:.1})\n",
        report.primary.title, report.primary.match_score
    ));
    if let Some(secondary) = &report.secondary {
        out.push_str(&format!(
            "- Secondary: {} ({:.1})\n",
            secondary.title, secondary.match_score
        ));
    }
    out.push_str(&format!(
        "- Sub-profile: {} ({:.1})\n",
        report.sub_profile.title, report.sub_profile.match_score
    ));

    out.push_str(&format!("\n{}\n", report.narrative));

    out.push_str("\n## Dimensions\n\n");
    out.push_str("| Dimension | Value | Level | Percentile | Confidence |\n");
    out.push_str("|---|---|---|---|---|\n");
    for d in &report.dimensions {
        out.push_str(&format!(
            "| {} | {:.1} | {} | {} | {:.2} |\n",
            d.label,
            d.value,
            d.level.as_str(),
            d.percentile,
            d.confidence
        ));
    }

    out.push_str("\n## Profile ranking\n\n");
    for (i, p) in report.ranking.iter().enumerate() {
        out.push_str(&format!("{}. {} ({:.1})\n", i + 1, p.title, p.match_score));
    }

    push_list(&mut out, "Strengths", &report.strengths);
    push_list(&mut out, "What sets you apart", &report.unique_aspects);
    push_list(&mut out, "Blind spots", &report.blind_spots);

    if !report.tensions.is_empty() {
        out.push_str("\n## Tensions\n\n");
        for t in &report.tensions {
            out.push_str(&format!(
                "- **{}** (intensity {:.2}): {}\n",
                t.title, t.intensity, t.suggestion
            ));
        }
    }

    if !report.growth_areas.is_empty() {
        out.push_str("\n## Growth areas\n\n");
        for g in &report.growth_areas {
            out.push_str(&format!(
                "- **{}** (priority {}): {}\n",
                g.title, g.priority, g.description
            ));
            for action in g.actions {
                out.push_str(&format!("  - {}\n", action));
            }
        }
    }

    if !report.insights.is_empty() {
        out.push_str("\n## Insights\n\n");
        for i in &report.insights {
            out.push_str(&format!("- **{}**: {}\n", i.title, i.message));
        }
    }

    out
}

fn push_list(out: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("\n## {}\n\n", heading));
    for item in items {
        out.push_str(&format!("- {}\n", item));
    }
}

/// blake3 of the answers as JSON with sorted keys, so the hash does not
/// depend on map iteration order.
pub fn hash_answers(answers: &Answers) -> String {
    let canonical = serde_json::to_value(answers).unwrap_or_default();
    let bytes = serde_json::to_vec(&canonical).unwrap_or_default();
    blake3::hash(&bytes).to_hex().to_string()
}
