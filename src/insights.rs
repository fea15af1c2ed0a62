//! Growth areas, advanced insights and the narrative interpretation.
//!
//! Everything here is derived from an already matched spectrum: dimension
//! levels, the respondent's role, the bias score, the secondary profile and
//! the detected tensions. Text comes from static tables; only numbers and
//! titles are interpolated.

use std::cmp::Reverse;

use serde::Serialize;

use crate::answers::RespondentRole;
use crate::config::ScoringConfig;
use crate::dimensions::{Dimension, DimensionLevel, SevenDimensions};
use crate::error::ScoringError;
use crate::profiles::{ProfileCatalog, ProfileMatching};
use crate::tensions::TensionPoint;

/// Highest priority an insight or growth area can carry.
pub const MAX_PRIORITY: u8 = 10;

/// Minimum gap between a respondent value and the centroid target for the
/// dimension to count as a unique aspect.
pub const UNIQUE_ASPECT_DEVIATION: f64 = 1.0;

/// Values at or beyond these count as extreme and raise growth priority.
const EXTREME_LOW: f64 = 1.5;
const EXTREME_HIGH: f64 = 4.5;

/// Everything the generators below read from a matched respondent.
#[derive(Debug, Clone, Copy)]
pub struct InsightContext<'a> {
    pub dimensions: &'a SevenDimensions,
    pub role: RespondentRole,
    pub bias_score: f64,
    pub matching: &'a ProfileMatching,
    pub tensions: &'a [TensionPoint],
    pub catalog: &'a ProfileCatalog,
    pub config: &'a ScoringConfig,
}

impl InsightContext<'_> {
    fn level(&self, dim: Dimension) -> DimensionLevel {
        DimensionLevel::classify(
            self.dimensions.get(dim).value,
            self.config.low_threshold,
            self.config.high_threshold,
        )
    }

    fn low_confidence_dimensions(&self) -> Vec<Dimension> {
        self.dimensions
            .iter()
            .filter(|(_, s)| s.confidence < self.config.low_confidence_threshold)
            .map(|(dim, _)| dim)
            .collect()
    }
}

// =============================================================================
// Growth areas
// =============================================================================

#[derive(Debug, Clone, Copy)]
struct GrowthRule {
    dimension: Dimension,
    level: DimensionLevel,
    role: Option<RespondentRole>,
    priority: u8,
    title: &'static str,
    description: &'static str,
    actions: &'static [&'static str],
}

static GROWTH_RULES: &[GrowthRule] = &[
    GrowthRule {
        dimension: Dimension::Religiosity,
        level: DimensionLevel::Low,
        role: None,
        priority: 4,
        title: "Spiritual grounding",
        description: "Questions about AI and faith are easier to weigh with some inner reference points.",
        actions: &[
            "Set aside a short regular time for reflection",
            "Read one text from a tradition you respect on technology and the person",
        ],
    },
    GrowthRule {
        dimension: Dimension::AiOpenness,
        level: DimensionLevel::Low,
        role: Some(RespondentRole::Clergy),
        priority: 7,
        title: "Informed ministry",
        description: concat!(
            "The people you serve already use AI. Knowing the tools first-hand makes ",
            "your guidance credible, even if you choose not to use them yourself.",
        ),
        actions: &[
            "Try one assistant on a non-pastoral task for a week",
            "Ask a few parishioners how they use AI",
        ],
    },
    GrowthRule {
        dimension: Dimension::AiOpenness,
        level: DimensionLevel::Low,
        role: Some(RespondentRole::Layperson),
        priority: 5,
        title: "Digital literacy",
        description: "A basic grasp of what these tools can and cannot do helps you judge them on facts.",
        actions: &[
            "Follow an introductory course on generative AI",
            "Test a tool on a question you know well and check its answer",
        ],
    },
    GrowthRule {
        dimension: Dimension::AiOpenness,
        level: DimensionLevel::High,
        role: None,
        priority: 6,
        title: "Intentional use",
        description: "Frequent use benefits from an occasional look at what it displaces.",
        actions: &[
            "Keep a one-week log of when and why you reach for AI",
            "Choose one activity to keep deliberately AI-free",
        ],
    },
    GrowthRule {
        dimension: Dimension::SacredBoundary,
        level: DimensionLevel::Low,
        role: None,
        priority: 7,
        title: "Discernment about the sacred",
        description: "Few reservations about AI in prayer or worship deserve to be examined rather than assumed.",
        actions: &[
            "Ask what a generated prayer changes compared with your own words",
            "Discuss the question with a spiritual guide",
        ],
    },
    GrowthRule {
        dimension: Dimension::SacredBoundary,
        level: DimensionLevel::High,
        role: Some(RespondentRole::Clergy),
        priority: 5,
        title: "Articulating limits",
        description: "Your community may need the limits you hold spelled out, not just held.",
        actions: &[
            "Write a short note for your community on what AI should not do",
            "Give concrete examples of acceptable and unacceptable uses",
        ],
    },
    GrowthRule {
        dimension: Dimension::EthicalConcern,
        level: DimensionLevel::Low,
        role: None,
        priority: 8,
        title: "Ethical awareness",
        description: "Privacy, manipulation and dependence are real issues even for light users.",
        actions: &[
            "Read the privacy terms of the tool you use most",
            "Learn how these models can produce confident errors",
        ],
    },
    GrowthRule {
        dimension: Dimension::EthicalConcern,
        level: DimensionLevel::High,
        role: None,
        priority: 4,
        title: "From concern to action",
        description: "Strong concerns have more effect when they turn into concrete commitments.",
        actions: &[
            "Pick one concern and look for who already works on it",
            "Share a practical guideline with people around you",
        ],
    },
    GrowthRule {
        dimension: Dimension::PsychologicalPerception,
        level: DimensionLevel::High,
        role: None,
        priority: 9,
        title: "Human relationships first",
        description: concat!(
            "Seeing AI as a confidant or presence can quietly replace human support. ",
            "It is worth checking that it does not.",
        ),
        actions: &[
            "Bring one thing you would tell the AI to a person instead",
            "Notice when you turn to AI for comfort",
        ],
    },
    GrowthRule {
        dimension: Dimension::CommunityInfluence,
        level: DimensionLevel::Low,
        role: None,
        priority: 6,
        title: "Shared discernment",
        description: "Judging alone is possible but others often see what we miss.",
        actions: &[
            "Join or start a conversation about AI in your community",
        ],
    },
    GrowthRule {
        dimension: Dimension::CommunityInfluence,
        level: DimensionLevel::High,
        role: None,
        priority: 3,
        title: "Personal conviction",
        description: "Community guidance is valuable; so is a view you can state in your own words.",
        actions: &[
            "Write down your own position before the next group discussion",
        ],
    },
    GrowthRule {
        dimension: Dimension::FutureOrientation,
        level: DimensionLevel::Low,
        role: None,
        priority: 5,
        title: "Constructive outlook",
        description: "A purely defensive view of the future leaves the field to others.",
        actions: &[
            "Find one example of a church use of AI you would find acceptable",
        ],
    },
    GrowthRule {
        dimension: Dimension::FutureOrientation,
        level: DimensionLevel::High,
        role: Some(RespondentRole::Clergy),
        priority: 6,
        title: "Preparing the community",
        description: "Optimism about AI in the church calls for bringing others along carefully.",
        actions: &[
            "Plan a session that presents both uses and risks",
            "Involve sceptical members in the discussion early",
        ],
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthArea {
    pub dimension: Dimension,
    pub level: DimensionLevel,
    /// 1 to 10, higher first.
    pub priority: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub actions: &'static [&'static str],
}

/// Growth areas for the respondent, highest priority first (stable), capped
/// at `max_growth_areas`.
pub fn identify_growth_areas(
    dimensions: &SevenDimensions,
    role: RespondentRole,
    config: &ScoringConfig,
) -> Vec<GrowthArea> {
    let mut areas: Vec<GrowthArea> = GROWTH_RULES
        .iter()
        .filter(|rule| rule.role.map_or(true, |r| r == role))
        .filter_map(|rule| {
            let value = dimensions.get(rule.dimension).value;
            let level = DimensionLevel::classify(value, config.low_threshold, config.high_threshold);
            if level != rule.level {
                return None;
            }
            let extreme = value <= EXTREME_LOW || value >= EXTREME_HIGH;
            let priority = (rule.priority + u8::from(extreme)).min(MAX_PRIORITY);
            Some(GrowthArea {
                dimension: rule.dimension,
                level,
                priority,
                title: rule.title,
                description: rule.description,
                actions: rule.actions,
            })
        })
        .collect();

    areas.sort_by_key(|a| Reverse(a.priority));
    areas.truncate(config.max_growth_areas);
    areas
}

// =============================================================================
// Advanced insights
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightCategory {
    Dimension,
    Role,
    Calibration,
    Confidence,
    Hybrid,
    Tension,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedInsight {
    pub category: InsightCategory,
    pub priority: u8,
    pub title: String,
    pub message: String,
}

impl AdvancedInsight {
    fn new(
        category: InsightCategory,
        priority: u8,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            priority: priority.clamp(1, MAX_PRIORITY),
            title: title.into(),
            message: message.into(),
        }
    }
}

/// (dimension, level, priority, title, message)
type DimensionInsightRow = (Dimension, DimensionLevel, u8, &'static str, &'static str);

static DIMENSION_INSIGHTS: &[DimensionInsightRow] = &[
    (
        Dimension::Religiosity,
        DimensionLevel::High,
        5,
        "Faith at the centre",
        "Religion shapes much of your life, and likely how you judge new technology.",
    ),
    (
        Dimension::Religiosity,
        DimensionLevel::Low,
        4,
        "Faith in the background",
        "Religious practice plays a modest role in your daily life.",
    ),
    (
        Dimension::AiOpenness,
        DimensionLevel::High,
        6,
        "Active adopter",
        "AI is already part of your routines, well beyond occasional curiosity.",
    ),
    (
        Dimension::AiOpenness,
        DimensionLevel::Low,
        5,
        "Cautious distance",
        "You use AI rarely and without much enthusiasm.",
    ),
    (
        Dimension::SacredBoundary,
        DimensionLevel::High,
        6,
        "Protected sacred space",
        "You keep prayer and the sacraments clearly apart from any machine.",
    ),
    (
        Dimension::SacredBoundary,
        DimensionLevel::Low,
        7,
        "Porous sacred boundary",
        "You see few problems with AI taking part in spiritual practice.",
    ),
    (
        Dimension::EthicalConcern,
        DimensionLevel::High,
        5,
        "Ethically alert",
        "Risks such as manipulation, dependence or loss of privacy weigh on your view of AI.",
    ),
    (
        Dimension::EthicalConcern,
        DimensionLevel::Low,
        6,
        "Untroubled by risks",
        "The ethical questions around AI do not worry you much.",
    ),
    (
        Dimension::PsychologicalPerception,
        DimensionLevel::High,
        8,
        "Relational view of AI",
        "You relate to AI as something closer to a partner than a tool.",
    ),
    (
        Dimension::PsychologicalPerception,
        DimensionLevel::Low,
        3,
        "AI as a tool",
        "For you AI remains an instrument, with no relational weight.",
    ),
    (
        Dimension::CommunityInfluence,
        DimensionLevel::High,
        5,
        "Community-guided",
        "Your community and its leaders strongly shape how you approach AI.",
    ),
    (
        Dimension::CommunityInfluence,
        DimensionLevel::Low,
        4,
        "Independent judgement",
        "You form your view of AI largely on your own.",
    ),
    (
        Dimension::FutureOrientation,
        DimensionLevel::High,
        5,
        "Hopeful about the future",
        "You expect AI to bring renewal or real opportunities for the church.",
    ),
    (
        Dimension::FutureOrientation,
        DimensionLevel::Low,
        5,
        "Wary of the future",
        "You expect AI to weaken or threaten church life.",
    ),
];

fn dimension_insights(ctx: &InsightContext<'_>) -> Vec<AdvancedInsight> {
    DIMENSION_INSIGHTS
        .iter()
        .filter(|(dim, level, ..)| ctx.level(*dim) == *level)
        .map(|(_, _, priority, title, message)| {
            AdvancedInsight::new(InsightCategory::Dimension, *priority, *title, *message)
        })
        .collect()
}

fn role_insight(ctx: &InsightContext<'_>) -> Option<AdvancedInsight> {
    let ai = ctx.level(Dimension::AiOpenness);
    let (priority, title, message) = match (ctx.role, ai) {
        (RespondentRole::Clergy, DimensionLevel::High) => (
            7,
            "Ministry at the frontier",
            "As a minister who uses AI readily, your example will shape how your community sees it.",
        ),
        (RespondentRole::Clergy, DimensionLevel::Low) => (
            6,
            "A minister's reserve",
            "Your reserve is shared by many clergy; your community will still look to you for guidance.",
        ),
        (RespondentRole::Clergy, DimensionLevel::Moderate) => (
            4,
            "Ministry in transition",
            "You are finding your way between pastoral tradition and new tools.",
        ),
        (RespondentRole::Layperson, DimensionLevel::High) => (
            5,
            "Lay early adopter",
            "You use AI more than most lay respondents; your experience could help your community.",
        ),
        (RespondentRole::Layperson, DimensionLevel::Low) => (
            4,
            "Lay reserve",
            "Like many lay respondents, you keep AI at the edges of your life.",
        ),
        (RespondentRole::Layperson, DimensionLevel::Moderate) => return None,
    };
    Some(AdvancedInsight::new(InsightCategory::Role, priority, title, message))
}

fn calibration_insight(ctx: &InsightContext<'_>) -> Option<AdvancedInsight> {
    if ctx.bias_score <= ctx.config.bias_insight_threshold {
        return None;
    }
    Some(AdvancedInsight::new(
        InsightCategory::Calibration,
        8,
        "Favourable self-presentation",
        format!(
            "Your calibration answers suggest a tendency to present yourself favourably \
             ({:.1}/10). Scores on the most sensitive dimensions were adjusted downward.",
            ctx.bias_score
        ),
    ))
}

fn confidence_insight(ctx: &InsightContext<'_>) -> Option<AdvancedInsight> {
    let uncertain = ctx.low_confidence_dimensions();
    if uncertain.is_empty() {
        return None;
    }
    let labels: Vec<&str> = uncertain.iter().map(|d| d.label()).collect();
    Some(AdvancedInsight::new(
        InsightCategory::Confidence,
        6,
        "Partial picture",
        format!(
            "Too few answers to be confident about: {}. Treat these results as indicative.",
            labels.join(", ")
        ),
    ))
}

fn hybrid_insight(ctx: &InsightContext<'_>) -> Result<Option<AdvancedInsight>, ScoringError> {
    let Some(secondary) = ctx.matching.secondary else {
        return Ok(None);
    };
    let primary = ctx.matching.primary;
    let primary_title = ctx.catalog.require_profile(primary.profile)?.title;
    let secondary_title = ctx.catalog.require_profile(secondary.profile)?.title;
    Ok(Some(AdvancedInsight::new(
        InsightCategory::Hybrid,
        7,
        "Between two profiles",
        format!(
            "Your answers sit between {primary_title} ({:.1}) and {secondary_title} ({:.1}). \
             Both descriptions are worth reading.",
            primary.match_score, secondary.match_score
        ),
    )))
}

fn tension_insight(ctx: &InsightContext<'_>) -> Option<AdvancedInsight> {
    let top = ctx.tensions.first()?;
    let priority = 5 + (top.intensity * 4.0).round() as u8;
    Some(AdvancedInsight::new(
        InsightCategory::Tension,
        priority.min(9),
        format!("Main tension: {}", top.title),
        top.description,
    ))
}

/// Insights across all categories, highest priority first (stable), capped
/// at `max_insights`.
pub fn generate_insights(ctx: &InsightContext<'_>) -> Result<Vec<AdvancedInsight>, ScoringError> {
    let mut insights = dimension_insights(ctx);
    insights.extend(role_insight(ctx));
    insights.extend(calibration_insight(ctx));
    insights.extend(confidence_insight(ctx));
    insights.extend(hybrid_insight(ctx)?);
    insights.extend(tension_insight(ctx));

    insights.sort_by_key(|i| Reverse(i.priority));
    insights.truncate(ctx.config.max_insights);
    Ok(insights)
}

// =============================================================================
// Interpretation
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interpretation {
    pub headline: String,
    pub narrative: String,
    pub strengths: Vec<String>,
    pub unique_aspects: Vec<String>,
    pub blind_spots: Vec<String>,
}

/// Highest dimensions above the high threshold, at most two.
fn standout_dimensions(ctx: &InsightContext<'_>) -> Vec<(Dimension, f64)> {
    let mut high: Vec<(Dimension, f64)> = ctx
        .dimensions
        .iter()
        .map(|(dim, s)| (dim, s.value))
        .filter(|(_, v)| *v > ctx.config.high_threshold)
        .collect();
    high.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    high.truncate(2);
    high
}

pub fn build_interpretation(ctx: &InsightContext<'_>) -> Result<Interpretation, ScoringError> {
    let primary = ctx.catalog.require_profile(ctx.matching.primary.profile)?;
    let sub = ctx.catalog.require_sub_profile(ctx.matching.sub_profile.sub_profile)?;

    let headline = format!("{}: {}", primary.title, sub.title);

    let mut narrative = format!(
        "{} Your answers match this profile at {:.1}/100. {}",
        primary.short_description, ctx.matching.primary.match_score, sub.description
    );
    if let Some(secondary) = ctx.matching.secondary {
        let title = ctx.catalog.require_profile(secondary.profile)?.title;
        narrative.push_str(&format!(
            " You also share a good deal with the {title} profile ({:.1}/100).",
            secondary.match_score
        ));
    }

    let mut strengths: Vec<String> = primary.strengths.iter().map(|s| s.to_string()).collect();
    strengths.extend(
        standout_dimensions(ctx)
            .into_iter()
            .map(|(dim, v)| format!("Marked {} ({v:.1}/5)", dim.label().to_lowercase())),
    );

    let unique_aspects: Vec<String> = ctx
        .dimensions
        .iter()
        .filter_map(|(dim, s)| {
            let target = primary.centroid.target(dim);
            let gap = s.value - target;
            if gap.abs() < UNIQUE_ASPECT_DEVIATION {
                return None;
            }
            let direction = if gap > 0.0 { "higher" } else { "lower" };
            Some(format!(
                "{} noticeably {direction} than typical for this profile ({:.1} vs {:.1})",
                dim.label(),
                s.value,
                target
            ))
        })
        .collect();

    let mut blind_spots: Vec<String> = primary.blind_spots.iter().map(|s| s.to_string()).collect();
    blind_spots.extend(
        ctx.low_confidence_dimensions()
            .into_iter()
            .map(|dim| format!("{}: too few answers to be sure", dim.label())),
    );

    Ok(Interpretation {
        headline,
        narrative,
        strengths,
        unique_aspects,
        blind_spots,
    })
}
