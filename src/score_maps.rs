//! Category token -> 1..5 scale tables, one per question family.
//!
//! Tables are total over the tokens the survey emits. Lookups are still
//! defensive: a token the table does not know scores as the scale midpoint,
//! so a survey edit degrades scoring instead of breaking it.

/// Scale midpoint returned for unrecognized tokens.
pub const SCALE_MIDPOINT: f64 = 3.0;
pub const SCALE_MIN: f64 = 1.0;
pub const SCALE_MAX: f64 = 5.0;

/// A static lookup table for one question family.
#[derive(Debug, Clone, Copy)]
pub struct ScoreMap {
    pub name: &'static str,
    entries: &'static [(&'static str, f64)],
}

impl ScoreMap {
    pub const fn new(name: &'static str, entries: &'static [(&'static str, f64)]) -> Self {
        Self { name, entries }
    }

    /// Exact lookup; `None` for tokens outside the table.
    pub fn get(&self, token: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, v)| *v)
    }

    /// Score a token, falling back to the midpoint on schema drift.
    pub fn score(&self, token: &str) -> f64 {
        match self.get(token) {
            Some(v) => v,
            None => {
                tracing::debug!(map = self.name, token, "unrecognized answer token; using midpoint");
                SCALE_MIDPOINT
            }
        }
    }

    pub fn tokens(&self) -> impl Iterator<Item = &'static str> {
        let entries: &'static [(&'static str, f64)] = self.entries;
        entries.iter().map(|(t, _)| *t)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Frequency of religious thought, prayer and practice (CRS-5 items).
pub const RELIGIOUS_FREQUENCY: ScoreMap = ScoreMap::new(
    "religious_frequency",
    &[
        ("jamais", 1.0),
        ("rarement", 2.0),
        ("occasionnellement", 3.0),
        ("souvent", 4.0),
        ("tres_souvent", 5.0),
    ],
);

/// Intensity of belief (CRS-5 ideology item).
pub const BELIEF_INTENSITY: ScoreMap = ScoreMap::new(
    "belief_intensity",
    &[
        ("pas_du_tout", 1.0),
        ("un_peu", 2.0),
        ("moyennement", 3.0),
        ("beaucoup", 4.0),
        ("totalement", 5.0),
    ],
);

/// General AI usage frequency.
pub const AI_USAGE_FREQUENCY: ScoreMap = ScoreMap::new(
    "ai_usage_frequency",
    &[
        ("jamais", 1.0),
        ("rarement", 2.0),
        ("mensuel", 2.5),
        ("hebdomadaire", 3.5),
        ("quotidien", 4.5),
        ("plusieurs_fois_par_jour", 5.0),
    ],
);

/// Clergy: how often AI helps with homily preparation.
pub const MINISTRY_USAGE: ScoreMap = ScoreMap::new(
    "ministry_usage",
    &[
        ("jamais", 1.0),
        ("essaye", 2.0),
        ("parfois", 3.0),
        ("regulierement", 4.0),
        ("systematiquement", 5.0),
    ],
);

/// Clergy: acceptability of AI in pastoral care.
pub const PASTORAL_CARE: ScoreMap = ScoreMap::new(
    "pastoral_care",
    &[
        ("inacceptable", 1.0),
        ("reticent", 2.0),
        ("envisageable", 3.0),
        ("ponctuel", 4.0),
        ("regulier", 5.0),
    ],
);

/// Laypeople: use of AI in personal prayer or devotion.
pub const LAY_PRAYER_USE: ScoreMap = ScoreMap::new(
    "lay_prayer_use",
    &[
        ("jamais", 1.0),
        ("par_curiosite", 2.0),
        ("parfois", 3.0),
        ("souvent", 4.0),
        ("quotidiennement", 5.0),
    ],
);

/// Acceptability of AI in a sacred act. Higher = stricter boundary.
pub const SACRED_BOUNDARY: ScoreMap = ScoreMap::new(
    "sacred_boundary",
    &[
        ("acceptable", 1.0),
        ("plutot_acceptable", 2.0),
        ("neutre", 3.0),
        ("plutot_inacceptable", 4.0),
        ("inacceptable", 5.0),
    ],
);

/// Overall level of ethical worry.
pub const ETHICAL_CONCERN: ScoreMap = ScoreMap::new(
    "ethical_concern",
    &[
        ("aucune", 1.0),
        ("faible", 2.0),
        ("moderee", 3.0),
        ("forte", 4.0),
        ("tres_forte", 5.0),
    ],
);

/// Five-point agreement scale shared by several statements.
pub const AGREEMENT: ScoreMap = ScoreMap::new(
    "agreement",
    &[
        ("pas_du_tout_d_accord", 1.0),
        ("plutot_pas_d_accord", 2.0),
        ("neutre", 3.0),
        ("plutot_d_accord", 4.0),
        ("tout_a_fait_d_accord", 5.0),
    ],
);

/// How the respondent relates to AI, from instrument to presence.
pub const PSYCHOLOGICAL_PERCEPTION: ScoreMap = ScoreMap::new(
    "psychological_perception",
    &[
        ("outil", 1.0),
        ("assistant", 2.0),
        ("collaborateur", 3.0),
        ("confident", 4.0),
        ("presence", 5.0),
    ],
);

/// Expected effect of AI on the church's future.
pub const FUTURE_ORIENTATION: ScoreMap = ScoreMap::new(
    "future_orientation",
    &[
        ("declin", 1.0),
        ("menace", 2.0),
        ("incertain", 3.0),
        ("opportunite", 4.0),
        ("renouveau", 5.0),
    ],
);

/// Intended adoption timeline.
pub const FUTURE_ADOPTION: ScoreMap = ScoreMap::new(
    "future_adoption",
    &[
        ("jamais", 1.0),
        ("attendre", 2.0),
        ("prudemment", 3.0),
        ("bientot", 4.0),
        ("deja", 5.0),
    ],
);

/// Weight of the faith community's opinion on the respondent's AI use.
pub const COMMUNITY_INFLUENCE: ScoreMap = ScoreMap::new(
    "community_influence",
    &[
        ("aucune", 1.0),
        ("faible", 2.0),
        ("moderee", 3.0),
        ("forte", 4.0),
        ("determinante", 5.0),
    ],
);
