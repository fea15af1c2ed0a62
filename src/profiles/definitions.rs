//! The eight primary profile archetypes.
//!
//! Each archetype is a centroid in dimension space: the target value it
//! expects on each axis and how much that axis matters when deciding whether
//! a respondent belongs to it. Targets and weights are hand-set from the
//! study's qualitative interviews, not fitted.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dimensions::{Dimension, DimensionMap};

/// Primary profile identifiers, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryProfile {
    GardienTradition,
    PionnierNumerique,
    DiscerneurPrudent,
    PragmatiqueSerein,
    VigilantCritique,
    ExplorateurSpirituel,
    BatisseurCommunautaire,
    ObservateurDistant,
}

impl PrimaryProfile {
    pub const ALL: [PrimaryProfile; 8] = [
        PrimaryProfile::GardienTradition,
        PrimaryProfile::PionnierNumerique,
        PrimaryProfile::DiscerneurPrudent,
        PrimaryProfile::PragmatiqueSerein,
        PrimaryProfile::VigilantCritique,
        PrimaryProfile::ExplorateurSpirituel,
        PrimaryProfile::BatisseurCommunautaire,
        PrimaryProfile::ObservateurDistant,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GardienTradition => "gardien_tradition",
            Self::PionnierNumerique => "pionnier_numerique",
            Self::DiscerneurPrudent => "discerneur_prudent",
            Self::PragmatiqueSerein => "pragmatique_serein",
            Self::VigilantCritique => "vigilant_critique",
            Self::ExplorateurSpirituel => "explorateur_spirituel",
            Self::BatisseurCommunautaire => "batisseur_communautaire",
            Self::ObservateurDistant => "observateur_distant",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == id)
    }
}

impl fmt::Display for PrimaryProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target vector plus per-dimension importance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Centroid {
    pub targets: DimensionMap<f64>,
    pub weights: DimensionMap<f64>,
}

impl Centroid {
    pub fn target(&self, dim: Dimension) -> f64 {
        *self.targets.get(dim)
    }

    pub fn weight(&self, dim: Dimension) -> f64 {
        *self.weights.get(dim)
    }
}

/// Values in dimension declaration order: religiosity, AI openness, sacred
/// boundary, ethical concern, psychological perception, community influence,
/// future orientation.
pub(crate) const fn dims(
    religiosity: f64,
    ai_openness: f64,
    sacred_boundary: f64,
    ethical_concern: f64,
    psychological_perception: f64,
    community_influence: f64,
    future_orientation: f64,
) -> DimensionMap<f64> {
    DimensionMap {
        religiosity,
        ai_openness,
        sacred_boundary,
        ethical_concern,
        psychological_perception,
        community_influence,
        future_orientation,
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDefinition {
    pub id: PrimaryProfile,
    pub title: &'static str,
    pub short_description: &'static str,
    pub long_description: &'static str,
    pub core_motivation: &'static str,
    pub strengths: &'static [&'static str],
    pub blind_spots: &'static [&'static str],
    pub centroid: Centroid,
}

pub fn primary_profiles() -> Vec<ProfileDefinition> {
    vec![
        ProfileDefinition {
            id: PrimaryProfile::GardienTradition,
            title: "Guardian of Tradition",
            short_description: "Anchored in practice, wary of letting machines near the sacred.",
            long_description: concat!(
                "Faith is lived intensely and through inherited forms. AI is at best a ",
                "peripheral tool and at worst an intrusion into what must stay human: ",
                "prayer, sacraments, spiritual accompaniment. The community and its ",
                "authorities weigh heavily on how technology is judged.",
            ),
            core_motivation: "Preserving the integrity of faith and its transmission.",
            strengths: &[
                "Clear sense of what must remain human",
                "Continuity with the community's practices",
                "Resistance to technological fashion",
            ],
            blind_spots: &[
                "May dismiss uses of AI that would free time for people",
                "Risk of losing touch with younger believers",
            ],
            centroid: Centroid {
                targets: dims(4.6, 1.6, 4.6, 4.0, 1.4, 4.0, 1.8),
                weights: dims(1.0, 1.0, 1.0, 0.6, 0.5, 0.7, 0.7),
            },
        },
        ProfileDefinition {
            id: PrimaryProfile::PionnierNumerique,
            title: "Digital Pioneer",
            short_description: "Sees AI as a new field for mission and creativity.",
            long_description: concat!(
                "Early adopter who already uses AI across daily life and, often, in ",
                "faith-related work. Boundaries around the sacred are loose and the ",
                "future of the church is imagined with technology rather than against it.",
            ),
            core_motivation: "Reaching people where they are, with the tools of the time.",
            strengths: &[
                "Experimentation and speed of learning",
                "Ability to show concrete, positive uses",
                "Optimism that can mobilise others",
            ],
            blind_spots: &[
                "Can underestimate ethical and relational costs",
                "May move faster than the community can follow",
            ],
            centroid: Centroid {
                targets: dims(3.4, 4.6, 2.2, 2.4, 3.0, 2.6, 4.6),
                weights: dims(0.5, 1.0, 0.8, 0.7, 0.5, 0.4, 1.0),
            },
        },
        ProfileDefinition {
            id: PrimaryProfile::DiscerneurPrudent,
            title: "Prudent Discerner",
            short_description: "Open in principle, but every use must pass through discernment.",
            long_description: concat!(
                "Committed believer with a measured relationship to AI. Usage is real but ",
                "selective; ethical questions are taken seriously and the sacred keeps ",
                "firm, though not absolute, boundaries.",
            ),
            core_motivation: "Using tools well, in service of something higher.",
            strengths: &[
                "Balanced judgement",
                "Ethical vigilance without rejection",
                "Credible voice for both enthusiasts and sceptics",
            ],
            blind_spots: &[
                "Discernment can turn into indefinite postponement",
                "May leave others without clear guidance",
            ],
            centroid: Centroid {
                targets: dims(4.0, 3.0, 3.8, 4.0, 1.8, 3.4, 3.0),
                weights: dims(0.8, 0.8, 0.9, 1.0, 0.5, 0.6, 0.7),
            },
        },
        ProfileDefinition {
            id: PrimaryProfile::PragmatiqueSerein,
            title: "Serene Pragmatist",
            short_description: "Uses AI as an ordinary tool without much inner conflict.",
            long_description: concat!(
                "Moderate religiosity and comfortable AI use. Technology is neither a threat ",
                "nor a revelation; it is judged on usefulness. Sacred boundaries exist but ",
                "are rarely tested in practice.",
            ),
            core_motivation: "Getting things done well and calmly.",
            strengths: &[
                "Calm, unanxious relationship to change",
                "Practical sense of what helps",
            ],
            blind_spots: &[
                "May overlook subtle shifts in spiritual habits",
                "Little reflection on collective consequences",
            ],
            centroid: Centroid {
                targets: dims(3.0, 3.8, 2.6, 2.8, 2.0, 2.4, 3.6),
                weights: dims(0.6, 1.0, 0.7, 0.7, 0.6, 0.5, 0.8),
            },
        },
        ProfileDefinition {
            id: PrimaryProfile::VigilantCritique,
            title: "Critical Watchman",
            short_description: "Ethical alarm comes first; AI is approached with suspicion.",
            long_description: concat!(
                "Strong ethical concern dominates the picture: manipulation, dependence, ",
                "loss of truth and of privacy. Usage is limited and the future is seen ",
                "as a risk to manage rather than a promise.",
            ),
            core_motivation: "Protecting people and truth from misuse of power.",
            strengths: &[
                "Sharp critical thinking",
                "Attention to the vulnerable",
                "Early warning of concrete risks",
            ],
            blind_spots: &[
                "Critique can crowd out constructive proposals",
                "Risk of fatalism about technology",
            ],
            centroid: Centroid {
                targets: dims(2.4, 1.8, 3.4, 4.7, 1.5, 2.2, 1.6),
                weights: dims(0.6, 0.9, 0.6, 1.0, 0.5, 0.5, 0.9),
            },
        },
        ProfileDefinition {
            id: PrimaryProfile::ExplorateurSpirituel,
            title: "Spiritual Explorer",
            short_description: "Lets AI into the inner life as a conversation partner.",
            long_description: concat!(
                "Personal, searching spirituality that is not strongly tied to community ",
                "structures. AI is perceived relationally, sometimes as a confidant, and ",
                "is used to explore questions of meaning.",
            ),
            core_motivation: "Seeking meaning through every available path.",
            strengths: &[
                "Openness and curiosity",
                "Willingness to bring technology into real questions",
            ],
            blind_spots: &[
                "Attachment to an AI may replace human accompaniment",
                "Weak community anchor for discernment",
            ],
            centroid: Centroid {
                targets: dims(3.8, 3.8, 2.2, 2.8, 4.2, 2.0, 3.8),
                weights: dims(0.8, 0.8, 0.8, 0.5, 1.0, 0.6, 0.6),
            },
        },
        ProfileDefinition {
            id: PrimaryProfile::BatisseurCommunautaire,
            title: "Community Builder",
            short_description: "Thinks about AI through what it does to the community.",
            long_description: concat!(
                "The community is the main frame of reference. Adoption follows ",
                "collective discussion and the guidance of leaders; AI is welcome when it ",
                "strengthens bonds and suspect when it isolates.",
            ),
            core_motivation: "Keeping the community alive and united.",
            strengths: &[
                "Sensitivity to collective dynamics",
                "Ability to carry others along",
            ],
            blind_spots: &[
                "Personal conviction may be delegated to the group",
                "Slow when the community is divided",
            ],
            centroid: Centroid {
                targets: dims(3.8, 3.2, 3.0, 3.2, 2.2, 4.6, 3.4),
                weights: dims(0.7, 0.6, 0.5, 0.5, 0.5, 1.0, 0.7),
            },
        },
        ProfileDefinition {
            id: PrimaryProfile::ObservateurDistant,
            title: "Distant Observer",
            short_description: "Little involved either in religious life or in the AI debate.",
            long_description: concat!(
                "Low religious practice and weak community ties. AI is neither a strong ",
                "concern nor a passion; the questions raised by the survey feel somewhat ",
                "remote from daily life.",
            ),
            core_motivation: "Keeping a free, uncommitted distance.",
            strengths: &[
                "Unpolarised outlook",
                "Freedom from group pressure",
            ],
            blind_spots: &[
                "Disengagement can hide real but unexamined habits",
                "Few reference points for ethical choices",
            ],
            centroid: Centroid {
                targets: dims(1.7, 2.4, 2.0, 2.4, 1.8, 1.6, 2.6),
                weights: dims(1.0, 0.6, 0.6, 0.6, 0.5, 0.9, 0.6),
            },
        },
    ]
}
