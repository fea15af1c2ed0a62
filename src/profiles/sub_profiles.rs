//! Sub-profiles: three finer variants under each primary profile.

use serde::Serialize;

use crate::answers::RespondentRole;

use super::definitions::{dims, Centroid, PrimaryProfile};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubProfileDefinition {
    pub id: &'static str,
    pub parent: PrimaryProfile,
    pub title: &'static str,
    pub description: &'static str,
    /// Restricts the variant to one survey branch (e.g. ministry-specific).
    pub qualifier: Option<RespondentRole>,
    pub centroid: Centroid,
}

impl SubProfileDefinition {
    pub fn qualifies(&self, role: RespondentRole) -> bool {
        self.qualifier.map_or(true, |required| required == role)
    }
}

pub fn sub_profiles() -> Vec<SubProfileDefinition> {
    use PrimaryProfile::*;

    vec![
        // -----------------------------------------------------------------
        // Guardian of Tradition
        // -----------------------------------------------------------------
        SubProfileDefinition {
            id: "gardien_liturgique",
            parent: GardienTradition,
            title: "Liturgical Guardian",
            description: "Defends the liturgy and sacraments as spaces no machine should enter.",
            qualifier: None,
            centroid: Centroid {
                targets: dims(4.8, 1.4, 5.0, 3.8, 1.2, 3.8, 1.8),
                weights: dims(0.9, 0.8, 1.0, 0.5, 0.4, 0.5, 0.6),
            },
        },
        SubProfileDefinition {
            id: "gardien_doctrinal",
            parent: GardienTradition,
            title: "Doctrinal Guardian",
            description: "Judges AI primarily through moral and doctrinal principles.",
            qualifier: None,
            centroid: Centroid {
                targets: dims(4.5, 1.8, 4.4, 4.6, 1.4, 3.6, 1.8),
                weights: dims(0.8, 0.7, 0.8, 1.0, 0.4, 0.5, 0.6),
            },
        },
        SubProfileDefinition {
            id: "gardien_pasteur",
            parent: GardienTradition,
            title: "Shepherd Guardian",
            description: "A minister protecting the flock from technological dispersion.",
            qualifier: Some(RespondentRole::Clergy),
            centroid: Centroid {
                targets: dims(4.6, 1.8, 4.4, 4.0, 1.4, 4.6, 2.0),
                weights: dims(0.8, 0.7, 0.8, 0.6, 0.4, 1.0, 0.6),
            },
        },
        // -----------------------------------------------------------------
        // Digital Pioneer
        // -----------------------------------------------------------------
        SubProfileDefinition {
            id: "pionnier_evangelisateur",
            parent: PionnierNumerique,
            title: "Digital Evangelist",
            description: "Uses AI to carry the message further, with strong personal faith.",
            qualifier: None,
            centroid: Centroid {
                targets: dims(4.2, 4.4, 2.6, 2.6, 2.8, 3.4, 4.6),
                weights: dims(1.0, 0.8, 0.6, 0.5, 0.4, 0.6, 0.9),
            },
        },
        SubProfileDefinition {
            id: "pionnier_technophile",
            parent: PionnierNumerique,
            title: "Technophile",
            description: "Enthusiasm for the technology itself comes before its religious use.",
            qualifier: None,
            centroid: Centroid {
                targets: dims(2.8, 4.9, 1.8, 2.2, 3.2, 2.2, 4.8),
                weights: dims(0.7, 1.0, 0.7, 0.6, 0.5, 0.4, 0.9),
            },
        },
        SubProfileDefinition {
            id: "pionnier_ministere_augmente",
            parent: PionnierNumerique,
            title: "Augmented Minister",
            description: "A minister who has woven AI into preparation, teaching and administration.",
            qualifier: Some(RespondentRole::Clergy),
            centroid: Centroid {
                targets: dims(4.0, 4.4, 2.6, 3.0, 2.6, 3.2, 4.4),
                weights: dims(0.8, 1.0, 0.6, 0.6, 0.4, 0.5, 0.8),
            },
        },
        // -----------------------------------------------------------------
        // Prudent Discerner
        // -----------------------------------------------------------------
        SubProfileDefinition {
            id: "discerneur_ethicien",
            parent: DiscerneurPrudent,
            title: "Ethicist",
            description: "Discernment is driven by explicit ethical criteria.",
            qualifier: None,
            centroid: Centroid {
                targets: dims(3.9, 2.8, 3.8, 4.6, 1.6, 3.2, 2.8),
                weights: dims(0.7, 0.7, 0.8, 1.0, 0.4, 0.5, 0.6),
            },
        },
        SubProfileDefinition {
            id: "discerneur_accompagnateur",
            parent: DiscerneurPrudent,
            title: "Careful Accompanier",
            description: "A minister weighing every use against the needs of those accompanied.",
            qualifier: Some(RespondentRole::Clergy),
            centroid: Centroid {
                targets: dims(4.2, 3.0, 3.8, 4.0, 2.4, 3.8, 3.0),
                weights: dims(0.8, 0.7, 0.8, 0.8, 0.6, 0.9, 0.6),
            },
        },
        SubProfileDefinition {
            id: "discerneur_experimentateur",
            parent: DiscerneurPrudent,
            title: "Cautious Experimenter",
            description: "Tests AI in small, bounded ways before drawing conclusions.",
            qualifier: None,
            centroid: Centroid {
                targets: dims(3.8, 3.5, 3.5, 3.7, 2.0, 3.2, 3.4),
                weights: dims(0.7, 1.0, 0.8, 0.8, 0.4, 0.5, 0.8),
            },
        },
        // -----------------------------------------------------------------
        // Serene Pragmatist
        // -----------------------------------------------------------------
        SubProfileDefinition {
            id: "pragmatique_efficace",
            parent: PragmatiqueSerein,
            title: "Efficiency Seeker",
            description: "Values AI for the time it saves, with modest religious involvement.",
            qualifier: None,
            centroid: Centroid {
                targets: dims(2.6, 4.2, 2.4, 2.6, 2.0, 2.2, 3.8),
                weights: dims(0.7, 1.0, 0.6, 0.6, 0.5, 0.5, 0.8),
            },
        },
        SubProfileDefinition {
            id: "pragmatique_croyant",
            parent: PragmatiqueSerein,
            title: "Practical Believer",
            description: "A practising believer who sees no conflict in everyday AI use.",
            qualifier: None,
            centroid: Centroid {
                targets: dims(3.8, 3.6, 3.2, 2.9, 2.0, 2.8, 3.5),
                weights: dims(1.0, 0.8, 0.7, 0.5, 0.5, 0.5, 0.7),
            },
        },
        SubProfileDefinition {
            id: "pragmatique_gestionnaire",
            parent: PragmatiqueSerein,
            title: "Parish Administrator",
            description: "A minister delegating administration to AI to free pastoral time.",
            qualifier: Some(RespondentRole::Clergy),
            centroid: Centroid {
                targets: dims(3.6, 3.8, 2.8, 2.8, 1.8, 3.0, 3.6),
                weights: dims(0.7, 1.0, 0.6, 0.6, 0.4, 0.6, 0.7),
            },
        },
        // -----------------------------------------------------------------
        // Critical Watchman
        // -----------------------------------------------------------------
        SubProfileDefinition {
            id: "vigilant_prophetique",
            parent: VigilantCritique,
            title: "Prophetic Voice",
            description: "Critique rooted in faith: AI as a new idol to be named.",
            qualifier: None,
            centroid: Centroid {
                targets: dims(3.6, 1.6, 4.2, 4.6, 1.4, 2.6, 1.6),
                weights: dims(1.0, 0.7, 0.9, 0.9, 0.4, 0.5, 0.7),
            },
        },
        SubProfileDefinition {
            id: "vigilant_humaniste",
            parent: VigilantCritique,
            title: "Secular Humanist",
            description: "Defends human dignity with little reference to religious practice.",
            qualifier: None,
            centroid: Centroid {
                targets: dims(2.0, 2.0, 3.0, 4.6, 1.4, 1.8, 1.8),
                weights: dims(1.0, 0.7, 0.6, 1.0, 0.5, 0.5, 0.7),
            },
        },
        SubProfileDefinition {
            id: "vigilant_lanceur_alerte",
            parent: VigilantCritique,
            title: "Whistleblower",
            description: "Wants to mobilise the community against concrete abuses.",
            qualifier: None,
            centroid: Centroid {
                targets: dims(2.6, 1.8, 3.4, 5.0, 1.4, 3.2, 1.4),
                weights: dims(0.5, 0.7, 0.5, 1.0, 0.4, 0.9, 0.8),
            },
        },
        // -----------------------------------------------------------------
        // Spiritual Explorer
        // -----------------------------------------------------------------
        SubProfileDefinition {
            id: "explorateur_mystique",
            parent: ExplorateurSpirituel,
            title: "Digital Mystic",
            description: "Experiences conversations with AI as part of an intense inner life.",
            qualifier: None,
            centroid: Centroid {
                targets: dims(4.4, 3.6, 2.4, 2.6, 4.6, 2.0, 3.6),
                weights: dims(1.0, 0.6, 0.7, 0.4, 1.0, 0.5, 0.5),
            },
        },
        SubProfileDefinition {
            id: "explorateur_curieux",
            parent: ExplorateurSpirituel,
            title: "Curious Seeker",
            description: "Explores meaning with AI out of curiosity more than conviction.",
            qualifier: None,
            centroid: Centroid {
                targets: dims(3.0, 4.2, 2.0, 2.8, 3.8, 1.8, 4.0),
                weights: dims(0.9, 0.9, 0.6, 0.5, 0.9, 0.5, 0.7),
            },
        },
        SubProfileDefinition {
            id: "explorateur_accompagne",
            parent: ExplorateurSpirituel,
            title: "Companion Seeker",
            description: "A lay believer who finds in AI a form of daily spiritual companionship.",
            qualifier: Some(RespondentRole::Layperson),
            centroid: Centroid {
                targets: dims(3.8, 3.6, 2.4, 3.0, 4.2, 2.8, 3.6),
                weights: dims(0.7, 0.7, 0.6, 0.5, 1.0, 0.8, 0.5),
            },
        },
        // -----------------------------------------------------------------
        // Community Builder
        // -----------------------------------------------------------------
        SubProfileDefinition {
            id: "batisseur_rassembleur",
            parent: BatisseurCommunautaire,
            title: "Gatherer",
            description: "Puts physical gathering first and keeps AI at the margins.",
            qualifier: None,
            centroid: Centroid {
                targets: dims(3.8, 2.8, 3.4, 3.4, 2.0, 4.8, 3.0),
                weights: dims(0.6, 0.8, 0.6, 0.5, 0.4, 1.0, 0.6),
            },
        },
        SubProfileDefinition {
            id: "batisseur_connecteur",
            parent: BatisseurCommunautaire,
            title: "Connector",
            description: "Uses AI and digital tools to keep the community connected.",
            qualifier: None,
            centroid: Centroid {
                targets: dims(3.6, 3.8, 2.8, 3.0, 2.4, 4.4, 3.8),
                weights: dims(0.6, 0.9, 0.5, 0.5, 0.4, 1.0, 0.8),
            },
        },
        SubProfileDefinition {
            id: "batisseur_berger",
            parent: BatisseurCommunautaire,
            title: "Shepherd",
            description: "A minister whose view of AI is shaped by care for the parish.",
            qualifier: Some(RespondentRole::Clergy),
            centroid: Centroid {
                targets: dims(4.2, 3.2, 3.2, 3.4, 2.2, 4.6, 3.2),
                weights: dims(0.9, 0.6, 0.5, 0.5, 0.4, 1.0, 0.6),
            },
        },
        // -----------------------------------------------------------------
        // Distant Observer
        // -----------------------------------------------------------------
        SubProfileDefinition {
            id: "observateur_indifferent",
            parent: ObservateurDistant,
            title: "Indifferent",
            description: "Neither faith nor AI stirs strong feelings.",
            qualifier: None,
            centroid: Centroid {
                targets: dims(1.6, 2.2, 2.0, 2.0, 1.6, 1.4, 2.6),
                weights: dims(1.0, 0.6, 0.6, 0.8, 0.5, 0.8, 0.5),
            },
        },
        SubProfileDefinition {
            id: "observateur_sceptique",
            parent: ObservateurDistant,
            title: "Detached Sceptic",
            description: "Distant from religion, quietly suspicious of AI.",
            qualifier: None,
            centroid: Centroid {
                targets: dims(1.8, 2.0, 2.4, 3.4, 1.6, 1.6, 2.2),
                weights: dims(0.9, 0.8, 0.5, 1.0, 0.4, 0.7, 0.7),
            },
        },
        SubProfileDefinition {
            id: "observateur_utilisateur_seculier",
            parent: ObservateurDistant,
            title: "Secular User",
            description: "Uses AI freely while keeping religion out of the picture.",
            qualifier: None,
            centroid: Centroid {
                targets: dims(1.4, 3.8, 1.6, 2.4, 2.2, 1.4, 3.4),
                weights: dims(1.0, 1.0, 0.5, 0.5, 0.4, 0.7, 0.7),
            },
        },
    ]
}
