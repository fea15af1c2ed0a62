use std::sync::Arc;
use std::thread;

use profile_spectrum::{
    calculate_all_dimensions, calculate_profile_spectrum, Answers, Dimension, PrimaryProfile,
    ProfileCatalog, ProfileSpectrum, ScoringConfig,
};
use serde_json::json;

fn answers(value: serde_json::Value) -> Answers {
    serde_json::from_value(value).unwrap()
}

fn fixtures() -> Vec<Answers> {
    vec![
        Answers::new(),
        answers(json!({
            "profil_statut": "laic",
            "crs_intellect": "tres_souvent",
            "crs_ideologie": "totalement",
            "crs_pratique_privee": "souvent",
            "crs_pratique_publique": "tres_souvent",
            "ia_frequence_usage": "jamais",
            "ia_outils_utilises": ["aucun"],
            "sacre_ia_sacrements": "inacceptable",
            "sacre_limites": ["sacrements", "confession", "priere", "homelie"],
            "ethique_inquietude_globale": "forte",
            "ethique_preoccupations": {"vie_privee": 5, "manipulation": 4},
            "communaute_influence": "determinante",
            "futur_ia_eglise": "menace"
        })),
        answers(json!({
            "profil_statut": "clerge",
            "ia_frequence_usage": "plusieurs_fois_par_jour",
            "ia_confort": 5,
            "clerge_ia_ministere": {"homelie": 5, "administration": 5, "catechese": 4},
            "clerge_ia_homelie": "systematiquement",
            "psy_perception_ia": "presence",
            "psy_attachement": 5,
            "futur_ia_eglise": "renouveau",
            "futur_adoption": "deja",
            "mc_jamais_menti": "vrai",
            "mc_toujours_courtois": "vrai",
            "mc_parfois_irrite": "faux"
        })),
        // Wrong shapes, unknown tokens and unknown keys everywhere.
        answers(json!({
            "profil_statut": ["clerge"],
            "crs_intellect": null,
            "crs_ideologie": "sometimes",
            "ia_confort": "not a number",
            "ia_frequence_usage": 42,
            "ia_outils_utilises": "chatgpt",
            "sacre_spiritualite_authentique": 99,
            "ethique_preoccupations": {"a": "x", "b": true},
            "psy_attachement": -7,
            "mc_jamais_menti": "peut_etre",
            "unrelated_question": {"nested": {"deep": [1, 2, 3]}}
        })),
    ]
}

fn check_invariants(spectrum: &ProfileSpectrum) {
    for (dim, score) in spectrum.dimensions.iter() {
        assert!((1.0..=5.0).contains(&score.value), "{dim} value {}", score.value);
        assert!((0.0..=1.0).contains(&score.confidence), "{dim} confidence");
        assert!((1..=99).contains(&score.percentile), "{dim} percentile");
    }

    assert_eq!(spectrum.all_matches.len(), PrimaryProfile::ALL.len());
    for profile in PrimaryProfile::ALL {
        assert!(spectrum.all_matches.iter().any(|m| m.profile == profile));
    }
    for m in &spectrum.all_matches {
        assert!((0.0..=100.0).contains(&m.match_score));
    }
    for w in spectrum.all_matches.windows(2) {
        assert!(w[0].match_score >= w[1].match_score);
    }
    assert_eq!(spectrum.primary, spectrum.all_matches[0]);

    let gap = spectrum.all_matches[0].match_score - spectrum.all_matches[1].match_score;
    if gap < ScoringConfig::default().secondary_gap_threshold {
        assert_eq!(spectrum.secondary, Some(spectrum.all_matches[1]));
    } else {
        assert_eq!(spectrum.secondary, None);
    }

    assert_eq!(spectrum.sub_profile.parent, spectrum.primary.profile);
    let sub = ProfileCatalog::builtin()
        .sub_profile(spectrum.sub_profile.sub_profile)
        .unwrap();
    assert_eq!(sub.parent, spectrum.primary.profile);
    assert!((0.0..=100.0).contains(&spectrum.sub_profile.match_score));

    assert!(spectrum.tensions.len() <= 3);
    assert!(spectrum.growth_areas.len() <= 3);
    assert!(spectrum.insights.len() <= 5);
    for t in &spectrum.tensions {
        assert!((0.0..=1.0).contains(&t.intensity));
    }
    for w in spectrum.insights.windows(2) {
        assert!(w[0].priority >= w[1].priority);
    }
    for w in spectrum.growth_areas.windows(2) {
        assert!(w[0].priority >= w[1].priority);
    }
    assert!((0.0..=10.0).contains(&spectrum.bias_score));
}

#[test]
fn invariants_hold_for_all_fixtures() {
    for answers in fixtures() {
        let spectrum = calculate_profile_spectrum(&answers).unwrap();
        check_invariants(&spectrum);
    }
}

#[test]
fn empty_answers_give_neutral_dimensions() {
    let spectrum = calculate_profile_spectrum(&Answers::new()).unwrap();
    for (_, score) in spectrum.dimensions.iter() {
        assert_eq!(score.value, 3.0);
        assert!(score.confidence <= 0.1);
    }
    assert_eq!(spectrum.bias_score, 5.0);
    check_invariants(&spectrum);
}

#[test]
fn scoring_is_deterministic() {
    for answers in fixtures() {
        let a = calculate_profile_spectrum(&answers).unwrap();
        let b = calculate_profile_spectrum(&answers).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}

#[test]
fn spectrum_dimensions_equal_standalone_dimensions() {
    for answers in fixtures() {
        let spectrum = calculate_profile_spectrum(&answers).unwrap();
        assert_eq!(spectrum.dimensions, calculate_all_dimensions(&answers));
    }
}

#[test]
fn clergy_branch_is_used_for_clergy() {
    let spectrum = calculate_profile_spectrum(&fixtures()[2]).unwrap();
    assert_eq!(spectrum.role, profile_spectrum::RespondentRole::Clergy);
    assert!(spectrum.dimensions.get(Dimension::AiOpenness).value > 4.0);
}

#[test]
fn unknown_shapes_do_not_count_as_answers() {
    let spectrum = calculate_profile_spectrum(&fixtures()[3]).unwrap();
    // A list is not a status, so the respondent is lay.
    assert_eq!(spectrum.role, profile_spectrum::RespondentRole::Layperson);
    // Only the unknown belief token was usable for religiosity: midpoint.
    assert_eq!(calculate_all_dimensions(&fixtures()[3]).religiosity.value, 2.9);
}

#[test]
fn concurrent_scoring_matches_sequential() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ProfileSpectrum>();
    assert_send_sync::<Answers>();
    assert_send_sync::<ProfileCatalog>();

    let inputs = Arc::new(fixtures());
    let expected: Vec<ProfileSpectrum> = inputs
        .iter()
        .map(|a| calculate_profile_spectrum(a).unwrap())
        .collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let inputs = Arc::clone(&inputs);
            thread::spawn(move || {
                inputs
                    .iter()
                    .map(|a| calculate_profile_spectrum(a).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
