use profile_spectrum::simulation::STRONG_MATCH_SCORE;
use profile_spectrum::{run_simulation, Persona, PrimaryProfile};

#[test]
fn traditionalist_persona_lands_on_guardian() {
    let summary = run_simulation(Persona::Traditionalist, 200, 2024).unwrap();
    assert_eq!(summary.expected, PrimaryProfile::GardienTradition);
    assert_eq!(summary.trials.len(), 200);
    assert!(
        summary.strong_hit_rate >= 0.85,
        "strong hit rate {}",
        summary.strong_hit_rate
    );
    let strong = summary
        .trials
        .iter()
        .filter(|t| t.primary == PrimaryProfile::GardienTradition && t.match_score > STRONG_MATCH_SCORE)
        .count();
    assert_eq!(strong as f64 / 200.0, summary.strong_hit_rate);
}

#[test]
fn every_persona_mostly_finds_its_profile() {
    for persona in Persona::ALL {
        let summary = run_simulation(persona, 100, 17).unwrap();
        assert!(
            summary.hit_rate >= 0.75,
            "{persona}: hit rate {}",
            summary.hit_rate
        );
        assert!(summary.strong_hit_rate <= summary.hit_rate);
        for trial in &summary.trials {
            assert!(trial.sub_profile.starts_with(trial.primary.as_str().split('_').next().unwrap()));
        }
    }
}

#[test]
fn different_seeds_give_different_runs() {
    let a = run_simulation(Persona::Seeker, 30, 1).unwrap();
    let b = run_simulation(Persona::Seeker, 30, 2).unwrap();
    assert_ne!(a.trials, b.trials);
}
