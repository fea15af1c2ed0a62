use profile_spectrum::profiles::{primary_profiles, sub_profiles};
use profile_spectrum::{
    calculate_profile_spectrum_with, load_config_from_path, AnswerValue, Answers,
    ProfileCatalog, ScoringConfig, ScoringError,
};
use tempfile::tempdir;

fn answers() -> Answers {
    Answers::new()
        .with("crs_intellect", AnswerValue::Choice("souvent".into()))
        .with("ia_frequence_usage", AnswerValue::Choice("quotidien".into()))
        .with("futur_ia_eglise", AnswerValue::Choice("opportunite".into()))
}

#[test]
fn loads_partial_config_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scoring.json");
    std::fs::write(
        &path,
        r#"{"maxInsights": 1, "secondaryGapThreshold": 100.0, "lowThreshold": 2.0}"#,
    )
    .unwrap();

    let config = load_config_from_path(&path).unwrap();
    assert_eq!(config.max_insights, 1);
    assert_eq!(config.low_threshold, 2.0);
    assert_eq!(config.high_threshold, ScoringConfig::default().high_threshold);

    let spectrum =
        calculate_profile_spectrum_with(&answers(), &config, ProfileCatalog::builtin()).unwrap();
    assert!(spectrum.insights.len() <= 1);
    // Any runner-up is within 100 points.
    assert_eq!(spectrum.secondary, Some(spectrum.all_matches[1]));
}

#[test]
fn zero_gap_threshold_disables_secondary() {
    let config = ScoringConfig {
        secondary_gap_threshold: 0.0,
        ..ScoringConfig::default()
    };
    let spectrum =
        calculate_profile_spectrum_with(&answers(), &config, ProfileCatalog::builtin()).unwrap();
    assert_eq!(spectrum.secondary, None);
}

#[test]
fn population_parameters_drive_percentiles() {
    let mut config = ScoringConfig::default();
    config.dimensions.religiosity.population.mean = 1.0;
    config.dimensions.religiosity.population.std_dev = 0.5;
    let shifted =
        calculate_profile_spectrum_with(&answers(), &config, ProfileCatalog::builtin()).unwrap();
    let baseline = calculate_profile_spectrum_with(
        &answers(),
        &ScoringConfig::default(),
        ProfileCatalog::builtin(),
    )
    .unwrap();
    assert_eq!(
        shifted.dimensions.religiosity.value,
        baseline.dimensions.religiosity.value
    );
    assert!(shifted.dimensions.religiosity.percentile > baseline.dimensions.religiosity.percentile);
}

#[test]
fn invalid_and_unreadable_configs_are_errors() {
    let dir = tempdir().unwrap();

    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, r#"{"lowThreshold": 4.0, "highThreshold": 3.0}"#).unwrap();
    assert!(matches!(
        load_config_from_path(&bad),
        Err(ScoringError::InvalidConfig(_))
    ));

    let garbled = dir.path().join("garbled.json");
    std::fs::write(&garbled, "{ not json").unwrap();
    assert!(matches!(load_config_from_path(&garbled), Err(ScoringError::Json(_))));

    let missing = dir.path().join("missing.json");
    assert!(matches!(load_config_from_path(&missing), Err(ScoringError::Io(_))));
}

#[test]
fn custom_catalog_must_be_well_formed() {
    assert!(matches!(
        ProfileCatalog::new(Vec::new(), Vec::new()),
        Err(ScoringError::EmptyProfileTable)
    ));

    let mut profiles = primary_profiles();
    profiles.push(profiles[0].clone());
    assert!(matches!(
        ProfileCatalog::new(profiles, sub_profiles()),
        Err(ScoringError::InvalidCatalog(_))
    ));

    let catalog = ProfileCatalog::new(primary_profiles(), sub_profiles()).unwrap();
    let spectrum =
        calculate_profile_spectrum_with(&answers(), &ScoringConfig::default(), &catalog).unwrap();
    assert_eq!(spectrum.all_matches.len(), 8);
}
