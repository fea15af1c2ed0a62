#![forbid(unsafe_code)]

//! # profile-spectrum
//!
//! Scoring engine for the faith and AI usage survey.
//!
//! Raw survey answers are turned into seven dimension scores on a 1 to 5
//! scale, corrected for social desirability bias, and matched against eight
//! archetypal profiles (and 24 finer sub-profiles) by weighted distance to
//! their centroids. The result, a [`ProfileSpectrum`], also carries tension
//! points, growth areas, insights and a narrative interpretation.
//!
//! Every entry point is a pure function of its inputs and the immutable
//! built-in tables, so scoring can run from any number of threads without
//! coordination.
//!
//! ```no_run
//! use profile_spectrum::{calculate_profile_spectrum, Answers};
//!
//! let answers: Answers = serde_json::from_str(r#"{"crs_intellect": "souvent"}"#).unwrap();
//! let spectrum = calculate_profile_spectrum(&answers).unwrap();
//! println!("{} ({:.1})", spectrum.primary.profile, spectrum.primary.match_score);
//! ```

pub mod answers;
pub mod bias;
pub mod config;
pub mod dimensions;
pub mod error;
pub mod insights;
pub mod population;
pub mod profiles;
pub mod report;
pub mod score_maps;
pub mod simulation;
pub mod spectrum;
pub mod stats;
pub mod tensions;

pub use answers::{AnswerValue, Answers, RespondentRole};
pub use config::{load_config_from_path, ScoringConfig};
pub use dimensions::{
    calculate_all_dimensions, calculate_all_dimensions_with, Dimension, DimensionLevel,
    DimensionMap, DimensionScore, SevenDimensions,
};
pub use error::ScoringError;
pub use insights::{AdvancedInsight, GrowthArea, InsightCategory, Interpretation};
pub use population::{score_population, summarize_population, PopulationSummary};
pub use profiles::{
    PrimaryProfile, ProfileCatalog, ProfileMatch, ProfileMatching, SubProfileMatch,
};
pub use report::{build_report, render_report_markdown, SpectrumReport};
pub use simulation::{run_simulation, simulate_answers, Persona, SimulationSummary};
pub use spectrum::{
    calculate_profile_spectrum, calculate_profile_spectrum_with, get_enhanced_profile_data,
    get_simple_profile, spectrum_from_dimensions, EnhancedProfileData, ProfileSpectrum,
    SimpleProfile,
};
pub use tensions::{TensionPattern, TensionPoint};
