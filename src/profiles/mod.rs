//! Profile archetypes and the matcher that places a respondent among them.

pub mod catalog;
pub mod definitions;
pub mod matching;
pub mod sub_profiles;

pub use catalog::{ProfileCatalog, SUB_PROFILES_PER_PROFILE};
pub use definitions::{primary_profiles, Centroid, PrimaryProfile, ProfileDefinition};
pub use matching::{
    centroid_similarity, match_profiles, match_sub_profile, rank_profiles, select_secondary,
    weighted_distance, ProfileMatch, ProfileMatching, SubProfileMatch, MAX_DISTANCE,
};
pub use sub_profiles::{sub_profiles, SubProfileDefinition};
