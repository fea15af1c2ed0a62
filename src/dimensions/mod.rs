//! Dimension scoring: answers -> seven bias-adjusted `DimensionScore`s.

pub mod calculators;
pub mod types;

pub use calculators::{
    calculate_ai_openness_dimension, calculate_all_dimensions, calculate_all_dimensions_with,
    calculate_community_influence_dimension, calculate_dimension,
    calculate_ethical_concern_dimension, calculate_future_orientation_dimension,
    calculate_psychological_perception_dimension, calculate_raw_dimension_value,
    calculate_religiosity_dimension, calculate_sacred_boundary_dimension, relevant_questions,
    score_item, QuestionItem, Scorer,
};
pub use types::{Dimension, DimensionLevel, DimensionMap, DimensionScore, SevenDimensions};
