//! Validated profile tables.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::dimensions::Dimension;
use crate::error::ScoringError;

use super::definitions::{primary_profiles, Centroid, PrimaryProfile, ProfileDefinition};
use super::sub_profiles::{sub_profiles, SubProfileDefinition};

/// Sub-profiles required under every primary profile.
pub const SUB_PROFILES_PER_PROFILE: usize = 3;

static BUILTIN: Lazy<ProfileCatalog> = Lazy::new(|| {
    ProfileCatalog::new(primary_profiles(), sub_profiles())
        .expect("builtin profile catalog failed validation")
});

/// Primary and sub-profile definitions, checked for structural consistency.
#[derive(Debug, Clone)]
pub struct ProfileCatalog {
    profiles: Vec<ProfileDefinition>,
    sub_profiles: Vec<SubProfileDefinition>,
}

impl ProfileCatalog {
    pub fn new(
        profiles: Vec<ProfileDefinition>,
        sub_profiles: Vec<SubProfileDefinition>,
    ) -> Result<Self, ScoringError> {
        if profiles.is_empty() {
            return Err(ScoringError::EmptyProfileTable);
        }

        let mut seen = HashSet::new();
        for profile in &profiles {
            if !seen.insert(profile.id) {
                return Err(ScoringError::invalid_catalog(format!(
                    "duplicate profile {}",
                    profile.id
                )));
            }
            validate_centroid(profile.id.as_str(), &profile.centroid)?;
        }

        let mut sub_ids = HashSet::new();
        for sub in &sub_profiles {
            if !sub_ids.insert(sub.id) {
                return Err(ScoringError::invalid_catalog(format!(
                    "duplicate sub-profile {}",
                    sub.id
                )));
            }
            if !seen.contains(&sub.parent) {
                return Err(ScoringError::invalid_catalog(format!(
                    "sub-profile {} references unknown parent {}",
                    sub.id, sub.parent
                )));
            }
            validate_centroid(sub.id, &sub.centroid)?;
        }

        for profile in &profiles {
            let children = sub_profiles.iter().filter(|s| s.parent == profile.id).count();
            if children != SUB_PROFILES_PER_PROFILE {
                return Err(ScoringError::invalid_catalog(format!(
                    "profile {} has {} sub-profiles, expected {}",
                    profile.id, children, SUB_PROFILES_PER_PROFILE
                )));
            }
        }

        Ok(Self {
            profiles,
            sub_profiles,
        })
    }

    /// The built-in catalog, validated on first use. A failure here is a
    /// programming error in the static tables and panics.
    pub fn builtin() -> &'static ProfileCatalog {
        &BUILTIN
    }

    pub fn profiles(&self) -> &[ProfileDefinition] {
        &self.profiles
    }

    pub fn sub_profiles(&self) -> &[SubProfileDefinition] {
        &self.sub_profiles
    }

    pub fn profile(&self, id: PrimaryProfile) -> Option<&ProfileDefinition> {
        self.profiles.iter().find(|p| p.id == id)
    }

    pub fn sub_profile(&self, id: &str) -> Option<&SubProfileDefinition> {
        self.sub_profiles.iter().find(|s| s.id == id)
    }

    /// Like [`profile`](Self::profile), for ids that came out of this catalog.
    pub fn require_profile(&self, id: PrimaryProfile) -> Result<&ProfileDefinition, ScoringError> {
        self.profile(id)
            .ok_or_else(|| ScoringError::invalid_catalog(format!("unknown profile {id}")))
    }

    pub fn require_sub_profile(&self, id: &str) -> Result<&SubProfileDefinition, ScoringError> {
        self.sub_profile(id)
            .ok_or_else(|| ScoringError::invalid_catalog(format!("unknown sub-profile {id}")))
    }

    /// Sub-profiles under `parent`, in declaration order.
    pub fn children_of(
        &self,
        parent: PrimaryProfile,
    ) -> impl Iterator<Item = &SubProfileDefinition> + '_ {
        self.sub_profiles.iter().filter(move |s| s.parent == parent)
    }
}

fn validate_centroid(owner: &str, centroid: &Centroid) -> Result<(), ScoringError> {
    for dim in Dimension::ALL {
        let target = centroid.target(dim);
        if !target.is_finite() || !(1.0..=5.0).contains(&target) {
            return Err(ScoringError::invalid_catalog(format!(
                "{owner}: {dim} target {target} outside [1,5]"
            )));
        }
        let weight = centroid.weight(dim);
        if !weight.is_finite() || weight <= 0.0 {
            return Err(ScoringError::invalid_catalog(format!(
                "{owner}: {dim} weight must be > 0"
            )));
        }
    }
    Ok(())
}
