//! Build profile and push-notification entitlement types.
//!
//! Responsibilities:
//! - Define `BuildProfile` and its derivation priority chain.
//! - Map a profile to the iOS `aps-environment` entitlement value.
//!
//! Does NOT handle:
//! - Reading environment variables (see `snapshot` module).
//! - Manifest assembly (see `resolver` module).
//!
//! Invariants:
//! - An explicit EAS_BUILD_PROFILE is accepted verbatim and never validated
//!   against a known set; custom profiles ("staging", "preview") are legal.
//! - The production entitlement is selected only by the exact profile string
//!   "production". Every other profile, recognized or not, maps to the
//!   development entitlement. Do not broaden this check.

use serde::{Deserialize, Serialize};

use crate::constants::{PROFILE_DEVELOPMENT, PROFILE_PRODUCTION};

/// Build profile selected for this invocation.
///
/// A thin wrapper over the raw profile string: the build service accepts
/// arbitrary profile names, so no enum can enumerate them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildProfile(String);

impl BuildProfile {
    /// Derive the profile from the environment snapshot values.
    ///
    /// Priority chain:
    /// 1. `EAS_BUILD_PROFILE`, verbatim, when set;
    /// 2. `"production"` when `NODE_ENV` equals `"production"`;
    /// 3. `"development"` otherwise.
    pub fn derive(eas_build_profile: Option<&str>, node_env: Option<&str>) -> Self {
        match eas_build_profile {
            Some(profile) => Self(profile.to_string()),
            None if node_env == Some(PROFILE_PRODUCTION) => Self(PROFILE_PRODUCTION.to_string()),
            None => Self(PROFILE_DEVELOPMENT.to_string()),
        }
    }

    /// The raw profile string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True only for the exact profile string "production".
    pub fn is_production(&self) -> bool {
        self.0 == PROFILE_PRODUCTION
    }
}

impl std::fmt::Display for BuildProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// iOS `aps-environment` signing entitlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApsEnvironment {
    Development,
    Production,
}

impl ApsEnvironment {
    /// Select the entitlement for a derived profile.
    ///
    /// Only the exact string "production" gets the production entitlement;
    /// unrecognized profiles fall through to development.
    pub fn from_profile(profile: &BuildProfile) -> Self {
        if profile.is_production() {
            Self::Production
        } else {
            Self::Development
        }
    }
}
