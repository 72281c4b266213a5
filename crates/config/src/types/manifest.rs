//! Manifest type definitions.
//!
//! Responsibilities:
//! - Define the serde shape of the resolved app manifest, matching the
//!   schema the external build tool consumes.
//! - Reproduce the build tool's key casing and optional-key semantics.
//!
//! Does NOT handle:
//! - Resolution of values from the environment (see `resolver` module).
//! - The static literal payload values (see `payload` module).
//!
//! Invariants:
//! - Struct field order is serialization order and matches the schema.
//! - Optional credential file references are omitted from the output
//!   entirely when absent, never serialized as null or "".
//! - Plugin entries serialize either as a bare name string or as a
//!   two-element `[name, options]` array.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

use super::profile::ApsEnvironment;

/// Resolved application manifest handed to the external build tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppManifest {
    /// Display name of the application.
    pub name: String,
    /// Build-service project slug.
    pub slug: String,
    /// Deep-link URL scheme.
    pub scheme: String,
    /// User-visible version string.
    pub version: String,
    /// Build-service account owning the project.
    pub owner: String,
    /// Whether the new native architecture is enabled.
    pub new_arch_enabled: bool,
    /// Light/dark appearance handling ("automatic").
    pub user_interface_style: String,
    pub ios: IosManifest,
    pub android: AndroidManifest,
    pub web: WebManifest,
    /// Ordered build-plugin configuration entries.
    pub plugins: Vec<PluginEntry>,
    pub experiments: Experiments,
    pub extra: Extra,
    /// Glob patterns for assets bundled into the binary.
    pub asset_bundle_patterns: Vec<String>,
}

/// iOS platform block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IosManifest {
    pub supports_tablet: bool,
    pub require_full_screen: bool,
    pub bundle_identifier: String,
    /// Absolute path of the Firebase plist, present only when the
    /// provisioning step has written the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_services_file: Option<PathBuf>,
    pub info_plist: InfoPlist,
    pub entitlements: Entitlements,
    pub icon: IosIcon,
}

/// Keys injected into the iOS Info.plist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoPlist {
    #[serde(rename = "ITSAppUsesNonExemptEncryption")]
    pub its_app_uses_non_exempt_encryption: bool,
    #[serde(rename = "UIBackgroundModes")]
    pub ui_background_modes: Vec<String>,
}

/// iOS signing entitlements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entitlements {
    #[serde(rename = "aps-environment")]
    pub aps_environment: ApsEnvironment,
}

/// iOS app icon variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IosIcon {
    pub dark: String,
    pub light: String,
    pub tinted: String,
}

/// Android platform block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidManifest {
    pub package: String,
    /// Absolute path of the Firebase services file, present only when the
    /// provisioning step has written it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_services_file: Option<PathBuf>,
    pub permissions: Vec<String>,
    pub adaptive_icon: AdaptiveIcon,
    pub compile_sdk_version: u32,
    pub target_sdk_version: u32,
    pub min_sdk_version: u32,
}

/// Android adaptive launcher icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptiveIcon {
    pub foreground_image: String,
    pub background_color: String,
}

/// Web platform block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebManifest {
    pub bundler: String,
    pub output: String,
    pub favicon: String,
}

/// One build-plugin configuration entry.
///
/// The build tool accepts either a bare plugin name or a `[name, options]`
/// pair; the untagged representation reproduces both wire shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PluginEntry {
    Bare(String),
    Configured(String, Value),
}

impl PluginEntry {
    /// Plugin name regardless of entry shape.
    pub fn name(&self) -> &str {
        match self {
            Self::Bare(name) => name,
            Self::Configured(name, _) => name,
        }
    }
}

/// Feature-experiment flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experiments {
    pub typed_routes: bool,
}

/// Free-form extra bag passed through to the build tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extra {
    pub router: RouterExtra,
    pub eas: EasExtra,
}

/// Router configuration carried in the extra bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouterExtra {
    pub origin: bool,
}

/// Build-service project reference carried in the extra bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EasExtra {
    pub project_id: String,
}
