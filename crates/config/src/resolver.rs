//! Manifest resolution.
//!
//! Responsibilities:
//! - Capture the environment snapshot, derive the build profile, probe the
//!   optional credential files, and assemble the final `AppManifest`.
//!
//! Does NOT handle:
//! - Serializing or emitting the manifest (the CLI does that).
//! - Validating resolved values; invalid combinations (e.g. an empty
//!   required identifier) are rejected downstream by the build tool.
//!
//! Invariants:
//! - `resolve()` is total: every lookup has a default and every file probe
//!   has an absence fallback, so resolution itself cannot fail.
//! - The output is deterministic given the environment and filesystem state
//!   at resolution time; nothing is cached across invocations.

use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

use crate::constants::{
    ANDROID_COMPILE_SDK_VERSION, ANDROID_GOOGLE_SERVICES_FILE, ANDROID_MIN_SDK_VERSION,
    ANDROID_TARGET_SDK_VERSION, DEFAULT_ANDROID_PACKAGE, DEFAULT_APP_VERSION,
    DEFAULT_BUNDLE_IDENTIFIER, DEFAULT_IOS_URL_SCHEME, IOS_GOOGLE_SERVICES_FILE,
};
use crate::payload;
use crate::probe::{FileProbe, FsProbe, file_if_exists};
use crate::snapshot::{EnvProvider, EnvSnapshot, ProcessEnv};
use crate::types::{
    AndroidManifest, AppManifest, ApsEnvironment, BuildProfile, EasExtra, Entitlements, Extra,
    IosManifest,
};

/// Errors from resolver construction.
///
/// Resolution itself never fails; only the ambient edge of discovering the
/// project root from the process can.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("unable to determine project root: {0}")]
    ProjectRootUnavailable(#[from] std::io::Error),
}

/// Resolves the app manifest from an environment provider and a file probe.
///
/// Both collaborators are injected so tests can supply fakes; production
/// code uses [`ManifestResolver::from_process`].
pub struct ManifestResolver<E = ProcessEnv, P = FsProbe> {
    project_root: PathBuf,
    env: E,
    probe: P,
}

impl ManifestResolver {
    /// Resolver over the real process environment and filesystem, rooted at
    /// the current directory.
    pub fn from_process() -> Result<Self, ResolveError> {
        Ok(Self::with_project_root(std::env::current_dir()?))
    }

    /// Resolver over the real process environment and filesystem, rooted at
    /// the given project directory.
    pub fn with_project_root(project_root: PathBuf) -> Self {
        Self::new(project_root, ProcessEnv, FsProbe)
    }
}

impl<E: EnvProvider, P: FileProbe> ManifestResolver<E, P> {
    /// Fully injected resolver.
    pub fn new(project_root: PathBuf, env: E, probe: P) -> Self {
        Self {
            project_root,
            env,
            probe,
        }
    }

    /// Resolve the manifest.
    ///
    /// Reads the eleven environment variables once, derives the build
    /// profile, probes the two credential files, and assembles the result
    /// with the static payload. Never fails.
    pub fn resolve(&self) -> AppManifest {
        let snapshot = EnvSnapshot::capture(&self.env);
        let profile = BuildProfile::derive(
            snapshot.eas_build_profile.as_deref(),
            snapshot.node_env.as_deref(),
        );
        let aps_environment = ApsEnvironment::from_profile(&profile);
        debug!(profile = %profile, ?aps_environment, "derived build profile");

        let ios_google_services =
            file_if_exists(&self.probe, self.project_root.join(IOS_GOOGLE_SERVICES_FILE));
        let android_google_services = file_if_exists(
            &self.probe,
            self.project_root.join(ANDROID_GOOGLE_SERVICES_FILE),
        );
        debug!(
            ios_present = ios_google_services.is_some(),
            android_present = android_google_services.is_some(),
            "probed google services files"
        );

        let ios_url_scheme = snapshot
            .ios_url_scheme
            .unwrap_or_else(|| DEFAULT_IOS_URL_SCHEME.to_string());

        AppManifest {
            name: snapshot.app_name.unwrap_or_default(),
            slug: snapshot.app_slug.unwrap_or_default(),
            scheme: snapshot.app_scheme.unwrap_or_default(),
            version: snapshot
                .app_version
                .unwrap_or_else(|| DEFAULT_APP_VERSION.to_string()),
            owner: snapshot.app_owner.unwrap_or_default(),
            new_arch_enabled: true,
            user_interface_style: "automatic".to_string(),
            ios: IosManifest {
                supports_tablet: true,
                require_full_screen: true,
                bundle_identifier: snapshot
                    .bundle_identifier
                    .unwrap_or_else(|| DEFAULT_BUNDLE_IDENTIFIER.to_string()),
                google_services_file: ios_google_services,
                info_plist: payload::ios_info_plist(),
                entitlements: Entitlements { aps_environment },
                icon: payload::ios_icon(),
            },
            android: AndroidManifest {
                package: snapshot
                    .android_package
                    .unwrap_or_else(|| DEFAULT_ANDROID_PACKAGE.to_string()),
                google_services_file: android_google_services,
                permissions: payload::android_permissions(),
                adaptive_icon: payload::android_adaptive_icon(),
                compile_sdk_version: ANDROID_COMPILE_SDK_VERSION,
                target_sdk_version: ANDROID_TARGET_SDK_VERSION,
                min_sdk_version: ANDROID_MIN_SDK_VERSION,
            },
            web: payload::web_manifest(),
            plugins: payload::plugins(&ios_url_scheme),
            experiments: payload::experiments(),
            extra: Extra {
                router: payload::router_extra(),
                eas: EasExtra {
                    project_id: snapshot.eas_project_id.unwrap_or_default(),
                },
            },
            asset_bundle_patterns: payload::asset_bundle_patterns(),
        }
    }
}
