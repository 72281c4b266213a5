//! Environment access for manifest resolution.
//!
//! Responsibilities:
//! - Define the `EnvProvider` abstraction over environment variable lookup.
//! - Capture the fixed set of manifest variables into an immutable `EnvSnapshot`.
//! - Provide `.env` file loading with the `DOTENV_DISABLED` gate.
//!
//! Does NOT handle:
//! - Default substitution for unset variables (see `resolver` and `constants`).
//! - Build profile derivation (see `types::profile`).
//!
//! Invariants:
//! - Each variable of interest is read exactly once, at capture time.
//! - Empty environment variables are treated as unset.
//! - Set, non-empty values pass through exactly as provided, whitespace
//!   included; no trimming or normalization happens here.
//! - `load_dotenv()` never overrides variables already present in the process
//!   environment and ignores a missing or unparseable `.env` file.

use std::collections::HashMap;

/// Source of environment variable values.
///
/// The resolver never touches `std::env` directly; it goes through this
/// trait so tests can inject a fake snapshot instead of mutating the
/// process-wide environment.
pub trait EnvProvider {
    /// Look up a variable, returning `None` when it is not set.
    fn lookup(&self, key: &str) -> Option<String>;
}

/// Environment provider backed by the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvProvider for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Fake-friendly provider: any string map can stand in for the environment.
impl EnvProvider for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Read an environment variable, returning None if unset or empty.
///
/// Set, non-empty values are returned exactly as provided. Whitespace is
/// significant: `" My App "` resolves to `" My App "`, and a whitespace-only
/// value counts as set. Downstream consumers that compare against known
/// strings (the production entitlement check) therefore see the raw value.
pub fn env_var_or_none(env: &impl EnvProvider, key: &str) -> Option<String> {
    env.lookup(key).filter(|s| !s.is_empty())
}

/// Load environment variables from a `.env` file if present.
///
/// If the `DOTENV_DISABLED` environment variable is set to "true" or "1",
/// the `.env` file will not be loaded (useful for testing). A missing or
/// unparseable `.env` file is ignored; the process environment stands alone.
pub fn load_dotenv() {
    let disabled = std::env::var("DOTENV_DISABLED")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    if !disabled {
        dotenvy::dotenv().ok();
    }
}

/// Immutable capture of the manifest-relevant environment variables.
///
/// Taken once at resolution start; every field holds the raw value or
/// `None` when the variable is unset or empty. Defaults are applied
/// downstream by the resolver, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    /// EAS_BUILD_PROFILE: explicit build profile, accepted verbatim.
    pub eas_build_profile: Option<String>,
    /// NODE_ENV: consulted only when no explicit profile is set.
    pub node_env: Option<String>,
    /// APP_NAME: display name of the application.
    pub app_name: Option<String>,
    /// APP_SCHEME: deep-link scheme.
    pub app_scheme: Option<String>,
    /// APP_SLUG: build-service project slug.
    pub app_slug: Option<String>,
    /// APP_OWNER: build-service account owning the project.
    pub app_owner: Option<String>,
    /// APP_VERSION: user-visible version string.
    pub app_version: Option<String>,
    /// BUNDLE_IDENTIFIER: iOS bundle identifier.
    pub bundle_identifier: Option<String>,
    /// ANDROID_PACKAGE: Android application package.
    pub android_package: Option<String>,
    /// IOS_URL_SCHEME: reversed client id for Google Sign-In on iOS.
    pub ios_url_scheme: Option<String>,
    /// EAS_PROJECT_ID: build-service project identifier.
    pub eas_project_id: Option<String>,
}

impl EnvSnapshot {
    /// Capture the eleven variables of interest from the given provider.
    ///
    /// Each variable is read exactly once; the snapshot never changes
    /// afterwards even if the underlying environment does.
    pub fn capture(env: &impl EnvProvider) -> Self {
        Self {
            eas_build_profile: env_var_or_none(env, "EAS_BUILD_PROFILE"),
            node_env: env_var_or_none(env, "NODE_ENV"),
            app_name: env_var_or_none(env, "APP_NAME"),
            app_scheme: env_var_or_none(env, "APP_SCHEME"),
            app_slug: env_var_or_none(env, "APP_SLUG"),
            app_owner: env_var_or_none(env, "APP_OWNER"),
            app_version: env_var_or_none(env, "APP_VERSION"),
            bundle_identifier: env_var_or_none(env, "BUNDLE_IDENTIFIER"),
            android_package: env_var_or_none(env, "ANDROID_PACKAGE"),
            ios_url_scheme: env_var_or_none(env, "IOS_URL_SCHEME"),
            eas_project_id: env_var_or_none(env, "EAS_PROJECT_ID"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn fake(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_env_var_or_none_filters_only_unset_and_empty() {
        let env = fake(&[("EMPTY", ""), ("SET", "value")]);

        assert!(env_var_or_none(&env, "UNSET").is_none());
        assert!(env_var_or_none(&env, "EMPTY").is_none());
        assert_eq!(env_var_or_none(&env, "SET"), Some("value".to_string()));
    }

    #[test]
    fn test_env_var_or_none_preserves_whitespace_exactly() {
        // Set values pass through verbatim; whitespace is never stripped
        // and a whitespace-only value counts as set.
        let env = fake(&[("PADDED", " My App "), ("BLANK", "  ")]);

        assert_eq!(
            env_var_or_none(&env, "PADDED"),
            Some(" My App ".to_string())
        );
        assert_eq!(env_var_or_none(&env, "BLANK"), Some("  ".to_string()));
    }

    #[test]
    #[serial]
    fn test_process_env_lookup() {
        temp_env::with_vars([("_MANIFEST_TEST_VAR", Some("from-process"))], || {
            assert_eq!(
                ProcessEnv.lookup("_MANIFEST_TEST_VAR"),
                Some("from-process".to_string())
            );
        });
        assert!(ProcessEnv.lookup("_MANIFEST_TEST_VAR_UNSET").is_none());
    }

    #[test]
    fn test_snapshot_captures_each_variable() {
        let env = fake(&[
            ("EAS_BUILD_PROFILE", "preview"),
            ("NODE_ENV", "production"),
            ("APP_NAME", "Example"),
            ("APP_SCHEME", "example"),
            ("APP_SLUG", "example-app"),
            ("APP_OWNER", "example-org"),
            ("APP_VERSION", "2.3.4"),
            ("BUNDLE_IDENTIFIER", "org.example.app"),
            ("ANDROID_PACKAGE", "org.example.app"),
            ("IOS_URL_SCHEME", "com.googleusercontent.apps.123"),
            ("EAS_PROJECT_ID", "11111111-2222-3333-4444-555555555555"),
        ]);

        let snapshot = EnvSnapshot::capture(&env);
        assert_eq!(snapshot.eas_build_profile.as_deref(), Some("preview"));
        assert_eq!(snapshot.node_env.as_deref(), Some("production"));
        assert_eq!(snapshot.app_name.as_deref(), Some("Example"));
        assert_eq!(snapshot.app_scheme.as_deref(), Some("example"));
        assert_eq!(snapshot.app_slug.as_deref(), Some("example-app"));
        assert_eq!(snapshot.app_owner.as_deref(), Some("example-org"));
        assert_eq!(snapshot.app_version.as_deref(), Some("2.3.4"));
        assert_eq!(snapshot.bundle_identifier.as_deref(), Some("org.example.app"));
        assert_eq!(snapshot.android_package.as_deref(), Some("org.example.app"));
        assert_eq!(
            snapshot.ios_url_scheme.as_deref(),
            Some("com.googleusercontent.apps.123")
        );
        assert_eq!(
            snapshot.eas_project_id.as_deref(),
            Some("11111111-2222-3333-4444-555555555555")
        );
    }

    #[test]
    fn test_snapshot_empty_variables_are_unset_but_whitespace_is_kept() {
        let env = fake(&[("APP_NAME", ""), ("APP_VERSION", "  ")]);
        let snapshot = EnvSnapshot::capture(&env);
        assert!(snapshot.app_name.is_none());
        assert_eq!(snapshot.app_version.as_deref(), Some("  "));
    }
}
