//! Centralized constants for the app-manifest workspace.
//!
//! This module contains default values used across crates to avoid
//! magic value duplication and improve maintainability.

// =============================================================================
// Identity Defaults
// =============================================================================

/// Default application version when APP_VERSION is unset.
pub const DEFAULT_APP_VERSION: &str = "1.0.0";

/// Default iOS bundle identifier when BUNDLE_IDENTIFIER is unset.
pub const DEFAULT_BUNDLE_IDENTIFIER: &str = "com.example";

/// Default Android application package when ANDROID_PACKAGE is unset.
pub const DEFAULT_ANDROID_PACKAGE: &str = "com.example";

/// Default reversed iOS URL scheme for Google Sign-In when IOS_URL_SCHEME is unset.
pub const DEFAULT_IOS_URL_SCHEME: &str = "example.scheme";

// =============================================================================
// Build Profiles
// =============================================================================

/// Profile name that selects the production push-notification entitlement.
pub const PROFILE_PRODUCTION: &str = "production";

/// Fallback profile when neither EAS_BUILD_PROFILE nor a production
/// NODE_ENV is present.
pub const PROFILE_DEVELOPMENT: &str = "development";

// =============================================================================
// Credential Files
// =============================================================================

/// Project-relative path of the iOS Firebase configuration plist.
///
/// Written by an external provisioning step and kept out of version control;
/// the resolver only probes for its existence.
pub const IOS_GOOGLE_SERVICES_FILE: &str = "google-services/GoogleService-Info.plist";

/// Project-relative path of the Android Firebase configuration file.
pub const ANDROID_GOOGLE_SERVICES_FILE: &str = "google-services/google-services.json";

// =============================================================================
// Android SDK Bounds
// =============================================================================

/// Android SDK version the app is compiled against.
pub const ANDROID_COMPILE_SDK_VERSION: u32 = 35;

/// Android SDK version the app targets at runtime.
pub const ANDROID_TARGET_SDK_VERSION: u32 = 35;

/// Minimum supported Android SDK version.
pub const ANDROID_MIN_SDK_VERSION: u32 = 24;
