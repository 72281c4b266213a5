//! Static literal payload of the manifest.
//!
//! Responsibilities:
//! - Declare the inert manifest data: icons, permissions, plugin option
//!   tables, SDK bounds, experiment flags.
//!
//! Does NOT handle:
//! - Anything environment-derived; the one env-derived plugin option
//!   (the Google Sign-In URL scheme) is passed in by the resolver.
//!
//! Invariants:
//! - Everything here is declarative data, emitted unchanged and
//!   byte-identical across resolutions.
//! - Asset paths are passed through unverified; the build tool rejects
//!   missing assets on its own.

use serde_json::json;

use crate::types::{
    AdaptiveIcon, Experiments, InfoPlist, IosIcon, PluginEntry, RouterExtra, WebManifest,
};

/// iOS app icon variants.
pub fn ios_icon() -> IosIcon {
    IosIcon {
        dark: "./assets/images/ios-light.png".to_string(),
        light: "./assets/images/ios-light.png".to_string(),
        tinted: "./assets/images/ios-tinted.png".to_string(),
    }
}

/// Keys injected into the iOS Info.plist.
pub fn ios_info_plist() -> InfoPlist {
    InfoPlist {
        its_app_uses_non_exempt_encryption: false,
        ui_background_modes: vec!["remote-notification".to_string()],
    }
}

/// Android runtime permission declarations.
pub fn android_permissions() -> Vec<String> {
    vec![
        "android.permission.CAMERA".to_string(),
        "android.permission.RECORD_AUDIO".to_string(),
    ]
}

/// Android adaptive launcher icon.
pub fn android_adaptive_icon() -> AdaptiveIcon {
    AdaptiveIcon {
        foreground_image: "./assets/images/adaptive-icon.png".to_string(),
        background_color: "#476481".to_string(),
    }
}

/// Web platform block.
pub fn web_manifest() -> WebManifest {
    WebManifest {
        bundler: "metro".to_string(),
        output: "static".to_string(),
        favicon: "./assets/images/favicon.png".to_string(),
    }
}

/// Feature-experiment flags.
pub fn experiments() -> Experiments {
    Experiments { typed_routes: true }
}

/// Router configuration carried in the extra bag.
pub fn router_extra() -> RouterExtra {
    RouterExtra { origin: false }
}

/// Glob patterns for assets bundled into the binary.
pub fn asset_bundle_patterns() -> Vec<String> {
    vec!["**/*".to_string()]
}

/// Ordered build-plugin configuration entries.
///
/// `ios_url_scheme` is the one env-derived value in the list; it feeds the
/// Google Sign-In plugin options. Everything else is literal.
pub fn plugins(ios_url_scheme: &str) -> Vec<PluginEntry> {
    vec![
        PluginEntry::Bare("@react-native-firebase/app".to_string()),
        PluginEntry::Configured(
            "expo-build-properties".to_string(),
            json!({ "ios": { "useFrameworks": "static" } }),
        ),
        PluginEntry::Configured(
            "expo-splash-screen".to_string(),
            json!({
                "backgroundColor": "#FFFFFF",
                "image": "./assets/images/splash-icon.png",
                "dark": {
                    "image": "./assets/images/splash-icon.png",
                    "backgroundColor": "#000000",
                },
                "imageWidth": 200,
            }),
        ),
        PluginEntry::Configured(
            "expo-camera".to_string(),
            json!({
                "cameraPermission": "Allow $(PRODUCT_NAME) to access your camera",
                "microphonePermission": "Allow $(PRODUCT_NAME) to access your microphone",
                "recordAudioAndroid": true,
            }),
        ),
        PluginEntry::Bare("expo-router".to_string()),
        PluginEntry::Configured(
            "expo-secure-store".to_string(),
            json!({
                "configureAndroidBackup": true,
                "faceIDPermission":
                    "Allow $(PRODUCT_NAME) to access your Face ID biometric data.",
            }),
        ),
        PluginEntry::Configured(
            "expo-screen-orientation".to_string(),
            json!({ "initialOrientation": "DEFAULT" }),
        ),
        PluginEntry::Configured(
            "expo-font".to_string(),
            json!({ "fonts": ["./assets/fonts/SpaceMono-Regular.ttf"] }),
        ),
        PluginEntry::Configured(
            "@react-native-google-signin/google-signin".to_string(),
            json!({ "iosUrlScheme": ios_url_scheme }),
        ),
    ]
}
