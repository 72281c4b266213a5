//! Manifest type definitions for app-manifest.
//!
//! Responsibilities:
//! - Define the serde shape of the resolved manifest and its platform blocks.
//! - Define the build profile and entitlement types.
//!
//! Does NOT handle:
//! - Value resolution from environment or filesystem (see `resolver`).
//! - Static literal payload construction (see `payload`).
//!
//! Invariants:
//! - These types carry no resolution logic; they are the output schema only.

mod manifest;
mod profile;

pub use manifest::{
    AdaptiveIcon, AndroidManifest, AppManifest, EasExtra, Entitlements, Experiments, Extra,
    InfoPlist, IosIcon, IosManifest, PluginEntry, RouterExtra, WebManifest,
};
pub use profile::{ApsEnvironment, BuildProfile};
