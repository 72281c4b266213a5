//! Build manifest configuration for app-manifest.
//!
//! This crate resolves the build-time manifest of a cross-platform mobile
//! application from environment variables (with static fallback defaults)
//! and existence-checked optional credential files, producing one structured
//! value for an external build tool to consume.

pub mod constants;
pub mod payload;
mod probe;
mod resolver;
mod snapshot;
pub mod types;

pub use probe::{FileProbe, FsProbe, file_if_exists};
pub use resolver::{ManifestResolver, ResolveError};
pub use snapshot::{EnvProvider, EnvSnapshot, ProcessEnv, env_var_or_none, load_dotenv};
pub use types::{
    AndroidManifest, AppManifest, ApsEnvironment, BuildProfile, IosManifest, PluginEntry,
    WebManifest,
};
