pub mod core;

use tracing_subscriber::EnvFilter;

pub use crate::core::assets::AssetIndexRef;
pub use crate::core::document::{
    parse, write, CanonicalDocument, Versioned, META_FORMAT_VERSION,
};
pub use crate::core::error::{MetaError, MetaResult};
pub use crate::core::library::{
    Artifact, ExtractRules, Library, LibraryDownloads, ARCH_DEPENDENT_TRAIT,
};
pub use crate::core::maven::MavenCoordinate;
pub use crate::core::rules::{
    synthesize_rules, ArchRules, OsConstraint, OsName, PlatformRule, RuleAction,
};
pub use crate::core::settings::MetaSettings;
pub use crate::core::store::MetaStore;
pub use crate::core::version::{Dependency, MetaPackage, MetaVersion};

/// Install the default `tracing` subscriber for tools built on this crate.
///
/// Honors `RUST_LOG`; falls back to `info,launcher_meta=debug`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,launcher_meta=debug")),
        )
        .try_init();
}
