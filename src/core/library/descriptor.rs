// ─── Library Descriptor ───
// A library entry of a version document: coordinate, downloads, natives and
// platform rules. Compact `archRules` are resolved into `rules` whenever the
// library is serialized.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::downloads::{ExtractRules, LibraryDownloads};
use crate::core::maven::MavenCoordinate;
use crate::core::rules::{synthesize_rules, ArchRules, PlatformRule};

/// Trait marking libraries that need a per-architecture build.
pub const ARCH_DEPENDENT_TRAIT: &str = "ArchDependent";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(into = "ResolvedLibrary")]
pub struct Library {
    #[serde(default)]
    pub extract: Option<ExtractRules>,
    pub name: MavenCoordinate,
    #[serde(default)]
    pub downloads: Option<LibraryDownloads>,
    /// OS name → natives classifier (may contain `${arch}`).
    #[serde(default)]
    pub natives: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub rules: Option<Vec<PlatformRule>>,
    /// Input-only shorthand, never written back out.
    #[serde(default, rename = "archRules", alias = "arch_rules")]
    pub arch_rules: Option<ArchRules>,
    #[serde(default)]
    pub traits: Option<Vec<String>>,
    /// Maven repository root the library is fetched from.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "MMC-hint", alias = "mmc_hint")]
    pub mmc_hint: Option<String>,
}

/// Wire form of a [`Library`]: identical fields minus `archRules`.
#[derive(Serialize)]
struct ResolvedLibrary {
    #[serde(skip_serializing_if = "Option::is_none")]
    extract: Option<ExtractRules>,
    name: MavenCoordinate,
    #[serde(skip_serializing_if = "Option::is_none")]
    downloads: Option<LibraryDownloads>,
    #[serde(skip_serializing_if = "Option::is_none")]
    natives: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rules: Option<Vec<PlatformRule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    traits: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(rename = "MMC-hint", skip_serializing_if = "Option::is_none")]
    mmc_hint: Option<String>,
}

impl From<Library> for ResolvedLibrary {
    fn from(lib: Library) -> Self {
        let rules = synthesize_rules(lib.rules.as_deref(), lib.arch_rules.as_ref());
        Self {
            extract: lib.extract,
            name: lib.name,
            downloads: lib.downloads,
            natives: lib.natives,
            rules,
            traits: lib.traits,
            url: lib.url,
            mmc_hint: lib.mmc_hint,
        }
    }
}

impl Library {
    pub fn new(name: MavenCoordinate) -> Self {
        Self {
            extract: None,
            name,
            downloads: None,
            natives: None,
            rules: None,
            arch_rules: None,
            traits: None,
            url: None,
            mmc_hint: None,
        }
    }

    /// Whether the coordinate names an arch-dependent library.
    pub fn is_arch_dependent(&self) -> bool {
        self.name.is_arch_dependent()
    }

    /// Tag arch-dependent libraries with [`ARCH_DEPENDENT_TRAIT`].
    ///
    /// Appends unconditionally: calling this twice lists the trait twice.
    pub fn add_arch_dependent_trait(&mut self) {
        if self.is_arch_dependent() {
            self.traits
                .get_or_insert_with(Vec::new)
                .push(ARCH_DEPENDENT_TRAIT.to_string());
        }
    }

    pub fn has_trait(&self, name: &str) -> bool {
        self.traits
            .as_ref()
            .is_some_and(|traits| traits.iter().any(|t| t == name))
    }

    /// A copy with `archRules` expanded into `rules`. Serialization performs
    /// the same expansion on its own; this is for callers that want the
    /// explicit rule list in memory.
    pub fn resolved(&self) -> Library {
        Library {
            rules: synthesize_rules(self.rules.as_deref(), self.arch_rules.as_ref()),
            arch_rules: None,
            ..self.clone()
        }
    }
}
