// ─── Launcher Meta Core ───
// Canonical schema of the launcher package index.
//
// Architecture:
//   core/
//     maven/     — Maven coordinates: parsing, canonical form, repository paths
//     rules/     — Platform rules + archRules synthesis
//     library/   — Library descriptors, downloads, arch traits
//     assets/    — Asset index references
//     version/   — Version and package documents, dependencies
//     document/  — Canonical serialization, format-version gate, timestamps
//     settings   — Process-wide configuration
//     store      — Reading/writing documents on disk

pub mod assets;
pub mod document;
pub mod error;
pub mod library;
pub mod maven;
pub mod rules;
pub mod settings;
pub mod store;
pub mod version;
