mod descriptor;
mod downloads;

pub use descriptor::{Library, ARCH_DEPENDENT_TRAIT};
pub use downloads::{Artifact, ExtractRules, LibraryDownloads};
