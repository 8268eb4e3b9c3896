mod dependency;
mod meta_version;
mod package;

pub use dependency::Dependency;
pub use meta_version::MetaVersion;
pub use package::MetaPackage;
