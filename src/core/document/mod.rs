pub mod canonical;
pub mod datetime;

pub use canonical::{
    check_format_version, digest_bytes, parse, write, CanonicalDocument, Versioned,
    META_FORMAT_VERSION,
};
pub(crate) use canonical::current_format_version;
