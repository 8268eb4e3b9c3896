mod index_ref;

pub use index_ref::AssetIndexRef;
