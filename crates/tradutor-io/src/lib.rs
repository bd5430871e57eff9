pub mod cache;
pub mod fetch;

pub use cache::{AssetCache, AssetSource, CacheError, HttpAssetSource};
pub use fetch::{FetchError, FileWordListSource, HttpWordListSource, WordListSource};
