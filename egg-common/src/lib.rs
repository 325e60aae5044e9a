pub mod icon;
pub mod numeric;
pub mod storage;

pub use icon::{icon_url, icon_url_orig, AssetHost, IconSize, ASSET_HOST};
pub use numeric::{format_decimal, trim_trailing_zeros};
pub use storage::{KeyValueStore, MemoryStorage, Scope, ScopedStorage, StorageError};
