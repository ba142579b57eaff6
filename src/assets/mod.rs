//! Asset module for the alphabet image store
//!
//! Supports the local filesystem and fixed in-memory inventories.

mod lookup;
mod root;
mod types;

pub use lookup::{AssetLookup, InMemoryAssets, LocalAssets};
pub use root::{prepare_asset_root, AssetRootStatus};
pub use types::*;
