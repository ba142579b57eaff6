//! Asset types

use thiserror::Error;

/// Asset lookup errors
///
/// A missing asset is not an error: lookups report it as `Ok(false)`.
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Asset storage unavailable: {0}")]
    Unavailable(String),
}
