//! Asset root preparation

use std::path::Path;

use super::lookup::{AssetLookup, LocalAssets};
use super::types::AssetError;
use crate::fingerspell::SPACE_IMAGE_FILE;

/// Summary of the asset root after preparation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRootStatus {
    /// The directory did not exist and was created
    pub created: bool,
    /// `space_test.jpg` is present
    pub has_space_image: bool,
}

/// Make sure the asset root exists before serving.
///
/// Creates the directory when absent. A missing space image is only logged:
/// space records still point at it and the front end falls back to a placeholder.
pub fn prepare_asset_root(root: &Path) -> Result<AssetRootStatus, AssetError> {
    let assets = LocalAssets::new();

    let created = if assets.exists(root)? {
        false
    } else {
        std::fs::create_dir_all(root)?;
        tracing::info!("Created asset directory {}", root.display());
        true
    };

    let has_space_image = assets.exists(&root.join(SPACE_IMAGE_FILE))?;
    if !has_space_image {
        tracing::warn!(
            "Space image not found in {}, front end will use a placeholder",
            root.display()
        );
    }

    Ok(AssetRootStatus {
        created,
        has_space_image,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("images").join("asl_alphabet");

        let status = prepare_asset_root(&root).unwrap();
        assert!(status.created);
        assert!(!status.has_space_image);
        assert!(root.is_dir());
    }

    #[test]
    fn test_existing_root() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(SPACE_IMAGE_FILE), b"jpeg").unwrap();

        let status = prepare_asset_root(temp_dir.path()).unwrap();
        assert_eq!(
            status,
            AssetRootStatus {
                created: false,
                has_space_image: true,
            }
        );
    }
}
