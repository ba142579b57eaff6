//! Asset existence lookups
//!
//! The mapper never touches the filesystem directly; it asks an
//! [`AssetLookup`] whether a candidate image path exists.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::types::AssetError;
use crate::fingerspell::image_file_name;

// ============================================================================
// Lookup Trait
// ============================================================================

/// Answers whether an asset exists at a path
pub trait AssetLookup: Send + Sync {
    /// Check a path. Absence is `Ok(false)`; `Err` means the storage itself failed.
    fn exists(&self, path: &Path) -> Result<bool, AssetError>;
}

impl<F> AssetLookup for F
where
    F: Fn(&Path) -> bool + Send + Sync,
{
    fn exists(&self, path: &Path) -> Result<bool, AssetError> {
        Ok(self(path))
    }
}

// ============================================================================
// Local Filesystem
// ============================================================================

/// Filesystem-backed lookup
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalAssets;

impl LocalAssets {
    pub fn new() -> Self {
        Self
    }
}

impl AssetLookup for LocalAssets {
    fn exists(&self, path: &Path) -> Result<bool, AssetError> {
        Ok(path.try_exists()?)
    }
}

// ============================================================================
// In-Memory
// ============================================================================

/// Set-backed lookup with a fixed inventory
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssets {
    paths: HashSet<PathBuf>,
}

impl InMemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inventory holding the image of each letter under `root`
    pub fn with_letters(root: impl AsRef<Path>, letters: impl IntoIterator<Item = char>) -> Self {
        let root = root.as_ref();
        letters
            .into_iter()
            .map(|letter| root.join(image_file_name(letter)))
            .collect()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>) {
        self.paths.insert(path.into());
    }
}

impl FromIterator<PathBuf> for InMemoryAssets {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().collect(),
        }
    }
}

impl AssetLookup for InMemoryAssets {
    fn exists(&self, path: &Path) -> Result<bool, AssetError> {
        Ok(self.paths.contains(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_local_assets() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("h_test.jpg"), b"jpeg").unwrap();

        let assets = LocalAssets::new();
        assert!(assets.exists(&temp_dir.path().join("h_test.jpg")).unwrap());
        assert!(!assets.exists(&temp_dir.path().join("x_test.jpg")).unwrap());
    }

    #[test]
    fn test_local_assets_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nowhere").join("a_test.jpg");
        assert!(!LocalAssets::new().exists(&path).unwrap());
    }

    #[test]
    fn test_in_memory_assets() {
        let assets = InMemoryAssets::with_letters("assets", "ab".chars());
        assert!(assets.exists(Path::new("assets/a_test.jpg")).unwrap());
        assert!(assets.exists(Path::new("assets/b_test.jpg")).unwrap());
        assert!(!assets.exists(Path::new("assets/space_test.jpg")).unwrap());
        assert!(!assets.exists(Path::new("assets/c_test.jpg")).unwrap());
        assert!(!assets.exists(Path::new("other/a_test.jpg")).unwrap());
    }

    #[test]
    fn test_in_memory_insert() {
        let mut assets = InMemoryAssets::new();
        assert!(!assets.exists(Path::new("root/z_test.jpg")).unwrap());
        assets.insert("root/z_test.jpg");
        assert!(assets.exists(Path::new("root/z_test.jpg")).unwrap());
    }

    #[test]
    fn test_closure_lookup() {
        let lookup = |path: &Path| path.ends_with("k_test.jpg");
        assert!(lookup.exists(Path::new("any/k_test.jpg")).unwrap());
        assert!(!lookup.exists(Path::new("any/j_test.jpg")).unwrap());
    }
}
