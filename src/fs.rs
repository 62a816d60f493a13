use std::env;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::CleanupError;

#[derive(Debug)]
pub enum Outcome {
    Removed,
    Absent,
    Failed(io::Error),
}

pub fn enter_dir(path: &Path) -> Result<(), CleanupError> {
    env::set_current_dir(path).map_err(|source| CleanupError::EnterDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Removes `path` if something exists there.
///
/// The existence check and the removal are separate calls, so an entry that
/// disappears in between is reported as `Failed`, not `Absent`.
pub fn remove_if_present(path: &Path) -> Outcome {
    if !path.exists() {
        return Outcome::Absent;
    }
    match fs::remove_file(path) {
        Ok(()) => Outcome::Removed,
        Err(e) => Outcome::Failed(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::TempDir;

    #[test]
    fn test_remove_if_present_removes_file() -> Result<()> {
        let dir = TempDir::new()?;
        let file = dir.path().join("a.md");
        fs::write(&file, "# leftover")?;

        assert!(matches!(remove_if_present(&file), Outcome::Removed));
        assert!(!file.exists());
        Ok(())
    }

    #[test]
    fn test_remove_if_present_skips_missing_file() -> Result<()> {
        let dir = TempDir::new()?;
        let file = dir.path().join("b.sh");

        assert!(matches!(remove_if_present(&file), Outcome::Absent));
        assert!(!file.exists());
        Ok(())
    }

    #[test]
    fn test_remove_if_present_does_not_remove_directories() -> Result<()> {
        let dir = TempDir::new()?;
        let sub = dir.path().join("locked.sh");
        fs::create_dir(&sub)?;

        assert!(matches!(remove_if_present(&sub), Outcome::Failed(_)));
        assert!(sub.is_dir());
        Ok(())
    }

    #[test]
    fn test_enter_dir_missing_directory() -> Result<()> {
        let dir = TempDir::new()?;
        let missing = dir.path().join("does-not-exist");
        let before = env::current_dir()?;

        let err = enter_dir(&missing).unwrap_err();
        assert!(err.to_string().contains("Failed to enter directory"));
        assert!(err.to_string().contains("does-not-exist"));
        assert_eq!(env::current_dir()?, before);
        Ok(())
    }
}
