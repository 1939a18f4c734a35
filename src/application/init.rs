//! Initialize workspace use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemWorkspace, Repositories, WorkspaceRepository};
use std::fs;
use std::path::Path;
use tracing::info;

/// Initialize a new workspace at the specified path, creating the default
/// config and the empty entity directories.
pub fn init(path: &Path) -> Result<FileSystemWorkspace> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let workspace = FileSystemWorkspace::new(path.to_path_buf());
    workspace.initialize()?;

    let config = Config::new();
    workspace.save_config(&config)?;

    Repositories::open(&config.data_root(path), &config)?;
    info!(root = %path.display(), "initialized workspace");

    Ok(workspace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_layout() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("league");

        let workspace = init(&root).unwrap();

        assert!(workspace.is_initialized());
        assert!(root.join(".ultistats/config.toml").is_file());
        for dir in ["teams", "players", "games", "points"] {
            assert!(root.join("data").join(dir).is_dir());
        }
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();
        init(temp.path()).unwrap();
        assert!(init(temp.path()).is_err());
    }
}
