//! Workspace discovery and layout

use crate::error::{Result, UltistatsError};
use crate::infrastructure::config::WORKSPACE_DIR;
use crate::infrastructure::{Config, Repositories};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable pointing at a workspace root
pub const ROOT_ENV: &str = "ULTISTATS_ROOT";

/// Abstract workspace operations
pub trait WorkspaceRepository {
    /// Get the root directory of this workspace
    fn root(&self) -> &Path;

    /// Load configuration from .ultistats/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .ultistats/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .ultistats directory exists
    fn is_initialized(&self) -> bool;

    /// Create .ultistats directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of WorkspaceRepository
#[derive(Debug, Clone)]
pub struct FileSystemWorkspace {
    pub root: PathBuf,
}

impl FileSystemWorkspace {
    /// Create a workspace handle for the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemWorkspace { root }
    }

    /// Discover the workspace root.
    /// First checks ULTISTATS_ROOT, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_workspace_dir(&path) {
                return Ok(FileSystemWorkspace::new(path));
            } else {
                return Err(UltistatsError::Config(format!(
                    "{} is set to '{}' but no .ultistats directory found. \
                    Run 'ultistats init' in that directory or unset {}.",
                    ROOT_ENV,
                    path.display(),
                    ROOT_ENV
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the workspace root by walking up from a starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_workspace_dir(&current) {
                debug!(root = %current.display(), "found workspace");
                return Ok(FileSystemWorkspace::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(UltistatsError::NotUltistatsDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_workspace_dir(path: &Path) -> bool {
        path.join(WORKSPACE_DIR).is_dir()
    }

    /// Open the entity repositories laid out by this workspace's config
    pub fn repositories(&self) -> Result<Repositories> {
        let config = self.load_config()?;
        Repositories::open(&config.data_root(&self.root), &config)
    }
}

impl WorkspaceRepository for FileSystemWorkspace {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_workspace_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let workspace_dir = self.root.join(WORKSPACE_DIR);

        if workspace_dir.exists() {
            return Err(UltistatsError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&workspace_dir)?;
        Ok(())
    }
}
