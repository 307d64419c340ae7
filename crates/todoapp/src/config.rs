//! # Configuration
//!
//! Configuration is managed by [`confique`], which handles layered loading from a
//! TOML file and environment variables.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `TODO_DATA_DIR`, `TODO_SLOT_KEY`, `TODO_DEFAULT_SORT`, `TODO_EXPORT_FILE`.
//! 2. **Config file**: `todo.toml` in the OS-appropriate config directory (via `directories`).
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | OS data dir | Where the slot file lives |
//! | `slot_key` | `simple_todo_v1` | Name of the slot (file stem) |
//! | `seed_lists` | `["Personal", "Work"]` | Lists created on first run |
//! | `default_sort` | `manual` | Task order when none is requested |
//! | `export_file` | `todo-export.json` | Default export target |

use crate::error::{Result, TodoError};
use crate::view::SortOrder;
use confique::Config;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "todo.toml";

#[derive(Config, Debug, Clone, PartialEq, Eq)]
pub struct TodoConfig {
    /// Directory holding the slot file. Defaults to the OS data directory.
    #[config(env = "TODO_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Slot name; the document is stored as `<data_dir>/<slot_key>.json`.
    #[config(env = "TODO_SLOT_KEY", default = "simple_todo_v1")]
    pub slot_key: String,

    /// Names of the lists created when no document exists yet.
    #[config(default = ["Personal", "Work"])]
    pub seed_lists: Vec<String>,

    /// One of "manual", "due", "created".
    #[config(env = "TODO_DEFAULT_SORT", default = "manual")]
    pub default_sort: String,

    /// File written by `export` when no path is given.
    #[config(env = "TODO_EXPORT_FILE", default = "todo-export.json")]
    pub export_file: String,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            slot_key: crate::store::slot::DEFAULT_SLOT_KEY.to_string(),
            seed_lists: crate::store::slot::DEFAULT_SEED_LISTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            default_sort: SortOrder::Manual.to_string(),
            export_file: crate::snapshot::DEFAULT_EXPORT_FILE.to_string(),
        }
    }
}

impl TodoConfig {
    /// Loads env vars over `config_dir/todo.toml` over defaults. A missing file
    /// is fine.
    pub fn load(config_dir: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(dir) = config_dir {
            builder = builder.file(dir.join(CONFIG_FILENAME));
        }
        builder.load().map_err(|e| TodoError::Config(e.to_string()))
    }

    pub fn sort_order(&self) -> Result<SortOrder> {
        self.default_sort.parse().map_err(TodoError::Config)
    }

    /// The configured data dir, falling back to the OS data directory.
    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        project_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| TodoError::Config("could not determine a data directory".to_string()))
    }
}

/// OS-appropriate config directory, if the platform has one.
pub fn default_config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "todoapp", "todo")
}
