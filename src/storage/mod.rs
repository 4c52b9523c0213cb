pub mod memory;
pub mod stores;

use crate::prelude::{AppError, ContactBook};
use clap::ValueEnum;
use std::fs;
use std::path::{Path, PathBuf};

pub use memory::MemStorage;
pub use stores::JsonStorage;

pub const DEFAULT_STORAGE_PATH: &str = "contacts.json";

pub trait ContactStore {
    fn load(&self) -> Result<ContactBook, AppError>;

    fn save(&self, contacts: &ContactBook) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;

    /// Sets unreadable data aside before it gets overwritten.
    /// Returns where the copy went, if one was made.
    fn quarantine(&self) -> Result<Option<PathBuf>, AppError> {
        Ok(None)
    }
}

/// Where contacts are persisted between runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageMediums {
    Json,
    Mem,
}

impl StorageMediums {
    pub fn is_json(&self) -> bool {
        matches!(self, StorageMediums::Json)
    }

    pub fn is_which(&self) -> &str {
        if self.is_json() { "json" } else { "mem" }
    }
}

pub fn parse_storage_type(
    medium: StorageMediums,
    path: &Path,
) -> Result<Box<dyn ContactStore>, AppError> {
    match medium {
        StorageMediums::Json => Ok(Box::new(JsonStorage::new(path)?)),
        StorageMediums::Mem => Ok(Box::new(MemStorage::default())),
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
