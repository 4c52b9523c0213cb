use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

use crate::errors::AppError;
use crate::storage::{DEFAULT_STORAGE_PATH, StorageMediums};

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Simple Contact Book")]
pub struct Cli {
    /// Path of the contacts file
    #[arg(long, env = "CONTACTS_FILE", default_value = DEFAULT_STORAGE_PATH)]
    pub file: PathBuf,

    /// Storage choice (json, mem). mem keeps nothing between runs
    #[arg(long, env = "STORAGE_CHOICE", value_enum, default_value_t = StorageMediums::Json)]
    pub storage_choice: StorageMediums,
}

/// Menu entries, numbered as shown to the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddContact,
    ViewContacts,
    EditContact,
    DeleteContact,
    Exit,
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(choice: &str) -> Result<Self, Self::Err> {
        match choice.trim() {
            "1" => Ok(Command::AddContact),
            "2" => Ok(Command::ViewContacts),
            "3" => Ok(Command::EditContact),
            "4" => Ok(Command::DeleteContact),
            "5" => Ok(Command::Exit),
            other => Err(AppError::InvalidChoice(other.to_string())),
        }
    }
}
