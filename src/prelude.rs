pub use crate::cli::{command, run_app, run_menu};
pub use crate::domain::{
    contact::{self, Contact, ContactBook, display_contact},
    manager::{self, ContactManager, LoadStatus},
};
pub use crate::errors::AppError;
pub use crate::storage::{self, ContactStore, JsonStorage, MemStorage, StorageMediums};
