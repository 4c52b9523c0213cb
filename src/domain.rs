pub mod contact;
pub mod manager;

use crate::errors::AppError;
use contact::{Contact, ContactBook, display_contact};
