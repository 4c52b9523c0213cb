use super::*;
use crate::storage::ContactStore;

/// Outcome of reading the store at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Empty,
    Loaded(usize),
    Corrupted,
}

pub struct ContactManager {
    pub mem: ContactBook,
    pub storage: Box<dyn ContactStore>,
}

impl ContactManager {
    /// Loads the book from `storage`. Unreadable data starts an empty book
    /// instead of failing; only I/O errors are returned.
    pub fn open(storage: Box<dyn ContactStore>) -> Result<(Self, LoadStatus), AppError> {
        let (mem, status) = match storage.load() {
            Ok(contacts) if contacts.is_empty() => (contacts, LoadStatus::Empty),
            Ok(contacts) => {
                let count = contacts.len();
                (contacts, LoadStatus::Loaded(count))
            }
            Err(AppError::Json(e)) => {
                log::warn!("contacts file is corrupted, starting fresh: {e}");

                match storage.quarantine() {
                    Ok(Some(copy)) => log::warn!("corrupted file kept at {}", copy.display()),
                    Ok(None) => {}
                    Err(e) => log::error!("could not keep a copy of the corrupted file: {e}"),
                }

                (ContactBook::new(), LoadStatus::Corrupted)
            }
            Err(e) => return Err(e),
        };

        log::info!(
            "opened {} storage with {} contacts",
            storage.get_medium(),
            mem.len()
        );

        Ok((Self { mem, storage }, status))
    }

    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.mem.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.mem.contains_key(name)
    }

    pub fn add_contact(&mut self, name: &str, phone: &str, email: &str) -> Result<(), AppError> {
        if name.is_empty() {
            return Err(AppError::Validation("Name cannot be empty".to_string()));
        }
        if self.contains(name) {
            return Err(AppError::AlreadyExists(name.to_string()));
        }

        self.mem.insert(
            name.to_string(),
            Contact::new(phone.to_string(), email.to_string()),
        );
        self.save()
    }

    /// Blank `new_phone` or `new_email` leaves that field as it is.
    pub fn edit_contact(
        &mut self,
        name: &str,
        new_phone: Option<&str>,
        new_email: Option<&str>,
    ) -> Result<(), AppError> {
        match self.mem.get_mut(name) {
            Some(contact) => contact.update(new_phone, new_email),
            None => return Err(AppError::NotFound(name.to_string())),
        }
        self.save()
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<(), AppError> {
        // shift_remove keeps the remaining contacts in insertion order
        if self.mem.shift_remove(name).is_none() {
            return Err(AppError::NotFound(name.to_string()));
        }
        self.save()
    }

    /// Lines shown by the view command, in book order.
    pub fn listing(&self) -> Vec<String> {
        if self.mem.is_empty() {
            return vec!["No contacts available.".to_string()];
        }

        let mut lines = vec!["Contacts:".to_string()];
        lines.extend(
            self.mem
                .iter()
                .map(|(name, contact)| display_contact(name, contact)),
        );
        lines
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.storage.save(&self.mem)
    }
}
