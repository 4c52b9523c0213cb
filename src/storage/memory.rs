use super::*;
use std::cell::RefCell;

/// Keeps the last saved book in memory. Nothing touches the disk.
#[derive(Default)]
pub struct MemStorage {
    data: RefCell<ContactBook>,
}

impl MemStorage {
    pub fn with_contacts(contacts: ContactBook) -> Self {
        Self {
            data: RefCell::new(contacts),
        }
    }
}

impl ContactStore for MemStorage {
    fn load(&self) -> Result<ContactBook, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, contacts: &ContactBook) -> Result<(), AppError> {
        *self.data.borrow_mut() = contacts.clone();
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}
