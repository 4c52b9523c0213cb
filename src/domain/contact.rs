use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// All contacts keyed by name, in insertion order.
pub type ContactBook = IndexMap<String, Contact>;

/// A phone and email pair. The contact's name is its key in the [`ContactBook`].
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    pub phone: String,
    pub email: String,
}

impl Contact {
    pub fn new(phone: String, email: String) -> Self {
        Contact { phone, email }
    }

    /// Overwrites each field given as non-blank. Blank or missing fields keep their value.
    pub fn update(&mut self, new_phone: Option<&str>, new_email: Option<&str>) {
        if let Some(phone) = new_phone.map(str::trim)
            && !phone.is_empty()
        {
            self.phone = phone.to_string();
        }

        if let Some(email) = new_email.map(str::trim)
            && !email.is_empty()
        {
            self.email = email.to_string();
        }
    }
}

pub fn display_contact(name: &str, contact: &Contact) -> String {
    format!(
        "Name: {}, Phone: {}, Email: {}",
        name, contact.phone, contact.email
    )
}
