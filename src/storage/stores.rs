use super::*;

use std::fs::OpenOptions;
use std::io::Write;

pub struct JsonStorage {
    pub medium: String,
    pub path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: &Path) -> Result<Self, AppError> {
        if path.as_os_str().is_empty() {
            return Err(AppError::Validation(
                "Storage path cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            medium: "json".to_string(),
            path: path.to_path_buf(),
        })
    }

    /// First of `<path>.corrupt`, `<path>.corrupt.1`, `<path>.corrupt.2`, ... not taken yet
    fn quarantine_path(&self) -> Result<PathBuf, AppError> {
        let mut attempt = 0usize;
        loop {
            let mut file_name = self.path.as_os_str().to_owned();
            file_name.push(".corrupt");
            if attempt > 0 {
                file_name.push(format!(".{attempt}"));
            }

            let candidate = PathBuf::from(file_name);
            if !fs::exists(&candidate)? {
                return Ok(candidate);
            }
            attempt += 1;
        }
    }
}

impl ContactStore for JsonStorage {
    fn load(&self) -> Result<ContactBook, AppError> {
        if !fs::exists(&self.path)? {
            log::debug!("{} does not exist yet", self.path.display());
            return Ok(ContactBook::new());
        }

        // Raw bytes so invalid UTF-8 surfaces as a serde_json error, not an I/O one
        let data = fs::read(&self.path)?;

        // serde_json will give an error if data is empty
        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(ContactBook::new());
        }

        // Contact rejects missing and unknown fields, so one bad record fails the whole file
        let contacts: ContactBook = serde_json::from_slice(&data)?;
        log::debug!(
            "loaded {} contacts from {}",
            contacts.len(),
            self.path.display()
        );
        Ok(contacts)
    }

    fn save(&self, contacts: &ContactBook) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        let json_contact = serde_json::to_string_pretty(contacts)?;
        file.write_all(json_contact.as_bytes())?;
        file.write_all(b"\n")?;

        log::debug!("saved {} contacts to {}", contacts.len(), self.path.display());
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }

    fn quarantine(&self) -> Result<Option<PathBuf>, AppError> {
        if !fs::exists(&self.path)? {
            return Ok(None);
        }

        // Earlier copies are never overwritten
        let destination = self.quarantine_path()?;
        fs::copy(&self.path, &destination)?;
        Ok(Some(destination))
    }
}
