use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid contacts data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Contact '{0}' already exists.")]
    AlreadyExists(String),

    #[error("Contact '{0}' does not exist.")]
    NotFound(String),

    #[error("Invalid choice. Please try again.")]
    InvalidChoice(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl AppError {
    /// Errors the operator caused and can recover from by trying again.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AppError::AlreadyExists(_)
                | AppError::NotFound(_)
                | AppError::InvalidChoice(_)
                | AppError::Validation(_)
        )
    }
}
