use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Event {0} not found")]
    EventNotFound(Uuid),

    #[error("The event \"{0}\" is already full")]
    EventFull(String),

    #[error("You are already registered for \"{0}\"")]
    AlreadyRegistered(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23505")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_error_names_the_event() {
        let err = StorageError::EventFull("AI Workshop".to_string());
        assert_eq!(err.to_string(), "The event \"AI Workshop\" is already full");
    }

    #[test]
    fn duplicate_error_names_the_event() {
        let err = StorageError::AlreadyRegistered("Code Golf Contest".to_string());
        assert!(err.to_string().contains("Code Golf Contest"));
    }

    #[test]
    fn missing_event_error_names_the_id() {
        let id = Uuid::nil();
        let err = StorageError::EventNotFound(id);
        assert!(err.to_string().contains(&id.to_string()));
    }

    #[test]
    fn non_database_errors_are_not_unique_violations() {
        assert!(!StorageError::NotFound.is_unique_violation());
        assert!(!StorageError::EventFull("x".into()).is_unique_violation());
    }
}
