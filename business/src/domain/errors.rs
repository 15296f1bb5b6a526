/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.database_error")]
    DatabaseError,
}

impl RepositoryError {
    pub fn database_error() -> Self {
        RepositoryError::DatabaseError
    }
}
