#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.price_negative")]
    PriceNegative,
    /// Carries the caller-facing message verbatim; the message is the payload.
    #[error("{0}")]
    NotFound(String),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl ProductError {
    /// Not-found signal for a failed lookup by identifier.
    pub fn not_found(id: i64) -> Self {
        ProductError::NotFound(format!("Product not found with id: {}", id))
    }
}
