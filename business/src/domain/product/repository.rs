use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;

/// Storage port for products. Absence is a normal result: `find_by_id`
/// returns `None` rather than an error when no row matches, and
/// `delete_by_id` is a no-op for an unknown identifier.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError>;
    /// Upsert. Returns the persisted representation; its id is always set.
    async fn save(&self, product: &Product) -> Result<Product, RepositoryError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError>;
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
}
