use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, price, created_at, updated_at FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn save(&self, product: &Product) -> Result<Product, RepositoryError> {
        // Without an id the store assigns one; with an id this is an upsert.
        let result = match product.id {
            None => {
                sqlx::query_as::<_, ProductEntity>(
                    r#"INSERT INTO products (name, description, price, created_at, updated_at)
                    VALUES ($1, $2, $3, $4, $5)
                    RETURNING id, name, description, price, created_at, updated_at"#,
                )
                .bind(&product.name)
                .bind(&product.description)
                .bind(&product.price)
                .bind(product.created_at)
                .bind(product.updated_at)
                .fetch_one(&self.pool)
                .await
            }
            Some(id) => {
                sqlx::query_as::<_, ProductEntity>(
                    r#"INSERT INTO products (id, name, description, price, created_at, updated_at)
                    VALUES ($1, $2, $3, $4, $5, $6)
                    ON CONFLICT (id) DO UPDATE SET
                        name = EXCLUDED.name,
                        description = EXCLUDED.description,
                        price = EXCLUDED.price,
                        updated_at = EXCLUDED.updated_at
                    RETURNING id, name, description, price, created_at, updated_at"#,
                )
                .bind(id)
                .bind(&product.name)
                .bind(&product.description)
                .bind(&product.price)
                .bind(product.created_at)
                .bind(product.updated_at)
                .fetch_one(&self.pool)
                .await
            }
        };

        let entity = result.map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.into_domain())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, price, created_at, updated_at FROM products ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
