use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        if params.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if params.price < BigDecimal::zero() {
            return Err(ProductError::PriceNegative);
        }

        // Verify product exists
        let existing = self
            .repository
            .find_by_id(params.id)
            .await?
            .ok_or_else(|| ProductError::not_found(params.id))?;

        let updated_product = Product::from_repository(
            params.id,
            params.name,
            params.description,
            params.price,
            existing.created_at,
            chrono::Utc::now(),
        );

        let persisted = self.repository.save(&updated_product).await?;

        self.logger
            .info(&format!("Product updated: {}", params.id));
        Ok(persisted)
    }
}
