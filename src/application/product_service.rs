use std::sync::Arc;

use tracing::error;

use crate::{
    application::dto::{CreateProductRequest, ProductResponse, TotalCostsResponse},
    domain::{
        errors::DomainError,
        product::{CostReport, NewProduct},
    },
    infrastructure::ProductRepository,
};

#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_product(
        &self,
        request: CreateProductRequest,
    ) -> Result<ProductResponse, DomainError> {
        request.validate()?;

        let created = self
            .repository
            .create(NewProduct {
                name: request.name.trim().to_string(),
                price: request.price,
                quantity: request.quantity,
            })
            .await?;

        Ok(ProductResponse::from(created))
    }

    pub async fn get_product(&self, id: i64) -> Result<ProductResponse, DomainError> {
        let Some(product) = self.repository.find_by_id(id).await? else {
            return Err(DomainError::not_found("product not found"));
        };
        Ok(ProductResponse::from(product))
    }

    pub async fn list_products(&self) -> Result<Vec<ProductResponse>, DomainError> {
        let products = self.repository.list_all().await?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    /// Best-effort read with a degraded-empty fallback.
    ///
    /// The signature is infallible on purpose: repository failures are logged
    /// and collapse into an empty report, so callers of this endpoint see
    /// success whether the table is empty or the store is unreachable.
    pub async fn total_costs(&self) -> TotalCostsResponse {
        let mut report = CostReport::default();

        match self.repository.list_all().await {
            Ok(products) => {
                for product in &products {
                    report.insert(product);
                }
            }
            Err(err) => {
                error!(error = %err, "cost aggregation failed, returning empty report");
            }
        }

        TotalCostsResponse::from(report)
    }
}
