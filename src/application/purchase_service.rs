use std::sync::Arc;

use crate::{
    application::dto::{PurchaseResponse, RecordPurchaseRequest},
    domain::{errors::DomainError, product::NewPurchase},
    infrastructure::PurchaseRepository,
};

#[derive(Clone)]
pub struct PurchaseService {
    repository: Arc<dyn PurchaseRepository>,
}

impl PurchaseService {
    pub fn new(repository: Arc<dyn PurchaseRepository>) -> Self {
        Self { repository }
    }

    pub async fn record_purchase(
        &self,
        request: RecordPurchaseRequest,
    ) -> Result<PurchaseResponse, DomainError> {
        request.validate()?;

        let created = self
            .repository
            .create(NewPurchase {
                price: request.price,
                product: request.product,
            })
            .await?;

        Ok(PurchaseResponse::from(created))
    }

    pub async fn list_purchases(&self) -> Result<Vec<PurchaseResponse>, DomainError> {
        let purchases = self.repository.list_all().await?;
        Ok(purchases.into_iter().map(PurchaseResponse::from).collect())
    }
}
