use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    domain::{
        errors::DomainError,
        product::{NewPurchase, Purchase},
    },
    infrastructure::PurchaseRepository,
};

/// In-memory stand-in for the Postgres repository. Referential integrity is
/// the backing store's job, so this one does not check the product id.
#[derive(Default)]
pub struct InMemoryPurchaseRepository {
    purchases_by_id: RwLock<HashMap<i64, Purchase>>,
    next_id: AtomicI64,
}

impl InMemoryPurchaseRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PurchaseRepository for InMemoryPurchaseRepository {
    async fn create(&self, purchase: NewPurchase) -> Result<Purchase, DomainError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let created = Purchase {
            id,
            price: purchase.price,
            product: purchase.product,
        };

        self.purchases_by_id
            .write()
            .await
            .insert(created.id, created.clone());

        Ok(created)
    }

    async fn list_all(&self) -> Result<Vec<Purchase>, DomainError> {
        let mut items = self
            .purchases_by_id
            .read()
            .await
            .values()
            .cloned()
            .collect::<Vec<_>>();

        items.sort_by_key(|item| item.id);
        Ok(items)
    }
}
