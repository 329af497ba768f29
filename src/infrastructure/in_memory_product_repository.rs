use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    domain::{
        errors::DomainError,
        product::{NewProduct, Product},
    },
    infrastructure::ProductRepository,
};

/// In-memory stand-in for the Postgres repository, used by tests and local
/// wiring. Iteration order for `list_all` is ascending id, which for this
/// store equals insertion order.
#[derive(Default)]
pub struct InMemoryProductRepository {
    products_by_id: RwLock<HashMap<i64, Product>>,
    next_id: AtomicI64,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: NewProduct) -> Result<Product, DomainError> {
        if product.quantity < 0 {
            return Err(DomainError::validation("quantity must not be negative"));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let created = Product {
            id,
            name: product.name,
            price: product.price,
            quantity: product.quantity,
        };

        self.products_by_id
            .write()
            .await
            .insert(created.id, created.clone());

        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, DomainError> {
        Ok(self.products_by_id.read().await.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Product>, DomainError> {
        let mut items = self
            .products_by_id
            .read()
            .await
            .values()
            .cloned()
            .collect::<Vec<_>>();

        items.sort_by_key(|item| item.id);
        Ok(items)
    }
}
