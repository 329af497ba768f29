use async_trait::async_trait;

use crate::domain::{
    errors::DomainError,
    product::{NewProduct, NewPurchase, Product, Purchase},
};

pub mod in_memory_product_repository;
pub mod in_memory_purchase_repository;
pub mod postgres_product_repository;
pub mod postgres_purchase_repository;

/// Row-backed access to the `product` table.
///
/// Absence of a row is a normal outcome (`Ok(None)` / empty vec); only
/// transport and query failures surface as errors.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, product: NewProduct) -> Result<Product, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, DomainError>;
    async fn list_all(&self) -> Result<Vec<Product>, DomainError>;
}

/// Row-backed access to the `purchase` table.
#[async_trait]
pub trait PurchaseRepository: Send + Sync {
    async fn create(&self, purchase: NewPurchase) -> Result<Purchase, DomainError>;
    async fn list_all(&self) -> Result<Vec<Purchase>, DomainError>;
}
