use std::sync::Arc;

use async_trait::async_trait;
use product_costs_api::{
    application::{dto::CreateProductRequest, product_service::ProductService},
    domain::{
        errors::DomainError,
        product::{NewProduct, Product},
    },
    infrastructure::{ProductRepository, in_memory_product_repository::InMemoryProductRepository},
};
use rust_decimal::Decimal;

struct FailingProductRepository;

#[async_trait]
impl ProductRepository for FailingProductRepository {
    async fn create(&self, _product: NewProduct) -> Result<Product, DomainError> {
        Err(DomainError::storage("connection refused"))
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Product>, DomainError> {
        Err(DomainError::storage("connection refused"))
    }

    async fn list_all(&self) -> Result<Vec<Product>, DomainError> {
        Err(DomainError::storage("connection refused"))
    }
}

async fn seeded_service(products: &[(&str, Decimal, i32)]) -> ProductService {
    let repository = Arc::new(InMemoryProductRepository::new());
    let service = ProductService::new(repository);

    for (name, price, quantity) in products {
        service
            .create_product(CreateProductRequest {
                name: (*name).to_string(),
                price: *price,
                quantity: *quantity,
            })
            .await
            .expect("seed product should insert");
    }

    service
}

#[tokio::test]
async fn totals_are_exact_decimal_products_of_price_and_quantity() {
    let service = seeded_service(&[
        ("Beer", Decimal::new(350, 2), 4),
        ("Wine", Decimal::new(1000, 2), 2),
    ])
    .await;

    let report = service.total_costs().await;

    assert_eq!(report.total_costs.len(), 2);
    assert_eq!(report.total_costs["Beer"], Decimal::new(1400, 2));
    assert_eq!(report.total_costs["Wine"], Decimal::new(2000, 2));
    // 3.50 × 4 must come out as 14.00, not 13.999999 or bare 14.
    assert_eq!(report.total_costs["Beer"].to_string(), "14.00");
    assert_eq!(report.total_costs["Wine"].to_string(), "20.00");
}

#[tokio::test]
async fn empty_store_yields_empty_report() {
    let service = seeded_service(&[]).await;

    let report = service.total_costs().await;

    assert!(report.total_costs.is_empty());
}

#[tokio::test]
async fn duplicate_names_collapse_to_one_entry_last_processed_wins() {
    let service = seeded_service(&[
        ("Beer", Decimal::new(350, 2), 4),
        ("Beer", Decimal::new(500, 2), 3),
    ])
    .await;

    let report = service.total_costs().await;

    // Historical last-write-wins behavior: the later row overwrites the
    // earlier one instead of erroring or summing.
    assert_eq!(report.total_costs.len(), 1);
    assert_eq!(report.total_costs["Beer"], Decimal::new(1500, 2));
}

#[tokio::test]
async fn repository_failure_degrades_to_empty_report() {
    let service = ProductService::new(Arc::new(FailingProductRepository));

    let report = service.total_costs().await;

    assert!(report.total_costs.is_empty());
}

#[tokio::test]
async fn zero_quantity_product_contributes_zero_total() {
    let service = seeded_service(&[("Water", Decimal::new(125, 2), 0)]).await;

    let report = service.total_costs().await;

    assert_eq!(report.total_costs["Water"], Decimal::ZERO);
}
