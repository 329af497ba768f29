use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{PgPool, Row};

use crate::{
    domain::{
        errors::DomainError,
        product::{NewPurchase, Purchase},
    },
    infrastructure::{PurchaseRepository, postgres_product_repository::map_sqlx_error},
};

#[derive(Clone)]
pub struct PostgresPurchaseRepository {
    pool: PgPool,
}

impl PostgresPurchaseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PurchaseRepository for PostgresPurchaseRepository {
    async fn create(&self, purchase: NewPurchase) -> Result<Purchase, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO purchase (price, product)
            VALUES ($1, $2)
            RETURNING id, price, product
            "#,
        )
        .bind(purchase.price)
        .bind(purchase.product)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row_to_purchase(&row))
    }

    async fn list_all(&self) -> Result<Vec<Purchase>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, price, product
            FROM purchase
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.iter().map(row_to_purchase).collect())
    }
}

fn row_to_purchase(row: &sqlx::postgres::PgRow) -> Purchase {
    Purchase {
        id: row.get::<i64, _>("id"),
        price: row.get::<Decimal, _>("price"),
        product: row.get::<i64, _>("product"),
    }
}
