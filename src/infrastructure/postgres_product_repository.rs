use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{PgPool, Row};

use crate::{
    domain::{
        errors::DomainError,
        product::{NewProduct, Product},
    },
    infrastructure::ProductRepository,
};

#[derive(Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn create(&self, product: NewProduct) -> Result<Product, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO product (name, price, quantity)
            VALUES ($1, $2, $3)
            RETURNING id, name, price, quantity
            "#,
        )
        .bind(product.name)
        .bind(product.price)
        .bind(product.quantity)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row_to_product(&row))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, DomainError> {
        let maybe_row = sqlx::query(
            r#"
            SELECT id, name, price, quantity
            FROM product
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(maybe_row.as_ref().map(row_to_product))
    }

    async fn list_all(&self) -> Result<Vec<Product>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, price, quantity
            FROM product
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.iter().map(row_to_product).collect())
    }
}

fn row_to_product(row: &sqlx::postgres::PgRow) -> Product {
    Product {
        id: row.get::<i64, _>("id"),
        name: row.get::<String, _>("name"),
        price: row.get::<Decimal, _>("price"),
        quantity: row.get::<i32, _>("quantity"),
    }
}

pub(crate) fn map_sqlx_error(error: sqlx::Error) -> DomainError {
    match error {
        sqlx::Error::Database(db_error) => match db_error.code().as_deref() {
            // foreign_key_violation
            Some("23503") => DomainError::Validation("referenced product does not exist".to_string()),
            // check_violation
            Some("23514") => DomainError::Validation("quantity must not be negative".to_string()),
            _ => DomainError::Storage(db_error.to_string()),
        },
        other => DomainError::Storage(other.to_string()),
    }
}
