use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{
    errors::DomainError,
    product::{CostReport, Product, Purchase},
};

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: Decimal,
    pub quantity: i32,
}

impl CreateProductRequest {
    pub fn validate(&self) -> Result<(), DomainError> {
        let name = self.name.trim();

        if name.is_empty() {
            return Err(DomainError::validation("name must not be blank"));
        }
        if name.len() > 200 {
            return Err(DomainError::validation(
                "name must be at most 200 characters",
            ));
        }
        if self.price.is_sign_negative() {
            return Err(DomainError::validation("price must not be negative"));
        }
        if self.quantity < 0 {
            return Err(DomainError::validation("quantity must not be negative"));
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub quantity: i32,
}

impl From<Product> for ProductResponse {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            name: value.name,
            price: value.price,
            quantity: value.quantity,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RecordPurchaseRequest {
    pub price: Decimal,
    pub product: i64,
}

impl RecordPurchaseRequest {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.price.is_sign_negative() {
            return Err(DomainError::validation("price must not be negative"));
        }
        if self.product <= 0 {
            return Err(DomainError::validation(
                "product must be a positive product id",
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct PurchaseResponse {
    pub id: i64,
    pub price: Decimal,
    pub product: i64,
}

impl From<Purchase> for PurchaseResponse {
    fn from(value: Purchase) -> Self {
        Self {
            id: value.id,
            price: value.price,
            product: value.product,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TotalCostsResponse {
    #[serde(rename = "totalCosts")]
    pub total_costs: HashMap<String, Decimal>,
}

impl From<CostReport> for TotalCostsResponse {
    fn from(value: CostReport) -> Self {
        Self {
            total_costs: value.total_costs,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
