use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub quantity: i32,
}

/// Insert shape for a product; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Purchase {
    pub id: i64,
    pub price: Decimal,
    pub product: i64,
}

#[derive(Debug, Clone)]
pub struct NewPurchase {
    pub price: Decimal,
    pub product: i64,
}

/// Transient aggregation result: one total per distinct product name.
///
/// Duplicate names collapse to a single entry, last-processed wins. That is
/// the historical behavior of this report and is kept on purpose; see the
/// collision test before changing it.
#[derive(Debug, Clone, Default)]
pub struct CostReport {
    pub total_costs: HashMap<String, Decimal>,
}

impl CostReport {
    pub fn insert(&mut self, product: &Product) {
        self.total_costs.insert(
            product.name.clone(),
            product.price * Decimal::from(product.quantity),
        );
    }
}
