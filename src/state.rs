use std::sync::Arc;

use crate::application::{product_service::ProductService, purchase_service::PurchaseService};

#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<ProductService>,
    pub purchase_service: Arc<PurchaseService>,
}

impl AppState {
    pub fn new(product_service: Arc<ProductService>, purchase_service: Arc<PurchaseService>) -> Self {
        Self {
            product_service,
            purchase_service,
        }
    }
}
