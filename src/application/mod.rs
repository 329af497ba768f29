pub mod dto;
pub mod product_service;
pub mod purchase_service;
