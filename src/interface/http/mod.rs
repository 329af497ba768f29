pub mod problem;
pub mod products_handler;
pub mod purchases_handler;
