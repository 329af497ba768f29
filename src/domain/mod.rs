pub mod errors;
pub mod product;
