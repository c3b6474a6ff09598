pub mod cost;
pub mod price;
