pub mod common;
pub mod meal_analysis;
pub mod nutrition;
