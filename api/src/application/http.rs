pub mod health;
pub mod meal_log;
pub mod server;
pub mod views;
