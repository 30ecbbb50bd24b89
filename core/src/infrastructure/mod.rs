pub mod llm;
pub mod meal_log;
