pub mod entities;
pub mod impact_table;
pub mod scoring;
pub mod tagger;

pub use entities::*;
