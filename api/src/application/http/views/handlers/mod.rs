pub mod index;
pub mod summary;
pub mod table;
