pub mod analyze_meal;
pub mod export_csv;
pub mod get_records;
pub mod get_table_rows;
