pub mod analysis_record;
pub mod classification;
pub mod meal_item;
pub mod table_row;

pub use analysis_record::*;
pub use classification::*;
pub use meal_item::*;
pub use table_row::*;
