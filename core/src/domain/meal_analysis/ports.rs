use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal_analysis::{
        entities::{AnalysisRecord, TableRow},
        value_objects::{AnalyzeMealInput, AnalyzeMealOutput, MealImage},
    },
};

/// Client for an external vision-capable model.
#[cfg_attr(test, mockall::automock)]
pub trait VisionClassifier: Send + Sync {
    /// Name recorded on analyses this classifier produced.
    fn model_name(&self) -> String;

    /// False when no credentials are configured; the heuristic tagger is used instead.
    fn is_enabled(&self) -> bool;

    /// Sends the image with both instructions and returns the raw text reply.
    fn classify_image(
        &self,
        system_prompt: String,
        instruction: String,
        image: MealImage,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Append-only session log.
#[cfg_attr(test, mockall::automock)]
pub trait MealLogRepository: Send + Sync {
    /// Appends a record together with its table row.
    fn append(
        &self,
        record: AnalysisRecord,
        row: TableRow,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn get_records(&self) -> impl Future<Output = Result<Vec<AnalysisRecord>, CoreError>> + Send;

    fn get_table_rows(&self) -> impl Future<Output = Result<Vec<TableRow>, CoreError>> + Send;

    fn count(&self) -> impl Future<Output = Result<usize, CoreError>> + Send;
}

/// Service trait for meal analysis business logic
#[cfg_attr(test, mockall::automock)]
pub trait MealAnalysisService: Send + Sync {
    fn analyze_meal(
        &self,
        input: AnalyzeMealInput,
    ) -> impl Future<Output = Result<AnalyzeMealOutput, CoreError>> + Send;

    fn get_records(&self) -> impl Future<Output = Result<Vec<AnalysisRecord>, CoreError>> + Send;

    fn get_table_rows(&self) -> impl Future<Output = Result<Vec<TableRow>, CoreError>> + Send;

    /// Renders the whole log as CSV.
    fn export_csv(&self) -> impl Future<Output = Result<Vec<u8>, CoreError>> + Send;
}
