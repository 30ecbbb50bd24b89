use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal_analysis::{
        entities::{AnalysisRecord, TableRow},
        ports::MealLogRepository,
    },
};

#[derive(Debug, Default)]
struct MealLog {
    records: Vec<AnalysisRecord>,
    rows: Vec<TableRow>,
}

/// Process-lifetime session log. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMealLogRepository {
    log: Arc<RwLock<MealLog>>,
}

impl InMemoryMealLogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MealLogRepository for InMemoryMealLogRepository {
    async fn append(&self, record: AnalysisRecord, row: TableRow) -> Result<(), CoreError> {
        // one guard for both so the sequences stay parallel
        let mut log = self.log.write().await;
        log.records.push(record);
        log.rows.push(row);
        Ok(())
    }

    async fn get_records(&self) -> Result<Vec<AnalysisRecord>, CoreError> {
        Ok(self.log.read().await.records.clone())
    }

    async fn get_table_rows(&self) -> Result<Vec<TableRow>, CoreError> {
        Ok(self.log.read().await.rows.clone())
    }

    async fn count(&self) -> Result<usize, CoreError> {
        Ok(self.log.read().await.records.len())
    }
}
