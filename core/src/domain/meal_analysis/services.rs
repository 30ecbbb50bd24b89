use tracing::{info, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, now_in, services::Service},
    meal_analysis::{
        entities::{AnalysisRecord, ClassificationOutcome, FALLBACK_MODEL, MealItem, TableRow},
        export::records_to_csv,
        helpers::{build_record_and_row, parse_classifier_reply},
        ports::{MealAnalysisService, MealLogRepository, VisionClassifier},
        schema::{USER_INSTRUCTION, system_prompt},
        value_objects::{AnalyzeMealInput, AnalyzeMealOutput},
    },
    nutrition::{TagSet, tagger::tags_from_text},
};

pub const NO_VISION_COMMENT: &str =
    "Sin clave de API del modelo de visión: etiquetado por texto (fallback).";

struct Tagging {
    tags: TagSet,
    items: Vec<MealItem>,
    comment: String,
    model: String,
}

impl Tagging {
    fn from_text(description: &str, comment: String) -> Self {
        Self {
            tags: tags_from_text(description),
            items: MealItem::placeholder(),
            comment,
            model: FALLBACK_MODEL.to_string(),
        }
    }
}

impl<V, L> MealAnalysisService for Service<V, L>
where
    V: VisionClassifier,
    L: MealLogRepository,
{
    async fn analyze_meal(&self, input: AnalyzeMealInput) -> Result<AnalyzeMealOutput, CoreError> {
        // 1. Tag the meal, by vision when available
        let tagging = if self.vision_client.is_enabled() {
            let outcome = match self
                .vision_client
                .classify_image(
                    system_prompt(&self.baseline),
                    USER_INSTRUCTION.to_string(),
                    input.image,
                )
                .await
            {
                Ok(raw) => parse_classifier_reply(&raw),
                Err(e) => ClassificationOutcome::failure(e.to_string()),
            };

            match outcome {
                ClassificationOutcome::Success(classification) => Tagging {
                    tags: classification.tags,
                    items: classification.items,
                    comment: classification.comment,
                    model: self.vision_client.model_name(),
                },
                ClassificationOutcome::Failure { reason } => {
                    warn!("Vision classification failed, tagging by text: {}", reason);
                    Tagging::from_text(
                        &input.description,
                        format!("Etiquetado por texto (fallback). Error visión: {}", reason),
                    )
                }
            }
        } else {
            Tagging::from_text(&input.description, NO_VISION_COMMENT.to_string())
        };

        // 2. Score and build the record
        let description = if input.description.trim().is_empty() {
            MealItem::join_names(&tagging.items)
        } else {
            input.description
        };

        let (record, row) = build_record_and_row(
            tagging.tags,
            input.meal_type,
            description,
            tagging.model,
            &self.baseline,
            &now_in(&self.timezone),
        );

        // 3. Append to the session log
        self.meal_log_repository
            .append(record.clone(), row)
            .await?;

        info!(
            color = %record.color,
            tags = %record.tags.join(),
            model = %record.model,
            fallback = record.is_fallback(),
            "Meal analysis logged"
        );

        Ok(AnalyzeMealOutput {
            record,
            comment: tagging.comment,
        })
    }

    async fn get_records(&self) -> Result<Vec<AnalysisRecord>, CoreError> {
        self.meal_log_repository.get_records().await
    }

    async fn get_table_rows(&self) -> Result<Vec<TableRow>, CoreError> {
        self.meal_log_repository.get_table_rows().await
    }

    async fn export_csv(&self) -> Result<Vec<u8>, CoreError> {
        let records = self.meal_log_repository.get_records().await?;
        records_to_csv(&records)
    }
}
