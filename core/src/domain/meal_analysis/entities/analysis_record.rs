use chrono::{DateTime, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::nutrition::{TagSet, TrafficLight};

/// Model name recorded when the heuristic tagger produced the tags.
pub const FALLBACK_MODEL: &str = "fallback";

/// One logged meal analysis. Field names on the wire are the ones the
/// frontend and the CSV export expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisRecord {
    #[serde(rename = "fecha_iso")]
    #[schema(value_type = String, format = Date, example = "2025-03-07")]
    pub date: NaiveDate,
    /// Two-digit day of month.
    #[serde(rename = "dia")]
    #[schema(example = "07")]
    pub day: String,
    /// Local time, `HH:MM`.
    #[serde(rename = "hora")]
    #[schema(example = "13:45")]
    pub time: String,
    #[serde(rename = "tipo")]
    pub meal_type: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "impacto")]
    pub impact: String,
    pub color: TrafficLight,
    #[serde(rename = "recomendacion")]
    pub recommendation: String,
    #[serde(rename = "etiquetas")]
    #[schema(value_type = Vec<String>)]
    pub tags: TagSet,
    #[serde(rename = "modelo")]
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct AnalysisRecordConfig {
    pub meal_type: String,
    pub description: String,
    pub impact: String,
    pub color: TrafficLight,
    pub recommendation: String,
    pub tags: TagSet,
    pub model: String,
}

impl AnalysisRecord {
    pub fn new<Tz: TimeZone>(config: AnalysisRecordConfig, now: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            date: now.date_naive(),
            day: now.format("%d").to_string(),
            time: now.format("%H:%M").to_string(),
            meal_type: config.meal_type,
            description: config.description,
            impact: config.impact,
            color: config.color,
            recommendation: config.recommendation,
            tags: config.tags,
            model: config.model,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.model == FALLBACK_MODEL
    }
}
