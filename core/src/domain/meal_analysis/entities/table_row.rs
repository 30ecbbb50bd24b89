use chrono::Datelike;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{meal_analysis::entities::AnalysisRecord, nutrition::TrafficLight};

/// Column headers of the display table, in order.
pub const TABLE_HEADERS: [&str; 7] = [
    "Día",
    "Fecha",
    "Hora",
    "Tipo de comida",
    "Descripción",
    "Impacto según exámenes",
    "Color",
];

/// Display projection of an [`AnalysisRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TableRow {
    #[serde(rename = "Día")]
    pub day: u32,
    /// `DD/MM/YYYY`
    #[serde(rename = "Fecha")]
    pub date: String,
    #[serde(rename = "Hora")]
    pub time: String,
    #[serde(rename = "Tipo de comida")]
    pub meal_type: String,
    #[serde(rename = "Descripción")]
    pub description: String,
    #[serde(rename = "Impacto según exámenes")]
    pub impact: String,
    #[serde(rename = "Color")]
    pub color: TrafficLight,
}

impl TableRow {
    /// Cell values in [`TABLE_HEADERS`] order.
    pub fn cells(&self) -> [String; 7] {
        [
            self.day.to_string(),
            self.date.clone(),
            self.time.clone(),
            self.meal_type.clone(),
            self.description.clone(),
            self.impact.clone(),
            self.color.to_string(),
        ]
    }
}

impl From<&AnalysisRecord> for TableRow {
    fn from(record: &AnalysisRecord) -> Self {
        Self {
            day: record.date.day(),
            date: record.date.format("%d/%m/%Y").to_string(),
            time: record.time.clone(),
            meal_type: record.meal_type.clone(),
            description: record.description.clone(),
            impact: record.impact.clone(),
            color: record.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono_tz::America::Santiago;

    use super::*;
    use crate::domain::{
        meal_analysis::entities::{AnalysisRecordConfig, FALLBACK_MODEL},
        nutrition::TagSet,
    };

    #[test]
    fn test_row_projects_record() {
        let now = Santiago.with_ymd_and_hms(2025, 1, 4, 8, 30, 0).unwrap();
        let record = AnalysisRecord::new(
            AnalysisRecordConfig {
                meal_type: "Desayuno".to_string(),
                description: "avena".to_string(),
                impact: "Impacto incierto (etiquetas vacías).".to_string(),
                color: TrafficLight::Yellow,
                recommendation: String::new(),
                tags: TagSet::new(),
                model: FALLBACK_MODEL.to_string(),
            },
            &now,
        );

        let row = TableRow::from(&record);
        assert_eq!(row.day, 4);
        assert_eq!(row.date, "04/01/2025");
        assert_eq!(row.time, "08:30");
        assert_eq!(row.meal_type, "Desayuno");
        assert_eq!(row.color, TrafficLight::Yellow);

        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["Día"], 4);
        assert_eq!(value["Fecha"], "04/01/2025");
        assert_eq!(value["Color"], "🟡");
        assert_eq!(row.cells()[0], "4");
    }
}
