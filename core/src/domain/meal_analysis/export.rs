use serde::Serialize;

use crate::domain::{common::entities::app_errors::CoreError, meal_analysis::entities::AnalysisRecord};

pub const CSV_FILE_NAME: &str = "registros.csv";

/// Flat CSV shape of an [`AnalysisRecord`]; field order is the column order.
#[derive(Debug, Serialize)]
struct CsvRecord<'a> {
    fecha_iso: String,
    dia: &'a str,
    hora: &'a str,
    tipo: &'a str,
    descripcion: &'a str,
    impacto: &'a str,
    color: &'static str,
    recomendacion: &'a str,
    etiquetas: String,
    modelo: &'a str,
}

impl<'a> From<&'a AnalysisRecord> for CsvRecord<'a> {
    fn from(record: &'a AnalysisRecord) -> Self {
        Self {
            fecha_iso: record.date.to_string(),
            dia: &record.day,
            hora: &record.time,
            tipo: &record.meal_type,
            descripcion: &record.description,
            impacto: &record.impact,
            color: record.color.as_str(),
            recomendacion: &record.recommendation,
            etiquetas: record.tags.join(),
            modelo: &record.model,
        }
    }
}

/// Serialises the log as CSV with a header row. Tags are comma-joined.
pub fn records_to_csv(records: &[AnalysisRecord]) -> Result<Vec<u8>, CoreError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(Vec::new());

    if records.is_empty() {
        writer
            .write_record([
                "fecha_iso",
                "dia",
                "hora",
                "tipo",
                "descripcion",
                "impacto",
                "color",
                "recomendacion",
                "etiquetas",
                "modelo",
            ])
            .map_err(|e| CoreError::Export(e.to_string()))?;
    }

    for record in records {
        writer
            .serialize(CsvRecord::from(record))
            .map_err(|e| CoreError::Export(e.to_string()))?;
    }

    writer.into_inner().map_err(|e| {
        tracing::error!("Failed to flush CSV export: {}", e);
        CoreError::Export(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono_tz::America::Santiago;

    use super::*;
    use crate::domain::{
        meal_analysis::helpers::build_record_and_row,
        nutrition::{PatientBaseline, Tag, TagSet},
    };

    fn record(description: &str, tags: TagSet) -> AnalysisRecord {
        let now = Santiago.with_ymd_and_hms(2025, 5, 2, 12, 0, 0).unwrap();
        build_record_and_row(
            tags,
            "Almuerzo".to_string(),
            description.to_string(),
            "fallback".to_string(),
            &PatientBaseline::default(),
            &now,
        )
        .0
    }

    #[test]
    fn test_empty_log_exports_header_only() {
        let csv = String::from_utf8(records_to_csv(&[]).unwrap()).unwrap();
        assert_eq!(
            csv,
            "fecha_iso,dia,hora,tipo,descripcion,impacto,color,recomendacion,etiquetas,modelo\n"
        );
    }

    #[test]
    fn test_every_record_is_one_row_and_tags_survive() {
        let records = vec![
            record("asado, con \"chimichurri\"", TagSet::from([Tag::HemeIron, Tag::SaturatedFat])),
            record("agua", TagSet::new()),
            record("salmón", TagSet::from([Tag::Omega3])),
        ];
        let bytes = records_to_csv(&records).unwrap();

        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.get(0), Some("fecha_iso"));
        assert_eq!(headers.get(8), Some("etiquetas"));

        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), records.len());

        for (row, record) in rows.iter().zip(&records) {
            assert_eq!(row.get(0), Some("2025-05-02"));
            assert_eq!(row.get(4), Some(record.description.as_str()));
            assert_eq!(row.get(6), Some(record.color.as_str()));
            let tags = TagSet::from_names(row[8].split(',').filter(|s| !s.is_empty()));
            assert_eq!(tags, record.tags);
        }
    }
}
