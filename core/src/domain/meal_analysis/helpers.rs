use chrono::{DateTime, TimeZone};
use serde_json::Value;

use crate::domain::{
    meal_analysis::entities::{
        AnalysisRecord, AnalysisRecordConfig, ClassificationOutcome, MealItem, TableRow,
        VisionClassification,
    },
    nutrition::{
        PatientBaseline, TagSet,
        scoring::{classify_color, impact_text, recommendation},
    },
};

/// Validates a raw classifier reply.
///
/// Accepts a bare JSON object or one wrapped in a markdown code fence. Every
/// key is optional; tags outside the vocabulary are dropped.
pub fn parse_classifier_reply(raw: &str) -> ClassificationOutcome {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ClassificationOutcome::failure("empty content from model");
    }

    let parsed: Value = match serde_json::from_str(trimmed) {
        Ok(value) => value,
        Err(_) => match serde_json::from_str(strip_code_fence(trimmed)) {
            Ok(value) => value,
            Err(e) => {
                return ClassificationOutcome::failure(format!("invalid JSON from model: {}", e));
            }
        },
    };

    let Value::Object(reply) = parsed else {
        return ClassificationOutcome::failure("model reply is not a JSON object");
    };

    let items: Vec<MealItem> = reply
        .get("items")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(item_from_value).collect())
        .unwrap_or_default();

    let tags = reply
        .get("etiquetas")
        .and_then(Value::as_array)
        .map(|tags| TagSet::from_names(tags.iter().filter_map(Value::as_str)))
        .unwrap_or_default();

    let comment = reply
        .get("comentario_breve")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    ClassificationOutcome::Success(VisionClassification {
        items: if items.is_empty() {
            MealItem::placeholder()
        } else {
            items
        },
        tags,
        comment,
    })
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.trim_start_matches('`');
    // drop the language line (```json)
    let body = match rest.split_once('\n') {
        Some((_, body)) => body,
        None => rest,
    };
    body.trim_end().trim_end_matches('`').trim()
}

fn item_from_value(value: &Value) -> Option<MealItem> {
    fn field(value: Option<&Value>) -> String {
        match value {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => "?".to_string(),
            Some(other) => other.to_string(),
        }
    }

    match value {
        Value::Object(item) => Some(MealItem::new(
            field(item.get("nombre")),
            field(item.get("porcion")),
        )),
        Value::String(name) => Some(MealItem::new(name.clone(), "?")),
        _ => None,
    }
}

/// Scores the tags and assembles the record and its display row.
pub fn build_record_and_row<Tz: TimeZone>(
    tags: TagSet,
    meal_type: String,
    description: String,
    model: String,
    baseline: &PatientBaseline,
    now: &DateTime<Tz>,
) -> (AnalysisRecord, TableRow)
where
    Tz::Offset: std::fmt::Display,
{
    let record = AnalysisRecord::new(
        AnalysisRecordConfig {
            meal_type,
            description,
            impact: impact_text(&tags),
            color: classify_color(&tags),
            recommendation: recommendation(&tags, baseline),
            tags,
            model,
        },
        now,
    );
    let row = TableRow::from(&record);

    (record, row)
}

#[cfg(test)]
mod tests {
    use chrono_tz::America::Santiago;

    use super::*;
    use crate::domain::nutrition::{Tag, TrafficLight};

    fn success(outcome: ClassificationOutcome) -> VisionClassification {
        match outcome {
            ClassificationOutcome::Success(classification) => classification,
            ClassificationOutcome::Failure { reason } => panic!("unexpected failure: {reason}"),
        }
    }

    #[test]
    fn test_parse_full_reply() {
        let raw = r#"{
            "items": [{"nombre": "salmón", "porcion": "150 g"}, {"nombre": "ensalada", "porcion": 1}],
            "etiquetas": ["omega_3", "fibra", "proteina"],
            "comentario_breve": "Buena elección."
        }"#;
        let classification = success(parse_classifier_reply(raw));

        assert_eq!(
            classification.items,
            vec![MealItem::new("salmón", "150 g"), MealItem::new("ensalada", "1")]
        );
        assert_eq!(classification.tags, TagSet::from([Tag::Omega3, Tag::Fiber]));
        assert_eq!(classification.comment, "Buena elección.");
    }

    #[test]
    fn test_parse_reply_in_code_fence() {
        let raw = "```json\n{\"etiquetas\": [\"alcohol\"]}\n```";
        let classification = success(parse_classifier_reply(raw));
        assert_eq!(classification.tags, TagSet::from([Tag::Alcohol]));
        assert_eq!(classification.items, MealItem::placeholder());
        assert_eq!(classification.comment, "");
    }

    #[test]
    fn test_parse_reply_with_missing_keys() {
        let classification = success(parse_classifier_reply("{}"));
        assert!(classification.tags.is_empty());
        assert_eq!(classification.items, MealItem::placeholder());
    }

    #[test]
    fn test_parse_failures() {
        for raw in ["", "   ", "no es json", "[1, 2]", "```\nnope\n```"] {
            assert!(
                matches!(
                    parse_classifier_reply(raw),
                    ClassificationOutcome::Failure { .. }
                ),
                "{raw:?} should fail"
            );
        }
    }

    #[test]
    fn test_build_record_and_row() {
        let now = Santiago.with_ymd_and_hms(2025, 2, 14, 20, 0, 0).unwrap();
        let (record, row) = build_record_and_row(
            TagSet::from([Tag::Alcohol, Tag::SaturatedFat]),
            "Cena".to_string(),
            "pizza y cerveza".to_string(),
            "gpt-4o".to_string(),
            &PatientBaseline::default(),
            &now,
        );

        assert_eq!(record.color, TrafficLight::Red);
        assert_eq!(record.date.to_string(), "2025-02-14");
        assert_eq!(record.day, "14");
        assert_eq!(record.model, "gpt-4o");
        assert!(record.recommendation.starts_with("Preferir agua/soda"));
        assert_eq!(row.date, "14/02/2025");
        assert_eq!(row.day, 14);
        assert_eq!(row.impact, record.impact);
        assert_eq!(row.color, record.color);
    }
}
