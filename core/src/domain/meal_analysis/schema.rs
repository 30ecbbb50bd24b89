use serde_json::json;

use crate::domain::nutrition::{PatientBaseline, Tag};

pub const USER_INSTRUCTION: &str =
    "Identifica alimentos y etiquetas nutricionales. Devuelve SOLO JSON válido.";

/// Builds the system prompt sent with every image, embedding the patient's lab values.
pub fn system_prompt(baseline: &PatientBaseline) -> String {
    let tag_names = Tag::ALL
        .iter()
        .map(|tag| format!("'{}'", tag.as_str()))
        .collect::<Vec<_>>()
        .join(",");

    format!(
        "Eres un nutricionista que analiza imágenes de comidas para una paciente con: \
         HOMA-IR {}, TG {} mg/dL, LDL {} mg/dL, HDL {} mg/dL, Ferritina {} ng/mL, \
         Vitamina D {} ng/mL. \
         Responde SOLO JSON con las claves: items (lista de objetos {{nombre, porcion}}), \
         etiquetas (lista con valores como {}), \
         comentario_breve (string, 1-2 frases).",
        baseline.homa_ir,
        baseline.triglycerides,
        baseline.ldl,
        baseline.hdl,
        baseline.ferritin,
        baseline.vitamin_d,
        tag_names,
    )
}

/// Returns the JSON schema for vision classifier replies
pub fn get_classification_schema() -> serde_json::Value {
    let tag_names: Vec<&str> = Tag::ALL.iter().map(Tag::as_str).collect();

    json!({
        "type": "object",
        "properties": {
            "items": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "nombre": { "type": "string" },
                        "porcion": { "type": "string" }
                    },
                    "required": ["nombre", "porcion"]
                }
            },
            "etiquetas": {
                "type": "array",
                "items": {
                    "type": "string",
                    "enum": tag_names
                }
            },
            "comentario_breve": { "type": "string" }
        },
        "required": ["items", "etiquetas", "comentario_breve"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_embeds_baseline() {
        let prompt = system_prompt(&PatientBaseline::default());
        assert!(prompt.contains("HOMA-IR 4.6"));
        assert!(prompt.contains("TG 193 mg/dL"));
        assert!(prompt.contains("Ferritina 10.5 ng/mL"));
        assert!(prompt.contains("Vitamina D 25.4 ng/mL"));
        assert!(prompt.contains("'vitamina_d_fuente'"));
        assert!(prompt.contains("{nombre, porcion}"));
    }

    #[test]
    fn test_schema_lists_every_tag() {
        let schema = get_classification_schema();
        let tags = schema["properties"]["etiquetas"]["items"]["enum"]
            .as_array()
            .unwrap();
        assert_eq!(tags.len(), Tag::ALL.len());
    }
}
