use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Text fields of the analyze form, checked once the multipart body is read.
#[derive(Debug, Default, Clone, Validate)]
pub struct AnalyzeMealForm {
    #[validate(length(max = 64, message = "tipo must be at most 64 characters"))]
    pub meal_type: String,
    #[validate(length(max = 2000, message = "descripcion must be at most 2000 characters"))]
    pub description: String,
}

/// Multipart body of `POST /analyze`, for the OpenAPI document.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeMealMultipart {
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
    #[schema(example = "Almuerzo")]
    pub tipo: Option<String>,
    #[schema(example = "Salmón con ensalada")]
    pub descripcion: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_limits() {
        let form = AnalyzeMealForm {
            meal_type: "Cena".to_string(),
            description: "pasta".to_string(),
        };
        assert!(form.validate().is_ok());

        let form = AnalyzeMealForm {
            meal_type: "x".repeat(65),
            description: String::new(),
        };
        assert!(form.validate().is_err());

        let form = AnalyzeMealForm {
            meal_type: String::new(),
            description: "x".repeat(2001),
        };
        assert!(form.validate().is_err());
    }
}
