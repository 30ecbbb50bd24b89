use base64::{Engine as _, engine::general_purpose};
use bytes::Bytes;

use crate::domain::meal_analysis::entities::AnalysisRecord;

pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

/// Uploaded meal photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealImage {
    pub data: Bytes,
    pub mime_type: String,
}

impl MealImage {
    pub fn new(data: impl Into<Bytes>, mime_type: Option<String>) -> Self {
        Self {
            data: data.into(),
            mime_type: mime_type
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_IMAGE_MIME.to_string()),
        }
    }

    pub fn to_base64(&self) -> String {
        general_purpose::STANDARD.encode(&self.data)
    }

    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.to_base64())
    }
}

#[derive(Debug, Clone)]
pub struct AnalyzeMealInput {
    pub meal_type: String,
    pub description: String,
    pub image: MealImage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeMealOutput {
    pub record: AnalysisRecord,
    pub comment: String,
}
