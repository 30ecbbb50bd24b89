use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn unknown() -> String {
    "?".to_string()
}

/// Food item reported by the vision model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MealItem {
    #[serde(rename = "nombre", default = "unknown")]
    pub name: String,
    #[serde(rename = "porcion", default = "unknown")]
    pub portion: String,
}

impl MealItem {
    pub fn new(name: impl Into<String>, portion: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            portion: portion.into(),
        }
    }

    /// Placeholder used when the model reports no items.
    pub fn placeholder() -> Vec<MealItem> {
        vec![MealItem::new("comida", "?")]
    }

    pub fn join_names(items: &[MealItem]) -> String {
        items
            .iter()
            .map(|item| item.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
