use crate::domain::{meal_analysis::entities::MealItem, nutrition::TagSet};

/// Validated reply of the vision classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisionClassification {
    pub items: Vec<MealItem>,
    pub tags: TagSet,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassificationOutcome {
    Success(VisionClassification),
    Failure { reason: String },
}

impl ClassificationOutcome {
    pub fn failure(reason: impl Into<String>) -> Self {
        ClassificationOutcome::Failure {
            reason: reason.into(),
        }
    }
}
