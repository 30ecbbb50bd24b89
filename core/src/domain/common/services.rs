use chrono_tz::Tz;

use crate::domain::{
    meal_analysis::ports::{MealLogRepository, VisionClassifier},
    nutrition::PatientBaseline,
};

#[derive(Clone)]
pub struct Service<V, L>
where
    V: VisionClassifier,
    L: MealLogRepository,
{
    pub(crate) vision_client: V,
    pub(crate) meal_log_repository: L,
    pub(crate) baseline: PatientBaseline,
    pub(crate) timezone: Tz,
}

impl<V, L> Service<V, L>
where
    V: VisionClassifier,
    L: MealLogRepository,
{
    pub fn new(
        vision_client: V,
        meal_log_repository: L,
        baseline: PatientBaseline,
        timezone: Tz,
    ) -> Self {
        Self {
            vision_client,
            meal_log_repository,
            baseline,
            timezone,
        }
    }

    pub fn meal_log(&self) -> &L {
        &self.meal_log_repository
    }
}
