use crate::{
    domain::common::{MealScoreConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{llm::VisionClient, meal_log::InMemoryMealLogRepository},
};

pub type MealScoreService = Service<VisionClient, InMemoryMealLogRepository>;

pub fn create_service(config: MealScoreConfig) -> Result<MealScoreService, CoreError> {
    let vision_client = VisionClient::from_config(&config.llm)?;
    let meal_log_repository = InMemoryMealLogRepository::new();

    tracing::info!(timezone = %config.timezone, "Meal log service created");

    Ok(Service::new(
        vision_client,
        meal_log_repository,
        config.baseline,
        config.timezone,
    ))
}
