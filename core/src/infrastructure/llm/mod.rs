use std::time::Duration;

use crate::domain::{
    common::{LLMConfig, LLMProvider, entities::app_errors::CoreError},
    meal_analysis::{
        entities::FALLBACK_MODEL, ports::VisionClassifier, value_objects::MealImage,
    },
};

pub mod gemini_client;
pub mod openai_client;

pub use gemini_client::GeminiVisionClient;
pub use openai_client::OpenAIVisionClient;

/// Vision client selected from configuration at startup.
#[derive(Debug, Clone)]
pub enum VisionClient {
    OpenAI(OpenAIVisionClient),
    Gemini(GeminiVisionClient),
    /// No API key configured.
    Disabled,
}

impl VisionClient {
    pub fn from_config(config: &LLMConfig) -> Result<Self, CoreError> {
        let Some(api_key) = config.api_key.clone().filter(|key| !key.trim().is_empty()) else {
            tracing::warn!(
                provider = %config.provider,
                "No API key configured, meals will be tagged from their description"
            );
            return Ok(VisionClient::Disabled);
        };

        let timeout = Duration::from_secs(config.timeout_secs);
        let client = match config.provider {
            LLMProvider::OpenAI => VisionClient::OpenAI(OpenAIVisionClient::new(
                api_key,
                config.model.clone(),
                config.base_url.clone(),
                timeout,
            )?),
            LLMProvider::Gemini => VisionClient::Gemini(GeminiVisionClient::new(
                api_key,
                config.model.clone(),
                config.base_url.clone(),
                timeout,
            )?),
        };
        tracing::info!(provider = %config.provider, model = %config.model, "Vision client ready");

        Ok(client)
    }
}

impl VisionClassifier for VisionClient {
    fn model_name(&self) -> String {
        match self {
            VisionClient::OpenAI(client) => client.model_name(),
            VisionClient::Gemini(client) => client.model_name(),
            VisionClient::Disabled => FALLBACK_MODEL.to_string(),
        }
    }

    fn is_enabled(&self) -> bool {
        !matches!(self, VisionClient::Disabled)
    }

    async fn classify_image(
        &self,
        system_prompt: String,
        instruction: String,
        image: MealImage,
    ) -> Result<String, CoreError> {
        match self {
            VisionClient::OpenAI(client) => {
                client
                    .classify_image(system_prompt, instruction, image)
                    .await
            }
            VisionClient::Gemini(client) => {
                client
                    .classify_image(system_prompt, instruction, image)
                    .await
            }
            VisionClient::Disabled => Err(CoreError::ExternalServiceError(
                "vision model not configured".to_string(),
            )),
        }
    }
}
