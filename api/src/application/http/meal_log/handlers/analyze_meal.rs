use axum::extract::{Multipart, State};
use mealscore_core::domain::meal_analysis::{
    entities::AnalysisRecord,
    ports::MealAnalysisService,
    value_objects::{AnalyzeMealInput, MealImage},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::{
    meal_log::validators::{AnalyzeMealForm, AnalyzeMealMultipart},
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

pub const MISSING_IMAGE: &str = "Falta imagen";

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AnalyzeMealResponse {
    pub ok: bool,
    pub registro: AnalysisRecord,
    pub comentario: String,
}

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "meal-log",
    summary = "Analyze a meal photo",
    description = "Tags the meal with the vision model, or from its description when the model is unavailable, scores it and appends it to the log",
    request_body(content = AnalyzeMealMultipart, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = AnalyzeMealResponse),
        (status = 400, body = ApiErrorResponse)
    ),
)]
pub async fn analyze_meal(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<AnalyzeMealResponse>, ApiError> {
    let max_image_bytes = state.args.server.max_image_bytes;
    let mut form = AnalyzeMealForm::default();
    let mut image: Option<MealImage> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "image" => {
                let mime_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                if data.len() > max_image_bytes {
                    return Err(ApiError::BadRequest(format!(
                        "Image too large. Max size is {} bytes",
                        max_image_bytes
                    )));
                }

                // an empty file part is what browsers send when nothing was picked
                if !data.is_empty() {
                    image = Some(MealImage::new(data, mime_type));
                }
            }
            "tipo" => {
                form.meal_type = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read tipo: {}", e)))?;
            }
            "descripcion" => {
                form.description = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read descripcion: {}", e))
                })?;
            }
            _ => {}
        }
    }

    let image = image.ok_or_else(|| ApiError::BadRequest(MISSING_IMAGE.to_string()))?;

    form.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let output = state
        .service
        .analyze_meal(AnalyzeMealInput {
            meal_type: form.meal_type.trim().to_string(),
            description: form.description.trim().to_string(),
            image,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeMealResponse {
        ok: true,
        registro: output.record,
        comentario: output.comment,
    }))
}
