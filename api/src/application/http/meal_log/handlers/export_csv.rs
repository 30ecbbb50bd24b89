use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response as AxumResponse},
};
use mealscore_core::domain::meal_analysis::{export::CSV_FILE_NAME, ports::MealAnalysisService};

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

#[utoipa::path(
    get,
    path = "/export.csv",
    tag = "meal-log",
    summary = "Download the log as CSV",
    responses(
        (status = 200, content_type = "text/csv", body = String)
    ),
)]
pub async fn export_csv(State(state): State<AppState>) -> Result<AxumResponse, ApiError> {
    let body = state.service.export_csv().await.map_err(ApiError::from)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", CSV_FILE_NAME),
            ),
        ],
        body,
    )
        .into_response())
}
