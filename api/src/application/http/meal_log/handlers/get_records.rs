use axum::extract::State;
use mealscore_core::domain::meal_analysis::{entities::AnalysisRecord, ports::MealAnalysisService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRecordsResponse {
    pub count: usize,
    pub items: Vec<AnalysisRecord>,
}

#[utoipa::path(
    get,
    path = "/registros",
    tag = "meal-log",
    summary = "List logged analyses",
    responses(
        (status = 200, body = GetRecordsResponse)
    ),
)]
pub async fn get_records(
    State(state): State<AppState>,
) -> Result<Response<GetRecordsResponse>, ApiError> {
    let items = state.service.get_records().await.map_err(ApiError::from)?;

    Ok(Response::OK(GetRecordsResponse {
        count: items.len(),
        items,
    }))
}
