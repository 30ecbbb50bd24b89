use axum::extract::State;
use mealscore_core::domain::meal_analysis::{entities::TableRow, ports::MealAnalysisService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetTableRowsResponse {
    pub count: usize,
    pub items: Vec<TableRow>,
}

#[utoipa::path(
    get,
    path = "/registros_tabla",
    tag = "meal-log",
    summary = "List the display rows of the log",
    responses(
        (status = 200, body = GetTableRowsResponse)
    ),
)]
pub async fn get_table_rows(
    State(state): State<AppState>,
) -> Result<Response<GetTableRowsResponse>, ApiError> {
    let items = state
        .service
        .get_table_rows()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetTableRowsResponse {
        count: items.len(),
        items,
    }))
}
