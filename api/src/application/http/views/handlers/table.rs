use axum::{extract::State, response::Html};
use mealscore_core::domain::meal_analysis::{entities::TABLE_HEADERS, ports::MealAnalysisService};
use minijinja::context;

use crate::application::http::{
    server::{api_entities::api_error::ApiError, app_state::AppState},
    views::templates::{TABLE_TEMPLATE, render},
};

#[utoipa::path(
    get,
    path = "/tabla",
    tag = "views",
    summary = "Log rendered as an HTML table",
    responses(
        (status = 200, content_type = "text/html", body = String)
    ),
)]
pub async fn table(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let rows = state
        .service
        .get_table_rows()
        .await
        .map_err(ApiError::from)?;

    let page = render(
        &state.templates,
        TABLE_TEMPLATE,
        context! {
            root => state.args.server.root_path.as_str(),
            headers => TABLE_HEADERS,
            rows => rows,
        },
    )?;

    Ok(Html(page))
}
