use axum::{extract::State, response::Html};
use minijinja::context;

use crate::application::http::{
    server::{api_entities::api_error::ApiError, app_state::AppState},
    views::templates::{INDEX_TEMPLATE, render},
};

#[utoipa::path(
    get,
    path = "/",
    tag = "views",
    summary = "Capture page",
    responses(
        (status = 200, content_type = "text/html", body = String)
    ),
)]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let page = render(
        &state.templates,
        INDEX_TEMPLATE,
        context! { root => state.args.server.root_path.as_str() },
    )?;

    Ok(Html(page))
}
