use super::handlers::{
    index::{__path_index, index},
    summary::{__path_summary, summary},
    table::{__path_table, table},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(index, summary, table))]
pub struct ViewsApiDoc;

pub fn views_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;
    let mut router = Router::new().route(&format!("{}/", root_path), get(index));

    // `/comidas` as well as `/comidas/`
    if !root_path.is_empty() {
        router = router.route(root_path, get(index));
    }

    router
        .route(&format!("{}/summary", root_path), get(summary))
        .route(&format!("{}/tabla", root_path), get(table))
}
