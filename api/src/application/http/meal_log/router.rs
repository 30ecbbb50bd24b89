use super::handlers::{
    analyze_meal::{__path_analyze_meal, analyze_meal},
    export_csv::{__path_export_csv, export_csv},
    get_records::{__path_get_records, get_records},
    get_table_rows::{__path_get_table_rows, get_table_rows},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use utoipa::OpenApi;

/// Room for the text fields and multipart framing on top of the image.
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(paths(analyze_meal, get_records, get_table_rows, export_csv))]
pub struct MealLogApiDoc;

fn analyze_body_limit(max_image_bytes: usize) -> usize {
    max_image_bytes.saturating_add(FORM_OVERHEAD_BYTES)
}

pub fn meal_log_routes(state: AppState) -> Router<AppState> {
    let body_limit = analyze_body_limit(state.args.server.max_image_bytes);

    Router::new()
        .route(
            &format!("{}/analyze", state.args.server.root_path),
            post(analyze_meal).layer(DefaultBodyLimit::max(body_limit)),
        )
        .route(
            &format!("{}/registros", state.args.server.root_path),
            get(get_records),
        )
        .route(
            &format!("{}/registros_tabla", state.args.server.root_path),
            get(get_table_rows),
        )
        .route(
            &format!("{}/export.csv", state.args.server.root_path),
            get(export_csv),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_limit_leaves_room_for_the_form() {
        assert_eq!(analyze_body_limit(1024), 1024 + FORM_OVERHEAD_BYTES);
    }

    #[test]
    fn test_body_limit_saturates() {
        assert_eq!(analyze_body_limit(usize::MAX), usize::MAX);
        assert_eq!(analyze_body_limit(usize::MAX - 1), usize::MAX);
    }
}
