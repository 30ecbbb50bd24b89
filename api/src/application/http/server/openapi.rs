use crate::application::http::{
    health::HealthApiDoc, meal_log::router::MealLogApiDoc, views::router::ViewsApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "mealscore API",
        description = "Meal photo logging with a traffic-light score against the patient's lab baseline"
    ),
    tags(
        (name = "meal-log", description = "Analysis and the session log"),
        (name = "views", description = "HTML pages"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

/// Full document with every route group merged in, paths relative to the root path.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.merge(MealLogApiDoc::openapi());
    openapi.merge(ViewsApiDoc::openapi());
    openapi.merge(HealthApiDoc::openapi());
    openapi
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let openapi = api_doc();
        for path in [
            "/analyze",
            "/registros",
            "/registros_tabla",
            "/export.csv",
            "/",
            "/summary",
            "/tabla",
            "/health",
        ] {
            assert!(openapi.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
