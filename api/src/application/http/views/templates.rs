//! Pages bundled into the binary and rendered with HTML auto-escaping.

use minijinja::{AutoEscape, Environment};
use serde::Serialize;

use crate::application::http::server::api_entities::api_error::ApiError;

pub const INDEX_TEMPLATE: &str = "index.html";
pub const SUMMARY_TEMPLATE: &str = "summary.html";
pub const TABLE_TEMPLATE: &str = "tabla.html";

/// Builds the template environment once at startup.
pub fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);

    env.add_template(
        INDEX_TEMPLATE,
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/index.html")),
    )?;
    env.add_template(
        SUMMARY_TEMPLATE,
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/summary.html")),
    )?;
    env.add_template(
        TABLE_TEMPLATE,
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/tabla.html")),
    )?;

    Ok(env)
}

pub fn render<S: Serialize>(
    env: &Environment<'_>,
    name: &str,
    context: S,
) -> Result<String, ApiError> {
    env.get_template(name)
        .and_then(|template| template.render(context))
        .map_err(|e| {
            tracing::error!("Failed to render {}: {}", name, e);
            ApiError::InternalServerError(format!("Failed to render {}", name))
        })
}
