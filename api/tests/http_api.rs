use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::{
    TestServer,
    multipart::{MultipartForm, Part},
};
use mealscore_api::{
    application::http::server::http_server::{router, state},
    args::{AppArgs, Args, LlmArgs, LogArgs, ServerArgs},
};
use mealscore_core::domain::common::LLMProvider;
use serde_json::Value;

const JPEG: &[u8] = &[0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10];

fn args(root_path: &str, max_image_bytes: usize) -> Args {
    Args {
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            port: 0,
            root_path: root_path.to_string(),
            allowed_origins: vec!["http://localhost:8080".to_string()],
            max_image_bytes,
        },
        llm: LlmArgs {
            provider: LLMProvider::OpenAI,
            openai_api_key: None,
            openai_model: "gpt-4o".to_string(),
            openai_base_url: "https://api.openai.com/v1".to_string(),
            gemini_api_key: None,
            gemini_model: "gemini-1.5-flash".to_string(),
            gemini_base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout_secs: 5,
        },
        app: AppArgs {
            timezone: chrono_tz::America::Santiago,
            baseline_ferritin: 10.5,
            baseline_vitamin_d: 25.4,
            baseline_homa_ir: 4.6,
            baseline_ldl: 97.0,
            baseline_hdl: 39.0,
            baseline_triglycerides: 193.0,
        },
        log: LogArgs {
            log_filter: "info".to_string(),
            log_json: false,
        },
    }
}

async fn server_with(args: Args) -> TestServer {
    let app_state = state(Arc::new(args)).await.unwrap();
    TestServer::new(router(app_state).unwrap()).unwrap()
}

async fn server() -> TestServer {
    server_with(args("", 10 * 1024 * 1024)).await
}

fn meal_form(tipo: &str, descripcion: &str) -> MultipartForm {
    MultipartForm::new()
        .add_text("tipo", tipo.to_string())
        .add_text("descripcion", descripcion.to_string())
        .add_part(
            "image",
            Part::bytes(JPEG.to_vec())
                .file_name("plato.jpg")
                .mime_type("image/jpeg"),
        )
}

#[tokio::test]
async fn test_analyze_without_image_is_rejected() {
    let server = server().await;

    let response = server
        .post("/analyze")
        .multipart(MultipartForm::new().add_text("tipo", "Cena"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>(), serde_json::json!({"error": "Falta imagen"}));

    let records = server.get("/registros").await.json::<Value>();
    assert_eq!(records["count"], 0);
}

#[tokio::test]
async fn test_analyze_without_api_key_tags_from_description() {
    let server = server().await;

    let response = server
        .post("/analyze")
        .multipart(meal_form("Almuerzo", "Salmón con ensalada"))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["ok"], true);
    assert_eq!(
        body["comentario"],
        "Sin clave de API del modelo de visión: etiquetado por texto (fallback)."
    );

    let record = &body["registro"];
    assert_eq!(record["tipo"], "Almuerzo");
    assert_eq!(record["descripcion"], "Salmón con ensalada");
    assert_eq!(record["color"], "🟢");
    assert_eq!(record["modelo"], "fallback");
    assert_eq!(record["etiquetas"], serde_json::json!(["fibra", "omega_3"]));
    assert_eq!(record["dia"].as_str().map(str::len), Some(2));
    assert_eq!(record["hora"].as_str().map(str::len), Some(5));
}

#[tokio::test]
async fn test_records_and_rows_grow_together() {
    let server = server().await;

    for (tipo, descripcion) in [("Once", "helado de chocolate"), ("Cena", "pollo con arroz")] {
        server
            .post("/analyze")
            .multipart(meal_form(tipo, descripcion))
            .await
            .assert_status_ok();
    }

    let records = server.get("/registros").await.json::<Value>();
    assert_eq!(records["count"], 2);
    assert_eq!(records["items"][0]["color"], "🔴");
    assert_eq!(records["items"][1]["color"], "🟡");
    assert_eq!(records["items"][1]["etiquetas"], serde_json::json!([]));

    let rows = server.get("/registros_tabla").await.json::<Value>();
    assert_eq!(rows["count"], 2);
    assert_eq!(rows["items"][0]["Tipo de comida"], "Once");
    assert_eq!(rows["items"][1]["Descripción"], "pollo con arroz");
    assert_eq!(rows["items"][1]["Color"], "🟡");

    let health = server.get("/health").await.json::<Value>();
    assert_eq!(health, serde_json::json!({"status": "ok", "records": 2}));
}

#[tokio::test]
async fn test_export_csv_is_an_attachment() {
    let server = server().await;
    server
        .post("/analyze")
        .multipart(meal_form("Cena", "vino, con queso"))
        .await
        .assert_status_ok();

    let response = server.get("/export.csv").await;

    response.assert_status_ok();
    assert_eq!(
        response.header("content-type").to_str().unwrap(),
        "text/csv; charset=utf-8"
    );
    assert_eq!(
        response.header("content-disposition").to_str().unwrap(),
        "attachment; filename=\"registros.csv\""
    );

    let text = response.text();
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("fecha_iso,dia,hora,tipo,descripcion,impacto,color,recomendacion,etiquetas,modelo")
    );
    let row = lines.next().unwrap();
    assert!(row.contains(",Cena,\"vino, con queso\","));
    assert!(row.contains("\"alcohol,azucares_simples\""));
    assert!(row.ends_with(",fallback"));
    assert_eq!(lines.next(), None);
}

#[tokio::test]
async fn test_empty_export_has_only_the_header() {
    let server = server().await;

    let text = server.get("/export.csv").await.text();

    assert_eq!(
        text.trim_end(),
        "fecha_iso,dia,hora,tipo,descripcion,impacto,color,recomendacion,etiquetas,modelo"
    );
}

#[tokio::test]
async fn test_table_page_escapes_user_text() {
    let server = server().await;
    server
        .post("/analyze")
        .multipart(meal_form("Cena", "<b>asado</b>"))
        .await
        .assert_status_ok();

    let response = server.get("/tabla").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("<th>Impacto según exámenes</th>"));
    assert!(html.contains("&lt;b&gt;asado"));
    assert!(!html.contains("<b>asado</b>"));
}

#[tokio::test]
async fn test_static_pages_are_served() {
    let server = server().await;

    let index = server.get("/").await;
    index.assert_status_ok();
    assert!(index.text().contains("Registrar comida"));

    let summary = server.get("/summary").await;
    summary.assert_status_ok();
    assert!(summary.text().contains("Resumen"));
}

#[tokio::test]
async fn test_oversized_image_is_rejected() {
    let server = server_with(args("", 4)).await;

    let response = server
        .post("/analyze")
        .multipart(meal_form("Cena", "pan"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(server.get("/health").await.json::<Value>()["records"], 0);
}

#[tokio::test]
async fn test_long_meal_type_is_rejected() {
    let server = server().await;

    let response = server
        .post("/analyze")
        .multipart(meal_form(&"x".repeat(65), "pan"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_routes_live_under_root_path() {
    let server = server_with(args("/comidas", 10 * 1024 * 1024)).await;

    server.get("/comidas/health").await.assert_status_ok();
    server
        .get("/comidas/registros")
        .await
        .assert_status_ok();

    let index = server.get("/comidas").await;
    index.assert_status_ok();
    assert!(index.text().contains("Registrar comida"));
    server.get("/comidas/").await.assert_status_ok();

    let missing = server.get("/health").expect_failure().await;
    missing.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_openapi_document_is_published() {
    let server = server().await;

    let doc = server.get("/api-docs/openapi.json").await.json::<Value>();

    assert!(doc["paths"]["/analyze"]["post"].is_object());
    assert!(doc["paths"]["/registros"]["get"].is_object());
}
