use axum::{
    extract::State,
    routing::{get, post},
    Router,
    Json,
    http::StatusCode,
};
use serde_json::{json, Value};
use tower_http::services::ServeDir;
use tracing::error;

use crate::languages;
use crate::state::AppState;
use crate::translate::{handler, TranslateError, TranslateRequest};

pub fn create_routes(state: AppState) -> Router<AppState> {
    let static_dir = state.config.system_config.static_dir.clone();

    Router::new()
        // Health check
        .route("/api/health", get(health_check))

        // REST API routes
        .route("/api/languages", get(get_languages))
        .route("/api/translate", post(translate))

        // Form page and assets
        .fallback_service(ServeDir::new(static_dir))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok"
    }))
}

async fn get_languages(State(state): State<AppState>) -> Json<Value> {
    let (source_options, target_options) = languages::language_options();
    let translator_config = &state.config.translator_config;

    Json(json!({
        "source": source_options,
        "target": target_options,
        "default_source": translator_config.default_source,
        "default_target": translator_config.default_target,
    }))
}

async fn translate(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match handler::handle(&request, state.translator.as_ref()).await {
        Ok(translated) => Ok(Json(json!({
            "translated_text": translated
        }))),
        Err(err) => {
            let status = match err {
                TranslateError::InvalidTargetLanguage
                | TranslateError::UnsupportedLanguage(_) => StatusCode::UNPROCESSABLE_ENTITY,
                TranslateError::Service(_) => {
                    error!("Translation failed: {}", err);
                    StatusCode::BAD_GATEWAY
                }
            };
            Err((status, Json(json!({"error": err.to_string()}))))
        }
    }
}
