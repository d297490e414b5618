use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use domain::chat::{Assistant, ChatRequest, ChatResponse, LegacyAnswer};
use tower_http::cors::CorsLayer;
use tracing::Instrument;
use ulid::Ulid;

use crate::error::ApiError;

pub const SERVICE_NAME: &str = "Pharma AI Assistant";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Clone)]
pub struct AppState {
    pub assistant: Assistant,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/chat", post(chat))
        .route("/ask", post(ask))
        .route("/medicines", get(list_medicines))
        .route("/medicines/search/:symptom", get(search_medicines))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// Health check
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": SERVICE_VERSION,
        "medicines_loaded": state.assistant.catalog().len(),
    }))
}

// Chat with the assistant
async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    answer(&state, &request).await.map(Json)
}

// Legacy chat, errors are folded into the answer
async fn ask(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<LegacyAnswer> {
    let reply = match answer(&state, &request).await {
        Ok(response) => response.into(),
        Err(e) => LegacyAnswer {
            answer: format!("Sorry, I encountered an error: {}", e),
        },
    };

    Json(reply)
}

// List medicines
async fn list_medicines(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = state.assistant.catalog();

    Json(serde_json::json!({
        "total": catalog.len(),
        "medicines": catalog,
    }))
}

// Search medicines by symptom
async fn search_medicines(
    Path(symptom): Path<String>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let results = state.assistant.catalog().search(&symptom);

    Json(serde_json::json!({
        "query": symptom,
        "count": results.len(),
        "medicines": results,
    }))
}

async fn answer(state: &AppState, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
    let span = tracing::info_span!("chat", request_id = %Ulid::new());

    async { state.assistant.chat(request).await.map_err(ApiError::from) }
        .instrument(span)
        .await
}
