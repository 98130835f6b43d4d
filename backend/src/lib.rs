pub mod config;
mod error;
mod handlers;
mod openai;
mod profile;
mod prompts;

pub use crate::config::ServiceConfig;
pub use crate::error::{ApiError, GenerationError};
pub use crate::openai::{ModelError, ModelService, OpenAiService, ReplyStream};

use crate::handlers::{chat, create_character};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub models: Arc<dyn ModelService>,
}

pub fn init(router: Router<AppState>, config: ServiceConfig) -> Router<()> {
    tracing::info!(
        "Using model service at {} (text: {}, image: {}, chat: {})",
        config.api_base,
        config.text_model,
        config.image_model,
        config.chat_model
    );
    let state = AppState {
        models: Arc::new(OpenAiService::new(&config)),
    };
    routes(router, state)
}

pub fn routes(router: Router<AppState>, state: AppState) -> Router<()> {
    router
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/character", post(create_character))
        .route("/api/chat", post(chat))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
