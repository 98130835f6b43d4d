use crate::AppState;
use crate::error::ApiError;
use crate::prompts::DEFAULT_PERSONA;
use axum::{
    Json,
    body::Body,
    extract::{State, rejection::JsonRejection},
    http::header,
    response::{IntoResponse, Response},
};
use futures::StreamExt;
use serde_json::Value;
use shared::models::{ChatRequest, ChatTurn};
use shared::stream::StreamEvent;
use std::io::Error;

pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let request = match parse_chat_request(payload) {
        Ok(request) => request,
        Err(e) => return e.into_response(),
    };

    let system_prompt = select_system_prompt(request.persona_prompt.as_deref()).to_string();
    let models = state.models.clone();
    tracing::info!("Opening chat stream over {} messages", request.messages.len());

    let body = Body::from_stream(async_stream::stream! {
        let mut stream = match models.stream_chat(&system_prompt, &request.messages).await {
            Ok(s) => s,
            Err(e) => {
                tracing::error!("Failed to open chat stream: {}", e);
                yield Ok::<String, Error>(StreamEvent::Error(e.to_string()).to_frame());
                return;
            }
        };

        while let Some(result) = stream.next().await {
            match result {
                Ok(fragment) => yield Ok(StreamEvent::Token(fragment).to_frame()),
                Err(e) => {
                    tracing::error!("Chat stream failed: {}", e);
                    yield Ok(StreamEvent::Error(e.to_string()).to_frame());
                    return;
                }
            }
        }

        yield Ok(StreamEvent::Done.to_frame());
    });

    (
        [
            (header::CONTENT_TYPE, "text/event-stream"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        body,
    )
        .into_response()
}

fn select_system_prompt(persona_prompt: Option<&str>) -> &str {
    match persona_prompt {
        Some(prompt) if !prompt.is_empty() => prompt,
        _ => DEFAULT_PERSONA,
    }
}

fn parse_chat_request(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<ChatRequest, ApiError> {
    let Json(body) = payload.map_err(|e| {
        tracing::warn!("Rejected chat request body: {}", e);
        ApiError::InvalidMessages
    })?;

    let items = match body.get("messages") {
        Some(Value::Array(items)) if !items.is_empty() => items,
        other => {
            tracing::warn!("Invalid messages format received: {:?}", other);
            return Err(ApiError::InvalidMessages);
        }
    };

    let messages = items
        .iter()
        .map(|item| serde_json::from_value::<ChatTurn>(item.clone()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            tracing::warn!("Invalid message in chat history: {}", e);
            ApiError::InvalidMessages
        })?;

    let persona_prompt = body
        .get("personaPrompt")
        .and_then(Value::as_str)
        .map(str::to_owned);

    Ok(ChatRequest {
        messages,
        persona_prompt,
    })
}
