use crate::AppState;
use crate::error::{ApiError, GenerationError};
use crate::openai::ModelService;
use crate::{profile, prompts};
use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::Value;
use shared::models::{CharacterProfile, CharacterRequest};

pub async fn create_character(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CharacterProfile>, ApiError> {
    let request = parse_character_request(payload)?;
    tracing::info!(
        "Generating character (tone: {}, gender: {}, style: {})",
        request.tone,
        request.gender,
        request.style
    );

    let profile = generate_profile(state.models.as_ref(), &request)
        .await
        .map_err(|e| {
            tracing::error!("Failed to generate character: {}", e);
            ApiError::Generation(e)
        })?;

    tracing::info!("Generated character {}", profile.name);
    Ok(Json(profile))
}

/// Every field must be present, a string, and not blank.
fn parse_character_request(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<CharacterRequest, ApiError> {
    let Json(body) = payload.map_err(|e| {
        tracing::warn!("Rejected character request body: {}", e);
        ApiError::MissingFields
    })?;

    let field = |key: &str| -> Result<String, ApiError> {
        body.get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(str::to_owned)
            .ok_or(ApiError::MissingFields)
    };

    Ok(CharacterRequest {
        description: field("description")?,
        tone: field("tone")?,
        gender: field("gender")?,
        style: field("style")?,
    })
}

/// Text first, then the image built from its output. No partial result.
pub async fn generate_profile(
    models: &dyn ModelService,
    request: &CharacterRequest,
) -> Result<CharacterProfile, GenerationError> {
    let prompt = prompts::character_prompt(request);
    tracing::debug!("Character prompt is {} bytes", prompt.len());

    let raw = models
        .complete_json(prompts::CREATIVE_ASSISTANT, &prompt)
        .await?;
    let fields = profile::parse_generated_fields(&raw)?;

    let image_prompt = prompts::image_prompt(&fields.enhanced_description, &request.style);
    let image_url = models
        .generate_image(&image_prompt)
        .await?
        .ok_or(GenerationError::MissingImage)?;

    let persona_prompt =
        prompts::persona_prompt(&fields.enhanced_description, &request.tone, &request.gender);

    Ok(CharacterProfile {
        name: fields.name,
        enhanced_description: fields.enhanced_description,
        image_url,
        persona_prompt,
        greeting: fields.greeting,
    })
}
