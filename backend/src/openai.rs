use crate::config::ServiceConfig;
use async_openai::{
    Client,
    config::OpenAIConfig,
    error::OpenAIError,
    types::chat::{
        ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestAssistantMessageContent,
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs, ResponseFormat,
    },
    types::images::{CreateImageRequestArgs, Image, ImageModel, ImageQuality, ImageSize},
};
use async_trait::async_trait;
use futures::{StreamExt, stream::BoxStream};
use shared::models::{ChatTurn, Role};
use thiserror::Error;

const PROFILE_TEMPERATURE: f32 = 0.8;
const PROFILE_MAX_TOKENS: u32 = 450;

/// Reply fragments in arrival order
pub type ReplyStream = BoxStream<'static, Result<String, ModelError>>;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Model service error: {0}")]
    Api(#[from] OpenAIError),
}

/// The hosted model service the endpoints delegate to.
#[async_trait]
pub trait ModelService: Send + Sync {
    /// One completion constrained to a JSON object. Returns the raw text of the
    /// first choice, empty if the model sent none.
    async fn complete_json(&self, system: &str, prompt: &str) -> Result<String, ModelError>;
    /// One square image; `None` when the service answered without a URL.
    async fn generate_image(&self, prompt: &str) -> Result<Option<String>, ModelError>;
    async fn stream_chat(
        &self,
        system: &str,
        turns: &[ChatTurn],
    ) -> Result<ReplyStream, ModelError>;
}

pub struct OpenAiService {
    client: Client<OpenAIConfig>,
    text_model: String,
    image_model: String,
    chat_model: String,
}

impl OpenAiService {
    pub fn new(config: &ServiceConfig) -> Self {
        let client_config = OpenAIConfig::new()
            .with_api_key(config.api_key.clone())
            .with_api_base(config.api_base.clone());

        Self {
            client: Client::with_config(client_config),
            text_model: config.text_model.clone(),
            image_model: config.image_model.clone(),
            chat_model: config.chat_model.clone(),
        }
    }
}

fn system_message(content: &str) -> Result<ChatCompletionRequestMessage, OpenAIError> {
    let msg = ChatCompletionRequestSystemMessageArgs::default()
        .content(content.to_string())
        .build()?;
    Ok(ChatCompletionRequestMessage::System(msg))
}

/// System prompt first, then the history as given
fn build_conversation(
    system: &str,
    turns: &[ChatTurn],
) -> Result<Vec<ChatCompletionRequestMessage>, OpenAIError> {
    let mut conversation = Vec::with_capacity(turns.len() + 1);
    conversation.push(system_message(system)?);

    for turn in turns {
        let content = turn.content.clone();
        let req_msg = match turn.role {
            Role::User => {
                let user_msg = ChatCompletionRequestUserMessageArgs::default()
                    .content(content)
                    .build()?;
                ChatCompletionRequestMessage::User(user_msg)
            }
            Role::Assistant => {
                let assistant_msg = ChatCompletionRequestAssistantMessageArgs::default()
                    .content(ChatCompletionRequestAssistantMessageContent::Text(content))
                    .build()?;
                ChatCompletionRequestMessage::Assistant(assistant_msg)
            }
        };
        conversation.push(req_msg);
    }

    Ok(conversation)
}

#[async_trait]
impl ModelService for OpenAiService {
    async fn complete_json(&self, system: &str, prompt: &str) -> Result<String, ModelError> {
        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt.to_string())
            .build()?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(self.text_model.clone())
            .messages(vec![
                system_message(system)?,
                ChatCompletionRequestMessage::User(user_msg),
            ])
            .max_tokens(PROFILE_MAX_TOKENS)
            .temperature(PROFILE_TEMPERATURE)
            .response_format(ResponseFormat::JsonObject)
            .build()?;

        let response = self.client.chat().create(request).await?;
        Ok(response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default())
    }

    async fn generate_image(&self, prompt: &str) -> Result<Option<String>, ModelError> {
        let request = CreateImageRequestArgs::default()
            .model(ImageModel::Other(self.image_model.clone()))
            .prompt(prompt.to_string())
            .n(1)
            .size(ImageSize::S1024x1024)
            .quality(ImageQuality::Standard)
            .build()?;

        let response = self.client.images().generate(request).await?;
        Ok(response.data.iter().find_map(|image| match &**image {
            Image::Url { url, .. } if !url.is_empty() => Some(url.clone()),
            _ => None,
        }))
    }

    async fn stream_chat(
        &self,
        system: &str,
        turns: &[ChatTurn],
    ) -> Result<ReplyStream, ModelError> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(self.chat_model.clone())
            .messages(build_conversation(system, turns)?)
            .build()?;

        let stream = self.client.chat().create_stream(request).await?;
        Ok(stream
            .filter_map(|result| async move {
                match result {
                    Ok(response) => response
                        .choices
                        .into_iter()
                        .next()
                        .and_then(|choice| choice.delta.content)
                        .filter(|content| !content.is_empty())
                        .map(Ok),
                    Err(e) => Some(Err(ModelError::from(e))),
                }
            })
            .boxed())
    }
}

#[cfg(test)]
pub mod fake {
    //! Scripted stand-in for the hosted service.

    use super::*;
    use std::sync::Mutex;

    pub fn failure(message: &str) -> ModelError {
        ModelError::Api(OpenAIError::InvalidArgument(message.to_string()))
    }

    pub struct ScriptedModels {
        pub completion: Result<String, String>,
        pub image: Result<Option<String>, String>,
        pub stream_open: Result<(), String>,
        pub reply: Vec<Result<String, String>>,
        pub seen_system: Mutex<Vec<String>>,
        pub seen_turns: Mutex<Vec<ChatTurn>>,
        pub image_prompts: Mutex<Vec<String>>,
    }

    const PROFILE_JSON: &str =
        r#"{"name":"Eleanor","enhancedDescription":"A botanist.","greeting":"Tea?"}"#;

    impl Default for ScriptedModels {
        fn default() -> Self {
            Self {
                completion: Ok(PROFILE_JSON.to_string()),
                image: Ok(Some("https://img.example/eleanor.png".to_string())),
                stream_open: Ok(()),
                reply: vec![Ok("Hello".to_string()), Ok(" there".to_string())],
                seen_system: Mutex::new(Vec::new()),
                seen_turns: Mutex::new(Vec::new()),
                image_prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ModelService for ScriptedModels {
        async fn complete_json(&self, system: &str, _prompt: &str) -> Result<String, ModelError> {
            self.seen_system.lock().unwrap().push(system.to_string());
            self.completion.clone().map_err(|e| failure(&e))
        }

        async fn generate_image(&self, prompt: &str) -> Result<Option<String>, ModelError> {
            self.image_prompts.lock().unwrap().push(prompt.to_string());
            self.image.clone().map_err(|e| failure(&e))
        }

        async fn stream_chat(
            &self,
            system: &str,
            turns: &[ChatTurn],
        ) -> Result<ReplyStream, ModelError> {
            self.seen_system.lock().unwrap().push(system.to_string());
            self.seen_turns.lock().unwrap().extend_from_slice(turns);
            self.stream_open.clone().map_err(|e| failure(&e))?;

            let items: Vec<Result<String, ModelError>> = self
                .reply
                .iter()
                .cloned()
                .map(|item| item.map_err(|e| failure(&e)))
                .collect();
            Ok(futures::stream::iter(items).boxed())
        }
    }
}
