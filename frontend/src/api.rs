use futures::StreamExt;
use gloo_net::http::{Request, Response};
use shared::models::*;
use shared::stream::{StreamDecoder, StreamEvent};
use web_sys::js_sys;

const API_BASE: &str = "/api";

async fn error_message(resp: &Response) -> String {
    match resp.json::<ErrorBody>().await {
        Ok(body) => {
            if let Some(details) = &body.details {
                tracing::error!("API error: {} ({})", body.error, details);
            }
            body.error
        }
        Err(_) => format!("HTTP error! status: {}", resp.status()),
    }
}

pub async fn generate_character(req: &CharacterRequest) -> Result<CharacterProfile, String> {
    let resp = Request::post(&format!("{}/character", API_BASE))
        .json(req)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !resp.ok() {
        return Err(error_message(&resp).await);
    }
    resp.json().await.map_err(|e| e.to_string())
}

/// Sends the history and feeds every reply fragment to `on_fragment` as it
/// arrives. Resolves once the stream is done, or with the first error.
pub async fn stream_chat(
    req: &ChatRequest,
    mut on_fragment: impl FnMut(String),
) -> Result<(), String> {
    let resp = Request::post(&format!("{}/chat", API_BASE))
        .json(req)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !resp.ok() {
        return Err(error_message(&resp).await);
    }

    let Some(body) = resp.body() else {
        return Err("Empty response body".to_string());
    };

    let mut stream = wasm_streams::ReadableStream::from_raw(body).into_stream();
    let mut decoder = StreamDecoder::new();

    while let Some(result) = stream.next().await {
        let chunk = result.map_err(|e| format!("Stream error: {:?}", e))?;
        let bytes = js_sys::Uint8Array::new(&chunk).to_vec();

        for event in decoder.push(&bytes) {
            match event {
                StreamEvent::Token(fragment) => on_fragment(fragment),
                StreamEvent::Error(message) => return Err(message),
                StreamEvent::Done => return Ok(()),
            }
        }
    }

    // Connection closed without a terminator
    Err("Stream ended unexpectedly".to_string())
}
