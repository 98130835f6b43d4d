pub mod character;
pub mod chat;

pub use character::*;
pub use chat::*;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::openai::fake::ScriptedModels;
    use crate::{AppState, routes};
    use axum::{
        Router,
        body::{Body, Bytes},
        http::{Request, StatusCode, header},
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    pub async fn post(
        models: Arc<ScriptedModels>,
        uri: &str,
        body: impl Into<Body>,
    ) -> (StatusCode, Option<String>, Bytes) {
        let app = routes(Router::new(), AppState { models });
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, content_type, bytes)
    }

    pub async fn post_json(
        models: Arc<ScriptedModels>,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let (status, _, bytes) = post(models, uri, body.to_string()).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }
}
