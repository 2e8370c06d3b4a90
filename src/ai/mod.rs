//! AI palette assistant
//!
//! Sends one chat-completion request per prompt and turns the reply into
//! palette colors (see [`normalize`]).

pub mod normalize;

use crate::color::Hex;
use crate::config::AiConfig;
use crate::error::GenerationError;
use anyhow::Context;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Chat-completion client for palette prompts.
#[derive(Debug, Clone)]
pub struct AiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key_env: String,
    api_key: Option<String>,
}

impl AiClient {
    const USER_AGENT: &'static str = concat!("spectrum/", env!("CARGO_PKG_VERSION"));

    /// Client reading its key from the environment variable named in `cfg`.
    pub fn from_config(cfg: &AiConfig) -> anyhow::Result<Self> {
        let api_key = std::env::var(&cfg.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty());
        if api_key.is_none() {
            tracing::warn!(var = %cfg.api_key_env, "no API key set; AI prompts will fail");
        }
        Self::new(&cfg.base_url, &cfg.model, &cfg.api_key_env, api_key)
    }

    pub fn new(
        base_url: &str,
        model: &str,
        api_key_env: &str,
        api_key: Option<String>,
    ) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(Self::USER_AGENT)
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key_env: api_key_env.to_string(),
            api_key,
        })
    }

    /// Ask the model for `count` colors matching `prompt`.
    pub async fn generate_colors(
        &self,
        prompt: &str,
        count: usize,
    ) -> Result<Vec<Hex>, GenerationError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| GenerationError::MissingApiKey(self.api_key_env.clone()))?;

        let url = format!("{}/v1/chat/completions", self.base_url);
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system_prompt(count) },
                { "role": "user", "content": prompt }
            ],
            "response_format": { "type": "json_object" }
        });

        tracing::info!(model = %self.model, count, "requesting AI palette");
        let res = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;
        let status = res.status();
        let text = res.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|b| b.error.message)
                .unwrap_or_else(|_| status.canonical_reason().unwrap_or("API Error").into());
            tracing::warn!(status = status.as_u16(), %message, "AI endpoint rejected request");
            return Err(GenerationError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse =
            serde_json::from_str(&text).map_err(|e| GenerationError::Malformed(e.to_string()))?;
        let content = parsed
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .ok_or_else(|| GenerationError::Malformed("reply has no message content".into()))?;

        normalize::parse_colors(content)
    }
}

/// Instruction sent ahead of the user's description.
pub fn system_prompt(count: usize) -> String {
    let example = serde_json::to_string(&vec!["#000000"; count]).unwrap_or_default();
    format!(
        "You are a professional color theorist. Generate a highly aesthetic, harmonious, \
         and premium color palette based on the user's description. Ensure the colors \
         complement each other perfectly.\n\
         Return ONLY a JSON array of {count} hex codes.\n\
         Example: {example}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chat_body(content: &str) -> String {
        json!({
            "choices": [{ "message": { "role": "assistant", "content": content } }]
        })
        .to_string()
    }

    #[test]
    fn system_prompt_names_the_count() {
        let p = system_prompt(3);
        assert!(p.contains("JSON array of 3 hex codes"));
        assert!(p.contains(r##"["#000000","#000000","#000000"]"##));
    }

    #[tokio::test]
    async fn parses_colors_from_chat_reply() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_header("authorization", "Bearer secret")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(chat_body(r#"{"colors": ["FF0000","00FF00"]}"#))
            .create_async()
            .await;

        let client = AiClient::new(&server.url(), "m", "TEST_KEY", Some("secret".into())).unwrap();
        let colors = client.generate_colors("sunset", 2).await.unwrap();
        assert_eq!(colors, vec![Hex::new(255, 0, 0), Hex::new(0, 255, 0)]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_carries_api_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/chat/completions")
            .with_status(401)
            .with_body(r#"{"error": {"message": "Incorrect API key provided"}}"#)
            .create_async()
            .await;

        let client = AiClient::new(&server.url(), "m", "TEST_KEY", Some("k".into())).unwrap();
        match client.generate_colors("forest", 5).await {
            Err(GenerationError::Status { status, message }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "Incorrect API key provided");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_error_body_uses_reason_phrase() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/chat/completions")
            .with_status(503)
            .with_body("upstream down")
            .create_async()
            .await;

        let client = AiClient::new(&server.url(), "m", "TEST_KEY", Some("k".into())).unwrap();
        match client.generate_colors("forest", 5).await {
            Err(GenerationError::Status { status, message }) => {
                assert_eq!(status, 503);
                assert_eq!(message, "Service Unavailable");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unusable_reply_is_reported() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_body(chat_body(r#"{"mood": "calm", "notes": "none"}"#))
            .create_async()
            .await;

        let client = AiClient::new(&server.url(), "m", "TEST_KEY", Some("k".into())).unwrap();
        assert!(matches!(
            client.generate_colors("calm", 5).await,
            Err(GenerationError::Unusable(_))
        ));
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        let client = AiClient::new("http://127.0.0.1:9", "m", "SPECTRUM_NO_KEY", None).unwrap();
        match client.generate_colors("x", 5).await {
            Err(GenerationError::MissingApiKey(var)) => assert_eq!(var, "SPECTRUM_NO_KEY"),
            other => panic!("expected missing key, got {other:?}"),
        }
    }
}
