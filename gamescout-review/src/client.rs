use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ReviewError;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub const DEFAULT_MODEL: &str = "gpt-4.1";
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 400;

/// Something that answers a system instruction plus a user prompt with text.
pub trait ChatBackend {
    fn complete(&self, system: &str, user: &str) -> Result<String, ReviewError>;
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    response_format: ResponseFormat,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Blocking client for an OpenAI-compatible chat completions endpoint.
pub struct ChatClient {
    http: reqwest::blocking::Client,
    api_key: String,
    model: String,
    url: String,
}

impl ChatClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, ReviewError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            url: CHAT_COMPLETIONS_URL.to_string(),
        })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn request<'a>(&'a self, system: &'a str, user: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object",
            },
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }
}

impl ChatBackend for ChatClient {
    fn complete(&self, system: &str, user: &str) -> Result<String, ReviewError> {
        let resp = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&self.request(system, user))
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(ReviewError::Status {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let text = resp.text()?;
        extract_content(&text)
    }
}

/// Pull the first choice's message text out of a chat completions body.
fn extract_content(body: &str) -> Result<String, ReviewError> {
    let response: ChatResponse = serde_json::from_str(body)?;
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .filter(|c| !c.trim().is_empty())
        .ok_or(ReviewError::EmptyResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_shape() {
        let client = ChatClient::new("k").unwrap().with_model("test-model");
        let body = serde_json::to_value(client.request("sys", "usr")).unwrap();
        assert_eq!(body["model"], "test-model");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "sys");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "usr");
        assert_eq!(body["response_format"]["type"], "json_object");
        assert_eq!(body["max_tokens"], 400);
    }

    #[test]
    fn extracts_first_choice() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"{\"review\":\"ok\"}"}}]}"#;
        assert_eq!(extract_content(body).unwrap(), r#"{"review":"ok"}"#);
    }

    #[test]
    fn no_choices_is_empty_response() {
        assert!(matches!(
            extract_content(r#"{"choices":[]}"#),
            Err(ReviewError::EmptyResponse)
        ));
        assert!(matches!(
            extract_content(r#"{"choices":[{"message":{"content":null}}]}"#),
            Err(ReviewError::EmptyResponse)
        ));
    }

    #[test]
    fn garbage_body_is_json_error() {
        assert!(matches!(
            extract_content("<html>"),
            Err(ReviewError::Json(_))
        ));
    }
}
