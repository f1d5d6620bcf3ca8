//! Blocking reqwest client for OpenAI-compatible chat endpoints.

use std::time::Duration;

use circuit_core::errors::NluError;
use serde::Deserialize;
use tracing::debug;

use super::{ChatCompletion, ChatRequest};

pub struct HttpChatClient {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
    timeout_secs: u64,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl HttpChatClient {
    /// Build a client for `{base_url}/chat/completions` with a per-request timeout.
    pub fn new(base_url: &str, api_key: impl Into<String>, timeout_secs: u64) -> Result<Self, NluError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| NluError::Transport {
                reason: format!("client build failed: {e}"),
            })?;
        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            api_key: api_key.into(),
            timeout_secs,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ChatCompletion for HttpChatClient {
    fn complete(&self, request: &ChatRequest) -> Result<String, NluError> {
        debug!(model = %request.model, endpoint = %self.endpoint, "sending chat completion");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    NluError::Timeout {
                        secs: self.timeout_secs,
                    }
                } else {
                    NluError::Transport {
                        reason: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(NluError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json().map_err(|e| NluError::MalformedResponse {
            reason: format!("chat response body: {e}"),
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or_else(|| NluError::MissingField {
                field: "choices[0].message.content".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let client = HttpChatClient::new("https://api.example.com/", "k", 5).unwrap();
        assert_eq!(client.endpoint(), "https://api.example.com/chat/completions");
    }

    #[test]
    fn unreachable_host_is_transport_error() {
        let client = HttpChatClient::new("http://127.0.0.1:9", "k", 2).unwrap();
        let request = ChatRequest {
            model: "m".into(),
            messages: vec![],
            temperature: 0.1,
            max_tokens: 10,
        };
        let err = client.complete(&request).unwrap_err();
        assert!(matches!(
            err,
            NluError::Transport { .. } | NluError::Timeout { .. }
        ));
    }
}
