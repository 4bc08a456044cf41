use serde::{Deserialize, Serialize};
use log::{debug, trace};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use std::time::Duration;

use crate::config::{Credential, ProbeConfig};
use crate::error::{Error, Result};

// ===== Message Types =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: String
  , pub content: String
}

impl ChatMessage
{   pub fn system(content: impl Into<String>) -> Self
    {   ChatMessage
        {   role: "system".to_string()
          , content: content.into()
        }
    }

    pub fn user(content: impl Into<String>) -> Self
    {   ChatMessage
        {   role: "user".to_string()
          , content: content.into()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest
{   pub model: String
  , pub messages: Vec<ChatMessage>
  , pub max_tokens: usize
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse
{   pub model: String
  , pub choices: Vec<Choice>
  , #[serde(default)]
    pub usage: Option<Usage>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice
{   pub message: ResponseMessage
  , #[serde(default)]
    pub finish_reason: Option<String>
}

/// Assistant message; `content` is null for refusals and tool calls
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage
{   #[serde(default)]
    pub role: Option<String>
  , #[serde(default)]
    pub content: Option<String>
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Usage
{   #[serde(default)]
    pub prompt_tokens: u64
  , #[serde(default)]
    pub completion_tokens: u64
  , #[serde(default)]
    pub total_tokens: u64
}

// ===== fal.ai Client =====

/// OpenAI-compatible client for the fal.ai OpenRouter route.
///
/// fal.ai rejects `Authorization: Bearer`, so the key travels as
/// `Authorization: Key <credential>` in the default headers and the
/// client never sets a bearer token.
pub struct FalClient
{   http_client: reqwest::Client
  , endpoint: String
}

impl FalClient
{   pub fn new(config: &ProbeConfig, credential: &Credential)
      -> Result<Self>
    {   debug!("Creating FalClient for {}", config.base_url);
        let headers = default_headers(config, credential)?;
        let http_client = reqwest::Client::builder()
          .default_headers(headers)
          .timeout(Duration::from_secs(config.timeout_secs))
          .build()
          .map_err(|e| {
            Error::InvalidConfiguration(e.to_string())
          })?;

        Ok(FalClient
        {   http_client
          , endpoint: config.chat_completions_url()
        })
    }

    pub fn endpoint(&self) -> &str
    {   &self.endpoint
    }

    /// Send one chat-completion request. No retries.
    pub async fn chat_completion(
      &self
    , request: &ChatRequest
    ) -> Result<ChatResponse>
    {   debug!("Sending chat completion for: {}", request.model);
        trace!("fal request: {:?}", request);

        let response = self.http_client
          .post(&self.endpoint)
          .json(request)
          .send()
          .await
          .map_err(|e| {
            debug!("HTTP error: {}", e);
            Error::from(e)
          })?;

        let status = response.status();
        trace!("fal response status: {}", status);

        let body = response.text().await.map_err(|e| {
          debug!("Failed to read body: {}", e);
          Error::from(e)
        })?;

        if !status.is_success()
        {   debug!("fal API error {}: {}", status, body);
            return Err(Error::ApiError
            {   status: status.as_u16()
              , message: error_message(&body)
                  .unwrap_or_else(|| status_reason(status))
              , body
            });
        }

        let chat_response: ChatResponse
          = serde_json::from_str(&body).map_err(|e| {
            debug!("Parse error: {}", e);
            Error::from(e)
          })?;

        if chat_response.choices.is_empty()
        {   debug!("No choices in response");
            return Err(Error::NoChoicesInResponse);
        }

        Ok(chat_response)
    }
}

/// Headers sent on every request
pub fn default_headers(
  config: &ProbeConfig
, credential: &Credential
) -> Result<HeaderMap>
{   let mut headers = HeaderMap::new();

    let mut auth = header_value(&credential.authorization_value())?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);

    if let Some(referer) = &config.referer
    {   headers.insert(
          HeaderName::from_static("http-referer"),
          header_value(referer)?
        );
    }
    if let Some(title) = &config.title
    {   headers.insert(
          HeaderName::from_static("x-title"),
          header_value(title)?
        );
    }
    Ok(headers)
}

fn header_value(value: &str) -> Result<HeaderValue>
{   HeaderValue::from_str(value).map_err(|e| {
      Error::InvalidConfiguration(format!("invalid header value: {}", e))
    })
}

/// Pull a readable message out of an error body.
/// OpenAI/OpenRouter use `{"error":{"message"}}`, fal.ai uses `{"detail"}`.
pub fn error_message(body: &str) -> Option<String>
{   let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let candidates = [
      value.pointer("/error/message")
    , value.get("error")
    , value.get("detail")
    , value.get("message")
    ];
    let message = candidates.into_iter()
      .flatten()
      .find_map(|v| match v
      {   serde_json::Value::String(s) => Some(s.clone())
        , serde_json::Value::Null => None
        , serde_json::Value::Object(_) => None
        , other => Some(other.to_string())
      });
    message
}

fn status_reason(status: reqwest::StatusCode) -> String
{   status.canonical_reason()
      .unwrap_or("Unknown error")
      .to_string()
}
