//! The fixed probe request and what the probe reads back

use crate::config::ProbeConfig;
use crate::providers::fal::{ChatMessage, ChatRequest, ChatResponse, Usage};

/// Build the probe's chat request: system + user message, bounded output
pub fn probe_request(config: &ProbeConfig) -> ChatRequest
{   ChatRequest
    {   model: config.model.clone()
      , messages: vec![
          ChatMessage::system(config.system_prompt.as_str())
        , ChatMessage::user(config.user_prompt.as_str())
        ]
      , max_tokens: config.max_tokens
    }
}

/// The three things the probe reports from a successful response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport
{   /// Generated text of the first choice
    pub content: Option<String>
  , /// Model the router actually served
    pub model: String
  , pub usage: Option<Usage>
}

impl From<ChatResponse> for ProbeReport
{   fn from(response: ChatResponse) -> Self
    {   let content = response.choices
          .into_iter()
          .next()
          .and_then(|c| c.message.content);
        ProbeReport
        {   content
          , model: response.model
          , usage: response.usage
        }
    }
}
