//! Configuration for the probe: endpoint, attribution headers and the
//! fixed request literals

use std::fmt;
use log::debug;

/// Environment variable holding the fal.ai key
pub const CREDENTIAL_ENV_VAR: &str = "FAL_KEY";

/// fal.ai route to OpenRouter's OpenAI-compatible API
pub const DEFAULT_BASE_URL: &str
  = "https://fal.run/openrouter/router/openai/v1";

pub const DEFAULT_MODEL: &str = "openai/gpt-5.1";

pub const DEFAULT_SYSTEM_PROMPT: &str
  = "You are a helpful assistant. Be very brief.";

pub const DEFAULT_USER_PROMPT: &str
  = "Say hello and confirm you are GPT-5.1 in exactly one sentence.";

pub const DEFAULT_MAX_TOKENS: usize = 500;

pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Optional OpenRouter attribution headers
pub const DEFAULT_REFERER: &str = "https://github.com/steipete/oracle";
pub const DEFAULT_TITLE: &str = "Oracle CLI fal.ai Test";

/// fal.ai API key. Debug output never shows the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential
{   /// Wrap a key; empty or whitespace-only keys count as absent
    pub fn new(key: impl Into<String>) -> Option<Self>
    {   let key = key.into();
        if key.trim().is_empty()
        {   None
        } else
        {   Some(Credential(key))
        }
    }

    /// Read the key from the process environment
    pub fn from_env() -> Option<Self>
    {   Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the key through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where F: FnOnce(&str) -> Option<String>
    {   let found = lookup(CREDENTIAL_ENV_VAR).and_then(Credential::new);
        debug!(
          "{} {}",
          CREDENTIAL_ENV_VAR,
          if found.is_some() { "present" } else { "missing" }
        );
        found
    }

    /// Value for the `Authorization` header: `Key <credential>`
    pub fn authorization_value(&self) -> String
    {   format!("Key {}", self.0)
    }

    pub fn expose(&self) -> &str
    {   &self.0
    }
}

impl fmt::Debug for Credential
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   f.write_str("Credential(<redacted>)")
    }
}

/// Probe configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeConfig
{   /// API base URL, without the `/chat/completions` suffix
    pub base_url: String
  , /// Model requested from the router
    pub model: String
  , pub system_prompt: String
  , pub user_prompt: String
  , /// Upper bound on generated tokens
    pub max_tokens: usize
  , /// Request timeout in seconds
    pub timeout_secs: u64
  , /// `HTTP-Referer` attribution header
    pub referer: Option<String>
  , /// `X-Title` attribution header
    pub title: Option<String>
}

impl Default for ProbeConfig
{   fn default() -> Self
    {   ProbeConfig
        {   base_url: DEFAULT_BASE_URL.to_string()
          , model: DEFAULT_MODEL.to_string()
          , system_prompt: DEFAULT_SYSTEM_PROMPT.to_string()
          , user_prompt: DEFAULT_USER_PROMPT.to_string()
          , max_tokens: DEFAULT_MAX_TOKENS
          , timeout_secs: DEFAULT_TIMEOUT_SECS
          , referer: Some(DEFAULT_REFERER.to_string())
          , title: Some(DEFAULT_TITLE.to_string())
        }
    }
}

impl ProbeConfig
{   /// Point the probe at another endpoint (mock servers, staging)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self
    {   self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self
    {   self.timeout_secs = timeout_secs;
        self
    }

    /// Full URL of the chat-completions endpoint
    pub fn chat_completions_url(&self) -> String
    {   format!(
          "{}/chat/completions",
          self.base_url.trim_end_matches('/')
        )
    }
}
