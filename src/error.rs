use std::fmt;

/// Error type for every probe failure
/// Implements Clone so reports can be rendered more than once
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Credential environment variable is unset or empty
    MissingCredential(String)
  , /// Transport error (DNS, connect, TLS, body read)
    HttpError(String)
  , /// Request exceeded the client timeout
    Timeout
  , /// Provider answered with a non-2xx status
    ApiError
    {   status: u16
      , message: String
      , body: String
    }
  , /// Failed to parse API response
    ParseError(String)
  , /// No choices in API response
    NoChoicesInResponse
  , /// Invalid configuration (bad header value, bad base url)
    InvalidConfiguration(String)
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error
{   /// True for failures detected before any network activity
    pub fn is_precondition(&self) -> bool
    {   matches!(self, Error::MissingCredential(_))
    }
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::MissingCredential(var) => {
              write!(f,
                "{} environment variable is required",
                var
              )
            }
          , Error::HttpError(msg) => {
              write!(f, "HTTP error: {}", msg)
            }
          , Error::Timeout => {
              write!(f, "Request timed out")
            }
          , Error::ApiError { status, message, .. } => {
              write!(f, "API error ({}): {}", status, message)
            }
          , Error::ParseError(msg) => {
              write!(f, "Parse error: {}", msg)
            }
          , Error::NoChoicesInResponse => {
              write!(f, "API response contained no choices")
            }
          , Error::InvalidConfiguration(msg) => {
              write!(f, "Invalid configuration: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error
{   fn from(e: reqwest::Error) -> Self
    {   if e.is_timeout()
        {   Error::Timeout
        } else if e.is_decode()
        {   Error::ParseError(e.to_string())
        } else
        {   Error::HttpError(e.to_string())
        }
    }
}

impl From<serde_json::Error> for Error
{   fn from(e: serde_json::Error) -> Self
    {   Error::ParseError(e.to_string())
    }
}
