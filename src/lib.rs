//! fal-probe: checks that a chat completion makes it through
//! fal.ai > OpenRouter > openai/gpt-5.1.
//!
//! fal-probe/
//! ├── src/
//! │   ├── lib.rs          # Re-exports
//! │   ├── main.rs         # Binary: env lookup, logger, exit status
//! │   ├── error.rs        # Error type
//! │   ├── config.rs       # Endpoint, headers, fixed request literals
//! │   ├── client.rs       # Prober: precondition, one call, report
//! │   ├── request.rs      # Probe request and report values
//! │   ├── report.rs       # Text rendering
//! │   └── providers/
//! │       ├── mod.rs
//! │       └── fal.rs      # Wire types + `Key` auth HTTP client
//! └── tests/

pub mod error;
pub mod config;
pub mod providers;
pub mod request;
pub mod report;
pub mod client;

pub use client::{Outcome, Prober};
pub use config::{Credential, ProbeConfig};
pub use error::Error;
