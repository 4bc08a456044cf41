//! LLM provider implementations

pub mod fal;

// Re-export for convenience
pub use fal::FalClient;
