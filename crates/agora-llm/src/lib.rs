//! # Agora LLM
//!
//! LLM provider integrations for the Agora debate pipeline.
//!
//! ## Supported Backends
//!
//! | Provider | Type | Key Required |
//! |----------|------|--------------|
//! | Groq | API | `GROQ_API_KEY` |
//! | Mock | Testing | None |
//!
//! ## Quick Start
//!
//! ```rust
//! use agora_llm::{LlmProvider, MockProvider};
//!
//! #[tokio::main]
//! async fn main() {
//!     let llm = MockProvider::constant("Hello!");
//!     let response = llm.ask("Say hello").await.unwrap();
//!     assert_eq!(response, "Hello!");
//! }
//! ```
//!
//! ## With Groq
//!
//! ```rust,ignore
//! use agora_llm::{GroqProvider, RetryProvider};
//!
//! let api_key = std::env::var("GROQ_API_KEY").unwrap();
//! let llm = RetryProvider::wrap(GroqProvider::gpt_oss_20b(&api_key));
//!
//! let response = llm.ask("Name one Stoic philosopher").await.unwrap();
//! ```

pub mod groq;
pub mod mock;
pub mod provider;
pub mod retry;

pub use groq::GroqProvider;
pub use mock::MockProvider;
pub use provider::{LlmError, LlmProvider, LlmRequest, LlmResponse};
pub use retry::{RetryConfig, RetryProvider};
