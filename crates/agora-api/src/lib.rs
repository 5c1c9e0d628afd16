//! # Agora API
//!
//! HTTP gateway for the debate pipeline.
//!
//! Features:
//! - Axum-based web server
//! - `POST /debate` — `{topic}` in, `{dialogue}` out
//! - `GET /health` — liveness probe
//! - `GET /` — embedded companion page
//! - tower-http middleware (trace, CORS, timeout)
//! - Graceful shutdown

pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use server::{init_tracing, AgoraServer, ServerConfig};
pub use state::AppState;
