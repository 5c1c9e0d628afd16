//! Application State
//!
//! One pipeline serves every request; each request's session state lives
//! inside the pipeline call and dies with the response.

use std::sync::Arc;

use agora_debate::DebatePipeline;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pipeline: Arc<DebatePipeline>,
}

impl AppState {
    /// Create new application state
    pub fn new(pipeline: Arc<DebatePipeline>) -> Self {
        Self { pipeline }
    }

    /// Get the debate pipeline (cloned Arc for sharing)
    pub fn pipeline(&self) -> Arc<DebatePipeline> {
        self.pipeline.clone()
    }
}
