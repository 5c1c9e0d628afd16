//! Agora Server - standalone entry point for the debate API
//!
//! A thin wrapper around `agora-api`: builds the providers from the
//! environment, assembles the pipeline, and runs the server.

use std::sync::Arc;

use anyhow::Result;

use agora_api::{AgoraServer, ServerConfig};
use agora_debate::{DebateConfig, DebatePipeline};
use agora_llm::{GroqProvider, LlmProvider, MockProvider, RetryProvider};
use agora_retrieval::{TavilyProvider, WikipediaProvider};

#[tokio::main]
async fn main() -> Result<()> {
    agora_api::init_tracing();

    tracing::info!("Starting Agora debate server...");

    // Platform compatibility: map a generic $PORT to AGORA_PORT
    if let Ok(port) = std::env::var("PORT") {
        if std::env::var("AGORA_PORT").is_err() {
            tracing::info!("Mapping PORT {} to AGORA_PORT", port);
            std::env::set_var("AGORA_PORT", port);
        }
    }

    let llm: Arc<dyn LlmProvider> = match std::env::var("GROQ_API_KEY") {
        Ok(key) => {
            let model = std::env::var("GROQ_MODEL")
                .unwrap_or_else(|_| "openai/gpt-oss-20b".to_string());
            tracing::info!(%model, "Initializing Groq provider with transport retries");
            Arc::new(RetryProvider::wrap(GroqProvider::new(&key, &model)))
        }
        Err(_) => {
            tracing::warn!("GROQ_API_KEY not found. Using Mock Provider.");
            Arc::new(MockProvider::smart())
        }
    };

    let pipeline = DebatePipeline::new(
        llm,
        Arc::new(TavilyProvider::from_env()),
        Arc::new(WikipediaProvider::new()),
        DebateConfig::from_env(),
    );

    let config = ServerConfig::from_env();
    let server = AgoraServer::new(config, Arc::new(pipeline));

    server.run().await.map_err(|e| {
        tracing::error!("Server error during execution: {}", e);
        anyhow::anyhow!(e)
    })?;

    Ok(())
}
