//! `agora debate` - run a debate and print the transcript

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use agora_debate::{DebateConfig, DebatePipeline};
use agora_llm::{GroqProvider, LlmProvider, MockProvider, RetryProvider};
use agora_retrieval::{TavilyProvider, WikipediaProvider};

#[derive(Args)]
pub struct DebateArgs {
    /// The philosophical topic to debate
    pub topic: String,

    /// Rounds to run (each philosopher speaks once per round)
    #[arg(long)]
    pub rounds: Option<u32>,

    /// Groq model id (overrides GROQ_MODEL)
    #[arg(long)]
    pub model: Option<String>,
}

fn build_llm(model_override: Option<&str>) -> Arc<dyn LlmProvider> {
    match std::env::var("GROQ_API_KEY") {
        Ok(key) => {
            let model = model_override
                .map(str::to_string)
                .or_else(|| std::env::var("GROQ_MODEL").ok())
                .unwrap_or_else(|| "openai/gpt-oss-20b".to_string());
            Arc::new(RetryProvider::wrap(GroqProvider::new(&key, &model)))
        }
        Err(_) => {
            tracing::warn!("GROQ_API_KEY not set, using the mock provider");
            Arc::new(MockProvider::smart())
        }
    }
}

pub async fn run(args: DebateArgs) -> Result<()> {
    let mut config = DebateConfig::from_env();
    if let Some(rounds) = args.rounds {
        config.rounds = rounds;
    }

    let pipeline = DebatePipeline::new(
        build_llm(args.model.as_deref()),
        Arc::new(TavilyProvider::from_env()),
        Arc::new(WikipediaProvider::new()),
        config,
    );

    eprintln!("{}", "Philosophers are debating...".dimmed());
    let session = pipeline
        .run(&args.topic)
        .await
        .context("debate failed")?;

    if let Some(set) = &session.philosophers {
        println!(
            "{} {} {} {}",
            set.topic.bold(),
            "vs".dimmed(),
            set.opposing_topic.bold(),
            format!("({} rounds)", session.rounds_completed).dimmed()
        );
        println!();
    }

    for (i, turn) in session.history.iter().enumerate() {
        if i > 0 {
            println!("{}", "---".dimmed());
        }
        let speaker = if turn.speaker.trim().is_empty() {
            "Unknown"
        } else {
            &turn.speaker
        };
        println!("{}", format!("{speaker}:").cyan().bold());
        println!("{}", turn.argument);
        println!();
        println!("{}", "Question:".yellow());
        println!("{}", turn.question);
    }

    Ok(())
}
