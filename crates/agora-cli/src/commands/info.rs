//! `agora info` - version and provider configuration

use anyhow::Result;
use colored::Colorize;

use agora_debate::DebateConfig;

fn key_status(var: &str) -> colored::ColoredString {
    if std::env::var(var).is_ok() {
        "configured".green()
    } else {
        "not set".yellow()
    }
}

pub fn run() -> Result<()> {
    let config = DebateConfig::from_env();

    println!("{} {}", "Agora".bold(), env!("CARGO_PKG_VERSION"));
    println!();
    println!("{}", "Providers".bold());
    println!("  GROQ_API_KEY    {}", key_status("GROQ_API_KEY"));
    println!(
        "  GROQ_MODEL      {}",
        std::env::var("GROQ_MODEL").unwrap_or_else(|_| "openai/gpt-oss-20b (default)".to_string())
    );
    println!("  TAVILY_API_KEY  {}", key_status("TAVILY_API_KEY"));
    println!();
    println!("{}", "Debate".bold());
    println!("  rounds          {}", config.rounds);
    println!("  search results  {}", config.search_results);
    println!("  prompt sources  {}", config.prompt_sources);
    println!("  default topic   {}", config.default_topic);

    Ok(())
}
