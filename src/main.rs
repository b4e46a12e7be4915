mod cli;
mod error;
mod github;
mod models;
mod output;
mod pipeline;
mod prefs;
mod render;
mod scheduler;
mod state;
mod transform;

use clap::Parser;
use cli::Cli;
use colored::*;
use error::{PortfolioError, Result};
use github::GitHubClient;
use pipeline::RenderConfig;
use prefs::PreferenceStore;
use state::PortfolioState;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    println!("{}", "GitHub Portfolio".bold().green());
    println!("{}\n", "=".repeat(50).dimmed());

    // Resolve the persisted theme against the CLI flags. --theme sets it,
    // --toggle-theme flips whatever came before it.
    let store = PreferenceStore::new(&cli.prefs);
    let mut prefs = store.load();
    let loaded = prefs;
    if let Some(theme) = cli.theme {
        prefs.theme = theme;
    }
    if cli.toggle_theme {
        prefs.theme = prefs.theme.toggled();
    }
    if prefs != loaded {
        store.save(prefs)?;
    }

    // The chosen ordering has to be one the preset actually offers.
    if !cli.variant.offers(cli.sort) {
        let offered = cli
            .variant
            .sort_orders()
            .iter()
            .map(|o| o.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(PortfolioError::InvalidSelection(format!(
            "sort '{}' is not offered by the {} preset (available: {})",
            cli.sort, cli.variant, offered
        )));
    }

    let client = GitHubClient::new(&cli.api_base)?;
    let config = RenderConfig {
        username: cli.user.clone(),
        variant: cli.variant,
        selection: cli.sort,
        theme: prefs.theme,
        output_path: cli.output.clone(),
    };

    println!("👤 Account: {}", cli.user);
    println!(
        "🎨 Theme: {} | Preset: {} | Sort: {}",
        prefs.theme, cli.variant, cli.sort
    );
    println!("📄 Output: {}", cli.output.display());

    if cli.once {
        let mut state = PortfolioState::new();
        pipeline::run_cycle(&client, &config, &mut state).await?;
        println!("\n✅ Portfolio page written to {}", cli.output.display());
        return Ok(());
    }

    println!("🔄 Refreshing every {} seconds", cli.interval);
    println!("\nPress Ctrl+C to stop\n");

    let refresh = scheduler::run_refresh_loop(
        Duration::from_secs(cli.interval),
        PortfolioState::new(),
        move |mut state| {
            let client = client.clone();
            let config = config.clone();
            async move {
                let outcome = pipeline::run_cycle(&client, &config, &mut state).await;
                (state, outcome)
            }
        },
    );

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            println!("\n🛑 Shutting down");
        }
        _ = refresh => {}
    }

    println!("✅ Stopped");
    Ok(())
}
