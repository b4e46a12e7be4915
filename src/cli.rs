use crate::github::DEFAULT_API_BASE;
use crate::models::{SortOrder, Theme, Variant};
use crate::prefs::DEFAULT_PREFS_PATH;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "github-portfolio")]
#[command(about = "GitHub Portfolio - Renders a personal portfolio page from a GitHub profile")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// GitHub account to render
    #[arg(long, env = "PORTFOLIO_USER")]
    pub user: String,

    /// GitHub API base URL
    #[arg(long, env = "PORTFOLIO_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Path the rendered HTML page is written to
    #[arg(long, env = "PORTFOLIO_OUTPUT", default_value = "dist/index.html")]
    pub output: PathBuf,

    /// Path of the preference file
    #[arg(long, env = "PORTFOLIO_PREFS", default_value = DEFAULT_PREFS_PATH)]
    pub prefs: PathBuf,

    /// Page preset: compact shows 6 repositories, extended shows 9
    #[arg(long, value_enum, env = "PORTFOLIO_VARIANT", default_value_t = Variant::Compact)]
    pub variant: Variant,

    /// Repository ordering applied before display
    #[arg(long, value_enum, env = "PORTFOLIO_SORT", default_value_t = SortOrder::Default)]
    pub sort: SortOrder,

    /// Set and persist the color theme before rendering
    #[arg(long, value_enum, env = "PORTFOLIO_THEME")]
    pub theme: Option<Theme>,

    /// Flip the persisted color theme before rendering
    #[arg(long, default_value_t = false)]
    pub toggle_theme: bool,

    /// Seconds between refreshes
    #[arg(
        long,
        env = "PORTFOLIO_INTERVAL_SECS",
        default_value_t = 300,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub interval: u64,

    /// Render once and exit instead of refreshing periodically
    #[arg(long, default_value_t = false)]
    pub once: bool,
}
