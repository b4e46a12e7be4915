use crate::error::Result;
use crate::github::GitHubClient;
use crate::models::{SortOrder, Theme, Variant};
use crate::output;
use crate::render;
use crate::state::PortfolioState;
use crate::transform;
use std::path::PathBuf;
use tracing::info;

/// Everything one render pass needs besides the state it updates.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub username: String,
    pub variant: Variant,
    pub selection: SortOrder,
    pub theme: Theme,
    pub output_path: PathBuf,
}

/// One complete pass: fetch a snapshot, derive the view and stats, render
/// the page, write it out, then publish the snapshot into `state`.
///
/// Steps run in that order so any failure leaves both the state and the
/// previously written page untouched.
pub async fn run_cycle(
    client: &GitHubClient,
    config: &RenderConfig,
    state: &mut PortfolioState,
) -> Result<()> {
    let snapshot = client.load_snapshot(&config.username).await?;

    let view = transform::ordered_view(
        &snapshot.repositories,
        config.selection,
        config.variant.display_cap(),
    );
    let displayed = view.len();
    let stats = transform::aggregate(&snapshot.repositories);
    let page = render::render_page(
        &snapshot,
        &view,
        &stats,
        config.variant,
        config.selection,
        config.theme,
    );

    output::write_atomic(&config.output_path, &page)?;

    info!(
        account = %config.username,
        repositories = snapshot.repositories.len(),
        displayed,
        total_stars = stats.total_stars,
        output = %config.output_path.display(),
        "portfolio page refreshed"
    );

    state.publish(snapshot);
    Ok(())
}
