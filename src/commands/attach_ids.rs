//! `attach-ids` command implementation

use std::path::Path;

use tracing::info;

use super::{load_years, write_output};
use crate::{cfbd::endpoints::Dataset, cli::YearSelection, Config, Loader, Result};

/// Handle the attach-ids command
pub async fn handle_attach_ids(
    config: &Config,
    years: YearSelection,
    refresh: bool,
    output: Option<&Path>,
) -> Result<()> {
    let loader = Loader::new(config)?;

    let transfers = load_years(&loader, Dataset::TransferPortal, years, !refresh).await?;
    info!("Searching player IDs for {} transfer entries", transfers.len());

    let enriched = loader.attach_player_ids(&transfers).await?;
    write_output(&enriched, output)
}
