//! `get` command implementation

use std::path::Path;

use tracing::info;

use super::{load_years, write_output};
use crate::{cfbd::endpoints::Dataset, cli::YearSelection, Config, Loader, Result};

/// Handle the get command
pub async fn handle_get(
    config: &Config,
    dataset: Dataset,
    years: YearSelection,
    refresh: bool,
    output: Option<&Path>,
) -> Result<()> {
    let loader = Loader::new(config)?;
    let use_cache = !refresh;

    let table = if dataset.is_yearly() {
        load_years(&loader, dataset, years, use_cache).await?
    } else {
        if years != YearSelection::Unspecified {
            info!("{} is not keyed by year; ignoring year arguments", dataset.label());
        }
        loader.team_talent(use_cache).await?
    };

    info!(
        "Loaded {} rows x {} columns of {}",
        table.len(),
        table.columns().len(),
        dataset.label()
    );
    write_output(&table, output)
}
