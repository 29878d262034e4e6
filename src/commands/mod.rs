//! Command implementations for the college football data CLI

pub mod attach_ids;
pub mod get;

use std::{fs, io, path::Path};

use crate::{cfbd::endpoints::Dataset, cli::YearSelection, CfbdError, Loader, Result, Table};

/// Load a yearly dataset for one season or an inclusive range.
pub async fn load_years(
    loader: &Loader,
    dataset: Dataset,
    years: YearSelection,
    use_cache: bool,
) -> Result<Table> {
    match years {
        YearSelection::Single(season) => loader.fetch(dataset, season, use_cache).await,
        YearSelection::Range(start, end) => {
            loader.fetch_range(dataset, start, end, use_cache).await
        }
        YearSelection::Unspecified => Err(CfbdError::MissingYear {
            dataset: dataset.label(),
        }),
    }
}

/// Write a table as CSV to `output`, or to stdout when `None`.
pub fn write_output(table: &Table, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            table.write_csv(fs::File::create(path)?)?;
        }
        None => table.write_csv(io::stdout().lock())?,
    }
    Ok(())
}
