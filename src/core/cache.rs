//! CSV cache for fetched datasets.
//!
//! One file per dataset (and year, where the dataset is keyed by year). A file
//! that exists is returned as-is; nothing here checks freshness or deletes.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{cfbd::endpoints::Dataset, core::table::Table, Result, Season};

/// Path: ~/.cache/cfb-data/raw
pub fn default_raw_dir() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("cfb-data").join("raw")
}

/// Directory of cached dataset tables.
#[derive(Debug, Clone)]
pub struct TableCache {
    dir: PathBuf,
}

impl TableCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Cache file for a dataset. The season is ignored for datasets that are
    /// not keyed by year.
    pub fn path_for(&self, dataset: Dataset, season: Option<Season>) -> PathBuf {
        self.dir.join(dataset.cache_file_name(season))
    }

    /// Read a cached table; `Ok(None)` when no file exists.
    pub fn read(&self, path: &Path) -> Result<Option<Table>> {
        let file = match fs::File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(Table::read_csv(file)?))
    }

    /// Write a table, creating the cache directory if needed and replacing
    /// any previous file.
    pub fn write(&self, path: &Path, table: &Table) -> Result<()> {
        let mut buf = Vec::new();
        table.write_csv(&mut buf)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, buf)?;
        Ok(())
    }
}
