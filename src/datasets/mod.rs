//! Dataset loading: fetch-or-cache per year and multi-year aggregation.
//!
//! Every fetch goes through [`Loader::fetch`]: a cached CSV is returned as-is
//! when caching is enabled, otherwise the API is called, the JSON flattened into
//! a [`Table`] and the table written to the cache before it is returned.

pub mod player_ids;

use tracing::{debug, warn};

use crate::{
    cfbd::{endpoints::Dataset, http::CfbdClient},
    core::{cache::TableCache, table::json_kind, table::Table},
    CfbdError, Config, Result, Season,
};


/// Column carrying the season in multi-year tables.
pub const YEAR_COLUMN: &str = "year";

/// Loads datasets through the CSV cache.
#[derive(Debug, Clone)]
pub struct Loader {
    client: CfbdClient,
    cache: TableCache,
}

impl Loader {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self::from_parts(
            CfbdClient::new(config)?,
            TableCache::new(config.raw_dir.clone()),
        ))
    }

    pub fn from_parts(client: CfbdClient, cache: TableCache) -> Self {
        Self { client, cache }
    }

    pub fn client(&self) -> &CfbdClient {
        &self.client
    }

    pub fn cache(&self) -> &TableCache {
        &self.cache
    }

    /// Load one season of a dataset.
    ///
    /// With `use_cache` set, an existing cache file is returned without any
    /// network call. Otherwise the API is queried with `year=<season>` and the
    /// cache file is (over)written. Datasets that are not keyed by year ignore
    /// `season`.
    pub async fn fetch(&self, dataset: Dataset, season: Season, use_cache: bool) -> Result<Table> {
        self.load(dataset, Some(season), use_cache).await
    }

    pub async fn transfer_portal(&self, season: Season, use_cache: bool) -> Result<Table> {
        self.fetch(Dataset::TransferPortal, season, use_cache).await
    }

    pub async fn player_season_stats(&self, season: Season, use_cache: bool) -> Result<Table> {
        self.fetch(Dataset::PlayerSeasonStats, season, use_cache).await
    }

    pub async fn team_season_stats(&self, season: Season, use_cache: bool) -> Result<Table> {
        self.fetch(Dataset::TeamSeasonStats, season, use_cache).await
    }

    pub async fn sp_plus_ratings(&self, season: Season, use_cache: bool) -> Result<Table> {
        self.fetch(Dataset::SpPlus, season, use_cache).await
    }

    pub async fn team_records(&self, season: Season, use_cache: bool) -> Result<Table> {
        self.fetch(Dataset::TeamRecords, season, use_cache).await
    }

    /// Team talent composite; not keyed by year.
    pub async fn team_talent(&self, use_cache: bool) -> Result<Table> {
        self.load(Dataset::TeamTalent, None, use_cache).await
    }

    /// Load `start..=end` one season at a time and concatenate the results.
    ///
    /// Seasons with no rows are skipped with a warning. Every row of the result
    /// carries a `year` column: values already present in the source are kept,
    /// missing ones are set to the season the row was fetched for. Columns are
    /// unioned across seasons. If every season is empty the result is an empty
    /// table with no columns. The first failing fetch aborts the range.
    pub async fn fetch_range(
        &self,
        dataset: Dataset,
        start: Season,
        end: Season,
        use_cache: bool,
    ) -> Result<Table> {
        if !dataset.is_yearly() {
            return Err(CfbdError::NotYearly {
                dataset: dataset.label(),
            });
        }

        let mut tables = Vec::new();
        for year in start.as_u16()..=end.as_u16() {
            let season = Season::new(year);
            let mut table = self.fetch(dataset, season, use_cache).await?;

            if table.is_empty() {
                warn!("No {} data for year {}, skipping", dataset.label(), season);
                continue;
            }

            table.fill_column(YEAR_COLUMN, &season.to_string());
            tables.push(table);
        }

        Ok(Table::concat(tables))
    }

    pub async fn transfer_portal_multi(
        &self,
        start: Season,
        end: Season,
        use_cache: bool,
    ) -> Result<Table> {
        self.fetch_range(Dataset::TransferPortal, start, end, use_cache)
            .await
    }

    pub async fn player_season_stats_multi(
        &self,
        start: Season,
        end: Season,
        use_cache: bool,
    ) -> Result<Table> {
        self.fetch_range(Dataset::PlayerSeasonStats, start, end, use_cache)
            .await
    }

    pub async fn sp_plus_multi(
        &self,
        start: Season,
        end: Season,
        use_cache: bool,
    ) -> Result<Table> {
        self.fetch_range(Dataset::SpPlus, start, end, use_cache).await
    }

    pub async fn team_season_stats_multi(
        &self,
        start: Season,
        end: Season,
        use_cache: bool,
    ) -> Result<Table> {
        self.fetch_range(Dataset::TeamSeasonStats, start, end, use_cache)
            .await
    }

    pub async fn team_records_multi(
        &self,
        start: Season,
        end: Season,
        use_cache: bool,
    ) -> Result<Table> {
        self.fetch_range(Dataset::TeamRecords, start, end, use_cache)
            .await
    }

    async fn load(
        &self,
        dataset: Dataset,
        season: Option<Season>,
        use_cache: bool,
    ) -> Result<Table> {
        let season = season.filter(|_| dataset.is_yearly());
        let path = self.cache.path_for(dataset, season);

        if use_cache {
            if let Some(table) = self.cache.read(&path)? {
                debug!(path = %path.display(), rows = table.len(), "cache hit");
                return Ok(table);
            }
        }

        let params: Vec<(&str, String)> = season
            .map(|s| vec![("year", s.to_string())])
            .unwrap_or_default();
        let body = self.client.get(dataset.path(), &params).await?;

        let table = Table::from_json(&body).ok_or_else(|| CfbdError::UnexpectedPayload {
            path: dataset.path().to_string(),
            kind: json_kind(&body),
        })?;

        self.cache.write(&path, &table)?;
        debug!(path = %path.display(), rows = table.len(), "cache written");

        Ok(table)
    }
}
