//! The fixed set of API endpoints this crate loads.

use std::fmt;

use crate::Season;

/// Player search endpoint, queried with `search=<full name>`.
pub const PLAYER_SEARCH_PATH: &str = "/player/search";

/// A dataset served by one fixed API path and cached as one CSV per year
/// (or a single CSV when it is not keyed by year).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    TransferPortal,
    PlayerSeasonStats,
    TeamSeasonStats,
    SpPlus,
    TeamRecords,
    TeamTalent,
}

impl Dataset {
    pub const ALL: [Dataset; 6] = [
        Dataset::TransferPortal,
        Dataset::PlayerSeasonStats,
        Dataset::TeamSeasonStats,
        Dataset::SpPlus,
        Dataset::TeamRecords,
        Dataset::TeamTalent,
    ];

    /// API path, relative to the base URL.
    pub fn path(self) -> &'static str {
        match self {
            Dataset::TransferPortal => "/player/portal",
            Dataset::PlayerSeasonStats => "/stats/player/season",
            Dataset::TeamSeasonStats => "/stats/season/team",
            Dataset::SpPlus => "/ratings/sp",
            Dataset::TeamRecords => "/records",
            Dataset::TeamTalent => "/talent",
        }
    }

    /// Whether requests carry a `year` parameter.
    pub fn is_yearly(self) -> bool {
        !matches!(self, Dataset::TeamTalent)
    }

    /// Stem of the cache file name.
    pub fn cache_stem(self) -> &'static str {
        match self {
            Dataset::TransferPortal => "transfer_portal",
            Dataset::PlayerSeasonStats => "player_season_stats",
            Dataset::TeamSeasonStats => "team_season_stats",
            Dataset::SpPlus => "sp_plus",
            Dataset::TeamRecords => "team_records",
            Dataset::TeamTalent => "team_talent",
        }
    }

    /// Human-readable name for messages.
    pub fn label(self) -> &'static str {
        match self {
            Dataset::TransferPortal => "transfer portal",
            Dataset::PlayerSeasonStats => "player season stats",
            Dataset::TeamSeasonStats => "team season stats",
            Dataset::SpPlus => "SP+",
            Dataset::TeamRecords => "team records",
            Dataset::TeamTalent => "team talent",
        }
    }

    /// `<stem>_<year>.csv` for yearly datasets, `<stem>.csv` otherwise.
    pub fn cache_file_name(self, season: Option<Season>) -> String {
        match season {
            Some(season) if self.is_yearly() => format!("{}_{}.csv", self.cache_stem(), season),
            _ => format!("{}.csv", self.cache_stem()),
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
