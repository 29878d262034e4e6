//! Type-safe wrappers and enums for CLI arguments.

use crate::{
    cfbd::endpoints::Dataset,
    error::{CfbdError, Result},
};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for season years.
///
/// # Examples
///
/// ```rust
/// use cfb_data::Season;
///
/// let season: Season = "2023".parse().unwrap();
/// assert_eq!(season.as_u16(), 2023);
/// assert_eq!(season.to_string(), "2023");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = CfbdError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Dataset names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DatasetArg {
    TransferPortal,
    PlayerSeasonStats,
    TeamSeasonStats,
    SpPlus,
    TeamRecords,
    TeamTalent,
}

impl From<DatasetArg> for Dataset {
    fn from(arg: DatasetArg) -> Self {
        match arg {
            DatasetArg::TransferPortal => Dataset::TransferPortal,
            DatasetArg::PlayerSeasonStats => Dataset::PlayerSeasonStats,
            DatasetArg::TeamSeasonStats => Dataset::TeamSeasonStats,
            DatasetArg::SpPlus => Dataset::SpPlus,
            DatasetArg::TeamRecords => Dataset::TeamRecords,
            DatasetArg::TeamTalent => Dataset::TeamTalent,
        }
    }
}
