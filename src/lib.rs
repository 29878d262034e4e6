//! College Football Data Loader Library
//!
//! Fetches college-football datasets from the CollegeFootballData API, caches
//! every query as a CSV file on local disk, and assembles multi-year tables.
//!
//! ## Features
//!
//! - **Dataset Retrieval**: transfer portal, player and team season stats, SP+
//!   ratings, team records and team talent
//! - **CSV Cache**: a cached file is authoritative until a refresh overwrites it
//! - **Multi-Year Aggregation**: per-year tables concatenated by column union,
//!   tagged with a `year` column, empty years skipped
//! - **Player-ID Attachment**: resolves transfer entries to player IDs by name
//!   and origin team
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cfb_data::{Config, Loader, Season};
//!
//! # async fn example() -> cfb_data::Result<()> {
//! let loader = Loader::new(&Config::from_env())?;
//! let portal = loader
//!     .transfer_portal_multi(Season::new(2021), Season::new(2023), true)
//!     .await?;
//! let with_ids = loader.attach_player_ids(&portal).await?;
//! println!("{} transfers", with_ids.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export CFBD_API_KEY=your-token
//! export CFB_DATA_DIR=./data/raw   # optional
//! ```

pub mod cfbd;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod datasets;
pub mod error;

// Re-export commonly used types
pub use cfbd::{endpoints::Dataset, http::CfbdClient};
pub use cli::types::Season;
pub use config::Config;
pub use crate::core::{cache::TableCache, table::Table};
pub use datasets::{player_ids::PLAYER_ID_COLUMN, Loader, YEAR_COLUMN};
pub use error::{CfbdError, Result};
