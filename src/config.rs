//! Process configuration: API credential, base URL and cache directory.
//!
//! Built once at startup and passed to [`crate::CfbdClient`] and
//! [`crate::Loader`]; nothing reads the environment after that.

use std::{fmt, path::PathBuf};

use crate::{cfbd::http::CFBD_BASE_URL, core::cache::default_raw_dir};

pub const API_KEY_ENV_VAR: &str = "CFBD_API_KEY";
pub const BASE_URL_ENV_VAR: &str = "CFBD_BASE_URL";
pub const DATA_DIR_ENV_VAR: &str = "CFB_DATA_DIR";

#[derive(Clone)]
pub struct Config {
    /// Bearer token. When absent requests go out unauthenticated and the API
    /// answers with an auth failure.
    pub api_key: Option<String>,
    pub base_url: String,
    /// Directory holding cached CSV tables.
    pub raw_dir: PathBuf,
}

impl Config {
    /// Config with no credential.
    pub fn new(base_url: impl Into<String>, raw_dir: impl Into<PathBuf>) -> Self {
        Self {
            api_key: None,
            base_url: base_url.into(),
            raw_dir: raw_dir.into(),
        }
    }

    /// Load `.env` if present, then read `CFBD_API_KEY`, `CFBD_BASE_URL` and
    /// `CFB_DATA_DIR`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Self {
            api_key: present(API_KEY_ENV_VAR).map(|k| k.trim().to_string()),
            base_url: present(BASE_URL_ENV_VAR).unwrap_or_else(|| CFBD_BASE_URL.to_string()),
            raw_dir: present(DATA_DIR_ENV_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(default_raw_dir),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_raw_dir(mut self, raw_dir: impl Into<PathBuf>) -> Self {
        self.raw_dir = raw_dir.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(CFBD_BASE_URL, default_raw_dir())
    }
}

// Keeps the token out of debug output.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("raw_dir", &self.raw_dir)
            .finish()
    }
}
