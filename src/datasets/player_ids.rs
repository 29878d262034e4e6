//! Resolve transfer-portal entries to API player IDs via name search.

use serde_json::Value;
use tracing::debug;

use super::Loader;
use crate::{
    cfbd::endpoints::PLAYER_SEARCH_PATH,
    core::table::{json_cell, Table},
    Result,
};

/// Column added by [`Loader::attach_player_ids`].
pub const PLAYER_ID_COLUMN: &str = "playerId";

const FIRST_NAME_COLUMN: &str = "firstName";
const LAST_NAME_COLUMN: &str = "lastName";
const ORIGIN_COLUMN: &str = "origin";

impl Loader {
    /// Copy of `transfers` with a `playerId` column resolved per row.
    ///
    /// Each row is searched by `"<firstName> <lastName>"`, one request per
    /// row, in order. See [`select_player_id`] for how a candidate is picked.
    /// Rows without any name get a null ID and no request. Search failures
    /// abort the whole call.
    pub async fn attach_player_ids(&self, transfers: &Table) -> Result<Table> {
        let mut ids = Vec::with_capacity(transfers.len());

        for row in 0..transfers.len() {
            let name = full_name(
                transfers.get(row, FIRST_NAME_COLUMN),
                transfers.get(row, LAST_NAME_COLUMN),
            );
            let Some(name) = name else {
                debug!(row, "no name on transfer row, skipping search");
                ids.push(None);
                continue;
            };

            let results = self
                .client()
                .get(PLAYER_SEARCH_PATH, &[("search", name.clone())])
                .await?;
            let id = select_player_id(&results, transfers.get(row, ORIGIN_COLUMN));
            debug!(%name, ?id, "player search");
            ids.push(id);
        }

        let mut out = transfers.clone();
        out.set_column(PLAYER_ID_COLUMN, ids);
        Ok(out)
    }
}

/// Pick a player ID from `/player/search` results.
///
/// With an `origin` team, the first candidate whose `team` matches it
/// case-insensitively wins; otherwise (or with no origin) the first candidate.
/// No candidates, or a candidate without an `id`, gives `None`.
pub fn select_player_id(results: &Value, origin: Option<&str>) -> Option<String> {
    let candidates = results.as_array()?;
    let first = candidates.first()?;

    let chosen = origin
        .map(str::to_lowercase)
        .and_then(|origin| {
            candidates.iter().find(|c| {
                c.get("team")
                    .and_then(Value::as_str)
                    .is_some_and(|team| team.to_lowercase() == origin)
            })
        })
        .unwrap_or(first);

    chosen.get("id").and_then(json_cell)
}

fn full_name(first: Option<&str>, last: Option<&str>) -> Option<String> {
    let name = [first, last]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
