//! League-scoped player reports.

use serde_json::Value;

use crate::core::filters::FilterList;
use crate::error::Result;
use crate::mfl::http::RequestDispatcher;
use crate::mfl::types::TenantKey;

/// Optional filters for the `playerRosterStatus` report.
#[derive(Debug, Default, Clone)]
pub struct RosterStatusQuery {
    /// Status for a specific week; defaults to the current live-scoring week.
    pub week: Option<u16>,
    /// Franchise used to resolve free agency in deluxe leagues; defaults to
    /// the caller's franchise.
    pub franchise_id: Option<String>,
}

/// Current roster status for one or more players.
///
/// Each franchise holding the player is listed with a status attribute:
/// R (roster), S (starter), NS (non-starter), IR (injured reserve) or
/// TS (taxi squad). Free agents carry an `is_fa` attribute instead.
/// `player_ids` is a single ID or a comma-separated list.
pub async fn get_player_roster_status(
    dispatcher: &RequestDispatcher,
    key: &TenantKey,
    player_ids: &str,
    query: &RosterStatusQuery,
) -> Result<Value> {
    let mut filters = FilterList::new();
    filters.push("TYPE", "playerRosterStatus");
    filters.push("L", key.league_id());
    filters.push("P", player_ids);
    filters.push("JSON", 1);
    filters.push_opt("W", query.week);
    filters.push_opt("F", query.franchise_id.as_deref());

    let url = filters.apply(&dispatcher.export_url(key.year()))?;
    dispatcher.fetch(url, key).await
}
