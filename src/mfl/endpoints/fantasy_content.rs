//! League-agnostic fantasy content reports: player database, player
//! profiles, scoring rules, and expert rankings.

use serde_json::Value;

use crate::core::filters::FilterList;
use crate::error::Result;
use crate::mfl::http::RequestDispatcher;
use crate::mfl::types::TenantKey;

/// Optional filters for the `players` report.
#[derive(Debug, Default, Clone)]
pub struct PlayersQuery {
    /// Request complete player details, including IDs from other sources.
    pub details: Option<bool>,
    /// Unix timestamp; only changes to the player database since then.
    pub since: Option<u64>,
    /// Comma-separated player IDs to restrict the result to.
    pub players: Option<String>,
}

/// All player IDs, names and positions MFL has for the year.
///
/// Every other report refers to players by ID only, so this is the lookup
/// table for presenting names. MFL updates it at most once per day and asks
/// clients to read it no more often than that.
pub async fn get_players(
    dispatcher: &RequestDispatcher,
    key: &TenantKey,
    query: &PlayersQuery,
) -> Result<Value> {
    let mut filters = FilterList::new();
    filters.push("TYPE", "players");
    filters.push("JSON", 1);
    filters.push_opt("DETAILS", query.details.map(u8::from));
    filters.push_opt("SINCE", query.since);
    filters.push_opt("PLAYERS", query.players.as_deref());

    let url = filters.apply(&dispatcher.export_url(key.year()))?;
    dispatcher.fetch(url, key).await
}

/// Summary information for one or more players: DOB, ADP ranking,
/// height/weight. `player_ids` is a single ID or a comma-separated list.
pub async fn get_player_profile(
    dispatcher: &RequestDispatcher,
    key: &TenantKey,
    player_ids: &str,
) -> Result<Value> {
    let mut filters = FilterList::new();
    filters.push("TYPE", "playerProfile");
    filters.push("P", player_ids);
    filters.push("JSON", 1);

    let url = filters.apply(&dispatcher.export_url(key.year()))?;
    dispatcher.fetch(url, key).await
}

/// All scoring rules MFL currently supports, with abbreviations and
/// descriptions for translating the `rules` report.
pub async fn get_all_rules(dispatcher: &RequestDispatcher, key: &TenantKey) -> Result<Value> {
    let mut filters = FilterList::new();
    filters.push("TYPE", "allRules");
    filters.push("JSON", 1);

    let url = filters.apply(&dispatcher.export_url(key.year()))?;
    dispatcher.fetch(url, key).await
}

/// Overall player rankings from FantasySharks, usable in place of ADP during
/// a draft. `position` restricts the ranking to one position.
pub async fn get_player_ranks(
    dispatcher: &RequestDispatcher,
    key: &TenantKey,
    position: Option<&str>,
) -> Result<Value> {
    let mut filters = FilterList::new();
    filters.push("TYPE", "playerRanks");
    filters.push("JSON", 1);
    filters.push_opt("POS", position);

    let url = filters.apply(&dispatcher.export_url(key.year()))?;
    dispatcher.fetch(url, key).await
}
