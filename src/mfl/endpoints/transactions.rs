//! Transaction reports. Access to most of these is restricted to league
//! owners, with the commissioner seeing all pending entries.

use serde_json::Value;

use crate::core::filters::FilterList;
use crate::error::Result;
use crate::mfl::http::RequestDispatcher;
use crate::mfl::types::TenantKey;

/// Optional filters for the `transactions` report.
#[derive(Debug, Default, Clone)]
pub struct TransactionsQuery {
    /// Restrict to transactions from one week.
    pub week: Option<u16>,
    /// Transaction types, comma-separated. Known types include WAIVER,
    /// BBID_WAIVER, FREE_AGENT, WAIVER_REQUEST, BBID_WAIVER_REQUEST, TRADE,
    /// IR, TAXI, AUCTION_INIT, AUCTION_BID, AUCTION_WON, SURVIVOR_PICK and
    /// POOL_PICK; `*` selects all and DEFAULT the default set.
    pub trans_type: Option<String>,
    /// Restrict to one franchise's transactions.
    pub franchise: Option<String>,
    /// Restrict to the last N days.
    pub days: Option<u16>,
    /// Cap the number of entries returned. When set, only transactions of
    /// the most common types are included.
    pub count: Option<u32>,
}

/// All non-pending transactions for the league.
///
/// The unfiltered set can be very large; prefer narrowing it with
/// [`TransactionsQuery`].
pub async fn get_transactions(
    dispatcher: &RequestDispatcher,
    key: &TenantKey,
    query: &TransactionsQuery,
) -> Result<Value> {
    let mut filters = FilterList::new();
    filters.push("TYPE", "transactions");
    filters.push("L", key.league_id());
    filters.push("JSON", 1);
    filters.push_opt("W", query.week);
    filters.push_opt("TRANS_TYPE", query.trans_type.as_deref());
    filters.push_opt("FRANCHISE", query.franchise.as_deref());
    filters.push_opt("DAYS", query.days);
    filters.push_opt("COUNT", query.count);

    let url = filters.apply(&dispatcher.export_url(key.year()))?;
    dispatcher.fetch(url, key).await
}

/// Waivers the current franchise has submitted but that are not yet
/// processed. A commissioner passes `franchise_id` to pick a franchise,
/// "0000" for entries pending commissioner action.
pub async fn get_pending_waivers(
    dispatcher: &RequestDispatcher,
    key: &TenantKey,
    franchise_id: Option<&str>,
) -> Result<Value> {
    let mut filters = FilterList::new();
    filters.push("TYPE", "pendingWaivers");
    filters.push("L", key.league_id());
    filters.push("JSON", 1);
    filters.push_opt("FRANCHISE_ID", franchise_id);

    let url = filters.apply(&dispatcher.export_url(key.year()))?;
    dispatcher.fetch(url, key).await
}
