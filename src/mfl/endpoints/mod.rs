//! Report endpoint builders.
//!
//! Each function builds one export URL from an explicit set of filters and
//! hands it to the dispatcher; none of them touch credentials directly.
//! Optional filters live in per-endpoint query structs so the set an endpoint
//! recognizes is visible in its signature rather than scattered through
//! dynamic keyword handling.

pub mod fantasy_content;
pub mod league_players;
pub mod transactions;

pub use fantasy_content::{
    get_all_rules, get_player_profile, get_player_ranks, get_players, PlayersQuery,
};
pub use league_players::{get_player_roster_status, RosterStatusQuery};
pub use transactions::{get_pending_waivers, get_transactions, TransactionsQuery};
