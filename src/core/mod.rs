//! Core utilities for the MyFantasyLeague API client
//!
//! This module consolidates helpers that are used across the crate:
//! - `filters`: ordered query-filter lists and URL serialization

pub mod filters;

// Re-export commonly used items for convenience
pub use filters::FilterList;
