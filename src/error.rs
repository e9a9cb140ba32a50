//! Error types for the MyFantasyLeague API client

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MflError>;

#[derive(Error, Debug)]
pub enum MflError {
    #[error("no credentials registered for league {league_id} in {year}; call register first")]
    ConfigurationMissing { year: u16, league_id: String },

    #[error("login request failed for league {league_id} in {year}: {source}")]
    TransientAuth {
        year: u16,
        league_id: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("login response carried no session token (status {status}): {body}")]
    AuthProtocol { status: u16, body: String },

    #[error("authentication rejected for league {league_id} in {year} (status {status})")]
    AuthRejected {
        year: u16,
        league_id: String,
        status: u16,
    },

    #[error("request to {url} failed{}: {body}", fmt_status(.status))]
    RemoteRequestFailed {
        url: String,
        /// HTTP status of the failed response; `None` when the request never
        /// completed (timeout or other transport failure).
        status: Option<u16>,
        body: String,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

fn fmt_status(status: &Option<u16>) -> String {
    match status {
        Some(status) => format!(" with status {status}"),
        None => String::new(),
    }
}

impl MflError {
    /// Whether retrying the whole operation later could plausibly succeed.
    ///
    /// Only network-level authentication failures qualify; everything else in
    /// the taxonomy is either a caller error or a hard rejection.
    pub fn is_transient(&self) -> bool {
        matches!(self, MflError::TransientAuth { .. })
    }
}

#[cfg(test)]
mod tests;
