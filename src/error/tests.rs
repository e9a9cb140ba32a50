//! Unit tests for error handling

use super::*;

#[cfg(test)]
mod mfl_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let mfl_error = MflError::from(json_error);

        match mfl_error {
            MflError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_invalid_url_conversion() {
        let parse_error = url::Url::parse("not a url").unwrap_err();
        let mfl_error = MflError::from(parse_error);

        match mfl_error {
            MflError::InvalidUrl(_) => (),
            _ => panic!("Expected InvalidUrl error variant"),
        }
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
        let mfl_error = MflError::from(header_error);

        match mfl_error {
            MflError::InvalidHeader(_) => (),
            _ => panic!("Expected InvalidHeader error variant"),
        }
    }

    #[test]
    fn test_configuration_missing_display() {
        let err = MflError::ConfigurationMissing {
            year: 2020,
            league_id: "12345".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("12345"));
        assert!(msg.contains("2020"));
        assert!(msg.contains("register"));
    }

    #[test]
    fn test_remote_request_failed_display() {
        let err = MflError::RemoteRequestFailed {
            url: "https://api.myfantasyleague.com/2020/export".to_string(),
            status: Some(500),
            body: "server exploded".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("status 500"));
        assert!(msg.contains("server exploded"));
        assert!(msg.contains("/2020/export"));
    }

    #[test]
    fn test_remote_request_failed_display_without_status() {
        // Transport failures carry no HTTP status at all.
        let err = MflError::RemoteRequestFailed {
            url: "https://api.myfantasyleague.com/2020/export".to_string(),
            status: None,
            body: "operation timed out".to_string(),
        };

        let msg = err.to_string();
        assert!(!msg.contains("status"));
        assert!(msg.contains("operation timed out"));
        assert!(msg.contains("/2020/export"));
    }

    #[test]
    fn test_only_transient_auth_is_transient() {
        let rejected = MflError::AuthRejected {
            year: 2020,
            league_id: "12345".to_string(),
            status: 403,
        };
        let missing = MflError::ConfigurationMissing {
            year: 2020,
            league_id: "12345".to_string(),
        };

        assert!(!rejected.is_transient());
        assert!(!missing.is_transient());
    }
}
