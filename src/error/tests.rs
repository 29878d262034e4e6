//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod cfbd_error_tests {
    use super::*;

    #[tokio::test]
    async fn test_http_error_conversion() {
        // Nothing listens on the discard port
        let client = reqwest::Client::new();
        let result = client.get("http://127.0.0.1:9").send().await;
        let reqwest_error = result.unwrap_err();
        let cfbd_error = CfbdError::from(reqwest_error);

        match cfbd_error {
            CfbdError::Http(_) => (),
            _ => panic!("Expected Http error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let cfbd_error = CfbdError::from(json_error);

        match cfbd_error {
            CfbdError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let cfbd_error = CfbdError::from(io_error);

        match cfbd_error {
            CfbdError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
        let cfbd_error = CfbdError::from(header_error);

        match cfbd_error {
            CfbdError::InvalidHeader(_) => (),
            _ => panic!("Expected InvalidHeader error variant"),
        }
    }

    #[test]
    fn test_invalid_year_error_conversion() {
        let parse_error = "twenty".parse::<u16>().unwrap_err();
        let cfbd_error = CfbdError::from(parse_error);

        match cfbd_error {
            CfbdError::InvalidYear(_) => (),
            _ => panic!("Expected InvalidYear error variant"),
        }
    }

    #[test]
    fn test_status_error_display_carries_code_and_body() {
        let error = CfbdError::Status {
            status: 401,
            body: "Unauthorized".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("401"));
        assert!(message.contains("Unauthorized"));
        assert_eq!(error.status(), Some(401));
    }

    #[test]
    fn test_unexpected_payload_display() {
        let error = CfbdError::UnexpectedPayload {
            path: "/records".to_string(),
            kind: "string",
        };

        assert_eq!(
            error.to_string(),
            "Unexpected string payload from /records; expected an array of objects"
        );
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_dataset_errors_display() {
        let error = CfbdError::NotYearly {
            dataset: "team talent",
        };
        assert_eq!(error.to_string(), "team talent is not keyed by year");

        let error = CfbdError::MissingYear {
            dataset: "SP+ ratings",
        };
        assert_eq!(
            error.to_string(),
            "SP+ ratings requires --year or --start/--end"
        );
    }
}
