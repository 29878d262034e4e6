//! Unit tests for HTTP client functionality

use super::*;
use serde_json::json;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn client_for(server: &MockServer, api_key: Option<&str>) -> CfbdClient {
    let mut config = Config::new(server.uri(), "unused");
    if let Some(key) = api_key {
        config = config.with_api_key(key);
    }
    CfbdClient::new(&config).unwrap()
}

#[cfg(test)]
mod http_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_success_sends_auth_and_accept_headers() {
        let mock_server = MockServer::start().await;

        let mock_response = json!([
            { "season": 2023, "firstName": "Jane", "lastName": "Doe", "origin": "Acme State" }
        ]);

        Mock::given(method("GET"))
            .and(path("/player/portal"))
            .and(query_param("year", "2023"))
            .and(header("authorization", "Bearer test-key"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&mock_response))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, Some("test-key"));
        let result = client
            .get("/player/portal", &[("year", "2023".to_string())])
            .await
            .unwrap();

        assert_eq!(result, mock_response);
    }

    #[tokio::test]
    async fn test_get_without_params() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/talent"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{ "school": "Alabama" }])),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, Some("test-key"));
        let result = client.get("/talent", &[]).await.unwrap();

        assert_eq!(result[0]["school"], "Alabama");
    }

    #[tokio::test]
    async fn test_get_non_success_carries_status_and_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ratings/sp"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limit exceeded"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, Some("test-key"));
        let err = client
            .get("/ratings/sp", &[("year", "2022".to_string())])
            .await
            .unwrap_err();

        match err {
            CfbdError::Status { status, body } => {
                assert_eq!(status, 429);
                assert_eq!(body, "rate limit exceeded");
            }
            other => panic!("Expected Status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_api_key_surfaces_as_auth_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/records"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, None);
        let err = client
            .get("/records", &[("year", "2021".to_string())])
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(401));

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_invalid_json_body_is_an_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/records"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, Some("test-key"));
        let result = client.get("/records", &[]).await;

        assert!(matches!(result, Err(CfbdError::Http(_))));
    }

    #[tokio::test]
    async fn test_trailing_slash_in_base_url_is_trimmed() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/talent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = Config::new(format!("{}/", mock_server.uri()), "unused");
        let client = CfbdClient::new(&config).unwrap();

        assert_eq!(client.base_url(), mock_server.uri());
        assert_eq!(client.get("/talent", &[]).await.unwrap(), json!([]));
    }
}

#[test]
fn test_cfbd_base_url_constant() {
    assert_eq!(CFBD_BASE_URL, "https://api.collegefootballdata.com");
}

#[test]
fn test_build_headers_without_key() {
    let headers = build_headers(None).unwrap();

    assert_eq!(headers.get("accept").unwrap(), "application/json");
    assert!(!headers.contains_key("authorization"));
}

#[test]
fn test_build_headers_with_key() {
    let headers = build_headers(Some("abc123")).unwrap();

    assert_eq!(headers.get("authorization").unwrap(), "Bearer abc123");
    assert!(headers.get("authorization").unwrap().is_sensitive());
}

#[test]
fn test_build_headers_rejects_invalid_key() {
    let result = build_headers(Some("bad\nkey"));

    assert!(matches!(result, Err(CfbdError::InvalidHeader(_))));
}

#[tokio::test]
async fn test_error_body_marks_failed_read() {
    // Nothing listens on the discard port
    let failed = reqwest::get("http://127.0.0.1:9").await.map(|_| String::new());

    assert!(error_body(failed).starts_with("<unreadable body: "));
    assert_eq!(error_body(Ok("rate limited".to_string())), "rate limited");
}
