//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks (429 with reset parsing, 401/403,
//! non-success -> [`TwitterError::Api`]) and JSON decoding so the endpoint
//! modules stay focused on request construction and response mapping.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::de::DeserializeOwned;

use crate::error::TwitterError;

/// Fallback wait when a 429 carries no usable header.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** -> [`TwitterError::RateLimited`], reading
///   `Retry-After` first, then `x-rate-limit-reset` (epoch seconds), and
///   falling back to 60 s.
/// - **401 / 403** -> [`TwitterError::Unauthorized`].
/// - **Other non-success status** -> [`TwitterError::Api`] with the body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, TwitterError> {
    let status = resp.status();
    if status == 429 {
        return Err(TwitterError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if status == 401 || status == 403 {
        return Err(TwitterError::Unauthorized {
            status: status.as_u16(),
        });
    }
    if !status.is_success() {
        return Err(TwitterError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Read the body and decode it as `T`, naming `endpoint` on failure.
pub async fn decode_json<T: DeserializeOwned>(
    resp: reqwest::Response,
    endpoint: &str,
) -> Result<T, TwitterError> {
    let body = resp.text().await?;
    parse_body(&body, endpoint)
}

pub fn parse_body<T: DeserializeOwned>(body: &str, endpoint: &str) -> Result<T, TwitterError> {
    serde_json::from_str(body).map_err(|e| TwitterError::MalformedResponse {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })
}

fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    let header = |name: &str| {
        resp.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
    };

    if let Some(secs) = header(reqwest::header::RETRY_AFTER.as_str()) {
        return secs;
    }

    header("x-rate-limit-reset")
        .and_then(|reset| {
            let now = SystemTime::now().duration_since(UNIX_EPOCH).ok()?.as_secs();
            Some(reset.saturating_sub(now))
        })
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body("")
                .unwrap(),
        )
    }

    fn mock_response_with_header(status: u16, name: &str, value: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .header(name, value)
                .body("")
                .unwrap(),
        )
    }

    #[test]
    fn parse_retry_after_from_header() {
        let resp = mock_response_with_header(429, "Retry-After", "120");
        assert_eq!(parse_retry_after(&resp), 120);
    }

    #[test]
    fn parse_retry_after_missing_header() {
        let resp = mock_response(429);
        assert_eq!(parse_retry_after(&resp), 60);
    }

    #[test]
    fn parse_retry_after_from_past_reset_is_zero() {
        let resp = mock_response_with_header(429, "x-rate-limit-reset", "1");
        assert_eq!(parse_retry_after(&resp), 0);
    }

    #[test]
    fn parse_retry_after_non_numeric() {
        let resp = mock_response_with_header(429, "Retry-After", "soon");
        assert_eq!(parse_retry_after(&resp), 60);
    }

    #[tokio::test]
    async fn check_response_rate_limited() {
        let resp = mock_response_with_header(429, "Retry-After", "30");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            TwitterError::RateLimited {
                retry_after_secs: 30
            }
        ));
    }

    #[tokio::test]
    async fn check_response_unauthorized() {
        for status in [401, 403] {
            let err = check_response(mock_response(status)).await.unwrap_err();
            assert!(matches!(err, TwitterError::Unauthorized { status: s } if s == status));
        }
    }

    #[tokio::test]
    async fn check_response_api_error() {
        let err = check_response(mock_response(503)).await.unwrap_err();
        assert!(matches!(err, TwitterError::Api { status: 503, .. }));
    }

    #[tokio::test]
    async fn check_response_success() {
        assert!(check_response(mock_response(200)).await.is_ok());
    }

    #[test]
    fn parse_body_names_endpoint_on_failure() {
        let err = parse_body::<serde_json::Value>("{not json", "users/by/username").unwrap_err();
        match err {
            TwitterError::MalformedResponse { endpoint, .. } => {
                assert_eq!(endpoint, "users/by/username");
            }
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }
}
