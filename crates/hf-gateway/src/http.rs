//! Status handling for generative API replies.

use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{Response, StatusCode};
use serde::Deserialize;

use crate::error::GatewayError;

/// Wait used when a 429 carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(default)]
    status: Option<String>,
}

/// Pass a 2xx reply through; turn anything else into a [`GatewayError`].
pub async fn ensure_success(resp: Response) -> Result<Response, GatewayError> {
    match resp.status() {
        status if status.is_success() => Ok(resp),
        StatusCode::TOO_MANY_REQUESTS => Err(GatewayError::RateLimited {
            retry_after_secs: retry_after_secs(resp.headers()),
        }),
        status => {
            let body = resp.text().await.unwrap_or_default();
            Err(GatewayError::Api {
                status: status.as_u16(),
                message: describe_failure(&body),
            })
        }
    }
}

/// Only the delta-seconds form is understood; HTTP dates fall back to the default.
fn retry_after_secs(headers: &HeaderMap) -> u64 {
    headers
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

/// `STATUS: message` from a Google error envelope, else the trimmed body.
fn describe_failure(body: &str) -> String {
    let Ok(ErrorEnvelope { error }) = serde_json::from_str::<ErrorEnvelope>(body) else {
        return body.trim().to_string();
    };
    match error.status {
        Some(status) => format!("{status}: {}", error.message),
        None => error.message,
    }
}

#[cfg(test)]
mod tests {
    use reqwest::header::HeaderValue;

    use super::*;

    fn reply(status: u16, retry_after: Option<&str>, body: &str) -> Response {
        let mut builder = ::http::Response::builder().status(status);
        if let Some(value) = retry_after {
            builder = builder.header(RETRY_AFTER, value);
        }
        Response::from(builder.body(body.to_string()).expect("response should build"))
    }

    #[test]
    fn retry_after_parses_seconds_only() {
        let mut headers = HeaderMap::new();
        assert_eq!(retry_after_secs(&headers), DEFAULT_RETRY_AFTER_SECS);

        headers.insert(RETRY_AFTER, HeaderValue::from_static(" 30 "));
        assert_eq!(retry_after_secs(&headers), 30);

        headers.insert(
            RETRY_AFTER,
            HeaderValue::from_static("Wed, 21 Oct 2026 07:28:00 GMT"),
        );
        assert_eq!(retry_after_secs(&headers), DEFAULT_RETRY_AFTER_SECS);
    }

    #[test]
    fn failure_text_prefers_the_envelope() {
        let with_status = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(
            describe_failure(with_status),
            "INVALID_ARGUMENT: API key not valid."
        );
        assert_eq!(
            describe_failure(r#"{"error":{"message":"quota"}}"#),
            "quota"
        );
        assert_eq!(describe_failure("bad gateway\n"), "bad gateway");
    }

    #[tokio::test]
    async fn too_many_requests_becomes_rate_limited() {
        let err = ensure_success(reply(429, Some("12"), ""))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            GatewayError::RateLimited {
                retry_after_secs: 12
            }
        ));
    }

    #[tokio::test]
    async fn server_error_carries_status_and_body() {
        let err = ensure_success(reply(502, None, "bad gateway"))
            .await
            .unwrap_err();
        match err {
            GatewayError::Api { status, message } => {
                assert_eq!((status, message.as_str()), (502, "bad gateway"));
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn success_is_returned_untouched() {
        let resp = ensure_success(reply(200, None, "{}"))
            .await
            .expect("2xx should pass");
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
