use futures::StreamExt;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

use super::wire::ShapeError;

/// Upper bound on any content response body.
const MAX_BODY_SIZE: usize = 5 * 1024 * 1024; // 5MB

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    #[error("Response too large (exceeds {0} bytes)")]
    ResponseTooLarge(usize),
    #[error("Unexpected response shape: {0}")]
    Decode(String),
    #[error("Fetch abandoned: {0}")]
    Aborted(String),
}

/// How a fetch failure is classified for retry and degradation purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 5xx, timeout, network. Retried, then degrades the category.
    Transient,
    /// 4xx and malformed requests. Never retried.
    ClientRequest,
    /// The service answered successfully with something we can't use.
    DataShape,
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::Timeout(_) | FetchError::Aborted(_) => ErrorKind::Transient,
            FetchError::Network(e) if e.is_builder() => ErrorKind::ClientRequest,
            FetchError::Network(_) => ErrorKind::Transient,
            FetchError::HttpStatus(status) if *status >= 500 => ErrorKind::Transient,
            FetchError::HttpStatus(_) => ErrorKind::ClientRequest,
            FetchError::ResponseTooLarge(_) | FetchError::Decode(_) => ErrorKind::DataShape,
        }
    }

    /// Returns true if this error is transient and the request should be retried.
    pub fn is_retryable(&self) -> bool {
        self.kind() == ErrorKind::Transient
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}

impl From<ShapeError> for FetchError {
    fn from(e: ShapeError) -> Self {
        FetchError::Decode(e.to_string())
    }
}

/// Attempt budget, backoff, and per-attempt timeout for one logical fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_delay: Duration,
    pub timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(1000),
            timeout: Duration::from_secs(15),
        }
    }
}

impl RetryPolicy {
    /// Delay slept after failed attempt `attempt` (1-based) before the next one:
    /// `initial_delay × 2^(attempt-1)`.
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(31);
        self.initial_delay.saturating_mul(1u32 << exponent)
    }

    fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }
}

/// Run `op` until it produces a final outcome, sleeping with exponential
/// backoff between attempts.
///
/// - Every attempt is bounded by `policy.timeout`; hitting it is a
///   [`FetchError::Timeout`], which is retryable.
/// - An `Ok` value for which `should_retry` returns true (a 5xx response) is
///   retried while attempts remain; on the last attempt it is returned as-is.
/// - A retryable `Err` is retried while attempts remain; the last one propagates.
/// - A non-retryable `Err` propagates immediately.
///
/// The caller only ever sees the final outcome.
pub async fn retry_with_backoff<T, F, Fut>(
    policy: &RetryPolicy,
    label: &str,
    mut should_retry: impl FnMut(&T) -> bool,
    mut op: F,
) -> Result<T, FetchError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, FetchError>>,
{
    let max_attempts = policy.attempts();
    let mut attempt = 1;

    loop {
        tracing::debug!(label, attempt, max_attempts, "Fetch attempt");

        let outcome = match tokio::time::timeout(policy.timeout, op(attempt)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout(policy.timeout)),
        };

        let last = attempt >= max_attempts;
        match outcome {
            Ok(value) if last || !should_retry(&value) => return Ok(value),
            Ok(_) => {
                tracing::debug!(label, attempt, "Server error response, will retry");
            }
            Err(e) if e.is_retryable() && !last => {
                tracing::debug!(label, attempt, error = %e, "Transient fetch failure, will retry");
            }
            Err(e) => {
                if e.is_retryable() {
                    tracing::warn!(label, attempts = attempt, error = %e, "Fetch attempts exhausted");
                }
                return Err(e);
            }
        }

        let delay = policy.delay_after(attempt);
        tracing::debug!(
            label,
            retry = attempt + 1,
            delay_ms = delay.as_millis() as u64,
            "Backing off before retry"
        );
        tokio::time::sleep(delay).await;
        attempt += 1;
    }
}

fn send_get<'a>(
    client: &'a reqwest::Client,
    url: &'a str,
) -> impl Future<Output = Result<reqwest::Response, FetchError>> + 'a {
    async move {
        client
            .get(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(FetchError::Network)
    }
}

/// GET `url` with retry on 5xx and transport failures.
///
/// A 2xx or 4xx response is returned after the attempt that produced it. If
/// every attempt hits a 5xx, the last 5xx response is returned; if the last
/// attempt fails at the transport level, that error is returned. Status
/// interpretation is left to the caller, and so is reading the body, which
/// this timeout does not cover.
pub async fn fetch_with_retry(
    client: &reqwest::Client,
    url: &str,
    policy: &RetryPolicy,
) -> Result<reqwest::Response, FetchError> {
    retry_with_backoff(
        policy,
        url,
        |response: &reqwest::Response| response.status().is_server_error(),
        |_attempt| send_get(client, url),
    )
    .await
}

/// Read a response body, refusing anything over `limit` bytes.
pub(crate) async fn read_limited_body(
    response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, FetchError> {
    // Fast path: check Content-Length header
    if let Some(len) = response.content_length() {
        if len as usize > limit {
            return Err(FetchError::ResponseTooLarge(limit));
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(FetchError::Network)?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(FetchError::ResponseTooLarge(limit));
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}

/// Fetch `url` and decode a JSON body of type `T`.
///
/// Each attempt covers the request, the body read and the decode, so a
/// server that stalls mid-body is cut off by `policy.timeout` like any other
/// slow attempt. Any non-2xx final response becomes [`FetchError::HttpStatus`];
/// 5xx statuses are retried first, 4xx are not.
pub(crate) async fn get_json<T: serde::de::DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    policy: &RetryPolicy,
) -> Result<T, FetchError> {
    retry_with_backoff(
        policy,
        url,
        |_: &T| false,
        |_attempt| async move {
            let response = send_get(client, url).await?;
            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::HttpStatus(status.as_u16()));
            }
            let body = read_limited_body(response, MAX_BODY_SIZE).await?;
            Ok(serde_json::from_slice(&body)?)
        },
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::{Arc, Mutex};
    use tokio::time::Instant;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fast_policy() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 3,
            initial_delay: Duration::from_millis(10),
            timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn test_delay_doubles_per_attempt() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_after(1), Duration::from_secs(1));
        assert_eq!(policy.delay_after(2), Duration::from_secs(2));
        assert_eq!(policy.delay_after(3), Duration::from_secs(4));
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            FetchError::Timeout(Duration::from_secs(15)).kind(),
            ErrorKind::Transient
        );
        assert_eq!(FetchError::HttpStatus(503).kind(), ErrorKind::Transient);
        assert_eq!(FetchError::HttpStatus(404).kind(), ErrorKind::ClientRequest);
        assert_eq!(
            FetchError::Decode("missing field".into()).kind(),
            ErrorKind::DataShape
        );
        assert!(!FetchError::ResponseTooLarge(10).is_retryable());
    }

    #[tokio::test(start_paused = true)]
    async fn test_backoff_schedule_between_attempts() {
        let policy = RetryPolicy::default();
        let starts = Arc::new(Mutex::new(Vec::new()));
        let origin = Instant::now();

        let result: Result<(), FetchError> = retry_with_backoff(
            &policy,
            "test",
            |_| false,
            |_attempt| {
                let starts = Arc::clone(&starts);
                async move {
                    starts.lock().unwrap().push(origin.elapsed());
                    Err(FetchError::HttpStatus(502))
                }
            },
        )
        .await;

        assert!(matches!(result, Err(FetchError::HttpStatus(502))));
        let starts = starts.lock().unwrap();
        assert_eq!(
            *starts,
            vec![
                Duration::ZERO,
                Duration::from_secs(1),
                Duration::from_secs(3),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_is_retried_then_propagates() {
        let policy = RetryPolicy {
            max_attempts: 3,
            initial_delay: Duration::from_secs(1),
            timeout: Duration::from_secs(15),
        };
        let calls = AtomicU32::new(0);
        let origin = Instant::now();

        let result: Result<(), FetchError> = retry_with_backoff(
            &policy,
            "slow",
            |_| false,
            |_attempt| {
                calls.fetch_add(1, Ordering::SeqCst);
                std::future::pending()
            },
        )
        .await;

        assert!(matches!(result, Err(FetchError::Timeout(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        // Three 15s timeouts plus 1s and 2s of backoff.
        assert_eq!(origin.elapsed(), Duration::from_secs(48));
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_retryable_error_stops_immediately() {
        let calls = AtomicU32::new(0);
        let result: Result<(), FetchError> = retry_with_backoff(
            &RetryPolicy::default(),
            "shape",
            |_| false,
            |_attempt| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(FetchError::Decode("bad".into())) }
            },
        )
        .await;

        assert!(matches!(result, Err(FetchError::Decode(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_attempts_still_tries_once() {
        let policy = RetryPolicy {
            max_attempts: 0,
            ..RetryPolicy::default()
        };
        let calls = AtomicU32::new(0);
        let result = retry_with_backoff(
            &policy,
            "zero",
            |_: &u32| false,
            |attempt| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move { Ok(attempt) }
            },
        )
        .await;

        assert_eq!(result.unwrap(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fetch_success_first_attempt() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/reviews/4days"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/api/reviews/4days", mock_server.uri());
        let response = fetch_with_retry(&client, &url, &fast_policy())
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 200);
    }

    #[tokio::test]
    async fn test_http_404_not_retried() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/api/images/missing", mock_server.uri());
        let response = fetch_with_retry(&client, &url, &fast_policy())
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 404);
    }

    #[tokio::test]
    async fn test_http_500_retried_until_exhausted() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(3)
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/api/itinerary/4days", mock_server.uri());
        let response = fetch_with_retry(&client, &url, &fast_policy())
            .await
            .unwrap();

        // Last non-ok response is handed back, not fabricated data.
        assert_eq!(response.status().as_u16(), 500);
    }

    #[tokio::test]
    async fn test_http_503_then_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/api/reviews/4days", mock_server.uri());
        let response = fetch_with_retry(&client, &url, &fast_policy())
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(mock_server.received_requests().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_get_json_maps_final_status_to_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/api/reviews/4days", mock_server.uri());
        let result: Result<serde_json::Value, _> = get_json(&client, &url, &fast_policy()).await;

        assert!(matches!(result, Err(FetchError::HttpStatus(403))));
    }

    #[tokio::test]
    async fn test_get_json_bad_body_is_decode_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/api/reviews/4days", mock_server.uri());
        let result: Result<serde_json::Value, _> = get_json(&client, &url, &fast_policy()).await;

        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[tokio::test]
    async fn test_get_json_retries_5xx_then_decodes() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502))
            .up_to_n_times(2)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ok":true}"#))
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/api/itinerary/4days", mock_server.uri());
        let value: serde_json::Value = get_json(&client, &url, &fast_policy()).await.unwrap();

        assert_eq!(value["ok"], serde_json::Value::Bool(true));
        assert_eq!(mock_server.received_requests().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_get_json_last_5xx_is_status_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .expect(3)
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/api/reviews/4days", mock_server.uri());
        let result: Result<serde_json::Value, _> = get_json(&client, &url, &fast_policy()).await;

        assert!(matches!(result, Err(FetchError::HttpStatus(503))));
    }

    #[tokio::test]
    async fn test_get_json_stalled_body_times_out() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        // Headers promise 100 bytes, then the server goes quiet.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let accepted = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&accepted);
        let server = tokio::spawn(async move {
            let mut held = Vec::new();
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                counter.fetch_add(1, Ordering::SeqCst);
                let mut buf = [0u8; 1024];
                let _ = socket.read(&mut buf).await;
                let _ = socket
                    .write_all(
                        b"HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 100\r\n\r\n{\"pack",
                    )
                    .await;
                held.push(socket);
            }
        });

        let policy = RetryPolicy {
            max_attempts: 3,
            initial_delay: Duration::from_millis(10),
            timeout: Duration::from_millis(300),
        };
        let client = reqwest::Client::new();
        let url = format!("http://{}/api/images/4days", addr);
        let result: Result<Result<serde_json::Value, FetchError>, _> = tokio::time::timeout(
            Duration::from_secs(5),
            get_json(&client, &url, &policy),
        )
        .await;
        server.abort();

        let result = result.expect("stalled body must not outlive the retry budget");
        assert!(matches!(result, Err(FetchError::Timeout(_))));
        assert_eq!(accepted.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_connection_refused_is_retried() {
        // Bind then drop a listener so the port is very likely closed.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = reqwest::Client::new();
        let url = format!("http://{}/api/reviews/4days", addr);
        let result = fetch_with_retry(&client, &url, &fast_policy()).await;

        match result {
            Err(e) => assert!(e.is_retryable()),
            Ok(r) => panic!("expected transport failure, got {}", r.status()),
        }
    }
}
