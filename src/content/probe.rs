//! Endpoint diagnostics for the content service.
//!
//! Hits each endpoint once, without retry, and reports what came back. Used by
//! `tripview probe` to check a deployment before pointing the page at it.

use super::fetchers::ContentClient;
use crate::locale::Language;
use std::fmt;
use std::time::{Duration, Instant};

/// Per-endpoint timeout for probes.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Pause between consecutive probes so the service isn't hammered.
pub const PROBE_GAP: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// 2xx response.
    Success { status: u16 },
    /// Non-2xx response.
    Failed { status: u16 },
    /// No response at all.
    Unreachable { error: String },
}

impl ProbeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeOutcome::Success { .. })
    }
}

#[derive(Debug, Clone)]
pub struct ProbeResult {
    pub name: &'static str,
    pub url: String,
    pub outcome: ProbeOutcome,
    pub elapsed: Duration,
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ms = self.elapsed.as_millis();
        match &self.outcome {
            ProbeOutcome::Success { status } => {
                write!(f, "SUCCESS  {:<18} {} ({}ms) {}", self.name, status, ms, self.url)
            }
            ProbeOutcome::Failed { status } => {
                write!(f, "FAILED   {:<18} {} ({}ms) {}", self.name, status, ms, self.url)
            }
            ProbeOutcome::Unreachable { error } => {
                write!(f, "FAILED   {:<18} --- ({}ms) {}: {}", self.name, ms, self.url, error)
            }
        }
    }
}

/// Endpoints probed, in order.
pub fn probe_targets(client: &ContentClient, package_id: &str) -> Vec<(&'static str, String)> {
    let base = client.base_url();
    vec![
        ("health", format!("{}/health", base)),
        ("health (detailed)", format!("{}/health/detailed", base)),
        ("reviews", client.reviews_url(package_id)),
        ("images", client.images_url(package_id)),
        ("itinerary (es)", client.itinerary_url(package_id, Language::Es)),
        ("itinerary (en)", client.itinerary_url(package_id, Language::En)),
        ("packages", format!("{}/api/packages", base)),
    ]
}

async fn probe_one(http: &reqwest::Client, url: &str, timeout: Duration) -> ProbeOutcome {
    let request = http
        .get(url)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .timeout(timeout)
        .send();

    match request.await {
        Ok(response) if response.status().is_success() => ProbeOutcome::Success {
            status: response.status().as_u16(),
        },
        Ok(response) => ProbeOutcome::Failed {
            status: response.status().as_u16(),
        },
        Err(e) => ProbeOutcome::Unreachable {
            error: if e.is_timeout() {
                format!("timed out after {}s", timeout.as_secs())
            } else {
                e.to_string()
            },
        },
    }
}

/// Probe every endpoint sequentially, pausing `gap` between requests.
pub async fn run_probes(
    client: &ContentClient,
    package_id: &str,
    timeout: Duration,
    gap: Duration,
) -> Vec<ProbeResult> {
    let targets = probe_targets(client, package_id);
    let mut results = Vec::with_capacity(targets.len());

    for (i, (name, url)) in targets.into_iter().enumerate() {
        if i > 0 {
            tokio::time::sleep(gap).await;
        }

        let started = Instant::now();
        let outcome = probe_one(client.http(), &url, timeout).await;
        let elapsed = started.elapsed();

        tracing::info!(endpoint = name, url = %url, ok = outcome.is_success(), "Probed endpoint");
        results.push(ProbeResult {
            name,
            url,
            outcome,
            elapsed,
        });
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::RetryPolicy;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_probes_report_each_endpoint_once() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/images/4days"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = ContentClient::new(&server.uri(), RetryPolicy::default()).unwrap();
        let results = run_probes(&client, "4days", PROBE_TIMEOUT, Duration::ZERO).await;

        assert_eq!(results.len(), 7);
        assert_eq!(results[0].outcome, ProbeOutcome::Success { status: 200 });
        assert_eq!(results[3].name, "images");
        assert_eq!(results[3].outcome, ProbeOutcome::Failed { status: 500 });
        assert_eq!(results[6].outcome, ProbeOutcome::Failed { status: 404 });
    }

    #[tokio::test]
    async fn test_probe_timeout_is_unreachable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let client = ContentClient::new(&server.uri(), RetryPolicy::default()).unwrap();
        let outcome = probe_one(
            client.http(),
            &format!("{}/health", server.uri()),
            Duration::from_millis(100),
        )
        .await;

        assert!(matches!(outcome, ProbeOutcome::Unreachable { .. }));
    }

    #[test]
    fn test_result_display() {
        let result = ProbeResult {
            name: "health",
            url: "http://localhost:8000/health".to_string(),
            outcome: ProbeOutcome::Success { status: 200 },
            elapsed: Duration::from_millis(12),
        };
        let line = result.to_string();
        assert!(line.starts_with("SUCCESS"));
        assert!(line.contains("200"));
        assert!(line.ends_with("http://localhost:8000/health"));
    }
}
