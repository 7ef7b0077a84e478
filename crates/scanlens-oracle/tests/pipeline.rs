use scanlens_core::{classify, RemoteRiskResult, RiskLevel};
use scanlens_oracle::{classify_checked, classify_online, RemoteCheck, ThreatOracle};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Returns a fixed verdict and counts calls.
struct FixedOracle {
    verdict: RemoteRiskResult,
    calls: AtomicUsize,
}

impl FixedOracle {
    fn new(verdict: RemoteRiskResult) -> Self {
        Self {
            verdict,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait::async_trait]
impl ThreatOracle for FixedOracle {
    async fn check(&self, _url: &str) -> RemoteRiskResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.verdict.clone()
    }
}

#[tokio::test]
async fn skip_matches_sync_entry_point() {
    for input in [
        "https://example.com",
        "http://example.com/login",
        "https://bad.xyz/freegift",
        "claim your free gift now",
        "WIFI:S:x;P:y;;",
    ] {
        let checked = classify_checked(input, None, RemoteCheck::Skip).await;
        assert_eq!(checked.classification, classify(input, None), "{input}");
        assert_eq!(checked.remote, None);
    }
}

#[tokio::test]
async fn failed_check_is_reported_not_hidden() {
    let oracle = FixedOracle::new(RemoteRiskResult::failed("network"));
    let checked = classify_online("https://example.com", None, &oracle).await;

    assert_eq!(oracle.calls.load(Ordering::SeqCst), 1);
    assert_eq!(checked.classification.level, Some(RiskLevel::Secure));
    assert!(checked.remote.as_ref().is_some_and(RemoteRiskResult::is_unknown));
}

#[tokio::test]
async fn each_call_checks_independently() {
    let oracle = FixedOracle::new(RemoteRiskResult {
        is_risky: true,
        ..Default::default()
    });

    let (a, b) = tokio::join!(
        classify_online("https://evil.com", None, &oracle),
        classify_online("https://evil.com", None, &oracle),
    );

    assert_eq!(oracle.calls.load(Ordering::SeqCst), 2);
    assert_eq!(a, b);
    assert_eq!(a.classification.level, Some(RiskLevel::Unsafe));
}
