//! Classification with an optional threat-oracle lookup.

use crate::client::ThreatOracle;
use scanlens_core::{classify, merge_remote, CheckedClassification};

/// Whether a classification may consult the threat oracle.
#[derive(Clone, Copy)]
pub enum RemoteCheck<'a> {
    Skip,
    Perform(&'a dyn ThreatOracle),
}

/// Local classification, then the oracle verdict for URLs when `remote` allows it.
///
/// Local scoring is the same as [`scanlens_core::classify`]; a risky verdict
/// only raises the level and appends reasons. Non-URL payloads are never sent.
pub async fn classify_checked(
    raw: &str,
    hint: Option<&str>,
    remote: RemoteCheck<'_>,
) -> CheckedClassification {
    let mut classification = classify(raw, hint);

    let verdict = match remote {
        RemoteCheck::Perform(oracle) if classification.is_url => {
            Some(oracle.check(&classification.normalized).await)
        }
        _ => None,
    };

    if let Some(verdict) = &verdict {
        merge_remote(&mut classification, verdict);
    }

    CheckedClassification {
        classification,
        remote: verdict,
    }
}

pub async fn classify_online(
    raw: &str,
    hint: Option<&str>,
    oracle: &dyn ThreatOracle,
) -> CheckedClassification {
    classify_checked(raw, hint, RemoteCheck::Perform(oracle)).await
}
