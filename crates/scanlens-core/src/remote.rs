use crate::model::{ClassificationResult, Reason, ReasonCode, RemoteRiskResult, SourceReason};
use crate::rules::grade::RiskLevel;

/// Folds a threat-oracle verdict into a local result.
///
/// Only a risky verdict changes anything: the level becomes unsafe whatever
/// the local score, and the reasons gain the blacklist code, the oracle's
/// message and at most one source attribution. The local score is kept.
pub fn merge_remote(result: &mut ClassificationResult, remote: &RemoteRiskResult) {
    if !remote.is_risky || remote.is_unknown() {
        return;
    }

    result.level = Some(RiskLevel::Unsafe);
    if !result.has_reason(ReasonCode::RemoteBlacklist) {
        result.reasons.push(Reason::Code(ReasonCode::RemoteBlacklist));
    }
    if let Some(message) = remote.message.as_deref().filter(|m| !m.trim().is_empty()) {
        result.reasons.push(Reason::Note(message.trim().to_string()));
    }
    if let Some(source) = source_attribution(remote) {
        result.reasons.push(Reason::Source(source));
    }
}

fn source_attribution(remote: &RemoteRiskResult) -> Option<SourceReason> {
    let checked_domain = remote.checked_domain.clone();

    if let Some(details) = &remote.usom_details {
        return Some(SourceReason::Usom {
            checked_domain,
            details: details.clone(),
        });
    }

    match &remote.found_in_files {
        Some(files) if !files.is_empty() => Some(SourceReason::Github {
            checked_domain,
            files: files.clone(),
        }),
        _ => None,
    }
}
