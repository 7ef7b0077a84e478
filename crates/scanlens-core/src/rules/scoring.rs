use crate::model::ReasonCode;
use crate::rules::builtin::SUSPICIOUS_KEYWORDS;
use crate::rules::grade::calculate_level;
use crate::scoring::RiskAssessment;

pub const KEYWORD_WEIGHT: u32 = 1;
pub const MAX_KEYWORD_HITS: u32 = 3;

/// Number of distinct suspicious keywords contained in `lowered`.
pub fn count_keyword_hits(lowered: &str) -> u32 {
    SUSPICIOUS_KEYWORDS
        .iter()
        .filter(|keyword| lowered.contains(*keyword))
        .count() as u32
}

/// Capped keyword contribution. Shared by the URL scorer and the text fallback.
pub fn keyword_score(lowered: &str) -> u32 {
    KEYWORD_WEIGHT * count_keyword_hits(lowered).min(MAX_KEYWORD_HITS)
}

/// Keyword-only assessment used for free text.
pub fn assess_text(text: &str) -> RiskAssessment {
    let score = keyword_score(&text.to_lowercase());
    let reasons = if score > 0 {
        vec![ReasonCode::SuspiciousKeywords]
    } else {
        Vec::new()
    };

    RiskAssessment {
        score,
        level: calculate_level(score),
        reasons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::grade::RiskLevel;

    #[test]
    fn hits_are_capped() {
        assert_eq!(count_keyword_hits("login verify account password"), 4);
        assert_eq!(keyword_score("login verify account password"), 3);
    }

    #[test]
    fn plain_text_is_secure() {
        let assessment = assess_text("see you at the station at noon");
        assert_eq!(assessment.score, 0);
        assert_eq!(assessment.level, RiskLevel::Secure);
        assert!(assessment.reasons.is_empty());
    }

    #[test]
    fn lure_text_is_suspicious() {
        let assessment = assess_text("Claim your FREE gift now");
        assert_eq!(assessment.score, 3);
        assert_eq!(assessment.level, RiskLevel::Suspicious);
        assert_eq!(assessment.reasons, vec![ReasonCode::SuspiciousKeywords]);
    }
}
