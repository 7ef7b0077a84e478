use crate::rules::builtin::MULTI_LABEL_SUFFIXES;

/// Registrable domain of `host`: the label before the public suffix plus the suffix.
///
/// A leading `www.` is ignored. Two-label suffixes such as `co.uk` are taken
/// from [`MULTI_LABEL_SUFFIXES`]; anything else is treated as a one-label TLD.
pub fn base_domain(host: &str) -> String {
    let host = host.trim_end_matches('.').to_ascii_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);
    let labels: Vec<&str> = host.split('.').filter(|l| !l.is_empty()).collect();

    let suffix_len = if labels.len() >= 3 {
        let last_two = labels[labels.len() - 2..].join(".");
        if MULTI_LABEL_SUFFIXES.contains(&last_two.as_str()) {
            2
        } else {
            1
        }
    } else {
        1
    };

    let keep = (suffix_len + 1).min(labels.len());
    labels[labels.len() - keep..].join(".")
}

/// Labels in front of the registrable domain.
pub fn subdomain_count(host: &str) -> usize {
    let total = host.trim_end_matches('.').split('.').count();
    let base = base_domain(host).split('.').count();
    let www = usize::from(host.to_ascii_lowercase().starts_with("www."));
    total.saturating_sub(base + www)
}

pub fn tld(host: &str) -> Option<&str> {
    host.trim_end_matches('.')
        .rsplit('.')
        .next()
        .filter(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_domain_strips_subdomains() {
        assert_eq!(base_domain("www.example.com"), "example.com");
        assert_eq!(base_domain("a.b.c.example.com"), "example.com");
        assert_eq!(base_domain("example.com"), "example.com");
        assert_eq!(base_domain("localhost"), "localhost");
    }

    #[test]
    fn base_domain_honors_multi_label_suffixes() {
        assert_eq!(base_domain("www.bbc.co.uk"), "bbc.co.uk");
        assert_eq!(base_domain("sube.garantibbva.com.tr"), "garantibbva.com.tr");
        assert_eq!(base_domain("co.uk"), "co.uk");
    }

    #[test]
    fn counts_subdomains() {
        assert_eq!(subdomain_count("example.com"), 0);
        assert_eq!(subdomain_count("www.example.com"), 0);
        assert_eq!(subdomain_count("a.b.example.com"), 2);
        assert_eq!(subdomain_count("a.b.c.d.e.shop.co.uk"), 5);
    }

    #[test]
    fn extracts_tld() {
        assert_eq!(tld("bad.xyz"), Some("xyz"));
        assert_eq!(tld("example.com."), Some("com"));
    }
}
