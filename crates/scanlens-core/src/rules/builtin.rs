//! Curated lookup tables consulted by the URL risk rules.
//!
//! All tables are lowercase and immutable.

/// Substrings that show up in phishing and lure links.
pub const SUSPICIOUS_KEYWORDS: &[&str] = &[
    // account takeover
    "login",
    "log-in",
    "signin",
    "sign-in",
    "verify",
    "verification",
    "account",
    "update",
    "password",
    "passwd",
    "confirm",
    "unlock",
    "suspend",
    "banking",
    "wallet",
    "invoice",
    "refund",
    "urgent",
    // lures
    "free",
    "gift",
    "bonus",
    "prize",
    "winner",
    "reward",
    "claim",
    "lucky",
    "airdrop",
    "crypto",
    // tr
    "giris",
    "sifre",
    "hediye",
    "kazan",
    "bedava",
    "odul",
    "kampanya",
];

/// TLDs with a poor abuse-to-registration ratio.
pub const LOW_TRUST_TLDS: &[&str] = &[
    "xyz", "top", "tk", "ml", "ga", "cf", "gq", "work", "click", "link", "zip", "mov", "country",
    "kim", "loan", "men", "party", "review", "stream", "download", "racing", "win", "bid", "trade",
    "date", "faith", "science", "rest", "fit", "cam", "icu", "buzz", "monster", "quest", "sbs",
    "cfd",
];

pub const SHORTENER_DOMAINS: &[&str] = &[
    "bit.ly",
    "tinyurl.com",
    "t.co",
    "goo.gl",
    "ow.ly",
    "is.gd",
    "v.gd",
    "buff.ly",
    "cutt.ly",
    "rebrand.ly",
    "shorturl.at",
    "tiny.cc",
    "rb.gy",
    "s.id",
    "t.ly",
    "bl.ink",
    "lnkd.in",
    "qrco.de",
];

pub const EXECUTABLE_EXTENSIONS: &[&str] = &[
    "apk", "exe", "msi", "dmg", "pkg", "deb", "rpm", "appx", "ipa",
];

/// Hosts that legitimately serve installers. Subdomains are included.
pub const OFFICIAL_DISTRIBUTION_HOSTS: &[&str] = &[
    "play.google.com",
    "dl.google.com",
    "apps.apple.com",
    "itunes.apple.com",
    "download.microsoft.com",
    "store.microsoft.com",
    "github.com",
    "objects.githubusercontent.com",
    "f-droid.org",
];

/// Brand token and the canonical registrable domain the brand owns.
pub const BRANDS: &[(&str, &str)] = &[
    ("paypal", "paypal.com"),
    ("apple", "apple.com"),
    ("icloud", "icloud.com"),
    ("google", "google.com"),
    ("microsoft", "microsoft.com"),
    ("office365", "office.com"),
    ("amazon", "amazon.com"),
    ("facebook", "facebook.com"),
    ("instagram", "instagram.com"),
    ("whatsapp", "whatsapp.com"),
    ("netflix", "netflix.com"),
    ("linkedin", "linkedin.com"),
    ("binance", "binance.com"),
    ("coinbase", "coinbase.com"),
    ("dhl", "dhl.com"),
    ("fedex", "fedex.com"),
    ("garanti", "garantibbva.com.tr"),
    ("akbank", "akbank.com"),
    ("ziraat", "ziraatbank.com.tr"),
    ("isbank", "isbank.com.tr"),
    ("yapikredi", "yapikredi.com.tr"),
    ("turkcell", "turkcell.com.tr"),
    ("edevlet", "turkiye.gov.tr"),
    ("trendyol", "trendyol.com"),
    ("hepsiburada", "hepsiburada.com"),
];

/// Public suffixes spanning two labels. Used when deriving a base domain.
pub const MULTI_LABEL_SUFFIXES: &[&str] = &[
    "co.uk", "org.uk", "ac.uk", "gov.uk", "me.uk", "com.tr", "net.tr", "org.tr", "gov.tr",
    "edu.tr", "bel.tr", "av.tr", "com.au", "net.au", "org.au", "co.jp", "ne.jp", "or.jp",
    "co.nz", "com.br", "com.cn", "co.in", "co.za", "com.mx", "co.kr", "com.sg", "com.ar",
];

/// Matches `host` against `domain` exactly or as a dot-separated subdomain.
pub fn host_matches(host: &str, domain: &str) -> bool {
    host == domain
        || host
            .strip_suffix(domain)
            .is_some_and(|prefix| prefix.ends_with('.'))
}
