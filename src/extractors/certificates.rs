// src/extractors/certificates.rs

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extractors::config::ExtractorConfig;
use crate::profile::CertificateEntry;

// ID-like tokens, tried in fixed priority order over the context window:
// uppercase-hyphenated code, labeled id, "#"-prefixed code.
static CERT_ID_CODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Z]{2,}-[A-Z0-9][A-Z0-9-]*").expect("Failed to compile CERT_ID_CODE_RE")
});

static CERT_ID_LABEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:ID|Certificate|Cert)\s*:\s*([A-Za-z0-9-]+)")
        .expect("Failed to compile CERT_ID_LABEL_RE")
});

static CERT_ID_HASH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"#([A-Za-z0-9-]+)").expect("Failed to compile CERT_ID_HASH_RE")
});

static YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("Failed to compile YEAR_RE"));

const ID_WINDOW_CHARS: usize = 50;
const DATE_WINDOW_CHARS: usize = 30;

pub struct CertificateExtractor {
    patterns: Vec<Regex>,
    issuer_map: Vec<(String, String)>,
}

impl CertificateExtractor {
    pub fn new(config: &ExtractorConfig) -> Self {
        let patterns = config
            .certificate_patterns
            .iter()
            .filter_map(|pat| Regex::new(pat).ok()) // Skip patterns that fail to compile
            .collect();
        Self {
            patterns,
            issuer_map: config.issuer_map.clone(),
        }
    }

    /// Runs every pattern over the whole text and collects every match.
    /// Matches are appended per pattern and deliberately NOT deduplicated
    /// across patterns: a mention like "Microsoft Azure Administrator" can
    /// legitimately produce one entry per matching pattern.
    pub fn extract(&self, text: &str) -> Vec<CertificateEntry> {
        let mut certificates = Vec::new();

        for pattern in &self.patterns {
            for found in pattern.find_iter(text) {
                let name = found.as_str().trim();

                // Windows are anchored at the first occurrence of the
                // matched text, which may precede this match's own offsets
                // when the phrase repeats.
                let anchor = text.find(found.as_str()).unwrap_or(found.start());
                let anchor_end = anchor + found.as_str().len();

                let mut cert = CertificateEntry::new();
                cert.name = name.to_string();
                cert.issuer = self.issuer_for(name);
                cert.certificate_id =
                    certificate_id(char_window(text, anchor, anchor_end, ID_WINDOW_CHARS));
                cert.issue_date =
                    first_year(char_window(text, anchor, anchor_end, DATE_WINDOW_CHARS));
                certificates.push(cert);
            }
        }

        certificates
    }

    fn issuer_for(&self, name: &str) -> String {
        let lower = name.to_lowercase();
        self.issuer_map
            .iter()
            .find(|(keyword, _)| lower.contains(keyword.as_str()))
            .map(|(_, issuer)| issuer.clone())
            .unwrap_or_else(|| "Unknown".to_string())
    }
}

/// First ID-like token in the window, by fixed pattern priority.
fn certificate_id(window: &str) -> String {
    if let Some(m) = CERT_ID_CODE_RE.find(window) {
        return m.as_str().to_string();
    }
    if let Some(caps) = CERT_ID_LABEL_RE.captures(window) {
        return caps.get(1).map(|m| m.as_str()).unwrap_or_default().to_string();
    }
    if let Some(caps) = CERT_ID_HASH_RE.captures(window) {
        return caps.get(1).map(|m| m.as_str()).unwrap_or_default().to_string();
    }
    String::new()
}

fn first_year(window: &str) -> String {
    YEAR_RE
        .find(window)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Slice of `text` extending `radius` characters beyond [start, end),
/// clamped to char boundaries so multi-byte input cannot panic.
fn char_window(text: &str, start: usize, end: usize, radius: usize) -> &str {
    let mut lo = start.min(text.len());
    for _ in 0..radius {
        if lo == 0 {
            break;
        }
        lo -= 1;
        while lo > 0 && !text.is_char_boundary(lo) {
            lo -= 1;
        }
    }
    let mut hi = end.min(text.len());
    for _ in 0..radius {
        if hi >= text.len() {
            break;
        }
        hi += 1;
        while hi < text.len() && !text.is_char_boundary(hi) {
            hi += 1;
        }
    }
    &text[lo..hi]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::VERIFICATION_PENDING;

    fn extractor() -> CertificateExtractor {
        CertificateExtractor::new(&ExtractorConfig::default())
    }

    #[test]
    fn aws_certificate_without_nearby_id() {
        let certs = extractor().extract("AWS Certified Solutions Architect");
        assert_eq!(certs.len(), 1);
        let cert = &certs[0];
        assert_eq!(cert.name, "AWS Certified Solutions Architect");
        assert_eq!(cert.issuer, "Amazon Web Services");
        assert_eq!(cert.certificate_id, "");
        assert_eq!(cert.issue_date, "");
        assert_eq!(cert.verification_status, VERIFICATION_PENDING);
        assert!(!cert.verified);
    }

    #[test]
    fn picks_up_hyphenated_id_code_in_window() {
        let certs =
            extractor().extract("AWS Certified Developer Associate AWS-DA-2023-001234");
        assert_eq!(certs[0].certificate_id, "AWS-DA-2023-001234");
    }

    #[test]
    fn labeled_id_wins_when_no_code_is_present() {
        let certs = extractor().extract("Scrum Master cert: sm-998877 earned with honors");
        assert_eq!(certs[0].certificate_id, "sm-998877");
        assert_eq!(certs[0].issuer, "Scrum Alliance");
    }

    #[test]
    fn hash_prefixed_id_is_last_resort() {
        let certs = extractor().extract("PMP #9923 renewal pending");
        assert_eq!(certs[0].certificate_id, "9923");
        assert_eq!(certs[0].issuer, "Project Management Institute");
    }

    #[test]
    fn issue_date_is_first_year_in_narrow_window() {
        let certs = extractor().extract("Issued 2021: AWS Certified Machine Learning");
        assert_eq!(certs[0].issue_date, "2021");
    }

    #[test]
    fn year_outside_date_window_is_not_picked_up() {
        // The year sits more than 30 chars after the match.
        let text = format!(
            "AWS Certified Developer.{}obtained in the year 2019",
            "-".repeat(40)
        );
        let certs = extractor().extract(&text);
        assert_eq!(certs[0].issue_date, "");
    }

    #[test]
    fn unknown_issuer_falls_back_to_unknown() {
        let certs = extractor().extract("Six Sigma Green Belt training");
        assert!(!certs.is_empty());
        assert_eq!(certs[0].issuer, "Unknown");
    }

    // Documents the duplication behavior rather than fixing it: overlapping
    // mentions match both the Microsoft and Azure pattern families, and
    // each match becomes its own pending certificate.
    #[test]
    fn overlapping_patterns_yield_separate_entries() {
        let certs = extractor().extract("Microsoft Azure Administrator");
        assert_eq!(certs.len(), 2);
        let names: Vec<&str> = certs.iter().map(|c| c.name.as_str()).collect();
        assert!(names.contains(&"Microsoft Azure Administrator"));
        assert!(names.contains(&"Azure Administrator"));
        // Both resolve to the same issuer but remain distinct entries.
        assert!(certs.iter().all(|c| c.issuer == "Microsoft"));
        assert_ne!(certs[0].id, certs[1].id);
    }
}
