// src/extractors/personal.rs

use once_cell::sync::Lazy;
use regex::Regex;

use crate::profile::PersonalInfo;

// Independent pattern scans over the entire text; first match wins for
// every field. No validation beyond the pattern itself.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .expect("Failed to compile EMAIL_RE")
});

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    // Optional country code, grouped digits, common separators.
    Regex::new(r"(\+\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4,5}")
        .expect("Failed to compile PHONE_RE")
});

static LINKEDIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)linkedin\.com/[A-Za-z0-9_/\-]+").expect("Failed to compile LINKEDIN_RE")
});

static GITHUB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)github\.com/[A-Za-z0-9_\-]+").expect("Failed to compile GITHUB_RE")
});

static LOCATION_RE: Lazy<Regex> = Lazy::new(|| {
    // Title-case "City, State" or "City, ST".
    Regex::new(r"([A-Z][a-z]+,\s*[A-Z][a-z]+)|([A-Z][a-z]+\s*,\s*[A-Z]{2})")
        .expect("Failed to compile LOCATION_RE")
});

const NAME_SCAN_LINES: usize = 10;
const NAME_MAX_TOKENS: usize = 5;

pub struct PersonalInfoExtractor;

impl PersonalInfoExtractor {
    pub fn new() -> Self {
        Self {}
    }

    pub fn extract(&self, text: &str) -> PersonalInfo {
        PersonalInfo {
            name: extract_name(text).unwrap_or_default(),
            email: first_match(&EMAIL_RE, text),
            phone: first_match(&PHONE_RE, text).trim().to_string(),
            location: first_match(&LOCATION_RE, text),
            linkedin: first_match(&LINKEDIN_RE, text),
            github: first_match(&GITHUB_RE, text),
        }
    }
}

fn first_match(re: &Regex, text: &str) -> String {
    re.find(text).map(|m| m.as_str().to_string()).unwrap_or_default()
}

/// Scans the first 10 non-empty lines for a plausible human name: no "@"
/// or digit, at least one letter, and 5 or fewer space-separated tokens.
fn extract_name(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(NAME_SCAN_LINES)
        .find(|line| {
            !line.contains('@')
                && !line.chars().any(|c| c.is_ascii_digit())
                && line.chars().any(char::is_alphabetic)
                && line.split_whitespace().count() <= NAME_MAX_TOKENS
        })
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_contact_fields_from_whole_text() {
        let text = "John Smith\njohn@x.com\n+1 555-123-4567\nMumbai, Maharashtra\n\
                    linkedin.com/in/jsmith\ngithub.com/jsmith\n";
        let info = PersonalInfoExtractor::new().extract(text);
        assert_eq!(info.name, "John Smith");
        assert_eq!(info.email, "john@x.com");
        assert_eq!(info.phone, "+1 555-123-4567");
        assert_eq!(info.location, "Mumbai, Maharashtra");
        assert_eq!(info.linkedin, "linkedin.com/in/jsmith");
        assert_eq!(info.github, "github.com/jsmith");
    }

    #[test]
    fn name_skips_lines_with_digits_or_at_signs() {
        let text = "+91 9876543210\nrahul@email.com\nRahul Sharma\n";
        let info = PersonalInfoExtractor::new().extract(text);
        assert_eq!(info.name, "Rahul Sharma");
    }

    #[test]
    fn name_rejects_lines_with_too_many_tokens() {
        let text = "Seasoned professional with a decade of shipping production software\n";
        let info = PersonalInfoExtractor::new().extract(text);
        assert_eq!(info.name, "");
    }

    #[test]
    fn absent_fields_default_to_empty_strings() {
        let info = PersonalInfoExtractor::new().extract("");
        assert_eq!(info, PersonalInfo::default());
    }

    #[test]
    fn malformed_but_pattern_shaped_email_still_passes() {
        // No validation beyond the regex: best-effort by design.
        let text = "contact: a@b.co\n";
        let info = PersonalInfoExtractor::new().extract(text);
        assert_eq!(info.email, "a@b.co");
    }
}
