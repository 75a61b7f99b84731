// src/extractors/experience.rs

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extractors::config::ExtractorConfig;
use crate::extractors::section::SectionLocator;
use crate::profile::ExperienceEntry;

// Year range separated by hyphen or en-dash; the right side may be a
// "present"/"current" marker instead of a year.
static DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d{4})\s*[-–]\s*(\d{4}|present|current)")
        .expect("Failed to compile DURATION_RE")
});

// A proper-noun phrase: letters, ampersand, period, comma, hyphen, spaces
// only (which also rules out "@" and digits).
static COMPANY_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z&.,\- ]{2,}$").expect("Failed to compile COMPANY_LINE_RE")
});

const DESCRIPTION_MAX_CHARS: usize = 400;

pub struct ExperienceExtractor {
    locator: SectionLocator,
    role_keywords: Vec<String>,
}

impl ExperienceExtractor {
    pub fn new(config: &ExtractorConfig) -> Self {
        Self {
            locator: SectionLocator::new(
                &config.experience_aliases,
                &config.experience_terminators,
            ),
            role_keywords: config.role_keywords.clone(),
        }
    }

    pub fn extract(&self, text: &str) -> Vec<ExperienceEntry> {
        self.locator
            .entries(text)
            .into_iter()
            .filter_map(|entry| self.parse_entry(entry))
            .collect()
    }

    fn parse_entry(&self, entry: &str) -> Option<ExperienceEntry> {
        let lines: Vec<&str> = entry
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let position = lines
            .iter()
            .find(|line| {
                let lower = line.to_lowercase();
                self.role_keywords.iter().any(|kw| lower.contains(kw))
            })
            .or(lines.first())
            .map(|line| line.to_string())
            .unwrap_or_default();

        let company = lines
            .iter()
            .find(|line| {
                COMPANY_LINE_RE.is_match(line) && line.chars().any(char::is_alphabetic)
            })
            .map(|line| line.to_string())
            .unwrap_or_default();

        if position.is_empty() && company.is_empty() {
            return None;
        }

        let mut parsed = ExperienceEntry::new();
        parsed.position = position;
        parsed.company = company;
        parsed.description = entry.chars().take(DESCRIPTION_MAX_CHARS).collect();

        if let Some(caps) = DURATION_RE.captures(entry) {
            let end = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
            parsed.start_date = caps.get(1).map(|m| m.as_str()).unwrap_or_default().to_string();
            // End marker keeps its input casing ("Present" stays "Present").
            parsed.end_date = end.to_string();
            parsed.current =
                end.eq_ignore_ascii_case("present") || end.eq_ignore_ascii_case("current");
        }

        Some(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> ExperienceExtractor {
        ExperienceExtractor::new(&ExtractorConfig::default())
    }

    const SECTION: &str = "Experience\nAcme Corp\nSoftware Engineer\n2019 - 2021\n\n\
                           Beta Designs\nUX Designer\n2022 - Present\nShipped the redesign\n\n\
                           Education\nXYZ University";

    #[test]
    fn parses_position_company_and_duration() {
        let entries = extractor().extract(SECTION);
        assert_eq!(entries.len(), 2);

        let first = &entries[0];
        assert_eq!(first.company, "Acme Corp");
        assert_eq!(first.position, "Software Engineer");
        assert_eq!(first.start_date, "2019");
        assert_eq!(first.end_date, "2021");
        assert!(!first.current);
        assert!(!first.proof_uploaded);
    }

    #[test]
    fn present_marker_sets_current_and_keeps_casing() {
        let entries = extractor().extract(SECTION);
        let second = &entries[1];
        assert!(second.current);
        assert_eq!(second.end_date, "Present");
        assert_eq!(second.start_date, "2022");
    }

    #[test]
    fn position_falls_back_to_first_line_without_role_keyword() {
        let text = "Experience\nHead of Operations\nAcme Corp\n2018 - 2019";
        let entries = extractor().extract(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].position, "Head of Operations");
    }

    #[test]
    fn description_is_capped_at_400_chars_of_raw_entry() {
        let long_line = "x".repeat(600);
        let text = format!("Experience\nAcme Corp\nEngineer\n{}", long_line);
        let entries = extractor().extract(&text);
        assert_eq!(entries[0].description.chars().count(), 400);
    }

    #[test]
    fn missing_section_yields_empty_list() {
        assert!(extractor().extract("John Smith\njohn@x.com").is_empty());
    }

    #[test]
    fn entry_ids_are_pairwise_distinct() {
        let entries = extractor().extract(SECTION);
        assert_ne!(entries[0].id, entries[1].id);
    }
}
