// src/extractors/education.rs

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extractors::config::ExtractorConfig;
use crate::extractors::section::SectionLocator;
use crate::profile::EducationEntry;

// 4-digit years in the 1900-2099 range.
static YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("Failed to compile YEAR_RE"));

pub struct EducationExtractor {
    locator: SectionLocator,
    degree_keywords: Vec<String>,
    institution_keywords: Vec<String>,
}

impl EducationExtractor {
    pub fn new(config: &ExtractorConfig) -> Self {
        Self {
            locator: SectionLocator::new(
                &config.education_aliases,
                &config.education_terminators,
            ),
            degree_keywords: config.degree_keywords.clone(),
            institution_keywords: config.institution_keywords.clone(),
        }
    }

    pub fn extract(&self, text: &str) -> Vec<EducationEntry> {
        self.locator
            .entries(text)
            .into_iter()
            .filter_map(|entry| self.parse_entry(entry))
            .collect()
    }

    /// Entries without a degree keyword are silently dropped.
    fn parse_entry(&self, entry: &str) -> Option<EducationEntry> {
        let lower = entry.to_lowercase();
        self.degree_keywords
            .iter()
            .find(|kw| lower.contains(kw.as_str()))?;

        let degree = entry
            .lines()
            .map(str::trim)
            .find(|line| {
                let line_lower = line.to_lowercase();
                self.degree_keywords.iter().any(|kw| line_lower.contains(kw.as_str()))
            })
            .unwrap_or_default()
            .to_string();

        let institution = entry
            .lines()
            .map(str::trim)
            .find(|line| {
                let line_lower = line.to_lowercase();
                self.institution_keywords
                    .iter()
                    .any(|kw| line_lower.contains(kw.as_str()))
            })
            .unwrap_or_default()
            .to_string();

        // The last year anywhere in the entry, not necessarily adjacent to
        // the degree. No start date is derived.
        let end_date = YEAR_RE
            .find_iter(entry)
            .last()
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        let mut parsed = EducationEntry::new();
        parsed.degree = degree;
        parsed.institution = institution;
        parsed.end_date = end_date;
        Some(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> EducationExtractor {
        EducationExtractor::new(&ExtractorConfig::default())
    }

    #[test]
    fn parses_degree_institution_and_last_year() {
        let text = "Education\nXYZ University\nBachelor of Technology\n2015 - 2019";
        let entries = extractor().extract(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].institution, "XYZ University");
        assert_eq!(entries[0].degree, "Bachelor of Technology");
        assert_eq!(entries[0].end_date, "2019");
        assert_eq!(entries[0].start_date, "");
    }

    #[test]
    fn entries_without_degree_keyword_are_dropped() {
        let text = "Education\nSpringfield High School\n2010 - 2014\n\n\
                    MBA\nState College\n2016";
        let entries = extractor().extract(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].degree, "MBA");
        assert_eq!(entries[0].institution, "State College");
        assert_eq!(entries[0].end_date, "2016");
    }

    #[test]
    fn abbreviated_degrees_match_case_insensitively() {
        let text = "Education\nIIT Bombay Institute\nB.Tech in Computer Science\n2021";
        let entries = extractor().extract(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].degree, "B.Tech in Computer Science");
    }

    #[test]
    fn years_outside_1900_2099_are_ignored() {
        let text = "Education\nOxford College\nMaster of Arts\nfounded 1096, class of 2018";
        let entries = extractor().extract(text);
        assert_eq!(entries[0].end_date, "2018");
    }

    #[test]
    fn missing_section_yields_empty_list() {
        assert!(extractor().extract("no schooling mentioned").is_empty());
    }
}
