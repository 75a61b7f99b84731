// src/extractors/section.rs

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

// Entries within a section are blank-line-delimited paragraphs.
static PARAGRAPH_SPLIT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n\s*\n").expect("Failed to compile PARAGRAPH_SPLIT_RE")
});

/// Locates the substring of raw text belonging to a named section, bounded
/// by a following section header or end of document.
///
/// Matching is case-insensitive and first-match-wins: the section body
/// starts after the leftmost occurrence of any header alias and runs until
/// the first occurrence of any terminator alias after that point.
pub struct SectionLocator {
    header: Regex,
    terminator: Regex,
}

impl SectionLocator {
    pub fn new(aliases: &[String], terminators: &[String]) -> Self {
        Self {
            header: alternation(aliases),
            terminator: alternation(terminators),
        }
    }

    /// Returns the section body, or empty when the header is absent.
    /// Callers produce an empty list of entries in that case, never an error.
    pub fn locate<'a>(&self, text: &'a str) -> &'a str {
        let header = match self.header.find(text) {
            Some(m) => m,
            None => return "",
        };
        let body = &text[header.end()..];
        match self.terminator.find(body) {
            Some(m) => &body[..m.start()],
            None => body,
        }
    }

    /// Blank-line-delimited entries of the section, trimmed, with empty
    /// paragraphs discarded.
    pub fn entries<'a>(&self, text: &'a str) -> Vec<&'a str> {
        split_entries(self.locate(text))
    }
}

pub fn split_entries(section: &str) -> Vec<&str> {
    PARAGRAPH_SPLIT_RE
        .split(section)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect()
}

fn alternation(aliases: &[String]) -> Regex {
    let pattern = aliases
        .iter()
        .map(|alias| regex::escape(alias))
        .collect::<Vec<_>>()
        .join("|");
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .expect("Failed to compile section alias pattern")
}
