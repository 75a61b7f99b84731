// src/extractors/skills.rs

use std::collections::HashSet;

use crate::extractors::config::ExtractorConfig;
use crate::profile::SkillSet;

pub struct SkillExtractor {
    vocabulary: Vec<String>,
}

impl SkillExtractor {
    pub fn new(config: &ExtractorConfig) -> Self {
        Self {
            vocabulary: config.skill_vocabulary.clone(),
        }
    }

    /// Lowercases the whole text and checks containment (not word-boundary)
    /// against the vocabulary. Hits are capitalized and deduplicated in
    /// order of first appearance. Soft skills are never populated locally.
    pub fn extract(&self, text: &str) -> SkillSet {
        let lower = text.to_lowercase();
        let mut seen = HashSet::new();
        let mut technical = Vec::new();

        for term in &self.vocabulary {
            let term_lower = term.to_lowercase();
            if lower.contains(term_lower.as_str()) && seen.insert(term_lower) {
                technical.push(capitalize(term));
            }
        }

        SkillSet {
            technical,
            soft: Vec::new(),
        }
    }
}

fn capitalize(term: &str) -> String {
    let mut chars = term.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
