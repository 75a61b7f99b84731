// src/extractors/mod.rs
pub mod certificates;
pub mod config;
pub mod education;
pub mod experience;
pub mod personal;
pub mod section;
pub mod skills;

// Re-export key extraction types for convenience
#[allow(unused_imports)]
pub use config::ExtractorConfig;
#[allow(unused_imports)]
pub use section::{SectionLocator, split_entries};

use crate::profile::CandidateProfile;

/// The local heuristic extraction path: pure functions of the input text,
/// no shared mutable state, never fails. Absence of a pattern match simply
/// yields an empty field or entry.
pub struct LocalExtractor {
    personal: personal::PersonalInfoExtractor,
    experience: experience::ExperienceExtractor,
    education: education::EducationExtractor,
    skills: skills::SkillExtractor,
    certificates: certificates::CertificateExtractor,
}

impl LocalExtractor {
    pub fn new(config: &ExtractorConfig) -> Self {
        Self {
            personal: personal::PersonalInfoExtractor::new(),
            experience: experience::ExperienceExtractor::new(config),
            education: education::EducationExtractor::new(config),
            skills: skills::SkillExtractor::new(config),
            certificates: certificates::CertificateExtractor::new(config),
        }
    }

    pub fn parse(&self, text: &str) -> CandidateProfile {
        CandidateProfile {
            personal_info: self.personal.extract(text),
            experience: self.experience.extract(text),
            education: self.education.extract(text),
            skills: self.skills.extract(text),
            certificates: self.certificates.extract(text),
            ..CandidateProfile::default()
        }
    }
}
