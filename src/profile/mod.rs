// src/profile/mod.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generates a fresh identifier for a profile entry. Every entry in
/// `experience`, `education`, and `certificates` gets its own, independent
/// of any other entry's id.
pub fn entry_id() -> String {
    Uuid::new_v4().to_string()
}

/// The canonical, UI-agnostic structured representation of a resume.
///
/// All fields default to empty strings/arrays, never null, so the shape
/// stays stable for downstream consumers. `professional_summary`,
/// `projects`, `awards`, and `languages` are present in the shape but never
/// populated by extraction; they are reserved for later profile editing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub personal_info: PersonalInfo,
    pub professional_summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: SkillSet,
    pub certificates: Vec<CertificateEntry>,
    pub projects: Vec<ProjectEntry>,
    pub awards: Vec<AwardEntry>,
    pub languages: Vec<LanguageEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub id: String,
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    /// "Present"/"current" literal (input casing) when `current` is true;
    /// not a parseable date in that case.
    pub end_date: String,
    pub current: bool,
    pub description: String,
    /// Always false at extraction time; flipped later by the verification flow.
    pub proof_uploaded: bool,
}

impl ExperienceEntry {
    pub fn new() -> Self {
        Self {
            id: entry_id(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub grade: String,
    pub location: String,
}

impl EducationEntry {
    pub fn new() -> Self {
        Self {
            id: entry_id(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSet {
    /// Deduplicated, order of first appearance.
    pub technical: Vec<String>,
    /// Only ever populated from the remote service's soft-skill category.
    pub soft: Vec<String>,
}

pub const VERIFICATION_PENDING: &str = "pending";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateEntry {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub certificate_id: String,
    pub issue_date: String,
    pub verification_status: String,
    pub verified: bool,
}

impl CertificateEntry {
    /// New certificates always start pending and unverified.
    pub fn new() -> Self {
        Self {
            id: entry_id(),
            verification_status: VERIFICATION_PENDING.to_string(),
            verified: false,
            ..Default::default()
        }
    }
}

// Reserved extension points below: carried in the canonical shape for the
// profile editor, never filled in by extraction.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub start_date: String,
    pub end_date: String,
    pub url: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardEntry {
    pub id: String,
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageEntry {
    pub name: String,
    pub proficiency: String,
}
