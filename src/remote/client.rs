// src/remote/client.rs
use std::time::Duration;

use crate::profile::{
    CandidateProfile, CertificateEntry, EducationEntry, ExperienceEntry, PersonalInfo,
    SkillSet,
};
use crate::remote::models::RemoteResume;
use crate::utils::error::RemoteFailure;

/// The remote attempt is bounded; after this the caller falls back locally.
pub const REMOTE_TIMEOUT: Duration = Duration::from_secs(5);

/// Outcome of one remote parsing attempt. There is no hard-error branch:
/// anything short of a well-formed profile hands control to the fallback.
#[derive(Debug)]
pub enum RemoteOutcome {
    Parsed(CandidateProfile),
    NeedsFallback(RemoteFailure),
}

/// Client for the external AI parsing service.
pub struct RemoteClient {
    base_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl RemoteClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, REMOTE_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
            client: reqwest::Client::new(),
        }
    }

    /// POSTs the raw file as a multipart request and normalizes the response
    /// into the canonical profile shape. A single attempt, no retries.
    pub async fn parse_resume_file(
        &self,
        bytes: &[u8],
        filename: &str,
        mime: &str,
    ) -> RemoteOutcome {
        match self.attempt(bytes, filename, mime).await {
            Ok(profile) => RemoteOutcome::Parsed(profile),
            Err(failure) => RemoteOutcome::NeedsFallback(failure),
        }
    }

    async fn attempt(
        &self,
        bytes: &[u8],
        filename: &str,
        mime: &str,
    ) -> Result<CandidateProfile, RemoteFailure> {
        let url = format!("{}/parse-resume-file", self.base_url.trim_end_matches('/'));
        tracing::debug!("Posting resume to AI service: {}", url);

        let part = reqwest::multipart::Part::bytes(bytes.to_vec())
            .file_name(filename.to_string())
            .mime_str(mime)?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("AI service returned HTTP {} for {}", status, url);
            return Err(RemoteFailure::Http(status));
        }

        // The per-request timeout can also fire mid-body; keep it reported
        // as a timeout rather than a generic network failure.
        let body = response.text().await.map_err(classify_transport_error)?;
        let remote: RemoteResume = serde_json::from_str(&body)
            .map_err(|e| RemoteFailure::MalformedResponse(e.to_string()))?;

        Ok(normalize(remote))
    }
}

fn classify_transport_error(e: reqwest::Error) -> RemoteFailure {
    if e.is_timeout() {
        RemoteFailure::Timeout
    } else {
        RemoteFailure::Network(e)
    }
}

/// Remaps the service's response into the canonical profile: fresh entry
/// ids, combined durations split on " - ", and skills classified into
/// technical vs soft by category.
pub fn normalize(remote: RemoteResume) -> CandidateProfile {
    let personal_info = PersonalInfo {
        name: remote.personal_info.name,
        email: remote.personal_info.email,
        phone: remote.personal_info.phone,
        location: remote.personal_info.location,
        linkedin: remote.personal_info.linkedin,
        github: remote.personal_info.github,
    };

    let experience = remote
        .experience
        .into_iter()
        .map(|exp| {
            let (start_date, end_date) = split_duration(&exp.duration);
            let current = end_date.eq_ignore_ascii_case("present")
                || end_date.eq_ignore_ascii_case("current");
            let mut entry = ExperienceEntry::new();
            entry.position = exp.position;
            entry.company = exp.company;
            entry.location = exp.location;
            entry.start_date = start_date;
            entry.end_date = end_date;
            entry.current = current;
            entry.description = exp.description;
            entry
        })
        .collect();

    let education = remote
        .education
        .into_iter()
        .map(|edu| {
            let mut entry = EducationEntry::new();
            entry.degree = edu.degree;
            entry.institution = edu.institution;
            entry.end_date = edu.year;
            entry
        })
        .collect();

    let mut skills = SkillSet::default();
    for skill in remote.skills {
        if skill.name.is_empty() {
            continue;
        }
        let bucket = if is_soft_category(&skill.category) {
            &mut skills.soft
        } else {
            &mut skills.technical
        };
        if !bucket.iter().any(|s| s.eq_ignore_ascii_case(&skill.name)) {
            bucket.push(skill.name);
        }
    }

    let certificates = remote
        .certificates
        .into_iter()
        .map(|cert| {
            let mut entry = CertificateEntry::new();
            entry.name = cert.name;
            entry.issuer = cert.issuer;
            entry.certificate_id = cert.certificate_id;
            entry.issue_date = cert.date;
            entry
        })
        .collect();

    CandidateProfile {
        personal_info,
        experience,
        education,
        skills,
        certificates,
        ..CandidateProfile::default()
    }
}

// The technical buckets are programming/databases/cloud/tools; anything
// unrecognized stays technical so the shape remains stable.
fn is_soft_category(category: &str) -> bool {
    category.to_lowercase().contains("soft")
}

fn split_duration(duration: &str) -> (String, String) {
    match duration.split_once(" - ") {
        Some((start, end)) => (start.trim().to_string(), end.trim().to_string()),
        None => (duration.trim().to_string(), String::new()),
    }
}
