// src/remote/models.rs
#![allow(dead_code)]
use serde::Deserialize;

/// Response body of the AI service's `/parse-resume-file` endpoint.
///
/// The five top-level fields are required: the service always sends them,
/// so a 2xx body without this shape is treated as malformed and triggers
/// the local fallback. Inner fields are best-effort and default to empty.
#[derive(Debug, Deserialize)]
pub struct RemoteResume {
    pub personal_info: RemotePersonalInfo,
    pub experience: Vec<RemoteExperience>,
    pub education: Vec<RemoteEducation>,
    pub skills: Vec<RemoteSkill>,
    pub certificates: Vec<RemoteCertificate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RemotePersonalInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct RemoteExperience {
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    /// Combined range like "2019 - 2021" or "2022 - Present".
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct RemoteEducation {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub year: String,
}

/// One skill tagged with the service's category taxonomy:
/// programming/databases/cloud/tools/soft_skills.
#[derive(Debug, Default, Deserialize)]
pub struct RemoteSkill {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct RemoteCertificate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default, rename = "certificateId")]
    pub certificate_id: String,
    #[serde(default)]
    pub date: String,
}
