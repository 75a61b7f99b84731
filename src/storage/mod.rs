// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::profile::CandidateProfile;
use crate::utils::error::StorageError;

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// Saves the extracted profile as pretty-printed JSON named after the
    /// source document, e.g. `resume_profile.json` for `resume.pdf`.
    pub fn save_profile(
        &self,
        profile: &CandidateProfile,
        source_name: &str,
    ) -> Result<PathBuf, StorageError> {
        let file_path = self
            .base_dir
            .join(format!("{}_profile.json", file_stem(source_name)));

        let json = serde_json::to_string_pretty(profile)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, json).map_err(StorageError::IoError)?;

        tracing::info!("Saved profile to {}", file_path.display());

        Ok(file_path)
    }

    /// Saves metadata about the extraction in JSON format
    pub fn save_metadata(
        &self,
        profile: &CandidateProfile,
        source_name: &str,
    ) -> Result<PathBuf, StorageError> {
        let file_path = self
            .base_dir
            .join(format!("{}_profile_meta.json", file_stem(source_name)));

        let metadata = serde_json::json!({
            "source_file": source_name,
            "experience_entries": profile.experience.len(),
            "education_entries": profile.education.len(),
            "technical_skills": profile.skills.technical.len(),
            "certificates": profile.certificates.len(),
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, metadata_str).map_err(StorageError::IoError)?;

        tracing::info!("Saved metadata to {}", file_path.display());

        Ok(file_path)
    }
}

fn file_stem(source_name: &str) -> &str {
    Path::new(source_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("resume")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_profile_and_metadata_next_to_each_other() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(dir.path()).unwrap();

        let mut profile = CandidateProfile::default();
        profile.personal_info.name = "John Smith".to_string();

        let profile_path = storage.save_profile(&profile, "resume.pdf").unwrap();
        let meta_path = storage.save_metadata(&profile, "resume.pdf").unwrap();

        assert!(profile_path.ends_with("resume_profile.json"));
        assert!(meta_path.ends_with("resume_profile_meta.json"));

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&profile_path).unwrap()).unwrap();
        assert_eq!(written["personalInfo"]["name"], "John Smith");

        let meta: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&meta_path).unwrap()).unwrap();
        assert_eq!(meta["source_file"], "resume.pdf");
        assert_eq!(meta["experience_entries"], 0);
    }

    #[test]
    fn creates_missing_base_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/c");
        let storage = StorageManager::new(&nested).unwrap();
        storage
            .save_profile(&CandidateProfile::default(), "cv.docx")
            .unwrap();
        assert!(nested.join("cv_profile.json").exists());
    }
}
