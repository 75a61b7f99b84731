// src/pipeline/mod.rs
use crate::convert::{mime_for, TextConverter};
use crate::extractors::{ExtractorConfig, LocalExtractor};
use crate::profile::CandidateProfile;
use crate::remote::{RemoteClient, RemoteOutcome};
use crate::utils::AppError;

/// Top-level extraction entry point.
///
/// Flow: file bytes -> text conversion (the one hard failure, on
/// unsupported formats) -> remote attempt when a client is configured ->
/// local heuristic fallback. Once raw text is available a profile is always
/// produced; the local path cannot fail the request.
pub struct ExtractionPipeline {
    converter: Box<dyn TextConverter>,
    remote: Option<RemoteClient>,
    local: LocalExtractor,
}

impl ExtractionPipeline {
    pub fn new(
        converter: Box<dyn TextConverter>,
        remote: Option<RemoteClient>,
        config: &ExtractorConfig,
    ) -> Self {
        Self {
            converter,
            remote,
            local: LocalExtractor::new(config),
        }
    }

    pub async fn extract(
        &self,
        bytes: &[u8],
        filename: &str,
    ) -> Result<CandidateProfile, AppError> {
        // UnsupportedFormat surfaces here, before any remote attempt.
        let text = self.converter.extract_text(bytes, filename)?;
        tracing::debug!("Converted {} to {} chars of raw text", filename, text.len());

        if let Some(remote) = &self.remote {
            match remote
                .parse_resume_file(bytes, filename, mime_for(filename))
                .await
            {
                RemoteOutcome::Parsed(profile) => {
                    tracing::info!("AI service parsed {} successfully", filename);
                    return Ok(profile);
                }
                RemoteOutcome::NeedsFallback(reason) => {
                    tracing::warn!(
                        "AI service unavailable for {} ({}), falling back to local extraction",
                        filename,
                        reason
                    );
                }
            }
        }

        Ok(self.local.parse(&text))
    }
}
