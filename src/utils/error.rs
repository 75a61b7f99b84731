// src/utils/error.rs
#![allow(dead_code)]
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String), // Extension the text converter does not recognize

    #[error("Failed to extract PDF text: {0}")]
    Pdf(String),

    #[error("Failed to extract DOCX text: {0}")]
    Docx(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reasons the remote AI service attempt did not produce a profile.
/// Never converted into `AppError`: a remote failure only selects the
/// local fallback branch and is logged along the way.
#[derive(Error, Debug)]
pub enum RemoteFailure {
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error), // Automatically convert reqwest errors

    #[error("HTTP error: {0}")]
    Http(reqwest::StatusCode), // e.g., 500 Internal Server Error

    #[error("Request timed out")]
    Timeout,

    #[error("Malformed response body: {0}")]
    MalformedResponse(String), // 2xx but the JSON shape is not the contract
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Text conversion failed: {0}")]
    Convert(#[from] ConvertError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
