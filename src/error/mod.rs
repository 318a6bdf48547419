//! Error handling module

use std::path::PathBuf;

use thiserror::Error;

/// Key generation failures
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("Invalid key encoding: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),

    #[error("Keys must be exactly 32 bytes long, got {0}")]
    InvalidLength(usize),

    #[error("Key generation failed: {0}")]
    Generation(String),
}

/// Peer registration failures
#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("Invalid registration URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error: {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Malformed registration response: {0}")]
    MalformedResponse(String),
}

/// Config file persistence failures
#[derive(Error, Debug)]
pub enum SaveError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors surfaced by a single config generation
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Key generation error: {0}")]
    KeyGeneration(#[from] KeyError),

    #[error("Registration error: {0}")]
    Registration(#[from] RegistrationError),

    #[error("Save error: {0}")]
    Save(#[from] SaveError),
}

/// Configuration loading failures
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid server URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Server URL has no host: {0}")]
    MissingHost(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let err = RegistrationError::Status {
            status: reqwest::StatusCode::CONFLICT,
            body: "peer exists".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP error: 409 Conflict: peer exists");
    }

    #[test]
    fn test_generate_error_wraps_source() {
        let err: GenerateError = KeyError::InvalidLength(16).into();
        assert_eq!(
            err.to_string(),
            "Key generation error: Keys must be exactly 32 bytes long, got 16"
        );
    }
}
