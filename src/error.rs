//! use certsmith::error::CertSmithError;

use thiserror::Error;

/// Represents errors that can occur in the certsmith library.
///
/// The three variants mirror the three failure domains of the tool:
/// configuration resolution, cryptographic generation, and filesystem
/// output. The binary maps each variant to its own process exit code.
#[derive(Debug, Error, Clone)]
pub enum CertSmithError {
    /// Invalid DN/config input, unsupported enumerated values, or bad mode
    /// selection. Raised before any cryptographic work begins.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Key generation, CSR/certificate construction or signing, PEM
    /// serialization, or certificate parse failure.
    #[error("Generation error: {0}")]
    Generation(String),

    /// Output directory or file cannot be created or written. Never raised
    /// by the core pipeline itself.
    #[error("Output error: {0}")]
    Output(String),
}

impl From<der::Error> for CertSmithError {
    fn from(err: der::Error) -> Self {
        CertSmithError::Generation(err.to_string())
    }
}

impl From<rsa::Error> for CertSmithError {
    fn from(err: rsa::Error) -> Self {
        CertSmithError::Generation(err.to_string())
    }
}

impl From<rsa::signature::Error> for CertSmithError {
    fn from(err: rsa::signature::Error) -> Self {
        CertSmithError::Generation(err.to_string())
    }
}

impl From<pkcs8::Error> for CertSmithError {
    fn from(err: pkcs8::Error) -> Self {
        CertSmithError::Generation(err.to_string())
    }
}

impl From<serde_json::Error> for CertSmithError {
    fn from(err: serde_json::Error) -> Self {
        CertSmithError::Config(err.to_string())
    }
}
