//! The certificate generation pipeline.
//!
//! One run flows a validated [`GenerationRequest`] through name building,
//! key generation, CSR construction, and self-signed issuance, then
//! serializes the results to PEM. Each stage runs to completion before the
//! next begins; the pipeline holds no shared mutable state across runs.

use std::path::Path;

use crate::cert::Certificate;
use crate::config::{self, GenerationRequest, PassphrasePolicy};
use crate::csr::Csr;
use crate::error::CertSmithError;
use crate::issuer;
use crate::key::KeyPair;

type Result<T> = std::result::Result<T, CertSmithError>;

/// In-memory artifacts of one pipeline run.
///
/// Owns the key material exclusively; it exists only between generation and
/// serialization and is discarded afterwards.
pub struct CertificateBundle {
    pub key_pair: KeyPair,
    pub csr: Csr,
    pub certificate: Certificate,
}

/// The serialized, durable output of one pipeline run: three independently
/// valid PEM documents. Writing them anywhere is the caller's concern.
#[derive(Debug, Clone)]
pub struct PemArtifactSet {
    pub certificate_pem: String,
    pub csr_pem: String,
    pub private_key_pem: String,
}

/// Generates the key pair, CSR, and self-signed certificate for a request.
pub fn generate(request: &GenerationRequest) -> Result<CertificateBundle> {
    let subject = request.dn.to_x509_name()?;
    let key_pair = KeyPair::generate(request.config.private_key_bits)?;
    let csr = Csr::build(
        &subject,
        &key_pair,
        request.config.digest_alg,
        &request.subject_alt_names,
    )?;
    let certificate = issuer::issue_self_signed(&csr, &key_pair, &request.config)?;

    Ok(CertificateBundle {
        key_pair,
        csr,
        certificate,
    })
}

/// Serializes a bundle into PEM form, protecting the private key when the
/// policy requires it. Performs no I/O.
pub fn serialize(bundle: &CertificateBundle, policy: &PassphrasePolicy) -> Result<PemArtifactSet> {
    let private_key_pem = match policy {
        PassphrasePolicy::Plaintext => bundle.key_pair.to_pkcs8_pem()?,
        PassphrasePolicy::Encrypted(passphrase) => {
            bundle.key_pair.to_encrypted_pkcs8_pem(passphrase)?
        }
    };

    Ok(PemArtifactSet {
        certificate_pem: bundle.certificate.to_pem()?,
        csr_pem: bundle.csr.to_pem()?,
        private_key_pem,
    })
}

/// Runs the full pipeline for one resolved request.
pub fn run(request: &GenerationRequest) -> Result<PemArtifactSet> {
    let bundle = generate(request)?;
    serialize(&bundle, &request.passphrase_policy)
}

/// Generates a PEM artifact set from a JSON configuration file.
pub fn generate_from_json_file(path: &Path) -> Result<PemArtifactSet> {
    run(&config::resolve_from_json_file(path, None)?)
}

/// Generates a PEM artifact set from an already parsed JSON document.
pub fn generate_from_json_value(value: &serde_json::Value) -> Result<PemArtifactSet> {
    run(&config::resolve_from_json_value(value, None)?)
}
