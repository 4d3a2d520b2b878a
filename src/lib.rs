//! # Certsmith - Self-Signed Certificate Generation
//!
//! Certsmith issues self-signed X.509 certificates, the certificate signing
//! requests (CSRs) behind them, and the RSA key pairs backing both, from
//! either command-line parameters or JSON configuration. It is built
//! entirely with rustcrypto libraries and has no dependency on ring or
//! openssl.
//!
//! ## What One Run Produces
//!
//! Every generation run yields three independently valid PEM documents:
//!
//! - the self-signed certificate (`cert.pem`)
//! - the CSR it was issued from (`csr.pem`)
//! - the PKCS#8 private key, optionally passphrase-protected (`key.pem`)
//!
//! ## Pipeline
//!
//! Configuration resolution validates everything up front (common name
//! present, digest in the supported set, RSA-only key type, positive key
//! size and validity), so no key material is ever generated for an invalid
//! request. The validated request then flows through name building, RSA key
//! generation, CSR construction, and self-signed issuance, and the results
//! are serialized to PEM.
//!
//! ## Quick Start
//!
//! ### Generating from JSON configuration
//!
//! ```rust,no_run
//! use certsmith::{config, pipeline};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), certsmith::error::CertSmithError> {
//! let request = config::resolve_from_json_value(
//!     &json!({
//!         "commonName": "dev.local",
//!         "subject_alt_names": ["dev.local", "127.0.0.1"]
//!     }),
//!     None,
//! )?;
//!
//! let artifacts = pipeline::run(&request)?;
//! println!("{}", artifacts.certificate_pem);
//! # Ok(())
//! # }
//! ```
//!
//! ### Generating programmatically
//!
//! ```rust,no_run
//! use certsmith::cert::params::DistinguishedName;
//! use certsmith::config::{GenerationRequest, IssuanceConfig, PassphrasePolicy};
//! use certsmith::pipeline;
//!
//! # fn main() -> Result<(), certsmith::error::CertSmithError> {
//! let dn = DistinguishedName::builder()
//!     .common_name("server.internal".to_string())
//!     .organization("Example Corp".to_string())
//!     .country("US".to_string())
//!     .build();
//!
//! let request = GenerationRequest {
//!     dn,
//!     config: IssuanceConfig::default(),
//!     subject_alt_names: Vec::new(),
//!     passphrase_policy: PassphrasePolicy::Plaintext,
//! };
//!
//! let artifacts = pipeline::run(&request)?;
//! println!("{}", artifacts.private_key_pem);
//! # Ok(())
//! # }
//! ```
//!
//! ### Inspecting an existing certificate
//!
//! ```rust,no_run
//! use certsmith::inspect;
//!
//! # fn main() -> Result<(), certsmith::error::CertSmithError> {
//! let pem = std::fs::read("cert.pem").expect("readable file");
//! let report = inspect::inspect_pem(&pem)?;
//! println!("Subject: {}", report.subject);
//! println!("Valid until: {}", report.not_after);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`error::CertSmithError`], whose three
//! variants separate configuration problems (fix the input), generation
//! failures (cryptographic or encoding), and output failures (filesystem).
//! The CLI maps each variant to its own exit code.
//!
//! ## Module Organization
//!
//! - [`config`]: configuration resolution, merging, and validation
//! - [`cert`]: certificate representation, DN/name building, extensions
//! - [`key`]: RSA key generation, signing, PKCS#8 serialization
//! - [`csr`]: PKCS#10 certificate signing requests
//! - [`issuer`]: self-signed certificate issuance
//! - [`pipeline`]: the end-to-end generation pipeline
//! - [`inspect`]: the read path over existing PEM certificates
//! - [`output`]: filesystem output of PEM artifacts
//! - [`example`]: example configuration generation
//! - [`error`]: the common error type
//! - [`tbs_certificate`]: low-level certificate structure assembly

pub mod cert;
pub mod config;
pub mod csr;
pub mod error;
pub mod example;
pub mod inspect;
pub mod issuer;
pub mod key;
pub mod output;
pub mod pem_utils;
pub mod pipeline;
pub mod tbs_certificate;
