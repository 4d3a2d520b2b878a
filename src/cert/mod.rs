pub mod extensions;
pub mod params;

use crate::error::CertSmithError;
pub type Result<T> = std::result::Result<T, CertSmithError>;

use der::{Decode, Encode, EncodePem};
use x509_cert::certificate::CertificateInner;

use crate::config::DigestAlgorithm;

/// Signature algorithms supported for certificates and CSRs.
///
/// The pipeline only signs with RSA, so the variants are the three digest
/// choices over PKCS#1 v1.5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureAlgorithm {
    /// SHA-256 with RSA encryption.
    Sha256WithRsa,
    /// SHA-384 with RSA encryption.
    Sha384WithRsa,
    /// SHA-512 with RSA encryption.
    Sha512WithRsa,
}

impl From<DigestAlgorithm> for SignatureAlgorithm {
    fn from(value: DigestAlgorithm) -> Self {
        match value {
            DigestAlgorithm::Sha256 => SignatureAlgorithm::Sha256WithRsa,
            DigestAlgorithm::Sha384 => SignatureAlgorithm::Sha384WithRsa,
            DigestAlgorithm::Sha512 => SignatureAlgorithm::Sha512WithRsa,
        }
    }
}

impl From<SignatureAlgorithm> for x509_cert::spki::AlgorithmIdentifierOwned {
    /// Maps the algorithm to its OID. RFC 4055 requires the parameters
    /// field to be an explicit NULL for the RSA signature algorithms.
    fn from(value: SignatureAlgorithm) -> Self {
        let oid = match value {
            SignatureAlgorithm::Sha256WithRsa => {
                const_oid::db::rfc5912::SHA_256_WITH_RSA_ENCRYPTION
            }
            SignatureAlgorithm::Sha384WithRsa => {
                const_oid::db::rfc5912::SHA_384_WITH_RSA_ENCRYPTION
            }
            SignatureAlgorithm::Sha512WithRsa => {
                const_oid::db::rfc5912::SHA_512_WITH_RSA_ENCRYPTION
            }
        };
        x509_cert::spki::AlgorithmIdentifierOwned {
            oid,
            parameters: Some(der::Any::from(der::AnyRef::NULL)),
        }
    }
}

/// Represents an issued X.509 certificate.
#[derive(Debug, Clone)]
pub struct Certificate {
    /// The inner representation of the certificate.
    pub inner: CertificateInner,
}

impl Certificate {
    /// Encodes the certificate into DER format.
    pub fn to_der(&self) -> Result<Vec<u8>> {
        self.inner
            .to_der()
            .map_err(|e| CertSmithError::Generation(format!("Failed to encode certificate: {e}")))
    }

    /// Encodes the certificate into PEM format.
    pub fn to_pem(&self) -> Result<String> {
        self.inner
            .to_pem(pkcs8::LineEnding::LF)
            .map_err(|e| CertSmithError::Generation(format!("Failed to encode certificate: {e}")))
    }

    /// Decodes a certificate from DER bytes.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let inner = CertificateInner::from_der(der).map_err(|e| {
            CertSmithError::Generation(format!("Failed to parse certificate: {e}"))
        })?;
        Ok(Certificate { inner })
    }
}
