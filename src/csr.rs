use const_oid::ObjectIdentifier;
use der::asn1::{BitString, SetOfVec};
use der::{Any, Decode, Encode, EncodePem};
use tracing::debug;
use x509_cert::attr::{Attribute, Attributes};
use x509_cert::ext::Extension;
use x509_cert::name::Name;
use x509_cert::request::{CertReq, CertReqInfo, Version};

use crate::cert::SignatureAlgorithm;
use crate::cert::extensions::{SanEntry, SubjectAltName, ToAndFromX509Extension, to_x509_extension};
use crate::config::DigestAlgorithm;
use crate::error::CertSmithError;
use crate::key::KeyPair;

type Result<T> = std::result::Result<T, CertSmithError>;

/// PKCS#9 extensionRequest attribute (1.2.840.113549.1.9.14).
const EXTENSION_REQUEST: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.9.14");

/// A signed PKCS#10 certificate signing request.
///
/// The CSR is an intermediate artifact: its subject and SAN extension are
/// the ones the issuer copies into the certificate.
#[derive(Debug, Clone)]
pub struct Csr {
    pub inner: CertReq,
}

impl Csr {
    /// Builds and signs a CSR for the given subject and key pair.
    ///
    /// SAN entries, when present, are carried as a SubjectAltName extension
    /// inside an extensionRequest attribute, in the order supplied.
    pub fn build(
        subject: &Name,
        key_pair: &KeyPair,
        digest: DigestAlgorithm,
        subject_alt_names: &[SanEntry],
    ) -> Result<Self> {
        let mut attributes = Attributes::new();

        if !subject_alt_names.is_empty() {
            let san = SubjectAltName {
                entries: subject_alt_names.to_vec(),
            };
            let extensions: Vec<Extension> = vec![to_x509_extension(&san, false)?];
            let payload = Any::from_der(&extensions.to_der()?)?;

            let mut values = SetOfVec::new();
            values.insert(payload)?;
            attributes.insert(Attribute {
                oid: EXTENSION_REQUEST,
                values,
            })?;
        }

        let info = CertReqInfo {
            version: Version::V1,
            subject: subject.clone(),
            public_key: key_pair.to_spki()?,
            attributes,
        };

        let signature = key_pair.sign(&info.to_der()?, digest)?;

        debug!(sans = subject_alt_names.len(), "built and signed CSR");

        Ok(Self {
            inner: CertReq {
                info,
                algorithm: SignatureAlgorithm::from(digest).into(),
                signature: BitString::from_bytes(&signature)?,
            },
        })
    }

    /// The subject name asserted by this CSR.
    pub fn subject(&self) -> &Name {
        &self.inner.info.subject
    }

    /// Returns the SubjectAltName extension carried in the extensionRequest
    /// attribute, if any.
    pub fn san_extension(&self) -> Result<Option<Extension>> {
        for attribute in self.inner.info.attributes.iter() {
            if attribute.oid != EXTENSION_REQUEST {
                continue;
            }
            let Some(value) = attribute.values.iter().next() else {
                continue;
            };
            let extensions: Vec<Extension> = value.decode_as()?;
            return Ok(extensions
                .into_iter()
                .find(|ext| ext.extn_id == SubjectAltName::OID));
        }
        Ok(None)
    }

    /// Encodes the CSR into DER format.
    pub fn to_der(&self) -> Result<Vec<u8>> {
        self.inner
            .to_der()
            .map_err(|e| CertSmithError::Generation(format!("Failed to encode CSR: {e}")))
    }

    /// Encodes the CSR into PEM format.
    pub fn to_pem(&self) -> Result<String> {
        self.inner
            .to_pem(pkcs8::LineEnding::LF)
            .map_err(|e| CertSmithError::Generation(format!("Failed to encode CSR: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cert::params::DistinguishedName;
    use rsa::pkcs1v15::VerifyingKey;
    use rsa::signature::Verifier;
    use sha2::Sha256;

    fn subject() -> Name {
        DistinguishedName::builder()
            .common_name("csr.test".to_string())
            .build()
            .to_x509_name()
            .unwrap()
    }

    #[test]
    fn csr_without_sans_has_no_attributes() {
        let key_pair = KeyPair::generate(1024).unwrap();
        let csr = Csr::build(&subject(), &key_pair, DigestAlgorithm::Sha256, &[]).unwrap();

        assert_eq!(csr.inner.info.attributes.len(), 0);
        assert!(csr.san_extension().unwrap().is_none());
    }

    #[test]
    fn csr_carries_san_extension_request() {
        let key_pair = KeyPair::generate(1024).unwrap();
        let sans = vec![
            SanEntry::Dns("csr.test".to_string()),
            SanEntry::Ip("192.0.2.1".parse().unwrap()),
        ];
        let csr = Csr::build(&subject(), &key_pair, DigestAlgorithm::Sha256, &sans).unwrap();

        let ext = csr.san_extension().unwrap().expect("SAN extension present");
        let decoded =
            SubjectAltName::from_x509_extension_value(ext.extn_value.as_bytes()).unwrap();
        assert_eq!(decoded.entries, sans);
    }

    #[test]
    fn csr_signature_verifies_under_its_public_key() {
        let key_pair = KeyPair::generate(1024).unwrap();
        let csr = Csr::build(&subject(), &key_pair, DigestAlgorithm::Sha256, &[]).unwrap();

        let verifying_key: VerifyingKey<Sha256> =
            VerifyingKey::new(key_pair.public_key().clone());
        let signed_bytes = csr.inner.info.to_der().unwrap();
        let signature = rsa::pkcs1v15::Signature::try_from(
            csr.inner.signature.raw_bytes(),
        )
        .unwrap();
        verifying_key.verify(&signed_bytes, &signature).unwrap();
    }
}
