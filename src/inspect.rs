//! Read path over previously issued certificates.
//!
//! The inspector parses externally supplied PEM bytes (certificates only,
//! never CSRs or keys) and extracts the subject, issuer, validity window,
//! and SAN entries. Malformed input fails with a parse-failure reason; no
//! partial recovery is attempted.

use std::fmt;

use der::asn1::{Ia5StringRef, PrintableStringRef, Utf8StringRef};
use time::OffsetDateTime;
use x509_cert::name::Name;
use x509_cert::time::Time;

use crate::cert::Certificate;
use crate::cert::extensions::{SanEntry, SubjectAltName, ToAndFromX509Extension};
use crate::cert::params::DN_ATTRIBUTE_TYPES;
use crate::error::CertSmithError;
use crate::pem_utils;

type Result<T> = std::result::Result<T, CertSmithError>;

/// Name attributes read from a certificate, in certificate order.
///
/// Keys are the JSON attribute names used by the configuration layer;
/// attributes outside the recognized set keep their dotted OID form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectedName(pub Vec<(String, String)>);

impl InspectedName {
    /// Looks up an attribute value by its JSON key (e.g. `"commonName"`).
    pub fn get(&self, json_key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == json_key)
            .map(|(_, value)| value.as_str())
    }

    fn from_x509_name(name: &Name) -> Result<Self> {
        let mut attributes = Vec::new();
        for rdn in name.0.iter() {
            for attr in rdn.0.iter() {
                let key = DN_ATTRIBUTE_TYPES
                    .iter()
                    .find(|t| t.oid == attr.oid)
                    .map(|t| t.json_key.to_string())
                    .unwrap_or_else(|| attr.oid.to_string());
                let value = decode_string_value(&attr.value).map_err(|e| {
                    CertSmithError::Generation(format!(
                        "Failed to decode {key} name attribute: {e}"
                    ))
                })?;
                attributes.push((key, value));
            }
        }
        Ok(Self(attributes))
    }
}

impl fmt::Display for InspectedName {
    /// RFC 4514-style short-name rendering, e.g. `C=UK, CN=example.test`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(key, value)| {
                let short = DN_ATTRIBUTE_TYPES
                    .iter()
                    .find(|t| t.json_key == key)
                    .map(|t| t.short_name)
                    .unwrap_or(key.as_str());
                format!("{short}={value}")
            })
            .collect();
        f.write_str(&parts.join(", "))
    }
}

fn decode_string_value(value: &der::Any) -> der::Result<String> {
    if let Ok(s) = value.decode_as::<Utf8StringRef<'_>>() {
        return Ok(s.to_string());
    }
    if let Ok(s) = value.decode_as::<PrintableStringRef<'_>>() {
        return Ok(s.to_string());
    }
    value.decode_as::<Ia5StringRef<'_>>().map(|s| s.to_string())
}

/// Fields extracted from an existing certificate.
#[derive(Debug, Clone)]
pub struct CertificateReport {
    pub subject: InspectedName,
    pub issuer: InspectedName,
    pub not_before: OffsetDateTime,
    pub not_after: OffsetDateTime,
    pub subject_alt_names: Vec<SanEntry>,
}

impl fmt::Display for CertificateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Subject: {}", self.subject)?;
        writeln!(f, "  Issuer:  {}", self.issuer)?;
        writeln!(f, "  Valid from: {}", self.not_before)?;
        write!(f, "  Valid until: {}", self.not_after)?;
        if !self.subject_alt_names.is_empty() {
            let sans: Vec<String> = self
                .subject_alt_names
                .iter()
                .map(ToString::to_string)
                .collect();
            write!(f, "\n  Subject Alternative Names: {}", sans.join(", "))?;
        }
        Ok(())
    }
}

/// Parses PEM bytes of an existing certificate and extracts its fields.
///
/// Any PEM label other than `CERTIFICATE` is rejected.
pub fn inspect_pem(pem_bytes: &[u8]) -> Result<CertificateReport> {
    let parsed = pem_utils::parse_pem(pem_bytes)?;
    if parsed.tag() != "CERTIFICATE" {
        return Err(CertSmithError::Generation(format!(
            "Expected a CERTIFICATE PEM block, found {:?}",
            parsed.tag()
        )));
    }
    inspect_certificate(&Certificate::from_der(parsed.contents())?)
}

/// Extracts the report fields from an in-memory certificate.
pub fn inspect_certificate(certificate: &Certificate) -> Result<CertificateReport> {
    let tbs = &certificate.inner.tbs_certificate;

    let subject = InspectedName::from_x509_name(&tbs.subject)?;
    let issuer = InspectedName::from_x509_name(&tbs.issuer)?;
    let not_before = time_to_offset(&tbs.validity.not_before);
    let not_after = time_to_offset(&tbs.validity.not_after);

    let mut subject_alt_names = Vec::new();
    if let Some(extensions) = &tbs.extensions {
        for ext in extensions {
            if ext.extn_id == SubjectAltName::OID {
                subject_alt_names =
                    SubjectAltName::from_x509_extension_value(ext.extn_value.as_bytes())?.entries;
            }
        }
    }

    Ok(CertificateReport {
        subject,
        issuer,
        not_before,
        not_after,
        subject_alt_names,
    })
}

fn time_to_offset(time: &Time) -> OffsetDateTime {
    match time {
        Time::UtcTime(ut) => OffsetDateTime::from(ut.to_system_time()),
        Time::GeneralTime(gt) => OffsetDateTime::from(gt.to_system_time()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_input_is_rejected() {
        let err = inspect_pem(b"not pem at all").unwrap_err();
        assert!(matches!(err, CertSmithError::Generation(_)));
    }

    #[test]
    fn non_certificate_pem_is_rejected_by_label() {
        let key_pem = crate::key::KeyPair::generate(1024)
            .unwrap()
            .to_pkcs8_pem()
            .unwrap();
        let err = inspect_pem(key_pem.as_bytes()).unwrap_err();
        match err {
            CertSmithError::Generation(msg) => assert!(msg.contains("PRIVATE KEY")),
            other => panic!("expected Generation error, got {other:?}"),
        }
    }
}
