use der::Encode;
use der::asn1::BitString;
use rand_core::{OsRng, RngCore};
use tracing::debug;
use x509_cert::certificate::CertificateInner;

use crate::cert::extensions::{BasicConstraints, to_x509_extension};
use crate::cert::params::Validity;
use crate::cert::{Certificate, SignatureAlgorithm};
use crate::config::IssuanceConfig;
use crate::csr::Csr;
use crate::error::CertSmithError;
use crate::key::KeyPair;
use crate::tbs_certificate::TbsCertificate;

/// Serial width in octets. 20 random octets with the sign bit cleared carry
/// 159 bits of entropy, the most a positive RFC 5280 serial can hold.
const SERIAL_OCTETS: usize = 20;

/// Draws a random certificate serial number from the OS CSPRNG.
pub fn random_serial_number() -> Vec<u8> {
    let mut bytes = vec![0u8; SERIAL_OCTETS];
    OsRng.fill_bytes(&mut bytes);
    // Clear the sign bit so the DER INTEGER stays positive.
    bytes[0] &= 0x7f;
    bytes
}

/// Issues a self-signed certificate from a CSR.
///
/// The CSR's subject serves as both subject and issuer, its SAN extension
/// (if any) is copied into the certificate unchanged, and the same key and
/// digest that signed the CSR sign the certificate. The validity window
/// starts at issuance time and spans exactly `valid_days` days.
pub fn issue_self_signed(
    csr: &Csr,
    key_pair: &KeyPair,
    config: &IssuanceConfig,
) -> Result<Certificate, CertSmithError> {
    let subject = csr.subject().clone();
    let validity = Validity::for_days(config.valid_days);

    let basic_constraints = BasicConstraints {
        is_ca: true,
        max_path_length: None,
    };
    let mut extensions = vec![to_x509_extension(&basic_constraints, true)?];
    if let Some(san) = csr.san_extension()? {
        extensions.push(san);
    }

    let tbs = TbsCertificate {
        serial_number: random_serial_number(),
        signature_algorithm: config.digest_alg.into(),
        issuer: subject.clone(),
        validity,
        subject,
        subject_public_key: key_pair.to_spki()?,
        extensions,
    };

    let tbs_inner = tbs.to_tbs_certificate_inner()?;
    let signature = key_pair.sign(&tbs_inner.to_der()?, config.digest_alg)?;

    debug!(valid_days = config.valid_days, "issued self-signed certificate");

    Ok(Certificate {
        inner: CertificateInner {
            tbs_certificate: tbs_inner,
            signature_algorithm: SignatureAlgorithm::from(config.digest_alg).into(),
            signature: BitString::from_bytes(&signature)?,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serial_numbers_are_positive_and_full_width() {
        let serial = random_serial_number();
        assert_eq!(serial.len(), SERIAL_OCTETS);
        assert_eq!(serial[0] & 0x80, 0);
    }

    #[test]
    fn consecutive_serial_numbers_differ() {
        assert_ne!(random_serial_number(), random_serial_number());
    }
}
