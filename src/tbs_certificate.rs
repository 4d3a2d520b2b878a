use der::Encode;
use der::asn1::{GeneralizedTime, UtcTime};
use time::OffsetDateTime;
use x509_cert::Version;
use x509_cert::certificate::TbsCertificateInner;
use x509_cert::ext::Extension;
use x509_cert::name::Name;
use x509_cert::serial_number::SerialNumber;
use x509_cert::spki::SubjectPublicKeyInfoOwned;
use x509_cert::time::{Time, Validity as X509Validity};

use crate::cert::SignatureAlgorithm;
use crate::cert::params::Validity;
use crate::error::CertSmithError;

/// The "To Be Signed" portion of an X.509 certificate, holding every field
/// the issuer fills in before signing.
pub struct TbsCertificate {
    /// Certificate serial number, big-endian.
    pub serial_number: Vec<u8>,
    /// Certificate signature algorithm.
    pub signature_algorithm: SignatureAlgorithm,
    /// Certificate issuer distinguished name.
    pub issuer: Name,
    /// Validity window.
    pub validity: Validity,
    /// Certificate subject distinguished name.
    pub subject: Name,
    /// Subject's public key.
    pub subject_public_key: SubjectPublicKeyInfoOwned,
    /// Certificate extensions.
    pub extensions: Vec<Extension>,
}

impl TbsCertificate {
    /// Converts into the `x509_cert` form suitable for DER encoding.
    pub fn to_tbs_certificate_inner(&self) -> Result<TbsCertificateInner, CertSmithError> {
        let serial_number = SerialNumber::new(&self.serial_number)
            .map_err(|e| CertSmithError::Generation(format!("Invalid serial number: {e}")))?;

        let validity = X509Validity {
            not_before: asn1_time(self.validity.not_before)?,
            not_after: asn1_time(self.validity.not_after)?,
        };

        Ok(TbsCertificateInner {
            version: Version::V3,
            serial_number,
            signature: self.signature_algorithm.into(),
            issuer: self.issuer.clone(),
            validity,
            subject: self.subject.clone(),
            subject_public_key_info: self.subject_public_key.clone(),
            issuer_unique_id: None,
            subject_unique_id: None,
            extensions: Some(self.extensions.clone()),
        })
    }

    /// Encodes the TBS certificate into DER format (the byte string that
    /// gets signed).
    pub fn to_der(&self) -> Result<Vec<u8>, CertSmithError> {
        Ok(self.to_tbs_certificate_inner()?.to_der()?)
    }
}

/// RFC 5280 §4.1.2.5: dates through 2049 are encoded as UTCTime, dates from
/// 2050 on as GeneralizedTime.
fn asn1_time(ts: OffsetDateTime) -> Result<Time, CertSmithError> {
    let time = if ts.year() < 2050 {
        Time::UtcTime(UtcTime::from_system_time(ts.into())?)
    } else {
        Time::GeneralTime(GeneralizedTime::from_system_time(ts.into())?)
    };
    Ok(time)
}
