use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use const_oid::AssociatedOid;
use der::{
    Decode, Encode,
    asn1::{Ia5String, OctetString},
    oid::ObjectIdentifier,
};
use x509_cert::ext::Extension;
use x509_cert::ext::pkix::name::GeneralName;

use crate::error::CertSmithError;

/// Trait for converting to and from X.509 extensions.
///
/// This trait provides methods to encode and decode X.509 extension values.
pub trait ToAndFromX509Extension {
    /// The Object Identifier (OID) for the extension.
    const OID: ObjectIdentifier;

    /// Encodes the extension into a DER-encoded byte vector.
    fn to_x509_extension_value(&self) -> Result<Vec<u8>, CertSmithError>;

    /// Decodes the extension from a DER-encoded byte slice.
    fn from_x509_extension_value(extension: &[u8]) -> Result<Self, CertSmithError>
    where
        Self: Sized;
}

/// Wraps an encodable extension into the raw `x509_cert` extension form.
pub fn to_x509_extension<E: ToAndFromX509Extension>(
    ext: &E,
    critical: bool,
) -> Result<Extension, CertSmithError> {
    Ok(Extension {
        extn_id: E::OID,
        critical,
        extn_value: OctetString::new(ext.to_x509_extension_value()?)?,
    })
}

/// A single Subject Alternative Name entry, classified at construction.
///
/// Classification happens exactly once, when the entry enters the system
/// from configuration; downstream code never re-derives it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SanEntry {
    /// A DNS host name.
    Dns(String),
    /// An IPv4 or IPv6 address.
    Ip(IpAddr),
}

impl SanEntry {
    /// Classifies a raw string: anything that parses as an IP literal is an
    /// IP entry, everything else is a DNS name.
    pub fn classify(raw: &str) -> SanEntry {
        match raw.parse::<IpAddr>() {
            Ok(ip) => SanEntry::Ip(ip),
            Err(_) => SanEntry::Dns(raw.to_string()),
        }
    }
}

impl fmt::Display for SanEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SanEntry::Dns(name) => write!(f, "DNS:{name}"),
            SanEntry::Ip(addr) => write!(f, "IP:{addr}"),
        }
    }
}

/// Represents the Subject Alternative Name (SAN) extension.
///
/// Entries keep the order they were supplied in; the certificate carries
/// them unchanged from the CSR.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectAltName {
    pub entries: Vec<SanEntry>,
}

impl ToAndFromX509Extension for SubjectAltName {
    const OID: ObjectIdentifier = x509_cert::ext::pkix::SubjectAltName::OID;

    fn to_x509_extension_value(&self) -> Result<Vec<u8>, CertSmithError> {
        let names = self
            .entries
            .iter()
            .map(|entry| match entry {
                SanEntry::Dns(name) => Ia5String::try_from(name.clone())
                    .map(GeneralName::DnsName)
                    .map_err(|e| {
                        CertSmithError::Config(format!("Invalid DNS name {name:?}: {e}"))
                    }),
                SanEntry::Ip(IpAddr::V4(addr)) => {
                    Ok(GeneralName::IpAddress(OctetString::new(&addr.octets()[..])?))
                }
                SanEntry::Ip(IpAddr::V6(addr)) => {
                    Ok(GeneralName::IpAddress(OctetString::new(&addr.octets()[..])?))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let san = x509_cert::ext::pkix::SubjectAltName(names);
        Ok(san.to_der()?)
    }

    fn from_x509_extension_value(extension: &[u8]) -> Result<Self, CertSmithError> {
        let san = x509_cert::ext::pkix::SubjectAltName::from_der(extension)?;
        let entries = san
            .0
            .iter()
            .map(|name| match name {
                GeneralName::DnsName(dns) => Ok(SanEntry::Dns(dns.to_string())),
                GeneralName::IpAddress(octets) => match octets.as_bytes().len() {
                    4 => {
                        let bytes: [u8; 4] = octets.as_bytes().try_into().unwrap_or_default();
                        Ok(SanEntry::Ip(IpAddr::V4(Ipv4Addr::from(bytes))))
                    }
                    16 => {
                        let bytes: [u8; 16] = octets.as_bytes().try_into().unwrap_or_default();
                        Ok(SanEntry::Ip(IpAddr::V6(Ipv6Addr::from(bytes))))
                    }
                    len => Err(CertSmithError::Generation(format!(
                        "SubjectAltName IP address has invalid length {len}"
                    ))),
                },
                _ => Err(CertSmithError::Generation(
                    "Unsupported general name type in SubjectAltName".to_string(),
                )),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entries })
    }
}

/// Represents the Basic Constraints extension.
///
/// Self-signed certificates issued by this tool always carry it with
/// `is_ca` set, matching the subject acting as its own issuer.
#[derive(Debug, Clone, Default)]
pub struct BasicConstraints {
    pub is_ca: bool,
    pub max_path_length: Option<u32>,
}

impl ToAndFromX509Extension for BasicConstraints {
    const OID: ObjectIdentifier = x509_cert::ext::pkix::BasicConstraints::OID;

    fn to_x509_extension_value(&self) -> Result<Vec<u8>, CertSmithError> {
        let bc = x509_cert::ext::pkix::BasicConstraints {
            ca: self.is_ca,
            path_len_constraint: self.max_path_length.map(|v| v as u8),
        };

        Ok(bc.to_der()?)
    }

    fn from_x509_extension_value(der_bytes: &[u8]) -> Result<Self, CertSmithError> {
        let bc = x509_cert::ext::pkix::BasicConstraints::from_der(der_bytes)?;
        Ok(Self {
            is_ca: bc.ca,
            max_path_length: bc.path_len_constraint.map(|v| v as u32),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn san_entry_classification() {
        assert_eq!(
            SanEntry::classify("example.com"),
            SanEntry::Dns("example.com".to_string())
        );
        assert_eq!(
            SanEntry::classify("192.0.2.10"),
            SanEntry::Ip("192.0.2.10".parse().unwrap())
        );
        assert_eq!(
            SanEntry::classify("2001:db8::1"),
            SanEntry::Ip("2001:db8::1".parse().unwrap())
        );
    }

    #[test]
    fn san_encoding_decoding_preserves_order_and_kinds() {
        let original = SubjectAltName {
            entries: vec![
                SanEntry::Dns("example.com".to_string()),
                SanEntry::Ip("192.0.2.10".parse().unwrap()),
                SanEntry::Dns("www.example.com".to_string()),
                SanEntry::Ip("2001:db8::1".parse().unwrap()),
            ],
        };
        let encoded = original.to_x509_extension_value().unwrap();
        let decoded = SubjectAltName::from_x509_extension_value(&encoded).unwrap();
        assert_eq!(original.entries, decoded.entries);
    }

    #[test]
    fn basic_constraints_encoding_decoding() {
        let original = BasicConstraints {
            is_ca: true,
            max_path_length: None,
        };
        let encoded = original.to_x509_extension_value().unwrap();
        let decoded = BasicConstraints::from_x509_extension_value(&encoded).unwrap();
        assert!(decoded.is_ca);
        assert_eq!(decoded.max_path_length, None);
    }
}
