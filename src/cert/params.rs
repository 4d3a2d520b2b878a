use bon::Builder;
use const_oid::ObjectIdentifier;
use der::Any;
use der::asn1::{Ia5StringRef, PrintableStringRef, SetOfVec, Utf8StringRef};
use time::Duration;
use time::OffsetDateTime;
use x509_cert::attr::AttributeTypeAndValue;
use x509_cert::name::{Name, RdnSequence, RelativeDistinguishedName};

use crate::error::CertSmithError;

/// ASN.1 string type used when encoding a DN attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DnValueKind {
    Printable,
    Utf8,
    Ia5,
}

/// One recognized DN attribute: its OID, the JSON key the configuration
/// layer uses for it, the RFC 4514 short name used for display, and the
/// ASN.1 string type it is encoded with.
#[derive(Debug)]
pub struct DnAttributeType {
    pub oid: ObjectIdentifier,
    pub json_key: &'static str,
    pub short_name: &'static str,
    kind: DnValueKind,
}

/// The seven recognized DN attributes, in canonical encoding order.
///
/// The array order is the compatibility contract: subject and issuer names
/// are always emitted country first, email last, so two DNs with the same
/// non-empty fields produce byte-identical encodings.
pub const DN_ATTRIBUTE_TYPES: [DnAttributeType; 7] = [
    DnAttributeType {
        oid: ObjectIdentifier::new_unwrap("2.5.4.6"),
        json_key: "countryName",
        short_name: "C",
        kind: DnValueKind::Printable,
    },
    DnAttributeType {
        oid: ObjectIdentifier::new_unwrap("2.5.4.8"),
        json_key: "stateOrProvinceName",
        short_name: "ST",
        kind: DnValueKind::Utf8,
    },
    DnAttributeType {
        oid: ObjectIdentifier::new_unwrap("2.5.4.7"),
        json_key: "localityName",
        short_name: "L",
        kind: DnValueKind::Utf8,
    },
    DnAttributeType {
        oid: ObjectIdentifier::new_unwrap("2.5.4.10"),
        json_key: "organizationName",
        short_name: "O",
        kind: DnValueKind::Utf8,
    },
    DnAttributeType {
        oid: ObjectIdentifier::new_unwrap("2.5.4.11"),
        json_key: "organizationalUnitName",
        short_name: "OU",
        kind: DnValueKind::Utf8,
    },
    DnAttributeType {
        oid: ObjectIdentifier::new_unwrap("2.5.4.3"),
        json_key: "commonName",
        short_name: "CN",
        kind: DnValueKind::Utf8,
    },
    DnAttributeType {
        oid: ObjectIdentifier::new_unwrap("1.2.840.113549.1.9.1"),
        json_key: "emailAddress",
        short_name: "E",
        kind: DnValueKind::Ia5,
    },
];

impl DnAttributeType {
    fn encode_value(&self, value: &str) -> der::Result<Any> {
        match self.kind {
            DnValueKind::Printable => Any::encode_from(&PrintableStringRef::new(value)?),
            DnValueKind::Utf8 => Any::encode_from(&Utf8StringRef::new(value)?),
            DnValueKind::Ia5 => Any::encode_from(&Ia5StringRef::new(value)?),
        }
    }
}

/// Distinguished name for the subject (and, self-signed, the issuer) of a
/// certificate.
///
/// Only the common name is mandatory; every other attribute is optional and
/// omitted from the encoded name when absent.
#[derive(Clone, Debug, Builder, Default, PartialEq, Eq)]
pub struct DistinguishedName {
    pub common_name: String,
    pub country: Option<String>,
    pub state: Option<String>,
    pub locality: Option<String>,
    pub organization: Option<String>,
    pub organizational_unit: Option<String>,
    pub email: Option<String>,
}

impl DistinguishedName {
    /// Pairs each recognized attribute type with this DN's value for it,
    /// in canonical order.
    fn fields(&self) -> [(&'static DnAttributeType, Option<&str>); 7] {
        [
            (&DN_ATTRIBUTE_TYPES[0], self.country.as_deref()),
            (&DN_ATTRIBUTE_TYPES[1], self.state.as_deref()),
            (&DN_ATTRIBUTE_TYPES[2], self.locality.as_deref()),
            (&DN_ATTRIBUTE_TYPES[3], self.organization.as_deref()),
            (&DN_ATTRIBUTE_TYPES[4], self.organizational_unit.as_deref()),
            (&DN_ATTRIBUTE_TYPES[5], Some(self.common_name.as_str())),
            (&DN_ATTRIBUTE_TYPES[6], self.email.as_deref()),
        ]
    }

    /// Builds the ordered X.509 name for this DN.
    ///
    /// Each present attribute becomes its own single-attribute RDN; absent
    /// or empty attributes are skipped entirely rather than encoded with an
    /// empty value. Country is encoded as PrintableString, email as
    /// IA5String, everything else as UTF8String.
    pub fn to_x509_name(&self) -> Result<Name, CertSmithError> {
        let mut rdns = Vec::new();

        for (attr_type, value) in self.fields() {
            let Some(value) = value else { continue };
            if value.is_empty() {
                continue;
            }

            let encoded = attr_type.encode_value(value).map_err(|e| {
                CertSmithError::Config(format!(
                    "Invalid value for {}: {e}",
                    attr_type.json_key
                ))
            })?;

            let mut set = SetOfVec::new();
            set.insert(AttributeTypeAndValue {
                oid: attr_type.oid,
                value: encoded,
            })?;
            rdns.push(RelativeDistinguishedName(set));
        }

        Ok(RdnSequence(rdns))
    }
}

/// Certificate validity period.
#[derive(Clone, Debug)]
pub struct Validity {
    pub not_before: OffsetDateTime,
    pub not_after: OffsetDateTime,
}

impl Validity {
    /// Creates a validity period starting now for exactly the given number
    /// of days.
    pub fn for_days(days: i64) -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            not_before: now,
            not_after: now + Duration::days(days),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use der::Encode;

    fn full_dn() -> DistinguishedName {
        DistinguishedName::builder()
            .common_name("example.test".to_string())
            .country("UK".to_string())
            .state("Somerset".to_string())
            .locality("Glastonbury".to_string())
            .organization("Example Org".to_string())
            .organizational_unit("Tooling".to_string())
            .email("admin@example.test".to_string())
            .build()
    }

    #[test]
    fn name_attributes_follow_canonical_order() {
        let name = full_dn().to_x509_name().unwrap();
        let oids: Vec<_> = name
            .0
            .iter()
            .flat_map(|rdn| rdn.0.iter().map(|attr| attr.oid))
            .collect();

        let expected: Vec<_> = DN_ATTRIBUTE_TYPES.iter().map(|a| a.oid).collect();
        assert_eq!(oids, expected);
    }

    #[test]
    fn absent_attributes_are_omitted() {
        let dn = DistinguishedName::builder()
            .common_name("bare.test".to_string())
            .build();
        let name = dn.to_x509_name().unwrap();

        assert_eq!(name.0.len(), 1);
        let attr = name.0[0].0.iter().next().unwrap();
        assert_eq!(attr.oid, DN_ATTRIBUTE_TYPES[5].oid);
    }

    #[test]
    fn empty_optional_attribute_is_omitted() {
        let dn = DistinguishedName::builder()
            .common_name("bare.test".to_string())
            .organization(String::new())
            .build();
        let name = dn.to_x509_name().unwrap();
        assert_eq!(name.0.len(), 1);
    }

    #[test]
    fn name_encoding_is_idempotent() {
        let dn = full_dn();
        let first = dn.to_x509_name().unwrap().to_der().unwrap();
        let second = dn.to_x509_name().unwrap().to_der().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn non_printable_country_is_rejected_with_field_name() {
        let dn = DistinguishedName::builder()
            .common_name("bad.test".to_string())
            .country("Ü".to_string())
            .build();
        let err = dn.to_x509_name().unwrap_err();
        match err {
            CertSmithError::Config(msg) => assert!(msg.contains("countryName")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn validity_window_is_exact() {
        let validity = Validity::for_days(30);
        assert_eq!(validity.not_after - validity.not_before, Duration::days(30));
    }
}
