//! Configuration resolution for certificate generation.
//!
//! This module handles:
//!
//! * Reading JSON configuration files (explicit `{dn, config}` and flat
//!   shapes).
//! * Splitting flat documents into DN and config values by fixed key
//!   membership.
//! * Type coercion for key parameters.
//! * Validation of DN requirements, digest algorithm, and private key type.
//!
//! Resolution is pure: apart from [`load_json_config`] reading a file, no
//! function here touches the filesystem or network, and all validation runs
//! before any cryptographic work starts.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::cert::extensions::SanEntry;
use crate::cert::params::{DN_ATTRIBUTE_TYPES, DistinguishedName};
use crate::error::CertSmithError;

type Result<T> = std::result::Result<T, CertSmithError>;

/// Digest algorithms permitted for CSR and certificate signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigestAlgorithm {
    Sha256,
    Sha384,
    #[default]
    Sha512,
}

impl DigestAlgorithm {
    pub const fn name(self) -> &'static str {
        match self {
            DigestAlgorithm::Sha256 => "sha256",
            DigestAlgorithm::Sha384 => "sha384",
            DigestAlgorithm::Sha512 => "sha512",
        }
    }
}

impl FromStr for DigestAlgorithm {
    type Err = CertSmithError;

    /// Case-insensitive, accepting dashed spellings such as `"sha-256"`.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('-', "").as_str() {
            "sha256" => Ok(DigestAlgorithm::Sha256),
            "sha384" => Ok(DigestAlgorithm::Sha384),
            "sha512" => Ok(DigestAlgorithm::Sha512),
            _ => Err(CertSmithError::Config(format!("Unsupported digest: {s:?}"))),
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Private key types the pipeline can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrivateKeyType {
    #[default]
    Rsa,
}

impl FromStr for PrivateKeyType {
    type Err = CertSmithError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("rsa") {
            Ok(PrivateKeyType::Rsa)
        } else {
            Err(CertSmithError::Config(format!(
                "Unsupported private_key_type {s:?}; only 'RSA' is supported."
            )))
        }
    }
}

impl fmt::Display for PrivateKeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RSA")
    }
}

/// Settings governing key generation and certificate issuance.
///
/// The [`Default`] impl is the process-wide default configuration; it is
/// copied per request and never shared mutably.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuanceConfig {
    pub digest_alg: DigestAlgorithm,
    pub private_key_bits: u64,
    pub private_key_type: PrivateKeyType,
    pub encrypt_key: bool,
    pub valid_days: i64,
}

impl Default for IssuanceConfig {
    fn default() -> Self {
        Self {
            digest_alg: DigestAlgorithm::Sha512,
            private_key_bits: 2048,
            private_key_type: PrivateKeyType::Rsa,
            encrypt_key: false,
            valid_days: 365,
        }
    }
}

/// How the private key PEM is protected, decided once during resolution.
///
/// `encrypt_key` without a resolvable passphrase is rejected by the
/// resolver, so the serializer never has to handle that state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassphrasePolicy {
    Plaintext,
    Encrypted(String),
}

/// A fully resolved and validated generation request.
///
/// Constructed once per certificate, consumed read-only by every pipeline
/// stage.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub dn: DistinguishedName,
    pub config: IssuanceConfig,
    pub subject_alt_names: Vec<SanEntry>,
    pub passphrase_policy: PassphrasePolicy,
}

/// Config keys recognized in the flat JSON shape, including the two
/// reserved keys that are honored in both shapes.
const CONFIG_KEYS: [&str; 7] = [
    "digest_alg",
    "private_key_bits",
    "private_key_type",
    "encrypt_key",
    "valid_days",
    "subject_alt_names",
    "passphrase",
];

fn is_dn_key(key: &str) -> bool {
    DN_ATTRIBUTE_TYPES.iter().any(|attr| attr.json_key == key)
}

fn is_config_key(key: &str) -> bool {
    CONFIG_KEYS.contains(&key)
}

/// The two accepted JSON document shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JsonShape {
    /// Top-level `dn` and/or `config` blocks.
    Explicit,
    /// DN and config keys mixed at the top level.
    Flat,
}

fn detect_shape(map: &Map<String, Value>) -> JsonShape {
    if map.contains_key("dn") || map.contains_key("config") {
        JsonShape::Explicit
    } else {
        JsonShape::Flat
    }
}

/// DN and config values as extracted from a JSON document, before coercion
/// and validation.
#[derive(Debug, Default)]
struct RawSettings {
    dn: Map<String, Value>,
    config: Map<String, Value>,
    subject_alt_names: Option<Value>,
    passphrase: Option<Value>,
}

fn split_json(value: &Value) -> Result<RawSettings> {
    let Value::Object(map) = value else {
        return Err(CertSmithError::Config(
            "JSON config must be an object at the top level".to_string(),
        ));
    };

    let mut raw = RawSettings::default();

    match detect_shape(map) {
        JsonShape::Explicit => {
            if let Some(Value::Object(dn)) = map.get("dn") {
                raw.dn = dn.clone();
            }
            if let Some(Value::Object(cfg)) = map.get("config") {
                raw.config = cfg.clone();
            }
        }
        JsonShape::Flat => {
            for (key, val) in map {
                if is_dn_key(key) {
                    raw.dn.insert(key.clone(), val.clone());
                } else if is_config_key(key) {
                    raw.config.insert(key.clone(), val.clone());
                }
                // Unknown keys are silently ignored.
            }
        }
    }

    // Reserved keys are honored in both shapes; a top-level value wins over
    // one inside the config block.
    let sans_in_config = raw.config.remove("subject_alt_names");
    let passphrase_in_config = raw.config.remove("passphrase");
    raw.subject_alt_names = map.get("subject_alt_names").cloned().or(sans_in_config);
    raw.passphrase = map.get("passphrase").cloned().or(passphrase_in_config);

    Ok(raw)
}

/// DN values as found in JSON, prior to validation.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
struct RawDn {
    #[serde(rename = "countryName")]
    country: Option<String>,
    #[serde(rename = "stateOrProvinceName")]
    state: Option<String>,
    #[serde(rename = "localityName")]
    locality: Option<String>,
    #[serde(rename = "organizationName")]
    organization: Option<String>,
    #[serde(rename = "organizationalUnitName")]
    organizational_unit: Option<String>,
    #[serde(rename = "commonName")]
    common_name: Option<String>,
    #[serde(rename = "emailAddress")]
    email: Option<String>,
}

impl RawDn {
    fn is_empty(&self) -> bool {
        self.country.is_none()
            && self.state.is_none()
            && self.locality.is_none()
            && self.organization.is_none()
            && self.organizational_unit.is_none()
            && self.common_name.is_none()
            && self.email.is_none()
    }
}

fn validate_dn(raw: RawDn) -> Result<DistinguishedName> {
    if raw.is_empty() {
        return Err(CertSmithError::Config(
            "DN is empty. You must supply DN attributes (at least 'commonName') \
             either via CLI or JSON configuration."
                .to_string(),
        ));
    }

    let common_name = match raw.common_name {
        Some(cn) if !cn.trim().is_empty() => cn,
        _ => {
            return Err(CertSmithError::Config(
                "DN is missing 'commonName'. Provide it in the JSON config or via CLI."
                    .to_string(),
            ));
        }
    };

    Ok(DistinguishedName {
        common_name,
        country: raw.country,
        state: raw.state,
        locality: raw.locality,
        organization: raw.organization,
        organizational_unit: raw.organizational_unit,
        email: raw.email,
    })
}

fn coerce_positive_int(value: &Value, field: &str) -> Result<i64> {
    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    match parsed {
        Some(n) if n > 0 => Ok(n),
        _ => Err(CertSmithError::Config(format!(
            "{field} must be a positive integer, got {value}"
        ))),
    }
}

fn coerce_bool(value: &Value, field: &str) -> Result<bool> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => Ok(n.as_f64().is_some_and(|f| f != 0.0)),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "y" | "on" => Ok(true),
            "0" | "false" | "no" | "n" | "off" => Ok(false),
            _ => Err(CertSmithError::Config(format!(
                "Cannot coerce {s:?} to bool for {field}"
            ))),
        },
        other => Err(CertSmithError::Config(format!(
            "Cannot coerce {other} to bool for {field}"
        ))),
    }
}

/// Merges JSON config values on top of the default [`IssuanceConfig`].
fn merge_config(config: &Map<String, Value>) -> Result<IssuanceConfig> {
    let mut cfg = IssuanceConfig::default();

    if let Some(value) = config.get("digest_alg") {
        let s = value.as_str().ok_or_else(|| {
            CertSmithError::Config(format!("digest_alg must be a string, got {value}"))
        })?;
        cfg.digest_alg = s.parse()?;
    }
    if let Some(value) = config.get("private_key_bits") {
        cfg.private_key_bits = coerce_positive_int(value, "private_key_bits")? as u64;
    }
    if let Some(value) = config.get("private_key_type") {
        let s = value.as_str().ok_or_else(|| {
            CertSmithError::Config(format!("private_key_type must be a string, got {value}"))
        })?;
        cfg.private_key_type = s.parse()?;
    }
    if let Some(value) = config.get("encrypt_key") {
        cfg.encrypt_key = coerce_bool(value, "encrypt_key")?;
    }
    if let Some(value) = config.get("valid_days") {
        cfg.valid_days = coerce_positive_int(value, "valid_days")?;
    }

    Ok(cfg)
}

fn resolve_sans(value: Option<&Value>) -> Result<Vec<SanEntry>> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };
    let Value::Array(items) = value else {
        return Err(CertSmithError::Config(
            "subject_alt_names must be an array of strings".to_string(),
        ));
    };

    items
        .iter()
        .map(|item| {
            item.as_str().map(SanEntry::classify).ok_or_else(|| {
                CertSmithError::Config(format!(
                    "subject_alt_names entries must be strings, got {item}"
                ))
            })
        })
        .collect()
}

/// Resolves the effective passphrase; the CLI source takes precedence over
/// a JSON value.
fn resolve_passphrase(json: Option<&Value>, cli: Option<&str>) -> Result<Option<String>> {
    if let Some(passphrase) = cli {
        return Ok(Some(passphrase.to_string()));
    }
    match json {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(CertSmithError::Config(format!(
            "passphrase must be a string, got {other}"
        ))),
    }
}

fn passphrase_policy(encrypt_key: bool, passphrase: Option<String>) -> Result<PassphrasePolicy> {
    match (encrypt_key, passphrase) {
        (false, _) => Ok(PassphrasePolicy::Plaintext),
        (true, Some(p)) if !p.is_empty() => Ok(PassphrasePolicy::Encrypted(p)),
        (true, _) => Err(CertSmithError::Config(
            "encrypt_key is true but no passphrase was provided. Set 'passphrase' \
             in the JSON config or via --passphrase."
                .to_string(),
        )),
    }
}

/// Resolves a generation request from a parsed JSON document.
///
/// Accepts both the explicit `{dn, config}` shape and the flat shape, and
/// merges config values on top of the defaults. All validation happens
/// here, before any key material exists.
pub fn resolve_from_json_value(
    value: &Value,
    cli_passphrase: Option<&str>,
) -> Result<GenerationRequest> {
    let raw = split_json(value)?;

    let raw_dn: RawDn = serde_json::from_value(Value::Object(raw.dn))?;
    let dn = validate_dn(raw_dn)?;
    let config = merge_config(&raw.config)?;
    let subject_alt_names = resolve_sans(raw.subject_alt_names.as_ref())?;
    let passphrase = resolve_passphrase(raw.passphrase.as_ref(), cli_passphrase)?;
    let passphrase_policy = passphrase_policy(config.encrypt_key, passphrase)?;

    debug!(
        common_name = %dn.common_name,
        digest = %config.digest_alg,
        bits = config.private_key_bits,
        sans = subject_alt_names.len(),
        "resolved JSON generation request"
    );

    Ok(GenerationRequest {
        dn,
        config,
        subject_alt_names,
        passphrase_policy,
    })
}

/// Reads and parses a JSON configuration file.
pub fn load_json_config(path: &Path) -> Result<Value> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        CertSmithError::Config(format!("Unable to read JSON config {}: {e}", path.display()))
    })?;
    serde_json::from_str(&raw).map_err(|e| {
        CertSmithError::Config(format!("Invalid JSON in config {}: {e}", path.display()))
    })
}

/// Loads a JSON configuration file and resolves it into a generation
/// request.
pub fn resolve_from_json_file(
    path: &Path,
    cli_passphrase: Option<&str>,
) -> Result<GenerationRequest> {
    resolve_from_json_value(&load_json_config(path)?, cli_passphrase)
}

/// Parses and validates a configuration file without generating anything.
pub fn validate_config_file(path: &Path) -> Result<()> {
    resolve_from_json_file(path, None).map(|_| ())
}

/// DN values supplied via CLI flags. No field has a default.
#[derive(Debug, Default, Clone)]
pub struct DnOverrides {
    pub country: Option<String>,
    pub state: Option<String>,
    pub locality: Option<String>,
    pub organization: Option<String>,
    pub organizational_unit: Option<String>,
    pub common_name: Option<String>,
    pub email: Option<String>,
}

/// Config values supplied via CLI flags; unset values fall back to the
/// default [`IssuanceConfig`].
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub digest_alg: Option<String>,
    pub private_key_bits: Option<u64>,
    pub private_key_type: Option<String>,
    pub encrypt_key: Option<bool>,
    pub valid_days: Option<i64>,
}

/// Resolves a generation request from CLI parameters.
pub fn resolve_from_cli(
    dn: &DnOverrides,
    overrides: &ConfigOverrides,
    passphrase: Option<&str>,
) -> Result<GenerationRequest> {
    let raw_dn = RawDn {
        country: dn.country.clone(),
        state: dn.state.clone(),
        locality: dn.locality.clone(),
        organization: dn.organization.clone(),
        organizational_unit: dn.organizational_unit.clone(),
        common_name: dn.common_name.clone(),
        email: dn.email.clone(),
    };
    let dn = validate_dn(raw_dn)?;

    let mut config = IssuanceConfig::default();
    if let Some(digest) = &overrides.digest_alg {
        config.digest_alg = digest.parse()?;
    }
    if let Some(bits) = overrides.private_key_bits {
        if bits == 0 {
            return Err(CertSmithError::Config(
                "private_key_bits must be a positive integer, got 0".to_string(),
            ));
        }
        config.private_key_bits = bits;
    }
    if let Some(key_type) = &overrides.private_key_type {
        config.private_key_type = key_type.parse()?;
    }
    if let Some(encrypt) = overrides.encrypt_key {
        config.encrypt_key = encrypt;
    }
    if let Some(days) = overrides.valid_days {
        if days <= 0 {
            return Err(CertSmithError::Config(format!(
                "valid_days must be a positive integer, got {days}"
            )));
        }
        config.valid_days = days;
    }

    let passphrase_policy =
        passphrase_policy(config.encrypt_key, passphrase.map(str::to_string))?;

    debug!(
        common_name = %dn.common_name,
        digest = %config.digest_alg,
        bits = config.private_key_bits,
        "resolved CLI generation request"
    );

    Ok(GenerationRequest {
        dn,
        config,
        subject_alt_names: Vec::new(),
        passphrase_policy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::net::IpAddr;

    fn cli_dn(common_name: &str) -> DnOverrides {
        DnOverrides {
            common_name: Some(common_name.to_string()),
            ..DnOverrides::default()
        }
    }

    #[test]
    fn cli_mode_applies_defaults() {
        let request =
            resolve_from_cli(&cli_dn("dev.local"), &ConfigOverrides::default(), None).unwrap();

        assert_eq!(request.dn.common_name, "dev.local");
        assert_eq!(request.config, IssuanceConfig::default());
        assert_eq!(request.config.digest_alg, DigestAlgorithm::Sha512);
        assert_eq!(request.config.private_key_bits, 2048);
        assert_eq!(request.config.valid_days, 365);
        assert!(!request.config.encrypt_key);
        assert!(request.subject_alt_names.is_empty());
        assert_eq!(request.passphrase_policy, PassphrasePolicy::Plaintext);
    }

    #[test]
    fn missing_common_name_is_a_config_error() {
        let err =
            resolve_from_cli(&DnOverrides::default(), &ConfigOverrides::default(), None)
                .unwrap_err();
        assert!(matches!(err, CertSmithError::Config(_)));

        let dn = DnOverrides {
            organization: Some("Acme".to_string()),
            ..DnOverrides::default()
        };
        let err = resolve_from_cli(&dn, &ConfigOverrides::default(), None).unwrap_err();
        match err {
            CertSmithError::Config(msg) => assert!(msg.contains("commonName")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn blank_common_name_is_rejected() {
        let value = json!({"commonName": "   "});
        let err = resolve_from_json_value(&value, None).unwrap_err();
        assert!(matches!(err, CertSmithError::Config(_)));
    }

    #[test]
    fn unsupported_private_key_type_is_rejected() {
        let value = json!({"commonName": "dev.local", "private_key_type": "DSA"});
        let err = resolve_from_json_value(&value, None).unwrap_err();
        match err {
            CertSmithError::Config(msg) => assert!(msg.contains("DSA")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn unsupported_digest_is_rejected() {
        let value = json!({"commonName": "dev.local", "digest_alg": "md5"});
        assert!(matches!(
            resolve_from_json_value(&value, None),
            Err(CertSmithError::Config(_))
        ));
    }

    #[test]
    fn digest_parsing_accepts_dashed_and_mixed_case() {
        assert_eq!(
            "SHA-256".parse::<DigestAlgorithm>().unwrap(),
            DigestAlgorithm::Sha256
        );
        assert_eq!(
            "Sha384".parse::<DigestAlgorithm>().unwrap(),
            DigestAlgorithm::Sha384
        );
    }

    #[test]
    fn flat_and_explicit_shapes_resolve_identically() {
        let flat = json!({
            "commonName": "shape.test",
            "organizationName": "Acme",
            "digest_alg": "sha256",
            "valid_days": 30
        });
        let explicit = json!({
            "dn": {"commonName": "shape.test", "organizationName": "Acme"},
            "config": {"digest_alg": "sha256", "valid_days": 30}
        });

        let a = resolve_from_json_value(&flat, None).unwrap();
        let b = resolve_from_json_value(&explicit, None).unwrap();
        assert_eq!(a.dn, b.dn);
        assert_eq!(a.config, b.config);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let value = json!({
            "commonName": "dev.local",
            "somethingElse": "ignored",
            "answer": 42
        });
        let request = resolve_from_json_value(&value, None).unwrap();
        assert_eq!(request.dn.common_name, "dev.local");
        assert_eq!(request.config, IssuanceConfig::default());
    }

    #[test]
    fn string_values_are_coerced() {
        let value = json!({
            "commonName": "coerce.test",
            "private_key_bits": "4096",
            "valid_days": "30",
            "encrypt_key": "yes",
            "passphrase": "hunter2"
        });
        let request = resolve_from_json_value(&value, None).unwrap();
        assert_eq!(request.config.private_key_bits, 4096);
        assert_eq!(request.config.valid_days, 30);
        assert!(request.config.encrypt_key);
    }

    #[test]
    fn bool_coercion_rejects_garbage() {
        let value = json!({"commonName": "dev.local", "encrypt_key": "maybe"});
        assert!(matches!(
            resolve_from_json_value(&value, None),
            Err(CertSmithError::Config(_))
        ));
    }

    #[test]
    fn non_positive_ints_are_rejected() {
        for payload in [
            json!({"commonName": "x", "private_key_bits": 0}),
            json!({"commonName": "x", "valid_days": -5}),
            json!({"commonName": "x", "valid_days": "zero"}),
        ] {
            assert!(matches!(
                resolve_from_json_value(&payload, None),
                Err(CertSmithError::Config(_))
            ));
        }
    }

    #[test]
    fn san_entries_are_classified_in_order() {
        let value = json!({
            "commonName": "san.test",
            "subject_alt_names": ["san.test", "192.0.2.7", "2001:db8::7", "alt.san.test"]
        });
        let request = resolve_from_json_value(&value, None).unwrap();
        assert_eq!(
            request.subject_alt_names,
            vec![
                SanEntry::Dns("san.test".to_string()),
                SanEntry::Ip("192.0.2.7".parse::<IpAddr>().unwrap()),
                SanEntry::Ip("2001:db8::7".parse::<IpAddr>().unwrap()),
                SanEntry::Dns("alt.san.test".to_string()),
            ]
        );
    }

    #[test]
    fn reserved_keys_work_in_both_shapes() {
        let in_config_block = json!({
            "dn": {"commonName": "reserved.test"},
            "config": {"subject_alt_names": ["a.test"], "passphrase": "pp", "encrypt_key": true}
        });
        let request = resolve_from_json_value(&in_config_block, None).unwrap();
        assert_eq!(request.subject_alt_names.len(), 1);
        assert_eq!(
            request.passphrase_policy,
            PassphrasePolicy::Encrypted("pp".to_string())
        );

        let top_level = json!({
            "dn": {"commonName": "reserved.test"},
            "config": {"encrypt_key": true},
            "subject_alt_names": ["b.test"],
            "passphrase": "pp2"
        });
        let request = resolve_from_json_value(&top_level, None).unwrap();
        assert_eq!(
            request.subject_alt_names,
            vec![SanEntry::Dns("b.test".to_string())]
        );
        assert_eq!(
            request.passphrase_policy,
            PassphrasePolicy::Encrypted("pp2".to_string())
        );
    }

    #[test]
    fn encrypt_key_without_passphrase_fails_at_resolution() {
        let value = json!({"commonName": "locked.test", "encrypt_key": true});
        let err = resolve_from_json_value(&value, None).unwrap_err();
        match err {
            CertSmithError::Config(msg) => assert!(msg.contains("passphrase")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn cli_passphrase_takes_precedence_over_json() {
        let value = json!({
            "commonName": "locked.test",
            "encrypt_key": true,
            "passphrase": "from-json"
        });
        let request = resolve_from_json_value(&value, Some("from-cli")).unwrap();
        assert_eq!(
            request.passphrase_policy,
            PassphrasePolicy::Encrypted("from-cli".to_string())
        );
    }

    #[test]
    fn passphrase_without_encrypt_key_is_ignored() {
        let value = json!({"commonName": "open.test", "passphrase": "unused"});
        let request = resolve_from_json_value(&value, None).unwrap();
        assert_eq!(request.passphrase_policy, PassphrasePolicy::Plaintext);
    }

    #[test]
    fn top_level_must_be_an_object() {
        let err = resolve_from_json_value(&json!(["not", "an", "object"]), None).unwrap_err();
        assert!(matches!(err, CertSmithError::Config(_)));
    }
}
