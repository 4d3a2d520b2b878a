//! Example configuration generation.
//!
//! Produces a sample JSON document in the explicit `{dn, config}` shape,
//! including a `subject_alt_names` array, that feeds straight back into the
//! configuration resolver.

use std::fs;
use std::path::Path;

use serde_json::{Value, json};

use crate::error::CertSmithError;

/// Constructs the example configuration document.
pub fn build_example_config() -> Value {
    json!({
        "dn": {
            "countryName": "UK",
            "stateOrProvinceName": "Somerset",
            "localityName": "Glastonbury",
            "organizationName": "Certsmith Project",
            "organizationalUnitName": "Certificate Tooling",
            "commonName": "example.certsmith.test",
            "emailAddress": "admin@example.test"
        },
        "config": {
            "digest_alg": "sha512",
            "private_key_bits": 2048,
            "private_key_type": "RSA",
            "encrypt_key": false,
            "valid_days": 365,
            "subject_alt_names": [
                "example.certsmith.test",
                "www.example.certsmith.test"
            ]
        }
    })
}

/// Emits the example configuration to stdout, or to `example_file` when
/// one is given.
pub fn generate_example_config(example_file: Option<&Path>) -> Result<(), CertSmithError> {
    let json_str = serde_json::to_string_pretty(&build_example_config())
        .map_err(|e| CertSmithError::Generation(format!("Failed to render example config: {e}")))?;

    match example_file {
        None => println!("{json_str}"),
        Some(path) => {
            fs::write(path, format!("{json_str}\n")).map_err(|e| {
                CertSmithError::Output(format!(
                    "Unable to write example config to {}: {e}",
                    path.display()
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::resolve_from_json_value;

    #[test]
    fn example_config_resolves_cleanly() {
        let request = resolve_from_json_value(&build_example_config(), None).unwrap();
        assert_eq!(request.dn.common_name, "example.certsmith.test");
        assert_eq!(request.subject_alt_names.len(), 2);
        assert!(!request.config.encrypt_key);
    }
}
