use certsmith::cert::params::DistinguishedName;
use certsmith::config::{GenerationRequest, IssuanceConfig, PassphrasePolicy};

/// Builds a minimal plaintext generation request with a reduced key size so
/// test runs stay fast.
#[allow(dead_code)]
pub fn small_key_request(common_name: &str) -> GenerationRequest {
    GenerationRequest {
        dn: DistinguishedName::builder()
            .common_name(common_name.to_string())
            .build(),
        config: IssuanceConfig {
            private_key_bits: 1024,
            ..IssuanceConfig::default()
        },
        subject_alt_names: Vec::new(),
        passphrase_policy: PassphrasePolicy::Plaintext,
    }
}
