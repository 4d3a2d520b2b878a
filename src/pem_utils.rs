/// Parse a PEM document, keeping its label so callers can check what kind
/// of object they were handed.
pub fn parse_pem(input: &[u8]) -> Result<pem::Pem, crate::error::CertSmithError> {
    pem::parse(input)
        .map_err(|e| crate::error::CertSmithError::Generation(format!("Failed to parse PEM: {e}")))
}
