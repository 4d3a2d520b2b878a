//! Filesystem output for PEM artifacts.
//!
//! This is the collaborator the core pipeline hands its artifacts to: it
//! owns directory naming and performs all writes. The pipeline itself never
//! touches the filesystem. Failures are Output errors naming the path, and
//! a partial write is never reported as success.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::CertSmithError;
use crate::pipeline::PemArtifactSet;

type Result<T> = std::result::Result<T, CertSmithError>;

/// Ensures the requested output directory exists.
pub fn prepare_output_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| {
        CertSmithError::Output(format!(
            "Unable to create output directory {}: {e}",
            path.display()
        ))
    })
}

/// Produces a filesystem-friendly slug from the given string.
///
/// Lowercased; alphanumerics, dots, dashes, and underscores are kept,
/// whitespace becomes underscores, other punctuation is dropped. Falls back
/// to `"cert"` when nothing survives.
pub fn slugify(value: &str) -> String {
    let mut slug = String::new();
    for ch in value.trim().to_lowercase().chars() {
        if ch.is_alphanumeric() || matches!(ch, '.' | '-' | '_') {
            slug.push(ch);
        } else if ch.is_whitespace() {
            slug.push('_');
        }
    }

    let slug = slug.trim_matches(|c| matches!(c, '.' | '_' | '-'));
    if slug.is_empty() {
        "cert".to_string()
    } else {
        slug.to_string()
    }
}

/// Creates a unique subdirectory for one certificate's artifacts.
///
/// Naming preference: the slugified common name, then the label (typically
/// the config file name) without its extension, then `"cert"`. When the
/// chosen name already exists a numeric suffix (`-1`, `-2`, ...) avoids
/// overwriting.
pub fn make_cert_subdir(
    base_output_dir: &Path,
    common_name: Option<&str>,
    label: Option<&str>,
) -> Result<PathBuf> {
    let base_name = match common_name.map(str::trim).filter(|cn| !cn.is_empty()) {
        Some(cn) => slugify(cn),
        None => match label {
            Some(label) => slugify(
                Path::new(label)
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .unwrap_or("cert"),
            ),
            None => "cert".to_string(),
        },
    };

    let mut candidate = base_output_dir.join(&base_name);
    let mut counter = 0u32;
    loop {
        if !candidate.exists() {
            fs::create_dir_all(&candidate).map_err(|e| {
                CertSmithError::Output(format!(
                    "Unable to create directory {}: {e}",
                    candidate.display()
                ))
            })?;
            return Ok(candidate);
        }
        counter += 1;
        candidate = base_output_dir.join(format!("{base_name}-{counter}"));
    }
}

/// Writes an artifact set into its own subdirectory under `output_dir` as
/// `cert.pem`, `csr.pem`, and `key.pem`. Returns the subdirectory path.
pub fn write_to_dir(
    artifacts: &PemArtifactSet,
    common_name: Option<&str>,
    label: Option<&str>,
    output_dir: &Path,
) -> Result<PathBuf> {
    let subdir = make_cert_subdir(output_dir, common_name, label)?;

    for (file_name, contents) in [
        ("cert.pem", &artifacts.certificate_pem),
        ("csr.pem", &artifacts.csr_pem),
        ("key.pem", &artifacts.private_key_pem),
    ] {
        let path = subdir.join(file_name);
        fs::write(&path, contents).map_err(|e| {
            CertSmithError::Output(format!("Failed to write {}: {e}", path.display()))
        })?;
    }

    debug!(dir = %subdir.display(), "wrote PEM artifacts");
    Ok(subdir)
}

/// Prints an artifact set to stdout with section headers. The label
/// delineates sections when several certificates print in one run.
pub fn write_to_stdout(artifacts: &PemArtifactSet, label: Option<&str>) {
    if let Some(label) = label {
        println!("\n########## CONFIG: {label} ##########\n");
    }

    println!("# Self-signed certificate (PEM)");
    println!("{}", artifacts.certificate_pem);

    println!("# Certificate Signing Request (CSR, PEM)");
    println!("{}", artifacts.csr_pem);

    println!("# Private Key (PEM)");
    println!("{}", artifacts.private_key_pem);
}
