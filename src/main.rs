//! Command-line interface for certsmith.
//!
//! Parses CLI arguments, validates the selected operating mode, and
//! dispatches to the generation, validation, inspection, or
//! example-configuration routines. Each error kind maps to its own process
//! exit code: 2 for configuration, 3 for generation, 4 for output.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use certsmith::config::{self, ConfigOverrides, DnOverrides};
use certsmith::error::CertSmithError;
use certsmith::pipeline::PemArtifactSet;
use certsmith::{example, inspect, output, pipeline};

type Result<T> = std::result::Result<T, CertSmithError>;

#[derive(Debug, Parser)]
#[command(
    name = "certsmith",
    version,
    about = "Generate self-signed certificate(s), CSR(s), and private key(s)."
)]
struct Cli {
    /// Generate an example JSON configuration and exit.
    #[arg(long)]
    generate_example: bool,

    /// With --generate-example, write the example JSON configuration to this
    /// file instead of stdout.
    #[arg(long, value_name = "FILE")]
    example_file: Option<PathBuf>,

    /// Path to JSON config file for DN and certificate settings.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory containing JSON config files for bulk generation.
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Directory to write outputs into. For each cert, a subdirectory is
    /// created containing cert.pem, csr.pem, key.pem.
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Validate a JSON configuration file and exit without generating
    /// certificates.
    #[arg(long, value_name = "FILE")]
    validate_config: Option<PathBuf>,

    /// Inspect an existing PEM-encoded certificate and print basic details.
    #[arg(long, value_name = "CERT")]
    inspect_cert: Option<PathBuf>,

    /// Country Name (C). Example: UK
    #[arg(long, value_name = "C")]
    country_name: Option<String>,

    /// State or Province Name (ST). Example: Somerset
    #[arg(long, value_name = "ST")]
    state_or_province_name: Option<String>,

    /// Locality Name (L). Example: Glastonbury
    #[arg(long, value_name = "L")]
    locality_name: Option<String>,

    /// Organization Name (O).
    #[arg(long, value_name = "O")]
    organization_name: Option<String>,

    /// Organizational Unit Name (OU).
    #[arg(long, value_name = "OU")]
    organizational_unit_name: Option<String>,

    /// Common Name (CN). For SSL: hostname; for S/MIME: person's name.
    #[arg(long, value_name = "CN")]
    common_name: Option<String>,

    /// Email Address.
    #[arg(long, value_name = "EMAIL")]
    email_address: Option<String>,

    /// Digest algorithm to use for signing (sha256, sha384, sha512).
    /// Default: sha512
    #[arg(long, value_name = "ALG")]
    digest_alg: Option<String>,

    /// Private key size in bits. Default: 2048
    #[arg(long, value_name = "BITS")]
    private_key_bits: Option<u64>,

    /// Private key type (currently only RSA is supported).
    #[arg(long, value_name = "TYPE")]
    private_key_type: Option<String>,

    /// Validity period for the certificate in days. Default: 365
    #[arg(long, value_name = "DAYS")]
    valid_days: Option<i64>,

    /// Encrypt the private key with a passphrase.
    #[arg(long, overrides_with = "no_encrypt_key")]
    encrypt_key: bool,

    /// Do not encrypt the private key (default).
    #[arg(long, overrides_with = "encrypt_key")]
    no_encrypt_key: bool,

    /// Passphrase to use when encrypting the private key (if --encrypt-key
    /// is set).
    #[arg(long, value_name = "PASS")]
    passphrase: Option<String>,
}

impl Cli {
    fn encrypt_key_override(&self) -> Option<bool> {
        if self.encrypt_key {
            Some(true)
        } else if self.no_encrypt_key {
            Some(false)
        } else {
            None
        }
    }

    fn dn_overrides(&self) -> DnOverrides {
        DnOverrides {
            country: self.country_name.clone(),
            state: self.state_or_province_name.clone(),
            locality: self.locality_name.clone(),
            organization: self.organization_name.clone(),
            organizational_unit: self.organizational_unit_name.clone(),
            common_name: self.common_name.clone(),
            email: self.email_address.clone(),
        }
    }

    fn config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            digest_alg: self.digest_alg.clone(),
            private_key_bits: self.private_key_bits,
            private_key_type: self.private_key_type.clone(),
            encrypt_key: self.encrypt_key_override(),
            valid_days: self.valid_days,
        }
    }

    fn any_dn_flag(&self) -> bool {
        self.country_name.is_some()
            || self.state_or_province_name.is_some()
            || self.locality_name.is_some()
            || self.organization_name.is_some()
            || self.organizational_unit_name.is_some()
            || self.common_name.is_some()
            || self.email_address.is_some()
    }

    fn any_config_flag(&self) -> bool {
        self.digest_alg.is_some()
            || self.private_key_bits.is_some()
            || self.private_key_type.is_some()
            || self.valid_days.is_some()
            || self.encrypt_key_override().is_some()
    }
}

/// Validates that the selected mode and CLI options are compatible. Runs
/// before anything touches the pipeline.
fn validate_mode_constraints(cli: &Cli) -> Result<()> {
    if cli.validate_config.is_some() {
        if cli.generate_example
            || cli.config.is_some()
            || cli.config_dir.is_some()
            || cli.output_dir.is_some()
            || cli.inspect_cert.is_some()
            || cli.any_dn_flag()
            || cli.any_config_flag()
        {
            return Err(CertSmithError::Config(
                "--validate-config cannot be combined with other generation options. \
                 Use it alone to check a single JSON config file."
                    .to_string(),
            ));
        }
        return Ok(());
    }

    if cli.generate_example {
        let mut conflicts: Vec<&str> = Vec::new();
        if cli.config.is_some() {
            conflicts.push("--config");
        }
        if cli.config_dir.is_some() {
            conflicts.push("--config-dir");
        }
        if cli.output_dir.is_some() {
            conflicts.push("--output-dir");
        }
        if cli.inspect_cert.is_some() {
            conflicts.push("--inspect-cert");
        }
        if cli.any_dn_flag() {
            conflicts.push("DN CLI options");
        }
        if cli.any_config_flag() {
            conflicts.push("CONFIG CLI options");
        }
        if !conflicts.is_empty() {
            return Err(CertSmithError::Config(format!(
                "--generate-example cannot be combined with certificate generation \
                 options. Use it alone (optionally with --example-file). \
                 Conflicting options: {}",
                conflicts.join(", ")
            )));
        }
        return Ok(());
    }

    if cli.config.is_some() && cli.config_dir.is_some() {
        return Err(CertSmithError::Config(
            "--config and --config-dir are mutually exclusive.".to_string(),
        ));
    }

    let using_config = cli.config.is_some() || cli.config_dir.is_some();
    if using_config && (cli.any_dn_flag() || cli.any_config_flag()) {
        return Err(CertSmithError::Config(
            "DN/CONFIG CLI options cannot be used together with --config or --config-dir. \
             Choose ONE mode:\n\
             \x20 * CLI-only: DN/CONFIG via CLI (no --config / --config-dir)\n\
             \x20 * Config file: --config <file.json>\n\
             \x20 * Config dir:  --config-dir <dir>"
                .to_string(),
        ));
    }

    Ok(())
}

fn emit(
    artifacts: &PemArtifactSet,
    common_name: &str,
    label: Option<&str>,
    output_dir: Option<&Path>,
) -> Result<()> {
    match output_dir {
        None => {
            output::write_to_stdout(artifacts, label);
            Ok(())
        }
        Some(dir) => output::write_to_dir(artifacts, Some(common_name), label, dir).map(|_| ()),
    }
}

/// Runs the pipeline for one JSON configuration file.
fn process_config_file(
    path: &Path,
    label: Option<&str>,
    output_dir: Option<&Path>,
    passphrase: Option<&str>,
) -> Result<()> {
    let request = config::resolve_from_json_file(path, passphrase)?;
    let artifacts = pipeline::run(&request)?;
    emit(&artifacts, &request.dn.common_name, label, output_dir)
}

fn process_config_file_mode(
    config_file: &Path,
    output_dir: Option<&Path>,
    passphrase: Option<&str>,
) -> Result<()> {
    if !config_file.is_file() {
        return Err(CertSmithError::Config(format!(
            "--config {} is not a file.",
            config_file.display()
        )));
    }
    process_config_file(config_file, None, output_dir, passphrase)
}

/// Processes every `*.json` file in a directory, in sorted order. Failing
/// files are reported and skipped; the run fails at the end if any did.
fn process_config_dir_mode(
    config_dir: &Path,
    output_dir: Option<&Path>,
    passphrase: Option<&str>,
) -> Result<()> {
    if !config_dir.is_dir() {
        return Err(CertSmithError::Config(format!(
            "--config-dir {} is not a directory.",
            config_dir.display()
        )));
    }

    let entries = fs::read_dir(config_dir).map_err(|e| {
        CertSmithError::Config(format!("Unable to read {}: {e}", config_dir.display()))
    })?;
    let mut json_files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    json_files.sort();

    if json_files.is_empty() {
        return Err(CertSmithError::Config(format!(
            "No *.json files found in {}",
            config_dir.display()
        )));
    }

    let mut errors = 0usize;
    for cfg_path in &json_files {
        let label = cfg_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("config.json")
            .to_string();
        if let Err(err) = process_config_file(cfg_path, Some(&label), output_dir, passphrase) {
            errors += 1;
            error!(config = %cfg_path.display(), "{err}");
        }
    }

    if errors > 0 {
        return Err(CertSmithError::Generation(format!(
            "{errors} config file(s) failed; see error messages above."
        )));
    }
    Ok(())
}

fn process_cli_mode(cli: &Cli, output_dir: Option<&Path>) -> Result<()> {
    let request = config::resolve_from_cli(
        &cli.dn_overrides(),
        &cli.config_overrides(),
        cli.passphrase.as_deref(),
    )?;
    let artifacts = pipeline::run(&request)?;
    emit(&artifacts, &request.dn.common_name, None, output_dir)
}

fn inspect_certificate_file(path: &Path) -> Result<()> {
    let data = fs::read(path).map_err(|e| {
        CertSmithError::Config(format!("Unable to read certificate {}: {e}", path.display()))
    })?;
    let report = inspect::inspect_pem(&data)?;

    println!("Certificate: {}", path.display());
    println!("{report}");
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    validate_mode_constraints(cli)?;

    if let Some(path) = &cli.validate_config {
        config::validate_config_file(path)?;
        println!("Configuration {} is valid.", path.display());
        return Ok(());
    }

    if let Some(path) = &cli.inspect_cert {
        return inspect_certificate_file(path);
    }

    if cli.generate_example {
        return example::generate_example_config(cli.example_file.as_deref());
    }

    if let Some(dir) = &cli.output_dir {
        output::prepare_output_dir(dir)?;
    }
    let output_dir = cli.output_dir.as_deref();
    let passphrase = cli.passphrase.as_deref();

    if let Some(config_dir) = &cli.config_dir {
        process_config_dir_mode(config_dir, output_dir, passphrase)
    } else if let Some(config_file) = &cli.config {
        process_config_file_mode(config_file, output_dir, passphrase)
    } else {
        process_cli_mode(cli, output_dir)
    }
}

fn exit_code(err: &CertSmithError) -> u8 {
    match err {
        CertSmithError::Config(_) => 2,
        CertSmithError::Generation(_) => 3,
        CertSmithError::Output(_) => 4,
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {err}");
            ExitCode::from(exit_code(&err))
        }
    }
}
