//! imgcrypt — encrypt or decrypt every `.png` / `.jpg` in a folder.
//!
//! ```text
//! imgcrypt ./pics encrypt            # writes ./pics/encrypted/*_encrypted.*
//! imgcrypt ./pics/encrypted decrypt  # writes ./pics/encrypted/decrypted/*_decrypted.*
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use imgcrypt_rs::aliases::PasswordString;
use imgcrypt_rs::consts::DEFAULT_PBKDF2_ITERATIONS;
use imgcrypt_rs::{
    run_batch, FailurePolicy, ImgcryptError, KdfParams, Mode, PipelineConfig, Prf,
    TracingReporter,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, EnvFilter};

/// Prompts before giving up on an empty password.
const PASSWORD_ATTEMPTS: usize = 3;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Operation {
    Encrypt,
    Decrypt,
}

impl From<Operation> for Mode {
    fn from(op: Operation) -> Self {
        match op {
            Operation::Encrypt => Mode::Encrypt,
            Operation::Decrypt => Mode::Decrypt,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

/// Encrypt or decrypt files.
#[derive(Parser, Debug)]
#[command(name = "imgcrypt", version, about, long_about = None)]
struct Args {
    /// Path to the folder containing the files
    folder_path: PathBuf,

    /// Operation to perform
    #[arg(value_enum)]
    operation: Operation,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Password (skips the prompt; prefer the prompt on shared machines)
    #[arg(long, env = "IMGCRYPT_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// PBKDF2 iteration count (must match between encrypt and decrypt)
    #[arg(long, env = "IMGCRYPT_ITERATIONS", default_value_t = DEFAULT_PBKDF2_ITERATIONS)]
    iterations: u32,

    /// PBKDF2 pseudorandom function: sha1, sha256 or sha512
    #[arg(long, env = "IMGCRYPT_PRF", default_value_t = Prf::Sha1)]
    prf: Prf,

    /// Stop at the first file that fails
    #[arg(long)]
    fail_fast: bool,

    /// Log level
    #[arg(
        long,
        value_enum,
        env = "IMGCRYPT_LOG_LEVEL",
        ignore_case = true,
        default_value_t = LogLevel::Info
    )]
    log_level: LogLevel,
}

fn setup_logging(log_level: LogLevel) -> Result<()> {
    let level = Level::from(log_level);
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")?;

    Ok(())
}

fn read_password(mode: Mode, supplied: Option<String>) -> Result<PasswordString> {
    if let Some(password) = supplied {
        if password.is_empty() {
            bail!(ImgcryptError::EmptyPassword);
        }
        return Ok(PasswordString::new(password));
    }

    let mut prompt = match mode {
        Mode::Encrypt => "Enter a password for encryption: ",
        Mode::Decrypt => "Enter the password for decryption: ",
    };

    for _ in 0..PASSWORD_ATTEMPTS {
        let password = rpassword::prompt_password(prompt).context("Failed to read password")?;
        if !password.is_empty() {
            return Ok(PasswordString::new(password));
        }
        prompt = match mode {
            Mode::Encrypt => "Password cannot be empty. Enter a password for encryption: ",
            Mode::Decrypt => "Password cannot be empty. Enter the password for decryption: ",
        };
    }

    bail!(ImgcryptError::EmptyPassword)
}

fn run(args: Args) -> Result<bool> {
    let mode = Mode::from(args.operation);

    let config = PipelineConfig::default()
        .with_kdf(KdfParams {
            iterations: args.iterations,
            prf: args.prf,
        })
        .with_failure_policy(if args.fail_fast {
            FailurePolicy::Abort
        } else {
            FailurePolicy::Continue
        })
        .with_verbose(args.verbose);
    config.kdf.validate()?;

    if !args.folder_path.is_dir() {
        bail!("not a directory: {}", args.folder_path.display());
    }

    let password = read_password(mode, args.password)?;
    debug!(?mode, iterations = config.kdf.iterations, prf = %config.kdf.prf, "starting batch");

    let report = run_batch(&args.folder_path, mode, &password, &config, &TracingReporter)
        .with_context(|| format!("Failed to {mode} {}", args.folder_path.display()))?;

    Ok(report.is_success())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = setup_logging(args.log_level) {
        eprintln!("Error: {e:#}");
        return ExitCode::FAILURE;
    }

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_parses_known_names() {
        let args = Args::try_parse_from(["imgcrypt", "pics", "encrypt", "--log-level", "DEBUG"])
            .unwrap();
        assert_eq!(args.log_level, LogLevel::Debug);
        assert_eq!(Level::from(args.log_level), Level::DEBUG);
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let err = Args::try_parse_from(["imgcrypt", "pics", "encrypt", "--log-level", "verbose"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn defaults_match_library_defaults() {
        let args = Args::try_parse_from(["imgcrypt", "pics", "decrypt"]).unwrap();
        assert_eq!(args.operation, Operation::Decrypt);
        assert_eq!(args.log_level, LogLevel::Info);
        assert_eq!(args.prf, Prf::Sha1);
        assert!(!args.fail_fast);
    }
}
