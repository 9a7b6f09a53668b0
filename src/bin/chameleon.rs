use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use chameleon_sig::config::{Config, OutputFormat};
use chameleon_sig::{
    Commitment, Curve, CurveKind, Digest, Error, PublicKey, Randomness, SecureRng, Signer,
    SigningKey, Verifier, P256, P384,
};
use clap::{Parser, Subcommand};
use crossterm::execute;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use serde_json::json;
use tracing::{debug, error};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Failures of the command-line tool.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Chameleon(#[from] Error),

    #[error("Failed to encode JSON output: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "chameleon")]
#[command(about = "Chameleon hash signatures with trapdoor re-signing", long_about = None)]
#[command(version)]
struct Cli {
    /// Output format (overrides configuration)
    #[arg(short, long, value_enum, global = true)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a new private key
    Keygen {
        /// Curve for the new key (defaults to the configured curve)
        #[arg(short, long, value_enum)]
        curve: Option<CurveKind>,
    },

    /// Derive the public key of a private key
    Pubkey {
        /// Private key (hex)
        #[arg(short, long, env = "CHAMELEON_KEY", hide_env_values = true)]
        key: String,
    },

    /// Commit to a message under fresh randomness
    Sign {
        /// Private key (hex)
        #[arg(short, long, env = "CHAMELEON_KEY", hide_env_values = true)]
        key: String,

        /// Message to sign
        #[arg(short, long)]
        message: String,
    },

    /// Open an existing digest to a new message
    Resign {
        /// Private key (hex)
        #[arg(short, long, env = "CHAMELEON_KEY", hide_env_values = true)]
        key: String,

        /// Message the digest was produced for
        #[arg(short, long)]
        message: String,

        /// Message the digest should open to
        #[arg(short, long)]
        new_message: String,

        /// Randomness of the original opening (hex)
        #[arg(short, long)]
        randomness: String,
    },

    /// Check an opening against a public key
    Verify {
        /// Public key (uncompressed SEC1, hex)
        #[arg(short, long)]
        public_key: String,

        /// Message to check
        #[arg(short, long)]
        message: String,

        /// Claimed digest (hex)
        #[arg(short, long)]
        digest: String,

        /// Disclosed randomness (hex)
        #[arg(short, long)]
        randomness: String,
    },
}

fn print_colored(color: Color, text: &str) {
    let mut stdout = io::stdout();
    if stdout.is_terminal() {
        execute!(stdout, SetForegroundColor(color), Print(text), ResetColor).ok();
    } else {
        write!(stdout, "{text}").ok();
    }
    stdout.flush().ok();
}

fn println_colored(color: Color, text: &str) {
    print_colored(color, text);
    println!();
}

fn print_field(label: &str, value: &str) {
    print_colored(Color::Cyan, &format!("{label}: "));
    println!("{value}");
}

/// Infers the curve of a private key from its decoded length.
fn curve_of_key(key_hex: &str) -> Result<CurveKind, Error> {
    let len = chameleon_sig::from_hex(key_hex)?.len();
    CurveKind::from_key_len(len)
        .ok_or_else(|| Error::Decode(format!("no supported curve has {len}-byte private keys")))
}

/// Infers the curve of an uncompressed public key from its decoded length.
fn curve_of_public_key(pk_hex: &str) -> Result<CurveKind, Error> {
    let len = chameleon_sig::from_hex(pk_hex)?.len();
    match len {
        n if n == P256::uncompressed_len() => Ok(CurveKind::P256),
        n if n == P384::uncompressed_len() => Ok(CurveKind::P384),
        _ => Err(Error::Decode(format!(
            "no supported curve has {len}-byte uncompressed public keys"
        ))),
    }
}

fn keygen<C: Curve>(output: OutputFormat) -> Result<(), CliError> {
    let sk = SigningKey::<C>::generate(&mut SecureRng::new())?;
    let pk = sk.public_key();

    match output {
        OutputFormat::Text => {
            print_field("curve", C::name());
            print_field("private key", &sk.to_hex());
            print_field("public key", &pk.to_hex());
        }
        OutputFormat::Json => {
            let value = json!({
                "curve": C::name(),
                "private_key": sk.to_hex().as_str(),
                "public_key": pk.to_hex(),
            });
            println!("{value}");
        }
    }
    Ok(())
}

fn pubkey<C: Curve>(key: &str, output: OutputFormat) -> Result<(), CliError> {
    let pk = SigningKey::<C>::from_hex(key)?.public_key();

    match output {
        OutputFormat::Text => print_field("public key", &pk.to_hex()),
        OutputFormat::Json => println!("{}", json!({ "public_key": pk.to_hex() })),
    }
    Ok(())
}

fn sign<C: Curve>(key: &str, message: &str, output: OutputFormat) -> Result<(), CliError> {
    let signer = Signer::new(SigningKey::<C>::from_hex(key)?);
    let commitment: Commitment<C> = signer.commit(&mut SecureRng::new(), message.as_bytes())?;

    match output {
        OutputFormat::Text => {
            print_field("randomness", &commitment.randomness().to_hex());
            print_field("digest", &commitment.digest().to_hex());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&commitment)?);
        }
    }
    Ok(())
}

fn resign<C: Curve>(
    key: &str,
    message: &str,
    new_message: &str,
    randomness: &str,
    output: OutputFormat,
) -> Result<(), CliError> {
    let signer = Signer::new(SigningKey::<C>::from_hex(key)?);
    let r1 = Randomness::<C>::from_hex(randomness)?;
    let r2 = signer.re_sign(message.as_bytes(), new_message.as_bytes(), &r1)?;

    match output {
        OutputFormat::Text => print_field("randomness", &r2.to_hex()),
        OutputFormat::Json => println!("{}", json!({ "randomness": r2.to_hex() })),
    }
    Ok(())
}

fn verify<C: Curve>(
    public_key: &str,
    message: &str,
    digest: &str,
    randomness: &str,
    output: OutputFormat,
) -> Result<bool, CliError> {
    let verifier = Verifier::new(PublicKey::<C>::from_hex(public_key)?);
    let digest = Digest::from_hex(digest)?;
    let randomness = Randomness::<C>::from_hex(randomness)?;
    let valid = verifier.verify(message.as_bytes(), &digest, &randomness);

    match output {
        OutputFormat::Text if valid => println_colored(Color::Green, "valid"),
        OutputFormat::Text => println_colored(Color::Red, "invalid"),
        OutputFormat::Json => println!("{}", json!({ "valid": valid })),
    }
    Ok(valid)
}

macro_rules! dispatch {
    ($kind:expr, $func:ident($($arg:expr),* $(,)?)) => {
        match $kind {
            CurveKind::P256 => $func::<P256>($($arg),*),
            CurveKind::P384 => $func::<P384>($($arg),*),
        }
    };
}

fn run(cli: Cli, config: &Config) -> Result<ExitCode, CliError> {
    let output = cli.output.unwrap_or(config.output);

    match cli.command {
        Commands::Keygen { curve } => {
            let curve = curve.unwrap_or(config.curve);
            debug!(%curve, "generating key");
            dispatch!(curve, keygen(output))?;
        }
        Commands::Pubkey { key } => {
            dispatch!(curve_of_key(&key)?, pubkey(&key, output))?;
        }
        Commands::Sign { key, message } => {
            dispatch!(curve_of_key(&key)?, sign(&key, &message, output))?;
        }
        Commands::Resign {
            key,
            message,
            new_message,
            randomness,
        } => {
            dispatch!(
                curve_of_key(&key)?,
                resign(&key, &message, &new_message, &randomness, output)
            )?;
        }
        Commands::Verify {
            public_key,
            message,
            digest,
            randomness,
        } => {
            let valid = dispatch!(
                curve_of_public_key(&public_key)?,
                verify(&public_key, &message, &digest, &randomness, output)
            )?;
            if !valid {
                return Ok(ExitCode::from(1));
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration, using defaults: {e}");
        Config::default()
    });

    if let Err(e) = config.validate() {
        eprintln!("{e}");
        return ExitCode::from(2);
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run(cli, &config) {
        Ok(code) => code,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
