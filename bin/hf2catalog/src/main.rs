//! hf2catalog: print a `ModelCatalog` entry for a Hugging Face model repo.
//!
//! ```text
//! hf2catalog https://huggingface.co/Qwen/Qwen2.5-7B-Instruct          # YAML
//! hf2catalog https://huggingface.co/Qwen/Qwen2.5-7B-Instruct --json   # JSON
//! ```
//!
//! The document goes to stdout. On failure a single `Error: <message>` line
//! goes to stderr and the exit status is 1.

mod config;

use std::io::Write;
use std::process::ExitCode;

use catalog_hub::{convert, render, HubClient, HubError, OutputFormat};
use clap::Parser;
use tracing::debug;

use crate::config::Config;

/// Convert a Hugging Face model repository into a ModelCatalog entry.
#[derive(Debug, Parser)]
#[command(name = "hf2catalog", version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Model page URL, e.g. https://huggingface.co/<owner>/<repo>
    #[arg(value_name = "REPO_URL")]
    repo_url: Option<String>,

    /// Print JSON instead of YAML
    #[arg(short, long)]
    json: bool,
}

impl Cli {
    fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Yaml
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let cfg = Config::from_env();
    init_tracing(&cfg);

    let result = run(&cli, cfg).await;
    let status = report(result, &mut std::io::stdout().lock(), &mut std::io::stderr().lock());
    ExitCode::from(status)
}

/// Write the document to `stdout`, or a single `Error: <message>` line to
/// `stderr`. Returns the process exit status.
fn report(result: anyhow::Result<String>, stdout: &mut impl Write, stderr: &mut impl Write) -> u8 {
    let written = result.and_then(|document| {
        stdout.write_all(document.as_bytes())?;
        stdout.flush()?;
        Ok(())
    });
    match written {
        Ok(()) => 0,
        Err(e) => {
            // Nothing else can be reported if stderr itself is gone.
            let _ = writeln!(stderr, "Error: {e}");
            1
        }
    }
}

async fn run(cli: &Cli, cfg: Config) -> anyhow::Result<String> {
    let url = cli
        .repo_url
        .as_deref()
        .filter(|u| !u.trim().is_empty())
        .ok_or_else(|| HubError::InvalidReference("Please provide a Hugging Face repo URL.".into()))?;

    let client = HubClient::new(cfg.hub)?;
    let host = client.config().host()?;
    debug!(%host, "resolving repository");

    let catalog = convert(&client, url, &host).await?;
    let mut document = render(&catalog, cli.format())?;
    if !document.ends_with('\n') {
        document.push('\n');
    }
    Ok(document)
}

fn init_tracing(cfg: &Config) {
    let env_filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(f) => f,
        Err(_) => match cfg.log_level.parse::<tracing_subscriber::EnvFilter>() {
            Ok(f) => f,
            Err(e) => {
                eprintln!(
                    "WARN: CATALOG_LOG='{}' is not a valid tracing filter ({}); falling back to 'warn'",
                    cfg.log_level, e
                );
                tracing_subscriber::EnvFilter::new("warn")
            }
        },
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if cfg.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
