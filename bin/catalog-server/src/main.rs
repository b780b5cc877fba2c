//! catalog-server: the catalog browser from the command line.
//!
//! Startup order for `serve`:
//! 1. Parse configuration from environment variables, then apply flags.
//! 2. Initialise tracing.
//! 3. Build `data.js` / `data.yaml` from the catalog directory.
//! 4. Serve the API and the output directory until SIGINT / SIGTERM.

use std::io::Write;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use catalog_site::{
    export_selected, format_task_name, load_catalog_dir, router, AppState, CatalogFilter,
    SiteBuilder, SiteConfig,
};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(
    name = "catalog-server",
    about = "Build, serve and query the model catalog",
    version = env!("CARGO_PKG_VERSION"),
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory of ModelCatalog YAML files [env: CATALOG_DIR]
    #[arg(long, global = true, value_name = "PATH")]
    catalog_dir: Option<PathBuf>,

    /// Directory the site data is written to and served from [env: CATALOG_DIST]
    #[arg(long, global = true, value_name = "PATH")]
    out_dir: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate data.js and data.yaml
    Build,

    /// Build once, then serve the site with CORS enabled
    Serve {
        /// Address to bind [env: CATALOG_BIND]
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,

        /// Serve existing data files without rebuilding
        #[arg(long)]
        no_build: bool,
    },

    /// List catalog entries
    List {
        /// Case-insensitive match on display name, name or task
        #[arg(short, long)]
        search: Option<String>,

        /// Only entries with exactly this task
        #[arg(short, long)]
        task: Option<String>,
    },

    /// Print the selected entries as YAML
    Export {
        /// Entry ids (metadata.name)
        #[arg(required = true, value_name = "ID")]
        ids: Vec<String>,

        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the JSON Schema of a ModelCatalog document
    Schema,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = apply_flags(SiteConfig::from_env(), &cli);
    init_tracing(&cfg);

    match cli.command {
        Commands::Build => {
            let summaries = SiteBuilder::new(&cfg.catalog_dir, &cfg.out_dir).build()?;
            println!(
                "Generated data for {} models in {}",
                summaries.len(),
                cfg.out_dir.display()
            );
        }
        Commands::Serve { no_build, .. } => serve(cfg, no_build).await?,
        Commands::List { search, task } => {
            let summaries = load_catalog_dir(&cfg.catalog_dir)?;
            let filter = CatalogFilter::new(search, task);
            let mut stdout = std::io::stdout().lock();
            for s in filter.apply(&summaries) {
                writeln!(
                    stdout,
                    "{}\t{}\t{}\t{}\t{}",
                    s.id,
                    s.display_name,
                    format_task_name(&s.task),
                    s.engine,
                    s.version
                )?;
            }
        }
        Commands::Export { ids, output } => {
            let summaries = load_catalog_dir(&cfg.catalog_dir)?;
            let yaml = export_selected(&summaries, &ids)?;
            match output {
                Some(path) => std::fs::write(&path, yaml)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => print!("{yaml}"),
            }
        }
        Commands::Schema => {
            let schema = catalog_types::model_catalog_schema();
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
    }
    Ok(())
}

/// Command-line flags win over environment variables.
fn apply_flags(mut cfg: SiteConfig, cli: &Cli) -> SiteConfig {
    if let Some(dir) = &cli.catalog_dir {
        cfg.catalog_dir = dir.clone();
    }
    if let Some(dir) = &cli.out_dir {
        cfg.out_dir = dir.clone();
    }
    if let Commands::Serve { bind: Some(bind), .. } = &cli.command {
        cfg.bind_address = bind.clone();
    }
    cfg
}

async fn serve(cfg: SiteConfig, no_build: bool) -> anyhow::Result<()> {
    info!(version = env!("CARGO_PKG_VERSION"), "catalog-server starting");

    let catalog = if no_build {
        load_catalog_dir(&cfg.catalog_dir)?
    } else {
        SiteBuilder::new(&cfg.catalog_dir, &cfg.out_dir).build()?
    };

    let addr: SocketAddr = cfg
        .bind_address
        .parse()
        .with_context(|| format!("invalid bind address {:?}", cfg.bind_address))?;
    let out_dir = cfg.out_dir.clone();
    let app = router(Arc::new(AppState::new(cfg, catalog)));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, out_dir = %out_dir.display(), "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("catalog-server stopped");
    Ok(())
}

fn init_tracing(cfg: &SiteConfig) {
    let env_filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(f) => f,
        Err(_) => match cfg.log_level.parse::<tracing_subscriber::EnvFilter>() {
            Ok(f) => f,
            Err(e) => {
                eprintln!(
                    "WARN: CATALOG_LOG='{}' is not a valid tracing filter ({}); falling back to 'info'",
                    cfg.log_level, e
                );
                tracing_subscriber::EnvFilter::new("info")
            }
        },
    };

    // stdout is reserved for list / export / schema output.
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

/// Resolves when SIGINT (Ctrl-C) or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install CTRL+C signal handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => warn!(error = %e, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("shutdown signal received; starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_environment_defaults() {
        let cli = Cli::try_parse_from([
            "catalog-server",
            "serve",
            "--bind",
            "127.0.0.1:9000",
            "--catalog-dir",
            "models",
        ])
        .unwrap();
        let cfg = apply_flags(SiteConfig::default(), &cli);
        assert_eq!(cfg.bind_address, "127.0.0.1:9000");
        assert_eq!(cfg.catalog_dir, PathBuf::from("models"));
        assert_eq!(cfg.out_dir, PathBuf::from("./dist"));
    }

    #[test]
    fn list_takes_search_and_task() {
        let cli = Cli::try_parse_from(["catalog-server", "list", "-s", "qwen", "--task", "text-generation"])
            .unwrap();
        match cli.command {
            Commands::List { search, task } => {
                assert_eq!(search.as_deref(), Some("qwen"));
                assert_eq!(task.as_deref(), Some("text-generation"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn export_requires_ids() {
        assert!(Cli::try_parse_from(["catalog-server", "export"]).is_err());
        let cli = Cli::try_parse_from(["catalog-server", "export", "a", "b"]).unwrap();
        assert!(matches!(cli.command, Commands::Export { ids, .. } if ids == ["a", "b"]));
    }
}
