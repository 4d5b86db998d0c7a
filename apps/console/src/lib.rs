//! # Stockroom Console Library
//!
//! Core library for the Stockroom operator console.
//!
//! ## Module Organization
//! ```text
//! stockroom_console_lib/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── Configuration state
//! │   └── session.rs  ◄─── Catalog owned for the session
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── list / find / add / modify / delete / average
//! │   └── search.rs   ◄─── Search submenu and filter prompts
//! ├── menu.rs         ◄─── Main menu loop
//! ├── prompt.rs       ◄─── Line-oriented input/output
//! └── error.rs        ◄─── Operator-facing error type
//! ```

pub mod commands;
pub mod error;
pub mod menu;
pub mod prompt;
pub mod state;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::ConsoleError;
use prompt::Prompter;
use state::{ConfigState, Session};
use stockroom_store::{seed, CatalogStore};

/// Command line arguments.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "stockroom", version, about = "Menu-driven inventory manager")]
pub struct Cli {
    /// Configuration file (TOML). Defaults to ./stockroom.toml when present.
    #[arg(long, env = "STOCKROOM_CONFIG")]
    pub config: Option<PathBuf>,

    /// JSON file with the initial catalog, replacing the built-in products.
    #[arg(long, conflicts_with = "no_seed")]
    pub seed: Option<PathBuf>,

    /// Start with an empty catalog.
    #[arg(long)]
    pub no_seed: bool,
}

/// Runs the console against stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults, then stockroom.toml / --config, then STOCKROOM_*        │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • RUST_LOG wins, otherwise the configured log_filter                │
/// │     • written to stderr so the menu stays readable                      │
/// │                                                                         │
/// │  3. Seed Catalog ─────────────────────────────────────────────────────► │
/// │     • --no-seed, --seed <file>, config seed_path, or built-in products  │
/// │                                                                         │
/// │  4. Run Menu ─────────────────────────────────────────────────────────► │
/// │     • until "Exit" or end of input                                      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = ConfigState::load(cli.config.as_deref()).context("Failed to load configuration")?;

    init_tracing(&config.log_filter);
    info!(store = %config.store_name, "Starting Stockroom console");

    let catalog = build_catalog(&cli, &config)?;
    info!(products = catalog.len(), "Catalog ready");

    let mut session = Session::new(catalog, config);
    let mut prompter = Prompter::stdio();
    menu::run(&mut session, &mut prompter)
}

/// Builds the initial catalog from the selected seed source.
pub fn build_catalog(cli: &Cli, config: &ConfigState) -> anyhow::Result<CatalogStore> {
    if cli.no_seed {
        return Ok(CatalogStore::new());
    }

    let products = match cli.seed.as_ref().or(config.seed_path.as_ref()) {
        Some(path) => seed::load_products(path).map_err(ConsoleError::from)?,
        None => seed::default_products(),
    };

    CatalogStore::from_seed(products)
        .map_err(ConsoleError::from)
        .context("Seed catalog rejected")
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every catalog mutation
/// - Default: the configured filter (`warn`)
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A second initialization (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from(["stockroom", "--seed", "products.json"]);
        assert_eq!(cli.seed, Some(PathBuf::from("products.json")));
        assert!(!cli.no_seed);

        assert!(Cli::try_parse_from(["stockroom", "--seed", "a.json", "--no-seed"]).is_err());
    }

    #[test]
    fn test_build_catalog_defaults_to_builtin_products() {
        let catalog = build_catalog(&Cli::default(), &ConfigState::default()).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_build_catalog_no_seed() {
        let cli = Cli {
            no_seed: true,
            ..Cli::default()
        };
        assert!(build_catalog(&cli, &ConfigState::default()).unwrap().is_empty());
    }

    #[test]
    fn test_build_catalog_from_configured_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 4, "name": "Desk", "category": "Furniture", "price": 120.0, "stock": 2}}]"#
        )
        .unwrap();

        let config = ConfigState {
            seed_path: Some(file.path().to_path_buf()),
            ..ConfigState::default()
        };
        let catalog = build_catalog(&Cli::default(), &config).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.find_by_id(4).is_some());
    }

    #[test]
    fn test_build_catalog_rejects_duplicate_seed_ids() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 1, "name": "A", "category": "X", "price": 1.0, "stock": 0}},
               {{"id": 1, "name": "B", "category": "X", "price": 2.0, "stock": 0}}]"#
        )
        .unwrap();

        let cli = Cli {
            seed: Some(file.path().to_path_buf()),
            ..Cli::default()
        };
        let err = build_catalog(&cli, &ConfigState::default()).unwrap_err();
        let console = err.downcast_ref::<ConsoleError>().unwrap();
        assert_eq!(console.code, error::ErrorCode::InvariantViolation);
    }

    #[test]
    fn test_build_catalog_missing_seed_file_is_a_seed_error() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            seed: Some(dir.path().join("absent.json")),
            ..Cli::default()
        };

        let err = build_catalog(&cli, &ConfigState::default()).unwrap_err();
        let console = err.downcast_ref::<ConsoleError>().unwrap();
        assert_eq!(console.code, error::ErrorCode::SeedError);
        assert!(err.to_string().starts_with("[SEED_ERROR]"));
    }
}
