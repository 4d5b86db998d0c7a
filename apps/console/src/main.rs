//! # Stockroom Console Entry Point
//!
//! ## Startup Sequence
//! 1. Parse command line arguments
//! 2. Load configuration (defaults → file → `STOCKROOM_*` environment)
//! 3. Initialize tracing (stderr)
//! 4. Seed the catalog
//! 5. Run the main menu until the operator exits or input ends

use clap::Parser;

use stockroom_console_lib::Cli;

fn main() -> anyhow::Result<()> {
    // The actual setup is in lib.rs for better testability
    stockroom_console_lib::run(Cli::parse())
}
