//! # Console Commands Module
//!
//! One handler per main menu entry.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (shared rendering)
//! ├── product.rs  ◄─── List, find, add, modify, delete, average
//! └── search.rs   ◄─── Search submenu
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Console Command Flow                                 │
//! │                                                                         │
//! │  menu::run reads "3"                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  product::add_product(session, prompter)                                │
//! │         │  prompts for raw strings                                      │
//! │         ▼                                                               │
//! │  session.editor().add_draft(&raw) ──► Result<Product, CoreError>        │
//! │         │                                                               │
//! │         ├── Ok  ──► "✅ Product added" + product line                    │
//! │         └── Err ──► ConsoleError ──► "❌ Error: ..."                     │
//! │                                                                         │
//! │  Handlers only return Err for terminal I/O failures (or end of input). │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod product;
pub mod search;

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::ConsoleError;
use crate::prompt::Prompter;
use crate::state::ConfigState;
use stockroom_core::Product;

/// One-line rendering used by finds and search results.
pub fn format_product_line(config: &ConfigState, product: &Product) -> String {
    format!(
        "ID: {} | Name: {} | Price: {} | Category: {} | Stock: {}",
        product.id,
        product.name,
        config.format_price(product.price),
        product.category,
        product.stock
    )
}

/// Prints a list of products, or the no-match message.
pub fn print_products<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &ConfigState,
    products: &[Product],
) -> anyhow::Result<()> {
    if products.is_empty() {
        return prompter.say("No products match the search criteria");
    }

    for product in products {
        prompter.say(format_product_line(config, product))?;
    }
    Ok(())
}

/// Shows a recoverable failure to the operator.
pub fn report<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    error: ConsoleError,
) -> anyhow::Result<()> {
    debug!(code = %error.code, message = %error.message, "Operation failed");
    prompter.say(format!("❌ Error: {}", error.message))
}
