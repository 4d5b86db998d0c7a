//! # Product Commands
//!
//! Handlers for listing, lookup, record edits and the average price.
//!
//! ## Modify Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Product ID: 1                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  find_by_id(1) ──► one snapshot used for every prompt below             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Name [Laptop HP]:          ◄── Enter keeps                             │
//! │  Category [Electronics]:                                                │
//! │  Price [899.99]: 849.5      ◄── replaced                                │
//! │  Stock [15]:                                                            │
//! │  Description [...]:                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  RawProductPatch ──► editor.modify_draft(1, &patch)                     │
//! │                      all fields checked before anything changes         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use tracing::info;

use super::{format_product_line, report};
use crate::error::ConsoleError;
use crate::prompt::Prompter;
use crate::state::Session;
use stockroom_core::validation::parse_id;
use stockroom_core::{Product, ProductId, RawProductInput, RawProductPatch};

/// Prints every product with its description.
pub fn list_products<R: BufRead, W: Write>(
    session: &Session,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<()> {
    let products = session.catalog().list();

    if products.is_empty() {
        return prompter.say("The catalog is empty.");
    }

    prompter.say(format!("--- Products ({}) ---", products.len()))?;
    for product in &products {
        prompter.say(format_product_line(session.config(), product))?;
        if let Some(description) = &product.description {
            prompter.say(format!("    {}", description))?;
        }
    }
    Ok(())
}

/// Looks up one product by id.
pub fn find_product<R: BufRead, W: Write>(
    session: &Session,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<()> {
    let Some(product) = ask_existing(session, prompter)? else {
        return Ok(());
    };

    prompter.say(format_product_line(session.config(), &product))?;
    if let Some(description) = &product.description {
        prompter.say(format!("    {}", description))?;
    }
    Ok(())
}

/// Prompts for a new product and adds it.
pub fn add_product<R: BufRead, W: Write>(
    session: &mut Session,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<()> {
    let raw = RawProductInput {
        name: prompter.ask("Name")?,
        category: prompter.ask("Category")?,
        price: prompter.ask("Price")?,
        stock: prompter.ask("Stock")?,
        description: Some(prompter.ask("Description (optional)")?),
    };

    match session.editor().add_draft(&raw) {
        Ok(product) => {
            info!(id = product.id, name = %product.name, "Product added");
            prompter.say("✅ Product added")?;
            prompter.say(format_product_line(session.config(), &product))
        }
        Err(err) => report(prompter, err.into()),
    }
}

/// Prompts for field changes on an existing product.
pub fn modify_product<R: BufRead, W: Write>(
    session: &mut Session,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<()> {
    let Some(current) = ask_existing(session, prompter)? else {
        return Ok(());
    };

    prompter.say("Press Enter to keep the value shown in brackets.")?;
    let raw = RawProductPatch {
        name: prompter.ask_keeping("Name", &current.name)?,
        category: prompter.ask_keeping("Category", &current.category)?,
        price: prompter.ask_keeping("Price", &current.price.to_string())?,
        stock: prompter.ask_keeping("Stock", &current.stock.to_string())?,
        description: prompter
            .ask_keeping("Description", current.description.as_deref().unwrap_or(""))?,
    };

    match session.editor().modify_draft(current.id, &raw) {
        Ok(product) => {
            info!(id = product.id, "Product modified");
            prompter.say("✅ Product updated")?;
            prompter.say(format_product_line(session.config(), &product))
        }
        Err(err) => report(prompter, err.into()),
    }
}

/// Deletes a product after confirmation.
pub fn delete_product<R: BufRead, W: Write>(
    session: &mut Session,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<()> {
    let Some(product) = ask_existing(session, prompter)? else {
        return Ok(());
    };

    if !prompter.confirm(&format!("Delete '{}'?", product.name))? {
        return prompter.say("Deletion cancelled.");
    }

    if session.catalog_mut().remove(product.id) {
        info!(id = product.id, "Product deleted");
        prompter.say("✅ Product deleted")
    } else {
        report(prompter, ConsoleError::not_found(product.id))
    }
}

/// Prints the mean price of the catalog.
pub fn average_price<R: BufRead, W: Write>(
    session: &Session,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<()> {
    match session.catalog().average_price() {
        Some(average) => prompter.say(format!(
            "Average price: {} ({} products)",
            session.config().format_price(average),
            session.catalog().len()
        )),
        None => prompter.say("No products in the catalog; there is no average price."),
    }
}

/// Prompts for an id and resolves it, reporting bad or unknown ids.
fn ask_existing<R: BufRead, W: Write>(
    session: &Session,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<Option<Product>> {
    let raw = prompter.ask("Product ID")?;

    let Some(id) = parse_id(&raw) else {
        report(
            prompter,
            ConsoleError::validation(format!("'{}' is not a valid product ID", raw)),
        )?;
        return Ok(None);
    };

    lookup(session, prompter, id)
}

fn lookup<R: BufRead, W: Write>(
    session: &Session,
    prompter: &mut Prompter<R, W>,
    id: ProductId,
) -> anyhow::Result<Option<Product>> {
    let found = session.catalog().find_by_id(id);
    if found.is_none() {
        report(prompter, ConsoleError::not_found(id))?;
    }
    Ok(found)
}
