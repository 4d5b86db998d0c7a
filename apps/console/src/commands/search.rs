//! # Search Commands
//!
//! The search submenu: single filters or a combination of them.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Search Flow                                  │
//! │                                                                         │
//! │  Submenu choice                                                         │
//! │    1 ──► [Category]                                                     │
//! │    2 ──► [PriceRange]                                                   │
//! │    3 ──► [Availability]                                                 │
//! │    4 ──► "1,3" ──► FilterKind::parse_selection ──► [Category, Avail.]   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  One prompt per kind builds a FilterSpec                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  catalog.search(&spec) ──► matching lines or                            │
//! │                            "No products match the search criteria"      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use tracing::debug;

use super::{print_products, report};
use crate::error::{ConsoleError, ErrorCode};
use crate::prompt::Prompter;
use crate::state::Session;
use stockroom_core::filter::select_category;
use stockroom_core::{FilterKind, FilterSpec};

const COMBINE_CHOICE: &str = "4";
const BACK_CHOICE: &str = "0";

/// Shows the search submenu and runs one search.
pub fn search_products<R: BufRead, W: Write>(
    session: &Session,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<()> {
    prompter.say("--- Search products ---")?;
    for kind in FilterKind::ALL {
        prompter.say(format!("{}. By {}", kind.choice(), kind.label().to_lowercase()))?;
    }
    prompter.say(format!("{}. Combine filters", COMBINE_CHOICE))?;
    prompter.say(format!("{}. Back", BACK_CHOICE))?;

    let choice = prompter.ask("Select a search option")?;
    let kinds = match choice.as_str() {
        BACK_CHOICE => return Ok(()),
        COMBINE_CHOICE => match ask_combination(prompter)? {
            Some(kinds) => kinds,
            None => return Ok(()),
        },
        other => match FilterKind::from_choice(other) {
            Some(kind) => vec![kind],
            None => return prompter.say("Invalid option."),
        },
    };

    let Some(spec) = ask_filters(session, prompter, &kinds)? else {
        return Ok(());
    };

    debug!(?spec, "Running search");
    match session.catalog().search(&spec) {
        Ok(products) => print_products(prompter, session.config(), &products),
        Err(err) => report(prompter, err.into()),
    }
}

/// Asks which filters to combine.
fn ask_combination<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<Option<Vec<FilterKind>>> {
    prompter.say("Available filters:")?;
    for kind in FilterKind::ALL {
        prompter.say(format!("  {}. {}", kind.choice(), kind.label()))?;
    }

    let raw = prompter.ask("Filters to combine (e.g. 1,3)")?;
    match FilterKind::parse_selection(&raw) {
        Ok(kinds) => Ok(Some(kinds)),
        Err(err) => {
            report(prompter, err.into())?;
            Ok(None)
        }
    }
}

/// Prompts for the criteria of each selected kind.
///
/// Returns `None` after reporting the first unusable answer.
fn ask_filters<R: BufRead, W: Write>(
    session: &Session,
    prompter: &mut Prompter<R, W>,
    kinds: &[FilterKind],
) -> anyhow::Result<Option<FilterSpec>> {
    let mut spec = FilterSpec::new();

    for kind in kinds {
        let step = match kind {
            FilterKind::Category => {
                ask_category(session, prompter)?.map(|category| spec.clone().category(category))
            }
            FilterKind::PriceRange => {
                ask_price_range(prompter)?.map(|(min, max)| spec.clone().price_between(min, max))
            }
            FilterKind::Availability => Ok(spec.clone().only_in_stock()),
        };

        match step {
            Ok(next) => spec = next,
            Err(err) => {
                report(prompter, err)?;
                return Ok(None);
            }
        }
    }

    Ok(Some(spec))
}

fn ask_category<R: BufRead, W: Write>(
    session: &Session,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<Result<String, ConsoleError>> {
    let categories = session.catalog().categories();
    if categories.is_empty() {
        return Ok(Err(ConsoleError::new(
            ErrorCode::InvalidFilter,
            "There are no categories to choose from",
        )));
    }

    prompter.say("Categories:")?;
    for (index, category) in categories.iter().enumerate() {
        prompter.say(format!("  {}. {}", index + 1, category))?;
    }

    let raw = prompter.ask("Category number")?;
    Ok(select_category(&categories, &raw).map_err(ConsoleError::from))
}

fn ask_price_range<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<Result<(f64, f64), ConsoleError>> {
    let min = prompter.ask("Minimum price")?;
    let max = prompter.ask("Maximum price")?;

    Ok(parse_bound(&min).and_then(|min| Ok((min, parse_bound(&max)?))))
}

fn parse_bound(raw: &str) -> Result<f64, ConsoleError> {
    raw.parse::<f64>().map_err(|_| {
        ConsoleError::new(
            ErrorCode::InvalidFilter,
            format!("Invalid filter: '{}' is not a price", raw),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::tests::{output_of, scripted};
    use crate::state::ConfigState;
    use stockroom_core::Product;
    use stockroom_store::CatalogStore;

    fn session() -> Session {
        let catalog = CatalogStore::from_seed(vec![
            Product::new(1, "Laptop HP", "Electronics", 899.99, 15),
            Product::new(2, "Monitor Dell", "Electronics", 299.99, 20),
            Product::new(3, "Mouse", "Accessories", 19.99, 50),
            Product::new(4, "Webcam", "Accessories", 45.0, 0),
        ])
        .unwrap();
        Session::new(catalog, ConfigState::default())
    }

    fn run(script: &str) -> String {
        let session = session();
        let mut prompter = scripted(script);
        search_products(&session, &mut prompter).unwrap();
        output_of(prompter)
    }

    #[test]
    fn test_search_by_category() {
        let output = run("1\n2\n");
        assert!(output.contains("  1. Electronics\n  2. Accessories\n"));
        assert!(output.contains("ID: 3 | Name: Mouse"));
        assert!(output.contains("ID: 4 | Name: Webcam"));
        assert!(!output.contains("Laptop HP"));
    }

    #[test]
    fn test_search_by_category_out_of_range() {
        let output = run("1\n5\n");
        assert!(output.contains("❌ Error: Invalid filter: '5' is not a category number"));
    }

    #[test]
    fn test_search_by_price_range_is_inclusive() {
        let output = run("2\n19.99\n299.99\n");
        assert!(output.contains("ID: 2 | Name: Monitor Dell"));
        assert!(output.contains("ID: 3 | Name: Mouse"));
        assert!(output.contains("ID: 4 | Name: Webcam"));
        assert!(!output.contains("Laptop HP"));
    }

    #[test]
    fn test_search_by_price_range_min_above_max() {
        let output = run("2\n500\n100\n");
        assert!(output.contains("❌ Error: Invalid filter"));
        assert!(!output.contains("ID: "));
    }

    #[test]
    fn test_search_by_price_range_not_a_number() {
        let output = run("2\ncheap\n100\n");
        assert!(output.contains("❌ Error: Invalid filter: 'cheap' is not a price"));
    }

    #[test]
    fn test_search_by_availability() {
        let output = run("3\n");
        assert!(output.contains("ID: 3 | Name: Mouse"));
        assert!(!output.contains("Webcam"));
    }

    #[test]
    fn test_search_combined() {
        let output = run("4\n3,1\n2\n");
        assert!(output.contains("ID: 3 | Name: Mouse"));
        assert!(!output.contains("ID: 4"));
        assert!(!output.contains("ID: 1"));
    }

    #[test]
    fn test_search_combined_no_match() {
        let output = run("4\n1,2\n1\n1000\n2000\n");
        assert!(output.contains("No products match the search criteria"));
    }

    #[test]
    fn test_search_combined_empty_selection() {
        let output = run("4\n7,x\n");
        assert!(output.contains("❌ Error: Invalid filter: select at least one filter"));
    }

    #[test]
    fn test_search_back_and_invalid_option() {
        assert!(!run("0\n").contains("❌"));
        assert!(run("9\n").contains("Invalid option."));
    }

    #[test]
    fn test_search_category_on_empty_catalog() {
        let session = Session::new(CatalogStore::new(), ConfigState::default());
        let mut prompter = scripted("1\n");
        search_products(&session, &mut prompter).unwrap();
        assert!(output_of(prompter).contains("There are no categories to choose from"));
    }
}
