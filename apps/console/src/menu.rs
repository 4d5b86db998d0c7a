//! # Main Menu
//!
//! Reads a choice, dispatches to a handler, repeats until "Exit" or end of
//! input.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::commands::{product, search};
use crate::prompt::{InputClosed, Prompter};
use crate::state::Session;

/// Entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    List,
    Find,
    Add,
    Modify,
    Delete,
    Search,
    Average,
    Exit,
}

impl MenuOption {
    /// Every entry, in display order.
    pub const ALL: [MenuOption; 8] = [
        MenuOption::List,
        MenuOption::Find,
        MenuOption::Add,
        MenuOption::Modify,
        MenuOption::Delete,
        MenuOption::Search,
        MenuOption::Average,
        MenuOption::Exit,
    ];

    pub fn choice(self) -> u8 {
        match self {
            MenuOption::List => 1,
            MenuOption::Find => 2,
            MenuOption::Add => 3,
            MenuOption::Modify => 4,
            MenuOption::Delete => 5,
            MenuOption::Search => 6,
            MenuOption::Average => 7,
            MenuOption::Exit => 8,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::List => "List products",
            MenuOption::Find => "Find product by ID",
            MenuOption::Add => "Add product",
            MenuOption::Modify => "Modify product",
            MenuOption::Delete => "Delete product",
            MenuOption::Search => "Search products",
            MenuOption::Average => "Average price",
            MenuOption::Exit => "Exit",
        }
    }

    pub fn from_choice(raw: &str) -> Option<MenuOption> {
        let choice = raw.trim().parse::<u8>().ok()?;
        MenuOption::ALL
            .into_iter()
            .find(|option| option.choice() == choice)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Runs the menu loop.
///
/// End of input is a normal exit; any other I/O failure is returned.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<()> {
    loop {
        match step(session, prompter) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(err) if err.is::<InputClosed>() => {
                debug!("Input closed, leaving menu");
                break;
            }
            Err(err) => return Err(err),
        }
    }

    info!(products = session.catalog().len(), "Console session finished");
    prompter.say("Goodbye!")
}

fn step<R: BufRead, W: Write>(
    session: &mut Session,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<Flow> {
    prompter.say("")?;
    prompter.say(format!("=== {} ===", session.config().store_name))?;
    for option in MenuOption::ALL {
        prompter.say(format!("{}. {}", option.choice(), option.label()))?;
    }

    let raw = prompter.ask("Select an option (1-8)")?;
    let Some(option) = MenuOption::from_choice(&raw) else {
        prompter.say("Invalid option. Try again.")?;
        return Ok(Flow::Continue);
    };

    debug!(?option, "Menu selection");
    match option {
        MenuOption::List => product::list_products(session, prompter)?,
        MenuOption::Find => product::find_product(session, prompter)?,
        MenuOption::Add => product::add_product(session, prompter)?,
        MenuOption::Modify => product::modify_product(session, prompter)?,
        MenuOption::Delete => product::delete_product(session, prompter)?,
        MenuOption::Search => search::search_products(session, prompter)?,
        MenuOption::Average => product::average_price(session, prompter)?,
        MenuOption::Exit => return Ok(Flow::Exit),
    }

    Ok(Flow::Continue)
}
