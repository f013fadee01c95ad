//! Interactive storefront shell.
//!
//! Reads one command per line from stdin and applies it to a
//! [`Storefront`] rendering to stdout. Commands run one at a time; the next
//! line is not read until the previous command, including its fetch, has
//! finished.

use std::fmt;
use std::io::{self, Stdout};
use std::str::{FromStr, SplitWhitespace};

use greenearth_cart::{CartStore, KeyValueStore};
use greenearth_catalog::CatalogClient;
use greenearth_core::MoneyLocale;
use greenearth_storefront::{Storefront, TerminalSurface};
use tokio::io::{AsyncBufReadExt, BufReader};

pub(crate) const HELP: &str = "\
Commands:
  cat <id>       show a category (\"all\" for every plant)
  details <n>    open details for card n
  add <n>        add card n to the cart
  inc <id>       one more of a cart line
  dec <id>       one fewer of a cart line
  rm <id>        remove a cart line
  close          close the details view
  cart           show the cart
  help           show this help
  quit           leave the storefront
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ShellCommand {
    Category(String),
    Details(usize),
    Add(usize),
    Increase(String),
    Decrease(String),
    Remove(String),
    Close,
    Cart,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParseError {
    Empty,
    Unknown(String),
    MissingArgument(&'static str),
    NotANumber(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty command"),
            ParseError::Unknown(word) => write!(f, "unknown command '{word}', try 'help'"),
            ParseError::MissingArgument(cmd) => write!(f, "'{cmd}' needs an argument"),
            ParseError::NotANumber(raw) => write!(f, "'{raw}' is not a card number"),
        }
    }
}

fn text_arg(words: &mut SplitWhitespace<'_>, cmd: &'static str) -> Result<String, ParseError> {
    words
        .next()
        .map(str::to_owned)
        .ok_or(ParseError::MissingArgument(cmd))
}

fn card_arg(words: &mut SplitWhitespace<'_>, cmd: &'static str) -> Result<usize, ParseError> {
    let raw = words.next().ok_or(ParseError::MissingArgument(cmd))?;
    raw.parse::<usize>()
        .map_err(|_| ParseError::NotANumber(raw.to_owned()))
}

impl FromStr for ShellCommand {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(ParseError::Empty);
        };
        let head = head.to_ascii_lowercase();

        match head.as_str() {
            "cat" | "category" => text_arg(&mut words, "cat").map(ShellCommand::Category),
            "details" | "d" => card_arg(&mut words, "details").map(ShellCommand::Details),
            "add" | "a" => card_arg(&mut words, "add").map(ShellCommand::Add),
            "inc" | "+" => text_arg(&mut words, "inc").map(ShellCommand::Increase),
            "dec" | "-" => text_arg(&mut words, "dec").map(ShellCommand::Decrease),
            "rm" | "remove" => text_arg(&mut words, "rm").map(ShellCommand::Remove),
            "close" => Ok(ShellCommand::Close),
            "cart" => Ok(ShellCommand::Cart),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
            _ => Err(ParseError::Unknown(head)),
        }
    }
}

/// What the loop should do after a command.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

async fn apply<S: KeyValueStore>(
    storefront: &mut Storefront<S, TerminalSurface<Stdout>>,
    command: ShellCommand,
) -> Flow {
    let outcome = match command {
        ShellCommand::Category(id) => storefront.select_category(&id).await,
        ShellCommand::Details(n) => storefront.open_details(n).await,
        ShellCommand::Add(n) => storefront.add_to_cart(n),
        ShellCommand::Increase(id) => {
            storefront.increase_qty(&id);
            Ok(())
        }
        ShellCommand::Decrease(id) => {
            storefront.decrease_qty(&id);
            Ok(())
        }
        ShellCommand::Remove(id) => {
            storefront.remove_from_cart(&id);
            Ok(())
        }
        ShellCommand::Close => {
            storefront.close_details();
            Ok(())
        }
        ShellCommand::Cart => {
            storefront.show_cart_panel();
            Ok(())
        }
        ShellCommand::Help => {
            print!("{HELP}");
            Ok(())
        }
        ShellCommand::Quit => return Flow::Stop,
    };
    if let Err(error) = outcome {
        println!("{error}");
    }
    Flow::Continue
}

/// Runs the interactive storefront until `quit`, end of input or ctrl-c.
///
/// # Errors
///
/// Returns an error if stdin cannot be read.
pub(crate) async fn run<S: KeyValueStore>(
    catalog: CatalogClient,
    cart_store: CartStore<S>,
    locale: MoneyLocale,
) -> anyhow::Result<()> {
    let mut storefront = Storefront::new(
        catalog,
        cart_store,
        TerminalSurface::new(io::stdout()),
        locale,
    );
    storefront.start().await;
    println!("Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("received ctrl-c, leaving storefront");
                None
            }
        };
        let Some(line) = line else { break };

        match line.parse::<ShellCommand>() {
            Ok(command) => {
                if apply(&mut storefront, command).await == Flow::Stop {
                    break;
                }
            }
            Err(ParseError::Empty) => {}
            Err(error) => println!("{error}"),
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "shell_test.rs"]
mod tests;
