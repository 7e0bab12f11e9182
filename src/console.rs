//! Line-oriented command front end driving a [`ShoppingListController`].

use crate::api::{AddItemForm, ShoppingListController};
use crate::error::{ListError, ListResult};
use crate::render::DisplaySink;

pub const HELP_TEXT: &str = "\
commands:
  add <name> <quantity> <price>   add an item (name may contain spaces)
  remove <position>               remove the item at a 1-based position
  clear                           remove every item
  list                            redraw the list
  help                            show this text
  quit | exit                     leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddItemForm),
    Remove { position: usize },
    Clear,
    List,
    Help,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> ListResult<Option<Self>> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&keyword, rest)) = tokens.split_first() else {
            return Ok(None);
        };

        let command = match keyword.to_ascii_lowercase().as_str() {
            "add" => {
                if rest.len() < 3 {
                    return Err(ListError::InvalidCommand(
                        "usage: add <name> <quantity> <price>".to_owned(),
                    ));
                }
                // The name keeps its inner spacing; only the two trailing
                // numeric tokens are split off.
                let args = &line.trim_start()[keyword.len()..];
                let Some((name, quantity, price)) = split_add_args(args) else {
                    return Err(ListError::InvalidCommand(
                        "usage: add <name> <quantity> <price>".to_owned(),
                    ));
                };
                Self::Add(AddItemForm::new(name, quantity, price))
            }
            "remove" | "rm" => {
                let [position] = rest else {
                    return Err(ListError::InvalidCommand(
                        "usage: remove <position>".to_owned(),
                    ));
                };
                let position = position.parse::<usize>().map_err(|e| {
                    ListError::InvalidCommand(format!("invalid position `{position}`: {e}"))
                })?;
                Self::Remove { position }
            }
            "clear" => Self::Clear,
            "list" | "ls" => Self::List,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => {
                return Err(ListError::InvalidCommand(format!(
                    "unknown command `{other}` (try `help`)"
                )));
            }
        };
        Ok(Some(command))
    }
}

fn split_add_args(args: &str) -> Option<(&str, &str, &str)> {
    let (head, price) = split_last_token(args)?;
    let (name, quantity) = split_last_token(head)?;
    let name = name.trim();
    (!name.is_empty()).then_some((name, quantity, price))
}

fn split_last_token(text: &str) -> Option<(&str, &str)> {
    let text = text.trim_end();
    let split = text.rfind(char::is_whitespace)?;
    let (head, last) = text.split_at(split);
    Some((head.trim_end(), last.trim_start()))
}

/// Runs `command` against the controller.
///
/// Positions outside the list are ignored like any other missing item, but
/// still redraw.
pub fn execute<S: DisplaySink>(
    command: Command,
    controller: &mut ShoppingListController<S>,
) -> ListResult<Outcome> {
    match command {
        Command::Add(mut form) => {
            form.submit(controller)?;
        }
        Command::Remove { position } => {
            let id = position
                .checked_sub(1)
                .and_then(|index| controller.list().id_at(index));
            match id {
                Some(id) => {
                    controller.remove_item(id)?;
                }
                None => controller.render()?,
            }
        }
        Command::Clear => controller.clear_list()?,
        Command::List => controller.render()?,
        Command::Help => return Ok(Outcome::Help),
        Command::Quit => return Ok(Outcome::Quit),
    }
    Ok(Outcome::Continue)
}
