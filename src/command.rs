use crate::action::Action;
use crate::arg::Arg;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The static metadata bundle for one invocable chat-bot command.
///
/// Descriptors are built once from a literal definition, collected by the
/// dispatching handler, and never mutated afterwards.
#[derive(Clone)]
pub struct Command {
    /// The command name, unique among the commands a handler registers.
    pub name: String,
    /// The command description.
    pub desc: String,
    /// Arguments the command takes, in call-syntax order.
    pub args: Vec<Arg>,
    /// Database table to fetch a row from before the action runs, empty for
    /// none; the fetched row reaches the action as `table_data`.
    pub db_table: String,
    /// Whether the command is restricted to admin use; enforced by the
    /// dispatching handler.
    pub restricted: bool,
    /// The command action.
    pub action: Arc<dyn Action>,
}

/// The optional parts of a command definition, all defaulted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandOptions {
    /// Arguments the command takes.
    pub args: Vec<Arg>,
    /// Database table to fetch a row from, empty for none.
    pub db_table: String,
    /// Whether the command is restricted to admin use.
    pub restricted: bool,
}

impl Command {
    pub fn new(
        name: impl Into<String>,
        desc: impl Into<String>,
        options: CommandOptions,
        action: impl Action + 'static,
    ) -> Self {
        let CommandOptions {
            args,
            db_table,
            restricted,
        } = options;
        Self {
            name: name.into(),
            desc: desc.into(),
            args,
            db_table,
            restricted,
            action: Arc::new(action),
        }
    }

    /// One-line summary of the command:
    /// `**name <mandatory arg> (optional arg)** - *description*`.
    ///
    /// Each argument is followed by its delimiter, a single space if unset;
    /// the final argument's trailing delimiter is dropped.
    pub fn info(&self) -> String {
        let usage: String = self
            .args
            .iter()
            .map(|arg| format!("{arg}{}", arg.delim.as_deref().unwrap_or(" ")))
            .collect();
        match self.args.last() {
            Some(last) => {
                let trim = last.delim.as_deref().map_or(1, str::len);
                format!(
                    "**{} {}** - *{}*",
                    self.name,
                    &usage[..usage.len() - trim],
                    self.desc
                )
            }
            None => format!("**{}** - *{}*", self.name, self.desc),
        }
    }
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("desc", &self.desc)
            .field("args", &self.args)
            .field("db_table", &self.db_table)
            .field("restricted", &self.restricted)
            .finish_non_exhaustive()
    }
}
