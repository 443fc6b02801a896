//! Command descriptors for chat bots: static metadata (name, description,
//! declared arguments, optional backing table, restricted flag) bundled with
//! an action, plus rendering of the one-line help summary a help command
//! prints for each entry.
//!
//! Dispatching, argument parsing, permission checks and the table layer all
//! belong to the surrounding bot; this crate only describes commands.
//!
//! ```
//! use botcmd::{action_fn, Arg, Command, CommandData, CommandOptions, Response};
//!
//! let echo = Command::new(
//!     "echo",
//!     "Repeats input.",
//!     CommandOptions {
//!         args: vec![Arg::new("text").mand()],
//!         ..Default::default()
//!     },
//!     action_fn(|data: CommandData| async move { Response::Text(data.args.join(" ")) }),
//! );
//! assert_eq!(echo.info(), "**echo <text>** - *Repeats input.*");
//! ```

pub mod action;
pub use action::{action_fn, Action, FnAction, Response};

pub mod arg;
pub use arg::Arg;

pub mod command;
pub use command::{Command, CommandOptions};

pub mod data;
pub use data::{CommandData, CommandResults, Replacer};
