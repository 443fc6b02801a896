use crate::command::Command;
use std::collections::HashMap;
use std::sync::Arc;
use teloxide::prelude::*;
use tokio::sync::Mutex;

/// Everything the dispatching handler passes to a command action.
///
/// Populating this record is the handler's job; commands only consume it.
#[derive(Clone)]
pub struct CommandData {
    /// The commands known to the handler, keyed by name.
    pub commands: Arc<HashMap<String, Command>>,
    /// The chat client driving the bot.
    pub client: Bot,
    /// The text replacers known to the handler, keyed by trigger.
    pub replacers: Arc<HashMap<String, Replacer>>,
    /// The message that triggered the command.
    pub msg: Message,
    /// Argument values parsed from the message text, in declaration order.
    pub args: Vec<String>,
    /// Row fetched from the command's `db_table`, if one was requested.
    pub table_data: Option<serde_json::Value>,
    /// Shared connection to the table layer.
    pub db: Arc<Mutex<sqlite::Connection>>,
}

/// A text replacer registered alongside commands; the handler swaps matched
/// keys in outgoing text for the action's output.
#[derive(Clone)]
pub struct Replacer {
    /// The trigger key.
    pub key: String,
    /// The replacer description.
    pub desc: String,
    /// Produces replacement text for the matched content.
    pub action: Arc<dyn Fn(&str) -> String + Send + Sync>,
}

/// The structured record an action may return in place of plain reply text.
#[derive(Debug, Clone)]
pub struct CommandResults {
    /// The originating command.
    pub command: Command,
    /// The response text.
    pub content: String,
    /// Client-specific rich payload attached to the response.
    pub embed: Option<serde_json::Value>,
    /// Raw file payload; the handler wraps it for sending.
    pub file: Option<Vec<u8>>,
    /// The sent message, filled in by the handler after delivery.
    pub rsp: Option<Message>,
}
