use crate::data::{CommandData, CommandResults};
use async_trait::async_trait;
use std::future::Future;

/// The business logic bound to a command.
///
/// The descriptor only holds the action; invoking it with a populated
/// [`CommandData`] is the dispatching handler's job.
#[async_trait]
pub trait Action: Send + Sync {
    async fn execute(&self, data: CommandData) -> Response;
}

/// What an action hands back: plain reply text or a results record.
#[derive(Debug, Clone)]
pub enum Response {
    Text(String),
    Results(Box<CommandResults>),
}

impl From<String> for Response {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Response {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<CommandResults> for Response {
    fn from(results: CommandResults) -> Self {
        Self::Results(Box::new(results))
    }
}

impl From<anyhow::Error> for Response {
    fn from(err: anyhow::Error) -> Self {
        Self::Text(format!("{err:#}"))
    }
}

/// Wraps an async function or closure into an [`Action`], so commands can
/// be declared inline from a literal definition.
pub fn action_fn<F, Fut>(f: F) -> FnAction<F>
where
    F: Fn(CommandData) -> Fut + Send + Sync,
    Fut: Future<Output = Response> + Send,
{
    FnAction(f)
}

pub struct FnAction<F>(F);

#[async_trait]
impl<F, Fut> Action for FnAction<F>
where
    F: Fn(CommandData) -> Fut + Send + Sync,
    Fut: Future<Output = Response> + Send,
{
    async fn execute(&self, data: CommandData) -> Response {
        (self.0)(data).await
    }
}

#[cfg(test)]
mod tests {
    use super::{action_fn, Action, Response};
    use crate::command::{Command, CommandOptions};
    use crate::data::{CommandData, CommandResults};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Arc;
    use teloxide::prelude::*;
    use tokio::sync::Mutex;

    fn message(text: &str) -> Message {
        serde_json::from_value(serde_json::json!({
            "message_id": 1,
            "date": 1686000000,
            "chat": { "id": 1, "type": "private", "first_name": "Test" },
            "from": { "id": 1, "is_bot": false, "first_name": "Test" },
            "text": text,
        }))
        .unwrap()
    }

    fn data() -> CommandData {
        CommandData {
            commands: Arc::new(HashMap::new()),
            client: Bot::new("123456:TEST"),
            replacers: Arc::new(HashMap::new()),
            msg: message("/ping"),
            args: vec![],
            table_data: None,
            db: Arc::new(Mutex::new(sqlite::open(":memory:").unwrap())),
        }
    }

    struct Ping;

    #[async_trait]
    impl Action for Ping {
        async fn execute(&self, _data: CommandData) -> Response {
            Response::from("Pong!")
        }
    }

    #[tokio::test]
    async fn held_action_runs_through_descriptor() {
        let command = Command::new("ping", "Pong!", CommandOptions::default(), Ping);
        match command.action.execute(data()).await {
            Response::Text(text) => assert_eq!(text, "Pong!"),
            Response::Results(_) => panic!("expected text"),
        }
    }

    #[tokio::test]
    async fn closure_action_reads_context() {
        let action = action_fn(|data: CommandData| async move {
            let row = data.table_data.unwrap_or_default();
            Response::Text(format!(
                "{} commands, balance {}",
                data.commands.len(),
                row["balance"]
            ))
        });

        let mut data = data();
        data.commands = Arc::new(HashMap::from([(
            "ping".to_owned(),
            Command::new("ping", "Pong!", CommandOptions::default(), Ping),
        )]));
        data.table_data = Some(serde_json::json!({ "balance": 3 }));

        match action.execute(data).await {
            Response::Text(text) => assert_eq!(text, "1 commands, balance 3"),
            Response::Results(_) => panic!("expected text"),
        }
    }

    #[tokio::test]
    async fn action_returns_results_record() {
        let draw = Command::new(
            "draw",
            "Renders a picture.",
            CommandOptions::default(),
            action_fn(|data: CommandData| async move {
                Response::from(CommandResults {
                    command: data.commands["draw"].clone(),
                    content: "done".to_owned(),
                    embed: None,
                    file: Some(vec![0x89, 0x50]),
                    rsp: None,
                })
            }),
        );

        let mut data = data();
        data.commands = Arc::new(HashMap::from([("draw".to_owned(), draw.clone())]));

        match draw.action.execute(data).await {
            Response::Results(results) => {
                assert_eq!(results.command.name, "draw");
                assert_eq!(results.content, "done");
                assert_eq!(results.file, Some(vec![0x89, 0x50]));
                assert!(results.rsp.is_none());
            }
            Response::Text(_) => panic!("expected results"),
        }
    }

    #[test]
    fn response_folds_error_chains_into_text() {
        let err = anyhow::anyhow!("socket closed").context("failed to fetch rates");
        match Response::from(err) {
            Response::Text(text) => assert_eq!(text, "failed to fetch rates: socket closed"),
            Response::Results(_) => panic!("expected text"),
        }
    }

    #[test]
    fn response_from_text() {
        match Response::from("hi".to_owned()) {
            Response::Text(text) => assert_eq!(text, "hi"),
            Response::Results(_) => panic!("expected text"),
        }
    }
}
