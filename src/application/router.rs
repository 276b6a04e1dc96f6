//! # Command Router
//!
//! Routes incoming messages to the appropriate command handler (in `interface/commands`).
//! It parses the message into a typed `CommandInvocation` (e.g., `/metar LFPG`)
//! and dispatches it with the necessary context.

use anyhow::Result;
use std::sync::Arc;

use crate::domain::traits::ChatProvider;
use crate::domain::types::CommandInvocation;
use crate::infrastructure::briefing::BriefingService;
use crate::interface::commands;

pub struct CommandRouter {
    briefing: Arc<BriefingService>,
}

impl CommandRouter {
    pub fn new(briefing: Arc<BriefingService>) -> Self {
        Self { briefing }
    }

    pub async fn route<C>(&self, chat: &C, message: &str, sender: &str) -> Result<()>
    where
        C: ChatProvider + Clone + Send + Sync + 'static,
    {
        // Anything that is not a slash command is not ours to answer
        let Some(invocation) = CommandInvocation::parse(message) else {
            return Ok(());
        };

        tracing::info!(
            "Router dispatching cmd='{}' args={:?} sender='{}'",
            invocation.command,
            invocation.args,
            sender
        );

        match invocation.command.as_str() {
            "start" => {
                commands::help::handle_start(chat).await?;
            }
            "help" => {
                commands::help::handle_help(chat).await?;
            }
            "metar" => {
                commands::weather::handle_metar(&self.briefing, chat, &invocation.args).await?;
            }
            "taf" => {
                commands::weather::handle_taf(&self.briefing, chat, &invocation.args).await?;
            }
            "notam" => {
                commands::weather::handle_notam(&self.briefing, chat, &invocation.args).await?;
            }
            "vol_local" => {
                commands::flight::handle_vol_local(&self.briefing, chat, &invocation.args).await?;
            }
            "trajet" => {
                commands::flight::handle_trajet(&self.briefing, chat, &invocation.args).await?;
            }
            _ => {
                let _ = chat
                    .send_message(crate::strings::messages::UNKNOWN_COMMAND)
                    .await;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::BriefingConfig;
    use crate::strings::messages;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct RecordingChat {
        sent: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingChat {
        fn messages(&self) -> Vec<String> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ChatProvider for RecordingChat {
        fn room_id(&self) -> String {
            "!test:example.org".to_string()
        }

        async fn send_message(&self, content: &str) -> Result<String, String> {
            self.sent.lock().unwrap().push(content.to_string());
            Ok("$event".to_string())
        }

        async fn send_notification(&self, content: &str) -> Result<(), String> {
            self.send_message(content).await.map(|_| ())
        }
    }

    fn router() -> CommandRouter {
        let briefing = BriefingService::new(BriefingConfig::default()).unwrap();
        CommandRouter::new(Arc::new(briefing))
    }

    #[tokio::test]
    async fn test_route_known_command() {
        let chat = RecordingChat::default();
        router().route(&chat, "/metar LFPG", "@pilot:example.org").await.unwrap();
        let sent = chat.messages();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].contains("LFPG"));
    }

    #[tokio::test]
    async fn test_route_unknown_command() {
        let chat = RecordingChat::default();
        router().route(&chat, "/wx LFPG", "@pilot:example.org").await.unwrap();
        assert_eq!(chat.messages(), vec![messages::UNKNOWN_COMMAND.to_string()]);
    }

    #[tokio::test]
    async fn test_route_ignores_plain_text() {
        let chat = RecordingChat::default();
        router().route(&chat, "what a lovely ceiling today", "@pilot:example.org").await.unwrap();
        assert!(chat.messages().is_empty());
    }

    #[tokio::test]
    async fn test_route_underflow_yields_usage() {
        let chat = RecordingChat::default();
        router().route(&chat, "/vol_local LFPG", "@pilot:example.org").await.unwrap();
        assert_eq!(chat.messages(), vec![messages::VOL_LOCAL_USAGE.to_string()]);
    }

    #[tokio::test]
    async fn test_route_start_sends_welcome() {
        let chat = RecordingChat::default();
        router().route(&chat, "/start", "@pilot:example.org").await.unwrap();
        assert_eq!(chat.messages(), vec![crate::strings::help::WELCOME.to_string()]);
    }
}
