//! # Start & Help Commands
//!
//! Handles `/start` and `/help`.
//! Both reply with fixed text and take no arguments.

use crate::domain::traits::ChatProvider;
use anyhow::Result;

pub async fn handle_start(chat: &impl ChatProvider) -> Result<()> {
    chat.send_message(crate::strings::help::WELCOME)
        .await
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!(e))
}

pub async fn handle_help(chat: &impl ChatProvider) -> Result<()> {
    chat.send_message(crate::strings::help::MAIN)
        .await
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!(e))
}
