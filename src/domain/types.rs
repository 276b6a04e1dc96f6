//! # Domain Types
//!
//! Common data structures used across the application logic.

/// A chat command as received from the transport: the command name (without
/// the leading slash) plus its ordered arguments. Built by the transport
/// adapter side of the router, consumed by the command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub command: String,
    pub args: Vec<String>,
}

impl CommandInvocation {
    /// Parse a raw message body into an invocation.
    /// Returns `None` for anything that is not a slash command.
    pub fn parse(body: &str) -> Option<Self> {
        let msg = body.trim();
        let rest = msg.strip_prefix('/')?;
        let mut parts = rest.split_whitespace();
        let command = parts.next()?.to_string();
        let args = parts.map(str::to_string).collect();
        Some(Self { command, args })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_with_args() {
        let inv = CommandInvocation::parse("/notam LFPG 2025-01-20").unwrap();
        assert_eq!(inv.command, "notam");
        assert_eq!(inv.args, vec!["LFPG", "2025-01-20"]);
    }

    #[test]
    fn test_parse_bare_command() {
        let inv = CommandInvocation::parse("  /help  ").unwrap();
        assert_eq!(inv.command, "help");
        assert!(inv.args.is_empty());
    }

    #[test]
    fn test_parse_rejects_plain_text() {
        assert_eq!(CommandInvocation::parse("hello there"), None);
        assert_eq!(CommandInvocation::parse(""), None);
        assert_eq!(CommandInvocation::parse("/"), None);
    }

    #[test]
    fn test_parse_collapses_whitespace() {
        let inv = CommandInvocation::parse("/metar   LFPG").unwrap();
        assert_eq!(inv.args, vec!["LFPG"]);
    }
}
