//! Owner relay commands.

use thiserror::Error;

/// Separator between the recipient and the message body.
const SEPARATOR: char = ':';

/// An owner instruction to send `body` to `recipient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayCommand {
    /// Destination number, trimmed but otherwise unvalidated.
    pub recipient: String,
    /// Text to send, trimmed. May be empty.
    pub body: String,
}

/// The owner's message was not of the form `recipient: body`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected `recipient: message`")]
pub struct MalformedCommand;

impl RelayCommand {
    /// Split an owner message on its first `:`.
    ///
    /// The separator must be present and must not be the first character.
    /// Recipient format is left for the transport to reject.
    pub fn parse(text: &str) -> Result<Self, MalformedCommand> {
        match text.find(SEPARATOR) {
            Some(index) if index >= 1 => Ok(Self {
                recipient: text[..index].trim().to_string(),
                body: text[index + SEPARATOR.len_utf8()..].trim().to_string(),
            }),
            _ => Err(MalformedCommand),
        }
    }
}
