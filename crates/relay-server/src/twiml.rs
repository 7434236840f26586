//! TwiML rendering for webhook responses.

use axum::http::header;
use axum::response::{IntoResponse, Response};
use relay_core::OutboundAction;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// A rendered TwiML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Twiml(pub String);

impl Twiml {
    /// Render the document for an action.
    ///
    /// A send is acknowledged with an empty `<Response/>`; a reply becomes
    /// a single `<Message>`.
    pub fn from_action(action: &OutboundAction) -> Self {
        match action.reply() {
            None => Self(format!("{}<Response/>", XML_DECLARATION)),
            Some(reply) => {
                let to = reply
                    .to
                    .as_deref()
                    .map(|to| format!(r#" to="{}""#, escape(to)))
                    .unwrap_or_default();
                Self(format!(
                    "{}<Response><Message{}>{}</Message></Response>",
                    XML_DECLARATION,
                    to,
                    escape(&reply.body)
                ))
            }
        }
    }
}

impl IntoResponse for Twiml {
    fn into_response(self) -> Response {
        ([(header::CONTENT_TYPE, "text/xml")], self.0).into_response()
    }
}

/// Escape text for use in XML content and attribute values.
///
/// Control characters that XML 1.0 forbids are replaced with U+FFFD so the
/// document stays parseable.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' | '\r' => out.push(c),
            '\u{0}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}' => out.push(char::REPLACEMENT_CHARACTER),
            _ => out.push(c),
        }
    }
    out
}
