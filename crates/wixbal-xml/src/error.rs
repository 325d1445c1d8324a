//! Error types for markup parsing with source locations.

use wixbal_error_reporting::{DiagnosticMessage, DiagnosticMessageBuilder};
use wixbal_source_map::SourceInfo;

/// Result type alias for wixbal-xml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Result type for parse operations that report diagnostics.
pub type ParseResult<T> = std::result::Result<T, Vec<DiagnosticMessage>>;

/// Errors that can occur while parsing markup.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Syntax error from quick-xml.
    #[error("XML syntax error: {message}")]
    XmlSyntax {
        message: String,
        /// Byte offset where the error occurred.
        position: Option<u64>,
    },

    /// Input ended while an element was open.
    #[error("Unexpected end of input, expected {expected}")]
    UnexpectedEof {
        expected: String,
        location: Option<SourceInfo>,
    },

    #[error("Mismatched end tag: expected </{expected}>, found </{found}>")]
    MismatchedEndTag {
        expected: String,
        found: String,
        location: Option<SourceInfo>,
    },

    /// A prefix used without a matching `xmlns:prefix` declaration.
    #[error("Namespace prefix '{prefix}' is not declared")]
    UnboundPrefix {
        prefix: String,
        location: Option<SourceInfo>,
    },

    #[error("Empty XML document: no root element found")]
    EmptyDocument,

    #[error("Invalid XML: multiple root elements")]
    MultipleRoots { location: Option<SourceInfo> },
}

impl Error {
    /// Convert this error to a DiagnosticMessage with its X-9-* code.
    pub fn to_diagnostic(&self) -> DiagnosticMessage {
        let (builder, location) = match self {
            Error::XmlSyntax { message, position } => {
                let mut builder = DiagnosticMessageBuilder::error("Markup syntax error")
                    .with_code("X-9-1")
                    .problem(message.clone());
                if let Some(pos) = position {
                    builder = builder.add_detail(format!("Error at byte offset {}", pos));
                }
                (builder, None)
            }
            Error::UnexpectedEof { expected, location } => (
                DiagnosticMessageBuilder::error("Unexpected end of markup")
                    .with_code("X-9-2")
                    .problem(format!("The document ended unexpectedly; expected {}", expected)),
                *location,
            ),
            Error::MismatchedEndTag {
                expected,
                found,
                location,
            } => (
                DiagnosticMessageBuilder::error("Mismatched end tag")
                    .with_code("X-9-3")
                    .problem(format!(
                        "End tag `</{}>` does not match start tag `<{}>`",
                        found, expected
                    ))
                    .add_hint("Check that all opening tags have matching closing tags?"),
                *location,
            ),
            Error::UnboundPrefix { prefix, location } => (
                DiagnosticMessageBuilder::error("Unbound namespace prefix")
                    .with_code("X-9-4")
                    .problem(format!("The prefix `{}` is not declared", prefix))
                    .add_hint(format!("Add an `xmlns:{}` declaration?", prefix)),
                *location,
            ),
            Error::EmptyDocument => (
                DiagnosticMessageBuilder::error("Empty markup document")
                    .with_code("X-9-5")
                    .problem("The document contains no root element"),
                None,
            ),
            Error::MultipleRoots { location } => (
                DiagnosticMessageBuilder::error("Multiple root elements")
                    .with_code("X-9-6")
                    .problem("The document contains multiple root elements")
                    .add_hint("Wrap the elements in a single `Wix` element?"),
                *location,
            ),
        };

        match location {
            Some(loc) => builder.with_location(loc).build(),
            None => builder.build(),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlSyntax {
            message: err.to_string(),
            position: None,
        }
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlSyntax {
            message: format!("Attribute error: {}", err),
            position: None,
        }
    }
}
