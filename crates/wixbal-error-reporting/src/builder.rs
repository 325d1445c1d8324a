//! Builder API for diagnostic messages.

use crate::diagnostic::{DetailItem, DetailKind, DiagnosticKind, DiagnosticMessage, MessageContent};
use wixbal_source_map::SourceInfo;

/// Builder for [`DiagnosticMessage`].
///
/// ```
/// use wixbal_error_reporting::DiagnosticMessageBuilder;
///
/// let msg = DiagnosticMessageBuilder::error("Expected attribute")
///     .with_code("B-2-1")
///     .problem("The `Condition` element requires a `Message` attribute")
///     .add_hint("Add a `Message` attribute describing the failed condition?")
///     .build();
///
/// assert_eq!(msg.code.as_deref(), Some("B-2-1"));
/// assert_eq!(msg.hints.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct DiagnosticMessageBuilder {
    message: DiagnosticMessage,
}

impl DiagnosticMessageBuilder {
    pub fn new(kind: DiagnosticKind, title: impl Into<String>) -> Self {
        Self {
            message: DiagnosticMessage::new(kind, title),
        }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Error, title)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Warning, title)
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.message.code = Some(code.into());
        self
    }

    pub fn problem(mut self, problem: impl Into<MessageContent>) -> Self {
        self.message.problem = Some(problem.into());
        self
    }

    /// Add an error detail (✖).
    pub fn add_detail(self, content: impl Into<MessageContent>) -> Self {
        self.push_detail(DetailKind::Error, content.into(), None)
    }

    /// Add an error detail pointing at its own location.
    pub fn add_detail_at(self, content: impl Into<MessageContent>, location: SourceInfo) -> Self {
        self.push_detail(DetailKind::Error, content.into(), Some(location))
    }

    /// Add an info detail (ℹ).
    pub fn add_info(self, content: impl Into<MessageContent>) -> Self {
        self.push_detail(DetailKind::Info, content.into(), None)
    }

    /// Add a note detail (•).
    pub fn add_note(self, content: impl Into<MessageContent>) -> Self {
        self.push_detail(DetailKind::Note, content.into(), None)
    }

    pub fn add_hint(mut self, hint: impl Into<MessageContent>) -> Self {
        self.message.hints.push(hint.into());
        self
    }

    pub fn with_location(mut self, location: SourceInfo) -> Self {
        self.message.location = Some(location);
        self
    }

    pub fn build(self) -> DiagnosticMessage {
        self.message
    }

    fn push_detail(
        mut self,
        kind: DetailKind,
        content: MessageContent,
        location: Option<SourceInfo>,
    ) -> Self {
        self.message.details.push(DetailItem {
            kind,
            content,
            location,
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wixbal_source_map::FileId;

    #[test]
    fn test_builder_collects_all_parts() {
        let at = SourceInfo::from_offsets(FileId(0), 10, 20);
        let msg = DiagnosticMessageBuilder::error("Attributes are mutually exclusive")
            .with_code("B-4-1")
            .problem("`LicenseFile` cannot be combined with `LicenseUrl`")
            .add_detail_at("`LicenseUrl` is set here", at)
            .add_note("Only one license source is shown to the user")
            .add_hint("Remove one of the two attributes?")
            .with_location(at)
            .build();

        assert_eq!(msg.kind, DiagnosticKind::Error);
        assert_eq!(msg.details.len(), 2);
        assert_eq!(msg.details[0].location, Some(at));
        assert_eq!(msg.details[1].kind, DetailKind::Note);
        assert_eq!(msg.location, Some(at));
    }

    #[test]
    fn test_warning_builder() {
        let msg = DiagnosticMessageBuilder::warning("Unsupported extension element").build();
        assert_eq!(msg.kind, DiagnosticKind::Warning);
        assert!(msg.code.is_none());
    }
}
