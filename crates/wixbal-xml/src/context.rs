//! Per-file parse state for callers that collect diagnostics.

use wixbal_error_reporting::DiagnosticMessage;
use wixbal_source_map::FileId;

/// The file being parsed and what went wrong parsing it.
///
/// Locations produced by [`crate::parse_with_context`] point into
/// [`XmlParseContext::file_id`], which is normally the id a
/// `SourceContext` handed out when the file was registered.
#[derive(Debug, Default)]
pub struct XmlParseContext {
    file_id: FileId,
    diagnostics: Vec<DiagnosticMessage>,
}

impl XmlParseContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_file(file_id: FileId) -> Self {
        Self {
            file_id,
            diagnostics: Vec::new(),
        }
    }

    pub fn file_id(&self) -> FileId {
        self.file_id
    }

    pub fn add_diagnostic(&mut self, diagnostic: DiagnosticMessage) {
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[DiagnosticMessage] {
        &self.diagnostics
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(DiagnosticMessage::is_error)
    }

    pub fn take_diagnostics(&mut self) -> Vec<DiagnosticMessage> {
        std::mem::take(&mut self.diagnostics)
    }
}
