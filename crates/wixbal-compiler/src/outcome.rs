//! The result of validating one element or attribute.

use crate::extension::ExtensionRegistry;
use crate::options::CompilerOptions;
use crate::rows::Row;
use wixbal_error_reporting::DiagnosticMessage;
use wixbal_xml::{XmlAttribute, XmlElement};

/// Diagnostics and rows produced by one parse.
///
/// An outcome never carries rows alongside an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOutcome {
    diagnostics: Vec<DiagnosticMessage>,
    rows: Vec<Row>,
}

impl ParseOutcome {
    /// Build an outcome, dropping `rows` if any diagnostic is an error.
    pub fn new(diagnostics: Vec<DiagnosticMessage>, rows: Vec<Row>) -> Self {
        let rows = if diagnostics.iter().any(DiagnosticMessage::is_error) {
            Vec::new()
        } else {
            rows
        };
        ParseOutcome { diagnostics, rows }
    }

    pub fn empty() -> Self {
        ParseOutcome::default()
    }

    pub fn from_rows(rows: Vec<Row>) -> Self {
        ParseOutcome {
            diagnostics: Vec::new(),
            rows,
        }
    }

    pub fn from_diagnostic(diagnostic: DiagnosticMessage) -> Self {
        ParseOutcome::new(vec![diagnostic], Vec::new())
    }

    pub fn diagnostics(&self) -> &[DiagnosticMessage] {
        &self.diagnostics
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(DiagnosticMessage::is_error)
    }

    pub fn into_parts(self) -> (Vec<DiagnosticMessage>, Vec<Row>) {
        (self.diagnostics, self.rows)
    }
}

/// Collects what a single element's validation produces.
///
/// Diagnostics pass through the warning policy as they are reported, so an
/// escalated warning suppresses the element's rows like any other error.
pub struct ElementScope<'a> {
    element: &'a XmlElement,
    options: &'a CompilerOptions,
    registry: &'a mut ExtensionRegistry,
    diagnostics: Vec<DiagnosticMessage>,
    rows: Vec<Row>,
}

impl<'a> ElementScope<'a> {
    pub fn new(
        element: &'a XmlElement,
        options: &'a CompilerOptions,
        registry: &'a mut ExtensionRegistry,
    ) -> Self {
        ElementScope {
            element,
            options,
            registry,
            diagnostics: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// The element being validated.
    pub fn element(&self) -> &'a XmlElement {
        self.element
    }

    pub fn registry(&mut self) -> &mut ExtensionRegistry {
        &mut *self.registry
    }

    pub fn report(&mut self, diagnostic: DiagnosticMessage) {
        if let Some(diagnostic) = self.options.apply(diagnostic) {
            self.diagnostics.push(diagnostic);
        }
    }

    /// Fold a nested outcome into this scope.
    pub fn merge(&mut self, outcome: ParseOutcome) {
        let (diagnostics, rows) = outcome.into_parts();
        for diagnostic in diagnostics {
            self.report(diagnostic);
        }
        self.rows.extend(rows);
    }

    /// Hand a foreign-namespace attribute of this element to its extension.
    pub fn delegate_attribute(&mut self, attribute: &XmlAttribute) {
        let outcome = self.registry.consume_attribute(self.element, attribute);
        self.merge(outcome);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(DiagnosticMessage::is_error)
    }

    /// Close the scope. `build` runs only when no error was reported; its
    /// rows follow any rows merged from nested parses.
    pub fn finish(self, build: impl FnOnce() -> Vec<Row>) -> ParseOutcome {
        if self.has_errors() {
            return ParseOutcome::new(self.diagnostics, Vec::new());
        }
        let mut rows = self.rows;
        rows.extend(build());
        ParseOutcome::new(self.diagnostics, rows)
    }
}
