//! Whole-document compilation.
//!
//! [`Compiler`] plays the host's part: it walks a parsed document in
//! document order and calls the extension wherever extension markup
//! appears.

use crate::dispatch::BalCompiler;
use crate::error::{Error, Result};
use crate::extension::{AttributeConsumer, ExtensionRegistry};
use crate::options::CompilerOptions;
use crate::outcome::ParseOutcome;
use crate::rows::{Row, Table};
use crate::schema::{BAL_NAMESPACE, WIX_NAMESPACE};
use wixbal_error_reporting::DiagnosticMessage;
use wixbal_source_map::SourceContext;
use wixbal_xml::{XML_NAMESPACE, XmlDocument, XmlElement};

/// Everything a compilation produced, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompileOutput {
    pub rows: Vec<Row>,
    pub diagnostics: Vec<DiagnosticMessage>,
}

impl CompileOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(DiagnosticMessage::is_error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &DiagnosticMessage> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &DiagnosticMessage> {
        self.diagnostics.iter().filter(|d| !d.is_error())
    }

    pub fn rows_in(&self, table: Table) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(move |row| row.table == table)
    }

    /// One line per row, as printed by [`Row`]'s `Display`.
    pub fn render_rows(&self) -> String {
        self.rows
            .iter()
            .map(Row::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// All diagnostics rendered as text, separated by blank lines.
    pub fn render_diagnostics(&self, ctx: Option<&SourceContext>) -> String {
        self.diagnostics
            .iter()
            .map(|d| d.to_text(ctx))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn to_json(&self) -> serde_json::Value {
        let rows: Vec<_> = self.rows.iter().map(Row::to_json).collect();
        let diagnostics: Vec<_> = self
            .diagnostics
            .iter()
            .map(DiagnosticMessage::to_json)
            .collect();
        serde_json::json!({
            "rows": rows,
            "diagnostics": diagnostics,
        })
    }

    fn absorb(&mut self, outcome: ParseOutcome) {
        let (diagnostics, rows) = outcome.into_parts();
        self.diagnostics.extend(diagnostics);
        self.rows.extend(rows);
    }
}

/// Drives the extension over a whole document.
#[derive(Debug, Default)]
pub struct Compiler {
    bal: BalCompiler,
    registry: ExtensionRegistry,
}

impl Compiler {
    pub fn new(options: CompilerOptions) -> Self {
        Compiler {
            bal: BalCompiler::new(options),
            registry: ExtensionRegistry::new(),
        }
    }

    /// Register an extension for foreign markup.
    ///
    /// # Errors
    ///
    /// See [`ExtensionRegistry::register`].
    pub fn with_extension(mut self, consumer: Box<dyn AttributeConsumer>) -> Result<Self> {
        self.registry.register(consumer)?;
        Ok(self)
    }

    pub fn bal(&self) -> &BalCompiler {
        &self.bal
    }

    pub fn compile(&mut self, document: &XmlDocument) -> CompileOutput {
        let mut output = CompileOutput::default();
        self.walk(&document.root, &mut output);
        tracing::debug!(
            rows = output.rows.len(),
            diagnostics = output.diagnostics.len(),
            "Compiled document"
        );
        output
    }

    /// Visit a host element: its extension attributes, then its children.
    ///
    /// The element's `bal:` attributes are dispatched together, after any
    /// foreign ones.
    fn walk(&mut self, element: &XmlElement, output: &mut CompileOutput) {
        let mut bal_attributes = Vec::new();
        for attribute in &element.attributes {
            let namespace = attribute.name.namespace_uri();
            if namespace == BAL_NAMESPACE {
                bal_attributes.push(attribute);
            } else if !is_host_namespace(namespace) {
                let outcome = self.registry.consume_attribute(element, attribute);
                output.absorb(self.apply_options(outcome));
            }
        }
        if !bal_attributes.is_empty() {
            output.absorb(
                self.bal
                    .parse_attributes(element, &bal_attributes, &mut self.registry),
            );
        }

        for child in element.all_children() {
            let namespace = child.name.namespace_uri();
            if namespace == BAL_NAMESPACE {
                output.absorb(self.bal.parse_element(element, child, &mut self.registry));
            } else if is_host_namespace(namespace) {
                self.walk(child, output);
            } else {
                tracing::debug!(element = %child.name, "Delegating foreign element");
                let outcome = self.registry.consume_element(element, child);
                output.absorb(self.apply_options(outcome));
            }
        }
    }

    fn apply_options(&self, outcome: ParseOutcome) -> ParseOutcome {
        let (diagnostics, rows) = outcome.into_parts();
        let diagnostics = diagnostics
            .into_iter()
            .filter_map(|d| self.bal.options().apply(d))
            .collect();
        ParseOutcome::new(diagnostics, rows)
    }
}

fn is_host_namespace(namespace: &str) -> bool {
    namespace.is_empty() || namespace == WIX_NAMESPACE || namespace == XML_NAMESPACE
}

/// A compiled source file together with the context its locations point into.
#[derive(Debug)]
pub struct CompiledSource {
    pub sources: SourceContext,
    pub output: CompileOutput,
}

/// Parse and compile one source file.
///
/// # Errors
///
/// Returns [`Error::Parse`] if the markup is not well formed.
pub fn compile_source(
    path: &str,
    content: &str,
    options: CompilerOptions,
) -> Result<CompiledSource> {
    let mut sources = SourceContext::new();
    let file_id = sources.add_file(path.to_string(), Some(content.to_string()));

    let document =
        wixbal_xml::parse_with_file_id(content, file_id).map_err(|source| Error::Parse {
            path: path.to_string(),
            source,
        })?;

    let output = Compiler::new(options).compile(&document);
    Ok(CompiledSource { sources, output })
}
