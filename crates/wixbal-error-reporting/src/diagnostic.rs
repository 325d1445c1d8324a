//! Core diagnostic message types.
//!
//! A diagnostic follows a tidy structure: a short title, an optional
//! problem statement, bulleted details, and hints ending in `?`.

use serde::{Deserialize, Serialize};
use wixbal_source_map::{SourceContext, SourceInfo};

/// The kind of diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// An error; suppresses the rows of the element that raised it
    Error,
    /// A warning that doesn't prevent completion but indicates a problem
    Warning,
    /// Informational message
    Info,
    /// A note providing additional context
    Note,
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::Error => "error",
            DiagnosticKind::Warning => "warning",
            DiagnosticKind::Info => "info",
            DiagnosticKind::Note => "note",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            DiagnosticKind::Error => "Error",
            DiagnosticKind::Warning => "Warning",
            DiagnosticKind::Info => "Info",
            DiagnosticKind::Note => "Note",
        }
    }
}

/// How detail items should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailKind {
    /// Error detail (✖ bullet)
    Error,
    /// Info detail (ℹ bullet)
    Info,
    /// Note detail (plain bullet)
    Note,
}

impl DetailKind {
    fn bullet(&self) -> &'static str {
        match self {
            DetailKind::Error => "✖",
            DetailKind::Info => "ℹ",
            DetailKind::Note => "•",
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            DetailKind::Error => "error",
            DetailKind::Info => "info",
            DetailKind::Note => "note",
        }
    }
}

/// The content of a message or detail item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageContent {
    /// Plain text content
    Plain(String),
    /// Markdown content; element and attribute names are written in backticks
    Markdown(String),
}

impl MessageContent {
    pub fn as_str(&self) -> &str {
        match self {
            MessageContent::Plain(s) => s,
            MessageContent::Markdown(s) => s,
        }
    }

    /// Convert to JSON value with type information
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::json;
        match self {
            MessageContent::Plain(s) => json!({
                "type": "plain",
                "content": s
            }),
            MessageContent::Markdown(s) => json!({
                "type": "markdown",
                "content": s
            }),
        }
    }
}

impl From<String> for MessageContent {
    fn from(s: String) -> Self {
        MessageContent::Markdown(s)
    }
}

impl From<&str> for MessageContent {
    fn from(s: &str) -> Self {
        MessageContent::Markdown(s.to_string())
    }
}

/// A detail item in a diagnostic message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailItem {
    pub kind: DetailKind,
    pub content: MessageContent,
    /// Optional source location this detail points at
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceInfo>,
}

/// A diagnostic raised while compiling markup.
///
/// Structure:
/// 1. **Code**: error code (e.g., "B-1-1") for searchability
/// 2. **Title**: brief error message
/// 3. **Kind**: Error, Warning, Info, Note
/// 4. **Problem**: what went wrong
/// 5. **Details**: specific information, bulleted
/// 6. **Hints**: optional guidance for fixing (ends with ?)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    pub title: String,

    pub kind: DiagnosticKind,

    pub problem: Option<MessageContent>,

    pub details: Vec<DetailItem>,

    pub hints: Vec<MessageContent>,

    /// Where the offending node starts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceInfo>,
}

impl DiagnosticMessage {
    /// Create a new diagnostic message with just a title and kind.
    ///
    /// Prefer [`crate::DiagnosticMessageBuilder`] for anything with a code.
    pub fn new(kind: DiagnosticKind, title: impl Into<String>) -> Self {
        Self {
            code: None,
            title: title.into(),
            kind,
            problem: None,
            details: Vec::new(),
            hints: Vec::new(),
            location: None,
        }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Error, title)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Warning, title)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Info, title)
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.kind == DiagnosticKind::Error
    }

    /// Get the documentation URL for this diagnostic, if its code has one.
    pub fn docs_url(&self) -> Option<&str> {
        self.code
            .as_ref()
            .and_then(|code| crate::catalog::get_docs_url(code))
    }

    /// Render this diagnostic as text.
    ///
    /// When the location's file has its content in `ctx`, the title,
    /// location and problem are drawn as an ariadne source snippet, followed
    /// by the details and hints. Otherwise the plain form is used:
    ///
    /// ```text
    /// Error [B-2-1]: Expected attribute
    ///   at bundle.wxs(12)
    /// The `Condition` element requires a `Message` attribute
    /// ✖ Error detail
    /// ℹ Info detail
    /// ? Hint
    /// ```
    ///
    /// Without a [`SourceContext`] the location is rendered as `line:column`.
    pub fn to_text(&self, ctx: Option<&SourceContext>) -> String {
        let snippet = self
            .location
            .as_ref()
            .zip(ctx)
            .and_then(|(location, ctx)| self.render_source_snippet(location, ctx));

        // Details located in the drawn file are labels of the snippet.
        let drawn_file = snippet.as_ref().and(self.location.map(|l| l.file_id));
        let mut lines = Vec::new();

        match snippet {
            Some(snippet) => lines.push(snippet.trim_end().to_string()),
            None => {
                match &self.code {
                    Some(code) => {
                        lines.push(format!("{} [{}]: {}", self.kind.label(), code, self.title))
                    }
                    None => lines.push(format!("{}: {}", self.kind.label(), self.title)),
                }

                if let Some(location) = &self.location {
                    match ctx {
                        Some(ctx) => lines.push(format!("  at {}", ctx.describe(location))),
                        None => lines.push(format!(
                            "  at {}:{}",
                            location.line(),
                            location.column()
                        )),
                    }
                }

                if let Some(problem) = &self.problem {
                    lines.push(problem.as_str().to_string());
                }
            }
        }

        for detail in &self.details {
            if drawn_file.is_some() && detail.location.map(|l| l.file_id) == drawn_file {
                continue;
            }
            lines.push(format!("{} {}", detail.kind.bullet(), detail.content.as_str()));
        }

        for hint in &self.hints {
            lines.push(format!("? {}", hint.as_str()));
        }

        lines.join("\n")
    }

    /// Draw the location as an ariadne report over the file's content.
    ///
    /// Returns `None` if the file is unknown, has no stored content, or the
    /// location does not fall on character boundaries of it.
    fn render_source_snippet(&self, location: &SourceInfo, ctx: &SourceContext) -> Option<String> {
        use ariadne::{Config, Label, Report, ReportKind, Source};

        let file = ctx.get_file(location.file_id)?;
        let content = file.content.as_deref()?;

        // ariadne spans count characters, locations count bytes
        let char_span = |info: &SourceInfo| {
            let start = content.get(..info.start_offset())?.chars().count();
            let end = content.get(..info.end_offset())?.chars().count();
            Some(start..end)
        };
        let span = char_span(location)?;

        let kind = match self.kind {
            DiagnosticKind::Error => ReportKind::Error,
            DiagnosticKind::Warning => ReportKind::Warning,
            DiagnosticKind::Info | DiagnosticKind::Note => ReportKind::Advice,
        };
        let title = match &self.code {
            Some(code) => format!("[{}] {}", code, self.title),
            None => self.title.clone(),
        };
        let label = self
            .problem
            .as_ref()
            .map_or(self.title.as_str(), MessageContent::as_str);

        let mut report = Report::build(kind, file.path.clone(), span.start)
            .with_config(Config::default().with_color(false))
            .with_message(title)
            .with_label(Label::new((file.path.clone(), span)).with_message(label));

        for detail in &self.details {
            let Some(detail_location) = detail.location else {
                continue;
            };
            if detail_location.file_id != location.file_id {
                continue;
            }
            if let Some(detail_span) = char_span(&detail_location) {
                report = report.with_label(
                    Label::new((file.path.clone(), detail_span))
                        .with_message(detail.content.as_str()),
                );
            }
        }

        let mut output = Vec::new();
        report
            .finish()
            .write((file.path.clone(), Source::from(content)), &mut output)
            .ok()?;

        String::from_utf8(output).ok()
    }

    /// Render this diagnostic as a JSON value.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::json;

        let mut obj = json!({
            "kind": self.kind.as_str(),
            "title": self.title,
        });

        if let Some(code) = &self.code {
            obj["code"] = json!(code);
        }

        if let Some(problem) = &self.problem {
            obj["problem"] = problem.to_json();
        }

        if !self.details.is_empty() {
            let details: Vec<_> = self
                .details
                .iter()
                .map(|d| {
                    let mut detail_obj = json!({
                        "kind": d.kind.as_str(),
                        "content": d.content.to_json()
                    });
                    if let Some(location) = &d.location {
                        detail_obj["location"] = json!(location);
                    }
                    detail_obj
                })
                .collect();
            obj["details"] = json!(details);
        }

        if !self.hints.is_empty() {
            let hints: Vec<_> = self.hints.iter().map(|h| h.to_json()).collect();
            obj["hints"] = json!(hints);
        }

        if let Some(location) = &self.location {
            obj["location"] = json!(location);
        }

        obj
    }
}
