//! Source context for managing files

use crate::file_info::FileInformation;
use crate::source_info::SourceInfo;
use crate::types::FileId;
use serde::{Deserialize, Serialize};

/// Registry of the files a compilation reads from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceContext {
    files: Vec<SourceFile>,
}

/// A source file with content and metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFile {
    /// File path or identifier
    pub path: String,
    /// File content, kept for in-memory sources
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Line index, present whenever the content was available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_info: Option<FileInformation>,
}

impl SourceContext {
    pub fn new() -> Self {
        SourceContext { files: Vec::new() }
    }

    /// Add a file to the context and return its ID.
    ///
    /// When `content` is `None` the file is read from disk to build the line
    /// index; a file that cannot be read gets no index and its locations
    /// render without line numbers.
    pub fn add_file(&mut self, path: String, content: Option<String>) -> FileId {
        let id = FileId(self.files.len());

        let file_info = match &content {
            Some(c) => Some(FileInformation::new(c)),
            None => std::fs::read_to_string(&path)
                .ok()
                .map(|c| FileInformation::new(&c)),
        };

        self.files.push(SourceFile {
            path,
            content,
            file_info,
        });
        id
    }

    pub fn get_file(&self, id: FileId) -> Option<&SourceFile> {
        self.files.get(id.0)
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    /// Build a [`SourceInfo`] for a byte span of a registered file.
    pub fn source_info(&self, file_id: FileId, start: usize, end: usize) -> Option<SourceInfo> {
        let info = self.get_file(file_id)?.file_info.as_ref()?;
        Some(SourceInfo::new(file_id, info.range(start, end)?))
    }

    /// Render a location as `path(line)`.
    pub fn describe(&self, info: &SourceInfo) -> String {
        match self.get_file(info.file_id) {
            Some(file) => format!("{}({})", file.path, info.line()),
            None => format!("<unknown>({})", info.line()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_in_memory_file() {
        let mut ctx = SourceContext::new();
        let id = ctx.add_file("a.wxs".into(), Some("<Wix/>".into()));

        assert_eq!(id, FileId(0));
        let file = ctx.get_file(id).unwrap();
        assert_eq!(file.path, "a.wxs");
        assert_eq!(file.file_info.as_ref().unwrap().total_length(), 6);
    }

    #[test]
    fn test_sequential_ids() {
        let mut ctx = SourceContext::new();
        let first = ctx.add_file("a.wxs".into(), Some(String::new()));
        let second = ctx.add_file("b.wxs".into(), Some(String::new()));
        assert_eq!(first, FileId(0));
        assert_eq!(second, FileId(1));
        assert_eq!(ctx.files().len(), 2);
    }

    #[test]
    fn test_missing_disk_file_has_no_index() {
        let mut ctx = SourceContext::new();
        let id = ctx.add_file("/nonexistent/bundle.wxs".into(), None);
        assert!(ctx.get_file(id).unwrap().file_info.is_none());
        assert!(ctx.source_info(id, 0, 0).is_none());
    }

    #[test]
    fn test_describe() {
        let mut ctx = SourceContext::new();
        let id = ctx.add_file("bundle.wxs".into(), Some("<Wix>\n<Bundle/>\n</Wix>".into()));
        let info = ctx.source_info(id, 6, 15).unwrap();
        assert_eq!(ctx.describe(&info), "bundle.wxs(2)");

        let unknown = SourceInfo::from_offsets(FileId(7), 0, 0);
        assert_eq!(ctx.describe(&unknown), "<unknown>(1)");
    }
}
