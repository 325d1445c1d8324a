//! Line index for offset lookups

use crate::types::{Location, Range};
use serde::{Deserialize, Serialize};

/// Newline index of a source file.
///
/// Stores the byte offset of every `\n` so that byte offsets can be turned
/// into (row, column) pairs without keeping the file content around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInformation {
    /// Byte offsets of each newline character in the file
    line_breaks: Vec<usize>,

    /// Total length of the file in bytes
    total_length: usize,
}

impl FileInformation {
    /// Build the index by scanning `content` once.
    ///
    /// # Example
    ///
    /// ```
    /// use wixbal_source_map::FileInformation;
    ///
    /// let info = FileInformation::new("<Wix>\n<Bundle/>\n</Wix>");
    /// assert_eq!(info.line_count(), 3);
    /// ```
    pub fn new(content: &str) -> Self {
        let line_breaks: Vec<usize> = content
            .char_indices()
            .filter_map(|(idx, ch)| if ch == '\n' { Some(idx) } else { None })
            .collect();

        FileInformation {
            line_breaks,
            total_length: content.len(),
        }
    }

    /// Convert a byte offset to a Location with row and column.
    ///
    /// Returns None if the offset is out of bounds.
    ///
    /// ```
    /// use wixbal_source_map::FileInformation;
    ///
    /// let info = FileInformation::new("hello\nworld");
    /// let loc = info.offset_to_location(6).unwrap();
    /// assert_eq!(loc.row, 1);
    /// assert_eq!(loc.column, 0);
    /// ```
    pub fn offset_to_location(&self, offset: usize) -> Option<Location> {
        if offset > self.total_length {
            return None;
        }

        // A newline belongs to the line it terminates.
        let row = match self.line_breaks.binary_search(&offset) {
            Ok(idx) | Err(idx) => idx,
        };

        let line_start = if row == 0 {
            0
        } else {
            self.line_breaks[row - 1] + 1
        };

        Some(Location {
            offset,
            row,
            column: offset - line_start,
        })
    }

    /// Build a [`Range`] from two byte offsets.
    pub fn range(&self, start: usize, end: usize) -> Option<Range> {
        Some(Range {
            start: self.offset_to_location(start)?,
            end: self.offset_to_location(end)?,
        })
    }

    /// Get the total length of the file in bytes
    pub fn total_length(&self) -> usize {
        self.total_length
    }

    /// Get the number of lines in the file
    pub fn line_count(&self) -> usize {
        self.line_breaks.len() + 1
    }
}
