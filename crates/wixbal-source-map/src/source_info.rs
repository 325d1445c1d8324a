//! Location of a markup node within a registered file

use crate::types::{FileId, Location, Range};
use serde::{Deserialize, Serialize};

/// Where a node, diagnostic or row came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SourceInfo {
    /// The file this location points into
    pub file_id: FileId,
    /// The covered range within that file
    pub range: Range,
}

impl SourceInfo {
    pub fn new(file_id: FileId, range: Range) -> Self {
        SourceInfo { file_id, range }
    }

    /// A location carrying only byte offsets, for content with no line index.
    pub fn from_offsets(file_id: FileId, start: usize, end: usize) -> Self {
        SourceInfo {
            file_id,
            range: Range {
                start: Location {
                    offset: start,
                    row: 0,
                    column: 0,
                },
                end: Location {
                    offset: end,
                    row: 0,
                    column: 0,
                },
            },
        }
    }

    pub fn start_offset(&self) -> usize {
        self.range.start.offset
    }

    pub fn end_offset(&self) -> usize {
        self.range.end.offset
    }

    /// 1-indexed line of the start of this location.
    pub fn line(&self) -> usize {
        self.range.start.row + 1
    }

    /// 1-indexed column of the start of this location.
    pub fn column(&self) -> usize {
        self.range.start.column + 1
    }
}
