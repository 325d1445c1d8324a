//! Source locations for bundle markup.
//!
//! Every node the markup parser produces, every diagnostic the compiler
//! reports and every row it emits carries a [`SourceInfo`]. A
//! [`SourceContext`] owns the registered files and turns a [`SourceInfo`]
//! back into the `path(line)` form used in compiler output.
//!
//! # Example
//!
//! ```rust
//! use wixbal_source_map::*;
//!
//! let mut ctx = SourceContext::new();
//! let content = "<Wix>\n  <Bundle/>\n</Wix>";
//! let file_id = ctx.add_file("bundle.wxs".into(), Some(content.into()));
//!
//! let info = ctx.source_info(file_id, 8, 17).unwrap();
//! assert_eq!(info.line(), 2);
//! assert_eq!(ctx.describe(&info), "bundle.wxs(2)");
//! ```

pub mod context;
pub mod file_info;
pub mod source_info;
pub mod types;

pub use context::{SourceContext, SourceFile};
pub use file_info::FileInformation;
pub use source_info::SourceInfo;
pub use types::{FileId, Location, Range};
