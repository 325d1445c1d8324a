//! Diagnostic messages for the bundle extension compiler.
//!
//! Diagnostics are values, not control flow: validators collect them while
//! walking markup and the caller decides what an error means for the rows
//! that would have been emitted.
//!
//! - [`DiagnosticMessage`]: code, title, kind, problem, details, hints, location
//! - [`DiagnosticMessageBuilder`]: the preferred way to construct one
//! - [`catalog`]: metadata for every `B-*` code, embedded at compile time
//!
//! ```
//! use wixbal_error_reporting::{DiagnosticKind, DiagnosticMessageBuilder};
//!
//! let msg = DiagnosticMessageBuilder::error("Unexpected attribute")
//!     .with_code("B-1-2")
//!     .problem("The `Condition` element contains an unexpected attribute `Foo`")
//!     .build();
//!
//! assert_eq!(msg.kind, DiagnosticKind::Error);
//! assert!(msg.to_text(None).starts_with("Error [B-1-2]: Unexpected attribute"));
//! ```

pub mod builder;
pub mod catalog;
pub mod diagnostic;

pub use builder::DiagnosticMessageBuilder;
pub use catalog::{ERROR_CATALOG, ErrorCodeInfo, get_docs_url, get_error_info, get_subsystem};
pub use diagnostic::{DetailItem, DetailKind, DiagnosticKind, DiagnosticMessage, MessageContent};
