//! Compiler for the bootstrapper application (`bal`) markup extension.
//!
//! The extension validates its elements and attributes inside a bundle
//! document and turns them into rows for the linker:
//!
//! - [`BalCompiler`] routes each extension element or attribute to its validator
//! - validators declare their attributes as an [`ElementSchema`] and coerce
//!   them with [`collect_attributes`]
//! - every validation yields a [`ParseOutcome`]; rows survive only when no
//!   error was reported for the element
//! - markup from other extensions goes through an [`ExtensionRegistry`]
//!
//! [`Compiler`] and [`compile_source`] walk a whole document the way the
//! host would.
//!
//! ```
//! use wixbal_compiler::{CompilerOptions, Table, compile_source};
//!
//! let source = r#"<Wix xmlns="http://wixtoolset.org/schemas/v4/wxs"
//!      xmlns:bal="http://wixtoolset.org/schemas/v4/wxs/bal">
//!   <Bundle>
//!     <bal:Condition Message="Requires Windows Vista or later">VersionNT &gt;= v6.0</bal:Condition>
//!   </Bundle>
//! </Wix>"#;
//!
//! let compiled = compile_source("bundle.wxs", source, CompilerOptions::default()).unwrap();
//! let row = compiled.output.rows_in(Table::Condition).next().unwrap();
//! assert_eq!(row.text(0), Some("VersionNT >= v6.0"));
//! assert_eq!(row.source.line(), 4);
//! ```

pub mod attributes;
pub mod compiler;
pub mod dispatch;
mod elements;
pub mod error;
pub mod extension;
pub mod messages;
pub mod options;
pub mod outcome;
pub mod rows;
pub mod schema;

pub use attributes::{
    AttributeSpec, AttributeValue, AttributeValues, ElementSchema, ExclusiveGroup, Requirement,
    ValueKind, YesNoType, coerce, collect_attributes,
};
pub use compiler::{CompileOutput, CompiledSource, Compiler, compile_source};
pub use dispatch::BalCompiler;
pub use elements::condition_expression;
pub use error::{Error, Result};
pub use extension::{AttributeConsumer, ExtensionRegistry};
pub use options::{CompilerOptions, ConfigError};
pub use outcome::{ElementScope, ParseOutcome};
pub use rows::{FieldValue, Row, Table};
pub use schema::{BAL_NAMESPACE, BalAttribute, BalElement, ParentKind, WIX_NAMESPACE};
