//! Source-tracked, namespace-aware markup parsing.
//!
//! Wraps [`quick-xml`] to build a tree of [`XmlElement`]s whose element and
//! attribute names are resolved to namespace URIs, and where every element,
//! attribute and text node knows where it came from.
//!
//! ```rust
//! use wixbal_xml::parse;
//!
//! let doc = parse(r#"<Wix xmlns="http://wixtoolset.org/schemas/v4/wxs"
//!      xmlns:bal="http://wixtoolset.org/schemas/v4/wxs/bal">
//!   <Bundle>
//!     <bal:Condition Message="Requires Windows Vista or later">VersionNT &gt;= v6.0</bal:Condition>
//!   </Bundle>
//! </Wix>"#).unwrap();
//!
//! let bundle = doc.root.get_children("Bundle")[0];
//! let condition = bundle.get_children("Condition")[0];
//! assert_eq!(condition.name.namespace_uri(), "http://wixtoolset.org/schemas/v4/wxs/bal");
//! assert_eq!(condition.text(), Some("VersionNT >= v6.0"));
//! assert_eq!(condition.source_info.line(), 4);
//! ```

pub mod context;
pub mod error;
pub mod parser;
pub mod types;

pub use context::XmlParseContext;
pub use error::{Error, ParseResult, Result};
pub use parser::{parse, parse_with_context, parse_with_file_id};
pub use types::{
    NamespaceDeclaration, QName, XML_NAMESPACE, XmlAttribute, XmlChild, XmlChildren, XmlDocument,
    XmlElement,
};
pub use wixbal_source_map::SourceInfo;
