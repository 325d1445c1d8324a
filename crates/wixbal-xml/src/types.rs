//! Core types for source-tracked, namespace-resolved markup.

use wixbal_source_map::SourceInfo;

/// Namespace of the `xml:` prefix, bound in every document.
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// A parsed document.
#[derive(Debug, Clone)]
pub struct XmlDocument {
    /// The root element of the document.
    pub root: XmlElement,

    /// Source location of the entire document.
    pub source_info: SourceInfo,
}

/// A namespace-qualified name.
///
/// Elements without a prefix take the in-scope default namespace;
/// attributes without a prefix are in no namespace at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QName {
    /// Resolved namespace URI, `None` for the empty namespace.
    pub namespace: Option<String>,

    /// The local name (without prefix).
    pub local_name: String,

    /// The prefix as written in the source, if any.
    pub prefix: Option<String>,
}

/// A `xmlns` or `xmlns:prefix` declaration on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceDeclaration {
    /// `None` for the default namespace declaration.
    pub prefix: Option<String>,

    /// The declared URI; empty undeclares the default namespace.
    pub uri: String,
}

/// A markup element with source location tracking.
#[derive(Debug, Clone)]
pub struct XmlElement {
    pub name: QName,

    /// Source location of the element name.
    pub name_source: SourceInfo,

    /// Attributes in document order, namespace declarations excluded.
    pub attributes: Vec<XmlAttribute>,

    /// Namespace declarations made on this element.
    pub namespace_declarations: Vec<NamespaceDeclaration>,

    pub children: XmlChildren,

    /// Source location of the entire element (start tag through end tag).
    pub source_info: SourceInfo,
}

/// An attribute with separate locations for its name and value.
#[derive(Debug, Clone)]
pub struct XmlAttribute {
    pub name: QName,

    pub name_source: SourceInfo,

    /// The attribute value (after unescaping entities).
    pub value: String,

    /// Source location of the value, quotes included.
    pub value_source: SourceInfo,
}

/// Children of an element.
#[derive(Debug, Clone)]
pub enum XmlChildren {
    /// Only child elements (whitespace between them is dropped).
    Elements(Vec<XmlElement>),

    /// Only text content.
    Text {
        content: String,
        source_info: SourceInfo,
    },

    /// Text and elements interleaved.
    Mixed(Vec<XmlChild>),

    Empty,
}

/// A single child in mixed content.
#[derive(Debug, Clone)]
pub enum XmlChild {
    Element(XmlElement),

    Text {
        content: String,
        source_info: SourceInfo,
    },
}

impl XmlDocument {
    pub fn new(root: XmlElement, source_info: SourceInfo) -> Self {
        Self { root, source_info }
    }
}

impl QName {
    /// A name in no namespace.
    pub fn local(local_name: impl Into<String>) -> Self {
        Self {
            namespace: None,
            local_name: local_name.into(),
            prefix: None,
        }
    }

    /// A name in the given namespace, written without a prefix.
    pub fn namespaced(namespace: impl Into<String>, local_name: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            local_name: local_name.into(),
            prefix: None,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// The namespace URI, empty string for no namespace.
    pub fn namespace_uri(&self) -> &str {
        self.namespace.as_deref().unwrap_or("")
    }

    /// True if the name has no namespace or is in `namespace`.
    pub fn is_unqualified_or_in(&self, namespace: &str) -> bool {
        match &self.namespace {
            None => true,
            Some(ns) => ns.is_empty() || ns == namespace,
        }
    }

    /// The name as written in the source (`prefix:local` or `local`).
    pub fn qualified(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}:{}", prefix, self.local_name),
            None => self.local_name.clone(),
        }
    }
}

impl std::fmt::Display for QName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.qualified())
    }
}

impl XmlElement {
    /// Create a new empty element.
    pub fn new(name: QName, attributes: Vec<XmlAttribute>, source_info: SourceInfo) -> Self {
        Self {
            name,
            name_source: source_info,
            attributes,
            namespace_declarations: Vec::new(),
            children: XmlChildren::Empty,
            source_info,
        }
    }

    pub fn with_elements(mut self, children: Vec<XmlElement>) -> Self {
        self.children = if children.is_empty() {
            XmlChildren::Empty
        } else {
            XmlChildren::Elements(children)
        };
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children = XmlChildren::Text {
            content: text.into(),
            source_info: self.source_info,
        };
        self
    }

    pub fn local_name(&self) -> &str {
        &self.name.local_name
    }

    /// Get the value of an attribute in no namespace.
    pub fn get_attribute(&self, local_name: &str) -> Option<&str> {
        self.get_attribute_full(local_name).map(|a| a.value.as_str())
    }

    /// Get an attribute in no namespace, with its source info.
    pub fn get_attribute_full(&self, local_name: &str) -> Option<&XmlAttribute> {
        self.attributes
            .iter()
            .find(|a| a.name.namespace.is_none() && a.name.local_name == local_name)
    }

    /// Get an attribute by namespace and local name.
    pub fn get_attribute_ns(&self, namespace: &str, local_name: &str) -> Option<&XmlAttribute> {
        self.attributes.iter().find(|a| {
            a.name.namespace.as_deref() == Some(namespace) && a.name.local_name == local_name
        })
    }

    pub fn has_elements(&self) -> bool {
        !self.all_children().is_empty()
    }

    pub fn is_empty(&self) -> bool {
        matches!(&self.children, XmlChildren::Empty)
    }

    /// Get text content, if this element contains only text.
    pub fn text(&self) -> Option<&str> {
        match &self.children {
            XmlChildren::Text { content, .. } => Some(content),
            _ => None,
        }
    }

    /// All text directly inside this element, concatenated in order.
    pub fn inner_text(&self) -> String {
        match &self.children {
            XmlChildren::Text { content, .. } => content.clone(),
            XmlChildren::Mixed(children) => children
                .iter()
                .filter_map(|c| match c {
                    XmlChild::Text { content, .. } => Some(content.as_str()),
                    XmlChild::Element(_) => None,
                })
                .collect(),
            XmlChildren::Elements(_) | XmlChildren::Empty => String::new(),
        }
    }

    /// Get child elements by local name.
    pub fn get_children(&self, local_name: &str) -> Vec<&XmlElement> {
        self.all_children()
            .into_iter()
            .filter(|e| e.name.local_name == local_name)
            .collect()
    }

    /// Get all child elements (ignoring text in mixed content).
    pub fn all_children(&self) -> Vec<&XmlElement> {
        match &self.children {
            XmlChildren::Elements(elements) => elements.iter().collect(),
            XmlChildren::Mixed(children) => children
                .iter()
                .filter_map(|c| match c {
                    XmlChild::Element(e) => Some(e),
                    XmlChild::Text { .. } => None,
                })
                .collect(),
            XmlChildren::Text { .. } | XmlChildren::Empty => vec![],
        }
    }
}

impl XmlAttribute {
    pub fn new(name: QName, value: impl Into<String>, source_info: SourceInfo) -> Self {
        Self {
            name,
            name_source: source_info,
            value: value.into(),
            value_source: source_info,
        }
    }
}
