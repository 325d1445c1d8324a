//! Parser that builds namespace-resolved [`XmlDocument`] trees.

use crate::types::{XML_NAMESPACE, XmlChild};
use crate::{
    Error, NamespaceDeclaration, ParseResult, QName, Result, XmlAttribute, XmlChildren,
    XmlDocument, XmlElement, XmlParseContext,
};
use quick_xml::Reader;
use quick_xml::events::{BytesCData, BytesEnd, BytesStart, BytesText, Event};
use wixbal_source_map::{FileId, FileInformation, SourceInfo};

/// Parse markup from a string.
///
/// ```rust
/// use wixbal_xml::parse;
///
/// let doc = parse("<Wix><Bundle/></Wix>").unwrap();
/// assert_eq!(doc.root.local_name(), "Wix");
/// ```
///
/// # Errors
///
/// Returns an error if the markup is malformed or uses an undeclared prefix.
pub fn parse(content: &str) -> Result<XmlDocument> {
    parse_with_file_id(content, FileId(0))
}

/// Parse markup, attributing every location to `file_id`.
pub fn parse_with_file_id(content: &str, file_id: FileId) -> Result<XmlDocument> {
    let mut parser = XmlParser::new(content, file_id);
    parser.parse()
}

/// Parse markup, recording a failure as a diagnostic in `ctx`.
///
/// # Errors
///
/// Returns the diagnostic describing the failure.
pub fn parse_with_context(content: &str, ctx: &mut XmlParseContext) -> ParseResult<XmlDocument> {
    match parse_with_file_id(content, ctx.file_id()) {
        Ok(doc) => Ok(doc),
        Err(err) => {
            let diagnostic = err.to_diagnostic();
            ctx.add_diagnostic(diagnostic.clone());
            Err(vec![diagnostic])
        }
    }
}

struct XmlParser<'a> {
    source: &'a str,

    reader: Reader<&'a [u8]>,

    file_id: FileId,

    /// Line index used to give every location a row.
    file_info: FileInformation,

    /// Stack of open elements.
    stack: Vec<BuildNode>,
}

/// An element whose end tag has not been seen yet.
struct BuildNode {
    name: QName,
    name_source: SourceInfo,
    attributes: Vec<XmlAttribute>,
    declarations: Vec<NamespaceDeclaration>,
    /// Byte offset of the `<` that opened this element.
    start_offset: usize,
    children: Vec<XmlChild>,
}

/// An attribute as written, before its prefix is resolved.
struct RawAttribute {
    prefix: Option<String>,
    local_name: String,
    name_source: SourceInfo,
    value: String,
    value_source: SourceInfo,
}

/// Everything a start tag contributes.
struct StartTag {
    name: QName,
    name_source: SourceInfo,
    attributes: Vec<XmlAttribute>,
    declarations: Vec<NamespaceDeclaration>,
}

impl<'a> XmlParser<'a> {
    fn new(source: &'a str, file_id: FileId) -> Self {
        let mut reader = Reader::from_str(source);
        reader.config_mut().trim_text_start = false;
        reader.config_mut().trim_text_end = false;

        Self {
            source,
            reader,
            file_id,
            file_info: FileInformation::new(source),
            stack: Vec::new(),
        }
    }

    fn parse(&mut self) -> Result<XmlDocument> {
        let mut root: Option<XmlElement> = None;

        loop {
            let event_start = self.reader.buffer_position() as usize;

            match self.reader.read_event() {
                Ok(Event::Start(e)) => {
                    let tag = self.read_start_tag(&e, event_start)?;
                    self.stack.push(BuildNode {
                        name: tag.name,
                        name_source: tag.name_source,
                        attributes: tag.attributes,
                        declarations: tag.declarations,
                        start_offset: event_start,
                        children: Vec::new(),
                    });
                }
                Ok(Event::End(e)) => {
                    let element = self.handle_end(e)?;
                    self.attach(element, &mut root)?;
                }
                Ok(Event::Empty(e)) => {
                    let tag = self.read_start_tag(&e, event_start)?;
                    let end_offset = self.reader.buffer_position() as usize;
                    let element = XmlElement {
                        name: tag.name,
                        name_source: tag.name_source,
                        attributes: tag.attributes,
                        namespace_declarations: tag.declarations,
                        children: XmlChildren::Empty,
                        source_info: self.make_source_info(event_start, end_offset),
                    };
                    self.attach(element, &mut root)?;
                }
                Ok(Event::Text(e)) => self.handle_text(e, event_start)?,
                Ok(Event::CData(e)) => self.handle_cdata(e, event_start),
                Ok(Event::Comment(_) | Event::PI(_) | Event::Decl(_) | Event::DocType(_)) => {}
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::XmlSyntax {
                        message: e.to_string(),
                        position: Some(self.reader.error_position()),
                    });
                }
            }
        }

        if let Some(node) = self.stack.last() {
            return Err(Error::UnexpectedEof {
                expected: format!("closing tag </{}>", node.name.qualified()),
                location: Some(node.name_source),
            });
        }

        let root = root.ok_or(Error::EmptyDocument)?;
        let doc_source_info = self.make_source_info(0, self.source.len());

        Ok(XmlDocument::new(root, doc_source_info))
    }

    /// Add a finished element to its parent, or make it the root.
    fn attach(&mut self, element: XmlElement, root: &mut Option<XmlElement>) -> Result<()> {
        match self.stack.last_mut() {
            Some(parent) => {
                parent.children.push(XmlChild::Element(element));
                Ok(())
            }
            None if root.is_some() => Err(Error::MultipleRoots {
                location: Some(element.source_info),
            }),
            None => {
                *root = Some(element);
                Ok(())
            }
        }
    }

    fn read_start_tag(&self, e: &BytesStart<'_>, event_start: usize) -> Result<StartTag> {
        let full_name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
        let (prefix, local_name) = split_name(&full_name);
        let name_start = event_start + 1;
        let name_source = self.make_source_info(name_start, name_start + full_name.len());

        let (raw_attributes, declarations) = self.read_attributes(e, event_start)?;

        let namespace = self.resolve(prefix.as_deref(), &declarations, true, name_source)?;
        let name = QName {
            namespace,
            local_name,
            prefix,
        };

        let mut attributes = Vec::with_capacity(raw_attributes.len());
        for raw in raw_attributes {
            let namespace =
                self.resolve(raw.prefix.as_deref(), &declarations, false, raw.name_source)?;
            attributes.push(XmlAttribute {
                name: QName {
                    namespace,
                    local_name: raw.local_name,
                    prefix: raw.prefix,
                },
                name_source: raw.name_source,
                value: raw.value,
                value_source: raw.value_source,
            });
        }

        Ok(StartTag {
            name,
            name_source,
            attributes,
            declarations,
        })
    }

    /// Split a tag's attributes into regular attributes and namespace declarations.
    fn read_attributes(
        &self,
        e: &BytesStart<'_>,
        tag_start: usize,
    ) -> Result<(Vec<RawAttribute>, Vec<NamespaceDeclaration>)> {
        let mut attributes = Vec::new();
        let mut declarations = Vec::new();

        // Tag content starts after '<'.
        let content_start = tag_start + 1;
        let tag_str = String::from_utf8_lossy(e.as_ref()).into_owned();
        let mut cursor = e.name().as_ref().len();

        for attr_result in e.attributes() {
            let attr = attr_result?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();

            let value = attr
                .unescape_value()
                .map_err(|err| Error::XmlSyntax {
                    message: format!("Invalid attribute value: {}", err),
                    position: Some(tag_start as u64),
                })?
                .into_owned();

            let (name_span, value_span) = locate_attribute(&tag_str, cursor, &key);
            cursor = value_span.1;

            let (prefix, local_name) = split_name(&key);
            match (prefix.as_deref(), local_name.as_str()) {
                (None, "xmlns") => declarations.push(NamespaceDeclaration {
                    prefix: None,
                    uri: value,
                }),
                (Some("xmlns"), _) => declarations.push(NamespaceDeclaration {
                    prefix: Some(local_name),
                    uri: value,
                }),
                _ => attributes.push(RawAttribute {
                    prefix,
                    local_name,
                    name_source: self.make_source_info(
                        content_start + name_span.0,
                        content_start + name_span.1,
                    ),
                    value,
                    value_source: self.make_source_info(
                        content_start + value_span.0,
                        content_start + value_span.1,
                    ),
                }),
            }
        }

        Ok((attributes, declarations))
    }

    /// Resolve a prefix against the element's own declarations and then its ancestors.
    ///
    /// Unprefixed attributes are never in a namespace.
    fn resolve(
        &self,
        prefix: Option<&str>,
        own: &[NamespaceDeclaration],
        is_element: bool,
        location: SourceInfo,
    ) -> Result<Option<String>> {
        if prefix.is_none() && !is_element {
            return Ok(None);
        }
        if prefix == Some("xml") {
            return Ok(Some(XML_NAMESPACE.to_string()));
        }

        let in_scope = own
            .iter()
            .rev()
            .chain(self.stack.iter().rev().flat_map(|n| n.declarations.iter().rev()))
            .find(|d| d.prefix.as_deref() == prefix);

        match (in_scope, prefix) {
            (Some(decl), _) if decl.uri.is_empty() => Ok(None),
            (Some(decl), _) => Ok(Some(decl.uri.clone())),
            (None, None) => Ok(None),
            (None, Some(prefix)) => Err(Error::UnboundPrefix {
                prefix: prefix.to_string(),
                location: Some(location),
            }),
        }
    }

    fn handle_end(&mut self, e: BytesEnd<'_>) -> Result<XmlElement> {
        let end_name = String::from_utf8_lossy(e.name().as_ref()).into_owned();

        let node = self.stack.pop().ok_or_else(|| Error::XmlSyntax {
            message: format!("Unexpected closing tag </{}>", end_name),
            position: Some(self.reader.buffer_position() as u64),
        })?;

        if node.name.qualified() != end_name {
            return Err(Error::MismatchedEndTag {
                expected: node.name.qualified(),
                found: end_name,
                location: Some(node.name_source),
            });
        }

        let end_offset = self.reader.buffer_position() as usize;

        Ok(XmlElement {
            name: node.name,
            name_source: node.name_source,
            attributes: node.attributes,
            namespace_declarations: node.declarations,
            children: finalize_children(node.children),
            source_info: self.make_source_info(node.start_offset, end_offset),
        })
    }

    fn handle_text(&mut self, e: BytesText<'_>, event_start: usize) -> Result<()> {
        let text = e.unescape().map_err(|err| Error::XmlSyntax {
            message: format!("Invalid text content: {}", err),
            position: Some(event_start as u64),
        })?;

        let end_offset = self.reader.buffer_position() as usize;
        let source_info = self.make_source_info(event_start, end_offset);
        let content = text.into_owned();

        // Text outside the root element is insignificant.
        if let Some(node) = self.stack.last_mut() {
            node.children.push(XmlChild::Text {
                content,
                source_info,
            });
        }
        Ok(())
    }

    fn handle_cdata(&mut self, e: BytesCData<'_>, event_start: usize) {
        let content = String::from_utf8_lossy(e.as_ref()).into_owned();
        let end_offset = self.reader.buffer_position() as usize;
        let source_info = self.make_source_info(event_start, end_offset);

        if let Some(node) = self.stack.last_mut() {
            node.children.push(XmlChild::Text {
                content,
                source_info,
            });
        }
    }

    fn make_source_info(&self, start: usize, end: usize) -> SourceInfo {
        match self.file_info.range(start, end) {
            Some(range) => SourceInfo::new(self.file_id, range),
            None => SourceInfo::from_offsets(self.file_id, start, end),
        }
    }
}

fn split_name(full_name: &str) -> (Option<String>, String) {
    match full_name.split_once(':') {
        Some((prefix, local)) => (Some(prefix.to_string()), local.to_string()),
        None => (None, full_name.to_string()),
    }
}

/// Find the byte spans of an attribute's name and quoted value inside the
/// tag content, searching from `cursor`.
///
/// Returns `((name_start, name_end), (value_start, value_end))`.
fn locate_attribute(
    tag_str: &str,
    cursor: usize,
    key: &str,
) -> ((usize, usize), (usize, usize)) {
    let Some(rel) = tag_str.get(cursor..).and_then(|rest| rest.find(key)) else {
        return ((cursor, cursor), (cursor, cursor));
    };

    let bytes = tag_str.as_bytes();
    let name_start = cursor + rel;
    let name_end = name_start + key.len();

    let mut pos = name_end;
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    if pos < bytes.len() && bytes[pos] == b'=' {
        pos += 1;
    }
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }

    let value_span = match bytes.get(pos).copied() {
        Some(quote @ (b'"' | b'\'')) => match tag_str[pos + 1..].find(quote as char) {
            Some(close) => (pos, pos + 1 + close + 1),
            None => (pos, bytes.len()),
        },
        _ => (name_start, name_end),
    };

    ((name_start, name_end), value_span)
}

/// Classify collected children. Whitespace-only text between child elements
/// is dropped.
fn finalize_children(children: Vec<XmlChild>) -> XmlChildren {
    let has_elements = children.iter().any(|c| matches!(c, XmlChild::Element(_)));

    let mut children: Vec<XmlChild> = if has_elements {
        children
            .into_iter()
            .filter(|c| match c {
                XmlChild::Text { content, .. } => !content.trim().is_empty(),
                XmlChild::Element(_) => true,
            })
            .collect()
    } else {
        children
    };

    if children.is_empty() {
        return XmlChildren::Empty;
    }

    if children.iter().all(|c| matches!(c, XmlChild::Element(_))) {
        let elements = children
            .into_iter()
            .filter_map(|c| match c {
                XmlChild::Element(e) => Some(e),
                XmlChild::Text { .. } => None,
            })
            .collect();
        return XmlChildren::Elements(elements);
    }

    if children.len() == 1
        && let Some(XmlChild::Text {
            content,
            source_info,
        }) = children.pop()
    {
        return XmlChildren::Text {
            content,
            source_info,
        };
    }

    // Adjacent text and CDATA sections collapse into one text child.
    if !has_elements {
        let mut content = String::new();
        let mut span: Option<SourceInfo> = None;
        for child in children {
            if let XmlChild::Text {
                content: text,
                source_info,
            } = child
            {
                content.push_str(&text);
                span = Some(match span {
                    Some(mut s) => {
                        s.range.end = source_info.range.end;
                        s
                    }
                    None => source_info,
                });
            }
        }
        return XmlChildren::Text {
            content,
            source_info: span.unwrap_or_default(),
        };
    }

    XmlChildren::Mixed(children)
}
