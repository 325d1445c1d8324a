//! Declarative attribute validation.
//!
//! Each element describes its attributes as a static [`ElementSchema`].
//! [`collect_attributes`] walks the element once, coerces every known
//! attribute, reports unknown ones, and delegates foreign ones.

use crate::messages;
use crate::outcome::ElementScope;
use crate::schema::BAL_NAMESPACE;
use wixbal_xml::{XmlAttribute, XmlElement};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Required,
    Optional,
}

/// How an attribute's raw text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Any text, including the empty string
    Text,
    /// Any text except the empty string
    NonEmptyText,
    /// `yes` or `no`, compared case-insensitively
    YesNo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSpec {
    pub name: &'static str,
    pub requirement: Requirement,
    pub kind: ValueKind,
}

impl AttributeSpec {
    pub const fn optional(name: &'static str, kind: ValueKind) -> Self {
        AttributeSpec {
            name,
            requirement: Requirement::Optional,
            kind,
        }
    }

    pub const fn required(name: &'static str, kind: ValueKind) -> Self {
        AttributeSpec {
            name,
            requirement: Requirement::Required,
            kind,
        }
    }
}

/// Attributes of which at most one may appear.
pub type ExclusiveGroup = &'static [&'static str];

#[derive(Debug, Clone, Copy)]
pub struct ElementSchema {
    pub attributes: &'static [AttributeSpec],
    pub exclusive: &'static [ExclusiveGroup],
}

impl ElementSchema {
    pub fn find(&self, local_name: &str) -> Option<&AttributeSpec> {
        self.attributes.iter().find(|spec| spec.name == local_name)
    }
}

/// A yes/no attribute value; `NotSet` when absent or illegal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YesNoType {
    #[default]
    NotSet,
    No,
    Yes,
}

impl YesNoType {
    pub fn is_yes(self) -> bool {
        self == YesNoType::Yes
    }
}

/// A coerced attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Text(String),
    YesNo(YesNoType),
    /// Present, but rejected with a diagnostic
    Invalid,
}

/// Coerce one attribute, reporting an illegal value in `scope`.
pub fn coerce(
    scope: &mut ElementScope<'_>,
    attribute: &XmlAttribute,
    kind: ValueKind,
) -> AttributeValue {
    let element = scope.element();
    let value = attribute.value.as_str();
    tracing::trace!(attribute = %attribute.name, value, ?kind, "Coercing attribute");

    match kind {
        ValueKind::Text => AttributeValue::Text(value.to_string()),
        ValueKind::NonEmptyText if value.is_empty() => {
            scope.report(messages::illegal_empty_value(element, attribute));
            AttributeValue::Invalid
        }
        ValueKind::NonEmptyText => AttributeValue::Text(value.to_string()),
        ValueKind::YesNo => match value.to_ascii_lowercase().as_str() {
            "yes" => AttributeValue::YesNo(YesNoType::Yes),
            "no" => AttributeValue::YesNo(YesNoType::No),
            "" => {
                scope.report(messages::illegal_empty_value(element, attribute));
                AttributeValue::Invalid
            }
            _ => {
                scope.report(messages::illegal_yes_no_value(element, attribute));
                AttributeValue::Invalid
            }
        },
    }
}

/// The attributes collected from one element, by schema name.
#[derive(Debug, Default)]
pub struct AttributeValues<'e> {
    entries: Vec<(&'static str, AttributeValue, &'e XmlAttribute)>,
}

impl<'e> AttributeValues<'e> {
    /// Whether the attribute appeared at all, valid or not.
    pub fn is_present(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.entries
            .iter()
            .find(|(n, _, _)| *n == name)
            .map(|(_, value, _)| value)
    }

    /// The attribute node as written.
    pub fn source(&self, name: &str) -> Option<&'e XmlAttribute> {
        self.entries
            .iter()
            .find(|(n, _, _)| *n == name)
            .map(|(_, _, attribute)| *attribute)
    }

    /// The text of a valid text attribute.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(AttributeValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// True when the attribute is absent, invalid, or empty.
    pub fn is_null_or_empty(&self, name: &str) -> bool {
        self.text(name).is_none_or(str::is_empty)
    }

    pub fn yes_no(&self, name: &str) -> YesNoType {
        match self.get(name) {
            Some(AttributeValue::YesNo(v)) => *v,
            _ => YesNoType::NotSet,
        }
    }
}

/// Walk the attributes of the scope's element against `schema`.
///
/// Unqualified attributes and attributes in this extension's namespace are
/// looked up in the schema; anything else goes to the extension registry.
/// Missing required attributes and exclusive-group violations are reported
/// after the walk, at most once per group.
pub fn collect_attributes<'e>(
    scope: &mut ElementScope<'e>,
    schema: &ElementSchema,
) -> AttributeValues<'e> {
    let element: &'e XmlElement = scope.element();
    let mut values = AttributeValues::default();

    for attribute in &element.attributes {
        if !attribute.name.is_unqualified_or_in(BAL_NAMESPACE) {
            scope.delegate_attribute(attribute);
            continue;
        }
        match schema.find(&attribute.name.local_name) {
            Some(spec) => {
                let value = coerce(scope, attribute, spec.kind);
                values.entries.push((spec.name, value, attribute));
            }
            None => scope.report(messages::unexpected_attribute(element, attribute)),
        }
    }

    for spec in schema.attributes {
        if spec.requirement == Requirement::Required && !values.is_present(spec.name) {
            scope.report(messages::expected_attribute(element, spec.name));
        }
    }

    for group in schema.exclusive {
        let present: Vec<&XmlAttribute> = group
            .iter()
            .filter_map(|name| values.source(name))
            .collect();
        if let [first, second, ..] = present.as_slice() {
            scope.report(messages::mutually_exclusive(element, second, first));
        }
    }

    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension::ExtensionRegistry;
    use crate::options::CompilerOptions;
    use wixbal_xml::{QName, SourceInfo};

    const SCHEMA: ElementSchema = ElementSchema {
        attributes: &[
            AttributeSpec::required("Message", ValueKind::Text),
            AttributeSpec::optional("LogoFile", ValueKind::NonEmptyText),
            AttributeSpec::optional("ShowVersion", ValueKind::YesNo),
            AttributeSpec::optional("LicenseFile", ValueKind::NonEmptyText),
            AttributeSpec::optional("LicenseUrl", ValueKind::Text),
        ],
        exclusive: &[&["LicenseFile", "LicenseUrl"]],
    };

    fn element(attributes: &[(&str, &str)]) -> XmlElement {
        let attributes = attributes
            .iter()
            .map(|(name, value)| {
                XmlAttribute::new(QName::local(*name), *value, SourceInfo::default())
            })
            .collect();
        XmlElement::new(QName::local("Test"), attributes, SourceInfo::default())
    }

    fn collect(element: &XmlElement) -> (Vec<String>, Vec<(String, Option<AttributeValue>)>) {
        let options = CompilerOptions::default();
        let mut registry = ExtensionRegistry::new();
        let mut scope = ElementScope::new(element, &options, &mut registry);
        let values = collect_attributes(&mut scope, &SCHEMA);
        let snapshot = SCHEMA
            .attributes
            .iter()
            .map(|spec| (spec.name.to_string(), values.get(spec.name).cloned()))
            .collect();
        let codes = scope
            .finish(Vec::new)
            .diagnostics()
            .iter()
            .filter_map(|d| d.code.clone())
            .collect();
        (codes, snapshot)
    }

    #[test]
    fn test_yes_no_is_case_insensitive() {
        for raw in ["yes", "Yes", "YES"] {
            let (codes, values) = collect(&element(&[("Message", "m"), ("ShowVersion", raw)]));
            assert!(codes.is_empty());
            assert_eq!(values[2].1, Some(AttributeValue::YesNo(YesNoType::Yes)));
        }
        let (_, values) = collect(&element(&[("Message", "m"), ("ShowVersion", "No")]));
        assert_eq!(values[2].1, Some(AttributeValue::YesNo(YesNoType::No)));
    }

    #[test]
    fn test_illegal_yes_no_values() {
        let (codes, values) = collect(&element(&[("Message", "m"), ("ShowVersion", "true")]));
        assert_eq!(codes, vec!["B-3-2"]);
        assert_eq!(values[2].1, Some(AttributeValue::Invalid));

        let (codes, _) = collect(&element(&[("Message", "m"), ("ShowVersion", "")]));
        assert_eq!(codes, vec!["B-3-1"]);
    }

    #[test]
    fn test_empty_text_rules() {
        let (codes, _) = collect(&element(&[("Message", ""), ("LogoFile", "")]));
        assert_eq!(codes, vec!["B-3-1"]);
    }

    #[test]
    fn test_unknown_and_missing_attributes() {
        let (codes, _) = collect(&element(&[("Bogus", "1")]));
        assert_eq!(codes, vec!["B-1-2", "B-2-1"]);
    }

    #[test]
    fn test_exclusive_group_reports_once() {
        let (codes, _) = collect(&element(&[
            ("Message", "m"),
            ("LicenseFile", "a.rtf"),
            ("LicenseUrl", "http://x"),
        ]));
        assert_eq!(codes, vec!["B-4-1"]);
    }

    #[test]
    fn test_bal_qualified_attributes_are_looked_up() {
        let attribute = XmlAttribute::new(
            QName::namespaced(BAL_NAMESPACE, "Message").with_prefix("bal"),
            "m",
            SourceInfo::default(),
        );
        let element = XmlElement::new(QName::local("Test"), vec![attribute], SourceInfo::default());
        let (codes, values) = collect(&element);
        assert!(codes.is_empty());
        assert_eq!(values[0].1, Some(AttributeValue::Text("m".to_string())));
    }

    #[test]
    fn test_foreign_attributes_are_delegated() {
        let attribute = XmlAttribute::new(
            QName::namespaced("urn:other", "Message").with_prefix("o"),
            "m",
            SourceInfo::default(),
        );
        let element = XmlElement::new(QName::local("Test"), vec![attribute], SourceInfo::default());
        let (codes, values) = collect(&element);
        assert_eq!(codes, vec!["B-5-1", "B-2-1"]);
        assert_eq!(values[0].1, None);
    }

    #[test]
    fn test_null_or_empty() {
        let element = element(&[("LicenseUrl", ""), ("LogoFile", "")]);
        let options = CompilerOptions::default();
        let mut registry = ExtensionRegistry::new();
        let mut scope = ElementScope::new(&element, &options, &mut registry);
        let values = collect_attributes(&mut scope, &SCHEMA);

        assert!(values.is_present("LicenseUrl"));
        assert!(values.is_null_or_empty("LicenseUrl"));
        assert!(values.is_present("LogoFile"));
        assert!(values.is_null_or_empty("LogoFile"));
        assert!(!values.is_present("LicenseFile"));
        assert_eq!(values.yes_no("ShowVersion"), YesNoType::NotSet);
    }
}
