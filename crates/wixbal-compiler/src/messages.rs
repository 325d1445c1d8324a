//! Diagnostics raised by the element validators.
//!
//! Every constructor attaches the location of the node at fault: the
//! attribute for value problems, the element for structural ones.

use wixbal_error_reporting::{DiagnosticMessage, DiagnosticMessageBuilder};
use wixbal_xml::{XmlAttribute, XmlElement};

/// Codes raised by this crate. Their metadata lives in the error catalog.
pub mod codes {
    pub const UNEXPECTED_ELEMENT: &str = "B-1-1";
    pub const UNEXPECTED_ATTRIBUTE: &str = "B-1-2";
    pub const EXPECTED_ATTRIBUTE: &str = "B-2-1";
    pub const EXPECTED_CONDITION: &str = "B-2-2";
    pub const EXPECTED_PARENT_WITH_ATTRIBUTE: &str = "B-2-3";
    pub const EXPECTED_EXACTLY_ONE: &str = "B-2-4";
    pub const ILLEGAL_EMPTY_VALUE: &str = "B-3-1";
    pub const ILLEGAL_YES_NO_VALUE: &str = "B-3-2";
    pub const MUTUALLY_EXCLUSIVE: &str = "B-4-1";
    pub const UNSUPPORTED_EXTENSION_ATTRIBUTE: &str = "B-5-1";
    pub const UNSUPPORTED_EXTENSION_ELEMENT: &str = "B-5-2";

    pub const ALL: &[&str] = &[
        UNEXPECTED_ELEMENT,
        UNEXPECTED_ATTRIBUTE,
        EXPECTED_ATTRIBUTE,
        EXPECTED_CONDITION,
        EXPECTED_PARENT_WITH_ATTRIBUTE,
        EXPECTED_EXACTLY_ONE,
        ILLEGAL_EMPTY_VALUE,
        ILLEGAL_YES_NO_VALUE,
        MUTUALLY_EXCLUSIVE,
        UNSUPPORTED_EXTENSION_ATTRIBUTE,
        UNSUPPORTED_EXTENSION_ELEMENT,
    ];
}

pub fn unexpected_element(parent: &XmlElement, element: &XmlElement) -> DiagnosticMessage {
    DiagnosticMessageBuilder::error("Unexpected element")
        .with_code(codes::UNEXPECTED_ELEMENT)
        .problem(format!(
            "The `{}` element contains an unexpected child element `{}`",
            parent.name, element.name
        ))
        .add_info(format!("Namespace: `{}`", element.name.namespace_uri()))
        .with_location(element.name_source)
        .build()
}

pub fn unexpected_attribute(element: &XmlElement, attribute: &XmlAttribute) -> DiagnosticMessage {
    DiagnosticMessageBuilder::error("Unexpected attribute")
        .with_code(codes::UNEXPECTED_ATTRIBUTE)
        .problem(format!(
            "The `{}` element contains an unexpected attribute `{}`",
            element.name, attribute.name
        ))
        .with_location(attribute.name_source)
        .build()
}

pub fn expected_attribute(element: &XmlElement, attribute: &str) -> DiagnosticMessage {
    DiagnosticMessageBuilder::error("Expected attribute")
        .with_code(codes::EXPECTED_ATTRIBUTE)
        .problem(format!(
            "The `{}` element requires the `{}` attribute",
            element.name, attribute
        ))
        .with_location(element.name_source)
        .build()
}

/// At least one of `first` and `second` is required.
pub fn expected_either_attribute(
    element: &XmlElement,
    first: &str,
    second: &str,
) -> DiagnosticMessage {
    DiagnosticMessageBuilder::error("Expected attribute")
        .with_code(codes::EXPECTED_ATTRIBUTE)
        .problem(format!(
            "The `{}` element requires the `{}` or `{}` attribute",
            element.name, first, second
        ))
        .with_location(element.name_source)
        .build()
}

pub fn expected_condition(element: &XmlElement) -> DiagnosticMessage {
    DiagnosticMessageBuilder::error("Expected condition")
        .with_code(codes::EXPECTED_CONDITION)
        .problem(format!(
            "The `{}` element requires a condition expression as its inner text",
            element.name
        ))
        .add_hint("Write the expression between the start and end tags?")
        .with_location(element.name_source)
        .build()
}

pub fn expected_parent_with_attribute(
    parent: &XmlElement,
    attribute: &XmlAttribute,
    parent_attribute: &str,
) -> DiagnosticMessage {
    DiagnosticMessageBuilder::error("Expected parent with attribute")
        .with_code(codes::EXPECTED_PARENT_WITH_ATTRIBUTE)
        .problem(format!(
            "The `{}` attribute requires its `{}` element to have a `{}` attribute",
            attribute.name, parent.name, parent_attribute
        ))
        .with_location(attribute.name_source)
        .build()
}

pub fn expected_exactly_one(element: &XmlElement, first: &str, second: &str) -> DiagnosticMessage {
    DiagnosticMessageBuilder::error("Expected exactly one attribute")
        .with_code(codes::EXPECTED_EXACTLY_ONE)
        .problem(format!(
            "The `{}` element requires exactly one of the `{}` or `{}` attributes",
            element.name, first, second
        ))
        .add_note("An empty value counts as absent")
        .with_location(element.name_source)
        .build()
}

pub fn illegal_empty_value(element: &XmlElement, attribute: &XmlAttribute) -> DiagnosticMessage {
    DiagnosticMessageBuilder::error("Illegal empty attribute value")
        .with_code(codes::ILLEGAL_EMPTY_VALUE)
        .problem(format!(
            "The `{}/@{}` attribute's value cannot be an empty string",
            element.name, attribute.name
        ))
        .add_hint("Remove the attribute or give it a value?")
        .with_location(attribute.value_source)
        .build()
}

pub fn illegal_yes_no_value(element: &XmlElement, attribute: &XmlAttribute) -> DiagnosticMessage {
    DiagnosticMessageBuilder::error("Illegal yes/no value")
        .with_code(codes::ILLEGAL_YES_NO_VALUE)
        .problem(format!(
            "The `{}/@{}` attribute's value, `{}`, is not a legal yes/no value",
            element.name, attribute.name, attribute.value
        ))
        .add_info("The only legal values are `yes` and `no`")
        .with_location(attribute.value_source)
        .build()
}

/// `attribute` was given alongside `other`, which already claimed the group.
pub fn mutually_exclusive(
    element: &XmlElement,
    attribute: &XmlAttribute,
    other: &XmlAttribute,
) -> DiagnosticMessage {
    DiagnosticMessageBuilder::error("Mutually exclusive attributes")
        .with_code(codes::MUTUALLY_EXCLUSIVE)
        .problem(format!(
            "The `{}/@{}` attribute cannot be specified together with `{}`",
            element.name, attribute.name, other.name
        ))
        .add_detail_at(format!("`{}` is specified here", other.name), other.name_source)
        .with_location(attribute.name_source)
        .build()
}

pub fn unsupported_extension_attribute(
    element: &XmlElement,
    attribute: &XmlAttribute,
) -> DiagnosticMessage {
    DiagnosticMessageBuilder::warning("Unsupported extension attribute")
        .with_code(codes::UNSUPPORTED_EXTENSION_ATTRIBUTE)
        .problem(format!(
            "The `{}` element contains the attribute `{}` from a namespace no extension handles",
            element.name, attribute.name
        ))
        .add_info(format!("Namespace: `{}`", attribute.name.namespace_uri()))
        .add_hint("Is the extension that defines this namespace registered?")
        .with_location(attribute.name_source)
        .build()
}

pub fn unsupported_extension_element(
    parent: &XmlElement,
    element: &XmlElement,
) -> DiagnosticMessage {
    DiagnosticMessageBuilder::warning("Unsupported extension element")
        .with_code(codes::UNSUPPORTED_EXTENSION_ELEMENT)
        .problem(format!(
            "The `{}` element contains the child element `{}` from a namespace no extension handles",
            parent.name, element.name
        ))
        .add_info(format!("Namespace: `{}`", element.name.namespace_uri()))
        .add_hint("Is the extension that defines this namespace registered?")
        .with_location(element.name_source)
        .build()
}
