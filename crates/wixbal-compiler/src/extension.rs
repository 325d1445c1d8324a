//! Delegation to other markup extensions.
//!
//! Attributes and elements from a namespace this crate does not own are
//! handed to whichever extension registered that namespace. When none did,
//! the node is reported with a warning and otherwise ignored.

use crate::error::Error;
use crate::messages;
use crate::outcome::ParseOutcome;
use crate::schema::{BAL_NAMESPACE, WIX_NAMESPACE};
use std::collections::HashMap;
use wixbal_xml::{XmlAttribute, XmlElement};

/// An extension that validates markup in its own namespace.
pub trait AttributeConsumer {
    /// The namespace URI this extension owns.
    fn namespace(&self) -> &str;

    /// Validate an attribute from this namespace placed on `element`.
    fn consume_attribute(&mut self, element: &XmlElement, attribute: &XmlAttribute)
    -> ParseOutcome;

    /// Validate a child element from this namespace placed under `parent`.
    fn consume_element(&mut self, parent: &XmlElement, element: &XmlElement) -> ParseOutcome {
        ParseOutcome::from_diagnostic(messages::unsupported_extension_element(parent, element))
    }
}

/// Registered extensions, keyed by namespace.
#[derive(Default)]
pub struct ExtensionRegistry {
    consumers: HashMap<String, Box<dyn AttributeConsumer>>,
}

impl std::fmt::Debug for ExtensionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut namespaces: Vec<_> = self.consumers.keys().collect();
        namespaces.sort();
        f.debug_struct("ExtensionRegistry")
            .field("namespaces", &namespaces)
            .finish()
    }
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an extension for its namespace.
    ///
    /// # Errors
    ///
    /// Fails if the namespace is already taken or belongs to the host
    /// language or to this crate.
    pub fn register(&mut self, consumer: Box<dyn AttributeConsumer>) -> Result<(), Error> {
        let namespace = consumer.namespace().to_string();
        if namespace.is_empty() || namespace == BAL_NAMESPACE || namespace == WIX_NAMESPACE {
            return Err(Error::ReservedNamespace(namespace));
        }
        if self.consumers.contains_key(&namespace) {
            return Err(Error::DuplicateExtension(namespace));
        }
        tracing::debug!(namespace = %namespace, "Registered extension");
        self.consumers.insert(namespace, consumer);
        Ok(())
    }

    pub fn contains(&self, namespace: &str) -> bool {
        self.consumers.contains_key(namespace)
    }

    pub fn len(&self) -> usize {
        self.consumers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.consumers.is_empty()
    }

    /// Route a foreign attribute to its extension.
    pub fn consume_attribute(
        &mut self,
        element: &XmlElement,
        attribute: &XmlAttribute,
    ) -> ParseOutcome {
        match self.consumers.get_mut(attribute.name.namespace_uri()) {
            Some(consumer) => consumer.consume_attribute(element, attribute),
            None => ParseOutcome::from_diagnostic(messages::unsupported_extension_attribute(
                element, attribute,
            )),
        }
    }

    /// Route a foreign child element to its extension.
    pub fn consume_element(&mut self, parent: &XmlElement, element: &XmlElement) -> ParseOutcome {
        match self.consumers.get_mut(element.name.namespace_uri()) {
            Some(consumer) => consumer.consume_element(parent, element),
            None => ParseOutcome::from_diagnostic(messages::unsupported_extension_element(
                parent, element,
            )),
        }
    }
}
