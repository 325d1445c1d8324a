//! Routing of extension markup to its validators.

use crate::extension::ExtensionRegistry;
use crate::messages;
use crate::options::CompilerOptions;
use crate::outcome::{ElementScope, ParseOutcome};
use crate::rows::Table;
use crate::schema::{BAL_NAMESPACE, BalElement, ParentKind, WIX_NAMESPACE, route_element};
use std::cell::Cell;
use wixbal_error_reporting::DiagnosticMessage;
use wixbal_source_map::SourceInfo;
use wixbal_xml::{XmlAttribute, XmlElement};

/// The extension's entry points, called by the host for every element and
/// attribute in [`BAL_NAMESPACE`].
#[derive(Debug, Default)]
pub struct BalCompiler {
    pub(crate) options: CompilerOptions,
    first_condition: Cell<Option<SourceInfo>>,
}

impl BalCompiler {
    pub fn new(options: CompilerOptions) -> Self {
        BalCompiler {
            options,
            first_condition: Cell::new(None),
        }
    }

    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    /// Where the first `Condition` row came from, if one was emitted.
    pub fn first_condition_location(&self) -> Option<SourceInfo> {
        self.first_condition.get()
    }

    /// Validate an extension element placed under `parent`.
    pub fn parse_element(
        &self,
        parent: &XmlElement,
        element: &XmlElement,
        registry: &mut ExtensionRegistry,
    ) -> ParseOutcome {
        let route = ParentKind::from_local_name(parent.local_name())
            .zip(BalElement::from_local_name(element.local_name()))
            .and_then(|(parent_kind, kind)| route_element(parent_kind, kind));

        tracing::debug!(
            parent = %parent.name,
            element = %element.name,
            routed = route.is_some(),
            "Dispatching element"
        );

        let outcome = match route {
            Some(BalElement::Condition) => self.parse_condition_element(element, registry),
            Some(BalElement::WixStandardBootstrapperApplication) => {
                self.parse_standard_bootstrapper_application_element(element, registry)
            }
            Some(BalElement::WixManagedBootstrapperApplicationHost) => {
                self.parse_managed_bootstrapper_application_host_element(element, registry)
            }
            None => self.report(messages::unexpected_element(parent, element)),
        };

        if route == Some(BalElement::Condition)
            && self.first_condition.get().is_none()
            && outcome.rows().iter().any(|row| row.table == Table::Condition)
        {
            self.first_condition.set(Some(element.source_info));
        }

        outcome
    }

    /// Validate an extension attribute placed on the host element `parent`.
    ///
    /// Prefer [`parse_attributes`](Self::parse_attributes) when `parent`
    /// carries more than one extension attribute.
    pub fn parse_attribute(
        &self,
        parent: &XmlElement,
        attribute: &XmlAttribute,
        registry: &mut ExtensionRegistry,
    ) -> ParseOutcome {
        self.parse_attributes(parent, &[attribute], registry)
    }

    /// Validate all extension attributes of the host element `parent` as one
    /// unit, so an error on any of them suppresses the rows of the others.
    pub fn parse_attributes(
        &self,
        parent: &XmlElement,
        attributes: &[&XmlAttribute],
        registry: &mut ExtensionRegistry,
    ) -> ParseOutcome {
        tracing::debug!(
            parent = %parent.name,
            attributes = attributes.len(),
            "Dispatching attributes"
        );

        match ParentKind::from_local_name(parent.local_name()) {
            Some(ParentKind::Variable) => {
                self.parse_variable_attributes(parent, attributes, registry)
            }
            _ => {
                let diagnostics = attributes
                    .iter()
                    .filter_map(|attribute| {
                        self.options
                            .apply(messages::unexpected_attribute(parent, attribute))
                    })
                    .collect();
                ParseOutcome::new(diagnostics, Vec::new())
            }
        }
    }

    /// Process the children of an element this extension validated.
    ///
    /// Extension children are dispatched with `scope`'s element as their
    /// parent. Host-language children are not allowed here, and children
    /// from other namespaces go to their registered extension.
    pub fn parse_for_extension_elements(&self, scope: &mut ElementScope<'_>) {
        let parent = scope.element();
        for child in parent.all_children() {
            let namespace = child.name.namespace_uri();
            if namespace == BAL_NAMESPACE {
                let outcome = self.parse_element(parent, child, scope.registry());
                scope.merge(outcome);
            } else if namespace.is_empty() || namespace == WIX_NAMESPACE {
                scope.report(messages::unexpected_element(parent, child));
            } else {
                let outcome = scope.registry().consume_element(parent, child);
                scope.merge(outcome);
            }
        }
    }

    fn report(&self, diagnostic: DiagnosticMessage) -> ParseOutcome {
        self.options
            .apply(diagnostic)
            .map(ParseOutcome::from_diagnostic)
            .unwrap_or_default()
    }
}
