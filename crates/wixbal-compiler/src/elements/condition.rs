use crate::attributes::{AttributeSpec, ElementSchema, ValueKind, collect_attributes};
use crate::dispatch::BalCompiler;
use crate::extension::ExtensionRegistry;
use crate::messages;
use crate::outcome::{ElementScope, ParseOutcome};
use crate::rows::{Row, Table};
use wixbal_xml::XmlElement;

const SCHEMA: ElementSchema = ElementSchema {
    attributes: &[AttributeSpec::optional("Message", ValueKind::NonEmptyText)],
    exclusive: &[],
};

/// The condition expression written as the element's inner text.
///
/// Surrounding whitespace is trimmed and tabs and line breaks become
/// spaces. Returns `None` when nothing is left.
pub fn condition_expression(element: &XmlElement) -> Option<String> {
    let text = element.inner_text();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.replace(['\t', '\r', '\n'], " "))
}

impl BalCompiler {
    /// `Condition`: a bundle-level launch condition.
    pub(crate) fn parse_condition_element(
        &self,
        element: &XmlElement,
        registry: &mut ExtensionRegistry,
    ) -> ParseOutcome {
        let mut scope = ElementScope::new(element, &self.options, registry);
        let values = collect_attributes(&mut scope, &SCHEMA);

        let condition = condition_expression(element);
        if condition.is_none() {
            scope.report(messages::expected_condition(element));
        }
        // Checked here rather than by the schema so a missing expression is
        // reported first.
        if !values.is_present("Message") {
            scope.report(messages::expected_attribute(element, "Message"));
        }

        self.parse_for_extension_elements(&mut scope);

        scope.finish(|| match (condition, values.text("Message")) {
            (Some(condition), Some(message)) => vec![
                Row::new(Table::Condition, element.source_info)
                    .set(0, condition)
                    .set(1, message),
            ],
            _ => Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wixbal_xml::{QName, SourceInfo};

    fn condition(text: &str) -> XmlElement {
        XmlElement::new(QName::local("Condition"), vec![], SourceInfo::default()).with_text(text)
    }

    #[test]
    fn test_expression_is_trimmed_and_flattened() {
        assert_eq!(
            condition_expression(&condition("\n  VersionNT >= v6.0\r\n  AND Installed\t")),
            Some("VersionNT >= v6.0    AND Installed".to_string())
        );
    }

    #[test]
    fn test_blank_expression_is_missing() {
        assert_eq!(condition_expression(&condition("  \n\t ")), None);
        assert_eq!(
            condition_expression(&XmlElement::new(
                QName::local("Condition"),
                vec![],
                SourceInfo::default()
            )),
            None
        );
    }
}
