use crate::attributes::{AttributeValue, ValueKind, YesNoType, coerce};
use crate::dispatch::BalCompiler;
use crate::extension::ExtensionRegistry;
use crate::messages;
use crate::outcome::{ElementScope, ParseOutcome};
use crate::rows::{Row, Table};
use crate::schema::BalAttribute;
use wixbal_xml::{XmlAttribute, XmlElement};

impl BalCompiler {
    /// The `bal:` attributes of one host `Variable`, judged together.
    ///
    /// The variable's `Name` is read from the element itself since the host
    /// may not have processed it yet. An error on any of the attributes
    /// suppresses the `OverridableVariable` row.
    pub(crate) fn parse_variable_attributes(
        &self,
        parent: &XmlElement,
        attributes: &[&XmlAttribute],
        registry: &mut ExtensionRegistry,
    ) -> ParseOutcome {
        let mut scope = ElementScope::new(parent, &self.options, registry);
        let name = parent.get_attribute("Name");
        let mut overridable = AttributeValue::YesNo(YesNoType::NotSet);

        for &attribute in attributes {
            if name.is_none() {
                scope.report(messages::expected_parent_with_attribute(
                    parent, attribute, "Name",
                ));
                continue;
            }
            match BalAttribute::from_local_name(&attribute.name.local_name) {
                Some(BalAttribute::Overridable) => {
                    overridable = coerce(&mut scope, attribute, ValueKind::YesNo);
                }
                None => scope.report(messages::unexpected_attribute(parent, attribute)),
            }
        }

        scope.finish(|| match name {
            Some(name) if overridable == AttributeValue::YesNo(YesNoType::Yes) => {
                vec![Row::new(Table::OverridableVariable, parent.source_info).set(0, name)]
            }
            _ => Vec::new(),
        })
    }
}
