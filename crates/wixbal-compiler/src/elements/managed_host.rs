use crate::attributes::{AttributeSpec, ElementSchema, ValueKind, collect_attributes};
use crate::dispatch::BalCompiler;
use crate::extension::ExtensionRegistry;
use crate::messages;
use crate::outcome::{ElementScope, ParseOutcome};
use crate::rows::Row;
use wixbal_xml::XmlElement;

const LICENSE_FILE: &str = "LicenseFile";
const LICENSE_URL: &str = "LicenseUrl";

const SCHEMA: ElementSchema = ElementSchema {
    attributes: &[
        AttributeSpec::optional(LICENSE_FILE, ValueKind::NonEmptyText),
        AttributeSpec::optional(LICENSE_URL, ValueKind::NonEmptyText),
        AttributeSpec::optional("LogoFile", ValueKind::NonEmptyText),
        AttributeSpec::optional("ThemeFile", ValueKind::NonEmptyText),
        AttributeSpec::optional("LocalizationFile", ValueKind::NonEmptyText),
        AttributeSpec::optional("NetFxPackageId", ValueKind::NonEmptyText),
    ],
    exclusive: &[],
};

const VARIABLES: &[(&str, &str)] = &[
    (LICENSE_FILE, "WixMbaPrereqLicenseRtf"),
    (LICENSE_URL, "WixMbaPrereqLicenseUrl"),
    ("LogoFile", "PreqbaLogo"),
    ("ThemeFile", "PreqbaThemeXml"),
    ("LocalizationFile", "PreqbaThemeWxl"),
    ("NetFxPackageId", "WixMbaPrereqPackageId"),
];

impl BalCompiler {
    /// `WixManagedBootstrapperApplicationHost`: the prerequisite UI shown
    /// before a managed bootstrapper application can run.
    ///
    /// Exactly one of `LicenseFile` and `LicenseUrl` must be non-empty;
    /// giving neither and giving both raise the same diagnostic.
    pub(crate) fn parse_managed_bootstrapper_application_host_element(
        &self,
        element: &XmlElement,
        registry: &mut ExtensionRegistry,
    ) -> ParseOutcome {
        let mut scope = ElementScope::new(element, &self.options, registry);
        let values = collect_attributes(&mut scope, &SCHEMA);

        self.parse_for_extension_elements(&mut scope);

        if values.is_null_or_empty(LICENSE_FILE) == values.is_null_or_empty(LICENSE_URL) {
            scope.report(messages::expected_exactly_one(
                element,
                LICENSE_FILE,
                LICENSE_URL,
            ));
        }

        let source = element.source_info;
        scope.finish(|| {
            VARIABLES
                .iter()
                .filter_map(|(attribute, id)| {
                    values
                        .text(attribute)
                        .map(|value| Row::wix_variable(id, value, source))
                })
                .collect()
        })
    }
}
