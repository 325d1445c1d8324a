use crate::attributes::{AttributeSpec, ElementSchema, ValueKind, collect_attributes};
use crate::dispatch::BalCompiler;
use crate::extension::ExtensionRegistry;
use crate::messages;
use crate::outcome::{ElementScope, ParseOutcome};
use crate::rows::{Row, Table};
use wixbal_xml::XmlElement;

const LICENSE_FILE: &str = "LicenseFile";
const LICENSE_URL: &str = "LicenseUrl";

const SCHEMA: ElementSchema = ElementSchema {
    attributes: &[
        AttributeSpec::optional("LaunchTarget", ValueKind::NonEmptyText),
        AttributeSpec::optional(LICENSE_FILE, ValueKind::NonEmptyText),
        AttributeSpec::optional(LICENSE_URL, ValueKind::Text),
        AttributeSpec::optional("LogoFile", ValueKind::NonEmptyText),
        AttributeSpec::optional("LogoSideFile", ValueKind::NonEmptyText),
        AttributeSpec::optional("ThemeFile", ValueKind::NonEmptyText),
        AttributeSpec::optional("LocalizationFile", ValueKind::NonEmptyText),
        AttributeSpec::optional("SuppressOptionsUI", ValueKind::YesNo),
        AttributeSpec::optional("SuppressDowngradeFailure", ValueKind::YesNo),
        AttributeSpec::optional("SuppressRepair", ValueKind::YesNo),
        AttributeSpec::optional("ShowVersion", ValueKind::YesNo),
    ],
    exclusive: &[&[LICENSE_FILE, LICENSE_URL]],
};

/// Attribute to `WixVariable` id, in emission order.
const VARIABLES: &[(&str, &str)] = &[
    (LICENSE_FILE, "WixStdbaLicenseRtf"),
    (LICENSE_URL, "WixStdbaLicenseUrl"),
    ("LogoFile", "WixStdbaLogo"),
    ("LogoSideFile", "WixStdbaLogoSide"),
    ("ThemeFile", "WixStdbaThemeXml"),
    ("LocalizationFile", "WixStdbaThemeWxl"),
];

/// Columns of the options row, in order.
const FLAGS: [&str; 4] = [
    "SuppressOptionsUI",
    "SuppressDowngradeFailure",
    "SuppressRepair",
    "ShowVersion",
];

impl BalCompiler {
    /// `WixStandardBootstrapperApplication`: the stock bundle UI.
    ///
    /// A license is required, given either as a file or as a link, but not
    /// both. An empty `LicenseUrl` counts as given and is passed through.
    pub(crate) fn parse_standard_bootstrapper_application_element(
        &self,
        element: &XmlElement,
        registry: &mut ExtensionRegistry,
    ) -> ParseOutcome {
        let mut scope = ElementScope::new(element, &self.options, registry);
        let values = collect_attributes(&mut scope, &SCHEMA);

        self.parse_for_extension_elements(&mut scope);

        if values.is_null_or_empty(LICENSE_FILE) && !values.is_present(LICENSE_URL) {
            scope.report(messages::expected_either_attribute(
                element,
                LICENSE_FILE,
                LICENSE_URL,
            ));
        }

        let source = element.source_info;
        scope.finish(|| {
            let mut rows = Vec::new();

            if let Some(target) = values.text("LaunchTarget") {
                rows.push(
                    Row::new(Table::Variable, source)
                        .set(0, "LaunchTarget")
                        .set(1, target)
                        .set(2, "string"),
                );
            }

            for (attribute, id) in VARIABLES {
                if let Some(value) = values.text(attribute) {
                    rows.push(Row::wix_variable(id, value, source));
                }
            }

            if FLAGS.iter().any(|flag| values.yes_no(flag).is_yes()) {
                let mut options = Row::new(Table::StandardUiOptions, source);
                for (index, flag) in FLAGS.iter().enumerate() {
                    if values.yes_no(flag).is_yes() {
                        options = options.set(index, 1);
                    }
                }
                rows.push(options);
            }

            rows
        })
    }
}
