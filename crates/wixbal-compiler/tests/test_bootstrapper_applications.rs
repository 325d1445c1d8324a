mod common;

use common::{codes, compile};
use wixbal_compiler::{FieldValue, Table};

fn standard(attributes: &str) -> String {
    format!(
        r#"<Bundle>
  <BootstrapperApplicationRef Id="WixStandardBootstrapperApplication.RtfLicense">
    <bal:WixStandardBootstrapperApplication {attributes} />
  </BootstrapperApplicationRef>
</Bundle>"#
    )
}

fn managed(attributes: &str) -> String {
    format!(
        r#"<Bundle>
  <BootstrapperApplicationRef Id="ManagedBootstrapperApplicationHost">
    <bal:WixManagedBootstrapperApplicationHost {attributes} />
  </BootstrapperApplicationRef>
</Bundle>"#
    )
}

#[test]
fn test_standard_license_file_and_show_version() {
    let output = compile(&standard(r#"LicenseFile="license.rtf" ShowVersion="yes""#));

    assert!(output.diagnostics.is_empty());
    assert_eq!(output.rows.len(), 2);

    let license = &output.rows[0];
    assert_eq!(license.table, Table::WixVariable);
    assert_eq!(license.text(0), Some("WixStdbaLicenseRtf"));
    assert_eq!(license.text(1), Some("license.rtf"));

    let options = &output.rows[1];
    assert_eq!(options.table, Table::StandardUiOptions);
    assert_eq!(
        options.fields,
        vec![None, None, None, Some(FieldValue::Integer(1))]
    );
}

#[test]
fn test_standard_both_licenses_is_one_exclusion() {
    let output = compile(&standard(
        r#"LicenseFile="license.rtf" LicenseUrl="https://example.com/eula""#,
    ));

    assert_eq!(codes(&output), vec!["B-4-1"]);
    assert!(output.rows.is_empty());
}

#[test]
fn test_standard_no_license() {
    let output = compile(&standard(r#"LogoFile="logo.png""#));

    assert_eq!(codes(&output), vec!["B-2-1"]);
    let problem = output.diagnostics[0].problem.as_ref().unwrap().as_str();
    assert!(problem.contains("`LicenseFile` or `LicenseUrl`"));
    assert!(output.rows.is_empty());
}

#[test]
fn test_standard_empty_license_url_is_passed_through() {
    let output = compile(&standard(r#"LicenseUrl="""#));

    assert!(output.diagnostics.is_empty());
    assert_eq!(output.rows.len(), 1);
    assert_eq!(output.rows[0].text(0), Some("WixStdbaLicenseUrl"));
    assert_eq!(output.rows[0].text(1), Some(""));
}

#[test]
fn test_standard_flags_all_no_emit_no_options_row() {
    let output = compile(&standard(
        r#"LicenseUrl="https://example.com/eula" SuppressOptionsUI="no" SuppressRepair="No" ShowVersion="NO""#,
    ));

    assert!(output.diagnostics.is_empty());
    assert_eq!(output.rows_in(Table::StandardUiOptions).count(), 0);
    assert_eq!(output.rows.len(), 1);
}

#[test]
fn test_standard_flags_are_case_insensitive() {
    let output = compile(&standard(
        r#"LicenseUrl="u" SuppressOptionsUI="YES" SuppressDowngradeFailure="Yes""#,
    ));

    let options = output.rows_in(Table::StandardUiOptions).next().unwrap();
    assert_eq!(options.integer(0), Some(1));
    assert_eq!(options.integer(1), Some(1));
    assert_eq!(options.field(2), None);
    assert_eq!(options.field(3), None);
}

#[test]
fn test_standard_bad_flag_suppresses_all_rows() {
    let output = compile(&standard(
        r#"LicenseFile="license.rtf" LogoFile="logo.png" ShowVersion="sometimes""#,
    ));

    assert_eq!(codes(&output), vec!["B-3-2"]);
    assert!(output.rows.is_empty());
}

#[test]
fn test_standard_empty_file_attribute() {
    let output = compile(&standard(r#"LicenseFile="license.rtf" ThemeFile="""#));

    assert_eq!(codes(&output), vec!["B-3-1"]);
    assert!(output.rows.is_empty());
}

#[test]
fn test_standard_launch_target_row() {
    let output = compile(&standard(
        r#"LaunchTarget="[InstallFolder]app.exe" LicenseFile="license.rtf""#,
    ));

    let variable = &output.rows[0];
    assert_eq!(variable.table, Table::Variable);
    assert_eq!(variable.text(0), Some("LaunchTarget"));
    assert_eq!(variable.text(1), Some("[InstallFolder]app.exe"));
    assert_eq!(variable.text(2), Some("string"));
}

#[test]
fn test_managed_neither_license() {
    let output = compile(&managed(r#"LogoFile="logo.png""#));

    assert_eq!(codes(&output), vec!["B-2-4"]);
    assert!(output.rows.is_empty());
}

#[test]
fn test_managed_both_licenses() {
    let output = compile(&managed(r#"LicenseFile="license.rtf" LicenseUrl="https://example.com""#));

    assert_eq!(codes(&output), vec!["B-2-4"]);
    assert!(output.rows.is_empty());
}

#[test]
fn test_managed_exactly_one_license() {
    for (attributes, id, value) in [
        (r#"LicenseFile="license.rtf""#, "WixMbaPrereqLicenseRtf", "license.rtf"),
        (r#"LicenseUrl="https://example.com""#, "WixMbaPrereqLicenseUrl", "https://example.com"),
    ] {
        let output = compile(&managed(attributes));

        assert!(output.diagnostics.is_empty());
        assert_eq!(output.rows.len(), 1);
        assert_eq!(output.rows[0].table, Table::WixVariable);
        assert_eq!(output.rows[0].text(0), Some(id));
        assert_eq!(output.rows[0].text(1), Some(value));
    }
}

#[test]
fn test_managed_empty_license_url_counts_as_absent() {
    let output = compile(&managed(r#"LicenseUrl="""#));

    // The empty value is illegal and leaves neither license given.
    assert_eq!(codes(&output), vec!["B-3-1", "B-2-4"]);
    assert!(output.rows.is_empty());
}

#[test]
fn test_managed_rows_in_order() {
    let output = compile(&managed(
        r#"NetFxPackageId="NetFx48Web" ThemeFile="theme.xml" LicenseUrl="https://example.com" LogoFile="logo.png" LocalizationFile="theme.wxl""#,
    ));

    insta::assert_snapshot!(output.render_rows(), @r"
    WixVariable: WixMbaPrereqLicenseUrl | https://example.com
    WixVariable: PreqbaLogo | logo.png
    WixVariable: PreqbaThemeXml | theme.xml
    WixVariable: PreqbaThemeWxl | theme.wxl
    WixVariable: WixMbaPrereqPackageId | NetFx48Web
    ");
}

#[test]
fn test_application_under_wrong_parent() {
    let output = compile(
        r#"<Bundle>
  <bal:WixStandardBootstrapperApplication LicenseFile="license.rtf" />
</Bundle>"#,
    );

    assert_eq!(codes(&output), vec!["B-1-1"]);
    assert!(output.rows.is_empty());
}
