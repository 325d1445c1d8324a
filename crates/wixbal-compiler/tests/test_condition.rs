mod common;

use common::{codes, compile};
use wixbal_compiler::Table;

#[test]
fn test_condition_emits_one_row() {
    let output = compile(
        r#"<Bundle>
  <bal:Condition Message="Requires Windows Vista or later">VersionNT &gt;= v6.0</bal:Condition>
</Bundle>"#,
    );

    assert!(output.diagnostics.is_empty());
    assert_eq!(output.rows.len(), 1);
    let row = &output.rows[0];
    assert_eq!(row.table, Table::Condition);
    assert_eq!(row.text(0), Some("VersionNT >= v6.0"));
    assert_eq!(row.text(1), Some("Requires Windows Vista or later"));
}

#[test]
fn test_empty_condition_without_message_reports_both() {
    let output = compile("<Bundle><bal:Condition /></Bundle>");

    assert_eq!(codes(&output), vec!["B-2-2", "B-2-1"]);
    assert!(output.rows.is_empty());
}

#[test]
fn test_whitespace_only_condition_is_missing() {
    let output = compile(
        r#"<Fragment>
  <bal:Condition Message="m">
  </bal:Condition>
</Fragment>"#,
    );

    assert_eq!(codes(&output), vec!["B-2-2"]);
    assert!(output.rows.is_empty());
}

#[test]
fn test_condition_in_cdata_spans_lines() {
    let output = compile(
        r#"<Fragment>
  <bal:Condition Message="Needs a newer OS"><![CDATA[VersionNT >= v6.1
    AND NOT Privileged]]></bal:Condition>
</Fragment>"#,
    );

    assert!(output.diagnostics.is_empty());
    assert_eq!(
        output.rows[0].text(0),
        Some("VersionNT >= v6.1     AND NOT Privileged")
    );
}

#[test]
fn test_empty_message_is_illegal() {
    let output = compile(r#"<Bundle><bal:Condition Message="">Installed</bal:Condition></Bundle>"#);

    assert_eq!(codes(&output), vec!["B-3-1"]);
    assert!(output.rows.is_empty());
}

#[test]
fn test_unknown_attribute_on_condition() {
    let output = compile(
        r#"<Bundle><bal:Condition Message="m" Severity="high">Installed</bal:Condition></Bundle>"#,
    );

    assert_eq!(codes(&output), vec!["B-1-2"]);
    assert!(output.rows.is_empty());
}

#[test]
fn test_condition_outside_bundle_or_fragment() {
    let output = compile(
        r#"<Bundle>
  <BootstrapperApplicationRef Id="WixStandardBootstrapperApplication.HyperlinkLicense">
    <bal:Condition Message="m">Installed</bal:Condition>
  </BootstrapperApplicationRef>
</Bundle>"#,
    );

    assert_eq!(codes(&output), vec!["B-1-1"]);
    assert!(output.rows.is_empty());
}

#[test]
fn test_error_in_one_condition_does_not_suppress_siblings() {
    let output = compile(
        r#"<Bundle>
  <bal:Condition>Installed</bal:Condition>
  <bal:Condition Message="ok">VersionNT</bal:Condition>
</Bundle>"#,
    );

    assert_eq!(codes(&output), vec!["B-2-1"]);
    assert_eq!(output.rows.len(), 1);
    assert_eq!(output.rows[0].text(1), Some("ok"));
}
