mod common;

use common::{codes, compile, compile_with, compile_with_compiler};
use wixbal_compiler::{
    AttributeConsumer, Compiler, CompilerOptions, Error, ParseOutcome, Row, Table,
};
use wixbal_error_reporting::{DiagnosticKind, DiagnosticMessage};
use wixbal_xml::{XmlAttribute, XmlElement};

/// Turns every `ext:*` attribute into a `WixVariable` row, and rejects
/// attributes whose value is `bad`.
struct ExampleExtension;

impl AttributeConsumer for ExampleExtension {
    fn namespace(&self) -> &str {
        "urn:example:ext"
    }

    fn consume_attribute(&mut self, _element: &XmlElement, attribute: &XmlAttribute) -> ParseOutcome {
        if attribute.value == "bad" {
            return ParseOutcome::from_diagnostic(
                DiagnosticMessage::error("Bad value").with_code("EXT-1"),
            );
        }
        ParseOutcome::from_rows(vec![Row::wix_variable(
            &format!("Ext{}", attribute.name.local_name),
            &attribute.value,
            attribute.name_source,
        )])
    }

    fn consume_element(&mut self, _parent: &XmlElement, element: &XmlElement) -> ParseOutcome {
        ParseOutcome::from_rows(vec![Row::wix_variable(
            &format!("Ext{}", element.local_name()),
            "element",
            element.source_info,
        )])
    }
}

fn compiler() -> Compiler {
    Compiler::new(CompilerOptions::default())
        .with_extension(Box::new(ExampleExtension))
        .unwrap()
}

#[test]
fn test_unregistered_foreign_attribute_warns_and_keeps_rows() {
    let output = compile(
        r#"<Bundle><bal:Condition Message="m" ext:Tag="x">Installed</bal:Condition></Bundle>"#,
    );

    assert_eq!(codes(&output), vec!["B-5-1"]);
    assert_eq!(output.diagnostics[0].kind, DiagnosticKind::Warning);
    assert_eq!(output.rows.len(), 1);
}

#[test]
fn test_unregistered_foreign_child_warns() {
    let output = compile(
        r#"<Bundle><bal:Condition Message="m">Installed<ext:Note /></bal:Condition></Bundle>"#,
    );

    assert_eq!(codes(&output), vec!["B-5-2"]);
    assert_eq!(output.rows_in(Table::Condition).count(), 1);
}

#[test]
fn test_registered_extension_rows_merge_into_owner() {
    let mut compiler = compiler();
    let output = compile_with_compiler(
        r#"<Bundle><bal:Condition Message="m" ext:Tag="x">Installed<ext:Note /></bal:Condition></Bundle>"#,
        &mut compiler,
    );

    assert!(output.diagnostics.is_empty());
    insta::assert_snapshot!(output.render_rows(), @r"
    WixVariable: ExtTag | x
    WixVariable: ExtNote | element
    WixBalCondition: Installed | m
    ");
}

#[test]
fn test_extension_error_suppresses_owner_rows() {
    let mut compiler = compiler();
    let output = compile_with_compiler(
        r#"<Bundle><bal:Condition Message="m" ext:Tag="bad">Installed</bal:Condition></Bundle>"#,
        &mut compiler,
    );

    assert_eq!(codes(&output), vec!["EXT-1"]);
    assert!(output.rows.is_empty());
}

#[test]
fn test_foreign_markup_on_host_elements() {
    let mut compiler = compiler();
    let output = compile_with_compiler(
        r#"<Bundle ext:Tag="b"><ext:Thing /><Variable Name="V" other:X="1" xmlns:other="urn:other" /></Bundle>"#,
        &mut compiler,
    );

    assert_eq!(codes(&output), vec!["B-5-1"]);
    let ids: Vec<_> = output.rows.iter().filter_map(|r| r.text(0)).collect();
    assert_eq!(ids, vec!["ExtTag", "ExtThing"]);
}

#[test]
fn test_warnings_as_errors_suppresses_rows() {
    let options = CompilerOptions {
        warnings_as_errors: true,
        ..Default::default()
    };
    let output = compile_with(
        r#"<Bundle><bal:Condition Message="m" ext:Tag="x">Installed</bal:Condition></Bundle>"#,
        options,
    );

    assert_eq!(codes(&output), vec!["B-5-1"]);
    assert!(output.has_errors());
    assert!(output.rows.is_empty());
}

#[test]
fn test_suppressed_warning_is_dropped() {
    let options = CompilerOptions::from_toml_str(
        r#"
warnings-as-errors = true
suppressed-warnings = ["B-5-1"]
"#,
    )
    .unwrap();
    let output = compile_with(
        r#"<Bundle><bal:Condition Message="m" ext:Tag="x">Installed</bal:Condition></Bundle>"#,
        options,
    );

    assert!(output.diagnostics.is_empty());
    assert_eq!(output.rows.len(), 1);
}

#[test]
fn test_bal_namespace_cannot_be_claimed() {
    struct Claimer;
    impl AttributeConsumer for Claimer {
        fn namespace(&self) -> &str {
            wixbal_compiler::BAL_NAMESPACE
        }
        fn consume_attribute(&mut self, _: &XmlElement, _: &XmlAttribute) -> ParseOutcome {
            ParseOutcome::empty()
        }
    }

    let result = Compiler::new(CompilerOptions::default()).with_extension(Box::new(Claimer));
    assert!(matches!(result, Err(Error::ReservedNamespace(_))));
}
