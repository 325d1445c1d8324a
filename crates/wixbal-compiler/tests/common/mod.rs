#![allow(dead_code)]

use wixbal_compiler::{CompileOutput, Compiler, CompilerOptions, compile_source};

/// Wrap `body` in a document root declaring the host and `bal` namespaces.
pub fn document(body: &str) -> String {
    format!(
        r#"<Wix xmlns="http://wixtoolset.org/schemas/v4/wxs" xmlns:bal="http://wixtoolset.org/schemas/v4/wxs/bal" xmlns:ext="urn:example:ext">
{body}
</Wix>"#
    )
}

pub fn compile(body: &str) -> CompileOutput {
    compile_with(body, CompilerOptions::default())
}

pub fn compile_with(body: &str, options: CompilerOptions) -> CompileOutput {
    compile_source("bundle.wxs", &document(body), options)
        .expect("test markup should parse")
        .output
}

pub fn compile_with_compiler(body: &str, compiler: &mut Compiler) -> CompileOutput {
    let doc = wixbal_xml::parse(&document(body)).expect("test markup should parse");
    compiler.compile(&doc)
}

pub fn codes(output: &CompileOutput) -> Vec<&str> {
    output
        .diagnostics
        .iter()
        .filter_map(|d| d.code.as_deref())
        .collect()
}
