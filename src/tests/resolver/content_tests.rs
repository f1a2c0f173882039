//! Tests for resolving the encoding of in-memory text.

use crate::config::ResolverConfig;
use crate::resolver::Resolver;

#[test]
fn undeclared_text_is_utf8() {
    assert_eq!(Resolver::new().determine_content_encoding("x = 1\n"), "utf-8");
}

#[test]
fn declared_text_reports_declaration() {
    let text = "# -*- coding: latin-1 -*-\nx = 'é'\n";
    assert_eq!(Resolver::new().determine_content_encoding(text), "latin-1");
}

#[test]
fn declaration_after_second_line_is_ignored() {
    let text = "a = 1\nb = 2\n# coding: ascii\n";
    assert_eq!(Resolver::new().determine_content_encoding(text), "utf-8");
}

#[test]
fn empty_text_uses_default() {
    assert_eq!(Resolver::new().determine_content_encoding(""), "utf-8");
}

#[test]
fn configured_default_is_reported() {
    let resolver =
        Resolver::with_config(ResolverConfig::new().with_default_encoding("latin-1")).unwrap();
    assert_eq!(resolver.determine_content_encoding("x = 1\n"), "latin-1");
}
