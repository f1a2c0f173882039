//! Tests for locale-preferred encoding lookup.

use std::collections::HashMap;

use crate::encoding::locale::{LOCALE_DEFAULT, preferred_encoding_from};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn codeset_comes_from_lang() {
    assert_eq!(preferred_encoding_from(lookup(&[("LANG", "en_US.UTF-8")])), "utf-8");
}

#[test]
fn lc_all_takes_precedence() {
    let vars = lookup(&[
        ("LC_ALL", "de_DE.ISO-8859-1"),
        ("LC_CTYPE", "fr_FR.UTF-8"),
        ("LANG", "en_US.UTF-8"),
    ]);
    assert_eq!(preferred_encoding_from(vars), "iso-8859-1");
}

#[test]
fn empty_variables_are_skipped() {
    let vars = lookup(&[("LC_ALL", ""), ("LC_CTYPE", "ja_JP.SJIS")]);
    assert_eq!(preferred_encoding_from(vars), "sjis");
}

#[test]
fn modifier_is_stripped() {
    assert_eq!(
        preferred_encoding_from(lookup(&[("LANG", "sr_RS.UTF-8@latin")])),
        "utf-8"
    );
}

#[test]
fn locales_without_codeset_use_default() {
    assert_eq!(preferred_encoding_from(lookup(&[("LANG", "C")])), LOCALE_DEFAULT);
    assert_eq!(preferred_encoding_from(lookup(&[("LANG", "POSIX")])), LOCALE_DEFAULT);
    assert_eq!(preferred_encoding_from(lookup(&[("LANG", "en_US.")])), LOCALE_DEFAULT);
    assert_eq!(preferred_encoding_from(lookup(&[])), LOCALE_DEFAULT);
}
