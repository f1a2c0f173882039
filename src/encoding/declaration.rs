//! Encoding-declaration scanning.
//!
//! A source file may name its own encoding in a comment on one of its first
//! two lines, e.g. `# -*- coding: latin-1 -*-` or `# vim: set fileencoding=utf-8 :`.
//! Declarations on later lines are ignored.

use std::io::{self, BufRead};
use std::sync::LazyLock;

use regex::bytes::Regex;

/// Number of leading lines that may carry a declaration.
pub const DECLARATION_LINES: usize = 2;

static DECLARATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)^[ \t\x0C]*#.*?coding[:=][ \t]*([-_.a-zA-Z0-9]+)")
        .expect("declaration pattern is valid")
});

/// Match a single line against the declaration pattern.
pub fn match_line(line: &[u8]) -> Option<String> {
    let caps = DECLARATION_PATTERN.captures(line)?;
    let name = caps.get(1)?;
    // The capture class is ASCII-only.
    Some(String::from_utf8_lossy(name.as_bytes()).into_owned())
}

/// Return the encoding declared in the first two of `lines`, if any.
pub fn scan_lines<I>(lines: I) -> Option<String>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    lines
        .into_iter()
        .take(DECLARATION_LINES)
        .find_map(|line| match_line(line.as_ref()))
}

/// Scan an in-memory byte buffer, splitting lines on `\n`.
pub fn scan_bytes(bytes: &[u8]) -> Option<String> {
    scan_lines(bytes.split(|&b| b == b'\n'))
}

/// Scan a reader, consuming at most two lines from it.
pub fn scan_reader<R: BufRead>(mut reader: R) -> io::Result<Option<String>> {
    let mut line = Vec::new();
    for _ in 0..DECLARATION_LINES {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        if let Some(name) = match_line(&line) {
            return Ok(Some(name));
        }
    }
    Ok(None)
}
