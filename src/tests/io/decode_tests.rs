//! Tests for DecodeReader.

use std::io::{BufRead, Cursor, ErrorKind, Read};

use crate::encoding::Codec;
use crate::io::DecodeReader;

#[test]
fn multibyte_sequence_across_chunk_boundary() {
    // The two-byte 'é' straddles the reader's 8 KiB chunk boundary.
    let mut text = "a".repeat(8 * 1024 - 1);
    text.push('é');
    text.push_str("\r\nend");

    let codec = Codec::for_name("utf-8").unwrap();
    let mut reader = DecodeReader::new(Cursor::new(text.clone().into_bytes()), codec);
    let mut out = String::new();
    reader.read_to_string(&mut out).unwrap();
    assert_eq!(out, text);
}

#[test]
fn latin1_stream_becomes_utf8() {
    let mut reader = DecodeReader::new(Cursor::new(b"caf\xe9\n".to_vec()), Codec::Latin1);
    let mut out = String::new();
    reader.read_to_string(&mut out).unwrap();
    assert_eq!(out, "café\n");
}

#[test]
fn lines_are_available_through_bufread() {
    let sjis = Codec::for_name("shift_jis").unwrap();
    let bytes: Vec<u8> = [&[0x93, 0xFA, 0x96, 0x7B, 0x8C, 0xEA][..], b"\nok\n"].concat();
    let reader = DecodeReader::new(Cursor::new(bytes), sjis);

    let lines: Vec<String> = reader.lines().collect::<Result<_, _>>().unwrap();
    assert_eq!(lines, vec!["日本語", "ok"]);
}

#[test]
fn malformed_input_is_invalid_data() {
    let mut reader = DecodeReader::new(Cursor::new(b"abc\xff".to_vec()), Codec::Ascii);
    let mut out = String::new();
    let err = reader.read_to_string(&mut out).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);
}

#[test]
fn truncated_utf8_at_end_is_invalid_data() {
    let codec = Codec::for_name("utf-8").unwrap();
    let mut reader = DecodeReader::new(Cursor::new(b"abc\xc3".to_vec()), codec);
    let mut out = Vec::new();
    let err = reader.read_to_end(&mut out).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);
}

#[test]
fn empty_input_reads_nothing() {
    let mut reader = DecodeReader::new(Cursor::new(Vec::<u8>::new()), Codec::Latin1);
    let mut out = String::new();
    assert_eq!(reader.read_to_string(&mut out).unwrap(), 0);
    assert!(out.is_empty());
}
