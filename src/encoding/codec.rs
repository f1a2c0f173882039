//! Strict decoders keyed by encoding name.

use encoding_rs::{DecoderResult, Encoding};

/// A decoder selected from an encoding name.
///
/// Decoding is always strict: malformed input is reported as a failure and is
/// never replaced with U+FFFD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    /// 7-bit ASCII; any byte >= 0x80 is malformed.
    Ascii,
    /// ISO-8859-1; every byte maps to the code point of the same value.
    Latin1,
    /// Any WHATWG encoding known to `encoding_rs` (UTF-8 included).
    Whatwg(&'static Encoding),
}

const ASCII_NAMES: &[&str] = &[
    "ascii",
    "us-ascii",
    "646",
    "us",
    "ansi_x3.4-1968",
    "ansi-x3.4-1968",
    "iso646-us",
    "usascii",
];

const LATIN1_NAMES: &[&str] = &[
    "latin-1",
    "latin1",
    "latin",
    "l1",
    "iso-8859-1",
    "iso8859-1",
    "iso_8859-1",
    "iso88591",
    "8859",
    "cp819",
    "iso-latin-1",
];

impl Codec {
    /// Look up a codec for an encoding name.
    ///
    /// Names are matched case-insensitively, as given, with `_` replaced by
    /// `-`, and with all separators removed. Every form is checked against the
    /// ASCII and Latin-1 alias tables before any WHATWG label lookup, since
    /// WHATWG folds both into windows-1252.
    pub fn for_name(name: &str) -> Option<Codec> {
        let lowered = name.trim().to_ascii_lowercase();
        if lowered.is_empty() {
            return None;
        }

        let dashed = lowered.replace('_', "-");
        let squashed: String = lowered.chars().filter(|c| *c != '-' && *c != '_').collect();
        let forms = [lowered.as_str(), dashed.as_str(), squashed.as_str()];

        let in_table = |table: &[&str]| forms.iter().any(|form| table.contains(form));
        if in_table(ASCII_NAMES) {
            return Some(Codec::Ascii);
        }
        if in_table(LATIN1_NAMES) {
            return Some(Codec::Latin1);
        }

        forms
            .into_iter()
            .find_map(|label| Encoding::for_label_no_replacement(label.as_bytes()))
            .map(Codec::Whatwg)
    }

    /// Canonical name of the underlying decoder, for diagnostics.
    pub fn canonical_name(&self) -> &'static str {
        match self {
            Codec::Ascii => "ascii",
            Codec::Latin1 => "iso-8859-1",
            Codec::Whatwg(encoding) => encoding.name(),
        }
    }

    /// Decode a complete byte sequence, or return `None` if it is malformed
    /// under this codec.
    ///
    /// Byte order marks are not interpreted; a UTF-8 BOM decodes to U+FEFF.
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            Codec::Ascii => {
                if bytes.is_ascii() {
                    // ASCII is a subset of UTF-8.
                    String::from_utf8(bytes.to_vec()).ok()
                } else {
                    None
                }
            }
            Codec::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
            Codec::Whatwg(encoding) => encoding
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(|text| text.into_owned()),
        }
    }

    /// Create a streaming decoder for this codec.
    pub fn new_decoder(&self) -> StreamDecoder {
        match self {
            Codec::Ascii => StreamDecoder::Ascii,
            Codec::Latin1 => StreamDecoder::Latin1,
            Codec::Whatwg(encoding) => {
                StreamDecoder::Whatwg(encoding.new_decoder_without_bom_handling())
            }
        }
    }
}

/// Incremental decoder state for [`Codec`].
pub enum StreamDecoder {
    Ascii,
    Latin1,
    Whatwg(encoding_rs::Decoder),
}

impl std::fmt::Debug for StreamDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StreamDecoder::Ascii => f.write_str("StreamDecoder::Ascii"),
            StreamDecoder::Latin1 => f.write_str("StreamDecoder::Latin1"),
            StreamDecoder::Whatwg(decoder) => f
                .debug_tuple("StreamDecoder::Whatwg")
                .field(&decoder.encoding().name())
                .finish(),
        }
    }
}

impl StreamDecoder {
    /// Decode `input` and append the UTF-8 result to `output`.
    ///
    /// `last` marks the final chunk; a multi-byte sequence left incomplete at
    /// that point is malformed. Returns `false` on malformed input.
    pub fn decode_chunk(&mut self, input: &[u8], output: &mut Vec<u8>, last: bool) -> bool {
        match self {
            StreamDecoder::Ascii => {
                if !input.is_ascii() {
                    return false;
                }
                output.extend_from_slice(input);
                true
            }
            StreamDecoder::Latin1 => {
                let mut buf = [0u8; 4];
                for &b in input {
                    output.extend_from_slice(char::from(b).encode_utf8(&mut buf).as_bytes());
                }
                true
            }
            StreamDecoder::Whatwg(decoder) => {
                let Some(needed) = decoder.max_utf8_buffer_length_without_replacement(input.len())
                else {
                    return false;
                };
                let start = output.len();
                output.resize(start + needed, 0);
                let (result, _read, written) = decoder.decode_to_utf8_without_replacement(
                    input,
                    &mut output[start..],
                    last,
                );
                output.truncate(start + written);
                matches!(result, DecoderResult::InputEmpty)
            }
        }
    }
}
