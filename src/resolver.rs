//! Encoding resolution for files and in-memory text.
//!
//! A file is decoded with the encoding its first two lines declare (or the
//! default when none is declared). If that fails, the locale-preferred
//! encoding is tried. If both fail the file's encoding is undeterminable.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::config::ResolverConfig;
use crate::encoding::{Codec, declaration, locale};
use crate::error::{ConfigError, SourceError};

/// A fully decoded file together with the encoding that decoded it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub text: String,
    /// Encoding name as declared or configured
    pub encoding: String,
    /// Decoder the name resolved to
    pub codec: Codec,
}

/// Resolves which encoding to use for a source.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    /// Create a resolver with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver from validated settings.
    pub fn with_config(config: ResolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Encoding assumed when a source declares none.
    pub fn default_encoding(&self) -> &str {
        &self.config.default_encoding
    }

    /// The encoding tried after the declared one fails.
    pub fn fallback_encoding(&self) -> String {
        self.config
            .fallback_encoding
            .clone()
            .unwrap_or_else(locale::preferred_encoding)
    }

    /// Scan the first two lines of a file for a declaration.
    ///
    /// Returns the declared encoding, or the default if there is none. Only
    /// the first two lines are read.
    pub fn determine_file_encoding(&self, path: &Path) -> Result<String, SourceError> {
        let file = File::open(path).map_err(|e| SourceError::io(path, e))?;
        let declared =
            declaration::scan_reader(BufReader::new(file)).map_err(|e| SourceError::io(path, e))?;
        Ok(declared.unwrap_or_else(|| self.config.default_encoding.clone()))
    }

    /// Determine the encoding of text that is already in memory.
    ///
    /// The text is viewed as UTF-8 bytes and scanned like a file. Since it is
    /// already decoded this only reports what the text declares.
    pub fn determine_content_encoding(&self, contents: &str) -> String {
        declaration::scan_bytes(contents.as_bytes())
            .unwrap_or_else(|| self.config.default_encoding.clone())
    }

    /// Read and fully decode a file, walking the fallback chain.
    pub fn read_file(&self, path: &Path) -> Result<Resolution, SourceError> {
        let declared = self.determine_file_encoding(path)?;
        let fallback = self.fallback_encoding();
        let bytes = read_bytes(path)?;

        for candidate in [&declared, &fallback] {
            match decode_as(&bytes, candidate) {
                Some((text, codec)) => {
                    log::debug!("decoded {} as {candidate}", path.display());
                    return Ok(Resolution {
                        text,
                        encoding: candidate.clone(),
                        codec,
                    });
                }
                None => log::debug!("{} is not valid {candidate}", path.display()),
            }
        }

        log::warn!(
            "unable to determine encoding for {} (tried {declared}, {fallback})",
            path.display()
        );
        Err(SourceError::EncodingUndeterminable {
            path: path.to_path_buf(),
            encoding: declared,
            fallback,
        })
    }
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, SourceError> {
    let mut file = File::open(path).map_err(|e| SourceError::io(path, e))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| SourceError::io(path, e))?;
    Ok(bytes)
}

/// One decode attempt; `None` when the name is unknown or the bytes are
/// malformed under it.
fn decode_as(bytes: &[u8], name: &str) -> Option<(String, Codec)> {
    let Some(codec) = Codec::for_name(name) else {
        log::warn!("unknown encoding '{name}'");
        return None;
    };
    codec.decode(bytes).map(|text| (text, codec))
}
