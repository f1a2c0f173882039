//! Source handles: a text stream plus the path and encoding it came from.

use std::fmt;
use std::io::{self, BufRead, Cursor, Read};
use std::path::{Component, Path, PathBuf};

use crate::error::SourceError;
use crate::resolver::Resolver;

/// An opened text source.
///
/// The stream yields UTF-8 regardless of the source encoding, with line
/// endings exactly as stored.
pub struct SourceHandle {
    contents: Box<dyn BufRead + Send>,
    path: PathBuf,
    encoding: String,
}

impl fmt::Debug for SourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceHandle")
            .field("path", &self.path)
            .field("encoding", &self.encoding)
            .finish_non_exhaustive()
    }
}

impl SourceHandle {
    /// Open a file, resolving its encoding with the default settings.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        Self::read_with(path, &Resolver::default())
    }

    /// Open a file, resolving its encoding with `resolver`.
    pub fn read_with(path: impl AsRef<Path>, resolver: &Resolver) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let path = std::fs::canonicalize(path).map_err(|e| SourceError::io(path, e))?;
        // Serve the text that was validated; the file is not reopened.
        let resolution = resolver.read_file(&path)?;

        Ok(Self {
            contents: Box::new(Cursor::new(resolution.text.into_bytes())),
            path,
            encoding: resolution.encoding,
        })
    }

    /// Wrap text already in memory, reported under `name`.
    pub fn from_contents(contents: impl Into<String>, name: impl AsRef<Path>) -> Self {
        Self::from_contents_with(contents, name, &Resolver::default())
    }

    /// Wrap text already in memory, resolving its declaration with `resolver`.
    pub fn from_contents_with(
        contents: impl Into<String>,
        name: impl AsRef<Path>,
        resolver: &Resolver,
    ) -> Self {
        let contents = contents.into();
        let name = name.as_ref();
        // The name need not exist on disk, so `..` is resolved lexically.
        let path = std::path::absolute(name)
            .map(normalize_lexically)
            .unwrap_or_else(|_| name.to_path_buf());
        let encoding = resolver.determine_content_encoding(&contents);

        Self {
            contents: Box::new(Cursor::new(contents.into_bytes())),
            path,
            encoding,
        }
    }

    /// Absolute path of the source, or of its synthetic name.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolved encoding name.
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// File extension without the leading dot; empty if there is none.
    pub fn extension(&self) -> &str {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
    }

    /// Borrow the text stream.
    pub fn contents_mut(&mut self) -> &mut (dyn BufRead + Send) {
        self.contents.as_mut()
    }

    /// Take ownership of the text stream.
    pub fn into_contents(self) -> Box<dyn BufRead + Send> {
        self.contents
    }

    /// Read the rest of the stream into a string.
    pub fn read_to_string(&mut self) -> io::Result<String> {
        let mut text = String::new();
        self.contents.read_to_string(&mut text)?;
        Ok(text)
    }
}

/// Drop `.` components and fold `name/..` pairs without touching the
/// filesystem. Symlinks are not followed.
fn normalize_lexically(path: PathBuf) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(normalized.components().next_back(), Some(Component::Normal(_))) {
                    normalized.pop();
                } else if !normalized.has_root() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}
