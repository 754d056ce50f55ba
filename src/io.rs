use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::error::CompileError;

pub type Encoding = &'static encoding_rs::Encoding;

pub use encoding_rs::UTF_8 as DEFAULT_ENCODING;

/// Look up an encoding by one of its WHATWG labels (e.g. `windows-1252`, `latin1`, `utf-8`).
pub fn encoding_from_label(label: &str) -> Result<Encoding, CompileError> {
    encoding_rs::Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| error!("unknown character set '{}'", label))
}

/// Convert source text read in some encoding into UTF-8 bytes, ready for [`crate::pos::Files::add`].
///
/// UTF-8 input is passed through untouched (minus a byte order mark) so that invalid bytes can be
/// reported with their position.
pub fn source_to_utf8<'a>(bytes: &'a [u8], encoding: Encoding, display_name: &str) -> Result<Cow<'a, [u8]>, CompileError> {
    if encoding == encoding_rs::UTF_8 {
        return Ok(Cow::Borrowed(bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes)));
    }
    match encoding.decode_with_bom_removal(bytes) {
        (_, true) => Err(error!("could not read '{}' using encoding '{}'", display_name, encoding.name())),
        (text, _) => Ok(Cow::Owned(text.into_owned().into_bytes())),
    }
}

// =============================================================================

/// Helper that wraps some functions and methods from [`std::fs`], reporting failures as
/// diagnostics that mention the path.
#[derive(Debug, Copy, Clone)]
pub struct Fs {
    /// Encoding of script files read through [`Fs::read_source`].
    pub encoding: Encoding,
}

impl Default for Fs {
    fn default() -> Self { Fs::new(DEFAULT_ENCODING) }
}

impl Fs {
    pub fn new(encoding: Encoding) -> Self { Fs { encoding } }

    /// Wraps [`std::fs::write`].
    pub fn write(&self, path: &Path, data: impl AsRef<[u8]>) -> Result<(), CompileError> {
        std::fs::write(path, data)
            .map_err(|e| error!("while writing file '{}': {}", self.display_path(path), e))
    }

    /// Wraps [`std::fs::read`].
    pub fn read(&self, path: &Path) -> Result<Vec<u8>, CompileError> {
        std::fs::read(path)
            .map_err(|e| error!("while reading file '{}': {}", self.display_path(path), e))
    }

    /// Read a script file and convert it to UTF-8.
    pub fn read_source(&self, path: &Path) -> Result<Vec<u8>, CompileError> {
        let bytes = self.read(path)?;
        Ok(source_to_utf8(&bytes, self.encoding, &self.display_path(path))?.into_owned())
    }

    pub fn canonicalize(&self, path: &Path) -> Result<PathBuf, CompileError> {
        path.canonicalize().map_err(|e| error!("while resolving '{}': {}", self.display_path(path), e))
    }

    /// Make a path user-friendly (e.g. automatically change to relative or absolute
    /// based on location).  Conversion may be lossy for non-UTF-8.
    pub fn display_path(&self, path: &Path) -> String {
        nice_display_path(path)
    }
}

/// Make a path "nice" for display, *if possible*.
pub(crate) fn nice_display_path(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    nice_or_bust(path).unwrap_or_else(|| path.to_string_lossy().into_owned())
}

fn nice_or_bust(path: impl AsRef<Path>) -> Option<String> {
    let cwd = std::env::current_dir().ok()?;
    let absolute = cwd.join(path.as_ref());

    // (just bail if it's not a child. "../../../other/place" would hardly be nice.)
    let relative = absolute.strip_prefix(&cwd).ok()?;
    Some(relative.to_string_lossy().into_owned())
}
