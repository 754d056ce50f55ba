use crate::pos::{FileId, Span};

/// Script text together with the location it was read from.
///
/// The text must be exactly what is stored in [`Files`](crate::pos::Files), so that byte offsets
/// into it are also byte offsets into the file.
#[derive(Debug, Clone, Copy)]
pub struct SourceStr<'a> {
    pub str: &'a str,
    file_id: FileId,
}

impl<'a> SourceStr<'a> {
    /// Text that isn't registered anywhere, mostly for tests.  Its spans can't be rendered.
    pub fn new_null(str: &'a str) -> Self {
        Self::from_full_source(None, str)
    }

    pub fn from_full_source(file_id: FileId, str: &'a str) -> Self {
        SourceStr { str, file_id }
    }

    pub fn file_id(&self) -> FileId { self.file_id }

    pub fn span(&self) -> Span {
        Span::new(self.file_id, 0u32, self.str.len() as u32)
    }
}

impl std::ops::Deref for SourceStr<'_> {
    type Target = str;

    fn deref(&self) -> &str { self.str }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_covers_text() {
        let source = SourceStr::new_null("using boom\n");
        assert_eq!(source.span(), Span::from(0..11));
        assert_eq!(source.len(), 11);
        assert_eq!(source.file_id(), None);
    }
}
