use core::fmt;

use crate::pos::{BytePos, FileId};
use crate::parse::lexer;

/// Wraps a value in [`Sp`].
///
/// * `sp!(span => value)` attaches the given span.
/// * `sp!(value)` attaches [`Span::NULL`], for values that were never written in a script.
///
/// ```
/// use decohack::{sp, Sp, Span};
///
/// let label: Sp<String> = sp!(Span::from(4..9) => "Spawn".to_string());
/// assert_eq!(label.span, Span::from(4..9));
/// assert_eq!(sp!(10).span, Span::NULL);
/// ```
#[macro_export]
macro_rules! sp {
    ($span:expr => $expr:expr) => { $crate::Sp { span: $span, value: $expr } };
    ($expr:expr) => { $crate::Sp { span: $crate::pos::Span::NULL, value: $expr } };
}

/// A byte range in one source file.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: BytePos,
    pub end: BytePos,
    pub file_id: FileId,
}

impl Span {
    /// Location of generated values.  Labels at this span are not rendered.
    pub const NULL: Span = Span { start: BytePos(0), end: BytePos(0), file_id: None };

    pub fn new(file_id: FileId, start: impl Into<BytePos>, end: impl Into<BytePos>) -> Span {
        let (start, end) = (start.into(), end.into());
        assert!(end >= start);
        Span { file_id, start, end }
    }

    pub(crate) fn from_locs(left: lexer::Location, right: lexer::Location) -> Self {
        debug_assert_eq!(left.0, right.0);
        Self::new(left.0, left.1, right.1)
    }

    /// The smallest span covering both spans.
    ///
    /// Spans in different files can't be merged; `self` is returned unchanged.
    ///
    /// ```rust
    /// use decohack::Span;
    ///
    /// let keyword = Span::from(0..5);
    /// let block_end = Span::from(30..31);
    /// assert_eq!(keyword.merge(block_end), Span::from(0..31));
    /// ```
    pub fn merge(self, other: Span) -> Span {
        if self.file_id != other.file_id {
            return self;
        }
        Span::new(self.file_id, self.start.min(other.start), self.end.max(other.end))
    }

    pub fn start(self) -> BytePos { self.start }
    pub fn end(self) -> BytePos { self.end }
    pub fn len(self) -> usize { (self.end - self.start).into() }
    pub fn is_empty(self) -> bool { self.start == self.end }

    /// The empty span at the start of this one.
    pub fn start_span(self) -> Span {
        Span { end: self.start, ..self }
    }
}

impl<I: Into<BytePos>> From<std::ops::Range<I>> for Span {
    fn from(range: std::ops::Range<I>) -> Span {
        Span::new(None, range.start, range.end)
    }
}

impl From<Span> for std::ops::Range<usize> {
    fn from(span: Span) -> std::ops::Range<usize> {
        span.start.into()..span.end.into()
    }
}

/// A value that was read from a script, together with where it was written.
///
/// Comparisons and hashes only look at the value, and it derefs to `T`.
#[derive(Copy, Clone)]
pub struct Sp<T: ?Sized> {
    pub span: Span,
    pub value: T,
}

impl<T> Sp<T> {
    pub fn sp_map<B>(self, func: impl FnOnce(T) -> B) -> Sp<B> {
        sp!(self.span => func(self.value))
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Sp<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sp!({:?} => ", &(self.span.start().0..self.span.end().0))?;
        fmt::Debug::fmt(&self.value, f)?;
        write!(f, ")")
    }
}

impl<T: ?Sized + fmt::Display> fmt::Display for Sp<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<T: ?Sized + Eq> Eq for Sp<T> {}

impl<T: ?Sized + PartialEq> PartialEq for Sp<T> {
    fn eq(&self, other: &Self) -> bool { self.value == other.value }
}

impl<T: ?Sized + PartialEq> PartialEq<T> for Sp<T> {
    fn eq(&self, other: &T) -> bool { self.value == *other }
}

impl<T: ?Sized + std::hash::Hash> std::hash::Hash for Sp<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) { self.value.hash(state) }
}

impl<T: ?Sized> std::ops::Deref for Sp<T> {
    type Target = T;
    fn deref(&self) -> &T { &self.value }
}

impl<T: ?Sized> std::ops::DerefMut for Sp<T> {
    fn deref_mut(&mut self) -> &mut T { &mut self.value }
}

impl<T: ?Sized> std::borrow::Borrow<T> for Sp<T> {
    fn borrow(&self) -> &T { &self.value }
}

// =============================================================================

/// Lets the diagnostic macros take either an [`Sp`] or a [`Span`] as a location.
pub trait HasSpan {
    fn span(&self) -> Span;
}

impl<T: ?Sized> HasSpan for Sp<T> {
    fn span(&self) -> Span { self.span }
}

impl HasSpan for Span {
    fn span(&self) -> Span { *self }
}

impl<T: ?Sized + HasSpan> HasSpan for &T {
    fn span(&self) -> Span { (**self).span() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge() {
        let thing = Span::from(1..5);
        let block = Span::from(3..10);
        assert_eq!(thing.merge(block), Span::from(1..10));
        assert_eq!(block.merge(thing), Span::from(1..10));
        assert_eq!(thing.merge(Span::from(2..4)), thing);
        assert_eq!(thing.merge(Span::from(20..22)), Span::from(1..22));
    }

    #[test]
    fn merge_across_files() {
        let other_file = Span::new(std::num::NonZeroU32::new(2), 0u32, 3u32);
        let here = Span::from(1..5);
        assert_eq!(here.merge(other_file), here);
    }

    #[test]
    fn sp_ignores_span_in_comparisons() {
        let a = sp!(Span::from(0..3) => "TROO");
        let b = sp!(Span::from(8..11) => "TROO");
        assert_eq!(a, b);
        assert_eq!(a, "TROO");
        assert!(a.span.start_span().is_empty());
    }
}
