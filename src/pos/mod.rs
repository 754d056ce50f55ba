//! Source code locations (some parts borrowed from [gluon])
//!
//! [gluon]: https://github.com/gluon-lang/gluon/blob/master/base/src/pos.rs

pub type FileId = Option<std::num::NonZeroU32>;
pub use codespan::ByteIndex as BytePos;

pub use span::{Sp, Span, HasSpan};
#[macro_use] mod span;

pub use source_map::Files;
mod source_map;

pub use source_str::SourceStr;
mod source_str;
