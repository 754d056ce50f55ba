use crate::pos::{FileId, Files};

use codespan_reporting as cs;
use cs::term::termcolor as tc;

pub type Diagnostic = cs::diagnostic::Diagnostic<FileId>;
pub type Label = cs::diagnostic::Label<FileId>;

/// An error type that is intended to be pretty-printed through [`codespan_reporting`].
///
/// A `CompileError` may contain multiple errors.  It may even contain no errors!  This should
/// not happen when calling a function that returns a `Result<T, CompileError>`, and is mainly
/// for use in code that attempts to gather errors from many sources (typically ending with a
/// call to [`CompileError::into_result`]).
#[derive(thiserror::Error, Debug)]
#[must_use = "A CompileError must be emitted or it will not be seen!"]
#[error("a diagnostic wasn't formatted. This is a bug! The diagnostic was: {:?}", .diagnostics)]
pub struct CompileError {
    #[doc(hidden)]
    pub diagnostics: Vec<Diagnostic>
}

impl CompileError {
    pub fn new_empty() -> CompileError { CompileError { diagnostics: vec![] } }
    pub fn append(&mut self, mut other: CompileError) {
        self.diagnostics.append(&mut other.diagnostics);
    }
    /// Become an `Ok` if empty, and an `Err` otherwise.
    pub fn into_result<T>(self, value: T) -> Result<T, CompileError> {
        match self.diagnostics.len() {
            0 => Ok(value),
            _ => Err(self),
        }
    }
    pub fn into_result_with<T>(self, func: impl FnOnce() -> T) -> Result<T, CompileError> {
        match self.diagnostics.len() {
            0 => Ok(func()),
            _ => Err(self),
        }
    }
    pub fn error_count(&self) -> usize { self.diagnostics.len() }
    pub fn is_empty(&self) -> bool { self.diagnostics.is_empty() }

    /// The primary messages of all contained diagnostics, in order.
    pub fn messages(&self) -> Vec<&str> {
        self.diagnostics.iter().map(|d| &d.message[..]).collect()
    }

    /// Drain all diagnostics from this object and write them to a writer.
    ///
    /// In order to render spans correctly, the [`Files`] instance that the source text
    /// was registered in is required.
    pub fn emit_to_writer(mut self, writer: &mut dyn tc::WriteColor, files: &Files, config: &cs::term::Config) {
        for diag in self.diagnostics.drain(..) {
            // The only possible error here is an IO Error or a span into a missing file.
            // Neither is any reason to stop reporting the other diagnostics.
            let _ = cs::term::emit(writer, config, files, &diag);
        }
    }

    /// Emit errors that contain no labels.
    ///
    /// It is a bug to call this when there is any possibility that the errors have labels.
    pub fn emit_nospans(self) {
        let writer = tc::StandardStream::stderr(crate::diagnostic::color_choice());
        let files = Files::new();
        self.emit_to_writer(&mut writer.lock(), &files, &TERM_CONFIG);
    }
}

/// Indicates that errors have already been reported to the user and need not be reported again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorReported;

lazy_static::lazy_static! {
    pub(crate) static ref TERM_CONFIG: codespan_reporting::term::Config = {
        let mut config = codespan_reporting::term::Config::default();
        // Make output closer to rustc. Fewer colors overall, looks better.
        config.styles.primary_label_error.set_intense(true);
        config.styles.secondary_label.set_intense(true);
        config.styles.line_number.set_intense(true);
        config.styles.source_border.set_intense(true);
        config
    };
}

#[macro_export]
macro_rules! _diagnostic {
    (
        @ $severity:ident,
        message($($message:tt)+)
        $(, primary( $primary_span:expr, $($primary_msg:tt)+ ) )*
        $(, secondary( $secondary_span:expr, $($secondary_msg:tt)+ ) )*
        $(, note( $($note_msg:tt)+ ) )*
        $(,)?
    ) => {{
        #[allow(unused)]
        use $crate::error::{CompileError, Diagnostic, Label};
        #[allow(unused)]
        use $crate::pos::HasSpan;

        CompileError { diagnostics: vec![
            Diagnostic::$severity()
                .with_message(format!( $($message)+ ))
                .with_labels(vec![
                    $( match HasSpan::span(&$primary_span) {
                        span => Label::primary(span.file_id, span).with_message(format!( $($primary_msg)+ ))
                    } ,)*
                    $( match HasSpan::span(&$secondary_span) {
                        span => Label::secondary(span.file_id, span).with_message(format!( $($secondary_msg)+ ))
                    } ,)*
                ])
                .with_notes(vec![ $(format!( $($note_msg)+ ),)* ]),
        ]}
    }};
    ( // shorthand for message only
        @ $severity:ident,
        $message_fmt:literal $(, $message_arg:expr)* $(,)?
    ) => { $crate::_diagnostic!{
        @ $severity,
        message($message_fmt $(, $message_arg)*),
    }};
}

/// Generates a `CompileError` of severity `error`.
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => { $crate::_diagnostic!(@error, $($arg)+) };
}

/// Generates a `CompileError` of severity `warning`.
#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => { $crate::_diagnostic!(@warning, $($arg)+) };
}

/// A value given to a record field falls outside of the field's range.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{field} must be between {min} and {max}, got {got}.")]
pub struct RangeError {
    pub field: &'static str,
    pub min: i64,
    pub max: i64,
    pub got: i64,
}

impl RangeError {
    /// Check that `min <= value <= max`, returning the value on success.
    pub fn check<T: Copy + Into<i64>>(field: &'static str, min: T, max: T, value: T) -> Result<T, RangeError> {
        let (min, max, got) = (min.into(), max.into(), value.into());
        match min <= got && got <= max {
            true => Ok(value),
            false => Err(RangeError { field, min, max, got }),
        }
    }
}

/// A table lookup used an index outside of the table.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {kind} index: {index}. Max is {max}.", max = .count.saturating_sub(1))]
pub struct IndexError {
    pub kind: &'static str,
    pub index: i64,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_check_boundaries() {
        assert_eq!(RangeError::check("Pain chance", 0, 255, 255), Ok(255));
        assert_eq!(RangeError::check("Pain chance", 0, 255, 0), Ok(0));
        let err = RangeError::check("Pain chance", 0, 255, 256).unwrap_err();
        assert_eq!(err, RangeError { field: "Pain chance", min: 0, max: 255, got: 256 });
        assert_eq!(err.to_string(), "Pain chance must be between 0 and 255, got 256.");
        assert!(RangeError::check("Pain chance", 0, 255, -1).is_err());
    }

    #[test]
    fn index_error_message() {
        let err = IndexError { kind: "thing", index: 300, count: 145 };
        assert_eq!(err.to_string(), "Invalid thing index: 300. Max is 144.");
    }
}
