use std::io::Write;

use codespan_reporting as cs;
use cs::term::termcolor as tc;

use crate::pos::Files;
use crate::error::{CompileError, ErrorReported, TERM_CONFIG};

/// Where diagnostics end up.
///
/// The CLI writes them to the standard error stream; tests capture them so that the
/// rendered text (including file names and line numbers) can be inspected.
pub struct RootEmitter {
    writer: EmitterWriter,
    config: &'static cs::term::Config,
}

enum EmitterWriter {
    Stderr(tc::StandardStream),
    Captured(tc::NoColor<Vec<u8>>),
}

impl RootEmitter {
    pub fn new_stderr() -> Self {
        RootEmitter {
            writer: EmitterWriter::Stderr(tc::StandardStream::stderr(color_choice())),
            config: &TERM_CONFIG,
        }
    }

    pub fn new_captured() -> Self {
        RootEmitter {
            writer: EmitterWriter::Captured(tc::NoColor::new(vec![])),
            config: &TERM_CONFIG,
        }
    }

    /// Emit diagnostics.
    ///
    /// Returns [`ErrorReported`] in order to allow it to be used like
    /// `result.map_err(|e| emitter.emit(&files, e))?`.
    pub fn emit(&mut self, files: &Files, diag: CompileError) -> ErrorReported {
        match &mut self.writer {
            EmitterWriter::Stderr(stream) => diag.emit_to_writer(&mut stream.lock(), files, self.config),
            EmitterWriter::Captured(buffer) => diag.emit_to_writer(buffer, files, self.config),
        }
        ErrorReported
    }

    /// Write a line of plain text (e.g. a summary) through the same channel as diagnostics.
    pub fn write_plain(&mut self, text: &str) {
        let _ = match &mut self.writer {
            EmitterWriter::Stderr(stream) => writeln!(stream.lock(), "{}", text),
            EmitterWriter::Captured(buffer) => writeln!(buffer, "{}", text),
        };
    }

    /// Get everything written so far, if this emitter was made by [`Self::new_captured`].
    pub fn get_captured_diagnostics(&self) -> Option<String> {
        match &self.writer {
            EmitterWriter::Stderr(_) => None,
            EmitterWriter::Captured(buffer) => Some(String::from_utf8_lossy(buffer.get_ref()).into_owned()),
        }
    }
}

/// Color preference for diagnostics on the standard error stream.
///
/// The `DECOHACK_COLOR` environment variable (`always`, `never` or `auto`) overrides the default,
/// which is to use color only when stderr is a terminal.
pub fn color_choice() -> tc::ColorChoice {
    match std::env::var("DECOHACK_COLOR").as_deref() {
        Ok("always") => tc::ColorChoice::Always,
        Ok("never") => tc::ColorChoice::Never,
        _ => match atty::is(atty::Stream::Stderr) {
            true => tc::ColorChoice::Auto,
            false => tc::ColorChoice::Never,
        },
    }
}
