use std::path::Path;

use crate::context::PatchContext;
use crate::diagnostic::RootEmitter;
use crate::error::{CompileError, ErrorReported};
use crate::format::FeatureLevel;
use crate::io::{Encoding, Fs, DEFAULT_ENCODING};
use crate::parse::{self, Preprocessed, SourceFile};
use crate::pos::Files;

/// Front-end API of `decohack`, for use by the command line program as well as by tests.
///
/// A [`Session`] owns the source files that have been read so far, so that diagnostics can be
/// rendered with file names and line numbers.  To construct one, see [`Builder`].
pub struct Session {
    files: Files,
    emitter: RootEmitter,
    fs: Fs,
}

/// Builder for constructing [`Session`].
pub struct Builder {
    capture_diagnostics: bool,
    encoding: Encoding,
}

impl Default for Builder {
    fn default() -> Self { Self::new() }
}

impl Builder {
    pub fn new() -> Self {
        Builder {
            capture_diagnostics: false,
            encoding: DEFAULT_ENCODING,
        }
    }

    pub fn build(&self) -> Session {
        let emitter = match self.capture_diagnostics {
            true => RootEmitter::new_captured(),
            false => RootEmitter::new_stderr(),
        };
        Session { files: Files::new(), emitter, fs: Fs::new(self.encoding) }
    }

    /// Collect diagnostics into a buffer instead of writing them to stderr.
    /// See [`Session::get_captured_diagnostics`].
    pub fn capture_diagnostics(&mut self, capture: bool) -> &mut Self {
        self.capture_diagnostics = capture; self
    }

    /// Character set of script files read from disk.
    pub fn encoding(&mut self, encoding: Encoding) -> &mut Self {
        self.encoding = encoding; self
    }
}

/// A compiled script.
#[derive(Debug)]
pub struct Compiled {
    pub context: PatchContext,
    /// The root script with every `#include` replaced by the text of the included file.
    pub expanded_source: String,
}

/// # Compilation
impl Session {
    /// Compile script text that is not associated with a file on disk.
    ///
    /// Includes resolve against the working directory.  Warnings and errors are emitted.
    pub fn compile_str(&mut self, display_name: &str, text: &[u8]) -> Result<Compiled, ErrorReported> {
        self.compile_source(display_name, text, None)
    }

    /// Read and compile a script file, using the encoding given to the [`Builder`].
    pub fn compile_file(&mut self, path: &Path) -> Result<Compiled, ErrorReported> {
        let text = self.fs.read_source(path).map_err(|e| self.emit(e))?;
        let display_name = self.fs.display_path(path);
        self.compile_source(&display_name, &text, Some(path))
    }

    fn compile_source(&mut self, display_name: &str, text: &[u8], path: Option<&Path>) -> Result<Compiled, ErrorReported> {
        let (file_id, text) = self.files.add(display_name, text).map_err(|e| self.emit(e))?;
        let root = SourceFile { file_id, text: &text, path };

        let Preprocessed { tokens, expanded_source, warnings, eof_span } = {
            parse::preprocess(&self.files, &self.fs, root).map_err(|e| self.emit(e))?
        };
        self.emit_warnings(warnings);

        let parsed = parse::parse(tokens, eof_span).map_err(|e| self.emit(e))?;
        self.emit_warnings(parsed.warnings);
        if let Some(warning) = final_state_warning(&parsed.context) {
            self.emit_warnings(warning);
        }
        Ok(Compiled { context: parsed.context, expanded_source })
    }

    fn emit_warnings(&mut self, warnings: CompileError) {
        if !warnings.is_empty() {
            self.emit(warnings);
        }
    }
}

/// Doom 1.9 patches that modify the very last state confuse some patch loaders.
fn final_state_warning(ctx: &PatchContext) -> Option<CompileError> {
    if ctx.supports(FeatureLevel::Boom) {
        return None;
    }
    let last = ctx.state_count().checked_sub(1)?;
    match ctx.tables().states.get(last) == ctx.baseline().states.get(last) {
        true => None,
        false => Some(warning!(message(
            "Final state {} was replaced in the exported patch; DeHackEd 3.1 may not import this correctly.", last,
        ))),
    }
}

/// # Output
impl Session {
    /// Write a patch file.
    pub fn write_patch(&mut self, path: &Path, ctx: &PatchContext, comment: &str) -> Result<(), ErrorReported> {
        let patch = crate::export::export(ctx, comment);
        self.fs.write(path, patch).map_err(|e| self.emit(e))
    }

    /// Write the include-resolved source of a script.
    pub fn write_expanded_source(&mut self, path: &Path, compiled: &Compiled) -> Result<(), ErrorReported> {
        self.fs.write(path, &compiled.expanded_source).map_err(|e| self.emit(e))
    }

    /// Write a line of text through the diagnostic channel.
    pub fn write_note(&mut self, text: &str) {
        self.emitter.write_plain(text);
    }

    pub fn fs(&self) -> Fs { self.fs }
}

/// # Diagnostics
impl Session {
    pub fn emit(&mut self, e: CompileError) -> ErrorReported {
        self.emitter.emit(&self.files, e)
    }

    /// **Note:** Requires having called [`Builder::capture_diagnostics`].
    pub fn get_captured_diagnostics(&self) -> Option<String> {
        self.emitter.get_captured_diagnostics()
    }
}

// =============================================================================

/// Compile script text in one call, without rendering diagnostics.
///
/// The spans of a returned error point into a [`Files`] that no longer exists, so only the
/// messages are of use.  Use a [`Session`] to get rendered diagnostics.
pub fn compile(source: &str, stream_name: &str) -> Result<PatchContext, CompileError> {
    let files = Files::new();
    let fs = Fs::default();
    let (file_id, text) = files.add(stream_name, source.as_bytes())?;
    let pre = parse::preprocess(&files, &fs, SourceFile { file_id, text: &text, path: None })?;
    parse::parse(pre.tokens, pre.eof_span).map(|parsed| parsed.context)
}

/// Like [`compile`], for a file on disk.  The file is read as UTF-8.
pub fn compile_file(path: &Path) -> Result<PatchContext, CompileError> {
    let files = Files::new();
    let fs = Fs::default();
    let text = fs.read_source(path)?;
    let (file_id, text) = files.add(&fs.display_path(path), &text)?;
    let pre = parse::preprocess(&files, &fs, SourceFile { file_id, text: &text, path: Some(path) })?;
    parse::parse(pre.tokens, pre.eof_span).map(|parsed| parsed.context)
}

/// Usage of the state table, as printed by `decohack --budget`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateBudget {
    pub total_states: usize,
    pub free_states: usize,
    /// Only Doom 1.9 patches limit which states may hold an action pointer.
    pub pointers: Option<PointerBudget>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerBudget {
    pub total: usize,
    pub free: usize,
}

impl StateBudget {
    pub fn of(ctx: &PatchContext) -> Self {
        let pointers = match ctx.supports(FeatureLevel::Boom) {
            true => None,
            false => Some(PointerBudget {
                total: ctx.tables().pointers.iter().filter(|slot| slot.is_some()).count(),
                free: ctx.free_pointer_state_count(),
            }),
        };
        StateBudget { total_states: ctx.state_count(), free_states: ctx.free_state_count(), pointers }
    }

    pub fn lines(&self) -> Vec<String> {
        let mut out = vec!["--- Patch State Budget ---".to_string()];
        out.push(format!(
            "States: {} used / {} total ({} remaining).",
            self.total_states - self.free_states, self.total_states, self.free_states,
        ));
        if let Some(pointers) = &self.pointers {
            out.push(format!(
                "Action Pointers: {} used / {} total ({} remaining).",
                pointers.total - pointers.free, pointers.total, pointers.free,
            ));
        }
        out.push("--------------------------".to_string());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Builder::new().capture_diagnostics(true).build()
    }

    #[test]
    fn diagnostics_name_the_file() {
        let mut session = session();
        assert!(session.compile_str("main.dh", b"using boom\n\nthing 0 { health 5 }\n").is_err());
        let text = session.get_captured_diagnostics().unwrap();
        assert!(text.contains("main.dh:3:"), "{}", text);
    }

    #[test]
    fn warnings_are_emitted_on_success() {
        let mut session = session();
        let compiled = session.compile_str("main.dh", b"using boom\nstrings { NOTAKEY \"x\" }\n").unwrap();
        assert_eq!(compiled.expanded_source, "using boom\nstrings { NOTAKEY \"x\" }\n");
        let text = session.get_captured_diagnostics().unwrap();
        assert!(text.contains("is not a known string name"), "{}", text);
    }

    #[test]
    fn final_doom19_state() {
        let mut session = session();
        session.compile_str("main.dh", b"using doom19\nstate 966 { TROO A 5 stop }\n").unwrap();
        let text = session.get_captured_diagnostics().unwrap();
        assert!(text.contains("Final state 966 was replaced"), "{}", text);
    }

    #[test]
    fn one_shot_compile() {
        let ctx = compile("using boom\nammo 0 { max 300 }", "<input>").unwrap();
        assert_eq!(ctx.ammo(0).unwrap().max(), 300);

        let err = compile("using boom\nammo 9 { }", "<input>").unwrap_err();
        assert_eq!(err.error_count(), 1);
    }

    #[test]
    fn budget() {
        let ctx = compile("using doom19\nthing 2 free states", "<input>").unwrap();
        let budget = StateBudget::of(&ctx);
        assert_eq!(budget.total_states, 967);
        assert!(budget.free_states > 0);
        let pointers = budget.pointers.clone().unwrap();
        assert_eq!(pointers.total, 448);
        assert!(pointers.free > 0 && pointers.free <= pointers.total);

        let lines = budget.lines();
        assert_eq!(lines[0], "--- Patch State Budget ---");
        assert!(lines[1].starts_with("States: "));
        assert!(lines[2].starts_with("Action Pointers: "));

        let boom = StateBudget::of(&compile("using boom", "<input>").unwrap());
        assert_eq!(boom.free_states, 0);
        assert_eq!(boom.pointers, None);
        assert_eq!(boom.lines()[1], "States: 968 used / 968 total (0 remaining).");
    }
}
