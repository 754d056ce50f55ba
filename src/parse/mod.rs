//! Parsing of DECOHack scripts.
//!
//! The parser is a hand-written recursive descent over the token stream produced by
//! [`preprocess`].  It does not build a syntax tree; every entry is applied to a
//! [`PatchContext`] as soon as it is read, so that later entries observe the effects of earlier
//! ones (e.g. a `thing` block can copy a thing modified further up).
//!
//! Errors inside one top-level entry are recorded and parsing resumes at the next entry.

use std::fmt;

use crate::context::PatchContext;
use crate::error::{CompileError, Label};
use crate::format::{FeatureLevel, PatchFormat};
use crate::pos::{Sp, Span};

pub use lexer::{OwnedToken, TokenKind};
pub use include::{preprocess, Preprocessed, SourceFile, MAX_INCLUDE_DEPTH};

#[macro_use]
mod token_macro;
pub mod lexer;
mod include;
mod value;
mod state;
mod actor;
mod misc_blocks;

#[cfg(test)]
mod tests;

pub(crate) type PResult<T> = Result<T, CompileError>;

/// A successfully parsed script.
#[derive(Debug)]
pub struct Parsed {
    pub context: PatchContext,
    pub warnings: CompileError,
}

/// Parse a preprocessed token stream into a patch.
///
/// On failure, the returned error holds every error found in the script followed by any warnings.
pub fn parse(tokens: Vec<Sp<OwnedToken>>, eof_span: Span) -> Result<Parsed, CompileError> {
    let format = read_using_clause(&tokens, eof_span)?;
    let ctx = PatchContext::new(format).at(tokens.get(1).map_or(eof_span, |token| token.span))?;
    let mut parser = Parser {
        tokens,
        pos: 2,
        eof_span,
        ctx,
        warnings: CompileError::new_empty(),
    };

    let mut errors = parser.parse_entries();
    let Parser { ctx, warnings, .. } = parser;
    match errors.is_empty() {
        true => Ok(Parsed { context: ctx, warnings }),
        false => {
            errors.append(warnings);
            Err(errors)
        },
    }
}

/// Every script begins with `using <format>`.
fn read_using_clause(tokens: &[Sp<OwnedToken>], eof_span: Span) -> PResult<PatchFormat> {
    let span_of = |index: usize| tokens.get(index).map_or(eof_span, |token| token.span);

    if !tokens.get(0).map_or(false, |token| token.is_ident("using")) {
        return Err(error!(
            message("Expected \"using\" clause to set the patch format."),
            primary(span_of(0), "expected \"using\""),
            note("scripts must begin with a line like: using boom"),
        ));
    }
    let (span, label) = match tokens.get(1) {
        Some(token) if token.kind == TokenKind::Ident => match token.text.parse::<PatchFormat>() {
            Ok(format) => return Ok(format),
            Err(_) => (token.span, "unknown format"),
        },
        _ => (span_of(1), "expected a format name"),
    };
    let mut e = PatchFormat::unknown_format_error();
    for diagnostic in &mut e.diagnostics {
        diagnostic.labels.push(Label::primary(span.file_id, span).with_message(label));
    }
    Err(e)
}

/// Keywords that begin a top-level entry.  Error recovery resynchronizes on these.
const ENTRY_KEYWORDS: &[&str] = &["strings", "ammo", "sound", "state", "pars", "thing", "weapon", "misc"];

/// Parser state.  The methods are spread over the submodules by the kind of entry they read.
pub(crate) struct Parser {
    tokens: Vec<Sp<OwnedToken>>,
    pos: usize,
    eof_span: Span,
    ctx: PatchContext,
    warnings: CompileError,
}

impl Parser {
    fn parse_entries(&mut self) -> CompileError {
        let mut errors = CompileError::new_empty();
        while !self.at_end() {
            let start = self.pos;
            if let Err(e) = self.parse_entry() {
                errors.append(e);
                self.recover(start);
            }
        }
        errors
    }

    fn parse_entry(&mut self) -> PResult<()> {
        let keyword = match self.peek() {
            Some(token) if token.kind == TokenKind::Ident => token.text.to_ascii_lowercase(),
            Some(token) => return Err(self.error_here(format_args!("Unknown section or command \"{}\".", token.text))),
            None => return Ok(()),
        };
        match &keyword[..] {
            "strings" => self.parse_strings(),
            "ammo" => self.parse_ammo(),
            "sound" => self.parse_sound(),
            "state" => self.parse_state_entry(),
            "pars" => self.parse_pars(),
            "thing" => self.parse_thing_entry(),
            "weapon" => self.parse_weapon_entry(),
            "misc" => self.parse_misc(),
            _ => {
                let text = self.peek().map(|token| token.text.clone()).unwrap_or_default();
                Err(self.error_here(format_args!("Unknown section or command \"{}\".", text)))
            },
        }
    }

    /// Skip the rest of an entry that failed to parse.
    ///
    /// Scans from the start of the entry, stopping after the brace that closes its block, or at
    /// the next entry keyword found at brace depth zero.
    fn recover(&mut self, start: usize) {
        let error_pos = self.pos;
        let mut depth = 0i32;
        for index in start..self.tokens.len() {
            let token = &self.tokens[index];
            match token.kind {
                TokenKind::BraceOpen => depth += 1,
                TokenKind::BraceClose => {
                    depth -= 1;
                    if depth <= 0 {
                        self.pos = index + 1;
                        return;
                    }
                },
                TokenKind::Ident if depth == 0 && index > start && index >= error_pos => {
                    if ENTRY_KEYWORDS.iter().any(|&kw| token.is_ident(kw)) {
                        self.pos = index;
                        return;
                    }
                },
                _ => {},
            }
        }
        self.pos = self.tokens.len();
    }

    // =========================================================================
    // Token cursor

    fn peek(&self) -> Option<&Sp<OwnedToken>> { self.tokens.get(self.pos) }

    fn peek_nth(&self, n: usize) -> Option<&Sp<OwnedToken>> { self.tokens.get(self.pos + n) }

    fn at_end(&self) -> bool { self.pos >= self.tokens.len() }

    /// Span of the current token, or the end of input.
    fn span_here(&self) -> Span {
        self.peek().map_or(self.eof_span, |token| token.span)
    }

    /// Span of the most recently consumed token.
    fn prev_span(&self) -> Span {
        match self.pos {
            0 => self.eof_span,
            pos => self.tokens.get(pos - 1).map_or(self.eof_span, |token| token.span),
        }
    }

    fn bump(&mut self) -> Option<Sp<OwnedToken>> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn at_kind(&self, kind: TokenKind) -> bool {
        self.peek().map_or(false, |token| token.kind == kind)
    }

    fn eat_kind(&mut self, kind: TokenKind) -> Option<Sp<OwnedToken>> {
        match self.at_kind(kind) {
            true => self.bump(),
            false => None,
        }
    }

    /// Case-insensitive keyword test.
    fn at_ident(&self, keyword: &str) -> bool {
        self.peek().map_or(false, |token| token.is_ident(keyword))
    }

    fn eat_ident(&mut self, keyword: &str) -> Option<Span> {
        match self.at_ident(keyword) {
            true => self.bump().map(|token| token.span),
            false => None,
        }
    }

    fn expect_ident(&mut self, keyword: &str, message: &str) -> PResult<Span> {
        match self.eat_ident(keyword) {
            Some(span) => Ok(span),
            None => Err(self.error_here(message)),
        }
    }

    fn eat_any_ident(&mut self) -> Option<Sp<String>> {
        self.eat_kind(TokenKind::Ident).map(|token| sp!(token.span => token.value.text))
    }

    fn at_string(&self) -> bool {
        self.at_kind(TokenKind::LitString) || self.at_kind(TokenKind::RawString)
    }

    /// Read a string literal, if there is one.
    fn eat_string(&mut self) -> PResult<Option<Sp<String>>> {
        if !self.at_string() {
            return Ok(None);
        }
        match self.bump() {
            Some(token) => Ok(Some(sp!(token.span => lexer::string_value(&token)?))),
            None => Ok(None),
        }
    }

    fn expect_kind(&mut self, kind: TokenKind, message: &str) -> PResult<Sp<OwnedToken>> {
        match self.eat_kind(kind) {
            Some(token) => Ok(token),
            None => Err(self.error_here(message)),
        }
    }

    /// Consume the `}` that closes a block, or complain with the given message.
    fn expect_block_end(&mut self, message: &str) -> PResult<()> {
        self.expect_kind(TokenKind::BraceClose, message).map(drop)
    }

    /// Whether the parser is at the `}` of a block.  Reaching the end of input inside of a block
    /// is reported with the given message.
    fn at_block_end(&self, message: &str) -> PResult<bool> {
        match self.peek() {
            None => Err(self.error_here(message)),
            Some(token) => Ok(token.kind == TokenKind::BraceClose),
        }
    }

    fn supports(&self, level: FeatureLevel) -> bool { self.ctx.supports(level) }

    fn warn(&mut self, warning: CompileError) {
        self.warnings.append(warning);
    }

    // =========================================================================
    // Errors

    /// An error labelled at the current token.
    fn error_here(&self, message: impl fmt::Display) -> CompileError {
        let label = match self.peek() {
            Some(token) => format!("found {}", describe_token(token)),
            None => "unexpected end of input".to_string(),
        };
        error!(message("{}", message), primary(self.span_here(), "{}", label))
    }

    fn error_at(&self, span: Span, message: impl fmt::Display) -> CompileError {
        error!(message("{}", message), primary(span, ""))
    }
}

fn describe_token(token: &OwnedToken) -> String {
    match token.kind {
        TokenKind::Ident => format!("'{}'", token.text),
        TokenKind::LitInt | TokenKind::LitFloat => format!("number {}", token.text),
        TokenKind::LitString | TokenKind::RawString => "a string".to_string(),
        kind => kind.descr().to_string(),
    }
}

/// Conversion of record and table errors into diagnostics at a span.
pub(crate) trait ErrorAt<T> {
    fn at(self, span: Span) -> PResult<T>;
}

impl<T, E: std::error::Error> ErrorAt<T> for Result<T, E> {
    fn at(self, span: Span) -> PResult<T> {
        self.map_err(|e| error!(message("{}", e), primary(span, "")))
    }
}
