//! The preprocessor: includes, token macros and conditional blocks.
//!
//! Every file is lexed on its own and registered in [`Files`] under its own name, so that
//! diagnostics point into the file that actually contains the problem.  The tokens of an included
//! file are spliced into the stream in place of the directive.
//!
//! `#define NAME tokens...` makes every later identifier `NAME` (in any case) stand for the tokens
//! after it.  Definitions carry over into included files and back out of them.  `#ifdef`,
//! `#ifndef`, `#else` and `#endif` keep or drop whole lines, and must balance within each file.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::CompileError;
use crate::io::Fs;
use crate::pos::{FileId, Files, SourceStr, Sp, Span};
use super::lexer::{self, OwnedToken, TokenKind};

/// Nested includes deeper than this are assumed to be a cycle.
pub const MAX_INCLUDE_DEPTH: usize = 64;

/// The result of preprocessing a root file.
#[derive(Debug)]
pub struct Preprocessed {
    pub tokens: Vec<Sp<OwnedToken>>,
    /// The text of the root file with every include directive replaced by the text it includes,
    /// and with conditional blocks resolved.  Macro definitions and uses are kept as written.
    pub expanded_source: String,
    pub warnings: CompileError,
    /// A zero-width span at the end of the root file.
    pub eof_span: Span,
}

/// A source file that has already been registered in [`Files`].
#[derive(Debug, Clone, Copy)]
pub struct SourceFile<'a> {
    pub file_id: FileId,
    pub text: &'a str,
    /// Where the file lives on disk.  Includes in a file without a path resolve against the
    /// working directory.
    pub path: Option<&'a Path>,
}

pub fn preprocess(files: &Files, fs: &Fs, root: SourceFile<'_>) -> Result<Preprocessed, CompileError> {
    let mut pp = Preprocessor {
        files,
        fs,
        errors: CompileError::new_empty(),
        warnings: CompileError::new_empty(),
        chain: vec![],
        depth_exceeded: false,
        defines: HashMap::new(),
    };
    let root_name = files.name_of(root.file_id).unwrap_or_else(|| "<input>".to_string());
    let (tokens, expanded_source) = pp.expand(root, root_name);

    let eof_span = Span::new(root.file_id, root.text.len() as u32, root.text.len() as u32);
    let Preprocessor { errors, warnings, .. } = pp;
    errors.into_result_with(|| Preprocessed { tokens, expanded_source, warnings, eof_span })
}

struct Preprocessor<'a> {
    files: &'a Files,
    fs: &'a Fs,
    errors: CompileError,
    warnings: CompileError,
    /// Display names of the files currently being expanded, outermost first.
    chain: Vec<String>,
    /// Set after the first depth error, so that a cycle is only reported once.
    depth_exceeded: bool,
    /// Macro bodies, keyed by lowercase name.
    defines: HashMap<String, Vec<OwnedToken>>,
}

/// What a directive line asks for.
enum Directive {
    Include(String),
    SpecialInclude(String),
    Define { name: String, body: String },
    Undefine(String),
    /// `#ifdef` (`true`) or `#ifndef` (`false`).
    IfDefined { name: String, wanted: bool },
    Else,
    EndIf,
}

/// An open `#ifdef` or `#ifndef` block.
struct Condition {
    active: bool,
    seen_else: bool,
    opened_at: Span,
}

impl Preprocessor<'_> {
    fn expand(&mut self, file: SourceFile<'_>, display_name: String) -> (Vec<Sp<OwnedToken>>, String) {
        let tokens = match lexer::tokenize(SourceStr::from_full_source(file.file_id, file.text)) {
            Ok(tokens) => tokens,
            Err(e) => {
                self.errors.append(e);
                return (vec![], file.text.to_string());
            },
        };

        self.chain.push(display_name);
        let mut out_tokens = Vec::with_capacity(tokens.len());
        let mut out_text = String::with_capacity(file.text.len());
        let mut copied_up_to = 0;
        let mut conditions: Vec<Condition> = vec![];

        for token in tokens {
            let active = conditions.iter().all(|c| c.active);
            if token.kind != TokenKind::Directive {
                if active {
                    self.substitute(token, &mut out_tokens, &mut vec![]);
                }
                continue;
            }

            let start: usize = token.span.start.into();
            let end: usize = token.span.end.into();
            if active {
                out_text.push_str(&file.text[copied_up_to..start]);
            }
            copied_up_to = end;

            let directive = match parse_directive(&token) {
                Ok(directive) => directive,
                Err(e) => {
                    if active {
                        self.errors.append(e);
                    }
                    continue;
                },
            };
            match directive {
                Directive::IfDefined { name, wanted } => {
                    let defined = self.defines.contains_key(&name.to_ascii_lowercase());
                    conditions.push(Condition { active: defined == wanted, seen_else: false, opened_at: token.span });
                },
                Directive::Else => match conditions.last_mut() {
                    Some(condition) if !condition.seen_else => {
                        condition.active = !condition.active;
                        condition.seen_else = true;
                    },
                    Some(condition) => self.errors.append(error!(
                        message("#else after #else"),
                        primary(token, "second #else"),
                        secondary(condition.opened_at, "in this block"),
                    )),
                    None => self.errors.append(error!(
                        message("#else without #ifdef"),
                        primary(token, "nothing to continue"),
                    )),
                },
                Directive::EndIf => {
                    if conditions.pop().is_none() {
                        self.errors.append(error!(
                            message("#endif without #ifdef"),
                            primary(token, "nothing to close"),
                        ));
                    }
                },
                // everything else is skipped along with the rest of an inactive block
                _ if !active => {},
                Directive::Define { name, body } => {
                    // definitions stay in the expanded text, which is read by this preprocessor again
                    out_text.push_str(&file.text[start..end]);
                    match lexer::tokenize(SourceStr::new_null(&body)) {
                        Ok(body) => {
                            let body = body.into_iter().map(|token| token.value).collect();
                            self.defines.insert(name.to_ascii_lowercase(), body);
                        },
                        Err(e) => self.errors.append(error!(
                            message("malformed #define of '{}'", name),
                            primary(token, "{}", e.messages().join("; ")),
                        )),
                    }
                },
                Directive::Undefine(name) => {
                    out_text.push_str(&file.text[start..end]);
                    self.defines.remove(&name.to_ascii_lowercase());
                },
                Directive::Include(path) => {
                    if let Some((tokens, text)) = self.include(&token, &path, file.path) {
                        out_tokens.extend(tokens);
                        out_text.push_str(&text);
                    }
                },
                Directive::SpecialInclude(name) => {
                    self.warnings.append(warning!(
                        message("special include <{}> is not supported", name),
                        primary(token, "directive ignored"),
                    ));
                },
            }
        }
        for condition in conditions {
            self.errors.append(error!(
                message("unterminated conditional block"),
                primary(condition.opened_at, "no matching #endif in this file"),
            ));
        }
        out_text.push_str(&file.text[copied_up_to..]);
        self.chain.pop();
        (out_tokens, out_text)
    }

    /// Push a token, replacing a macro name by its body.  A macro is not expanded again inside
    /// its own body.  Replacement tokens take the span of the name they replace.
    fn substitute(&self, token: Sp<OwnedToken>, out: &mut Vec<Sp<OwnedToken>>, expanding: &mut Vec<String>) {
        if token.kind == TokenKind::Ident {
            let key = token.text.to_ascii_lowercase();
            if !expanding.contains(&key) {
                if let Some(body) = self.defines.get(&key) {
                    expanding.push(key);
                    for replacement in body {
                        self.substitute(sp!(token.span => replacement.clone()), out, expanding);
                    }
                    expanding.pop();
                    return;
                }
            }
        }
        out.push(token);
    }

    fn include(&mut self, directive: &Sp<OwnedToken>, path: &str, including_path: Option<&Path>) -> Option<(Vec<Sp<OwnedToken>>, String)> {
        if self.depth_exceeded {
            return None;
        }
        if self.chain.len() >= MAX_INCLUDE_DEPTH {
            self.depth_exceeded = true;
            self.errors.append(error!(
                message("includes are nested more than {} levels deep", MAX_INCLUDE_DEPTH),
                primary(directive, "while including '{}'", path),
                note("include chain: {}", describe_chain(&self.chain)),
            ));
            return None;
        }

        let resolved = resolve_include(path, including_path);
        let bytes = match self.fs.read_source(&resolved) {
            Ok(bytes) => bytes,
            Err(e) => {
                self.errors.append(error!(
                    message("could not include '{}'", path),
                    primary(directive, "included here"),
                    note("{}", e.messages().join("; ")),
                ));
                return None;
            },
        };

        let display_name = self.fs.display_path(&resolved);
        let (file_id, text) = match self.files.add(&display_name, &bytes) {
            Ok(added) => added,
            Err(e) => {
                self.errors.append(e);
                return None;
            },
        };
        let included = SourceFile { file_id, text: &text, path: Some(&resolved) };
        Some(self.expand(included, display_name))
    }
}

fn parse_directive(token: &Sp<OwnedToken>) -> Result<Directive, CompileError> {
    let body = token.text.trim_start_matches('#').trim();
    let (name, rest) = split_word(body);
    let macro_name = |directive: &str| match split_word(rest) {
        (word, _) if is_macro_name(word) => Ok(word.to_string()),
        _ => Err(error!(
            message("expected macro name after #{}", directive),
            primary(token, "macro names are identifiers"),
        )),
    };

    match &name.to_ascii_lowercase()[..] {
        "include" => {},
        "define" => {
            let name = macro_name("define")?;
            let body = split_word(rest).1.to_string();
            return Ok(Directive::Define { name, body });
        },
        "undefine" => return Ok(Directive::Undefine(macro_name("undefine")?)),
        "ifdef" => return Ok(Directive::IfDefined { name: macro_name("ifdef")?, wanted: true }),
        "ifndef" => return Ok(Directive::IfDefined { name: macro_name("ifndef")?, wanted: false }),
        "else" => return Ok(Directive::Else),
        "endif" => return Ok(Directive::EndIf),
        _ => return Err(error!(
            message("unknown preprocessor directive '#{}'", name),
            primary(token, "unknown directive"),
        )),
    }

    let quoted = |open: char, close: char| {
        rest.strip_prefix(open).and_then(|s| s.strip_suffix(close)).filter(|s| !s.is_empty())
    };
    if let Some(path) = quoted('"', '"') {
        Ok(Directive::Include(path.to_string()))
    } else if let Some(name) = quoted('<', '>') {
        Ok(Directive::SpecialInclude(name.to_string()))
    } else {
        Err(error!(
            message("malformed include directive"),
            primary(token, "expected a quoted path"),
            note("write it as: #include \"path/to/file.dh\""),
        ))
    }
}

/// The first word of a line and the trimmed remainder.
fn split_word(text: &str) -> (&str, &str) {
    match text.find(char::is_whitespace) {
        Some(index) => (&text[..index], text[index..].trim()),
        None => (text, ""),
    }
}

fn is_macro_name(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next().map_or(false, |c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Relative paths are relative to the directory of the including file.
fn resolve_include(path: &str, including_path: Option<&Path>) -> PathBuf {
    let path = Path::new(path);
    match including_path.and_then(Path::parent) {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    }
}

fn describe_chain(chain: &[String]) -> String {
    // a cycle repeats itself; showing the first lap is enough
    let mut shown = vec![];
    for name in chain {
        let repeat = shown.contains(&name);
        shown.push(name);
        if repeat {
            break;
        }
    }
    let mut out = shown.iter().map(|s| &s[..]).collect::<Vec<_>>().join(" -> ");
    if shown.len() < chain.len() {
        out.push_str(" -> ...");
    }
    out
}
