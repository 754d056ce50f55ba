//! The DECOHack lexer.
//!
//! Tokens are produced per file by logos, and then detached from the file's text as
//! [`OwnedToken`]s so that the include preprocessor can splice several files into one stream.

use crate::error::CompileError;
use crate::pos::{FileId, BytePos, SourceStr, Sp, Span};

define_token_enum! {
    #[derive(logos::Logos, Clone, Copy, Debug, PartialEq)]
    pub enum Token<'a> {
        #[token(",")] Comma,
        #[token(":")] Colon,
        #[token("(")] ParenOpen,
        #[token(")")] ParenClose,
        #[token("{")] BraceOpen,
        #[token("}")] BraceClose,
        #[token(".")] Dot,
        #[token("+")] Plus,
        #[token("-")] Minus,
        #[token("|")] Pipe,

        #[regex(r##""([^"\\]|\\.)*""##)] LitString(&'a str),
        #[regex(r##"`[^`]*`"##)] RawString(&'a str),
        #[regex(r##"[0-9]+\.[0-9]+"##)] LitFloat(&'a str),
        #[regex(r##"[0-9]+|0[xX][0-9a-fA-F]+"##)] LitInt(&'a str),
        #[regex(r##"[a-zA-Z_\[\]\\][a-zA-Z0-9_\[\]\\]*"##)] Ident(&'a str),
        #[regex(r##"#[^\r\n]*"##)] Directive(&'a str),

        #[error]
        #[regex(r##"\s+"##, logos::skip)] // whitespace
        #[regex(r##"//[^\n\r]*"##, logos::skip)] // line comment
        #[regex(r##"/\*([^*]|\**[^*/])*\*+/"##, logos::skip)] // block comment
        #[regex(r##"/\*([^*]|\*+[^*/])*\*?"##)] // unclosed block comment
        #[regex(r##""([^"\\]|\\.)*"##)] // unclosed string
        #[regex(r##"`[^`]*"##)] // unclosed raw string
        #[doc(hidden)]
        /// Implementation detail. Basically, [`logos`] requires an error variant.
        /// [`Lexer`] never actually produces this variant, returning `Result::Err` instead.
        Error,
    }
}

pub type Lexer<'input> = GenericLexer<'input, Token<'input>>;

/// A token detached from the source text it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedToken {
    pub kind: TokenKind,
    pub text: String,
}

impl OwnedToken {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        OwnedToken { kind, text: text.into() }
    }

    pub fn is_ident(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Ident && self.text.eq_ignore_ascii_case(keyword)
    }
}

pub struct GenericLexer<'input, Tok>
where
    Tok: logos::Logos<'input>,
{
    file_id: FileId,
    /// Starting offset of the input source relative to the beginning of the file.
    /// This should be added to byte positions derived from logos.
    initial_offset: usize,
    imp: logos::Lexer<'input, Tok>,
}

impl<'input, Tok: logos::Logos<'input, Source=str>> GenericLexer<'input, Tok> {
    pub fn new(input: SourceStr<'input>) -> GenericLexer<'input, Tok>
    where
        <Tok as logos::Logos<'input>>::Extras: Default
    {
        GenericLexer {
            file_id: input.span().file_id,
            initial_offset: input.span().start.into(),
            imp: logos::Lexer::new(input.str),
        }
    }
}

impl<'input, Tok: logos::Logos<'input>> GenericLexer<'input, Tok> {
    fn location_from_logos_offset(&self, logos_offset: u32) -> Location {
        (self.file_id, BytePos(self.initial_offset as u32 + logos_offset))
    }
}

/// A single point in the source code, as produced by the lexer.
pub type Location = (FileId, BytePos);

impl<'a, Tok: logos::Logos<'a, Source=str> + PartialEq> Iterator for GenericLexer<'a, Tok> {
    type Item = Result<(Location, Tok, Location), CompileError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.imp.next().map(|token| {
            let range = self.imp.span();
            let start = self.location_from_logos_offset(range.start as _);
            let end = self.location_from_logos_offset(range.end as _);
            if token == Tok::ERROR {
                let span = Span::from_locs(start, end);
                let slice = self.imp.slice();
                if slice.starts_with("/*") {
                    Err(error!(
                        message("unterminated block comment"),
                        primary(span.start_span(), "comment starts here"),
                    ))
                } else if slice.starts_with('"') || slice.starts_with('`') {
                    Err(error!(
                        message("unterminated string"),
                        primary(span.start_span(), "string starts here"),
                    ))
                } else {
                    Err(error!(
                        message("invalid token"),
                        primary(span, "invalid token"),
                    ))
                }
            } else {
                Ok((start, token, end))
            }
        })
    }
}

/// Lex a full file into owned tokens.  Lexical errors are fatal.
pub fn tokenize(source: SourceStr<'_>) -> Result<Vec<Sp<OwnedToken>>, CompileError> {
    Lexer::new(source)
        .map(|res| res.map(|(start, tok, end)| {
            sp!(Span::from_locs(start, end) => OwnedToken::new(tok.kind(), tok.as_str()))
        }))
        .collect()
}

/// Get the contents of a string literal, processing escapes in `"..."` strings.
pub fn string_value(token: &Sp<OwnedToken>) -> Result<String, CompileError> {
    let text = &token.text[..];
    match token.kind {
        TokenKind::RawString => Ok(text[1..text.len() - 1].to_string()),
        TokenKind::LitString => unescape(&text[1..text.len() - 1]).map_err(|bad| error!(
            message("invalid escape sequence: \\{}", bad),
            primary(token, "in this string"),
        )),
        _ => unreachable!("string_value called on {:?}", token.kind),
    }
}

/// On failure, returns the text of the bad escape (without the backslash).
fn unescape(text: &str) -> Result<String, String> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let escape = chars.next().ok_or_else(String::new)?;
        match escape {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            '0' => out.push('\0'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            '\\' | '"' | '\'' => out.push(escape),
            'x' | 'u' => {
                let digit_count = if escape == 'x' { 2 } else { 4 };
                let digits = chars.by_ref().take(digit_count).collect::<String>();
                let value = match digits.len() == digit_count {
                    true => u32::from_str_radix(&digits, 16).ok().and_then(std::char::from_u32),
                    false => None,
                };
                out.push(value.ok_or_else(|| format!("{}{}", escape, digits))?);
            },
            other => return Err(other.to_string()),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(s: &str) -> Vec<(BytePos, Token<'_>, BytePos)> {
        GenericLexer::<Token<'_>>::new(SourceStr::new_null(s.as_ref()))
            .map(|res| res.unwrap())
            .map(|(start, tok, end)| (start.1, tok, end.1))
            .collect::<Vec<_>>()
    }

    fn lex_error(s: &str) -> String {
        GenericLexer::<Token<'_>>::new(SourceStr::new_null(s.as_ref()))
            .find_map(|res| res.err())
            .unwrap()
            .messages()[0]
            .to_string()
    }

    #[test]
    fn state_line() {
        let p = BytePos;
        assert_eq!(
            tokenize("TROO AB 10 A_Look"),
            vec![
                (p(0), Token::Ident("TROO"), p(4)),
                (p(5), Token::Ident("AB"), p(7)),
                (p(8), Token::LitInt("10"), p(10)),
                (p(11), Token::Ident("A_Look"), p(17)),
            ],
        );
    }

    #[test]
    fn frame_letters_beyond_z() {
        let p = BytePos;
        assert_eq!(tokenize(r"Z[\]"), vec![(p(0), Token::Ident(r"Z[\]"), p(4))]);
    }

    #[test]
    fn numbers() {
        let p = BytePos;
        assert_eq!(tokenize("0x1F"), vec![(p(0), Token::LitInt("0x1F"), p(4))]);
        assert_eq!(tokenize("1.5"), vec![(p(0), Token::LitFloat("1.5"), p(3))]);
        assert_eq!(tokenize("-3"), vec![(p(0), Token::Minus, p(1)), (p(1), Token::LitInt("3"), p(2))]);
        assert_eq!(tokenize("goto L+2"), vec![
            (p(0), Token::Ident("goto"), p(4)),
            (p(5), Token::Ident("L"), p(6)),
            (p(6), Token::Plus, p(7)),
            (p(7), Token::LitInt("2"), p(8)),
        ]);
    }

    #[test]
    fn comments_and_whitespace() {
        let p = BytePos;
        assert_eq!(
            tokenize("  \r\n  /* lol */ // \n\n\n 32"),
            vec![(p(23), Token::LitInt("32"), p(25))],
        );
        assert_eq!(
            tokenize("1 /* lol **/ 2 /** //lol */ 3"), vec![
                (p(0), Token::LitInt("1"), p(1)),
                (p(13), Token::LitInt("2"), p(14)),
                (p(28), Token::LitInt("3"), p(29)),
            ],
        );
    }

    #[test]
    fn strings() {
        let p = BytePos;
        assert_eq!(tokenize(r#""a \"b\"""#), vec![(p(0), Token::LitString(r#""a \"b\"""#), p(9))]);
        assert_eq!(tokenize("`C:\\raw`"), vec![(p(0), Token::RawString("`C:\\raw`"), p(8))]);
    }

    #[test]
    fn directives() {
        let p = BytePos;
        assert_eq!(
            tokenize("#include \"a.dh\"\nmisc"),
            vec![
                (p(0), Token::Directive("#include \"a.dh\""), p(15)),
                (p(16), Token::Ident("misc"), p(20)),
            ],
        );
    }

    #[test]
    fn unterminated() {
        assert_eq!(lex_error("strings { \"abc"), "unterminated string");
        assert_eq!(lex_error("/* never closed"), "unterminated block comment");
        assert_eq!(lex_error("`raw"), "unterminated string");
        assert_eq!(lex_error("thing 1 @"), "invalid token");
    }

    #[test]
    fn escapes() {
        let value = |s: &str| unescape(s);
        assert_eq!(value(r"a\nb\t\\"), Ok("a\nb\t\\".to_string()));
        assert_eq!(value(r"\x41\u00e9"), Ok("A\u{e9}".to_string()));
        assert_eq!(value(r#"\"quoted\""#), Ok("\"quoted\"".to_string()));
        assert_eq!(value(r"\q"), Err("q".to_string()));
        assert_eq!(value(r"\xZ"), Err("xZ".to_string()));
    }

    #[test]
    fn owned_tokens() {
        let tokens = super::tokenize(SourceStr::new_null("thing 1 \"Imp\"")).unwrap();
        assert_eq!(tokens.len(), 3);
        assert!(tokens[0].is_ident("THING"));
        assert_eq!(tokens[2].kind, TokenKind::LitString);
        assert_eq!(string_value(&tokens[2]).unwrap(), "Imp");
    }
}
