//! Lexical scanner for C# string literals.
//!
//! The scanner makes a single left-to-right pass over the source and is in
//! exactly one mode at a time. Each mode is a method on [`Scanner`]:
//!
//! | Mode                          | Entered by            | Method                |
//! |-------------------------------|-----------------------|-----------------------|
//! | Code                          | start, after any mode | `Iterator::next`      |
//! | LineComment                   | `//`                  | `Cursor::skip_line`   |
//! | BlockComment                  | `/*`                  | `skip_block_comment`  |
//! | Directive                     | `#` at line start     | `Cursor::skip_line`   |
//! | CharLiteral                   | `'`                   | `skip_char_literal`   |
//! | RegularString                 | `"`                   | `quoted`              |
//! | InterpolatedString            | `$"`                  | `quoted`              |
//! | VerbatimString                | `@"`                  | `verbatim`            |
//! | InterpolatedVerbatimString    | `$@"` / `@$"`         | `verbatim`            |
//! | RawString                     | `"""`                 | `raw`                 |
//! | InterpolatedRawString         | `$"""`, `$$"""`, ...  | `raw`                 |
//!
//! Malformed input never aborts a scan: unterminated strings yield whatever
//! was captured, and an unterminated comment swallows the rest of the input.

mod cursor;
mod escape;
mod raw;

use std::collections::VecDeque;
use std::iter::FusedIterator;

use cursor::{Cursor, is_newline};
use escape::{TextBuf, decode_escape};
use raw::normalize_raw;

/// Syntactic flavor of a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    /// `"..."`
    Regular,
    /// `@"..."`
    Verbatim,
    /// `$"..."`
    Interpolated,
    /// `$@"..."` or `@$"..."`
    InterpolatedVerbatim,
    /// `"""..."""`
    Raw,
    /// `$"""..."""`, `$$"""..."""`, ...
    InterpolatedRaw,
}

/// A string literal found in source code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    /// Text between the delimiters, decoded according to `kind`.
    pub value: String,
    pub kind: LiteralKind,
    /// 1-based line of the opening delimiter.
    pub line: usize,
}

/// Deepest chain of literals nested inside interpolation holes that is
/// scanned as literals. Openers past it are copied through as hole text.
const MAX_HOLE_NESTING: usize = 256;

/// Extract the values of all string literals in `source`, in source order.
pub fn extract(source: &str) -> Vec<String> {
    Scanner::new(source).map(|literal| literal.value).collect()
}

/// Opening delimiter recognized at the cursor.
#[derive(Debug, Clone, Copy)]
struct Opener {
    kind: LiteralKind,
    /// Number of `$`/`@` markers before the first quote.
    prefix: usize,
    quotes: usize,
    dollars: usize,
}

/// Lazy iterator over the string literals of a source buffer.
///
/// Literals nested inside interpolation holes are yielded right after the
/// literal that contains them.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    pending: VecDeque<Literal>,
    line_start: bool,
    /// Number of holes the cursor is currently inside.
    nesting: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        let source = source.strip_prefix('\u{FEFF}').unwrap_or(source);
        Self {
            cursor: Cursor::new(source),
            pending: VecDeque::new(),
            line_start: true,
            nesting: 0,
        }
    }

    fn opener(&self) -> Option<Opener> {
        let rest = self.cursor.rest();
        if rest.starts_with("$@\"") || rest.starts_with("@$\"") {
            return Some(Opener {
                kind: LiteralKind::InterpolatedVerbatim,
                prefix: 2,
                quotes: 1,
                dollars: 1,
            });
        }
        if rest.starts_with("@\"") {
            return Some(Opener {
                kind: LiteralKind::Verbatim,
                prefix: 1,
                quotes: 1,
                dollars: 0,
            });
        }

        let dollars = rest.bytes().take_while(|&b| b == b'$').count();
        let quotes = rest[dollars..].bytes().take_while(|&b| b == b'"').count();
        let (kind, quotes) = match (dollars, quotes) {
            (_, 0) => return None,
            (0, q) if q >= 3 => (LiteralKind::Raw, q),
            (0, _) => (LiteralKind::Regular, 1),
            (_, q) if q >= 3 => (LiteralKind::InterpolatedRaw, q),
            (1, _) => (LiteralKind::Interpolated, 1),
            _ => return None,
        };
        Some(Opener {
            kind,
            prefix: dollars,
            quotes,
            dollars,
        })
    }

    fn literal(&mut self, opener: Opener, nested: &mut Vec<Literal>) -> Literal {
        let line = self.cursor.line();
        self.cursor.bump_n(opener.prefix);
        let value = match opener.kind {
            LiteralKind::Regular => self.quoted(false, nested),
            LiteralKind::Interpolated => self.quoted(true, nested),
            LiteralKind::Verbatim => self.verbatim(false, nested),
            LiteralKind::InterpolatedVerbatim => self.verbatim(true, nested),
            LiteralKind::Raw | LiteralKind::InterpolatedRaw => {
                self.raw(opener.quotes, opener.dollars, nested)
            }
        };
        Literal {
            value,
            kind: opener.kind,
            line,
        }
    }

    /// Regular and interpolated strings: escapes decoded, no raw newlines.
    fn quoted(&mut self, interpolated: bool, nested: &mut Vec<Literal>) -> String {
        self.cursor.bump();
        let mut buf = TextBuf::default();
        while let Some(c) = self.cursor.first() {
            match c {
                '"' => {
                    self.cursor.bump();
                    break;
                }
                '\\' => decode_escape(&mut self.cursor, &mut buf),
                '{' | '}' if interpolated => self.brace(c, false, &mut buf, nested),
                c if is_newline(c) => break,
                c => {
                    self.cursor.bump();
                    buf.push(c);
                }
            }
        }
        buf.finish()
    }

    /// Verbatim strings: raw text, `""` is a quote, newlines allowed.
    fn verbatim(&mut self, interpolated: bool, nested: &mut Vec<Literal>) -> String {
        self.cursor.bump();
        let mut buf = TextBuf::default();
        while let Some(c) = self.cursor.first() {
            match c {
                '"' => {
                    self.cursor.bump();
                    if self.cursor.first() != Some('"') {
                        break;
                    }
                    self.cursor.bump();
                    buf.push('"');
                }
                '{' | '}' if interpolated => self.brace(c, true, &mut buf, nested),
                c => {
                    self.cursor.bump();
                    buf.push(c);
                }
            }
        }
        buf.finish()
    }

    /// Raw strings: closed by a run of `quotes` quotes, holes opened by a run
    /// of `dollars` braces.
    fn raw(&mut self, quotes: usize, dollars: usize, nested: &mut Vec<Literal>) -> String {
        self.cursor.bump_n(quotes);
        let mut content = String::new();
        while let Some(c) = self.cursor.first() {
            match c {
                '"' => {
                    let run = self.cursor.run_len('"');
                    self.cursor.bump_n(run);
                    if run >= quotes {
                        content.extend(std::iter::repeat_n('"', run - quotes));
                        break;
                    }
                    content.extend(std::iter::repeat_n('"', run));
                }
                '{' if dollars > 0 => {
                    let run = self.cursor.run_len('{');
                    if run < dollars {
                        self.cursor.bump_n(run);
                        content.extend(std::iter::repeat_n('{', run));
                        continue;
                    }
                    self.cursor.bump_n(run - dollars);
                    content.extend(std::iter::repeat_n('{', run - dollars));
                    content.push_str(self.hole(dollars, true, nested));
                }
                c => {
                    self.cursor.bump();
                    content.push(c);
                }
            }
        }
        normalize_raw(&content)
    }

    /// Brace in the text part of a (non-raw) interpolated string.
    fn brace(&mut self, c: char, multiline: bool, buf: &mut TextBuf, nested: &mut Vec<Literal>) {
        if self.cursor.second() == Some(c) {
            self.cursor.bump_n(2);
            buf.push(c);
        } else if c == '{' {
            buf.push_str(self.hole(1, multiline, nested));
        } else {
            // Stray `}`.
            self.cursor.bump();
            buf.push(c);
        }
    }

    /// Copy an interpolation hole through untouched, opening braces included.
    ///
    /// String literals inside the hole are scanned so their quotes and braces
    /// don't end the hole early, and are pushed onto `nested`. Past
    /// `MAX_HOLE_NESTING` levels they are plain hole text.
    fn hole(&mut self, braces: usize, multiline: bool, nested: &mut Vec<Literal>) -> &'a str {
        let start = self.cursor.pos();
        self.cursor.bump_n(braces);
        let mut depth = 0usize;
        while let Some(c) = self.cursor.first() {
            match c {
                '{' => {
                    depth += 1;
                    self.cursor.bump();
                }
                '}' if depth > 0 => {
                    depth -= 1;
                    self.cursor.bump();
                }
                '}' => {
                    let run = self.cursor.run_len('}');
                    if run >= braces {
                        self.cursor.bump_n(braces);
                        break;
                    }
                    self.cursor.bump_n(run);
                }
                '\'' => self.skip_char_literal(),
                '/' if self.cursor.second() == Some('*') => self.skip_block_comment(),
                c if is_newline(c) && !multiline => break,
                _ => match self.opener().filter(|_| self.nesting < MAX_HOLE_NESTING) {
                    Some(opener) => {
                        self.nesting += 1;
                        let mut inner = Vec::new();
                        let literal = self.literal(opener, &mut inner);
                        self.nesting -= 1;
                        nested.push(literal);
                        nested.append(&mut inner);
                    }
                    None => {
                        self.cursor.bump();
                    }
                },
            }
        }
        self.cursor.slice(start, self.cursor.pos())
    }

    fn skip_block_comment(&mut self) {
        self.cursor.bump_n(2);
        while !self.cursor.starts_with("*/") {
            if self.cursor.bump().is_none() {
                return;
            }
        }
        self.cursor.bump_n(2);
    }

    fn skip_char_literal(&mut self) {
        self.cursor.bump();
        while let Some(c) = self.cursor.first() {
            if is_newline(c) {
                return;
            }
            self.cursor.bump();
            match c {
                '\'' => return,
                '\\' if self.cursor.first().is_some_and(|next| !is_newline(next)) => {
                    self.cursor.bump();
                }
                _ => {}
            }
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Literal;

    fn next(&mut self) -> Option<Literal> {
        if let Some(literal) = self.pending.pop_front() {
            return Some(literal);
        }

        while let Some(c) = self.cursor.first() {
            if is_newline(c) {
                self.line_start = true;
                self.cursor.bump();
                continue;
            }
            if c.is_whitespace() {
                self.cursor.bump();
                continue;
            }

            let line_start = std::mem::replace(&mut self.line_start, false);
            match c {
                '/' if self.cursor.second() == Some('/') => self.cursor.skip_line(),
                '/' if self.cursor.second() == Some('*') => self.skip_block_comment(),
                '#' if line_start => self.cursor.skip_line(),
                '\'' => self.skip_char_literal(),
                _ => match self.opener() {
                    Some(opener) => {
                        let mut nested = Vec::new();
                        let literal = self.literal(opener, &mut nested);
                        self.pending.extend(nested);
                        return Some(literal);
                    }
                    None => {
                        self.cursor.bump();
                    }
                },
            }
        }
        None
    }
}

impl FusedIterator for Scanner<'_> {}
