use super::cursor::{Cursor, is_newline};

/// Text accumulator that understands UTF-16 code units.
///
/// C# strings are UTF-16, so `\uD83D\uDE00` spells one scalar value across
/// two escapes. A high surrogate is held back until the next push decides
/// whether it pairs up; unpaired surrogates become U+FFFD.
#[derive(Debug, Default)]
pub(super) struct TextBuf {
    text: String,
    high_surrogate: Option<u16>,
}

impl TextBuf {
    pub fn push(&mut self, c: char) {
        self.flush_surrogate();
        self.text.push(c);
    }

    pub fn push_str(&mut self, s: &str) {
        self.flush_surrogate();
        self.text.push_str(s);
    }

    pub fn push_unit(&mut self, unit: u16) {
        match unit {
            0xD800..=0xDBFF => {
                self.flush_surrogate();
                self.high_surrogate = Some(unit);
            }
            0xDC00..=0xDFFF => match self.high_surrogate.take() {
                Some(high) => {
                    let scalar = 0x10000
                        + ((u32::from(high) - 0xD800) << 10)
                        + (u32::from(unit) - 0xDC00);
                    self.text
                        .push(char::from_u32(scalar).unwrap_or(char::REPLACEMENT_CHARACTER));
                }
                None => self.text.push(char::REPLACEMENT_CHARACTER),
            },
            _ => self.push(char::from_u32(u32::from(unit)).unwrap_or(char::REPLACEMENT_CHARACTER)),
        }
    }

    pub fn finish(mut self) -> String {
        self.flush_surrogate();
        self.text
    }

    fn flush_surrogate(&mut self) {
        if self.high_surrogate.take().is_some() {
            self.text.push(char::REPLACEMENT_CHARACTER);
        }
    }
}

/// Decode one backslash escape. The cursor must sit on the backslash.
///
/// Unknown or incomplete escapes are kept as written.
pub(super) fn decode_escape(cursor: &mut Cursor<'_>, buf: &mut TextBuf) {
    cursor.bump();
    let Some(c) = cursor.first().filter(|&c| !is_newline(c)) else {
        buf.push('\\');
        return;
    };
    cursor.bump();

    let decoded = match c {
        '\'' => '\'',
        '"' => '"',
        '\\' => '\\',
        '0' => '\0',
        'a' => '\u{07}',
        'b' => '\u{08}',
        'e' => '\u{1B}',
        'f' => '\u{0C}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\u{0B}',
        'u' => {
            match hex_prefix(cursor.rest(), 4) {
                (unit, 4) => {
                    cursor.bump_n(4);
                    buf.push_unit(unit as u16);
                }
                _ => push_verbatim(buf, c),
            }
            return;
        }
        'x' => {
            match hex_prefix(cursor.rest(), 4) {
                (unit, len) if len > 0 => {
                    cursor.bump_n(len);
                    buf.push_unit(unit as u16);
                }
                _ => push_verbatim(buf, c),
            }
            return;
        }
        'U' => {
            match hex_prefix(cursor.rest(), 8) {
                (scalar, 8) if char::from_u32(scalar).is_some() => {
                    cursor.bump_n(8);
                    buf.push(char::from_u32(scalar).unwrap_or(char::REPLACEMENT_CHARACTER));
                }
                _ => push_verbatim(buf, c),
            }
            return;
        }
        other => {
            push_verbatim(buf, other);
            return;
        }
    };
    buf.push(decoded);
}

fn push_verbatim(buf: &mut TextBuf, c: char) {
    buf.push('\\');
    buf.push(c);
}

/// Parse up to `max` leading hex digits, returning the value and digit count.
fn hex_prefix(s: &str, max: usize) -> (u32, usize) {
    let mut value = 0u32;
    let mut len = 0;
    for digit in s.chars().take(max).map_while(|c| c.to_digit(16)) {
        value = value * 16 + digit;
        len += 1;
    }
    (value, len)
}
