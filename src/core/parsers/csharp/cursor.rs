/// Character cursor over a borrowed source buffer.
///
/// Positions are byte offsets into the source, always on a char boundary,
/// so slices taken between two positions are valid `&str`.
pub(super) struct Cursor<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            line: 1,
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// 1-based line of the next character.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.src[start..end]
    }

    pub fn first(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn second(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Length of the run of `c` starting at the cursor.
    pub fn run_len(&self, c: char) -> usize {
        self.rest().chars().take_while(|&ch| ch == c).count()
    }

    pub fn bump(&mut self) -> Option<char> {
        let c = self.first()?;
        self.pos += c.len_utf8();
        // CRLF counts once, at the LF.
        if is_newline(c) && !(c == '\r' && self.first() == Some('\n')) {
            self.line += 1;
        }
        Some(c)
    }

    pub fn bump_n(&mut self, n: usize) {
        for _ in 0..n {
            if self.bump().is_none() {
                break;
            }
        }
    }

    /// Consume up to (not including) the next line terminator.
    pub fn skip_line(&mut self) {
        while let Some(c) = self.first() {
            if is_newline(c) {
                break;
            }
            self.bump();
        }
    }
}

/// C# line terminators.
pub(super) fn is_newline(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{0085}' | '\u{2028}' | '\u{2029}')
}
