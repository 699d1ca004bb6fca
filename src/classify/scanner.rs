//! Hand-written selector scanner.
//!
//! Splits selector text at top level only: commas and combinators inside
//! `()`, `[]`, quoted strings, or behind a backslash escape are part of the
//! surrounding token, never structural.

/// Tracks nesting state while scanning selector text left to right.
#[derive(Debug, Default)]
struct Scanner {
    paren_depth: usize,
    bracket_depth: usize,
    quote: Option<char>,
    escaped: bool,
}

impl Scanner {
    fn new() -> Self {
        Self::default()
    }

    /// Whether the next character sits outside any parens, brackets, quotes,
    /// and escape sequence.
    fn at_top_level(&self) -> bool {
        self.paren_depth == 0 && self.bracket_depth == 0 && self.quote.is_none() && !self.escaped
    }

    /// Consume one character, updating nesting state.
    fn advance(&mut self, ch: char) {
        if self.escaped {
            self.escaped = false;
            return;
        }
        if let Some(q) = self.quote {
            match ch {
                '\\' => self.escaped = true,
                c if c == q => self.quote = None,
                _ => {}
            }
            return;
        }
        match ch {
            '\\' => self.escaped = true,
            '\'' | '"' => self.quote = Some(ch),
            '(' => self.paren_depth += 1,
            ')' => self.paren_depth = self.paren_depth.saturating_sub(1),
            '[' => self.bracket_depth += 1,
            ']' => self.bracket_depth = self.bracket_depth.saturating_sub(1),
            _ => {}
        }
    }
}

/// Whether every paren, bracket, and quote in the selector is closed.
pub(crate) fn is_balanced(selector: &str) -> bool {
    let mut scanner = Scanner::new();
    for ch in selector.chars() {
        scanner.advance(ch);
    }
    scanner.at_top_level()
}

/// Split a selector list at top-level commas.
///
/// Always returns at least one slice; slices are untrimmed and may be empty
/// (`"a, , b"` yields three alternatives).
pub(crate) fn split_alternatives(selector: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut scanner = Scanner::new();
    let mut start = 0;

    for (i, ch) in selector.char_indices() {
        if ch == ',' && scanner.at_top_level() {
            parts.push(&selector[start..i]);
            start = i + 1;
        } else {
            scanner.advance(ch);
        }
    }
    parts.push(&selector[start..]);
    parts
}

/// Extract the rightmost compound chunk of a single alternative.
///
/// Chunks are separated by top-level whitespace and the combinators `>`,
/// `+`, `~`. Returns the empty string for an empty or whitespace-only
/// alternative.
pub(crate) fn key_chunk(alternative: &str) -> &str {
    let mut scanner = Scanner::new();
    let mut start: Option<usize> = None;
    let mut last = "";

    for (i, ch) in alternative.char_indices() {
        let separator =
            scanner.at_top_level() && (ch.is_whitespace() || matches!(ch, '>' | '+' | '~'));
        if separator {
            if let Some(s) = start.take() {
                last = &alternative[s..i];
            }
        } else {
            if start.is_none() {
                start = Some(i);
            }
            scanner.advance(ch);
        }
    }
    if let Some(s) = start {
        last = &alternative[s..];
    }
    last
}
