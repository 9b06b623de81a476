//! Line classifier for Quill source text.
//!
//! Quill is line-oriented: every directive occupies exactly one line and is
//! identified by its first non-whitespace character. The public entry point
//! is [`lines`], which lazily yields the candidate directive lines of a
//! source, skipping blank lines and `//` comments while keeping the original
//! 1-based line numbers.

use std::fmt;

use crate::span::Span;

/// How a directive reacts to a line that does not match its grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// A malformed line is reported as a parse error.
    Strict,
    /// A malformed line is dropped without a diagnostic.
    Lenient,
}

/// The directive symbols of the Quill language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// `^ name value`
    Limit,
    /// `# "..."`
    Title,
    /// `! "..."`
    Claim,
    /// `+ value | "..."`
    Evidence,
    /// `> "..."`
    Insight,
    /// `? "..."`
    Context,
    /// `* "..."`
    Credential,
    /// `@ "..." | url | "..."`
    Source,
}

impl Symbol {
    /// Returns the symbol introduced by `ch`, if any.
    pub fn from_char(ch: char) -> Option<Self> {
        Some(match ch {
            '^' => Symbol::Limit,
            '#' => Symbol::Title,
            '!' => Symbol::Claim,
            '+' => Symbol::Evidence,
            '>' => Symbol::Insight,
            '?' => Symbol::Context,
            '*' => Symbol::Credential,
            '@' => Symbol::Source,
            _ => return None,
        })
    }

    pub fn as_char(&self) -> char {
        match self {
            Symbol::Limit => '^',
            Symbol::Title => '#',
            Symbol::Claim => '!',
            Symbol::Evidence => '+',
            Symbol::Insight => '>',
            Symbol::Context => '?',
            Symbol::Credential => '*',
            Symbol::Source => '@',
        }
    }

    /// Returns the field name the directive populates.
    pub fn name(&self) -> &'static str {
        match self {
            Symbol::Limit => "limit",
            Symbol::Title => "title",
            Symbol::Claim => "claim",
            Symbol::Evidence => "evidence",
            Symbol::Insight => "insight",
            Symbol::Context => "context",
            Symbol::Credential => "credential",
            Symbol::Source => "source",
        }
    }

    pub fn tier(&self) -> Tier {
        match self {
            Symbol::Title | Symbol::Claim | Symbol::Evidence | Symbol::Insight | Symbol::Source => {
                Tier::Strict
            }
            Symbol::Limit | Symbol::Context | Symbol::Credential => Tier::Lenient,
        }
    }

    /// Returns an example line showing the directive's grammar.
    pub fn template(&self) -> &'static str {
        match self {
            Symbol::Limit => "^ total 500",
            Symbol::Title => "# \"Your title\"",
            Symbol::Claim => "! \"Your main claim\"",
            Symbol::Evidence => "+ 42% | \"what the number means\"",
            Symbol::Insight => "> \"Your insight\"",
            Symbol::Context => "? \"Background for the reader\"",
            Symbol::Credential => "* \"Why you can speak to this\"",
            Symbol::Source => "@ \"Source title\" | https://example.com | \"optional credibility\"",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Classification of a single trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    Directive(Symbol),
    /// A non-blank line starting with a character that is not a directive symbol.
    Unrecognized(char),
}

/// Classify a line by its first non-whitespace character.
pub fn classify(text: &str) -> LineKind {
    let text = text.trim();
    if text.is_empty() {
        return LineKind::Blank;
    }
    if text.starts_with("//") {
        return LineKind::Comment;
    }

    let first = text.chars().next().unwrap_or_default();
    Symbol::from_char(first).map_or(LineKind::Unrecognized(first), LineKind::Directive)
}

/// A logical source line that may carry a directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'src> {
    number: usize,
    text: &'src str,
    span: Span,
    kind: LineKind,
}

impl<'src> Line<'src> {
    /// Returns the 1-based physical line number.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Returns the line with surrounding whitespace removed.
    pub fn text(&self) -> &'src str {
        self.text
    }

    /// Returns the byte span of [`Line::text`] in the source.
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }
}

/// Lazy iterator over the candidate directive lines of a source.
///
/// Cloning the iterator yields an independent cursor, so a sequence can be
/// restarted from any point.
#[derive(Debug, Clone)]
pub struct Lines<'src> {
    source: &'src str,
    offset: usize,
    number: usize,
}

impl<'src> Iterator for Lines<'src> {
    type Item = Line<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.offset < self.source.len() {
            let rest = &self.source[self.offset..];
            let (raw, advance) = match rest.find('\n') {
                Some(newline) => (&rest[..newline], newline + 1),
                None => (rest, rest.len()),
            };
            let line_start = self.offset;
            self.offset += advance;
            self.number += 1;

            let raw = raw.strip_suffix('\r').unwrap_or(raw);
            let text = raw.trim();
            let start = line_start + (raw.len() - raw.trim_start().len());

            match classify(text) {
                LineKind::Blank | LineKind::Comment => continue,
                kind => {
                    return Some(Line {
                        number: self.number,
                        text,
                        span: Span::new(start..start + text.len()),
                        kind,
                    });
                }
            }
        }
        None
    }
}

/// Returns the candidate directive lines of `source`.
pub fn lines(source: &str) -> Lines<'_> {
    Lines {
        source,
        offset: 0,
        number: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify(""), LineKind::Blank);
        assert_eq!(classify("   \t "), LineKind::Blank);
        assert_eq!(classify("  // a note"), LineKind::Comment);
        assert_eq!(classify("# \"Title\""), LineKind::Directive(Symbol::Title));
        assert_eq!(classify("  @ \"S\" | x"), LineKind::Directive(Symbol::Source));
        assert_eq!(classify("hello"), LineKind::Unrecognized('h'));
        assert_eq!(classify("/ not a comment"), LineKind::Unrecognized('/'));
    }

    #[test]
    fn test_symbol_round_trip() {
        for ch in ['^', '#', '!', '+', '>', '?', '*', '@'] {
            let symbol = Symbol::from_char(ch).expect("directive symbol");
            assert_eq!(symbol.as_char(), ch);
            assert_eq!(classify(symbol.template()), LineKind::Directive(symbol));
        }
        assert_eq!(Symbol::from_char('$'), None);
    }

    #[test]
    fn test_tiers() {
        let strict: Vec<_> = [
            Symbol::Limit,
            Symbol::Title,
            Symbol::Claim,
            Symbol::Evidence,
            Symbol::Insight,
            Symbol::Context,
            Symbol::Credential,
            Symbol::Source,
        ]
        .into_iter()
        .filter(|symbol| symbol.tier() == Tier::Strict)
        .map(|symbol| symbol.as_char())
        .collect();

        assert_eq!(strict, vec!['#', '!', '+', '>', '@']);
    }

    #[test]
    fn test_lines_keep_physical_numbers() {
        let source = "// header\n\n# \"Title\"\n   \n  ! \"Claim\"  \n";
        let collected: Vec<_> = lines(source).collect();

        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0].number(), 3);
        assert_eq!(collected[0].text(), "# \"Title\"");
        assert_eq!(collected[1].number(), 5);
        assert_eq!(collected[1].text(), "! \"Claim\"");
        assert_eq!(&source[collected[1].span().range()], "! \"Claim\"");
    }

    #[test]
    fn test_lines_handle_crlf() {
        let source = "# \"A\"\r\n> \"B\"\r\n";
        let collected: Vec<_> = lines(source).collect();

        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0].text(), "# \"A\"");
        assert_eq!(collected[1].number(), 2);
        assert_eq!(collected[1].text(), "> \"B\"");
    }

    #[test]
    fn test_lines_are_restartable() {
        let source = "# \"A\"\n! \"B\"\n> \"C\"";
        let mut iter = lines(source);
        iter.next();

        let rest: Vec<_> = iter.clone().map(|line| line.number()).collect();
        let again: Vec<_> = iter.map(|line| line.number()).collect();

        assert_eq!(rest, vec![2, 3]);
        assert_eq!(rest, again);
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(lines("").count(), 0);
        assert_eq!(lines("\n\n// only comments\n").count(), 0);
    }

    #[test]
    fn test_unrecognized_lines_are_yielded() {
        let collected: Vec<_> = lines("plain text\n# \"T\"").collect();

        assert_eq!(collected[0].kind(), LineKind::Unrecognized('p'));
        assert_eq!(collected[1].kind(), LineKind::Directive(Symbol::Title));
    }
}
