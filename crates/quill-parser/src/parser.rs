//! Directive parser for Quill source lines.
//!
//! Each line yielded by the [`lexer`](crate::lexer) is matched as a whole
//! against the sub-grammar of its directive symbol. Successful matches are
//! written into a [`Document`]; failures are reported or dropped according to
//! the directive's [`Tier`]. The public entry point is [`parse_document`].

use log::{debug, trace};
use winnow::{
    Parser as _,
    ascii::{digit1, space0, space1},
    combinator::{delimited, opt, preceded},
    error::ModalResult,
    token::{take_till, take_while},
};

use quill_core::{
    document::{Document, Evidence, Source},
    limits::LimitKey,
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    lexer::{self, Line, LineKind, Symbol, Tier},
};

type Input<'src> = &'src str;
type IResult<O> = ModalResult<O>;

/// A line that did not match the grammar of its directive.
#[derive(Debug)]
struct Malformed;

/// The outcome of parsing one source: a possibly partial document and the
/// syntax errors found along the way.
#[derive(Debug)]
pub struct Parsed {
    document: Document,
    errors: Vec<Diagnostic>,
}

impl Parsed {
    /// Returns the document built from every well-formed directive.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns the syntax errors in source order.
    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    /// Returns `true` if any directive failed to parse.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Splits the outcome into the document and the syntax errors.
    pub fn into_parts(self) -> (Document, Vec<Diagnostic>) {
        (self.document, self.errors)
    }

    /// Returns the document, or the syntax errors if there were any.
    pub fn into_result(self) -> Result<Document, ParseError> {
        if self.errors.is_empty() {
            Ok(self.document)
        } else {
            Err(ParseError::new(self.errors))
        }
    }
}

/// Parse a double-quoted string. There are no escapes: the string ends at
/// the first following `"`.
fn quoted<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    delimited('"', take_till(0.., '"'), '"').parse_next(input)
}

/// Match a whole `<symbol> "text"` line, as used by title, claim, insight,
/// context and credential directives.
fn text_field(line: &str, symbol: Symbol) -> Result<&str, Malformed> {
    preceded((symbol.as_char(), space0), quoted)
        .parse(line)
        .map_err(|_| Malformed)
}

/// Parse `^ name value`.
fn limit<'src>(input: &mut Input<'src>) -> IResult<(&'src str, usize)> {
    (
        preceded(
            ('^', space1),
            take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_'),
        ),
        preceded(space1, digit1.try_map(str::parse::<usize>)),
    )
        .parse_next(input)
}

/// Parse `+ value | "context"`.
fn evidence<'src>(input: &mut Input<'src>) -> IResult<(&'src str, &'src str)> {
    (
        preceded('+', take_till(1.., '|')),
        preceded(('|', space0), quoted),
    )
        .parse_next(input)
}

/// Parse a URL token: everything up to whitespace or a segment separator.
fn url<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    take_till(1.., |c: char| c.is_whitespace() || c == '|').parse_next(input)
}

/// Parse `@ "title" | url` with an optional `| "credibility"` segment.
fn source<'src>(input: &mut Input<'src>) -> IResult<(&'src str, &'src str, Option<&'src str>)> {
    (
        preceded(('@', space0), quoted),
        preceded((space0, '|', space0), url),
        opt(preceded((space0, '|', space0), quoted)),
    )
        .parse_next(input)
}

/// Match `line` against the grammar of `symbol` and write the result into
/// `document`.
fn apply(document: &mut Document, symbol: Symbol, line: &str) -> Result<(), Malformed> {
    match symbol {
        Symbol::Limit => {
            let (name, value) = limit
                .parse(line)
                .ok()
                .filter(|(_, value)| *value > 0)
                .ok_or(Malformed)?;
            match name.parse::<LimitKey>() {
                Ok(key) => document.set_limit(key, value),
                Err(err) => debug!(name, value; "Ignoring limit: {err}"),
            }
        }
        Symbol::Title => document.set_title(text_field(line, symbol)?),
        Symbol::Claim => document.set_claim(text_field(line, symbol)?),
        Symbol::Insight => document.set_insight(text_field(line, symbol)?),
        Symbol::Context => document.set_context(text_field(line, symbol)?),
        Symbol::Credential => document.set_credential(text_field(line, symbol)?),
        Symbol::Evidence => {
            let (value, context) = evidence.parse(line).map_err(|_| Malformed)?;
            let value = value.trim();
            if value.is_empty() {
                return Err(Malformed);
            }
            document.push_evidence(Evidence::new(value, context));
        }
        Symbol::Source => {
            let (title, url, credibility) = source.parse(line).map_err(|_| Malformed)?;
            let source = Source::new(title, url);
            document.set_source(match credibility {
                Some(credibility) => source.with_credibility(credibility),
                None => source,
            });
        }
    }
    Ok(())
}

/// Build the diagnostic for a strict directive that failed to parse.
fn invalid_directive(symbol: Symbol, line: &Line<'_>) -> Diagnostic {
    let code = match symbol {
        Symbol::Title => ErrorCode::E100,
        Symbol::Claim => ErrorCode::E101,
        Symbol::Evidence => ErrorCode::E102,
        Symbol::Insight => ErrorCode::E103,
        _ => ErrorCode::E104,
    };

    let diag = Diagnostic::error(format!(
        "Line {}: Invalid {}. Use {}",
        line.number(),
        symbol.name(),
        symbol.template()
    ))
    .with_code(code)
    .with_label(
        line.span(),
        format!("does not match the {} grammar", symbol.name()),
    );

    if line.text().contains('"') {
        diag
    } else {
        diag.with_help("text segments must be wrapped in double quotes")
    }
}

/// Parse Quill source into a document, collecting a diagnostic for every
/// malformed strict directive.
///
/// Malformed lenient directives (`^`, `?`, `*`) and lines with an
/// unrecognized leading symbol are skipped without a diagnostic.
pub fn parse_document(source: &str) -> Parsed {
    let mut document = Document::new();
    let mut collector = DiagnosticCollector::new();

    for line in lexer::lines(source) {
        let LineKind::Directive(symbol) = line.kind() else {
            debug!(line = line.number(); "Skipping unrecognized line");
            continue;
        };

        if apply(&mut document, symbol, line.text()).is_ok() {
            trace!(line = line.number(), symbol:%; "Applied directive");
            continue;
        }

        match symbol.tier() {
            Tier::Strict => collector.emit(invalid_directive(symbol, &line)),
            Tier::Lenient => {
                debug!(line = line.number(), symbol:%; "Dropping malformed directive")
            }
        }
    }

    let (errors, _) = collector.into_parts();
    Parsed { document, errors }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_stops_at_first_quote() {
        let mut input = "\"a b\" rest\"";
        assert_eq!(quoted(&mut input).unwrap(), "a b");
        assert_eq!(input, " rest\"");
    }

    #[test]
    fn test_text_field_preserves_inner_whitespace() {
        assert_eq!(
            text_field("#   \"  spaced   out \"", Symbol::Title).unwrap(),
            "  spaced   out "
        );
        assert_eq!(text_field("!\"tight\"", Symbol::Claim).unwrap(), "tight");
        assert!(text_field("# \"unterminated", Symbol::Title).is_err());
        assert!(text_field("# \"a\" trailing", Symbol::Title).is_err());
        assert!(text_field("# \"a\"", Symbol::Claim).is_err());
    }

    #[test]
    fn test_limit_grammar() {
        assert_eq!(limit.parse("^ total 500").unwrap(), ("total", 500));
        assert_eq!(limit.parse("^\tfoo_bar\t10").unwrap(), ("foo_bar", 10));
        assert!(limit.parse("^total 500").is_err());
        assert!(limit.parse("^ total").is_err());
        assert!(limit.parse("^ total -5").is_err());
        assert!(limit.parse("^ total 5x").is_err());
    }

    #[test]
    fn test_evidence_grammar() {
        assert_eq!(
            evidence.parse("+ 10% | \"improvement\"").unwrap(),
            (" 10% ", "improvement")
        );
        assert!(evidence.parse("+ 10% \"improvement\"").is_err());
        assert!(evidence.parse("+ 10% | improvement").is_err());
    }

    #[test]
    fn test_apply_blank_evidence_value_is_malformed() {
        let mut document = Document::new();

        assert!(apply(&mut document, Symbol::Evidence, "+   | \"no value\"").is_err());
        assert!(apply(&mut document, Symbol::Evidence, "+ 3x | \"faster\"").is_ok());
        assert_eq!(document.evidence(), &[Evidence::new("3x", "faster")]);
    }

    #[test]
    fn test_source_grammar() {
        assert_eq!(
            source.parse("@ \"Paper\" | https://arxiv.org/abs/1").unwrap(),
            ("Paper", "https://arxiv.org/abs/1", None)
        );
        assert_eq!(
            source
                .parse("@\"Paper\"|https://x.io|\"Peer-reviewed\"")
                .unwrap(),
            ("Paper", "https://x.io", Some("Peer-reviewed"))
        );
        assert!(source.parse("@ \"Paper\"").is_err());
        assert!(source.parse("@ Paper | https://x.io").is_err());
        assert!(source.parse("@ \"Paper\" | https://x.io | unquoted").is_err());
        assert!(source.parse("@ \"Paper\" | https://x.io extra").is_err());
    }

    #[test]
    fn test_apply_unknown_limit_is_ignored() {
        let mut document = Document::new();

        assert!(apply(&mut document, Symbol::Limit, "^ foo 10").is_ok());
        assert!(document.limit_overrides().is_empty());
    }

    #[test]
    fn test_apply_zero_limit_is_malformed() {
        let mut document = Document::new();

        assert!(apply(&mut document, Symbol::Limit, "^ total 0").is_err());
    }

    #[test]
    fn test_invalid_directive_message() {
        let source = "\n# Title without quotes";
        let line = lexer::lines(source).next().unwrap();
        let diag = invalid_directive(Symbol::Title, &line);

        assert_eq!(
            diag.message(),
            "Line 2: Invalid title. Use # \"Your title\""
        );
        assert_eq!(diag.code(), Some(ErrorCode::E100));
        assert_eq!(diag.label().map(|label| label.span()), Some(line.span()));
        assert!(diag.help().is_some());
    }
}
