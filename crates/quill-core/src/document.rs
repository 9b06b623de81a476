//! The structured representation of a post.
//!
//! A [`Document`] is built incrementally by the parser, one directive at a
//! time, and then handed immutably to validation and rendering. Singular
//! fields keep the last value written; evidence items accumulate in order.

use indexmap::IndexMap;

use crate::limits::{LimitKey, Limits};

/// One supporting data point: a value and the context explaining it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evidence {
    value: String,
    context: String,
}

impl Evidence {
    pub fn new(value: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            context: context.into(),
        }
    }

    /// Returns the value segment, such as `42%`.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the context string describing the value.
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Returns the item as rendered: value and context separated by a space.
    pub fn text(&self) -> String {
        format!("{} {}", self.value, self.context)
    }
}

/// Where the post's evidence comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    title: String,
    url: String,
    credibility: Option<String>,
}

impl Source {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            credibility: None,
        }
    }

    /// Attaches a credibility note, such as `"Peer-reviewed"`.
    pub fn with_credibility(mut self, credibility: impl Into<String>) -> Self {
        self.credibility = Some(credibility.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn credibility(&self) -> Option<&str> {
        self.credibility.as_deref()
    }

    /// Returns the URL without its `http://`/`https://` scheme or leading `www.`.
    pub fn display_url(&self) -> &str {
        let url = self
            .url
            .strip_prefix("https://")
            .or_else(|| self.url.strip_prefix("http://"))
            .unwrap_or(&self.url);
        url.strip_prefix("www.").unwrap_or(url)
    }
}

/// A parsed post.
///
/// Every field is optional at this level: the parser produces partial
/// documents and the validator reports what is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    title: Option<String>,
    claim: Option<String>,
    evidence: Vec<Evidence>,
    insight: Option<String>,
    context: Option<String>,
    credential: Option<String>,
    source: Option<Source>,
    limits: IndexMap<LimitKey, usize>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn claim(&self) -> Option<&str> {
        self.claim.as_deref()
    }

    pub fn evidence(&self) -> &[Evidence] {
        &self.evidence
    }

    pub fn insight(&self) -> Option<&str> {
        self.insight.as_deref()
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    pub fn source(&self) -> Option<&Source> {
        self.source.as_ref()
    }

    /// Returns the limit overrides declared by this document, in first-seen order.
    pub fn limit_overrides(&self) -> &IndexMap<LimitKey, usize> {
        &self.limits
    }

    /// Returns `defaults` with this document's overrides applied.
    pub fn effective_limits(&self, defaults: &Limits) -> Limits {
        defaults.with_overrides(&self.limits)
    }

    /// Returns the prose-bearing text subject to style rules.
    ///
    /// Covers title, claim, insight, context and every evidence context, one
    /// per line. Credential and source fields are not included.
    pub fn prose(&self) -> String {
        [&self.title, &self.claim, &self.insight, &self.context]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .chain(self.evidence.iter().map(Evidence::context))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn set_claim(&mut self, claim: impl Into<String>) {
        self.claim = Some(claim.into());
    }

    pub fn push_evidence(&mut self, evidence: Evidence) {
        self.evidence.push(evidence);
    }

    pub fn set_insight(&mut self, insight: impl Into<String>) {
        self.insight = Some(insight.into());
    }

    pub fn set_context(&mut self, context: impl Into<String>) {
        self.context = Some(context.into());
    }

    pub fn set_credential(&mut self, credential: impl Into<String>) {
        self.credential = Some(credential.into());
    }

    pub fn set_source(&mut self, source: Source) {
        self.source = Some(source);
    }

    /// Records a limit override. A later override for the same key replaces
    /// the earlier value.
    pub fn set_limit(&mut self, key: LimitKey, value: usize) {
        self.limits.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_url_strips_scheme_and_www() {
        let cases = [
            ("https://example.com", "example.com"),
            ("http://www.example.com/a", "example.com/a"),
            ("www.example.com", "example.com"),
            ("arxiv.org/abs/1234", "arxiv.org/abs/1234"),
            ("ftp://example.com", "ftp://example.com"),
        ];

        for (url, expected) in cases {
            assert_eq!(Source::new("s", url).display_url(), expected, "url: {url}");
        }
    }

    #[test]
    fn test_prose_excludes_source_and_credential() {
        let mut doc = Document::new();
        doc.set_title("T");
        doc.set_claim("C");
        doc.push_evidence(Evidence::new("10%", "faster"));
        doc.set_insight("I");
        doc.set_credential("Cred");
        doc.set_source(Source::new("Src", "https://x.io").with_credibility("Peer"));

        assert_eq!(doc.prose(), "T\nC\nI\nfaster");
    }

    #[test]
    fn test_set_limit_overwrites() {
        let mut doc = Document::new();
        doc.set_limit(LimitKey::Total, 500);
        doc.set_limit(LimitKey::Title, 40);
        doc.set_limit(LimitKey::Total, 300);

        let limits = doc.effective_limits(&Limits::default());
        assert_eq!(limits.get(LimitKey::Total), 300);
        assert_eq!(limits.get(LimitKey::Title), 40);
        assert_eq!(doc.limit_overrides().len(), 2);
    }
}
