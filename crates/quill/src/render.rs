//! Plain-text rendering of validated documents.
//!
//! The output is a sequence of blocks separated by blank lines:
//!
//! ```text
//! Title.
//!
//! Context, verbatim.
//!
//! Claim.
//!
//! Results:
//! - 40% lower p99 latency
//! - 3x throughput per core
//!
//! Insight.
//!
//! [Credential]
//!
//! Source: Source title
//! [Credibility]
//! example.com/path
//! ```
//!
//! Context, credential and credibility appear only when present.

use log::debug;

use quill_core::document::Document;

/// Returns `text` followed by a period.
fn sentence(text: &str) -> String {
    format!("{text}.")
}

/// Render a document into its canonical text.
///
/// The document is expected to have passed validation. Rendering never
/// fails; absent required fields render as empty text. The result has no
/// trailing newline and is identical for identical documents.
pub fn generate(document: &Document) -> String {
    let mut blocks: Vec<String> = Vec::new();

    blocks.push(sentence(document.title().unwrap_or_default()));

    if let Some(context) = document.context() {
        blocks.push(context.to_string());
    }

    blocks.push(sentence(document.claim().unwrap_or_default()));

    if !document.evidence().is_empty() {
        let mut results = String::from("Results:");
        for item in document.evidence() {
            results.push_str("\n- ");
            results.push_str(&item.text());
        }
        blocks.push(results);
    }

    blocks.push(sentence(document.insight().unwrap_or_default()));

    if let Some(credential) = document.credential() {
        blocks.push(format!("[{credential}]"));
    }

    if let Some(source) = document.source() {
        let mut attribution = format!("Source: {}", source.title());
        if let Some(credibility) = source.credibility() {
            attribution.push_str(&format!("\n[{credibility}]"));
        }
        attribution.push('\n');
        attribution.push_str(source.display_url());
        blocks.push(attribution);
    }

    let output = blocks.join("\n\n");
    debug!(blocks = blocks.len(), chars = output.chars().count(); "Rendered post");
    output
}
