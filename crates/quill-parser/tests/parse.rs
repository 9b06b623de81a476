use quill_core::limits::{LimitKey, Limits};
use quill_core::rules::StyleRules;
use quill_parser::{Validator, parse, validate};

const MINIMAL: &str = r#"
# "Title"
! "Claim"
+ 10% | "improvement"
> "Insight"
@ "Source" | https://example.com
"#;

fn error_messages(source: &str) -> Vec<String> {
    let parsed = parse(source);
    assert!(!parsed.has_errors(), "unexpected parse errors: {:?}", parsed.errors());
    validate(parsed.document())
        .errors()
        .iter()
        .map(|diag| diag.message().to_string())
        .collect()
}

#[test]
fn test_minimal_post_is_valid() {
    assert!(error_messages(MINIMAL).is_empty());
}

#[test]
fn test_each_missing_field_is_reported_alone() {
    let cases = [
        ("# \"Title\"", "Missing # (title)"),
        ("! \"Claim\"", "Missing ! (claim)"),
        ("+ 10% | \"improvement\"", "Missing + (evidence)"),
        ("> \"Insight\"", "Missing > (insight)"),
        ("@ \"Source\" | https://example.com", "Missing @ (source)"),
    ];

    for (line, expected) in cases {
        let source = MINIMAL.replace(line, "");
        assert_eq!(error_messages(&source), vec![expected], "removed: {line}");
    }
}

#[test]
fn test_six_evidence_items() {
    let extra = "+ 1% | \"more\"\n".repeat(5);
    let source = format!("{MINIMAL}{extra}");

    assert_eq!(
        error_messages(&source),
        vec!["Evidence limited to 5 items (found 6)"]
    );
}

#[test]
fn test_game_changer_in_claim_fails() {
    let source = MINIMAL.replace("\"Claim\"", "\"A real game-changer\"");

    assert_eq!(
        error_messages(&source),
        vec!["Banned phrase: \"game-changer\""]
    );
}

#[test]
fn test_game_changer_in_source_and_credential_passes() {
    let source = MINIMAL.replace(
        "@ \"Source\" | https://example.com",
        "* \"Author of a game-changer\"\n@ \"The game-changer\" | https://example.com | \"game-changer\"",
    );

    assert!(error_messages(&source).is_empty());
}

#[test]
fn test_question_title() {
    let source = MINIMAL.replace("\"Title\"", "\"Is this a game changer?\"");

    assert_eq!(
        error_messages(&source),
        vec![
            "Banned phrase: \"game changer\"",
            "Title must not end with a question mark"
        ]
    );
}

#[test]
fn test_configured_defaults_then_directive_override() {
    let source = MINIMAL.replace("\"Title\"", "\"Twelve chars\"");
    let parsed = parse(&source);

    let mut defaults = Limits::default();
    defaults.set(LimitKey::Title, 10);
    let validator = Validator::new(defaults, StyleRules::standard());
    assert_eq!(validator.validate(parsed.document()).errors().len(), 1);

    let parsed = parse(&format!("^ title 12\n{source}"));
    assert!(validator.validate(parsed.document()).is_valid());
}
