//! Integration tests for the highlighting pipeline
//!
//! These tests verify the library surface end to end:
//! - HTML escaping runs before tokenization and escapes each character once
//! - Keys are distinguished from strings by the adjacent colon
//! - Quoted literals stay strings; bare literals get their own categories
//! - Structural characters stay outside spans, byte for byte

use json_highlight::{
    escape_html, highlight_text, highlight_text_with, highlight_value, HighlightOptions, TokenKind,
    TokenStats,
};
use regex::Regex;

/// A small bucket-policy document exercising all the string-ish cases:
/// keys, values with embedded colons, and a `*` principal.
const POLICY_DOCUMENT: &str = r#"{
  "Version": "2012-10-17",
  "Statement": [
    {
      "Sid": "PublicReadGetObject",
      "Effect": "Allow",
      "Principal": "*",
      "Action": "s3:GetObject",
      "Resource": "arn:aws:s3:::example-bucket/*"
    }
  ]
}"#;

/// Test that a realistic policy document is tokenized into the expected
/// categories with the expected counts.
#[test]
fn test_policy_document_highlighting() {
    let options = HighlightOptions::default();
    let stats = TokenStats::new();
    let html = highlight_text_with(POLICY_DOCUMENT, &options, &stats);

    // Keys keep their trailing colon inside the span
    assert!(
        html.contains(r#"<span class="json-key">"Version":</span> <span class="json-string">"2012-10-17"</span>"#),
        "Key and value spans should sit side by side"
    );

    // Colons inside quoted values must not promote them to keys
    assert!(html.contains(r#"<span class="json-string">"s3:GetObject"</span>"#));
    assert!(html.contains(r#"<span class="json-string">"arn:aws:s3:::example-bucket/*"</span>"#));

    assert_eq!(stats.get_count(TokenKind::Key), 7, "Seven object keys");
    assert_eq!(stats.get_count(TokenKind::String), 6, "Six string values");
    assert_eq!(stats.get_count(TokenKind::Number), 0);
    assert_eq!(stats.get_count(TokenKind::Boolean), 0);
    assert_eq!(stats.get_count(TokenKind::Null), 0);
    assert_eq!(stats.total(), 13);
}

/// Test that markup characters are escaped before tokenization, so escaped
/// text lands inside the value's span instead of breaking the output.
#[test]
fn test_escaping_runs_before_tokenization() {
    let html = highlight_text(r#"{"html": "<b>5 & 6</b>"}"#);
    assert!(
        html.contains(r#"<span class="json-string">"&lt;b&gt;5 &amp; 6&lt;/b&gt;"</span>"#),
        "Escaped markup should stay inside one string span, got: {}",
        html
    );
    // The digits inside the quoted value must not be tokenized separately
    assert!(!html.contains("json-number"));
}

#[test]
fn test_each_character_escaped_exactly_once() {
    assert_eq!(escape_html("&"), "&amp;");
    assert_eq!(escape_html("<>"), "&lt;&gt;");
    // No entity awareness: pre-escaped text is escaped again
    assert_eq!(escape_html("&amp;"), "&amp;amp;");
    assert_eq!(escape_html("&lt;"), "&amp;lt;");
}

#[test]
fn test_key_requires_adjacent_colon() {
    // Array members have no colon, so they stay strings
    let html = highlight_text(r#"["alpha", "beta"]"#);
    assert!(html.contains(r#"<span class="json-string">"alpha"</span>"#));
    assert!(!html.contains("json-key"));

    // Whitespace between quote and colon still makes a key, and the
    // whitespace rides along inside the span
    let html = highlight_text(r#"{"a" : 1}"#);
    assert_eq!(
        html,
        r#"{<span class="json-key">"a" :</span> <span class="json-number">1</span>}"#
    );
}

#[test]
fn test_newline_before_colon_still_a_key() {
    let html = highlight_text("\"a\"\n: 1");
    assert_eq!(
        html,
        "<span class=\"json-key\">\"a\"\n:</span> <span class=\"json-number\">1</span>"
    );
}

/// Test that `true`, `false`, `null`, and digits inside quotes are plain
/// strings, not their bare-token categories.
#[test]
fn test_quoted_literals_are_strings() {
    let options = HighlightOptions::default();
    let stats = TokenStats::new();
    let html = highlight_text_with(
        r#"{"flag": "true", "missing": "null", "answer": "42"}"#,
        &options,
        &stats,
    );

    assert!(html.contains(r#"<span class="json-string">"true"</span>"#));
    assert!(html.contains(r#"<span class="json-string">"null"</span>"#));
    assert!(html.contains(r#"<span class="json-string">"42"</span>"#));
    assert_eq!(stats.get_count(TokenKind::Key), 3);
    assert_eq!(stats.get_count(TokenKind::String), 3);
    assert_eq!(stats.get_count(TokenKind::Boolean), 0);
    assert_eq!(stats.get_count(TokenKind::Null), 0);
    assert_eq!(stats.get_count(TokenKind::Number), 0);
}

#[test]
fn test_bare_literals_classified() {
    let html = highlight_text("[true, false, null]");
    assert_eq!(
        html,
        r#"[<span class="json-boolean">true</span>, <span class="json-boolean">false</span>, <span class="json-null">null</span>]"#
    );
}

#[test]
fn test_literal_words_need_word_boundaries() {
    // "untrue" and "truest" contain literal words without boundaries, so
    // nothing should be wrapped
    let text = "untrue truest nullable";
    assert_eq!(highlight_text(text), text);
}

/// Test the number forms the scanner accepts: sign, fraction, exponent.
#[test]
fn test_number_forms() {
    let options = HighlightOptions::default();
    let stats = TokenStats::new();
    let html = highlight_text_with("[0, -7, 3.25, 1e6, 2E-3, -0.5e+2]", &options, &stats);

    assert_eq!(stats.get_count(TokenKind::Number), 6);
    assert!(html.contains(r#"<span class="json-number">-0.5e+2</span>"#));
    assert!(html.contains(r#"<span class="json-number">2E-3</span>"#));

    // The scanner is deliberately liberal: a trailing dot still scans
    assert_eq!(
        highlight_text("6."),
        r#"<span class="json-number">6.</span>"#
    );
}

#[test]
fn test_escaped_quotes_stay_in_one_token() {
    let options = HighlightOptions::default();
    let stats = TokenStats::new();
    let html = highlight_text_with(r#"{"say": "a \"quoted\" word"}"#, &options, &stats);

    assert!(
        html.contains(r#"<span class="json-string">"a \"quoted\" word"</span>"#),
        "Escaped quotes must not split the string, got: {}",
        html
    );
    assert_eq!(stats.get_count(TokenKind::Key), 1);
    assert_eq!(stats.get_count(TokenKind::String), 1);
}

#[test]
fn test_unicode_escape_sequences_in_key_and_value() {
    // \uXXXX escapes ride inside a single token on both sides of the colon
    let html = highlight_text(r#"{"sn\u2603w": "\u0041BC"}"#);
    assert_eq!(
        html,
        r#"{<span class="json-key">"sn\u2603w":</span> <span class="json-string">"\u0041BC"</span>}"#
    );
}

#[test]
fn test_unicode_text_passes_through() {
    let html = highlight_text(r#"{"név": "Árvíztűrő 😀"}"#);
    assert!(html.contains(r#"<span class="json-key">"név":</span>"#));
    assert!(html.contains(r#"<span class="json-string">"Árvíztűrő 😀"</span>"#));
}

/// Test span order and exact wrapping on a minified document mixing all
/// three value families.
#[test]
fn test_mixed_document_span_order() {
    let html = highlight_text(r#"{"x":true,"y":null,"z":-1.5e10}"#);
    assert_eq!(
        html,
        r#"{<span class="json-key">"x":</span><span class="json-boolean">true</span>,<span class="json-key">"y":</span><span class="json-null">null</span>,<span class="json-key">"z":</span><span class="json-number">-1.5e10</span>}"#
    );
}

#[test]
fn test_structural_characters_stay_outside_spans() {
    let html = highlight_text(r#"{"a": [1, 2]}"#);
    assert_eq!(
        html,
        r#"{<span class="json-key">"a":</span> [<span class="json-number">1</span>, <span class="json-number">2</span>]}"#
    );
}

#[test]
fn test_empty_and_whitespace_input() {
    assert_eq!(highlight_text(""), "");
    assert_eq!(highlight_text("  \n\t "), "  \n\t ");
}

#[test]
fn test_plain_text_is_escaped_but_not_tokenized() {
    let html = highlight_text("three < four & five > two");
    assert_eq!(html, "three &lt; four &amp; five &gt; two");
}

/// Test that one stats instance accumulates counts across documents.
#[test]
fn test_stats_accumulate_across_documents() {
    let options = HighlightOptions::default();
    let stats = TokenStats::new();

    highlight_text_with(r#"{"a": 1}"#, &options, &stats);
    highlight_text_with("[true, null]", &options, &stats);

    assert_eq!(stats.get_count(TokenKind::Key), 1);
    assert_eq!(stats.get_count(TokenKind::Number), 1);
    assert_eq!(stats.get_count(TokenKind::Boolean), 1);
    assert_eq!(stats.get_count(TokenKind::Null), 1);
    assert_eq!(stats.total(), 4);
}

#[test]
fn test_custom_class_prefix_applies_to_every_category() {
    let options = HighlightOptions {
        class_prefix: "hl-".to_string(),
    };
    let stats = TokenStats::new();
    let html = highlight_text_with(
        r#"{"k": "v", "n": 1, "b": true, "z": null}"#,
        &options,
        &stats,
    );

    for class in ["hl-key", "hl-string", "hl-number", "hl-boolean", "hl-null"] {
        assert!(
            html.contains(&format!(r#"<span class="{}">"#, class)),
            "Expected class {} in output",
            class
        );
    }
    assert!(!html.contains("json-"));
}

/// Test that highlighting a parsed value pretty-prints it with two-space
/// indentation before scanning.
#[test]
fn test_highlight_value_pretty_prints() {
    let value = serde_json::json!({"a": {"b": 1}});
    let html = highlight_value(&value);
    let expected = "{\n  <span class=\"json-key\">\"a\":</span> {\n    <span class=\"json-key\">\"b\":</span> <span class=\"json-number\">1</span>\n  }\n}";
    assert_eq!(html, expected);
}

/// Test that parsed documents keep their key order through re-serialization.
#[test]
fn test_highlight_value_preserves_key_order() {
    let value: serde_json::Value =
        serde_json::from_str(r#"{"zebra": 1, "alpha": 2}"#).expect("valid JSON");
    let html = highlight_value(&value);

    let zebra = html.find(r#""zebra":"#).expect("zebra key in output");
    let alpha = html.find(r#""alpha":"#).expect("alpha key in output");
    assert!(
        zebra < alpha,
        "Document order must survive pretty-printing, got: {}",
        html
    );
}

/// Test that the output is exactly the escaped input plus span wrappers:
/// stripping the spans must reconstruct the escaped document.
#[test]
fn test_stripping_spans_reconstructs_escaped_input() {
    let span_tags = Regex::new(r"</?span[^>]*>").expect("valid pattern");

    for document in [
        POLICY_DOCUMENT,
        r#"{"a": [1, -2.5e3, true, null, "x <&> y"]}"#,
        "not json at all < 3",
    ] {
        let html = highlight_text(document);
        let stripped = span_tags.replace_all(&html, "");
        assert_eq!(
            stripped,
            escape_html(document),
            "Spans must wrap the escaped text without altering it"
        );
    }
}
