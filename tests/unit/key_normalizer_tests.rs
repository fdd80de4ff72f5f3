/*!
 * Tests for the key normalization pass
 */

use keynorm::key_normalizer::{normalize_content, normalize_structured};

/// Test that a dotted key is rewritten with underscores
#[test]
fn test_normalize_content_withDottedKey_shouldReplaceDotsInKey() {
    let input = r#"{"menu.title": "Home"}"#;

    let (output, renames) = normalize_content(input);

    assert_eq!(output, r#"{"menu_title": "Home"}"#);
    assert_eq!(renames.len(), 1);
    assert_eq!(renames[0].old_key, "menu.title");
    assert_eq!(renames[0].new_key, "menu_title");
}

/// Test that dots inside a value segment are never mutated
#[test]
fn test_normalize_content_withDotsInValue_shouldLeaveValueUntouched() {
    let input = r#"{"menu.title": "Home", "footer": "a.b.c"}"#;

    let (output, renames) = normalize_content(input);

    assert_eq!(output, r#"{"menu_title": "Home", "footer": "a.b.c"}"#);
    assert_eq!(renames.len(), 1);
    assert_eq!(renames[0].old_key, "menu.title");
}

/// Test that content without dotted keys comes back unchanged
#[test]
fn test_normalize_content_withNoDottedKeys_shouldReturnInputUnchanged() {
    let input = r#"{"already_ok": "x"}"#;

    let (output, renames) = normalize_content(input);

    assert_eq!(output, input);
    assert!(renames.is_empty());
}

/// Test that running the pass twice yields the same result as running it once
#[test]
fn test_normalize_content_appliedTwice_shouldBeIdempotent() {
    let input = r#"{"menu.title": "Home", "menu.settings.label": "Settings"}"#;

    let (first_pass, first_renames) = normalize_content(input);
    let (second_pass, second_renames) = normalize_content(&first_pass);

    assert_eq!(second_pass, first_pass);
    assert_eq!(first_renames.len(), 2);
    assert!(second_renames.is_empty());
}

/// Test that every dot in a key is replaced, not just the first
#[test]
fn test_normalize_content_withMultipleDots_shouldReplaceEveryDot() {
    let input = r#""a.b.c.d": "v""#;

    let (output, renames) = normalize_content(input);

    assert_eq!(output, r#""a_b_c_d": "v""#);
    assert_eq!(renames[0].new_key, "a_b_c_d");
}

/// Test that extra whitespace around the colon collapses to the canonical separator
#[test]
fn test_normalize_content_withWhitespaceAroundColon_shouldCanonicalizeSeparator() {
    let input = "\"a.b\"  :  \"v\"";

    let (output, _renames) = normalize_content(input);

    assert_eq!(output, "\"a_b\": \"v\"");
}

/// Test that a key containing an escaped quote falls outside the matched shape
#[test]
fn test_normalize_content_withEscapedQuoteInKey_shouldLeaveContentUnchanged() {
    let input = r#"{"a\".b\"": "v"}"#;

    let (output, renames) = normalize_content(input);

    assert_eq!(output, input);
    assert!(renames.is_empty());
}

/// Test that pairs whose value is not a quoted segment are not matched in text mode
#[test]
fn test_normalize_content_withUnquotedValue_shouldLeaveContentUnchanged() {
    let input = r#"{"count.max": 5}"#;

    let (output, renames) = normalize_content(input);

    assert_eq!(output, input);
    assert!(renames.is_empty());
}

/// Test that the structured strategy renames nested keys recursively
#[test]
fn test_normalize_structured_withNestedKeys_shouldRenameRecursively() {
    let input = r#"{"menu.title": "Home", "nested": {"a.b": "v", "plain": 1}}"#;

    let (output, renames) = normalize_structured(input).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert!(value.get("menu_title").is_some());
    assert!(value.get("menu.title").is_none());
    assert_eq!(value["nested"]["a_b"], "v");
    assert_eq!(value["nested"]["plain"], 1);
    assert_eq!(renames.len(), 2);
}

/// Test that the structured strategy renames keys inside arrays of objects
#[test]
fn test_normalize_structured_withArrayOfObjects_shouldRenameElementKeys() {
    let input = r#"{"items": [{"x.y": "z"}, {"plain": "p"}]}"#;

    let (output, renames) = normalize_structured(input).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["items"][0]["x_y"], "z");
    assert_eq!(value["items"][1]["plain"], "p");
    assert_eq!(renames.len(), 1);
}

/// Test that the structured strategy preserves non-string values under renamed keys
#[test]
fn test_normalize_structured_withNonStringValues_shouldPreserveThem() {
    let input = r#"{"count.max": 5, "flag.on": true}"#;

    let (output, renames) = normalize_structured(input).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["count_max"], 5);
    assert_eq!(value["flag_on"], true);
    assert_eq!(renames.len(), 2);
}

/// Test that the structured strategy rejects content that is not JSON
#[test]
fn test_normalize_structured_withInvalidJson_shouldFail() {
    let result = normalize_structured("not json at all");

    assert!(result.is_err());
}

/// Test that the structured strategy handles escaped quotes the text mode cannot
#[test]
fn test_normalize_structured_withEscapedQuoteInValue_shouldRenameKey() {
    let input = r#"{"menu.title": "Home \"sweet\" home"}"#;

    let (output, renames) = normalize_structured(input).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["menu_title"], "Home \"sweet\" home");
    assert_eq!(renames.len(), 1);
}
