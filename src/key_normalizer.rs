use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::{Map, Value};
use std::path::PathBuf;

// @module: Key normalization for localization file content

// @const: Quoted key/value pair regex, key containing at least one dot
static KEY_VALUE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""([^"]*\.[^"]*)"\s*:\s*"([^"]*)""#).unwrap()
});

// @struct: Single key rewrite performed during a normalization pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRename {
    // @field: Key text as found in the input
    pub old_key: String,

    // @field: Key text after dot replacement
    pub new_key: String,
}

/// Outcome of normalizing one localization file
#[derive(Debug, Clone)]
pub struct FileReport {
    /// Path of the processed file
    pub path: PathBuf,

    /// Keys rewritten in this file, in match order
    pub renames: Vec<KeyRename>,
}

/// Aggregated outcome of a full run over a directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files read, normalized and written back
    pub files_processed: usize,

    /// Files that failed to read, parse or write
    pub files_failed: usize,

    /// Total keys rewritten across all processed files
    pub keys_renamed: usize,
}

/// Replace every dot with an underscore in each quoted key that is followed
/// by a quoted value, leaving the value text untouched.
///
/// Matching is shape-based, not format-aware: a key or value segment never
/// spans a double quote, and escaped quotes are not interpreted. Matches are
/// evaluated against the input buffer in a single pass; replacement output
/// is never re-scanned. Each matched span is rebuilt as `"key": "value"`
/// with the canonical single-space separator.
///
/// Returns the rewritten buffer together with the list of key renames in
/// match order. A buffer with no dotted keys comes back unchanged, which
/// makes the pass idempotent.
pub fn normalize_content(content: &str) -> (String, Vec<KeyRename>) {
    let mut renames = Vec::new();

    let new_content = KEY_VALUE_REGEX.replace_all(content, |caps: &Captures| {
        let old_key = &caps[1];
        let value = &caps[2];
        let new_key = old_key.replace('.', "_");

        renames.push(KeyRename {
            old_key: old_key.to_string(),
            new_key: new_key.clone(),
        });

        format!("\"{}\": \"{}\"", new_key, value)
    });

    (new_content.into_owned(), renames)
}

/// Parse the content as JSON, rename every object key containing a dot
/// (recursing through nested objects and arrays) and re-serialize
/// pretty-printed.
///
/// This is the opt-in alternative to [`normalize_content`]: it survives
/// escaped quotes inside values but does not preserve the input's
/// whitespace or key ordering. Key uniqueness after renaming is not
/// checked; a rename landing on an existing key replaces it.
pub fn normalize_structured(content: &str) -> Result<(String, Vec<KeyRename>)> {
    let mut value: Value = serde_json::from_str(content)
        .context("Content is not valid JSON")?;

    let mut renames = Vec::new();
    normalize_json_value(&mut value, &mut renames);

    let mut output = serde_json::to_string_pretty(&value)
        .context("Failed to serialize normalized JSON")?;
    output.push('\n');

    Ok((output, renames))
}

// @recurses: Objects and arrays; scalars are left as-is
fn normalize_json_value(value: &mut Value, renames: &mut Vec<KeyRename>) {
    match value {
        Value::Object(map) => normalize_object(map, renames),
        Value::Array(items) => {
            for item in items.iter_mut() {
                normalize_json_value(item, renames);
            }
        }
        _ => {}
    }
}

fn normalize_object(map: &mut Map<String, Value>, renames: &mut Vec<KeyRename>) {
    let dotted_keys: Vec<String> = map
        .keys()
        .filter(|key| key.contains('.'))
        .cloned()
        .collect();

    for old_key in dotted_keys {
        if let Some(entry) = map.remove(&old_key) {
            let new_key = old_key.replace('.', "_");
            renames.push(KeyRename {
                old_key,
                new_key: new_key.clone(),
            });
            map.insert(new_key, entry);
        }
    }

    for child in map.values_mut() {
        normalize_json_value(child, renames);
    }
}
