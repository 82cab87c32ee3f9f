//! Append-only editing of ARB resource files.
//!
//! ARB files are never reparsed or rewritten structurally. New entries are
//! spliced in front of the file's final closing brace under an explicit text
//! contract: the last non-whitespace character of the file must be `}`.
//! A file violating the contract is rejected, never silently corrupted.

use std::{fmt::Display, fs, path::Path};

use serde_json::json;

use crate::{error::Error, plural::Placeholder};

/// A single entry destined for append into an ARB resource file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArbEntry {
    /// A key/value translation entry, rendered `"key": "value"`.
    Value { key: String, value: String },

    /// Placeholder metadata for an existing key, rendered as a nested object
    /// under the `@`-prefixed key.
    PlaceholderMeta { key: String, placeholder: Placeholder },
}

impl ArbEntry {
    pub fn value(key: impl Into<String>, value: impl Into<String>) -> Self {
        ArbEntry::Value {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn placeholder_meta(key: impl Into<String>, placeholder: Placeholder) -> Self {
        ArbEntry::PlaceholderMeta {
            key: key.into(),
            placeholder,
        }
    }

    /// The key as it appears in the file: metadata keys carry the `@` prefix.
    pub fn rendered_key(&self) -> String {
        match self {
            ArbEntry::Value { key, .. } => key.clone(),
            ArbEntry::PlaceholderMeta { key, .. } => format!("@{}", key),
        }
    }
}

impl Display for ArbEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered = match self {
            ArbEntry::Value { value, .. } => {
                json!(value).to_string()
            }
            ArbEntry::PlaceholderMeta { placeholder, .. } => json!({
                "placeholders": {
                    &placeholder.name: { "type": &placeholder.kind }
                }
            })
            .to_string(),
        };
        let key = json!(self.rendered_key()).to_string();
        write!(f, "{}: {}", key, rendered)
    }
}

/// Checks the append contract on raw file content: non-empty, and the last
/// non-whitespace character is the mapping's closing brace.
pub fn validate_append_target(path: &Path, content: &str) -> Result<(), Error> {
    let trimmed = content.trim_end();
    if trimmed.is_empty() {
        return Err(Error::malformed_resource(
            path.display().to_string(),
            "file is empty",
        ));
    }
    if !trimmed.ends_with('}') {
        return Err(Error::malformed_resource(
            path.display().to_string(),
            "last non-whitespace character is not `}`",
        ));
    }
    Ok(())
}

/// Returns true if `content` already defines `key` at any nesting level.
///
/// This is a substring scan for `"key":`, consistent with the append path
/// never parsing the file.
pub fn contains_key(content: &str, key: &str) -> bool {
    let needle = format!("{}:", json!(key));
    content.contains(&needle)
}

/// Appends one entry to the ARB file at `path`.
///
/// Reads the whole file, verifies the append contract, rejects duplicate
/// keys, drops the final `}`, and writes back the truncated content followed
/// by `,\n    <entry>\n}\n`. An empty mapping (`{}`) gains its first entry
/// without the leading comma.
pub fn append_entry(path: &Path, entry: &ArbEntry) -> Result<(), Error> {
    let content = fs::read_to_string(path)?;
    validate_append_target(path, &content)?;

    let rendered_key = entry.rendered_key();
    if contains_key(&content, &rendered_key) {
        return Err(Error::KeyCollision {
            key: rendered_key,
            path: path.display().to_string(),
        });
    }

    let trimmed = content.trim_end();
    let body = trimmed[..trimmed.len() - 1].trim_end();
    let separator = if body.ends_with('{') { "" } else { "," };
    let updated = format!("{}{}\n    {}\n}}\n", body, separator, entry);
    fs::write(path, updated)?;
    Ok(())
}
