//! Text codec for the INI settings file.
//!
//! File format:
//! ```text
//! ; comment
//! [General]
//! linux/arduino_ide_path=/opt/arduino/arduino
//!
//! [linux]
//! tmp_dir_name=/tmp/visualino/
//! html_index="  padded value  "
//! ```
//!
//! A key `k` under `[s]` is the qualified key `s/k`.  Keys under `[General]`
//! (or before any section header) are taken verbatim, so a flat
//! `linux/arduino_ide_path=...` line is equivalent to the sectioned form.
//!
//! Values are trimmed.  A value wrapped in double quotes keeps its inner
//! whitespace and has `\"`, `\\`, `\n`, `\t`, `\r` decoded.  Unquoted values
//! only collapse `\\` to a single backslash, which is how QSettings writes
//! Windows paths; a lone backslash stays literal.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::warn;

use crate::domain::settings::{SettingsRecord, KEY_SEPARATOR};

/// Name of the section holding keys that have no namespace.
pub const GENERAL_SECTION: &str = "General";

/// Errors produced while decoding INI text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IniError {
    /// A non-comment line is neither a section header nor `key=value`.
    #[error("malformed line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },

    /// A `key=value` line has nothing before the `=`.
    #[error("empty key on line {line}")]
    EmptyKey { line: usize },
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Decodes INI text, failing on the first malformed line.
///
/// # Errors
///
/// Returns [`IniError`] describing the first line that could not be parsed.
///
/// # Examples
///
/// ```rust
/// use visualino_core::ini::parse;
///
/// let record = parse("[linux]\narduino_ide_path=/custom/arduino\n").unwrap();
/// assert_eq!(record.get("linux/arduino_ide_path"), Some("/custom/arduino"));
/// ```
pub fn parse(text: &str) -> Result<SettingsRecord, IniError> {
    let (record, errors) = decode(text);
    match errors.into_iter().next() {
        Some(err) => Err(err),
        None => Ok(record),
    }
}

/// Decodes INI text, skipping malformed lines with a warning.
///
/// This is what the settings store uses: a single bad line must not throw
/// away every other setting in the file.
pub fn parse_lenient(text: &str) -> SettingsRecord {
    let (record, errors) = decode(text);
    for err in errors {
        warn!("skipping settings line: {err}");
    }
    record
}

/// Encodes `record` as INI text.
///
/// Keys are grouped into sections by their namespace (the part before the
/// first `/`).  Un-namespaced keys go into `[General]`, which is written
/// first; sections and keys are sorted.
pub fn serialize(record: &SettingsRecord) -> String {
    let mut sections: BTreeMap<&str, Vec<(&str, &str)>> = BTreeMap::new();
    let mut general: Vec<(&str, &str)> = Vec::new();

    for (key, value) in record.iter() {
        match key.split_once(KEY_SEPARATOR) {
            Some((section, name)) if !section.is_empty() && !name.is_empty() => {
                sections.entry(section).or_default().push((name, value));
            }
            _ => general.push((key, value)),
        }
    }

    let mut out = String::new();
    if !general.is_empty() {
        write_section(&mut out, GENERAL_SECTION, &general);
    }
    for (section, entries) in &sections {
        if !out.is_empty() {
            out.push('\n');
        }
        write_section(&mut out, section, entries);
    }
    out
}

// ── Decoding ──────────────────────────────────────────────────────────────────

fn decode(text: &str) -> (SettingsRecord, Vec<IniError>) {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut record = SettingsRecord::new();
    let mut errors = Vec::new();
    let mut section: Option<String> = None;

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();

        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            let name = name.trim();
            section = if name.is_empty() || name == GENERAL_SECTION {
                None
            } else {
                Some(name.to_string())
            };
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            errors.push(IniError::MalformedLine {
                line: line_no,
                content: raw.to_string(),
            });
            continue;
        };

        let key = key.trim();
        if key.is_empty() {
            errors.push(IniError::EmptyKey { line: line_no });
            continue;
        }

        let qualified = match &section {
            Some(section) => format!("{section}{KEY_SEPARATOR}{key}"),
            None => key.to_string(),
        };
        record.insert(qualified, decode_value(value.trim()));
    }

    (record, errors)
}

fn decode_value(value: &str) -> String {
    let Some(inner) = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
    else {
        return value.replace("\\\\", "\\");
    };

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            // Unknown escapes are kept verbatim.
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

// ── Encoding ──────────────────────────────────────────────────────────────────

fn write_section(out: &mut String, name: &str, entries: &[(&str, &str)]) {
    out.push('[');
    out.push_str(name);
    out.push_str("]\n");
    for (key, value) in entries {
        out.push_str(key);
        out.push('=');
        out.push_str(&encode_value(value));
        out.push('\n');
    }
}

fn needs_quoting(value: &str) -> bool {
    value.trim() != value
        || value
            .chars()
            .any(|c| matches!(c, ';' | '#' | '"' | '\\' | '\n' | '\r' | '\t'))
}

fn encode_value(value: &str) -> String {
    if !needs_quoting(value) {
        return value.to_string();
    }

    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
