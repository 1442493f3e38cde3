//! Frontmatter codec
//!
//! Parses and serializes the metadata block at the top of a resource file:
//!
//! ```text
//! ---
//! name: frontend-specialist
//! description: Builds UIs
//! readonly: false
//! ---
//! # Frontend Specialist
//! ```
//!
//! The supported subset is explicit: one `key: value` pair per line, values
//! coerced to a [`ScalarValue`]. Quoted strings, lists and nested maps are
//! kept verbatim as strings. Input without a leading delimited block is not
//! an error; it parses as empty metadata with the whole text as content.

use serde::{Deserialize, Serialize};
use std::fmt;

const DELIMITER: &str = "---";

/// A single frontmatter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Bool(bool),
    Number(f64),
    String(String),
}

impl ScalarValue {
    /// Coerce a raw (already trimmed) value string.
    ///
    /// Exactly `true`/`false` become booleans, finite numbers become
    /// numbers, everything else stays a string.
    pub fn coerce(raw: &str) -> Self {
        match raw {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            _ => match raw.parse::<f64>() {
                Ok(n) if n.is_finite() => Self::Number(n),
                _ => Self::String(raw.to_string()),
            },
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            // f64 Display already drops a zero fraction ("3" not "3.0")
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for ScalarValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for ScalarValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// Insertion-ordered frontmatter map.
///
/// Serialization emits keys in insertion order, so callers that want a
/// stable layout build the map in that layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    entries: Vec<(String, ScalarValue)>,
}

impl Frontmatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value. An existing key keeps its position and gets the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ScalarValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&ScalarValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Get a value rendered as text, whatever its scalar kind.
    pub fn get_text(&self, key: &str) -> Option<String> {
        self.get(key).map(ScalarValue::to_string)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<ScalarValue> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScalarValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<ScalarValue>> FromIterator<(K, V)> for Frontmatter {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// Result of [`parse`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFrontmatter {
    /// Coerced key/value pairs, in file order
    pub data: Frontmatter,
    /// Everything after the closing delimiter line
    pub content: String,
    /// Text between the delimiters, empty when there is no block
    pub raw: String,
}

/// Parse a resource file into metadata and body.
pub fn parse(text: &str) -> ParsedFrontmatter {
    match split_block(text) {
        Some((raw, content)) => ParsedFrontmatter {
            data: parse_block(raw),
            content: content.to_string(),
            raw: raw.to_string(),
        },
        None => ParsedFrontmatter {
            data: Frontmatter::new(),
            content: text.to_string(),
            raw: String::new(),
        },
    }
}

/// Serialize a map into a delimited block, including the trailing newline.
///
/// Line breaks inside string values are folded to spaces; a raw newline
/// would end the entry early on the next parse.
pub fn serialize(data: &Frontmatter) -> String {
    let mut out = String::from(DELIMITER);
    out.push('\n');
    for (key, value) in data.iter() {
        let rendered = value.to_string();
        if rendered.contains(['\n', '\r']) {
            tracing::debug!("Folding line breaks in frontmatter value for '{}'", key);
            let folded = rendered.replace("\r\n", " ").replace(['\n', '\r'], " ");
            out.push_str(&format!("{key}: {folded}\n"));
        } else {
            out.push_str(&format!("{key}: {rendered}\n"));
        }
    }
    out.push_str(DELIMITER);
    out.push('\n');
    out
}

/// Serialize a map and append the body.
pub fn render(data: &Frontmatter, content: &str) -> String {
    let mut out = serialize(data);
    out.push_str(content);
    out
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end_matches('\r') == DELIMITER
}

/// Split `text` into (block, content) when it opens with a delimited block.
fn split_block(text: &str) -> Option<(&str, &str)> {
    let first_end = text.find('\n')?;
    if !is_delimiter(&text[..first_end]) {
        return None;
    }

    let rest = &text[first_end + 1..];
    let mut offset = 0;
    loop {
        let line_end = rest[offset..].find('\n').map(|i| offset + i);
        let line = match line_end {
            Some(end) => &rest[offset..end],
            None => &rest[offset..],
        };

        if is_delimiter(line) {
            let raw = &rest[..offset];
            let raw = raw.strip_suffix('\n').unwrap_or(raw);
            let raw = raw.strip_suffix('\r').unwrap_or(raw);
            let content = match line_end {
                Some(end) => &rest[end + 1..],
                None => "",
            };
            return Some((raw, content));
        }

        match line_end {
            Some(end) => offset = end + 1,
            None => return None,
        }
    }
}

fn parse_block(raw: &str) -> Frontmatter {
    let mut data = Frontmatter::new();
    for line in raw.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        data.insert(key, ScalarValue::coerce(value.trim()));
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_coerce_literals() {
        assert_eq!(ScalarValue::coerce("true"), ScalarValue::Bool(true));
        assert_eq!(ScalarValue::coerce("false"), ScalarValue::Bool(false));
        assert_eq!(ScalarValue::coerce("True"), ScalarValue::from("True"));
        assert_eq!(ScalarValue::coerce("42"), ScalarValue::Number(42.0));
        assert_eq!(ScalarValue::coerce("-1.5"), ScalarValue::Number(-1.5));
        assert_eq!(ScalarValue::coerce("NaN"), ScalarValue::from("NaN"));
        assert_eq!(ScalarValue::coerce("inf"), ScalarValue::from("inf"));
        assert_eq!(ScalarValue::coerce(""), ScalarValue::from(""));
    }

    #[test]
    fn test_number_display() {
        assert_eq!(ScalarValue::Number(3.0).to_string(), "3");
        assert_eq!(ScalarValue::Number(0.25).to_string(), "0.25");
    }

    #[test]
    fn test_split_on_first_colon_only() {
        let parsed = parse("---\nurl: https://example.com:8080/x\n---\nbody");
        assert_eq!(
            parsed.data.get("url"),
            Some(&ScalarValue::from("https://example.com:8080/x"))
        );
        assert_eq!(parsed.content, "body");
    }

    #[test]
    fn test_lines_without_colon_are_skipped() {
        let parsed = parse("---\nname: a\njust text\n: no key\n---\n");
        assert_eq!(parsed.data.len(), 1);
        assert_eq!(parsed.raw, "name: a\njust text\n: no key");
    }

    #[test]
    fn test_unterminated_block_is_content() {
        let text = "---\nname: a\nno closing delimiter\n";
        let parsed = parse(text);
        assert!(parsed.data.is_empty());
        assert_eq!(parsed.content, text);
    }

    #[test]
    fn test_crlf_delimiters() {
        let parsed = parse("---\r\nname: a\r\n---\r\nbody\r\n");
        assert_eq!(parsed.data.get("name"), Some(&ScalarValue::from("a")));
        assert_eq!(parsed.content, "body\r\n");
    }

    #[test]
    fn test_empty_block() {
        let parsed = parse("---\n---\n# Title\n");
        assert!(parsed.data.is_empty());
        assert_eq!(parsed.content, "# Title\n");
        assert_eq!(serialize(&Frontmatter::new()), "---\n---\n");
    }

    #[test]
    fn test_insert_keeps_position() {
        let mut map = Frontmatter::new();
        map.insert("a", "1x");
        map.insert("b", true);
        map.insert("a", "2x");
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(map.get("a"), Some(&ScalarValue::from("2x")));
    }

    #[test]
    fn test_serialize_folds_newlines() {
        let mut map = Frontmatter::new();
        map.insert("description", "line one\nline two");
        let out = serialize(&map);
        assert_eq!(out, "---\ndescription: line one line two\n---\n");
        assert_eq!(parse(&out).data.len(), 1);
    }
}
