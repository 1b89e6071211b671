use crate::binary::{BinaryHeuristic, bitset};
use keytree_types::FetchedValue;
use serde::{Serialize, Serializer};
use serde_json::ser::PrettyFormatter;

/// Indent added per nesting level of wrapped output
pub const INDENT_UNIT: &str = "   ";

/// Turns fetched values into preview text.
///
/// Composite values become JSON. With `wrap` on, values holding more than
/// one element are spread over several lines, each continuation line
/// starting with the caller's prefix so the block stays under its branch.
#[derive(Debug, Clone, Copy)]
pub struct ValueFormatter {
    pub wrap: bool,
    pub heuristic: BinaryHeuristic,
}

impl Default for ValueFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ValueFormatter {
    pub fn new(wrap: bool) -> Self {
        Self {
            wrap,
            heuristic: BinaryHeuristic::default(),
        }
    }

    pub fn with_heuristic(mut self, heuristic: BinaryHeuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn format(&self, value: &FetchedValue, prefix: &str) -> String {
        match value {
            FetchedValue::Scalar(bytes) => self.format_scalar(bytes),
            FetchedValue::List(items) => self.format_composite(items, items.len(), prefix),
            FetchedValue::Set(items) => {
                let mut sorted: Vec<&String> = items.iter().collect();
                sorted.sort();
                self.format_composite(&sorted, sorted.len(), prefix)
            }
            FetchedValue::Map(entries) => {
                self.format_composite(&OrderedMap(entries), entries.len(), prefix)
            }
            FetchedValue::Empty => String::new(),
        }
    }

    fn format_scalar(&self, bytes: &[u8]) -> String {
        if self.heuristic.is_binary(bytes) {
            bitset(bytes)
        } else {
            String::from_utf8_lossy(bytes).into_owned()
        }
    }

    fn format_composite<T>(&self, value: &T, len: usize, prefix: &str) -> String
    where
        T: Serialize + ?Sized,
    {
        // Serializing strings into memory cannot fail
        if self.wrap && len > 1 {
            to_indented_json(value, prefix).unwrap_or_default()
        } else {
            serde_json::to_string(value).unwrap_or_default()
        }
    }
}

fn to_indented_json<T: Serialize + ?Sized>(value: &T, prefix: &str) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT_UNIT.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;

    let pretty = String::from_utf8_lossy(&buf);
    Ok(pretty.replace('\n', &format!("\n{}", prefix)))
}

/// Field map serialized as a JSON object in entry order
struct OrderedMap<'a>(&'a [(String, String)]);

impl Serialize for OrderedMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(field, value)| (field, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_printable_scalar_passes_through() {
        let formatter = ValueFormatter::new(false);
        assert_eq!(formatter.format(&FetchedValue::scalar("hello"), ""), "hello");
    }

    #[test]
    fn test_scalar_ignores_wrap() {
        let formatter = ValueFormatter::new(true);
        assert_eq!(
            formatter.format(&FetchedValue::scalar("two\nlines"), "│   "),
            "two\nlines"
        );
    }

    #[test]
    fn test_binary_scalar_becomes_bitset() {
        let formatter = ValueFormatter::new(false);
        assert_eq!(
            formatter.format(&FetchedValue::Scalar(vec![0xff]), ""),
            "11111111"
        );
    }

    #[test]
    fn test_empty_value_formats_to_nothing() {
        let formatter = ValueFormatter::default();
        assert_eq!(formatter.format(&FetchedValue::Empty, "    "), "");
        assert_eq!(formatter.format(&FetchedValue::scalar(""), "    "), "");
    }

    #[test]
    fn test_single_element_stays_compact_when_wrapping() {
        let formatter = ValueFormatter::new(true);
        assert_eq!(
            formatter.format(&FetchedValue::List(strings(&["only"])), "    "),
            r#"["only"]"#
        );
        assert_eq!(
            formatter.format(&FetchedValue::Map(pairs(&[("f", "v")])), "    "),
            r#"{"f":"v"}"#
        );
    }

    #[test]
    fn test_nowrap_is_compact() {
        let formatter = ValueFormatter::new(false);
        assert_eq!(
            formatter.format(&FetchedValue::List(strings(&["a", "b"])), "│   "),
            r#"["a","b"]"#
        );
        assert_eq!(
            formatter.format(&FetchedValue::Map(pairs(&[("x", "1"), ("y", "2")])), "│   "),
            r#"{"x":"1","y":"2"}"#
        );
    }

    #[test]
    fn test_wrap_indents_under_prefix() {
        let formatter = ValueFormatter::new(true);
        let out = formatter.format(&FetchedValue::List(strings(&["a", "b"])), "│");
        assert_eq!(out, "[\n│   \"a\",\n│   \"b\"\n│]");
    }

    #[test]
    fn test_wrapped_map_keeps_entry_order() {
        let formatter = ValueFormatter::new(true);
        let out = formatter.format(
            &FetchedValue::Map(pairs(&[("low", "1"), ("high", "10")])),
            "    ",
        );
        assert_eq!(out, "{\n       \"low\": \"1\",\n       \"high\": \"10\"\n    }");
    }

    #[test]
    fn test_set_members_are_sorted() {
        let formatter = ValueFormatter::new(false);
        assert_eq!(
            formatter.format(&FetchedValue::Set(strings(&["c", "a", "b"])), ""),
            r#"["a","b","c"]"#
        );
    }

    #[test]
    fn test_empty_composites() {
        let formatter = ValueFormatter::new(true);
        assert_eq!(formatter.format(&FetchedValue::List(Vec::new()), ""), "[]");
        assert_eq!(formatter.format(&FetchedValue::Map(Vec::new()), ""), "{}");
    }

    #[test]
    fn test_json_escapes_control_characters() {
        let formatter = ValueFormatter::new(false);
        assert_eq!(
            formatter.format(&FetchedValue::List(strings(&["a\"b", "c\nd"])), ""),
            r#"["a\"b","c\nd"]"#
        );
    }
}
