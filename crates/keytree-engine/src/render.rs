use crate::format::ValueFormatter;
use crate::trie::{NamespaceTrie, TrieNode};
use keytree_types::{Entry, KeyStore};
use std::fmt;
use std::io;

/// Box-drawing pieces used to draw branches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub branch: &'static str,
    pub last_branch: &'static str,
    pub rail: &'static str,
    pub blank: &'static str,
}

impl Glyphs {
    pub const UNICODE: Glyphs = Glyphs {
        branch: "├── ",
        last_branch: "└── ",
        rail: "│   ",
        blank: "    ",
    };

    pub const ASCII: Glyphs = Glyphs {
        branch: "|-- ",
        last_branch: "`-- ",
        rail: "|   ",
        blank: "    ",
    };
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::UNICODE
    }
}

/// Leaf annotation: `# <type> <ttl> <value>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub kind: String,
    pub ttl: String,
    pub value: String,
}

impl Annotation {
    pub fn from_entry(entry: &Entry, formatter: &ValueFormatter, prefix: &str) -> Self {
        Self {
            kind: entry.kind.as_ref().map(|k| k.to_string()).unwrap_or_default(),
            ttl: entry.ttl.map(|t| t.to_string()).unwrap_or_default(),
            value: formatter.format(&entry.value, prefix),
        }
    }
}

/// Blank trailing fields leave no trailing whitespace.
impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() {
            let head = format!("# {} {}", self.kind, self.ttl);
            f.write_str(head.trim_end())
        } else {
            write!(f, "# {} {} {}", self.kind, self.ttl, self.value)
        }
    }
}

/// One line of tree output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    pub leading: String,
    pub branch: &'static str,
    pub label: String,
    /// Present for leaves only
    pub annotation: Option<Annotation>,
    pub is_last: bool,
    /// Fully-qualified key of the node
    pub key: String,
}

impl fmt::Display for RenderedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.leading, self.branch, self.label)?;
        if let Some(annotation) = &self.annotation {
            write!(f, " {}", annotation)?;
        }
        Ok(())
    }
}

/// Walks a [`NamespaceTrie`] depth-first and emits one [`RenderedLine`] per
/// node, looking up every leaf in the store as it goes.
#[derive(Debug, Clone)]
pub struct TreeRenderer {
    pub separator: String,
    pub only_keys: bool,
    pub glyphs: Glyphs,
    pub formatter: ValueFormatter,
}

impl TreeRenderer {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            only_keys: false,
            glyphs: Glyphs::default(),
            formatter: ValueFormatter::default(),
        }
    }

    pub fn only_keys(mut self, only_keys: bool) -> Self {
        self.only_keys = only_keys;
        self
    }

    pub fn wrap(mut self, wrap: bool) -> Self {
        self.formatter.wrap = wrap;
        self
    }

    pub fn glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn formatter(mut self, formatter: ValueFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Render the whole trie, handing lines to `sink` in display order.
    ///
    /// Stops at the first sink error.
    pub fn render<S, F>(&self, trie: &NamespaceTrie, store: &mut S, mut sink: F) -> io::Result<()>
    where
        S: KeyStore + ?Sized,
        F: FnMut(RenderedLine) -> io::Result<()>,
    {
        let mut path = Vec::new();
        self.render_children(trie.root(), &mut path, "", store, &mut sink)
    }

    /// Render into a list of lines
    pub fn render_to_vec<S>(&self, trie: &NamespaceTrie, store: &mut S) -> Vec<RenderedLine>
    where
        S: KeyStore + ?Sized,
    {
        let mut lines = Vec::new();
        // the sink below never fails
        let _ = self.render(trie, store, |line| {
            lines.push(line);
            Ok(())
        });
        lines
    }

    /// Prefix for wrapped value lines: the leaf's own leading, plus a rail
    /// mark when siblings follow so the block stays inside the rail.
    fn value_prefix(&self, leading: &str, is_last: bool) -> String {
        if is_last {
            leading.to_string()
        } else {
            format!("{}{}", leading, self.glyphs.rail.trim_end())
        }
    }

    fn render_children<'t, S, F>(
        &self,
        node: &'t TrieNode,
        path: &mut Vec<&'t str>,
        leading: &str,
        store: &mut S,
        sink: &mut F,
    ) -> io::Result<()>
    where
        S: KeyStore + ?Sized,
        F: FnMut(RenderedLine) -> io::Result<()>,
    {
        let count = node.child_count();
        for (index, child) in node.children().enumerate() {
            let is_last = index + 1 == count;
            let (branch, continuation) = if is_last {
                (self.glyphs.last_branch, self.glyphs.blank)
            } else {
                (self.glyphs.branch, self.glyphs.rail)
            };
            let child_leading = format!("{}{}", leading, continuation);

            path.push(child.label());
            let key = path.join(&self.separator);

            let annotation = if child.is_leaf() {
                tracing::debug!(key = %key, "looking up leaf");
                let entry = store.fetch(&key, self.only_keys);
                let prefix = self.value_prefix(leading, is_last);
                Some(Annotation::from_entry(&entry, &self.formatter, &prefix))
            } else {
                None
            };

            sink(RenderedLine {
                leading: leading.to_string(),
                branch,
                label: child.label().to_string(),
                annotation,
                is_last,
                key,
            })?;

            self.render_children(child, path, &child_leading, store, sink)?;
            path.pop();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keytree_types::{FetchedValue, KeyType, Ttl};

    #[test]
    fn test_annotation_blank_ttl_keeps_field() {
        let annotation = Annotation {
            kind: "string".into(),
            ttl: String::new(),
            value: "hello".into(),
        };
        assert_eq!(annotation.to_string(), "# string  hello");
    }

    #[test]
    fn test_annotation_without_value_has_no_trailing_space() {
        let annotation = Annotation {
            kind: "list".into(),
            ttl: String::new(),
            value: String::new(),
        };
        assert_eq!(annotation.to_string(), "# list");

        let annotation = Annotation {
            kind: "list".into(),
            ttl: "30".into(),
            value: String::new(),
        };
        assert_eq!(annotation.to_string(), "# list 30");
    }

    #[test]
    fn test_annotation_from_failed_lookup_is_blank() {
        let entry = Entry::default();
        let annotation = Annotation::from_entry(&entry, &ValueFormatter::default(), "");
        assert_eq!(annotation.to_string(), "#");
    }

    #[test]
    fn test_annotation_from_entry() {
        let entry = Entry::new(KeyType::String, Ttl::Seconds(9), FetchedValue::scalar("v"));
        let annotation = Annotation::from_entry(&entry, &ValueFormatter::default(), "");
        assert_eq!(annotation.to_string(), "# string 9 v");
    }

    #[test]
    fn test_value_prefix_follows_leaf_position() {
        let renderer = TreeRenderer::new(":");
        assert_eq!(renderer.value_prefix("", true), "");
        assert_eq!(renderer.value_prefix("", false), "│");
        assert_eq!(renderer.value_prefix("    ", false), "    │");

        let renderer = renderer.glyphs(Glyphs::ASCII);
        assert_eq!(renderer.value_prefix("|   ", false), "|   |");
        assert_eq!(renderer.value_prefix("|   ", true), "|   ");
    }

    #[test]
    fn test_line_display() {
        let line = RenderedLine {
            leading: "│   ".into(),
            branch: Glyphs::UNICODE.last_branch,
            label: "a".into(),
            annotation: None,
            is_last: true,
            key: "x:a".into(),
        };
        assert_eq!(line.to_string(), "│   └── a");
    }
}
