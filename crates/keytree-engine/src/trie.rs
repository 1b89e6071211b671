use std::collections::BTreeMap;

/// Display label of the trie root
pub const ROOT_LABEL: &str = "/";

/// One segment of the namespace.
///
/// Children are keyed by label, so sibling order is always ascending byte
/// order no matter how keys arrive. A node is a leaf exactly when it has no
/// children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieNode {
    label: String,
    children: BTreeMap<String, TrieNode>,
}

impl TrieNode {
    fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: BTreeMap::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn child(&self, label: &str) -> Option<&TrieNode> {
        self.children.get(label)
    }

    /// Children in ascending label order
    pub fn children(&self) -> impl ExactSizeIterator<Item = &TrieNode> {
        self.children.values()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child_or_insert(&mut self, label: &str) -> &mut TrieNode {
        self.children
            .entry(label.to_string())
            .or_insert_with(|| TrieNode::new(label))
    }
}

/// Prefix tree built from separator-delimited keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceTrie {
    root: TrieNode,
}

impl Default for NamespaceTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl NamespaceTrie {
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(ROOT_LABEL),
        }
    }

    /// Build a trie from scratch
    pub fn from_keys<I, S>(keys: I, separator: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        trie.ingest(keys, separator);
        trie
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }

    /// Add keys to the trie, creating missing segments on the way down.
    ///
    /// Idempotent per key. Keys with no non-empty segment are ignored.
    pub fn ingest<I, S>(&mut self, keys: I, separator: &str)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for key in keys {
            let mut node = &mut self.root;
            for segment in split_segments(key.as_ref(), separator) {
                node = node.child_or_insert(segment);
            }
        }
    }

    /// Number of leaves, i.e. keys that will be looked up when rendering
    pub fn leaf_count(&self) -> usize {
        fn count(node: &TrieNode) -> usize {
            if node.is_leaf() {
                1
            } else {
                node.children().map(count).sum()
            }
        }

        if self.is_empty() {
            0
        } else {
            count(&self.root)
        }
    }

    /// Number of nodes between the root and the node for `key`
    pub fn depth_of(&self, key: &str, separator: &str) -> Option<usize> {
        let mut node = &self.root;
        let mut depth = 0;
        for segment in split_segments(key, separator) {
            node = node.child(segment)?;
            depth += 1;
        }
        (depth > 0).then_some(depth)
    }

    /// Fully-qualified keys of all leaves, in render order
    pub fn leaves(&self, separator: &str) -> Vec<String> {
        fn walk(node: &TrieNode, path: &mut Vec<String>, separator: &str, out: &mut Vec<String>) {
            for child in node.children() {
                path.push(child.label.clone());
                if child.is_leaf() {
                    out.push(path.join(separator));
                } else {
                    walk(child, path, separator, out);
                }
                path.pop();
            }
        }

        let mut out = Vec::new();
        walk(&self.root, &mut Vec::new(), separator, &mut out);
        out
    }
}

/// Non-empty segments of `key`; an empty separator keeps the key whole
pub fn split_segments<'a>(key: &'a str, separator: &str) -> Vec<&'a str> {
    if separator.is_empty() {
        return if key.is_empty() { Vec::new() } else { vec![key] };
    }

    key.split(separator).filter(|s| !s.is_empty()).collect()
}
