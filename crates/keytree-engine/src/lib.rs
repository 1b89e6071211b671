//! Namespace trie, tree layout and value previews.
//!
//! This layer sits between the store collaborator (`keytree-types`) and CLI
//! presentation.

pub mod binary;
pub mod format;
pub mod render;
pub mod trie;

pub use binary::{BinaryHeuristic, bitset, is_binary};
pub use format::{INDENT_UNIT, ValueFormatter};
pub use render::{Annotation, Glyphs, RenderedLine, TreeRenderer};
pub use trie::{NamespaceTrie, ROOT_LABEL, TrieNode, split_segments};

use keytree_types::KeyStore;

// Façade API - Stable public interface for CLI layer

/// Resolve every pattern against the store and build one trie from all keys.
///
/// A pattern the store fails to resolve contributes no keys.
pub fn collect_keys<S, P>(store: &mut S, patterns: &[P], separator: &str) -> NamespaceTrie
where
    S: KeyStore + ?Sized,
    P: AsRef<str>,
{
    let mut trie = NamespaceTrie::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        match store.resolve(pattern) {
            Ok(keys) => {
                tracing::debug!(pattern, count = keys.len(), "resolved pattern");
                trie.ingest(&keys, separator);
            }
            Err(e) => {
                tracing::warn!(pattern, error = %e, "skipping pattern");
            }
        }
    }
    trie
}
