//! In-memory [`KeyStore`] behaving like a small Redis instance.
//!
//! Keys resolve in insertion order, which lets tests feed the tree builder
//! deliberately unsorted input. Every call is recorded so tests can check
//! which lookups a render performed.

use crate::glob;
use keytree_types::{Error, FetchedValue, KeyStore, KeyType, Result, Ttl};
use std::collections::HashSet;

#[derive(Debug, Clone)]
struct StoredKey {
    kind: KeyType,
    ttl: Ttl,
    value: FetchedValue,
}

/// A call made against a [`MemoryStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Resolve(String),
    Type(String),
    Ttl(String),
    Value(String),
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    keys: Vec<(String, StoredKey)>,
    failing_patterns: HashSet<String>,
    failing_keys: HashSet<String>,
    lookups: Vec<Lookup>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(mut self, key: &str, kind: KeyType, value: FetchedValue) -> Self {
        let stored = StoredKey {
            kind,
            ttl: Ttl::Persistent,
            value,
        };
        match self.keys.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = stored,
            None => self.keys.push((key.to_string(), stored)),
        }
        self
    }

    pub fn with_string(self, key: &str, value: impl Into<Vec<u8>>) -> Self {
        self.insert(key, KeyType::String, FetchedValue::Scalar(value.into()))
    }

    pub fn with_list(self, key: &str, items: &[&str]) -> Self {
        self.insert(key, KeyType::List, FetchedValue::List(to_strings(items)))
    }

    pub fn with_set(self, key: &str, members: &[&str]) -> Self {
        self.insert(key, KeyType::Set, FetchedValue::Set(to_strings(members)))
    }

    /// Hash fields are served sorted by field name, as `RedisStore` does
    pub fn with_hash(self, key: &str, fields: &[(&str, &str)]) -> Self {
        let mut pairs = to_pairs(fields);
        pairs.sort();
        self.insert(key, KeyType::Hash, FetchedValue::Map(pairs))
    }

    /// Members must be given in score order
    pub fn with_zset(self, key: &str, members: &[(&str, f64)]) -> Self {
        let pairs = members
            .iter()
            .map(|(member, score)| (member.to_string(), score.to_string()))
            .collect();
        self.insert(key, KeyType::ZSet, FetchedValue::Map(pairs))
    }

    /// A key of a type the tree does not preview
    pub fn with_other(self, key: &str, kind: &str) -> Self {
        self.insert(key, KeyType::from_name(kind), FetchedValue::Empty)
    }

    pub fn with_ttl(mut self, key: &str, seconds: i64) -> Self {
        if let Some((_, stored)) = self.keys.iter_mut().find(|(k, _)| k == key) {
            stored.ttl = Ttl::Seconds(seconds);
        }
        self
    }

    /// Make `resolve` fail for this exact pattern
    pub fn failing_pattern(mut self, pattern: &str) -> Self {
        self.failing_patterns.insert(pattern.to_string());
        self
    }

    /// Make every lookup of this key fail
    pub fn failing_key(mut self, key: &str) -> Self {
        self.failing_keys.insert(key.to_string());
        self
    }

    pub fn lookups(&self) -> &[Lookup] {
        &self.lookups
    }

    /// Keys whose value was read
    pub fn value_reads(&self) -> Vec<&str> {
        self.lookups
            .iter()
            .filter_map(|l| match l {
                Lookup::Value(key) => Some(key.as_str()),
                _ => None,
            })
            .collect()
    }

    fn get(&self, key: &str) -> Result<Option<&StoredKey>> {
        if self.failing_keys.contains(key) {
            return Err(Error::Store(format!("lookup of '{}' failed", key)));
        }
        Ok(self.keys.iter().find(|(k, _)| k == key).map(|(_, v)| v))
    }
}

impl KeyStore for MemoryStore {
    fn resolve(&mut self, pattern: &str) -> Result<Vec<String>> {
        self.lookups.push(Lookup::Resolve(pattern.to_string()));
        if self.failing_patterns.contains(pattern) {
            return Err(Error::Store(format!("cannot resolve '{}'", pattern)));
        }

        let matcher = glob::compile(pattern).map_err(|e| Error::Store(e.to_string()))?;
        Ok(self
            .keys
            .iter()
            .filter(|(key, _)| matcher.is_match(key))
            .map(|(key, _)| key.clone())
            .collect())
    }

    fn key_type(&mut self, key: &str) -> Result<KeyType> {
        self.lookups.push(Lookup::Type(key.to_string()));
        Ok(self
            .get(key)?
            .map(|stored| stored.kind.clone())
            .unwrap_or_else(|| KeyType::from_name("none")))
    }

    fn ttl(&mut self, key: &str) -> Result<Ttl> {
        self.lookups.push(Lookup::Ttl(key.to_string()));
        Ok(self
            .get(key)?
            .map(|stored| stored.ttl)
            .unwrap_or(Ttl::Seconds(-2)))
    }

    fn value(&mut self, key: &str, kind: &KeyType) -> Result<FetchedValue> {
        self.lookups.push(Lookup::Value(key.to_string()));
        match self.get(key)? {
            Some(stored) if &stored.kind == kind => Ok(stored.value.clone()),
            Some(stored) => Err(Error::UnexpectedReply(format!(
                "'{}' holds a {}, not a {}",
                key, stored.kind, kind
            ))),
            None => Ok(FetchedValue::Empty),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn to_pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
