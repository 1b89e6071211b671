use crate::{Entry, FetchedValue, KeyType, Result, Ttl};

/// Read-only access to a key-value store's namespace.
///
/// Implementations enumerate keys matching a glob pattern and look up the
/// type, TTL and value of individual keys. Callers never see transient vs
/// permanent failures distinguished; that is the implementation's business.
pub trait KeyStore {
    /// Enumerate keys matching a glob pattern, in no particular order
    fn resolve(&mut self, pattern: &str) -> Result<Vec<String>>;

    /// Type of a key
    fn key_type(&mut self, key: &str) -> Result<KeyType>;

    /// Remaining time-to-live of a key
    fn ttl(&mut self, key: &str) -> Result<Ttl>;

    /// Value of a key, read with the command appropriate for `kind`
    fn value(&mut self, key: &str, kind: &KeyType) -> Result<FetchedValue>;

    /// Look up everything the tree shows for a leaf.
    ///
    /// Each failed lookup becomes a blank field. With `only_keys` the value
    /// is never read.
    fn fetch(&mut self, key: &str, only_keys: bool) -> Entry {
        let kind = self
            .key_type(key)
            .inspect_err(|e| tracing::debug!(key, error = %e, "type lookup failed"))
            .ok();
        let ttl = self
            .ttl(key)
            .inspect_err(|e| tracing::debug!(key, error = %e, "ttl lookup failed"))
            .ok();

        let value = match (&kind, only_keys) {
            (Some(kind), false) => self
                .value(key, kind)
                .inspect_err(|e| tracing::debug!(key, error = %e, "value lookup failed"))
                .unwrap_or_default(),
            _ => FetchedValue::Empty,
        };

        Entry { kind, ttl, value }
    }
}

impl<S: KeyStore + ?Sized> KeyStore for &mut S {
    fn resolve(&mut self, pattern: &str) -> Result<Vec<String>> {
        (**self).resolve(pattern)
    }

    fn key_type(&mut self, key: &str) -> Result<KeyType> {
        (**self).key_type(key)
    }

    fn ttl(&mut self, key: &str) -> Result<Ttl> {
        (**self).ttl(key)
    }

    fn value(&mut self, key: &str, kind: &KeyType) -> Result<FetchedValue> {
        (**self).value(key, kind)
    }
}

impl<S: KeyStore + ?Sized> KeyStore for Box<S> {
    fn resolve(&mut self, pattern: &str) -> Result<Vec<String>> {
        (**self).resolve(pattern)
    }

    fn key_type(&mut self, key: &str) -> Result<KeyType> {
        (**self).key_type(key)
    }

    fn ttl(&mut self, key: &str) -> Result<Ttl> {
        (**self).ttl(key)
    }

    fn value(&mut self, key: &str, kind: &KeyType) -> Result<FetchedValue> {
        (**self).value(key, kind)
    }
}
