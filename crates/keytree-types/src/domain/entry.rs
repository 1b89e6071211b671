use super::{FetchedValue, KeyType, Ttl};

/// Everything looked up for one leaf key.
///
/// `kind` and `ttl` are `None` when the individual lookup failed; the
/// renderer shows those fields blank instead of aborting.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Entry {
    pub kind: Option<KeyType>,
    pub ttl: Option<Ttl>,
    pub value: FetchedValue,
}

impl Entry {
    pub fn new(kind: KeyType, ttl: Ttl, value: FetchedValue) -> Self {
        Self {
            kind: Some(kind),
            ttl: Some(ttl),
            value,
        }
    }
}
