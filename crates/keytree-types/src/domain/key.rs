use std::fmt;

/// Type of a stored key, as reported by the store's `TYPE` command
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyType {
    String,
    List,
    Set,
    Hash,
    ZSet,
    /// Anything else the store reports (`none`, `stream`, module types)
    Other(String),
}

impl KeyType {
    /// Classify a type name as returned by the store
    pub fn from_name(name: &str) -> Self {
        match name {
            "string" => KeyType::String,
            "list" => KeyType::List,
            "set" => KeyType::Set,
            "hash" => KeyType::Hash,
            "zset" => KeyType::ZSet,
            other => KeyType::Other(other.to_string()),
        }
    }

    /// The store's own name for this type
    pub fn as_str(&self) -> &str {
        match self {
            KeyType::String => "string",
            KeyType::List => "list",
            KeyType::Set => "set",
            KeyType::Hash => "hash",
            KeyType::ZSet => "zset",
            KeyType::Other(name) => name,
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for KeyType {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

/// Remaining time-to-live of a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ttl {
    /// The key never expires
    Persistent,
    /// Seconds left, or the store's negative status code shown verbatim
    Seconds(i64),
}

impl Ttl {
    /// Reply value the store uses for "no expiry"
    pub const NO_EXPIRY: i64 = -1;

    pub fn from_reply(reply: i64) -> Self {
        if reply == Self::NO_EXPIRY {
            Ttl::Persistent
        } else {
            Ttl::Seconds(reply)
        }
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self, Ttl::Persistent)
    }
}

/// Persistent keys render as an empty field.
impl fmt::Display for Ttl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ttl::Persistent => Ok(()),
            Ttl::Seconds(secs) => write!(f, "{}", secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_type_round_trips_known_names() {
        for name in ["string", "list", "set", "hash", "zset"] {
            assert_eq!(KeyType::from_name(name).as_str(), name);
        }
    }

    #[test]
    fn test_key_type_keeps_unknown_names() {
        let kind = KeyType::from_name("stream");
        assert_eq!(kind, KeyType::Other("stream".to_string()));
        assert_eq!(kind.to_string(), "stream");
    }

    #[test]
    fn test_ttl_no_expiry_renders_blank() {
        let ttl = Ttl::from_reply(-1);
        assert!(ttl.is_persistent());
        assert_eq!(ttl.to_string(), "");
    }

    #[test]
    fn test_ttl_other_replies_render_verbatim() {
        assert_eq!(Ttl::from_reply(42).to_string(), "42");
        assert_eq!(Ttl::from_reply(0).to_string(), "0");
        assert_eq!(Ttl::from_reply(-2).to_string(), "-2");
    }
}
