/// A value read from the store, shaped by its structural kind
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchedValue {
    /// Raw bytes of a string value, possibly binary
    Scalar(Vec<u8>),
    /// Ordered sequence
    List(Vec<String>),
    /// Unordered sequence
    Set(Vec<String>),
    /// Ordered field map (hash fields, or sorted-set members with scores)
    Map(Vec<(String, String)>),
    /// Unsupported type, missing key, or value not requested
    #[default]
    Empty,
}

impl FetchedValue {
    /// Number of elements in a composite value; scalars count as one
    pub fn len(&self) -> usize {
        match self {
            FetchedValue::Scalar(_) => 1,
            FetchedValue::List(items) | FetchedValue::Set(items) => items.len(),
            FetchedValue::Map(entries) => entries.len(),
            FetchedValue::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn scalar(text: impl Into<Vec<u8>>) -> Self {
        FetchedValue::Scalar(text.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_by_kind() {
        assert_eq!(FetchedValue::scalar("").len(), 1);
        assert_eq!(FetchedValue::List(vec!["a".into(), "b".into()]).len(), 2);
        assert_eq!(FetchedValue::Map(vec![("f".into(), "v".into())]).len(), 1);
        assert!(FetchedValue::Empty.is_empty());
        assert!(FetchedValue::Set(Vec::new()).is_empty());
    }
}
