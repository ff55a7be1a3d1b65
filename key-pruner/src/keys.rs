// Key set used to decide which mapping entries are dropped
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Set of key names removed from every mapping during pruning.
///
/// Matching is exact and case-sensitive. A name such as `"user.password"` is a
/// single literal key, never a path. Duplicates collapse and insertion order is
/// irrelevant; iteration is sorted so log output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeySet {
    keys: BTreeSet<String>,
}

impl KeySet {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        keys.into_iter().collect()
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn insert<S: Into<String>>(&mut self, key: S) -> bool {
        self.keys.insert(key.into())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for KeySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for KeySet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.keys.extend(iter.into_iter().map(Into::into));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_collapse() {
        let keys = KeySet::new(["token", "password", "token"]);
        assert_eq!(keys.len(), 2);
        assert_eq!(keys.iter().collect::<Vec<_>>(), vec!["password", "token"]);
    }

    #[test]
    fn test_exact_matching() {
        let keys = KeySet::new(["password", "user.password"]);
        assert!(keys.contains("password"));
        assert!(keys.contains("user.password"));
        assert!(!keys.contains("Password"));
        assert!(!keys.contains("PASSWORD"));
        assert!(!keys.contains("passwords"));
        assert!(!keys.contains("user"));
    }

    #[test]
    fn test_empty_set() {
        let keys = KeySet::empty();
        assert!(keys.is_empty());
        assert!(!keys.contains(""));
    }

    #[test]
    fn test_extend_and_insert() {
        let mut keys: KeySet = vec![String::from("secret")].into_iter().collect();
        assert!(keys.insert("token"));
        assert!(!keys.insert("secret"));
        keys.extend(["api_key"]);
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn test_deserializes_from_list() {
        let keys: KeySet = serde_json::from_str(r#"["b", "a", "b"]"#).unwrap();
        assert_eq!(keys, KeySet::new(["a", "b"]));
    }
}
