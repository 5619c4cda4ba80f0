//! Order-preserving hash joins over plain key vectors.
//!
//! For each left row, in order, every matching right row is visited in its
//! input order. Missing keys never match anything.

use std::collections::HashMap;
use std::hash::Hash;

pub(crate) struct KeyIndex<K> {
    positions: HashMap<K, Vec<usize>>,
}

impl<K: Hash + Eq> KeyIndex<K> {
    pub(crate) fn build<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = Option<K>>,
    {
        let mut positions: HashMap<K, Vec<usize>> = HashMap::new();
        for (idx, key) in keys.into_iter().enumerate() {
            if let Some(key) = key {
                positions.entry(key).or_default().push(idx);
            }
        }
        Self { positions }
    }

    /// Right rows matching `key`, for an inner join.
    pub(crate) fn matches(&self, key: Option<&K>) -> &[usize] {
        match key.and_then(|k| self.positions.get(k)) {
            Some(positions) => positions.as_slice(),
            None => &[],
        }
    }

    /// Right rows matching `key`, or a single `None` when there are none.
    pub(crate) fn left(&self, key: Option<&K>) -> Vec<Option<usize>> {
        let matches = self.matches(key);
        if matches.is_empty() {
            vec![None]
        } else {
            matches.iter().copied().map(Some).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_preserve_order_and_skip_missing() {
        let index = KeyIndex::build(vec![Some("a"), None, Some("b"), Some("a")]);
        assert_eq!(index.matches(Some(&"a")), &[0, 3]);
        assert!(index.matches(None).is_empty());
        assert_eq!(index.left(Some(&"z")), vec![None]);
        assert_eq!(index.left(Some(&"b")), vec![Some(2)]);
    }
}
