//! Destination containers that operations write into.

use crate::error::Result;
use crate::source::Pair;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// How a value written under an existing key is combined with the old one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergePolicy {
    /// Overwrite the existing value
    Upsert,
    /// Concatenate onto the existing sequence
    AppendGroup,
    /// Concatenate when both values are sequences, otherwise overwrite
    MergeSequences,
}

impl Default for MergePolicy {
    fn default() -> Self {
        Self::Upsert
    }
}

/// A destination that accepts one produced value at a time.
///
/// Sequences append. Associative containers take a [`Pair`] and overwrite the
/// slot selected by its key.
pub trait Accumulator<T> {
    fn store(&mut self, value: T) -> Result<()>;
}

/// A destination that collects values into per-key groups.
///
/// Writing to an absent key creates the group; writing to an existing key
/// concatenates onto it.
pub trait GroupAccumulator<K, T> {
    fn append_group(&mut self, key: K, items: Vec<T>) -> Result<()>;
}

impl<T> Accumulator<T> for Vec<T> {
    fn store(&mut self, value: T) -> Result<()> {
        self.push(value);
        Ok(())
    }
}

impl<K: Eq + Hash, V, S: BuildHasher> Accumulator<Pair<K, V>> for HashMap<K, V, S> {
    fn store(&mut self, pair: Pair<K, V>) -> Result<()> {
        self.insert(pair.key, pair.value);
        Ok(())
    }
}

impl<K: Ord, V> Accumulator<Pair<K, V>> for BTreeMap<K, V> {
    fn store(&mut self, pair: Pair<K, V>) -> Result<()> {
        self.insert(pair.key, pair.value);
        Ok(())
    }
}

impl<K: Eq + Hash, T, S: BuildHasher> GroupAccumulator<K, T> for HashMap<K, Vec<T>, S> {
    fn append_group(&mut self, key: K, items: Vec<T>) -> Result<()> {
        self.entry(key).or_default().extend(items);
        Ok(())
    }
}

impl<K: Ord, T> GroupAccumulator<K, T> for BTreeMap<K, Vec<T>> {
    fn append_group(&mut self, key: K, items: Vec<T>) -> Result<()> {
        self.entry(key).or_default().extend(items);
        Ok(())
    }
}

// A sequence keeps every group write as its own entry
impl<K, T> GroupAccumulator<K, T> for Vec<Pair<K, Vec<T>>> {
    fn append_group(&mut self, key: K, items: Vec<T>) -> Result<()> {
        self.push(Pair::new(key, items));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_appends() {
        let mut dest = vec![1];
        dest.store(2).unwrap();
        dest.store(3).unwrap();
        assert_eq!(dest, vec![1, 2, 3]);
    }

    #[test]
    fn test_map_upserts() {
        let mut dest: HashMap<&str, Vec<i32>> = HashMap::new();
        dest.store(Pair::new("a", vec![1])).unwrap();
        dest.store(Pair::new("a", vec![2])).unwrap();

        // sequence values are overwritten, never merged
        assert_eq!(dest.get("a"), Some(&vec![2]));

        let mut ordered: BTreeMap<i32, &str> = BTreeMap::new();
        ordered.store(Pair::new(2, "two")).unwrap();
        ordered.store(Pair::new(1, "one")).unwrap();
        ordered.store(Pair::new(2, "deux")).unwrap();
        assert_eq!(ordered.into_iter().collect::<Vec<_>>(), vec![(1, "one"), (2, "deux")]);
    }

    #[test]
    fn test_groups_concatenate() {
        let mut dest: HashMap<&str, Vec<i32>> = HashMap::new();
        dest.append_group("odd", vec![1]).unwrap();
        dest.append_group("even", vec![2]).unwrap();
        dest.append_group("odd", vec![3, 5]).unwrap();

        assert_eq!(dest["odd"], vec![1, 3, 5]);
        assert_eq!(dest["even"], vec![2]);

        let mut ordered: BTreeMap<bool, Vec<&str>> = BTreeMap::new();
        ordered.append_group(true, vec!["a"]).unwrap();
        ordered.append_group(true, vec!["b"]).unwrap();
        assert_eq!(ordered[&true], vec!["a", "b"]);
    }

    #[test]
    fn test_sequence_of_groups() {
        let mut dest: Vec<Pair<&str, Vec<i32>>> = Vec::new();
        dest.append_group("odd", vec![1]).unwrap();
        dest.append_group("odd", vec![3]).unwrap();
        assert_eq!(dest, vec![Pair::new("odd", vec![1]), Pair::new("odd", vec![3])]);
    }
}
