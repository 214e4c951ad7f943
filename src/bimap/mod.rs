//! Bidirectional one-to-one maps.
//!
//! A [`BiMap`] keeps a forward map and a reverse map in lockstep: for every
//! key mapped to a value, looking the value up yields the key. Game code
//! uses this for pairings that must stay unique in both directions, like
//! entity id to network id or spawn point to occupant.

use std::collections::HashMap;
use std::hash::Hash;

/// A double-keyed mapping enforcing a 1:1 relationship between two domains.
///
/// Inserting a duplicate key drops its old value's reverse entry; inserting
/// a duplicate value drops its old key's forward entry. Last write wins,
/// and both directions are cleaned up so the maps stay mutual inverses.
/// Iteration follows key-insertion order; re-inserting an existing key
/// keeps its position.
///
/// # Example
///
/// ```rust
/// use gambit::BiMap;
///
/// let mut ids = BiMap::new();
/// ids.insert("goblin", 1);
/// ids.insert("orc", 2);
///
/// assert_eq!(ids.get_by_key(&"goblin"), Some(&1));
/// assert_eq!(ids.get_by_value(&2), Some(&"orc"));
///
/// // 1 now belongs to the troll; the goblin's entry is gone entirely.
/// ids.insert("troll", 1);
/// assert!(!ids.contains_key(&"goblin"));
/// assert_eq!(ids.get_by_value(&1), Some(&"troll"));
/// ```
#[derive(Clone, Debug)]
pub struct BiMap<K, V> {
    forward: HashMap<K, V>,
    reverse: HashMap<V, K>,
    order: Vec<K>,
}

impl<K, V> Default for BiMap<K, V> {
    fn default() -> Self {
        Self {
            forward: HashMap::new(),
            reverse: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<K, V> BiMap<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pairing, returning the key's previous value if it had one.
    ///
    /// Both conflicting stale entries are evicted when the key and the
    /// value each arrive already paired elsewhere.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(old_key) = self.reverse.get(&value) {
            if *old_key != key {
                let old_key = old_key.clone();
                self.forward.remove(&old_key);
                self.order.retain(|k| *k != old_key);
            }
        }

        let previous = self.forward.insert(key.clone(), value.clone());
        match &previous {
            Some(old_value) => {
                if *old_value != value {
                    self.reverse.remove(old_value);
                }
            }
            None => self.order.push(key.clone()),
        }
        self.reverse.insert(value, key);
        previous
    }

    /// Look up the value paired with `key`.
    pub fn get_by_key(&self, key: &K) -> Option<&V> {
        self.forward.get(key)
    }

    /// Look up the key paired with `value`.
    pub fn get_by_value(&self, value: &V) -> Option<&K> {
        self.reverse.get(value)
    }

    /// Remove the pairing for `key`, returning its value.
    pub fn remove_by_key(&mut self, key: &K) -> Option<V> {
        let value = self.forward.remove(key)?;
        self.reverse.remove(&value);
        self.order.retain(|k| k != key);
        Some(value)
    }

    /// Remove the pairing for `value`, returning its key.
    pub fn remove_by_value(&mut self, value: &V) -> Option<K> {
        let key = self.reverse.remove(value)?;
        self.forward.remove(&key);
        self.order.retain(|k| *k != key);
        Some(key)
    }

    /// Whether `key` is paired.
    pub fn contains_key(&self, key: &K) -> bool {
        self.forward.contains_key(key)
    }

    /// Whether `value` is paired.
    pub fn contains_value(&self, value: &V) -> bool {
        self.reverse.contains_key(value)
    }

    /// Number of pairings.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Whether the map holds no pairings.
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Iterate pairings in key-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.order
            .iter()
            .filter_map(|key| self.forward.get(key).map(|value| (key, value)))
    }

    /// Iterate keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_links_both_directions() {
        let mut map = BiMap::new();
        assert_eq!(map.insert("goblin", 1), None);

        assert_eq!(map.get_by_key(&"goblin"), Some(&1));
        assert_eq!(map.get_by_value(&1), Some(&"goblin"));
        assert!(map.contains_key(&"goblin"));
        assert!(map.contains_value(&1));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn duplicate_key_drops_old_value_entirely() {
        let mut map = BiMap::new();
        map.insert("goblin", 1);
        let previous = map.insert("goblin", 2);

        assert_eq!(previous, Some(1));
        assert_eq!(map.get_by_key(&"goblin"), Some(&2));
        assert_eq!(map.get_by_value(&2), Some(&"goblin"));
        assert!(!map.contains_value(&1));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn duplicate_value_drops_old_key_entirely() {
        let mut map = BiMap::new();
        map.insert("goblin", 1);
        map.insert("orc", 1);

        assert!(!map.contains_key(&"goblin"));
        assert_eq!(map.get_by_value(&1), Some(&"orc"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn dual_conflict_cleans_up_both_stale_entries() {
        let mut map = BiMap::new();
        map.insert("goblin", 1);
        map.insert("orc", 2);

        // goblin already maps to 1, and 2 already belongs to orc. Both
        // stale halves must go.
        map.insert("goblin", 2);

        assert_eq!(map.len(), 1);
        assert_eq!(map.get_by_key(&"goblin"), Some(&2));
        assert_eq!(map.get_by_value(&2), Some(&"goblin"));
        assert!(!map.contains_key(&"orc"));
        assert!(!map.contains_value(&1));
    }

    #[test]
    fn reinserting_the_same_pair_is_stable() {
        let mut map = BiMap::new();
        map.insert("goblin", 1);
        let previous = map.insert("goblin", 1);

        assert_eq!(previous, Some(1));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get_by_key(&"goblin"), Some(&1));
        assert_eq!(map.get_by_value(&1), Some(&"goblin"));
    }

    #[test]
    fn remove_by_key_clears_both_directions() {
        let mut map = BiMap::new();
        map.insert("goblin", 1);

        assert_eq!(map.remove_by_key(&"goblin"), Some(1));
        assert!(!map.contains_key(&"goblin"));
        assert!(!map.contains_value(&1));
        assert!(map.is_empty());
        assert_eq!(map.remove_by_key(&"goblin"), None);
    }

    #[test]
    fn remove_by_value_clears_both_directions() {
        let mut map = BiMap::new();
        map.insert("goblin", 1);

        assert_eq!(map.remove_by_value(&1), Some("goblin"));
        assert!(map.is_empty());
        assert_eq!(map.remove_by_value(&1), None);
    }

    #[test]
    fn iteration_follows_key_insertion_order() {
        let mut map = BiMap::new();
        map.insert("goblin", 1);
        map.insert("orc", 2);
        map.insert("troll", 3);

        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, vec!["goblin", "orc", "troll"]);

        let pairs: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(pairs, vec![("goblin", 1), ("orc", 2), ("troll", 3)]);
    }

    #[test]
    fn reinserted_key_keeps_its_position() {
        let mut map = BiMap::new();
        map.insert("goblin", 1);
        map.insert("orc", 2);
        map.insert("goblin", 3);

        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, vec!["goblin", "orc"]);
    }

    #[test]
    fn evicted_key_leaves_the_iteration_order() {
        let mut map = BiMap::new();
        map.insert("goblin", 1);
        map.insert("orc", 2);
        map.insert("goblin", 2);

        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, vec!["goblin"]);
        assert_eq!(map.iter().count(), map.len());
    }
}
