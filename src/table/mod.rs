//! Weighted random selection tables.
//!
//! A [`WeightedTable`] holds (value, weight) entries and draws values with
//! probability proportional to weight: an entry with weight 10 drops twice
//! as often as one with weight 5, and an entry with weight 0 stays in the
//! table but never drops. The draw walks entries in insertion order against
//! a cumulative sum, which is the right shape for the small tables loot and
//! spawn systems use.
//!
//! Every table owns its random source. The default is entropy-seeded, and
//! [`WeightedTable::with_seed`] or [`WeightedTable::with_rng`] inject a
//! deterministic one, so tests never depend on shared global RNG state.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// One table entry: a payload value and its non-negative integer weight.
///
/// Serde-derived so hosts can define whole tables in data files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedEntry<T> {
    pub value: T,
    pub weight: u32,
}

/// A mutable collection of weighted entries supporting proportional random
/// draws, range-limited draws, and conditional draws without replacement.
///
/// The weight sum is recomputed with a full scan after every mutation;
/// tables are small and mutated rarely relative to how often they draw.
///
/// # Example
///
/// ```rust
/// use gambit::WeightedTable;
///
/// let mut drops = WeightedTable::with_seed(7);
/// drops.add("sword", 10);
/// drops.add("shield", 5);
/// drops.add("potion", 0);
///
/// assert_eq!(drops.weight_sum(), 15);
///
/// // potion has weight 0 and can never drop.
/// let item = drops.pick().copied();
/// assert!(matches!(item, Some("sword") | Some("shield")));
/// ```
#[derive(Debug)]
pub struct WeightedTable<T, R = StdRng> {
    entries: Vec<WeightedEntry<T>>,
    weight_sum: u64,
    rng: R,
}

impl<T> WeightedTable<T> {
    /// Create an empty table with an entropy-seeded random source.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create an empty table drawing from a deterministic seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<T> Default for WeightedTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(T, u32)> for WeightedTable<T> {
    fn from_iter<I: IntoIterator<Item = (T, u32)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<T, R: Rng> Extend<(T, u32)> for WeightedTable<T, R> {
    fn extend<I: IntoIterator<Item = (T, u32)>>(&mut self, pairs: I) {
        self.entries.extend(
            pairs
                .into_iter()
                .map(|(value, weight)| WeightedEntry { value, weight }),
        );
        self.recompute_sum();
    }
}

impl<T, R: Rng> WeightedTable<T, R> {
    /// Create an empty table drawing from the given random source.
    pub fn with_rng(rng: R) -> Self {
        Self {
            entries: Vec::new(),
            weight_sum: 0,
            rng,
        }
    }

    /// Append an entry.
    pub fn add(&mut self, value: T, weight: u32) {
        self.entries.push(WeightedEntry { value, weight });
        self.recompute_sum();
    }

    /// Replace the whole table with the given entries.
    pub fn replace_all<I: IntoIterator<Item = (T, u32)>>(&mut self, pairs: I) {
        self.entries.clear();
        self.extend(pairs);
    }

    /// Remove and return the entry at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds, like [`Vec::remove`].
    pub fn remove(&mut self, index: usize) -> WeightedEntry<T> {
        let entry = self.entries.remove(index);
        self.recompute_sum();
        entry
    }

    /// Draw one value with probability proportional to its weight, or `None`
    /// when the table is empty or every weight is 0.
    pub fn pick(&mut self) -> Option<&T> {
        self.draw_index().map(|index| &self.entries[index].value)
    }

    /// Like [`pick`](Self::pick), but returns the underlying entry so the
    /// caller also sees the weight that won.
    pub fn pick_entry(&mut self) -> Option<&WeightedEntry<T>> {
        self.draw_index().map(|index| &self.entries[index])
    }

    /// Draw from the contiguous slice of entries `[start, start + count)`,
    /// weighting only within that slice. Returns `None` when the slice's
    /// weights sum to 0.
    ///
    /// # Panics
    ///
    /// Panics if the range reaches past the end of the table; an
    /// out-of-range draw is a caller logic bug, not a data condition.
    pub fn pick_in_range(&mut self, start: usize, count: usize) -> Option<&T> {
        let slice = &self.entries[start..start + count];
        let local_sum: u64 = slice.iter().map(|e| u64::from(e.weight)).sum();
        if local_sum == 0 {
            return None;
        }

        let roll = self.rng.gen_range(1..=local_sum);
        let mut cumulative = 0u64;
        let mut winner = start;
        for (offset, entry) in slice.iter().enumerate() {
            cumulative += u64::from(entry.weight);
            if cumulative >= roll {
                winner = start + offset;
                break;
            }
        }
        Some(&self.entries[winner].value)
    }

    /// Repeatedly draw without replacement until `predicate` accepts a
    /// value, or `None` once the drawable pool is exhausted.
    ///
    /// Draws come from a working copy, so the table itself is never
    /// mutated, and each rejected candidate leaves the copy permanently:
    /// the call terminates within at most [`len`](Self::len) draws.
    pub fn pick_where<F>(&mut self, mut predicate: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut pool: Vec<(usize, u32)> = self
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (index, entry.weight))
            .collect();
        let mut local_sum = self.weight_sum;
        let mut found = None;

        while !pool.is_empty() && local_sum > 0 {
            let roll = self.rng.gen_range(1..=local_sum);
            let mut cumulative = 0u64;
            let mut drawn = 0;
            for (position, (_, weight)) in pool.iter().enumerate() {
                cumulative += u64::from(*weight);
                if cumulative >= roll {
                    drawn = position;
                    break;
                }
            }

            let (index, weight) = pool.remove(drawn);
            if predicate(&self.entries[index].value) {
                found = Some(index);
                break;
            }
            local_sum -= u64::from(weight);
        }

        found.map(|index| &self.entries[index].value)
    }

    /// Number of entries, zero-weight entries included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all entry weights.
    pub fn weight_sum(&self) -> u64 {
        self.weight_sum
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[WeightedEntry<T>] {
        &self.entries
    }

    /// All values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|entry| &entry.value)
    }

    fn draw_index(&mut self) -> Option<usize> {
        if self.weight_sum == 0 {
            return None;
        }
        let roll = self.rng.gen_range(1..=self.weight_sum);
        let mut cumulative = 0u64;
        for (index, entry) in self.entries.iter().enumerate() {
            cumulative += u64::from(entry.weight);
            if cumulative >= roll {
                return Some(index);
            }
        }
        None
    }

    fn recompute_sum(&mut self) {
        self.weight_sum = self.entries.iter().map(|e| u64::from(e.weight)).sum();
    }
}
