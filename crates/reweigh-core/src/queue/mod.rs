//! Min-priority queue with decrease-key.
//!
//! Built on [`BinaryHeap`] with lazy deletion: a decrease pushes a fresh
//! heap entry and stale entries are skipped on extraction. Each entry carries
//! a sequence number taken when the key reached its current priority, and
//! equal priorities extract in sequence order (FIFO). Dijkstra's path
//! reconstruction relies on this for deterministic tie-breaking.

use reweigh_common::types::{VertexId, Weight};
use reweigh_common::utils::error::QueueError;
use reweigh_common::utils::hash::FxHashMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry ordered so that [`BinaryHeap`] pops the smallest
/// `(priority, seq)` first.
#[derive(Debug, Clone)]
struct HeapEntry<K> {
    priority: Weight,
    seq: u64,
    key: K,
}

impl<K> PartialEq for HeapEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K> Eq for HeapEntry<K> {}

impl<K> PartialOrd for HeapEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K> Ord for HeapEntry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-priority queue keyed by vertex.
#[derive(Debug, Clone)]
pub struct PriorityQueue<K: VertexId> {
    /// Heap entries, possibly stale.
    heap: BinaryHeap<HeapEntry<K>>,
    /// Live `(priority, seq)` per queued key.
    live: FxHashMap<K, (Weight, u64)>,
    /// Next sequence number.
    next_seq: u64,
}

impl<K: VertexId> PriorityQueue<K> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            live: FxHashMap::default(),
            next_seq: 0,
        }
    }

    /// Creates an empty queue with room for `capacity` keys.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            live: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            next_seq: 0,
        }
    }

    /// Inserts a key.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::DuplicateKey`] if the key is already queued.
    pub fn insert(&mut self, key: K, priority: Weight) -> Result<(), QueueError> {
        if self.live.contains_key(&key) {
            return Err(QueueError::DuplicateKey);
        }
        self.push(key, priority);
        Ok(())
    }

    /// Lowers the priority of a queued key.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::KeyNotFound`] if the key is not queued, or
    /// [`QueueError::PriorityNotLower`] unless `priority` is strictly lower
    /// than the current one. The queue is unchanged on error.
    pub fn decrease_priority(&mut self, key: &K, priority: Weight) -> Result<(), QueueError> {
        let &(current, _) = self.live.get(key).ok_or(QueueError::KeyNotFound)?;
        if priority.total_cmp(&current) != Ordering::Less {
            return Err(QueueError::PriorityNotLower);
        }
        self.push(key.clone(), priority);
        Ok(())
    }

    /// Removes and returns the key with the lowest priority.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::EmptyQueue`] if no keys are queued.
    pub fn extract_min(&mut self) -> Result<(K, Weight), QueueError> {
        while let Some(entry) = self.heap.pop() {
            if self.is_live(&entry) {
                self.live.remove(&entry.key);
                return Ok((entry.key, entry.priority));
            }
        }
        Err(QueueError::EmptyQueue)
    }

    /// Returns the key with the lowest priority without removing it.
    pub fn peek_min(&mut self) -> Option<(&K, Weight)> {
        while let Some(entry) = self.heap.peek() {
            if self.is_live(entry) {
                break;
            }
            self.heap.pop();
        }
        self.heap.peek().map(|entry| (&entry.key, entry.priority))
    }

    /// Returns the current priority of a queued key.
    #[must_use]
    pub fn priority(&self, key: &K) -> Option<Weight> {
        self.live.get(key).map(|&(priority, _)| priority)
    }

    /// Returns true if the key is queued.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.live.contains_key(key)
    }

    /// Returns the number of queued keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Returns true if no keys are queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    fn push(&mut self, key: K, priority: Weight) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.live.insert(key.clone(), (priority, seq));
        self.heap.push(HeapEntry { priority, seq, key });
    }

    fn is_live(&self, entry: &HeapEntry<K>) -> bool {
        self.live
            .get(&entry.key)
            .is_some_and(|&(_, seq)| seq == entry.seq)
    }
}

impl<K: VertexId> Default for PriorityQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_extract_in_priority_order() {
        let mut queue = PriorityQueue::new();
        queue.insert("c", 3.0).unwrap();
        queue.insert("a", 1.0).unwrap();
        queue.insert("b", 2.0).unwrap();

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.extract_min().unwrap(), ("a", 1.0));
        assert_eq!(queue.extract_min().unwrap(), ("b", 2.0));
        assert_eq!(queue.extract_min().unwrap(), ("c", 3.0));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_extract_from_empty_queue() {
        let mut queue: PriorityQueue<u32> = PriorityQueue::new();
        assert_eq!(queue.extract_min(), Err(QueueError::EmptyQueue));
    }

    #[test]
    fn test_ties_extract_fifo() {
        let mut queue = PriorityQueue::new();
        for key in ["x", "y", "z"] {
            queue.insert(key, 5.0).unwrap();
        }

        assert_eq!(queue.extract_min().unwrap().0, "x");
        assert_eq!(queue.extract_min().unwrap().0, "y");
        assert_eq!(queue.extract_min().unwrap().0, "z");
    }

    #[test]
    fn test_decrease_reorders_and_joins_tie_at_the_back() {
        let mut queue = PriorityQueue::new();
        queue.insert("a", 1.0).unwrap();
        queue.insert("b", 9.0).unwrap();

        queue.decrease_priority(&"b", 1.0).unwrap();
        assert_eq!(queue.priority(&"b"), Some(1.0));

        // "b" reached priority 1.0 after "a" did
        assert_eq!(queue.extract_min().unwrap(), ("a", 1.0));
        assert_eq!(queue.extract_min().unwrap(), ("b", 1.0));
        assert_eq!(queue.extract_min(), Err(QueueError::EmptyQueue));
    }

    #[test]
    fn test_misuse_errors() {
        let mut queue = PriorityQueue::new();
        queue.insert(1, 4.0).unwrap();

        assert_eq!(queue.insert(1, 0.0), Err(QueueError::DuplicateKey));
        assert_eq!(queue.decrease_priority(&2, 0.0), Err(QueueError::KeyNotFound));
        assert_eq!(queue.decrease_priority(&1, 4.0), Err(QueueError::PriorityNotLower));
        assert_eq!(queue.decrease_priority(&1, 7.0), Err(QueueError::PriorityNotLower));
        assert_eq!(queue.priority(&1), Some(4.0));
    }

    #[test]
    fn test_peek_skips_stale_entries() {
        let mut queue = PriorityQueue::new();
        queue.insert('a', 2.0).unwrap();
        queue.insert('b', 3.0).unwrap();
        queue.decrease_priority(&'b', 1.0).unwrap();

        assert_eq!(queue.peek_min(), Some((&'b', 1.0)));
        assert_eq!(queue.extract_min().unwrap(), ('b', 1.0));
        assert_eq!(queue.peek_min(), Some((&'a', 2.0)));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_negative_priorities() {
        let mut queue = PriorityQueue::new();
        queue.insert(0, 0.0).unwrap();
        queue.insert(1, -2.5).unwrap();

        assert_eq!(queue.extract_min().unwrap(), (1, -2.5));
    }

    proptest! {
        #[test]
        fn prop_extracts_sorted_and_stable(
            priorities in prop::collection::vec(0u8..8, 0..64),
            decreases in prop::collection::vec((0usize..64, 0u8..8), 0..32),
        ) {
            let mut queue = PriorityQueue::new();
            let mut expected: Vec<(f64, u64, usize)> = Vec::new();
            let mut seq = 0u64;
            for (key, &p) in priorities.iter().enumerate() {
                queue.insert(key, f64::from(p)).unwrap();
                expected.push((f64::from(p), seq, key));
                seq += 1;
            }
            for &(key, p) in &decreases {
                let p = f64::from(p);
                let Some(slot) = expected.iter_mut().find(|e| e.2 == key) else {
                    prop_assert_eq!(queue.decrease_priority(&key, p), Err(QueueError::KeyNotFound));
                    continue;
                };
                if p < slot.0 {
                    queue.decrease_priority(&key, p).unwrap();
                    *slot = (p, seq, key);
                    seq += 1;
                }
            }
            expected.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

            for (p, _, key) in expected {
                prop_assert_eq!(queue.extract_min().unwrap(), (key, p));
            }
            prop_assert!(queue.is_empty());
        }
    }
}
