//! A min-priority queue keyed by a scoring function, used as the A* frontier.

use crate::search::Cost;
use std::cmp::Reverse;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A queued item tagged with its insertion number. Two entries are the same
/// entry only if they were inserted by the same `add` call.
struct Entry<T> {
    insertion: usize,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.insertion == other.insertion
    }
}

impl<T> Eq for Entry<T> {}

impl<T> Hash for Entry<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.insertion.hash(state);
    }
}

/// A queue in which the item with the lowest `key(item)` is always popped
/// first. Items with equal scores come out in insertion order.
///
/// Equal items may be queued more than once; each `add` is its own entry.
pub struct PriorityQueue<T, K>
where
    K: Fn(&T) -> Cost,
{
    items: ::priority_queue::PriorityQueue<Entry<T>, Reverse<(Cost, usize)>>,
    key: K,
    insertions: usize,
}

impl<T, K> PriorityQueue<T, K>
where
    K: Fn(&T) -> Cost,
{
    pub fn new(key: K) -> Self {
        Self {
            items: ::priority_queue::PriorityQueue::new(),
            key,
            insertions: 0,
        }
    }

    /// Create a queue holding `items`, added one by one.
    pub fn from_items(items: impl IntoIterator<Item = T>, key: K) -> Self {
        let mut queue = Self::new(key);
        for item in items {
            queue.add(item);
        }
        queue
    }

    pub fn add(&mut self, item: T) {
        let score = (self.key)(&item);
        let insertion = self.insertions;
        self.insertions += 1;
        self.items
            .push(Entry { insertion, item }, Reverse((score, insertion)));
    }

    /// Remove and return the item with the lowest score.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop().map(|(entry, _)| entry.item)
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.peek().map(|(entry, _)| &entry.item)
    }

    /// Score of the item [`PriorityQueue::peek`] would return.
    pub fn peek_score(&self) -> Option<Cost> {
        self.items.peek().map(|(_, Reverse((score, _)))| *score)
    }

    /// Whether any queued entry equals `item`. Scans the whole queue.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.iter().any(|(entry, _)| entry.item == *item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T, K> fmt::Debug for PriorityQueue<T, K>
where
    K: Fn(&T) -> Cost,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.items.len())
            .field("insertions", &self.insertions)
            .finish_non_exhaustive()
    }
}
