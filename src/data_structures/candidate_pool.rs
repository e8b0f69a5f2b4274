use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use std::fmt::Debug;

/// Paths generated by Yen's algorithm that have not been accepted yet.
///
/// The heap orders by `(cost, node sequence)`, so equal costs resolve to the
/// lexicographically smaller sequence. `members` mirrors the heap contents for
/// constant-time duplicate checks.
#[derive(Debug)]
pub struct CandidatePool<W>
where
    W: Ord + Copy + Debug,
{
    heap: BinaryHeap<Reverse<(W, Vec<usize>)>>,
    members: HashSet<Vec<usize>>,
}

impl<W> CandidatePool<W>
where
    W: Ord + Copy + Debug,
{
    pub fn new() -> Self {
        CandidatePool {
            heap: BinaryHeap::new(),
            members: HashSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, nodes: &[usize]) -> bool {
        self.members.contains(nodes)
    }

    /// Queues a path; returns false if the same node sequence is already queued
    pub fn push(&mut self, cost: W, nodes: Vec<usize>) -> bool {
        if self.members.contains(&nodes) {
            return false;
        }
        self.members.insert(nodes.clone());
        self.heap.push(Reverse((cost, nodes)));
        true
    }

    /// Removes the cheapest path (lexicographically smallest on cost ties)
    pub fn pop(&mut self) -> Option<(W, Vec<usize>)> {
        let Reverse((cost, nodes)) = self.heap.pop()?;
        self.members.remove(&nodes);
        Some((cost, nodes))
    }

    /// Node sequences currently queued, in no particular order
    pub fn paths(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.heap.iter().map(|Reverse((_, nodes))| nodes.as_slice())
    }
}

impl<W> Default for CandidatePool<W>
where
    W: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

