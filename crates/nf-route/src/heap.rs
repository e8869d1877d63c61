//! Binary min-heap priority queue keyed by tentative distance.

use nf_core::{Real, RouterId, UNREACHED};

use crate::error::HeapError;

#[derive(Debug, Clone, Copy)]
struct Entry {
    router: RouterId,
    key: Real,
}

/// Binary min-heap of routers ordered by ascending key.
///
/// The heap keeps a reverse lookup from router to its current slot in the
/// backing array, updated on every swap. That lookup is what makes
/// `decrease_key` safe after the heap has been restructured: without it,
/// addressing a router's position once extractions and sifts have moved
/// entries around would be guesswork.
///
/// Ties between equal keys resolve by slot position (left child first);
/// callers only observe that the order is deterministic.
#[derive(Debug, Default)]
pub struct MinHeap {
    entries: Vec<Entry>,
    /// router arena index -> current slot in `entries`
    slots: Vec<Option<usize>>,
}

impl MinHeap {
    /// O(n) bottom-up construction from arbitrary (router, key) pairs.
    pub fn build(items: impl IntoIterator<Item = (RouterId, Real)>) -> Self {
        let entries: Vec<Entry> = items
            .into_iter()
            .map(|(router, key)| Entry { router, key })
            .collect();
        let mut slots = Vec::new();
        for (i, entry) in entries.iter().enumerate() {
            Self::reserve_slot(&mut slots, entry.router);
            slots[entry.router.idx()] = Some(i);
        }

        let mut heap = Self { entries, slots };
        // sift down from the parent of the last leaf to the root
        let mut i = heap.len() / 2;
        while i > 0 {
            i -= 1;
            heap.sift_down(i);
        }
        heap
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn peek(&self) -> Option<(RouterId, Real)> {
        self.entries.first().map(|e| (e.router, e.key))
    }

    /// Current key of a queued router, if it is queued.
    pub fn key_of(&self, router: RouterId) -> Option<Real> {
        let slot = self.slot_of(router)?;
        Some(self.entries[slot].key)
    }

    /// Remove and return the router with the smallest key.
    pub fn extract_min(&mut self) -> Result<(RouterId, Real), HeapError> {
        if self.entries.is_empty() {
            return Err(HeapError::Empty);
        }
        let last = self.entries.len() - 1;
        self.swap(0, last);
        let min = self.entries.pop().expect("heap is non-empty");
        self.slots[min.router.idx()] = None;
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Ok((min.router, min.key))
    }

    /// Lower a queued router's key and restore heap order by sifting up.
    ///
    /// Rejected without mutation when the new key exceeds the current one,
    /// or when the router is not queued.
    pub fn decrease_key(&mut self, router: RouterId, key: Real) -> Result<(), HeapError> {
        let slot = self
            .slot_of(router)
            .ok_or(HeapError::NotQueued { router })?;
        let current = self.entries[slot].key;
        if key > current {
            return Err(HeapError::KeyIncrease {
                current,
                requested: key,
            });
        }
        self.entries[slot].key = key;
        self.sift_up(slot);
        Ok(())
    }

    /// Queue a router: append a +∞ sentinel entry, then decrease-key it to
    /// its real value.
    pub fn insert(&mut self, router: RouterId, key: Real) -> Result<(), HeapError> {
        if self.slot_of(router).is_some() {
            return Err(HeapError::AlreadyQueued { router });
        }
        let slot = self.entries.len();
        self.entries.push(Entry {
            router,
            key: UNREACHED,
        });
        Self::reserve_slot(&mut self.slots, router);
        self.slots[router.idx()] = Some(slot);
        self.decrease_key(router, key)
    }

    fn slot_of(&self, router: RouterId) -> Option<usize> {
        self.slots.get(router.idx()).copied().flatten()
    }

    fn reserve_slot(slots: &mut Vec<Option<usize>>, router: RouterId) {
        if slots.len() <= router.idx() {
            slots.resize(router.idx() + 1, None);
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.slots[self.entries[a].router.idx()] = Some(a);
        self.slots[self.entries[b].router.idx()] = Some(b);
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.entries[parent].key <= self.entries[i].key {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < self.entries.len() && self.entries[left].key < self.entries[smallest].key {
                smallest = left;
            }
            if right < self.entries.len() && self.entries[right].key < self.entries[smallest].key {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }
}
