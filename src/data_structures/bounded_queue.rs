use std::collections::{HashMap, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

/// Block-bucketed batch priority structure for the BMSSP recursion
///
/// Holds `(key, value)` pairs with value strictly below a fixed upper bound,
/// grouped into blocks whose value ranges ascend from front to back. Within
/// a block nothing is sorted; the structure never totally orders its
/// contents. Three operations drive the algorithm:
///
/// - [`insert`](BoundedQueue::insert) places one pair into the block whose
///   range covers it, splitting oversized blocks at their median;
/// - [`batch_prepend`](BoundedQueue::batch_prepend) admits a batch the
///   caller guarantees to sit below everything resident, so it forms new
///   front blocks without a single comparison against existing content;
/// - [`pull`](BoundedQueue::pull) removes the batch of globally smallest
///   pairs, ties kept together, plus a boundary strictly above everything
///   it returned.
///
/// Prepended and inserted blocks live in separate runs, and an insert may
/// undercut a batch prepended before it, so extraction always compares the
/// fronts of both runs. Decrease-key is lazy: a live-value map records the
/// smallest value per key, superseded physical entries stay where they are
/// and fall out when a pull reaches them. This is the structure of Lemma
/// 3.3 in Duan et al. (2025), which replaces the binary heap of textbook
/// Dijkstra.
#[derive(Debug)]
pub struct BoundedQueue<K, V>
where
    K: Eq + Hash + Copy + Ord + Debug,
    V: Copy + Ord + Debug,
{
    /// Maximum pairs per block before a split
    block_size: usize,

    /// Exclusive upper bound on admitted values
    bound: V,

    /// Smallest admitted value per key; entries disagreeing with this map
    /// are stale
    live: HashMap<K, V>,

    /// Blocks admitted by batch_prepend, each batch below everything that
    /// was resident at admission time
    prepended: VecDeque<Block<K, V>>,

    /// Individually inserted blocks, ascending by `upper`
    inserted: VecDeque<Block<K, V>>,
}

#[derive(Debug, Clone)]
struct Block<K, V> {
    pairs: Vec<(K, V)>,

    /// Largest value this block may hold
    upper: V,
}

fn pair_order<K: Ord, V: Ord>(a: &(K, V), b: &(K, V)) -> std::cmp::Ordering {
    a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0))
}

impl<K, V> BoundedQueue<K, V>
where
    K: Eq + Hash + Copy + Ord + Debug,
    V: Copy + Ord + Debug,
{
    /// Creates an empty queue with the given block size and upper bound
    pub fn new(block_size: usize, bound: V) -> Self {
        let block_size = block_size.max(1);
        let mut inserted = VecDeque::new();
        inserted.push_back(Block {
            pairs: Vec::new(),
            upper: bound,
        });
        BoundedQueue {
            block_size,
            bound,
            live: HashMap::new(),
            prepended: VecDeque::new(),
            inserted,
        }
    }

    /// Returns true if no live pair is resident
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Returns the number of live pairs
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Returns the upper bound the queue was created with
    pub fn bound(&self) -> V {
        self.bound
    }

    /// Returns the live value for a key, if resident
    pub fn get(&self, key: &K) -> Option<V> {
        self.live.get(key).copied()
    }

    /// Inserts one pair; a key already resident with a smaller or equal
    /// value wins and the call is a no-op. Values at or above the bound are
    /// not admitted.
    pub fn insert(&mut self, key: K, value: V) {
        if value >= self.bound {
            return;
        }
        match self.live.get(&key) {
            Some(&resident) if resident <= value => return,
            _ => {}
        }
        self.live.insert(key, value);
        self.file_into_inserted(key, value);
    }

    /// Admits a batch of pairs that all sit below every value currently
    /// resident (caller-guaranteed). Nothing in the batch is compared
    /// against existing content; it is median-partitioned into new front
    /// blocks. Per-key duplicates keep the smallest value; pairs at or
    /// above the bound, or superseded by a smaller resident value, are
    /// skipped.
    pub fn batch_prepend(&mut self, pairs: Vec<(K, V)>) {
        let mut fresh: HashMap<K, V> = HashMap::with_capacity(pairs.len());
        for (key, value) in pairs {
            if value >= self.bound {
                continue;
            }
            if let Some(&resident) = self.live.get(&key) {
                if resident <= value {
                    continue;
                }
            }
            match fresh.get(&key) {
                Some(&seen) if seen <= value => {}
                _ => {
                    fresh.insert(key, value);
                }
            }
        }
        if fresh.is_empty() {
            return;
        }

        for (&key, &value) in &fresh {
            self.live.insert(key, value);
        }

        let mut blocks = Vec::new();
        self.partition_ascending(fresh.into_iter().collect(), &mut blocks);
        for block in blocks.into_iter().rev() {
            self.prepended.push_front(block);
        }
    }

    /// Removes and returns the live pairs with the globally smallest
    /// values, plus the boundary: the smallest value left resident, or the
    /// bound if the queue emptied. The batch holds up to `max` pairs but
    /// grows past `max` rather than split pairs tying with its largest
    /// value, so every value returned is strictly below the boundary and
    /// every value left behind is at least the boundary. Order within the
    /// batch is unspecified.
    pub fn pull(&mut self, max: usize) -> (Vec<(K, V)>, V) {
        let mut taken: Vec<(K, V)> = Vec::new();

        while taken.len() < max {
            match self.pop_min_front_block() {
                Some(block) => self.collect_live(block, &mut taken),
                None => break,
            }
        }
        if taken.is_empty() {
            let boundary = self.min_resident_value().unwrap_or(self.bound);
            return (taken, boundary);
        }

        // Absorb further blocks while anything resident still ties with
        // the cut, so equal values never straddle the boundary.
        let mut cut = Self::cut_value(&mut taken, max);
        while self.min_resident_value().map_or(false, |m| m <= cut) {
            match self.pop_min_front_block() {
                Some(block) => self.collect_live(block, &mut taken),
                None => break,
            }
            cut = Self::cut_value(&mut taken, max);
        }

        // Keep the cut and its ties; the overshoot files back into the
        // inserted run by value range, keeping both runs ordered.
        let mut kept: Vec<(K, V)> = Vec::with_capacity(taken.len());
        for (key, value) in taken {
            if value <= cut {
                kept.push((key, value));
            } else {
                self.file_into_inserted(key, value);
            }
        }
        for &(key, _) in &kept {
            self.live.remove(&key);
        }
        let boundary = self.min_resident_value().unwrap_or(self.bound);
        (kept, boundary)
    }

    /// Appends a block's still-live pairs to `taken`
    fn collect_live(&self, block: Block<K, V>, taken: &mut Vec<(K, V)>) {
        for (key, value) in block.pairs {
            if self.live.get(&key) == Some(&value) {
                taken.push((key, value));
            }
        }
    }

    /// Value of the largest pair a batch of `max` may keep: the `max`-th
    /// smallest collected, or the largest collected when there are fewer
    fn cut_value(taken: &mut [(K, V)], max: usize) -> V {
        if taken.len() <= max {
            let mut cut = taken[0].1;
            for &(_, value) in &taken[1..] {
                if value > cut {
                    cut = value;
                }
            }
            cut
        } else {
            taken.select_nth_unstable_by(max - 1, pair_order);
            taken[max - 1].1
        }
    }

    /// Pops the front block holding the smallest live value, from
    /// whichever run has it
    fn pop_min_front_block(&mut self) -> Option<Block<K, V>> {
        self.discard_stale_fronts();
        let prepended_min = self
            .prepended
            .front()
            .and_then(|block| Self::block_live_min(&self.live, block));
        let inserted_min = self
            .inserted
            .front()
            .and_then(|block| Self::block_live_min(&self.live, block));
        match (prepended_min, inserted_min) {
            (Some(p), Some(i)) if i < p => self.inserted.pop_front(),
            (Some(_), _) => self.prepended.pop_front(),
            (None, Some(_)) => self.inserted.pop_front(),
            (None, None) => None,
        }
    }

    /// Smallest live value still resident in either run
    fn min_resident_value(&mut self) -> Option<V> {
        self.discard_stale_fronts();
        let prepended_min = self
            .prepended
            .front()
            .and_then(|block| Self::block_live_min(&self.live, block));
        let inserted_min = self
            .inserted
            .front()
            .and_then(|block| Self::block_live_min(&self.live, block));
        match (prepended_min, inserted_min) {
            (Some(p), Some(i)) => Some(if i < p { i } else { p }),
            (Some(p), None) => Some(p),
            (None, other) => other,
        }
    }

    /// Drops fully stale front blocks so each run's front carries its
    /// smallest live value
    fn discard_stale_fronts(&mut self) {
        loop {
            let stale = matches!(
                self.prepended.front(),
                Some(block) if Self::block_live_min(&self.live, block).is_none()
            );
            if stale {
                self.prepended.pop_front();
                continue;
            }
            let stale = matches!(
                self.inserted.front(),
                Some(block) if Self::block_live_min(&self.live, block).is_none()
            );
            if stale {
                self.inserted.pop_front();
                continue;
            }
            break;
        }
    }

    /// Smallest value in a block that still matches the live map
    fn block_live_min(live: &HashMap<K, V>, block: &Block<K, V>) -> Option<V> {
        let mut min: Option<V> = None;
        for &(key, value) in &block.pairs {
            if live.get(&key) == Some(&value) && min.map_or(true, |m| value < m) {
                min = Some(value);
            }
        }
        min
    }

    /// Files one physical pair into the inserted run by value range
    fn file_into_inserted(&mut self, key: K, value: V) {
        if self.inserted.is_empty() {
            self.inserted.push_back(Block {
                pairs: Vec::new(),
                upper: self.bound,
            });
        }
        // First block whose range covers the value; the last block's upper
        // equals the bound, so the search always lands.
        let idx = self
            .inserted
            .iter()
            .position(|block| value <= block.upper)
            .unwrap_or(self.inserted.len() - 1);
        self.inserted[idx].pairs.push((key, value));

        if self.inserted[idx].pairs.len() > self.block_size {
            self.split_inserted_block(idx);
        }
    }

    /// Splits an oversized inserted block at its median value, keeping the
    /// block sequence ordered
    fn split_inserted_block(&mut self, idx: usize) {
        let block = &mut self.inserted[idx];
        block.pairs.sort_unstable_by(pair_order);
        let mid = block.pairs.len() / 2;
        let median = block.pairs[mid].1;

        let right = Block {
            pairs: block.pairs.split_off(mid),
            upper: block.upper,
        };
        block.upper = median;
        self.inserted.insert(idx + 1, right);
    }

    /// Median-partitions a batch into blocks of at most `block_size`,
    /// emitted in ascending value order. Each level of the recursion is a
    /// linear selection, never a full sort of the batch.
    fn partition_ascending(&self, mut pairs: Vec<(K, V)>, out: &mut Vec<Block<K, V>>) {
        if pairs.is_empty() {
            return;
        }
        if pairs.len() <= self.block_size {
            let mut upper = pairs[0].1;
            for &(_, value) in &pairs[1..] {
                if value > upper {
                    upper = value;
                }
            }
            out.push(Block { pairs, upper });
            return;
        }
        let mid = pairs.len() / 2;
        pairs.select_nth_unstable_by(mid, pair_order);
        let right = pairs.split_off(mid);
        self.partition_ascending(pairs, out);
        self.partition_ascending(right, out);
    }
}
