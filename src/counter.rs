use fnv::FnvHashMap;
use std::hash::Hash;

pub struct Counter<T> {
    counter: FnvHashMap<T, u32>,
}

impl<T> Counter<T>
where
    T: Eq + Hash,
{
    pub fn new() -> Counter<T> {
        Counter {
            counter: FnvHashMap::default(),
        }
    }
    pub fn add(&mut self, item: T, count: u32) {
        *self.counter.entry(item).or_insert(0) += count;
    }
    pub fn len(&self) -> usize {
        self.counter.len()
    }

    // Consumes the counter, keeping only entries counted at least min_count times.
    pub fn into_items_with_count_at_least(self, min_count: u32) -> FnvHashMap<T, u32> {
        self.counter
            .into_iter()
            .filter(|&(_, count)| count >= min_count)
            .collect()
    }
}
