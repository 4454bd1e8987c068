use crate::item::Item;

/// Per-item lists of the ids of the transactions containing that item.
/// Computes itemset support by intersecting the lists, independently of
/// the brute-force miner, so it can be used to cross-check mining results.
pub struct Index {
    index: Vec<Vec<usize>>,
    transaction_count: usize,
}

impl Index {
    pub fn new() -> Index {
        Index {
            index: Vec::new(),
            transaction_count: 0,
        }
    }
    pub fn insert(&mut self, transaction: &[Item]) {
        let tid = self.transaction_count;
        self.transaction_count += 1;
        for item in transaction {
            let item_index = item.as_index();
            if self.index.len() <= item_index {
                self.index.resize(item_index + 1, vec![]);
            }
            let tids = &mut self.index[item_index];
            // Repeated items in one transaction count once.
            if tids.last() != Some(&tid) {
                tids.push(tid);
            }
        }
    }
    pub fn transaction_count(&self) -> usize {
        self.transaction_count
    }
    pub fn support(&self, itemset: &[Item]) -> f64 {
        if itemset.is_empty() || self.transaction_count == 0 {
            return 0.0;
        }

        let mut tid_lists: Vec<&[usize]> = Vec::with_capacity(itemset.len());
        for item in itemset {
            match self.index.get(item.as_index()) {
                Some(tids) => tid_lists.push(tids),
                None => return 0.0,
            }
        }
        // Walk the shortest list; every other list must hold each tid too.
        tid_lists.sort_by_key(|tids| tids.len());
        let (shortest, rest) = tid_lists.split_at(1);
        let count = shortest[0]
            .iter()
            .filter(|&&tid| rest.iter().all(|tids| tids.binary_search(&tid).is_ok()))
            .count();

        (count as f64) / (self.transaction_count as f64)
    }
}

impl Default for Index {
    fn default() -> Index {
        Index::new()
    }
}
