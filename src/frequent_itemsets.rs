// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::counter::Counter;
use crate::error::{check_ratio, Error, Result};
use crate::itemset::Itemset;
use crate::powerset::powerset;
use fnv::FnvHashMap;
use log::{debug, info};
use std::hash::Hash;

/// Itemsets whose support reached the minimum support threshold, with
/// their support counts.
#[derive(Clone, Debug, PartialEq)]
pub struct FrequentItemsets<I: Eq + Hash> {
    counts: FnvHashMap<Itemset<I>, u32>,
    num_transactions: u32,
}

impl<I> FrequentItemsets<I>
where
    I: Ord + Hash + Clone,
{
    pub fn num_transactions(&self) -> u32 {
        self.num_transactions
    }

    /// Number of transactions containing `itemset`, if it is frequent.
    pub fn count(&self, itemset: &Itemset<I>) -> Option<u32> {
        self.counts.get(itemset).cloned()
    }

    /// Fraction of transactions containing `itemset`, if it is frequent.
    pub fn support(&self, itemset: &Itemset<I>) -> Option<f64> {
        self.count(itemset).map(|count| ratio(count, self.num_transactions))
    }

    pub fn contains(&self, itemset: &Itemset<I>) -> bool {
        self.counts.contains_key(itemset)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// (itemset, support) pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&Itemset<I>, f64)> {
        let n = self.num_transactions;
        self.counts
            .iter()
            .map(move |(itemset, &count)| (itemset, ratio(count, n)))
    }
}

fn ratio(count: u32, num_transactions: u32) -> f64 {
    count as f64 / num_transactions as f64
}

// Smallest count whose ratio over num_transactions is >= min_support.
// Searches around the estimate so the cut agrees exactly with comparing
// ratios in floating point.
fn min_count_for(min_support: f64, num_transactions: u32) -> u32 {
    let mut min_count = (min_support * num_transactions as f64).ceil() as u32;
    while min_count > 0 && ratio(min_count - 1, num_transactions) >= min_support {
        min_count -= 1;
    }
    while min_count < num_transactions && ratio(min_count, num_transactions) < min_support {
        min_count += 1;
    }
    min_count
}

/// Brute-force frequent itemset mining: counts every non-empty subset of
/// every transaction, then keeps itemsets with support >= `min_support`.
pub fn find_frequent_itemsets<I, T, U>(transactions: T, min_support: f64) -> Result<FrequentItemsets<I>>
where
    I: Ord + Hash + Clone,
    T: IntoIterator<Item = U>,
    U: IntoIterator<Item = I>,
{
    find_frequent_itemsets_up_to(transactions, min_support, None)
}

/// As `find_frequent_itemsets`, but only counts itemsets of at most
/// `max_length` items when a limit is given.
pub fn find_frequent_itemsets_up_to<I, T, U>(
    transactions: T,
    min_support: f64,
    max_length: Option<usize>,
) -> Result<FrequentItemsets<I>>
where
    I: Ord + Hash + Clone,
    T: IntoIterator<Item = U>,
    U: IntoIterator<Item = I>,
{
    check_ratio("support", min_support)?;
    if max_length == Some(0) {
        return Err(Error::InvalidRange {
            min_len: 1,
            max_len: 0,
        });
    }

    let mut support_counts: Counter<Itemset<I>> = Counter::new();
    let mut num_transactions: u32 = 0;
    for transaction in transactions {
        num_transactions += 1;
        // Duplicates collapse here, so each subset counts once per transaction.
        let transaction = Itemset::new(transaction);
        if transaction.is_empty() {
            continue;
        }
        let max_len = match max_length {
            Some(max_length) => max_length.min(transaction.len()),
            None => transaction.len(),
        };
        for subset in powerset(transaction.into_vec(), 1, max_len)? {
            support_counts.add(subset, 1);
        }
    }
    if num_transactions == 0 {
        return Err(Error::NoTransactions);
    }
    debug!(
        "Counted {} distinct itemsets in {} transactions",
        support_counts.len(),
        num_transactions
    );

    let min_count = min_count_for(min_support, num_transactions);
    let counts = support_counts.into_items_with_count_at_least(min_count);
    info!(
        "Found {} frequent itemsets with support >= {} (count >= {})",
        counts.len(),
        min_support,
        min_count
    );

    Ok(FrequentItemsets {
        counts,
        num_transactions,
    })
}
