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

use crate::error::{Error, Result};
use crate::itemset::Itemset;
use itertools::Itertools;

/// Returns every subset of `items` whose length lies in `[min_len, max_len]`,
/// shortest first, each as a canonical `Itemset`.
///
/// Duplicate input items collapse before enumeration, so no subset is
/// emitted twice. Lengths beyond the number of distinct items produce
/// nothing; `min_len == 0` includes the empty set. The returned iterator is
/// lazy and `Clone`, so a clone taken before iterating restarts the sequence.
pub fn powerset<I, T>(
    items: T,
    min_len: usize,
    max_len: usize,
) -> Result<impl Iterator<Item = Itemset<I>> + Clone>
where
    I: Ord + Clone,
    T: IntoIterator<Item = I>,
{
    if min_len > max_len {
        return Err(Error::InvalidRange { min_len, max_len });
    }
    let items = Itemset::new(items).into_vec();
    let max_len = max_len.min(items.len());
    // When min_len > items.len() the range is empty.
    Ok((min_len..=max_len).flat_map(move |k| {
        items
            .clone()
            .into_iter()
            .combinations(k)
            .map(Itemset::from_sorted)
    }))
}
