use crate::error::{Error, Result};
use crate::itemset::Itemset;
use crate::vec_sets::difference;

// Itemsets this large have more splits than a u64 mask can count.
const MAX_SPLIT_LEN: usize = 63;

/// Iterator over every `(X, Y)` with `X` and `Y` non-empty, disjoint, and
/// `X ∪ Y` equal to the split itemset. Both orientations are produced, so
/// an itemset of `n` items yields `2^n - 2` pairs.
#[derive(Clone, Debug)]
pub struct BinarySplits<'a, I> {
    items: &'a [I],
    mask: u64,
    end: u64,
}

pub fn binary_split<I>(itemset: &Itemset<I>) -> Result<BinarySplits<'_, I>>
where
    I: Ord + Clone,
{
    let len = itemset.len();
    if len < 2 || len > MAX_SPLIT_LEN {
        return Err(Error::InvalidInput { len });
    }
    Ok(BinarySplits {
        items: itemset.as_slice(),
        mask: 1,
        end: (1u64 << len) - 1,
    })
}

impl<'a, I> Iterator for BinarySplits<'a, I>
where
    I: Ord + Clone,
{
    type Item = (Itemset<I>, Itemset<I>);

    fn next(&mut self) -> Option<(Itemset<I>, Itemset<I>)> {
        if self.mask >= self.end {
            return None;
        }
        let mask = self.mask;
        self.mask += 1;
        let antecedent: Vec<I> = self
            .items
            .iter()
            .enumerate()
            .filter(|&(i, _)| mask & (1 << i) != 0)
            .map(|(_, item)| item.clone())
            .collect();
        let consequent = difference(self.items, &antecedent);
        Some((
            Itemset::from_sorted(antecedent),
            Itemset::from_sorted(consequent),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.saturating_sub(self.mask) as usize;
        (remaining, Some(remaining))
    }
}

impl<'a, I> ExactSizeIterator for BinarySplits<'a, I> where I: Ord + Clone {}
