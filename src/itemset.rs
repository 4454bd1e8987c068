use std::fmt;
use std::iter::FromIterator;
use std::slice;

/// A set of distinct items, stored sorted so that equal sets compare and
/// hash identically regardless of the order they were built from.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Itemset<I> {
    items: Vec<I>,
}

impl<I: Ord> Itemset<I> {
    pub fn new<T>(items: T) -> Itemset<I>
    where
        T: IntoIterator<Item = I>,
    {
        let mut items: Vec<I> = items.into_iter().collect();
        items.sort();
        items.dedup();
        Itemset { items }
    }

    // Caller guarantees `items` is strictly increasing.
    pub(crate) fn from_sorted(items: Vec<I>) -> Itemset<I> {
        debug_assert!(items.windows(2).all(|w| w[0] < w[1]));
        Itemset { items }
    }

    pub fn contains(&self, item: &I) -> bool {
        self.items.binary_search(item).is_ok()
    }
}

impl<I> Itemset<I> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[I] {
        &self.items
    }

    pub fn iter(&self) -> slice::Iter<'_, I> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<I> {
        self.items
    }
}

impl<I: Ord> FromIterator<I> for Itemset<I> {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Itemset<I> {
        Itemset::new(iter)
    }
}

impl<'a, I> IntoIterator for &'a Itemset<I> {
    type Item = &'a I;
    type IntoIter = slice::Iter<'a, I>;
    fn into_iter(self) -> slice::Iter<'a, I> {
        self.items.iter()
    }
}

// Formats like a tuple: (a, b, c).
impl<I: fmt::Display> fmt::Display for Itemset<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::Itemset;

    #[test]
    fn test_canonical_order() {
        let a = Itemset::new(vec!["b", "a", "c"]);
        let b = Itemset::new(vec!["c", "b", "a"]);
        assert_eq!(a, b);
        assert_eq!(a.as_slice(), &["a", "b", "c"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let cases = [
            (vec![], vec![]),
            (vec![1], vec![1]),
            (vec![1, 1], vec![1]),
            (vec![2, 1, 2, 1], vec![1, 2]),
            (vec![3, 2, 2, 1], vec![1, 2, 3]),
        ];
        for (input, expected) in cases.iter() {
            let itemset: Itemset<u32> = input.iter().cloned().collect();
            assert_eq!(itemset.as_slice(), &expected[..]);
        }
    }

    #[test]
    fn test_contains() {
        let abc = Itemset::new(vec!['c', 'a', 'b']);
        assert!(abc.contains(&'b'));
        assert!(!abc.contains(&'d'));
    }

    #[test]
    fn test_display() {
        assert_eq!(Itemset::new(vec!["milk", "cereal"]).to_string(), "(cereal, milk)");
        assert_eq!(Itemset::new(vec!["bread"]).to_string(), "(bread)");
    }
}
