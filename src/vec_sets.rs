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

use std::cmp::Ordering;

// Assumes both slices are sorted and free of duplicates.
pub fn union<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    let mut c: Vec<T> = Vec::with_capacity(a.len() + b.len());
    let mut ap = 0;
    let mut bp = 0;
    while ap < a.len() && bp < b.len() {
        match a[ap].cmp(&b[bp]) {
            Ordering::Less => {
                c.push(a[ap].clone());
                ap += 1;
            }
            Ordering::Greater => {
                c.push(b[bp].clone());
                bp += 1;
            }
            Ordering::Equal => {
                c.push(a[ap].clone());
                ap += 1;
                bp += 1;
            }
        }
    }
    c.extend_from_slice(&a[ap..]);
    c.extend_from_slice(&b[bp..]);
    c
}

// Items of sorted `a` not in sorted `b`. Every item of `b` must be in `a`.
pub fn difference<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    let mut c: Vec<T> = Vec::with_capacity(a.len().saturating_sub(b.len()));
    let mut ap = 0;
    let mut bp = 0;
    while ap < a.len() && bp < b.len() {
        match a[ap].cmp(&b[bp]) {
            Ordering::Less => {
                c.push(a[ap].clone());
                ap += 1;
            }
            Ordering::Greater => panic!("Tried to remove item that's not in set!"),
            Ordering::Equal => {
                ap += 1;
                bp += 1;
            }
        }
    }
    assert!(bp == b.len(), "Tried to remove item that's not in set!");
    c.extend_from_slice(&a[ap..]);
    c
}

// True when sorted `a` and sorted `b` share no item.
pub fn is_disjoint<T: Ord>(a: &[T], b: &[T]) -> bool {
    let mut ap = 0;
    let mut bp = 0;
    while ap < a.len() && bp < b.len() {
        match a[ap].cmp(&b[bp]) {
            Ordering::Less => ap += 1,
            Ordering::Greater => bp += 1,
            Ordering::Equal => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_union() {
        use super::union;

        let test_cases: Vec<(Vec<u32>, Vec<u32>, Vec<u32>)> = vec![
            (vec![1, 2, 3], vec![4, 5, 6], vec![1, 2, 3, 4, 5, 6]),
            (vec![1, 2, 3], vec![3, 4, 5, 6], vec![1, 2, 3, 4, 5, 6]),
            (vec![2, 4], vec![1, 3, 5], vec![1, 2, 3, 4, 5]),
            (vec![], vec![1], vec![1]),
            (vec![1], vec![], vec![1]),
        ];

        for &(ref a, ref b, ref c) in &test_cases {
            assert_eq!(&union(a, b), c);
        }
    }

    #[test]
    fn test_difference() {
        use super::difference;
        let cases: Vec<(Vec<&str>, Vec<&str>, Vec<&str>)> = vec![
            (vec!["a"], vec!["a"], vec![]),
            (vec!["a", "b", "c"], vec!["a"], vec!["b", "c"]),
            (vec!["a", "b", "c"], vec!["b"], vec!["a", "c"]),
            (vec!["a", "b", "c"], vec!["a", "c"], vec!["b"]),
            (vec!["a", "b", "c"], vec![], vec!["a", "b", "c"]),
        ];

        for (a, b, c) in cases.into_iter() {
            assert_eq!(difference(&a, &b), c);
        }
    }

    #[test]
    #[should_panic]
    fn test_difference_of_missing_item() {
        super::difference(&[1, 2, 3], &[4]);
    }

    #[test]
    fn test_is_disjoint() {
        use super::is_disjoint;
        assert!(is_disjoint(&[1, 3, 5], &[2, 4]));
        assert!(is_disjoint::<u32>(&[], &[2, 4]));
        assert!(!is_disjoint(&[1, 3, 5], &[5]));
    }
}
