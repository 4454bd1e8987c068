use crate::itemizer::Itemizer;

/// Interned item; ids are handed out by an `Itemizer` starting at 1.
#[derive(Copy, Clone, Hash, PartialOrd, PartialEq, Eq, Ord, Debug)]
pub struct Item {
    id: u32,
}

impl Item {
    pub fn with_id(id: u32) -> Item {
        Item { id }
    }
    pub fn as_index(&self) -> usize {
        self.id as usize
    }
    pub fn item_vec_to_string(items: &[Item], itemizer: &Itemizer) -> String {
        let mut a: Vec<&str> = items.iter().map(|&id| itemizer.str_of(id)).collect();
        ensure_sorted(&mut a);
        a.join(" ")
    }
}

// If all items in the itemset convert to an integer, order by that integer,
// otherwise order lexicographically.
fn ensure_sorted(a: &mut Vec<&str>) {
    let as_ints: Option<Vec<u64>> = a.iter().map(|x| x.parse::<u64>().ok()).collect();
    match as_ints {
        Some(_) => a.sort_by_key(|x| x.parse::<u64>().unwrap_or(0)),
        None => a.sort(),
    }
}
