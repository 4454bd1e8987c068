use crate::item::Item;
use fnv::FnvHashMap;

/// Maps item names to compact `Item` ids and back.
pub struct Itemizer {
    next_item_id: u32,
    item_str_to_id: FnvHashMap<String, Item>,
    item_id_to_str: Vec<String>,
}

impl Itemizer {
    pub fn new() -> Itemizer {
        Itemizer {
            next_item_id: 1,
            item_str_to_id: FnvHashMap::default(),
            item_id_to_str: vec![],
        }
    }
    pub fn id_of(&mut self, item: &str) -> Item {
        if let Some(id) = self.item_str_to_id.get(item) {
            return *id;
        }
        let id = self.next_item_id;
        self.next_item_id += 1;
        self.item_str_to_id
            .insert(String::from(item), Item::with_id(id));
        self.item_id_to_str.push(String::from(item));
        debug_assert_eq!(self.item_id_to_str.len(), id as usize);
        Item::with_id(id)
    }
    pub fn str_of(&self, id: Item) -> &str {
        &self.item_id_to_str[id.as_index() - 1]
    }
    pub fn len(&self) -> usize {
        self.item_id_to_str.len()
    }
    pub fn is_empty(&self) -> bool {
        self.item_id_to_str.is_empty()
    }
}

impl Default for Itemizer {
    fn default() -> Itemizer {
        Itemizer::new()
    }
}
