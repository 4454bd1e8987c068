//! Brute force frequent itemset mining and association rule generation.
//!
//! Every subset of every transaction is counted, itemsets below the minimum
//! support are dropped, and every frequent itemset is split every possible
//! way into `antecedent => consequent` rules.
//!
//! ```
//! use brute_arm::{generate_rules, Itemset};
//!
//! let transactions = vec![
//!     vec!["bread", "yogurt"],
//!     vec!["bread", "milk", "cereal", "eggs"],
//!     vec!["yogurt", "milk", "cereal", "cheese"],
//!     vec!["bread", "yogurt", "milk", "cereal"],
//!     vec!["bread", "yogurt", "milk", "cheese"],
//! ];
//! let rules = generate_rules(transactions, 0.6, 1.0).unwrap();
//! let rule = rules
//!     .get(&Itemset::new(vec!["cereal"]), &Itemset::new(vec!["milk"]))
//!     .unwrap();
//! assert_eq!(rule.confidence(), 1.0);
//! assert_eq!(rule.lift(), 1.25);
//! ```

mod binary_split;
mod counter;
mod error;
mod frequent_itemsets;
mod generate_rules;
mod index;
mod item;
mod itemizer;
mod itemset;
mod powerset;
mod rule;
mod transaction_reader;
mod vec_sets;

pub use crate::binary_split::{binary_split, BinarySplits};
pub use crate::error::{Error, Result};
pub use crate::frequent_itemsets::{
    find_frequent_itemsets, find_frequent_itemsets_up_to, FrequentItemsets,
};
pub use crate::generate_rules::{generate_rules, generate_rules_from_itemsets, RuleTable};
pub use crate::index::Index;
pub use crate::item::Item;
pub use crate::itemizer::Itemizer;
pub use crate::itemset::Itemset;
pub use crate::powerset::powerset;
pub use crate::rule::Rule;
pub use crate::transaction_reader::{read_grouped, TransactionReader};
