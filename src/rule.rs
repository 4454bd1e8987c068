use crate::error::{Error, Result};
use crate::frequent_itemsets::FrequentItemsets;
use crate::item::Item;
use crate::itemizer::Itemizer;
use crate::itemset::Itemset;
use crate::vec_sets::{is_disjoint, union};
use std::fmt;
use std::hash::Hash;

/// An association rule `antecedent => consequent`.
#[derive(Clone, Debug, PartialEq)]
pub struct Rule<I> {
    pub antecedent: Itemset<I>,
    pub consequent: Itemset<I>,
    pub confidence: f64,
    pub lift: f64,
    pub support: f64,
}

impl<I> Rule<I>
where
    I: Ord + Hash + Clone + fmt::Debug,
{
    // Creates a new Rule from (antecedent,consequent) if the rule
    // would be above the min_confidence and min_lift thresholds.
    // Returns None when the union of both sides isn't frequent.
    pub fn make(
        antecedent: Itemset<I>,
        consequent: Itemset<I>,
        itemsets: &FrequentItemsets<I>,
        min_confidence: f64,
        min_lift: f64,
    ) -> Result<Option<Rule<I>>> {
        if antecedent.is_empty() || consequent.is_empty() {
            return Ok(None);
        }
        debug_assert!(is_disjoint(antecedent.as_slice(), consequent.as_slice()));

        let ac = Itemset::from_sorted(union(antecedent.as_slice(), consequent.as_slice()));
        let ac_count = match itemsets.count(&ac) {
            Some(count) => count,
            None => return Ok(None),
        };
        let a_count = nonzero_count(&antecedent, itemsets)?;

        // Ratios of counts; the transaction total cancels out.
        let confidence = ac_count as f64 / a_count as f64;
        if confidence < min_confidence {
            return Ok(None);
        }

        let c_count = nonzero_count(&consequent, itemsets)?;
        let n = itemsets.num_transactions() as f64;
        let lift = (ac_count as f64 * n) / (a_count as f64 * c_count as f64);
        if lift < min_lift {
            return Ok(None);
        }

        Ok(Some(Rule {
            antecedent,
            consequent,
            confidence,
            lift,
            support: ac_count as f64 / n,
        }))
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn lift(&self) -> f64 {
        self.lift
    }

    pub fn support(&self) -> f64 {
        self.support
    }

    pub fn merge(&self) -> Itemset<I> {
        Itemset::from_sorted(union(
            self.antecedent.as_slice(),
            self.consequent.as_slice(),
        ))
    }
}

// Count of one side of a rule. A zero count would divide by zero.
fn nonzero_count<I>(itemset: &Itemset<I>, itemsets: &FrequentItemsets<I>) -> Result<u32>
where
    I: Ord + Hash + Clone + fmt::Debug,
{
    match itemsets.count(itemset) {
        Some(count) if count > 0 => Ok(count),
        _ => Err(Error::DegenerateRule {
            itemset: format!("{:?}", itemset.as_slice()),
        }),
    }
}

impl Rule<Item> {
    pub fn to_string(&self, itemizer: &Itemizer) -> String {
        [
            Item::item_vec_to_string(self.antecedent.as_slice(), itemizer),
            " => ".to_owned(),
            Item::item_vec_to_string(self.consequent.as_slice(), itemizer),
        ]
        .join("")
    }
}

impl<I: fmt::Display> fmt::Display for Rule<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rule [{} => {}] (support: {}, confidence: {}, lift: {})",
            self.antecedent, self.consequent, self.support, self.confidence, self.lift
        )
    }
}
