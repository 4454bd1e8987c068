use crate::binary_split::binary_split;
use crate::error::{check_ratio, Error, Result};
use crate::frequent_itemsets::{find_frequent_itemsets, FrequentItemsets};
use crate::itemset::Itemset;
use crate::rule::Rule;
use log::{debug, info};
use std::fmt;
use std::hash::Hash;
use std::slice;

/// Rules keyed by (antecedent, consequent), kept sorted by that key so two
/// runs over the same input compare equal.
#[derive(Clone, Debug, PartialEq)]
pub struct RuleTable<I> {
    rules: Vec<Rule<I>>,
}

impl<I: Ord> RuleTable<I> {
    fn from_rules(mut rules: Vec<Rule<I>>) -> RuleTable<I> {
        rules.sort_by(|a, b| {
            a.antecedent
                .cmp(&b.antecedent)
                .then_with(|| a.consequent.cmp(&b.consequent))
        });
        RuleTable { rules }
    }

    pub fn get(&self, antecedent: &Itemset<I>, consequent: &Itemset<I>) -> Option<&Rule<I>> {
        self.rules
            .binary_search_by(|rule| {
                rule.antecedent
                    .cmp(antecedent)
                    .then_with(|| rule.consequent.cmp(consequent))
            })
            .ok()
            .map(|index| &self.rules[index])
    }
}

impl<I> RuleTable<I> {
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Rule<I>> {
        self.rules.iter()
    }

    pub fn into_vec(self) -> Vec<Rule<I>> {
        self.rules
    }
}

impl<'a, I> IntoIterator for &'a RuleTable<I> {
    type Item = &'a Rule<I>;
    type IntoIter = slice::Iter<'a, Rule<I>>;
    fn into_iter(self) -> slice::Iter<'a, Rule<I>> {
        self.rules.iter()
    }
}

/// Mines frequent itemsets with `min_support`, then derives every rule
/// with confidence >= `min_confidence`.
pub fn generate_rules<I, T, U>(
    transactions: T,
    min_support: f64,
    min_confidence: f64,
) -> Result<RuleTable<I>>
where
    I: Ord + Hash + Clone + fmt::Debug,
    T: IntoIterator<Item = U>,
    U: IntoIterator<Item = I>,
{
    check_ratio("confidence", min_confidence)?;
    let itemsets = find_frequent_itemsets(transactions, min_support)?;
    generate_rules_from_itemsets(&itemsets, min_confidence, None)
}

/// Derives rules from already mined frequent itemsets. Every frequent
/// itemset of two or more items is split every possible way; each split
/// `(X, Y)` becomes the rule `X => Y` if it meets `min_confidence` and,
/// when given, `min_lift`.
pub fn generate_rules_from_itemsets<I>(
    itemsets: &FrequentItemsets<I>,
    min_confidence: f64,
    min_lift: Option<f64>,
) -> Result<RuleTable<I>>
where
    I: Ord + Hash + Clone + fmt::Debug,
{
    check_ratio("confidence", min_confidence)?;
    let min_lift = match min_lift {
        Some(lift) if !(lift >= 0.0) => {
            return Err(Error::InvalidThreshold {
                name: "lift",
                value: lift,
            })
        }
        Some(lift) => lift,
        None => 0.0,
    };

    let mut rules: Vec<Rule<I>> = vec![];
    let mut candidates = 0;
    for (itemset, _) in itemsets.iter().filter(|(i, _)| i.len() > 1) {
        for (antecedent, consequent) in binary_split(itemset)? {
            candidates += 1;
            if let Some(rule) = Rule::make(antecedent, consequent, itemsets, min_confidence, min_lift)? {
                rules.push(rule);
            }
        }
    }
    debug!("Tested {} candidate rules", candidates);
    info!(
        "Generated {} rules with confidence >= {}",
        rules.len(),
        min_confidence
    );

    Ok(RuleTable::from_rules(rules))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequent_itemsets::tests::{census_transactions, demo_transactions};
    use crate::index::Index;
    use crate::item::Item;
    use crate::itemizer::Itemizer;
    use test_log::test;

    fn itemset(items: &[&'static str]) -> Itemset<&'static str> {
        Itemset::new(items.iter().cloned())
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn test_demo_rules() {
        let rules = generate_rules(demo_transactions(), 0.6, 1.0).unwrap();
        assert_eq!(rules.len(), 1);
        let rule = rules.get(&itemset(&["cereal"]), &itemset(&["milk"])).unwrap();
        assert_close(rule.support(), 0.6);
        assert_close(rule.confidence(), 1.0);
        assert_close(rule.lift(), 1.25);
        assert!(rules.get(&itemset(&["milk"]), &itemset(&["cereal"])).is_none());
    }

    #[test]
    fn test_all_splits_at_zero_confidence() {
        let rules = generate_rules(demo_transactions(), 0.6, 0.0).unwrap();
        // Four frequent pairs, two orientations each.
        assert_eq!(rules.len(), 8);
        let rule = rules.get(&itemset(&["milk"]), &itemset(&["cereal"])).unwrap();
        assert_close(rule.confidence(), 0.75);
        assert_close(rule.lift(), 1.25);
        let rule = rules.get(&itemset(&["bread"]), &itemset(&["yogurt"])).unwrap();
        assert_close(rule.confidence(), 0.75);
        assert_close(rule.lift(), 0.6 / (0.8 * 0.8));
    }

    #[test]
    fn test_rule_properties() {
        let itemsets = find_frequent_itemsets(census_transactions(), 0.05).unwrap();
        let rules = generate_rules_from_itemsets(&itemsets, 0.0, None).unwrap();
        assert!(!rules.is_empty());
        for rule in &rules {
            let x = itemsets.support(&rule.antecedent).unwrap();
            let y = itemsets.support(&rule.consequent).unwrap();
            let xy = itemsets.support(&rule.merge()).unwrap();
            assert!(rule.confidence() >= 0.0 && rule.confidence() <= 1.0);
            assert!(rule.support() <= x.min(y));
            assert_close(rule.support(), xy);
            assert_close(rule.confidence(), xy / x);
            assert_close(rule.lift(), xy / (x * y));
        }
    }

    #[test]
    fn test_census_rules() {
        // Rules checked against HARM with
        //  -m fptree -minconf 0.05 -minlift 1 -minsup 0.05
        let itemsets = find_frequent_itemsets(census_transactions(), 0.05).unwrap();
        let rules = generate_rules_from_itemsets(&itemsets, 0.05, Some(1.0)).unwrap();
        let expected = [
            (vec!["a"], vec!["e"], 0.6666666666666667, 1.4666666666666668),
            (vec!["a"], vec!["b"], 1.0, 1.222222222222222),
            (vec!["b", "d"], vec!["c"], 1.0, 1.8333333333333335),
            (vec!["c", "g"], vec!["f"], 1.0, 3.666666666666667),
            (vec!["d"], vec!["e", "g"], 0.5, 5.5),
            (vec!["g"], vec!["c", "f"], 0.5, 1.8333333333333335),
        ];
        for (a, c, confidence, lift) in expected.iter() {
            let rule = rules.get(&itemset(a), &itemset(c)).unwrap();
            assert_close(rule.confidence(), *confidence);
            assert_close(rule.lift(), *lift);
        }
        assert!(rules.iter().all(|rule| rule.lift() >= 1.0));
        // b => c has lift 1.0185..., c => b too; a => c is below 1.
        assert!(rules.get(&itemset(&["b"]), &itemset(&["c"])).is_some());
        assert!(rules.get(&itemset(&["a"]), &itemset(&["c"])).is_none());
    }

    #[test]
    fn test_idempotent() {
        let first = generate_rules(census_transactions(), 0.1, 0.3).unwrap();
        let second = generate_rules(census_transactions(), 0.1, 0.3).unwrap();
        assert_eq!(first, second);
        // Input order doesn't matter either.
        let mut reversed = census_transactions();
        reversed.reverse();
        for transaction in reversed.iter_mut() {
            transaction.reverse();
        }
        assert_eq!(first, generate_rules(reversed, 0.1, 0.3).unwrap());
    }

    #[test]
    fn test_zero_support_is_clean() {
        let rules = generate_rules(census_transactions(), 0.0, 0.0).unwrap();
        assert!(rules.iter().all(|rule| rule.support() > 0.0));
    }

    #[test]
    fn test_invalid_thresholds() {
        match generate_rules(demo_transactions(), 0.6, 1.5) {
            Err(Error::InvalidThreshold { name, .. }) => assert_eq!(name, "confidence"),
            other => panic!("unexpected {:?}", other),
        }
        match generate_rules(demo_transactions(), -1.0, 0.5) {
            Err(Error::InvalidThreshold { name, .. }) => assert_eq!(name, "support"),
            other => panic!("unexpected {:?}", other),
        }
        let itemsets = find_frequent_itemsets(demo_transactions(), 0.6).unwrap();
        match generate_rules_from_itemsets(&itemsets, 0.5, Some(-1.0)) {
            Err(Error::InvalidThreshold { name, .. }) => assert_eq!(name, "lift"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(generate_rules_from_itemsets(&itemsets, 0.5, Some(std::f64::NAN)).is_err());
    }

    #[test]
    fn test_supports_agree_with_index() {
        let mut itemizer = Itemizer::new();
        let mut index = Index::new();
        let transactions: Vec<Vec<Item>> = census_transactions()
            .iter()
            .map(|t| t.iter().map(|s| itemizer.id_of(s)).collect())
            .collect();
        for transaction in &transactions {
            index.insert(transaction);
        }
        let rules = generate_rules(transactions, 0.05, 0.05).unwrap();
        for rule in &rules {
            let ac = index.support(rule.merge().as_slice());
            let a = index.support(rule.antecedent.as_slice());
            let c = index.support(rule.consequent.as_slice());
            assert_close(rule.support(), ac);
            assert_close(rule.confidence(), ac / a);
            assert_close(rule.lift(), ac / (a * c));
        }
    }
}
