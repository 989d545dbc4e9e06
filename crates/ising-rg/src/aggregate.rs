use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::RenormRow;

/// Relation between the two block spins of a coarse configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpinRelation {
    /// `s1' == s2'`, contributing to `Exp[A(k) + 2k']`.
    Equal,
    /// `s1' != s2'`, contributing to `Exp[A(k) - 2k']`.
    Unequal,
}

impl SpinRelation {
    /// Both relations in presentation order.
    pub const ALL: [SpinRelation; 2] = [SpinRelation::Equal, SpinRelation::Unequal];

    /// Coarse energy `H'` shared by every configuration in this class.
    pub const fn coarse_energy(self) -> i32 {
        match self {
            SpinRelation::Equal => 2,
            SpinRelation::Unequal => -2,
        }
    }

    /// Left-hand side of the renormalised coupling equation for this class.
    pub const fn label(self) -> &'static str {
        match self {
            SpinRelation::Equal => "Exp[A(k)+2k']",
            SpinRelation::Unequal => "Exp[A(k)-2k']",
        }
    }
}

/// Number of configurations sharing each fine energy, keyed by ascending exponent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExponentCounts {
    counts: BTreeMap<i32, usize>,
}

impl ExponentCounts {
    /// Number of configurations recorded with `exponent`, zero if unseen.
    pub fn get(&self, exponent: i32) -> usize {
        self.counts.get(&exponent).copied().unwrap_or(0)
    }

    /// `(exponent, count)` pairs in ascending exponent order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, usize)> + '_ {
        self.counts.iter().map(|(exponent, count)| (*exponent, *count))
    }

    /// Distinct exponents in ascending order.
    pub fn exponents(&self) -> impl Iterator<Item = i32> + '_ {
        self.counts.keys().copied()
    }

    /// Total number of configurations in the class.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct exponents.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no configuration was recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl FromIterator<i32> for ExponentCounts {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut counts = BTreeMap::new();
        for exponent in iter {
            *counts.entry(exponent).or_insert(0) += 1;
        }
        Self { counts }
    }
}

/// Fine-energy counts split by block-spin relation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedExponentTable {
    equal: ExponentCounts,
    unequal: ExponentCounts,
}

impl GroupedExponentTable {
    /// Partitions `rows` by relation and counts the fine energy of each.
    pub fn from_rows(rows: &[RenormRow]) -> Self {
        let class = |relation: SpinRelation| -> ExponentCounts {
            rows.iter()
                .filter(|row| row.relation() == relation)
                .map(RenormRow::h1)
                .collect()
        };
        Self {
            equal: class(SpinRelation::Equal),
            unequal: class(SpinRelation::Unequal),
        }
    }

    /// Counts for a single class.
    pub fn class(&self, relation: SpinRelation) -> &ExponentCounts {
        match relation {
            SpinRelation::Equal => &self.equal,
            SpinRelation::Unequal => &self.unequal,
        }
    }

    /// Configurations counted across both classes.
    pub fn total(&self) -> usize {
        self.equal.total() + self.unequal.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_exponents_accumulate() {
        let counts: ExponentCounts = [2, -2, 2, 6, 2].into_iter().collect();
        assert_eq!(counts.get(2), 3);
        assert_eq!(counts.get(-2), 1);
        assert_eq!(counts.get(0), 0);
        assert_eq!(counts.total(), 5);
        assert_eq!(counts.exponents().collect::<Vec<_>>(), vec![-2, 2, 6]);
    }

    #[test]
    fn relation_labels_match_equation_sides() {
        assert_eq!(SpinRelation::Equal.label(), "Exp[A(k)+2k']");
        assert_eq!(SpinRelation::Unequal.label(), "Exp[A(k)-2k']");
        assert_eq!(SpinRelation::Equal.coarse_energy(), 2);
        assert_eq!(SpinRelation::Unequal.coarse_energy(), -2);
    }
}
