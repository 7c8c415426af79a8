//! Disjunctive clauses and the resolution rule.

use core::fmt;
use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Literal, Proposition};

/// A set of literals read as their disjunction.
///
/// Clauses are immutable values with structural equality and hashing, so a set
/// of clauses de-duplicates by content. The empty clause is `False`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Clause {
    literals: BTreeSet<Literal>,
}

impl Clause {
    pub fn new(literals: impl IntoIterator<Item = Literal>) -> Self {
        Self {
            literals: literals.into_iter().collect(),
        }
    }

    /// The empty clause (contradiction).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn unit(literal: Literal) -> Self {
        Self::new([literal])
    }

    pub fn literals(&self) -> impl Iterator<Item = &Literal> + '_ {
        self.literals.iter()
    }

    pub fn propositions(&self) -> impl Iterator<Item = &Proposition> + '_ {
        self.literals.iter().map(|l| &l.prop)
    }

    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }

    /// True when the clause holds some literal together with its complement.
    pub fn is_tautology(&self) -> bool {
        self.literals
            .iter()
            .any(|l| !l.positive && self.literals.contains(&l.negate()))
    }

    /// All non-tautological resolvents of `self` and `other`.
    ///
    /// One resolvent per complementary pair; an empty result means the clauses
    /// do not clash.
    pub fn resolve(&self, other: &Clause) -> BTreeSet<Clause> {
        let mut out = BTreeSet::new();
        for lit in &self.literals {
            let complement = lit.negate();
            if !other.literals.contains(&complement) {
                continue;
            }

            let resolvent = Clause {
                literals: self
                    .literals
                    .iter()
                    .filter(|l| *l != lit)
                    .chain(other.literals.iter().filter(|l| **l != complement))
                    .cloned()
                    .collect(),
            };
            if !resolvent.is_tautology() {
                out.insert(resolvent);
            }
        }
        out
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Literal> for Clause {
    fn from(literal: Literal) -> Self {
        Self::unit(literal)
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.literals.is_empty() {
            return f.write_str("⊥");
        }
        for (i, lit) in self.literals.iter().enumerate() {
            if i > 0 {
                f.write_str(" ∨ ")?;
            }
            write!(f, "{lit}")?;
        }
        Ok(())
    }
}
