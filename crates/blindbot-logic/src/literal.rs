//! Propositions and literals.
//!
//! Every proposition is a predicate symbol applied to one grid cell. The maze
//! agent only uses [`Symbol::PIT`], but the symbol is an open set so other
//! predicates can share the same knowledge base.

use core::fmt;
use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Cell;

/// Predicate symbol.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Symbol(Cow<'static, str>);

impl Symbol {
    /// "pit-present".
    pub const PIT: Symbol = Symbol(Cow::Borrowed("P"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A predicate symbol applied to a cell, e.g. `P(3,4)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Proposition {
    pub symbol: Symbol,
    pub cell: Cell,
}

impl Proposition {
    pub fn new(symbol: Symbol, cell: Cell) -> Self {
        Self { symbol, cell }
    }

    pub fn pit(cell: Cell) -> Self {
        Self::new(Symbol::PIT, cell)
    }
}

impl fmt::Display for Proposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({},{})", self.symbol, self.cell.x, self.cell.y)
    }
}

/// A proposition with a polarity.
///
/// `Ord` sorts by proposition first, so a clause lists complementary literals
/// next to each other.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Literal {
    pub prop: Proposition,
    pub positive: bool,
}

impl Literal {
    pub fn new(prop: Proposition, positive: bool) -> Self {
        Self { prop, positive }
    }

    pub fn positive(prop: Proposition) -> Self {
        Self::new(prop, true)
    }

    pub fn negative(prop: Proposition) -> Self {
        Self::new(prop, false)
    }

    /// `pit(cell)` with the given polarity.
    pub fn pit(cell: Cell, present: bool) -> Self {
        Self::new(Proposition::pit(cell), present)
    }

    /// Same proposition, flipped polarity.
    pub fn negate(&self) -> Self {
        Self {
            prop: self.prop.clone(),
            positive: !self.positive,
        }
    }

    pub fn is_complement_of(&self, other: &Literal) -> bool {
        self.prop == other.prop && self.positive != other.positive
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.positive {
            f.write_str("¬")?;
        }
        write!(f, "{}", self.prop)
    }
}
