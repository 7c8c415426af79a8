//! # blindbot-logic
//!
//! Conjunctive-normal-form propositional logic over grid cells.
//!
//! A [`KnowledgeBase`] stores [`Clause`]s (an implicit conjunction) and answers
//! entailment queries by resolution refutation: to decide `KB ⊨ α` it adds `¬α`
//! to the clause set and saturates it under the resolution rule until either the
//! empty clause appears (entailed) or nothing new can be derived (not entailed).
//!
//! ## Example
//!
//! ```rust
//! use blindbot_logic::*;
//!
//! let x = Proposition::new(Symbol::new("X"), Cell::new(1, 1));
//! let y = Proposition::new(Symbol::new("Y"), Cell::new(1, 1));
//!
//! let mut kb = KnowledgeBase::new();
//! kb.tell(Clause::unit(Literal::negative(x.clone())));
//! kb.tell(Clause::new([Literal::positive(x), Literal::positive(y.clone())]));
//!
//! assert!(kb.ask(&Clause::unit(Literal::positive(y))));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod cell;
pub mod clause;
pub mod kb;
pub mod literal;
pub mod syntax;

pub use cell::Cell;
pub use clause::Clause;
pub use kb::{Entailment, KnowledgeBase, Verdict};
pub use literal::{Literal, Proposition, Symbol};
pub use syntax::parse_clauses;

use thiserror::Error;

/// Errors produced while reading clauses from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LogicError {
    #[error("empty literal in clause `{0}`")]
    EmptyLiteral(String),

    #[error("malformed atom `{0}` (expected `Sym(x,y)`)")]
    MalformedAtom(String),

    #[error("invalid coordinate `{value}` in atom `{atom}`")]
    InvalidCoordinate { atom: String, value: String },

    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<LogicError>,
    },
}

pub type Result<T> = std::result::Result<T, LogicError>;
