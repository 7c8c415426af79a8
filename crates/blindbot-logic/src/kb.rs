//! Knowledge base and resolution refutation.

use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::{trace, warn};

use crate::{Clause, Literal};

/// Outcome of a refutation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The empty clause was derived.
    Entailed,
    /// Saturation reached without a contradiction.
    NotEntailed,
    /// The working set outgrew the configured budget before either of the above.
    BudgetExhausted,
}

/// Verdict plus the work it took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entailment {
    pub verdict: Verdict,
    pub rounds: usize,
    pub derived: usize,
}

impl Entailment {
    pub fn is_entailed(&self) -> bool {
        self.verdict == Verdict::Entailed
    }
}

/// A conjunction of clauses.
///
/// The store assumes every told clause is true of the world. Nothing checks
/// this: an inconsistent knowledge base entails every query.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    clauses: BTreeSet<Clause>,
    budget: Option<usize>,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the refutation working set at `max_clauses` clauses.
    pub fn with_budget(max_clauses: usize) -> Self {
        Self {
            clauses: BTreeSet::new(),
            budget: Some(max_clauses),
        }
    }

    pub fn budget(&self) -> Option<usize> {
        self.budget
    }

    pub fn set_budget(&mut self, budget: Option<usize>) {
        self.budget = budget;
    }

    /// Add a clause. Returns `false` when it was already known or is a tautology.
    pub fn tell(&mut self, clause: Clause) -> bool {
        if clause.is_tautology() {
            trace!(%clause, "discarding tautology");
            return false;
        }
        self.clauses.insert(clause)
    }

    /// Does the knowledge base entail `query`?
    pub fn ask(&self, query: &Clause) -> bool {
        self.query(query).is_entailed()
    }

    /// Resolution refutation of `KB ∧ ¬query`.
    pub fn query(&self, query: &Clause) -> Entailment {
        let mut work = Workspace::default();
        for clause in &self.clauses {
            work.insert(clause.clone());
        }
        for lit in query.literals() {
            work.insert(Clause::unit(lit.negate()));
        }

        let mut outcome = Entailment {
            verdict: Verdict::NotEntailed,
            rounds: 0,
            derived: 0,
        };

        if work.contains(&Clause::empty()) {
            outcome.verdict = Verdict::Entailed;
            return outcome;
        }

        // Every clause starts out as "new"; later rounds only pair the clauses
        // derived by the previous round with the whole working set.
        let mut fresh: Vec<usize> = (0..work.len()).collect();
        loop {
            outcome.rounds += 1;
            let fresh_set: HashSet<usize> = fresh.iter().copied().collect();
            let mut pending = BTreeSet::new();

            for &i in &fresh {
                for j in work.partners(i) {
                    if fresh_set.contains(&j) && j < i {
                        continue;
                    }
                    for resolvent in work.get(i).resolve(work.get(j)) {
                        if resolvent.is_empty() {
                            trace!(rounds = outcome.rounds, "derived empty clause");
                            outcome.verdict = Verdict::Entailed;
                            return outcome;
                        }
                        if !work.contains(&resolvent) {
                            pending.insert(resolvent);
                        }
                    }
                }
            }

            trace!(
                round = outcome.rounds,
                new = pending.len(),
                total = work.len(),
                "resolution round"
            );

            if pending.is_empty() {
                return outcome;
            }

            if let Some(limit) = self.budget {
                if work.len() + pending.len() > limit {
                    warn!(
                        limit,
                        query = %query,
                        "resolution budget exhausted"
                    );
                    outcome.verdict = Verdict::BudgetExhausted;
                    return outcome;
                }
            }

            outcome.derived += pending.len();
            fresh = pending.into_iter().map(|c| work.insert(c)).collect();
        }
    }

    pub fn contains(&self, clause: &Clause) -> bool {
        self.clauses.contains(clause)
    }

    pub fn clauses(&self) -> impl Iterator<Item = &Clause> + '_ {
        self.clauses.iter()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

impl Extend<Clause> for KnowledgeBase {
    fn extend<I: IntoIterator<Item = Clause>>(&mut self, iter: I) {
        for clause in iter {
            self.tell(clause);
        }
    }
}

/// Arena of clauses for one refutation, indexed by literal.
#[derive(Default)]
struct Workspace {
    clauses: Vec<Clause>,
    seen: HashMap<Clause, usize>,
    by_literal: HashMap<Literal, Vec<usize>>,
}

impl Workspace {
    /// Insert a clause (if new) and return its index.
    fn insert(&mut self, clause: Clause) -> usize {
        if let Some(&idx) = self.seen.get(&clause) {
            return idx;
        }
        let idx = self.clauses.len();
        for lit in clause.literals() {
            self.by_literal.entry(lit.clone()).or_default().push(idx);
        }
        self.seen.insert(clause.clone(), idx);
        self.clauses.push(clause);
        idx
    }

    fn contains(&self, clause: &Clause) -> bool {
        self.seen.contains_key(clause)
    }

    fn get(&self, idx: usize) -> &Clause {
        &self.clauses[idx]
    }

    fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Indices of clauses holding the complement of some literal of clause `idx`.
    fn partners(&self, idx: usize) -> BTreeSet<usize> {
        let mut out = BTreeSet::new();
        for lit in self.clauses[idx].literals() {
            if let Some(list) = self.by_literal.get(&lit.negate()) {
                out.extend(list.iter().copied().filter(|&j| j != idx));
            }
        }
        out
    }
}
