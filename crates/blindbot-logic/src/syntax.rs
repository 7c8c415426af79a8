//! Text form of literals and clauses.
//!
//! ```text
//! P(1,2) | !P(2,2)      # a two-literal clause
//! ¬X(0,0) ∨ Y(0,0)      # unicode spelling of the same shape
//! ⊥                     # the empty clause
//! ```

use core::str::FromStr;

use crate::{Cell, Clause, Literal, LogicError, Proposition, Result, Symbol};

impl FromStr for Literal {
    type Err = LogicError;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        let (positive, atom) = match text.chars().next() {
            Some(c @ ('!' | '~' | '¬')) => (false, text[c.len_utf8()..].trim_start()),
            Some(_) => (true, text),
            None => return Err(LogicError::EmptyLiteral(s.to_string())),
        };
        Ok(Literal::new(parse_atom(atom)?, positive))
    }
}

impl FromStr for Clause {
    type Err = LogicError;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        if text.is_empty() || text == "⊥" {
            return Ok(Clause::empty());
        }
        text.split(['|', '∨'])
            .map(|part| {
                if part.trim().is_empty() {
                    Err(LogicError::EmptyLiteral(s.to_string()))
                } else {
                    part.parse::<Literal>()
                }
            })
            .collect()
    }
}

fn parse_atom(atom: &str) -> Result<Proposition> {
    let malformed = || LogicError::MalformedAtom(atom.to_string());

    let open = atom.find('(').ok_or_else(malformed)?;
    let inner = atom[open + 1..].strip_suffix(')').ok_or_else(malformed)?;
    let name = atom[..open].trim();
    if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(malformed());
    }

    let mut coords = inner.split(',');
    let (Some(x), Some(y), None) = (coords.next(), coords.next(), coords.next()) else {
        return Err(malformed());
    };
    let coord = |value: &str| {
        value
            .trim()
            .parse::<i32>()
            .map_err(|_| LogicError::InvalidCoordinate {
                atom: atom.to_string(),
                value: value.trim().to_string(),
            })
    };

    let symbol = if name == Symbol::PIT.as_str() {
        Symbol::PIT
    } else {
        Symbol::new(name.to_string())
    };
    Ok(Proposition::new(symbol, Cell::new(coord(x)?, coord(y)?)))
}

/// Parse a knowledge-base listing: one clause per line, `#` starts a comment.
pub fn parse_clauses(text: &str) -> Result<Vec<Clause>> {
    let mut out = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let clause = line.parse::<Clause>().map_err(|e| LogicError::Line {
            line: idx + 1,
            source: Box::new(e),
        })?;
        out.push(clause);
    }
    Ok(out)
}
