// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use crate::constraint_system::{Term, Visibility};

/// An ordered sum of [`Term`]s.
///
/// No stored term equals the sentinel [`Term::ZERO`]. The order of the
/// terms carries no algebraic meaning; it only makes the emitted gate
/// sequence deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinearExpression(Vec<Term>);

impl LinearExpression {
    /// Create an empty linear expression.
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a term to the expression.
    pub fn push(&mut self, term: Term) {
        self.0.push(term)
    }

    /// Terms of the expression, in insertion order.
    pub fn terms(&self) -> &[Term] {
        &self.0
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the expression has no terms.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    // Copy of the expression with the term holding the internal variable
    // `id` removed, along with the removed term. No side effects on `self`.
    pub(crate) fn pop_internal_variable(
        &self,
        id: usize,
    ) -> (LinearExpression, Option<Term>) {
        let mut popped = None;
        let mut rest = Vec::with_capacity(self.0.len().saturating_sub(1));

        for term in &self.0 {
            if popped.is_none()
                && term.visibility() == Visibility::Internal
                && term.var_id() == id
            {
                popped = Some(*term);
                continue;
            }
            rest.push(*term);
        }

        (LinearExpression(rest), popped)
    }
}

impl From<Vec<Term>> for LinearExpression {
    fn from(terms: Vec<Term>) -> Self {
        Self(terms)
    }
}

impl FromIterator<Term> for LinearExpression {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_internal_variable_removes_a_single_term() {
        let a = Term::pack(0, 1, Visibility::Internal).unwrap();
        let b = Term::pack(1, 1, Visibility::Secret).unwrap();
        let c = Term::pack(2, 1, Visibility::Internal).unwrap();
        let le: LinearExpression = vec![a, b, c].into();

        let (rest, popped) = le.pop_internal_variable(2);

        assert_eq!(popped, Some(c));
        assert_eq!(rest.terms(), &[a, b]);
        // no side effects
        assert_eq!(le.len(), 3);
    }

    #[test]
    fn pop_internal_variable_ignores_other_visibilities() {
        // a secret variable with the searched id is not a match
        let a = Term::pack(7, 1, Visibility::Secret).unwrap();
        let le: LinearExpression = vec![a].into();

        let (rest, popped) = le.pop_internal_variable(7);

        assert_eq!(popped, None);
        assert_eq!(rest.terms(), &[a]);
    }
}
