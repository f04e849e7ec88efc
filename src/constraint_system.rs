// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! The rank-1 constraint system consumed by the lowering pass.
//!
//! Variables live in three separate index spaces, distinguished by their
//! [`Visibility`]: public inputs, secret inputs and internal wires. Public
//! variable `0` is the distinguished one-wire, hard-wired to the value `1`
//! and used to carry constants inside linear expressions; the lowering pass
//! folds it into gate constants and drops it from the output layout.

use num_bigint::BigInt;

use crate::error::Error;

mod coefficients;
mod constraint;
mod expression;
mod term;

pub use coefficients::{
    Coefficients, COEFF_MINUS_ONE, COEFF_ONE, COEFF_TWO, COEFF_ZERO,
};
pub use constraint::{Constraint, SolverKind};
pub use expression::LinearExpression;
pub use term::{Term, Visibility};

/// A debug trace entry registered by the frontend.
///
/// `to_resolve` lists the terms whose witness values are substituted into
/// `format` when the entry is emitted by the prover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Format string of the entry
    pub format: String,
    /// Terms to resolve against the witness at emit time
    pub to_resolve: Vec<Term>,
}

/// A rank-1 constraint system: the immutable input of the lowering pass.
#[derive(Debug, Clone)]
pub struct ConstraintSystem {
    // variable counters; n_public counts the one-wire
    pub(crate) n_public: usize,
    pub(crate) n_secret: usize,
    pub(crate) n_internal: usize,

    pub(crate) constraints: Vec<Constraint>,
    pub(crate) assertions: Vec<Constraint>,

    pub(crate) coeffs: Coefficients,
    pub(crate) logs: Vec<LogEntry>,
}

impl ConstraintSystem {
    /// Create a constraint system with `n_public` public and `n_secret`
    /// secret variables.
    ///
    /// `n_public` counts the one-wire at public index `0`, so it must be at
    /// least `1`.
    pub fn new(n_public: usize, n_secret: usize) -> Self {
        Self {
            n_public,
            n_secret,
            n_internal: 0,
            constraints: Vec::new(),
            assertions: Vec::new(),
            coeffs: Coefficients::new(),
            logs: Vec::new(),
        }
    }

    /// Allocate a fresh internal variable and return its index.
    pub fn allocate_internal(&mut self) -> usize {
        let id = self.n_internal;
        self.n_internal += 1;
        id
    }

    /// Index of `value` in the coefficient pool, interning it if needed.
    pub fn coeff_id(&mut self, value: &BigInt) -> usize {
        self.coeffs.coeff_id(value)
    }

    /// Build the term `value · variable`, interning the coefficient.
    pub fn term(
        &mut self,
        value: &BigInt,
        var_id: usize,
        visibility: Visibility,
    ) -> Result<Term, Error> {
        let coeff_id = self.coeffs.coeff_id(value);
        Term::pack(var_id, coeff_id, visibility)
    }

    /// Build the constant term `value · one_wire`.
    pub fn constant(&mut self, value: &BigInt) -> Result<Term, Error> {
        self.term(value, 0, Visibility::Public)
    }

    /// Append a constraint. Its solver tag decides how the pass lowers it.
    pub fn push_constraint(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    /// Append an assertion: a constraint that defines no wire.
    pub fn push_assertion(&mut self, constraint: Constraint) {
        self.assertions.push(constraint);
    }

    /// Register a debug trace entry.
    pub fn push_log(&mut self, entry: LogEntry) {
        self.logs.push(entry);
    }

    /// Number of public variables, the one-wire included.
    pub fn n_public(&self) -> usize {
        self.n_public
    }

    /// Number of secret variables.
    pub fn n_secret(&self) -> usize {
        self.n_secret
    }

    /// Number of internal variables.
    pub fn n_internal(&self) -> usize {
        self.n_internal
    }

    /// Registered constraints, in insertion order.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Registered assertions, in insertion order.
    pub fn assertions(&self) -> &[Constraint] {
        &self.assertions
    }

    /// Registered debug trace entries.
    pub fn logs(&self) -> &[LogEntry] {
        &self.logs
    }

    /// The coefficient pool of the system.
    pub fn coefficients(&self) -> &Coefficients {
        &self.coeffs
    }
}
