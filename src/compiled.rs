// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! The sparse PLONK-style constraint system produced by the lowering pass.

use crate::constraint_system::{SolverKind, Term, COEFF_ZERO};

/// A five-term PLONK gate
/// `qL·a + qR·b + qM·a·b + qO·c + qK = 0`.
///
/// Each slot packs its selector coefficient together with the wire it acts
/// on; `k` indexes the gate constant in the coefficient pool. An absent
/// slot is the sentinel [`Term::ZERO`], but once a gate is appended to a
/// [`SparseSystem`] the wire of an absent L/R/M slot mirrors its partner
/// (`M[0]`↔`L`, `M[1]`↔`R`) so the downstream gate layout has no missing
/// wires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gate {
    /// Left wire term
    pub l: Term,
    /// Right wire term
    pub r: Term,
    /// Output wire term
    pub o: Term,
    /// Product term; the gate multiplies the two wires and both
    /// coefficients
    pub m: [Term; 2],
    /// Pool index of the gate constant
    pub k: usize,
    /// Solver strategy attached to the gate
    pub solver: SolverKind,
}

impl Gate {
    /// Initiate the composition of a new gate.
    pub const fn new() -> Self {
        Self {
            l: Term::ZERO,
            r: Term::ZERO,
            o: Term::ZERO,
            m: [Term::ZERO; 2],
            k: COEFF_ZERO,
            solver: SolverKind::SingleOutput,
        }
    }

    /// Set `t` as the left term of the gate.
    pub fn left(mut self, t: Term) -> Self {
        self.l = t;
        self
    }

    /// Set `t` as the right term of the gate.
    pub fn right(mut self, t: Term) -> Self {
        self.r = t;
        self
    }

    /// Set `t` as the output term of the gate.
    pub fn output(mut self, t: Term) -> Self {
        self.o = t;
        self
    }

    /// Set `a` and `b` as the product pair of the gate.
    pub fn mul(mut self, a: Term, b: Term) -> Self {
        self.m = [a, b];
        self
    }

    /// Set the pool index `k` as the gate constant.
    pub fn constant(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Set the solver strategy of the gate.
    pub fn solver(mut self, solver: SolverKind) -> Self {
        self.solver = solver;
        self
    }
}

impl Default for Gate {
    fn default() -> Self {
        Self::new()
    }
}

/// A debug trace entry with its terms resolved to output wire indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Format string of the entry
    pub format: String,
    /// Wire indices to substitute with witness values at emit time
    pub wires: Vec<usize>,
}

/// The lowered constraint system: uniform five-term gates over the
/// `[public | secret | internal]` wire layout.
///
/// The one-wire of the input system is discarded, so `n_public` is one less
/// than the input's public count.
#[derive(Debug, Clone, Default)]
pub struct SparseSystem {
    pub(crate) n_public: usize,
    pub(crate) n_secret: usize,
    pub(crate) n_internal: usize,

    pub(crate) constraints: Vec<Gate>,
    pub(crate) assertions: Vec<Gate>,
    pub(crate) logs: Vec<LogEntry>,
}

impl SparseSystem {
    /// Create an empty system over `n_public` public and `n_secret` secret
    /// wires. The one-wire is not counted.
    pub fn new(n_public: usize, n_secret: usize) -> Self {
        Self::with_capacity(n_public, n_secret, 0, 0)
    }

    /// Create an empty system with capacity reserved for the expected gate
    /// counts.
    pub fn with_capacity(
        n_public: usize,
        n_secret: usize,
        constraints: usize,
        assertions: usize,
    ) -> Self {
        Self {
            n_public,
            n_secret,
            n_internal: 0,
            constraints: Vec::with_capacity(constraints),
            assertions: Vec::with_capacity(assertions),
            logs: Vec::new(),
        }
    }

    /// Allocate a fresh internal wire and return its index.
    pub fn allocate_internal(&mut self) -> usize {
        let id = self.n_internal;
        self.n_internal += 1;
        id
    }

    /// Append a gate, mirroring wire indices into its absent L/R/M slots so
    /// every slot carries a wire even when its coefficient is zero.
    pub fn push_constraint(&mut self, mut gate: Gate) {
        if gate.l.is_zero() {
            gate.l = gate.m[0].without_coeff();
        }
        if gate.r.is_zero() {
            gate.r = gate.m[1].without_coeff();
        }
        if gate.m[0].is_zero() {
            gate.m[0] = gate.l.without_coeff();
        }
        if gate.m[1].is_zero() {
            gate.m[1] = gate.r.without_coeff();
        }
        self.constraints.push(gate);
    }

    /// Record an assertion gate.
    pub fn push_assertion(&mut self, gate: Gate) {
        self.assertions.push(gate);
    }

    /// Append a resolved debug trace entry.
    pub fn push_log(&mut self, entry: LogEntry) {
        self.logs.push(entry);
    }

    /// Number of public wires (one-wire excluded).
    pub fn n_public(&self) -> usize {
        self.n_public
    }

    /// Number of secret wires.
    pub fn n_secret(&self) -> usize {
        self.n_secret
    }

    /// Number of internal wires.
    pub fn n_internal(&self) -> usize {
        self.n_internal
    }

    /// Total number of wires across the three spaces.
    pub fn n_wires(&self) -> usize {
        self.n_public + self.n_secret + self.n_internal
    }

    /// Gates of the system, in emission order.
    pub fn constraints(&self) -> &[Gate] {
        &self.constraints
    }

    /// Assertion gates, in emission order.
    pub fn assertions(&self) -> &[Gate] {
        &self.assertions
    }

    /// Resolved debug trace entries.
    pub fn logs(&self) -> &[LogEntry] {
        &self.logs
    }

    pub(crate) fn constraints_mut(&mut self) -> &mut [Gate] {
        &mut self.constraints
    }

    pub(crate) fn assertions_mut(&mut self) -> &mut [Gate] {
        &mut self.assertions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint_system::Visibility;

    #[test]
    fn absent_slots_mirror_their_partner_wire() {
        let lt = Term::pack(3, 1, Visibility::Internal).unwrap();
        let rt = Term::pack(4, 1, Visibility::Secret).unwrap();

        let mut system = SparseSystem::new(0, 0);
        system.push_constraint(Gate::new().left(lt).right(rt));

        let gate = system.constraints()[0];

        // M mirrors L and R with cleared coefficients
        assert_eq!(gate.m[0].var_id(), 3);
        assert_eq!(gate.m[0].coeff_id(), COEFF_ZERO);
        assert_eq!(gate.m[0].visibility(), Visibility::Internal);
        assert_eq!(gate.m[1].var_id(), 4);
        assert_eq!(gate.m[1].visibility(), Visibility::Secret);
    }

    #[test]
    fn fully_absent_slots_stay_sentinel() {
        let mut system = SparseSystem::new(0, 0);
        system.push_constraint(Gate::new().constant(5));

        let gate = system.constraints()[0];
        assert!(gate.l.is_zero());
        assert!(gate.r.is_zero());
        assert!(gate.m[0].is_zero());
        assert!(gate.m[1].is_zero());
        assert_eq!(gate.k, 5);
    }
}
