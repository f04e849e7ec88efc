// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! The lowering pass from a rank-1 constraint system to a sparse
//! PLONK-style constraint system.
//!
//! The pass walks the input constraints in order, decomposing each into a
//! minimal sequence of five-term gates. Wide linear expressions collapse
//! into single wires through chains of addition gates, constants attached
//! to the one-wire fold into gate constants, and every constraint keeps its
//! role as a solver hint: the wire the frontend meant it to define is
//! re-allocated in the output space and recorded in the internal-variable
//! map. A final pass renumbers every term into the unified
//! `[public | secret | internal]` wire layout.
//!
//! Gate emission order follows input constraint order, then input assertion
//! order; within a constraint, fresh wires are allocated in the order the
//! decomposition introduces them. This ordering decides wire numbering and
//! is part of the contract.

use num_bigint::BigInt;
use num_traits::{One, ToPrimitive};

use crate::compiled::{Gate, SparseSystem};
use crate::constraint_system::{
    Coefficients, Constraint, ConstraintSystem, LinearExpression, SolverKind,
    Term, Visibility, COEFF_MINUS_ONE, COEFF_ONE, COEFF_ZERO,
};
use crate::error::Error;
use crate::runtime::{Runtime, RuntimeEvent};

mod assertion;
mod binary;
mod renumber;
mod single_output;

pub use renumber::renumber;

/// Lower a rank-1 constraint system into a sparse PLONK-style system.
///
/// Returns the lowered system together with the coefficient pool, which may
/// have grown during the pass; indices already stamped into input terms
/// stay valid. On error the partial output is discarded.
pub fn lower(
    cs: ConstraintSystem,
) -> Result<(SparseSystem, Coefficients), Error> {
    let ConstraintSystem {
        n_public,
        n_secret,
        n_internal,
        constraints,
        assertions,
        coeffs,
        logs,
    } = cs;

    let mut pass = Lowering {
        // the one-wire is discarded as it is not used in PLONK
        ccs: SparseSystem::with_capacity(
            n_public.saturating_sub(1),
            n_secret,
            constraints.len(),
            assertions.len(),
        ),
        coeffs,
        map: vec![None; n_internal],
        solved: vec![false; n_internal],
        runtime: Runtime::with_capacity(constraints.len()),
    };

    for constraint in &constraints {
        pass.lower_constraint(constraint)?;
    }
    for assertion in &assertions {
        pass.lower_assertion(assertion)?;
    }

    renumber(&mut pass.ccs, &pass.map, 1)?;

    let n_public = pass.ccs.n_public();
    let n_secret = pass.ccs.n_secret();
    for entry in
        renumber::resolve_logs(&logs, &pass.map, n_public, n_secret, 1)?
    {
        pass.ccs.push_log(entry);
    }

    pass.runtime.event(RuntimeEvent::LoweringFinished);

    Ok((pass.ccs, pass.coeffs))
}

// The in-flight state of the pass: the output system under construction,
// the coefficient pool shared with the eventual backend, and the two arrays
// tracking how input internal variables land in the output space.
pub(crate) struct Lowering {
    pub(crate) coeffs: Coefficients,
    pub(crate) ccs: SparseSystem,

    // input internal variable -> output internal wire
    pub(crate) map: Vec<Option<usize>>,
    // input internal variables already defined by some lowered constraint
    pub(crate) solved: Vec<bool>,

    pub(crate) runtime: Runtime,
}

impl Lowering {
    fn lower_constraint(&mut self, r1c: &Constraint) -> Result<(), Error> {
        match r1c.solver {
            SolverKind::SingleOutput => self.lower_single_output(r1c),
            SolverKind::BinaryDec => self.lower_binary(r1c),
        }
    }

    pub(crate) fn coeff_id(&mut self, value: &BigInt) -> usize {
        self.coeffs.coeff_id(value)
    }

    // Allocate the term `coeff · fresh_wire` in the output space. When
    // `source` is given, the fresh wire is recorded as the image of that
    // input internal variable.
    pub(crate) fn new_term(
        &mut self,
        coeff: &BigInt,
        source: Option<usize>,
    ) -> Result<Term, Error> {
        let coeff_id = self.coeffs.coeff_id(coeff);
        let var_id = self.ccs.allocate_internal();
        let term = Term::pack(var_id, coeff_id, Visibility::Internal)?;

        self.runtime
            .event(RuntimeEvent::InternalAllocated { id: var_id });

        if let Some(cs_id) = source {
            self.map[cs_id] = Some(var_id);
        }

        Ok(term)
    }

    // Rewrite an input-space term into the output space. Internal variables
    // must already be defined by an earlier constraint.
    pub(crate) fn corresponding_term(&self, t: Term) -> Result<Term, Error> {
        if t.visibility() != Visibility::Internal {
            return Ok(t);
        }

        let mapped = self
            .map
            .get(t.var_id())
            .copied()
            .flatten()
            .ok_or(Error::UnsolvableConstraint)?;

        let mut t = t;
        t.set_var_id(mapped)?;
        Ok(t)
    }

    pub(crate) fn add_constraint(&mut self, gate: Gate) {
        self.runtime.event(RuntimeEvent::GateAppended { gate });
        self.ccs.push_constraint(gate);
    }

    pub(crate) fn record_assertion(&mut self, gate: Gate) {
        self.runtime.event(RuntimeEvent::AssertionAppended { gate });
        self.ccs.push_assertion(gate);
    }

    // If t = a·variable, returns -a·variable. The sentinel stays untouched:
    // negating it would turn an absent term into a present one.
    pub(crate) fn negate(&mut self, t: Term) -> Result<Term, Error> {
        if t.is_zero() {
            return Ok(t);
        }

        let negated = -self.coeffs.value(t.coeff_id());
        let coeff_id = self.coeffs.coeff_id(&negated);

        let mut t = t;
        t.set_coeff_id(coeff_id)?;
        Ok(t)
    }

    // Multiplies t by the provided coefficient, with fast paths for 0, 1
    // and -1 that avoid touching the pool.
    pub(crate) fn multiply(
        &mut self,
        t: Term,
        coeff: &BigInt,
    ) -> Result<Term, Error> {
        let mut t = t;

        if let Some(small) = coeff.to_i64() {
            match small {
                0 => {
                    t.set_coeff_id(COEFF_ZERO)?;
                    return Ok(t);
                }
                1 => return Ok(t),
                -1 => match t.coeff_id() {
                    COEFF_ZERO => return Ok(t),
                    COEFF_ONE => {
                        t.set_coeff_id(COEFF_MINUS_ONE)?;
                        return Ok(t);
                    }
                    COEFF_MINUS_ONE => {
                        t.set_coeff_id(COEFF_ONE)?;
                        return Ok(t);
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        let product = self.coeffs.value(t.coeff_id()) * coeff;
        let coeff_id = self.coeffs.coeff_id(&product);
        t.set_coeff_id(coeff_id)?;
        Ok(t)
    }

    // Pops the constant attached to the one-wire, which becomes a gate
    // constant. Returns the reduced expression and the constant's value,
    // zero when no one-wire term is present.
    //
    // The one-wire may appear at most once per linear expression.
    pub(crate) fn pop_constant_term(
        &self,
        le: &LinearExpression,
    ) -> (LinearExpression, BigInt) {
        for (i, t) in le.terms().iter().enumerate() {
            if t.var_id() == 0 && t.visibility() == Visibility::Public {
                let rest = le
                    .terms()
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .map(|(_, t)| *t)
                    .collect();
                return (rest, self.coeffs.value(t.coeff_id()).clone());
            }
        }

        (le.clone(), BigInt::from(0))
    }

    // Collapses a linear expression Σ aᵢ·wᵢ into a single term through a
    // chain of addition gates:
    //
    //   w0' = a0·w0 + a1·w1
    //   w1' = w0' + a2·w2
    //   ...
    //
    // Each accumulator is a fresh unit-coefficient wire. The sentinel
    // doubles as the "no accumulator yet" base case; an empty expression
    // returns the accumulator unchanged.
    pub(crate) fn split(
        &mut self,
        acc: Term,
        rest: &[Term],
    ) -> Result<Term, Error> {
        if rest.is_empty() {
            return Ok(acc);
        }

        if acc.is_zero() {
            let t = self.corresponding_term(rest[0])?;
            return self.split(t, &rest[1..]);
        }

        let r = self.corresponding_term(rest[0])?;
        let o = self.new_term(&BigInt::one(), None)?;
        self.add_constraint(Gate::new().left(acc).right(r).output(o));
        let o = self.negate(o)?;
        self.split(o, &rest[1..])
    }
}

// The variable the constraint is meant to define: the first internal term
// of L, then R, then O whose variable is not yet solved. Returns the
// position (0 = L, 1 = R, 2 = O) alongside the variable index, or None for
// a pure assertion.
pub(crate) fn find_unsolved_variable(
    r1c: &Constraint,
    solved: &[bool],
) -> Option<(usize, usize)> {
    let sides = [&r1c.l, &r1c.r, &r1c.o];

    for (pos, le) in sides.iter().enumerate() {
        for t in le.terms() {
            if t.visibility() != Visibility::Internal {
                continue;
            }
            let id = t.var_id();
            if !solved.get(id).copied().unwrap_or(true) {
                return Some((pos, id));
            }
        }
    }

    None
}
