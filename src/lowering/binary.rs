// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Lowering of binary-decomposition constraints.
//!
//! The left expression is the linear combination `Σ 2ⁱ·bᵢ` asserting the
//! binary decomposition of the output. Each emitted gate
//! `2·qᵢ₊₁ + rᵢ − qᵢ = 0` commits one bit as `rᵢ` and passes the remaining
//! value forward as `qᵢ₊₁`; the prover solves downward from the high-order
//! quotient.

use num_bigint::BigInt;
use num_traits::One;

use crate::compiled::Gate;
use crate::constraint_system::{
    Constraint, SolverKind, Term, Visibility, COEFF_ZERO,
};
use crate::error::Error;

use super::Lowering;

impl Lowering {
    pub(crate) fn lower_binary(
        &mut self,
        r1c: &Constraint,
    ) -> Result<(), Error> {
        let mut bin_dec: Vec<Term> = r1c.l.terms().to_vec();

        // reduce the output side to a single wire
        let (o, c_o) = self.pop_constant_term(&r1c.o);
        let c_o_id = self.coeff_id(&c_o);
        let ot = if o.is_empty() {
            // the output is a constant: -ot + cO = 0
            let ot = self.new_term(&BigInt::one(), None)?;
            let neg_ot = self.negate(ot)?;
            self.add_constraint(Gate::new().left(neg_ot).constant(c_o_id));
            ot
        } else {
            let ot = self.split(Term::ZERO, o.terms())?;
            if c_o_id != COEFF_ZERO {
                // fold the constant into a fresh wire: ot - fresh + cO = 0
                let fresh = self.new_term(&BigInt::one(), None)?;
                let neg_fresh = self.negate(fresh)?;
                self.add_constraint(
                    Gate::new().left(ot).output(neg_fresh).constant(c_o_id),
                );
                fresh
            } else {
                ot
            }
        };

        let nb_bits = bin_dec.len();
        let two = BigInt::from(2);
        let mut power = BigInt::one();

        // quotient chain, solved downward from ot
        let mut q = ot;

        for _ in 0..nb_bits {
            let r_i = self.new_term(&BigInt::one(), None)?;
            let q_next = self.new_term(&BigInt::one(), None)?;

            // locate the term carrying the i-th bit; the input order of the
            // decomposition is unspecified
            let at = bin_dec
                .iter()
                .position(|t| self.coeffs.value(t.coeff_id()) == &power)
                .ok_or(Error::MalformedBinaryDecomp)?;
            let bit = bin_dec.remove(at);

            if bit.visibility() != Visibility::Internal
                || bit.var_id() >= self.map.len()
            {
                return Err(Error::MalformedBinaryDecomp);
            }
            self.map[bit.var_id()] = Some(r_i.var_id());
            self.solved[bit.var_id()] = true;

            power = &power * &two;

            // 2*q[i+1] + r[i] - q[i] = 0
            let doubled = self.multiply(q_next, &two)?;
            let neg_q = self.negate(q)?;
            self.add_constraint(
                Gate::new()
                    .left(doubled)
                    .right(r_i)
                    .output(neg_q)
                    .solver(SolverKind::BinaryDec),
            );

            q = q_next;
        }

        if !bin_dec.is_empty() {
            return Err(Error::MalformedBinaryDecomp);
        }

        Ok(())
    }
}
