// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Lowering of single-output constraints.
//!
//! After the constants and the wire to solve are extracted, a constraint
//! has the shape
//!
//! ```text
//! (t + l + cL) · (r + cR) = o + cO        (t on the left), or
//! (l + cL) · (r + cR) = t + o + cO        (t on the output)
//! ```
//!
//! with `l`, `r`, `o` possibly empty. The eight emptiness combinations per
//! side of `t` give sixteen structurally distinct decompositions. Every
//! case stamps the constant `cL·cR − cO` into the emitted gate and
//! allocates a fresh wire for `t`, signed so the gate is an exact identity
//! of the input constraint.

use num_bigint::BigInt;
use num_traits::One;

use crate::compiled::Gate;
use crate::constraint_system::{Constraint, Term};
use crate::error::Error;

use super::{find_unsolved_variable, Lowering};

impl Lowering {
    pub(crate) fn lower_single_output(
        &mut self,
        r1c: &Constraint,
    ) -> Result<(), Error> {
        let (pos, id_cs) = find_unsolved_variable(r1c, &self.solved)
            .ok_or(Error::UnsolvableConstraint)?;

        // the product is commutative: if the unsolved variable sits in R,
        // swap the sides so the case analysis only sees L and O
        let (l_in, r_in) = match pos {
            1 => (&r1c.r, &r1c.l),
            _ => (&r1c.l, &r1c.r),
        };
        let pos = if pos == 1 { 0 } else { pos };

        let (l, c_l) = self.pop_constant_term(l_in);
        let (r, c_r) = self.pop_constant_term(r_in);
        let (o, c_o) = self.pop_constant_term(&r1c.o);

        // pop the unsolved wire from the expression holding it
        let (l, o, to_solve) = if pos == 0 {
            let (l, t) = l.pop_internal_variable(id_cs);
            (l, o, t)
        } else {
            let (o, t) = o.pop_internal_variable(id_cs);
            (l, o, t)
        };
        let to_solve = to_solve.ok_or(Error::UnsolvableConstraint)?;
        let c_s = self.coeffs.value(to_solve.coeff_id()).clone();

        let mut s = 0u8;
        if pos != 0 {
            s |= 0b1000;
        }
        if !o.is_empty() {
            s |= 0b0100;
        }
        if !l.is_empty() {
            s |= 0b0010;
        }
        if !r.is_empty() {
            s |= 0b0001;
        }

        match s {
            // (toSolve + cL)*cR = cO
            0b0000 => {
                let k = self.coeff_id(&(&c_l * &c_r - &c_o));
                let res = self.new_term(&(&c_s * &c_r), Some(id_cs))?;

                self.add_constraint(Gate::new().left(res).constant(k));
            }

            // (toSolve + cL)*(r + cR) = cO
            0b0001 => {
                let res = self.new_term(&c_s, Some(id_cs))?;

                let rt = self.split(Term::ZERO, r.terms())?;
                let c_rt = self.multiply(rt, &c_l)?;
                let c_res = self.multiply(res, &c_r)?;

                let k = self.coeff_id(&(&c_l * &c_r - &c_o));

                self.add_constraint(
                    Gate::new()
                        .left(c_res)
                        .right(c_rt)
                        .mul(res, rt)
                        .constant(k),
                );
            }

            // (toSolve + l + cL)*cR = cO
            0b0010 => {
                let lt = self.split(Term::ZERO, l.terms())?;
                let lt = self.multiply(lt, &c_r)?;

                let k = self.coeff_id(&(&c_l * &c_r - &c_o));
                let res = self.new_term(&(&c_s * &c_r), Some(id_cs))?;

                self.add_constraint(
                    Gate::new().left(res).right(lt).constant(k),
                );
            }

            // (toSolve + l + cL)*(r + cR) = cO
            // => toSolve*r + toSolve*cR + [l*r + l*cR + cL*r + cL*cR - cO] = 0
            0b0011 => {
                let u = self.new_term(&BigInt::one(), None)?;
                let lt = self.split(Term::ZERO, l.terms())?;
                let rt = self.split(Term::ZERO, r.terms())?;
                let c_rlt = self.multiply(lt, &c_r)?;
                let c_rt = self.multiply(rt, &c_l)?;

                let k = self.coeff_id(&(&c_l * &c_r - &c_o));

                self.add_constraint(
                    Gate::new()
                        .left(c_rlt)
                        .right(c_rt)
                        .mul(lt, rt)
                        .output(u)
                        .constant(k),
                );

                let res = self.new_term(&c_s, Some(id_cs))?;
                let c_res = self.multiply(res, &c_r)?;
                let neg_u = self.negate(u)?;

                self.add_constraint(
                    Gate::new().right(c_res).mul(res, rt).output(neg_u),
                );
            }

            // (toSolve + cL)*cR = o + cO
            0b0100 => {
                let ot = self.split(Term::ZERO, o.terms())?;

                let k = self.coeff_id(&(&c_l * &c_r - &c_o));
                let res = self.new_term(&(&c_s * &c_r), Some(id_cs))?;
                let neg_ot = self.negate(ot)?;

                self.add_constraint(
                    Gate::new().left(res).output(neg_ot).constant(k),
                );
            }

            // (toSolve + cL)*(r + cR) = o + cO
            // => toSolve*r + toSolve*cR + cL*r + cL*cR - cO - o = 0
            0b0101 => {
                let ot = self.split(Term::ZERO, o.terms())?;
                let res = self.new_term(&c_s, Some(id_cs))?;

                let rt = self.split(Term::ZERO, r.terms())?;

                let k = self.coeff_id(&(&c_l * &c_r - &c_o));

                let c_res = self.multiply(res, &c_r)?;
                let c_rt = self.multiply(rt, &c_l)?;
                let neg_ot = self.negate(ot)?;

                self.add_constraint(
                    Gate::new()
                        .left(c_res)
                        .right(c_rt)
                        .mul(res, rt)
                        .output(neg_ot)
                        .constant(k),
                );
            }

            // (toSolve + l + cL)*cR = o + cO
            // => toSolve*cR + l*cR + cL*cR - cO - o = 0
            0b0110 => {
                let ot = self.split(Term::ZERO, o.terms())?;
                let lt = self.split(Term::ZERO, l.terms())?;

                let k = self.coeff_id(&(&c_l * &c_r - &c_o));
                let res = self.new_term(&(&c_s * &c_r), Some(id_cs))?;
                let c_rlt = self.multiply(lt, &c_r)?;
                let neg_ot = self.negate(ot)?;

                self.add_constraint(
                    Gate::new()
                        .left(res)
                        .right(c_rlt)
                        .output(neg_ot)
                        .constant(k),
                );
            }

            // (toSolve + l + cL)*(r + cR) = o + cO
            // => toSolve*r + toSolve*cR + [[l*r + l*cR + cL*r + cL*cR - cO] - o] = 0
            0b0111 => {
                // [l*r + l*cR + cL*r + cL*cR - cO] + u = 0
                let u = self.new_term(&BigInt::one(), None)?;
                let lt = self.split(Term::ZERO, l.terms())?;
                let rt = self.split(Term::ZERO, r.terms())?;
                let c_rlt = self.multiply(lt, &c_r)?;
                let c_rt = self.multiply(rt, &c_l)?;

                let k = self.coeff_id(&(&c_l * &c_r - &c_o));

                self.add_constraint(
                    Gate::new()
                        .left(c_rlt)
                        .right(c_rt)
                        .mul(lt, rt)
                        .output(u)
                        .constant(k),
                );

                // u + o + v = 0   (v = -u - o)
                let v = self.new_term(&BigInt::one(), None)?;
                let ot = self.split(Term::ZERO, o.terms())?;
                self.add_constraint(
                    Gate::new().left(u).right(ot).output(v),
                );

                // toSolve*r + toSolve*cR + v = 0
                let res = self.new_term(&c_s, Some(id_cs))?;
                let c_res = self.multiply(res, &c_r)?;

                self.add_constraint(
                    Gate::new().right(c_res).mul(res, rt).output(v),
                );
            }

            // cL*cR = toSolve + cO
            0b1000 => {
                let k = self.coeff_id(&(&c_l * &c_r - &c_o));
                let res = self.new_term(&-&c_s, Some(id_cs))?;

                self.add_constraint(Gate::new().output(res).constant(k));
            }

            // cL*(r + cR) = toSolve + cO
            0b1001 => {
                let rt = self.split(Term::ZERO, r.terms())?;

                let c_rt = self.multiply(rt, &c_l)?;
                let k = self.coeff_id(&(&c_l * &c_r - &c_o));
                let res = self.new_term(&-&c_s, Some(id_cs))?;

                self.add_constraint(
                    Gate::new().right(c_rt).output(res).constant(k),
                );
            }

            // (l + cL)*cR = toSolve + cO
            0b1010 => {
                let lt = self.split(Term::ZERO, l.terms())?;

                let c_rlt = self.multiply(lt, &c_r)?;
                let k = self.coeff_id(&(&c_l * &c_r - &c_o));
                let res = self.new_term(&-&c_s, Some(id_cs))?;

                self.add_constraint(
                    Gate::new().left(c_rlt).output(res).constant(k),
                );
            }

            // (l + cL)*(r + cR) = toSolve + cO
            0b1011 => {
                let lt = self.split(Term::ZERO, l.terms())?;
                let rt = self.split(Term::ZERO, r.terms())?;

                let c_rlt = self.multiply(lt, &c_r)?;
                let c_rt = self.multiply(rt, &c_l)?;
                let k = self.coeff_id(&(&c_l * &c_r - &c_o));
                let res = self.new_term(&-&c_s, Some(id_cs))?;

                self.add_constraint(
                    Gate::new()
                        .left(c_rlt)
                        .right(c_rt)
                        .mul(lt, rt)
                        .output(res)
                        .constant(k),
                );
            }

            // cL*cR = toSolve + o + cO
            0b1100 => {
                let ot = self.split(Term::ZERO, o.terms())?;

                let k = self.coeff_id(&(&c_l * &c_r - &c_o));
                let neg_ot = self.negate(ot)?;
                let res = self.new_term(&-&c_s, Some(id_cs))?;

                self.add_constraint(
                    Gate::new().left(neg_ot).output(res).constant(k),
                );
            }

            // cL*(r + cR) = toSolve + o + cO
            0b1101 => {
                let rt = self.split(Term::ZERO, r.terms())?;
                let ot = self.split(Term::ZERO, o.terms())?;

                let c_rt = self.multiply(rt, &c_l)?;
                let k = self.coeff_id(&(&c_l * &c_r - &c_o));
                let neg_ot = self.negate(ot)?;
                let res = self.new_term(&-&c_s, Some(id_cs))?;

                self.add_constraint(
                    Gate::new()
                        .left(neg_ot)
                        .right(c_rt)
                        .output(res)
                        .constant(k),
                );
            }

            // (l + cL)*cR = toSolve + o + cO
            0b1110 => {
                let lt = self.split(Term::ZERO, l.terms())?;
                let ot = self.split(Term::ZERO, o.terms())?;

                let c_rlt = self.multiply(lt, &c_r)?;
                let k = self.coeff_id(&(&c_l * &c_r - &c_o));
                let neg_ot = self.negate(ot)?;
                let res = self.new_term(&-&c_s, Some(id_cs))?;

                self.add_constraint(
                    Gate::new()
                        .left(c_rlt)
                        .right(neg_ot)
                        .output(res)
                        .constant(k),
                );
            }

            // (l + cL)*(r + cR) = toSolve + o + cO
            0b1111 => {
                let lt = self.split(Term::ZERO, l.terms())?;
                let rt = self.split(Term::ZERO, r.terms())?;
                let ot = self.split(Term::ZERO, o.terms())?;

                let c_rlt = self.multiply(lt, &c_r)?;
                let c_rt = self.multiply(rt, &c_l)?;
                let k = self.coeff_id(&(&c_l * &c_r - &c_o));

                let u = self.new_term(&BigInt::one(), None)?;
                self.add_constraint(
                    Gate::new()
                        .left(c_rlt)
                        .right(c_rt)
                        .mul(lt, rt)
                        .output(u)
                        .constant(k),
                );

                // u + o + toSolve*cS = 0
                let res = self.new_term(&c_s, Some(id_cs))?;
                self.add_constraint(
                    Gate::new().left(u).right(ot).output(res),
                );
            }

            _ => unreachable!("case index is four bits"),
        }

        self.solved[id_cs] = true;

        Ok(())
    }
}
