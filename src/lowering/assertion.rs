// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Lowering of assertions: constraints that define no wire, like a boolean
//! check.
//!
//! The case analysis mirrors the single-output split without a solve
//! target, so only the emptiness of `l`, `r` and `o` matters — eight cases,
//! one assertion gate each. Helper gates emitted while collapsing wide
//! expressions remain ordinary constraints; only the final gate is an
//! assertion.

use crate::compiled::Gate;
use crate::constraint_system::{Constraint, Term};
use crate::error::Error;

use super::Lowering;

impl Lowering {
    // (l + cL)*(r + cR) = o + cO
    pub(crate) fn lower_assertion(
        &mut self,
        r1c: &Constraint,
    ) -> Result<(), Error> {
        let (l, c_l) = self.pop_constant_term(&r1c.l);
        let (r, c_r) = self.pop_constant_term(&r1c.r);
        let (o, c_o) = self.pop_constant_term(&r1c.o);

        if o.is_empty() {
            if l.is_empty() {
                if r.is_empty() {
                    // cL*cR = cO: a constant identity, checked at verify
                    // time
                    let k = self.coeff_id(&(&c_l * &c_r - &c_o));

                    self.record_assertion(Gate::new().constant(k));
                } else {
                    // cL*(r + cR) = cO
                    let rt = self.split(Term::ZERO, r.terms())?;

                    let c_rt = self.multiply(rt, &c_l)?;
                    let k = self.coeff_id(&(&c_l * &c_r - &c_o));

                    self.record_assertion(
                        Gate::new().right(c_rt).constant(k),
                    );
                }
            } else if r.is_empty() {
                // (l + cL)*cR = cO
                let lt = self.split(Term::ZERO, l.terms())?;

                let c_rlt = self.multiply(lt, &c_r)?;
                let k = self.coeff_id(&(&c_l * &c_r - &c_o));

                self.record_assertion(Gate::new().left(c_rlt).constant(k));
            } else {
                // (l + cL)*(r + cR) = cO
                let lt = self.split(Term::ZERO, l.terms())?;
                let rt = self.split(Term::ZERO, r.terms())?;

                let c_rlt = self.multiply(lt, &c_r)?;
                let c_rt = self.multiply(rt, &c_l)?;
                let k = self.coeff_id(&(&c_l * &c_r - &c_o));

                self.record_assertion(
                    Gate::new()
                        .left(c_rlt)
                        .right(c_rt)
                        .mul(lt, rt)
                        .constant(k),
                );
            }
        } else if l.is_empty() {
            if r.is_empty() {
                // cL*cR = o + cO
                let ot = self.split(Term::ZERO, o.terms())?;

                let k = self.coeff_id(&(&c_l * &c_r - &c_o));
                let neg_ot = self.negate(ot)?;

                self.record_assertion(
                    Gate::new().output(neg_ot).constant(k),
                );
            } else {
                // cL*(r + cR) = o + cO
                let rt = self.split(Term::ZERO, r.terms())?;
                let ot = self.split(Term::ZERO, o.terms())?;

                let c_rt = self.multiply(rt, &c_l)?;
                let k = self.coeff_id(&(&c_l * &c_r - &c_o));
                let neg_ot = self.negate(ot)?;

                self.record_assertion(
                    Gate::new().right(c_rt).output(neg_ot).constant(k),
                );
            }
        } else if r.is_empty() {
            // (l + cL)*cR = o + cO
            let lt = self.split(Term::ZERO, l.terms())?;
            let ot = self.split(Term::ZERO, o.terms())?;

            let c_rlt = self.multiply(lt, &c_r)?;
            let k = self.coeff_id(&(&c_l * &c_r - &c_o));
            let neg_ot = self.negate(ot)?;

            self.record_assertion(
                Gate::new().left(c_rlt).output(neg_ot).constant(k),
            );
        } else {
            // (l + cL)*(r + cR) = o + cO
            let lt = self.split(Term::ZERO, l.terms())?;
            let rt = self.split(Term::ZERO, r.terms())?;
            let ot = self.split(Term::ZERO, o.terms())?;

            let c_rt = self.multiply(rt, &c_l)?;
            let c_rlt = self.multiply(lt, &c_r)?;
            let k = self.coeff_id(&(&c_r * &c_l - &c_o));
            let neg_ot = self.negate(ot)?;

            self.record_assertion(
                Gate::new()
                    .left(c_rlt)
                    .right(c_rt)
                    .mul(lt, rt)
                    .output(neg_ot)
                    .constant(k),
            );
        }

        Ok(())
    }
}
