// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use dusk_bls12_381::BlsScalar;
use dusk_bytes::Serializable;
use plonk_lowering::backend::bls12_381::scalar;
use plonk_lowering::prelude::*;

// Solve the witness of a lowered system over the BLS12-381 scalar field
// and check that every gate and assertion evaluates to zero.
//
// Public and secret wire values are given; internal wires are solved gate
// by gate in emission order, which exercises the solver-hint duality of
// the emitted gates: every gate either determines exactly one fresh wire
// or must already hold. `seeded_internal` pre-assigns internal wires whose
// defining gate is not linear in them (e.g. a squaring).
pub(crate) fn solve_system(
    system: &SparseSystem,
    coeffs: &Coefficients,
    public: &[BlsScalar],
    secret: &[BlsScalar],
    seeded_internal: &[(usize, BlsScalar)],
) -> Result<Vec<BlsScalar>, String> {
    assert_eq!(public.len(), system.n_public(), "public value count");
    assert_eq!(secret.len(), system.n_secret(), "secret value count");

    let mut wires: Vec<Option<BlsScalar>> = vec![None; system.n_wires()];
    for (i, value) in public.iter().enumerate() {
        wires[i] = Some(*value);
    }
    for (i, value) in secret.iter().enumerate() {
        wires[system.n_public() + i] = Some(*value);
    }
    for (i, value) in seeded_internal {
        wires[system.n_public() + system.n_secret() + i] = Some(*value);
    }

    for (i, gate) in system.constraints().iter().enumerate() {
        solve_gate(gate, coeffs, &mut wires)
            .map_err(|e| format!("gate {}: {}", i, e))?;
    }

    let wires: Vec<BlsScalar> = wires
        .into_iter()
        .enumerate()
        .map(|(i, w)| w.ok_or(format!("wire {} left unsolved", i)))
        .collect::<Result<_, _>>()?;

    for (i, gate) in system
        .constraints()
        .iter()
        .chain(system.assertions())
        .enumerate()
    {
        let value = eval_gate(gate, coeffs, &wires);
        if value != BlsScalar::zero() {
            return Err(format!("gate {} evaluates to {:?}", i, value));
        }
    }

    Ok(wires)
}

// Check the wire layout of a lowered system: every non-sentinel term has a
// concrete visibility and its wire fits the unified layout.
pub(crate) fn check_wire_layout(system: &SparseSystem) {
    let n = system.n_wires();

    for gate in system.constraints().iter().chain(system.assertions()) {
        for term in [gate.l, gate.r, gate.o, gate.m[0], gate.m[1]] {
            if term.is_zero() {
                continue;
            }
            assert_ne!(term.visibility(), Visibility::Unset);
            assert!(term.var_id() < n, "wire {} out of range", term.var_id());
        }
    }
    for entry in system.logs() {
        for wire in &entry.wires {
            assert!(*wire < n);
        }
    }
}

fn solve_gate(
    gate: &Gate,
    coeffs: &Coefficients,
    wires: &mut [Option<BlsScalar>],
) -> Result<(), String> {
    let q = |id: usize| scalar(coeffs.value(id));

    if gate.solver == SolverKind::BinaryDec {
        // 2*q[i+1] + r[i] - q[i] = 0 with q[i] known on the output wire:
        // the solver extracts one bit
        let quotient = wires[gate.o.var_id()]
            .ok_or("binary gate before its quotient is solved")?;
        let quotient = to_u64(&quotient);

        wires[gate.r.var_id()] = Some(BlsScalar::from(quotient & 1));
        wires[gate.l.var_id()] = Some(BlsScalar::from(quotient >> 1));
        return Ok(());
    }

    let mut known = q(gate.k);
    let mut unknown: Option<usize> = None;
    let mut unknown_coeff = BlsScalar::zero();

    for term in [gate.l, gate.r, gate.o] {
        if term.is_zero() {
            continue;
        }
        let coeff = q(term.coeff_id());
        match wires[term.var_id()] {
            Some(value) => known += coeff * value,
            None => {
                if coeff == BlsScalar::zero() {
                    // mirrored slot, carries no contribution
                    continue;
                }
                if unknown.map_or(false, |u| u != term.var_id()) {
                    return Err("two unknown wires".into());
                }
                unknown = Some(term.var_id());
                unknown_coeff += coeff;
            }
        }
    }

    if !gate.m[0].is_zero() && !gate.m[1].is_zero() {
        let qm = q(gate.m[0].coeff_id()) * q(gate.m[1].coeff_id());
        if qm != BlsScalar::zero() {
            let (w0, w1) = (gate.m[0].var_id(), gate.m[1].var_id());
            match (wires[w0], wires[w1]) {
                (Some(a), Some(b)) => known += qm * a * b,
                (Some(a), None) => {
                    if unknown.map_or(false, |u| u != w1) {
                        return Err("two unknown wires".into());
                    }
                    unknown = Some(w1);
                    unknown_coeff += qm * a;
                }
                (None, Some(b)) => {
                    if unknown.map_or(false, |u| u != w0) {
                        return Err("two unknown wires".into());
                    }
                    unknown = Some(w0);
                    unknown_coeff += qm * b;
                }
                (None, None) => {
                    return Err("product of unknown wires".into());
                }
            }
        }
    }

    match unknown {
        Some(wire) => {
            let inverse = unknown_coeff.invert();
            if bool::from(inverse.is_none()) {
                return Err("unknown wire with zero coefficient".into());
            }
            wires[wire] = Some(-known * inverse.unwrap());
            Ok(())
        }
        None => {
            if known != BlsScalar::zero() {
                return Err(format!("not satisfied: {:?}", known));
            }
            Ok(())
        }
    }
}

fn eval_gate(
    gate: &Gate,
    coeffs: &Coefficients,
    wires: &[BlsScalar],
) -> BlsScalar {
    let q = |id: usize| scalar(coeffs.value(id));

    let mut acc = q(gate.k);
    for term in [gate.l, gate.r, gate.o] {
        if !term.is_zero() {
            acc += q(term.coeff_id()) * wires[term.var_id()];
        }
    }
    if !gate.m[0].is_zero() && !gate.m[1].is_zero() {
        acc += q(gate.m[0].coeff_id())
            * q(gate.m[1].coeff_id())
            * wires[gate.m[0].var_id()]
            * wires[gate.m[1].var_id()];
    }

    acc
}

fn to_u64(value: &BlsScalar) -> u64 {
    let bytes = value.to_bytes();
    let mut low = [0u8; 8];
    low.copy_from_slice(&bytes[..8]);
    u64::from_le_bytes(low)
}
