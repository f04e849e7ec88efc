// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Final renumbering of gate terms into the unified
//! `[public | secret | internal]` wire layout.

use crate::compiled::{Gate, LogEntry, SparseSystem};
use crate::constraint_system::{self, Term, Visibility, COEFF_ZERO};
use crate::error::Error;

/// Rewrite every term of every gate and assertion of `system` into the
/// unified `[public | secret | internal]` wire layout:
///
/// - public wire `v` becomes `v - dropped_public` (the one-wire leaves the
///   layout),
/// - secret wire `v` becomes `v + n_public`,
/// - internal wire `v` becomes `internal_map[v] + n_public + n_secret`.
///
/// Offsets come from the system's own counters. Applied to a system with no
/// public or secret wires, an identity map and `dropped_public = 0`, the
/// rewrite is a no-op, so renumbering an already-unified system changes
/// nothing.
///
/// Fails with [`Error::UnsetInput`] when a non-sentinel term carries
/// [`Visibility::Unset`], and with [`Error::UnsolvableConstraint`] when an
/// internal wire has no entry in `internal_map`.
pub fn renumber(
    system: &mut SparseSystem,
    internal_map: &[Option<usize>],
    dropped_public: usize,
) -> Result<(), Error> {
    let n_public = system.n_public();
    let n_secret = system.n_secret();

    for gate in system.constraints_mut() {
        offset_gate(gate, internal_map, n_public, n_secret, dropped_public)?;
    }
    for gate in system.assertions_mut() {
        offset_gate(gate, internal_map, n_public, n_secret, dropped_public)?;
    }

    Ok(())
}

fn offset_gate(
    gate: &mut Gate,
    internal_map: &[Option<usize>],
    n_public: usize,
    n_secret: usize,
    dropped_public: usize,
) -> Result<(), Error> {
    // ensure that L = M[0] and R = M[1] up to scalar: whichever of the pair
    // carries a zero coefficient adopts the other's wire
    if gate.l.coeff_id() == COEFF_ZERO {
        if !gate.m[0].is_zero() {
            gate.l = gate.m[0].without_coeff();
        }
    } else if gate.m[0].coeff_id() == COEFF_ZERO {
        gate.m[0] = gate.l.without_coeff();
    }

    if gate.r.coeff_id() == COEFF_ZERO {
        if !gate.m[1].is_zero() {
            gate.r = gate.m[1].without_coeff();
        }
    } else if gate.m[1].coeff_id() == COEFF_ZERO {
        gate.m[1] = gate.r.without_coeff();
    }

    offset_term(&mut gate.l, internal_map, n_public, n_secret, dropped_public)?;
    offset_term(&mut gate.r, internal_map, n_public, n_secret, dropped_public)?;
    offset_term(&mut gate.o, internal_map, n_public, n_secret, dropped_public)?;
    offset_term(
        &mut gate.m[0],
        internal_map,
        n_public,
        n_secret,
        dropped_public,
    )?;
    offset_term(
        &mut gate.m[1],
        internal_map,
        n_public,
        n_secret,
        dropped_public,
    )?;

    Ok(())
}

// In a gate not all terms are necessarily set; the absent ones are the
// sentinel and are skipped.
fn offset_term(
    t: &mut Term,
    internal_map: &[Option<usize>],
    n_public: usize,
    n_secret: usize,
    dropped_public: usize,
) -> Result<(), Error> {
    if t.is_zero() {
        return Ok(());
    }

    let id = resolve_wire(
        t.var_id(),
        t.visibility(),
        internal_map,
        n_public,
        n_secret,
        dropped_public,
    )?;
    t.set_var_id(id)
}

// Unified wire index of a variable, shared by the gate rewrite and the log
// resolution.
fn resolve_wire(
    var_id: usize,
    visibility: Visibility,
    internal_map: &[Option<usize>],
    n_public: usize,
    n_secret: usize,
    dropped_public: usize,
) -> Result<usize, Error> {
    match visibility {
        Visibility::Public => var_id
            .checked_sub(dropped_public)
            .ok_or(Error::UnsetInput),
        Visibility::Secret => Ok(var_id + n_public),
        Visibility::Internal => internal_map
            .get(var_id)
            .copied()
            .flatten()
            .map(|id| id + n_public + n_secret)
            .ok_or(Error::UnsolvableConstraint),
        Visibility::Unset => Err(Error::UnsetInput),
    }
}

// Rewrite the frontend log entries against the unified wire layout.
pub(crate) fn resolve_logs(
    logs: &[constraint_system::LogEntry],
    internal_map: &[Option<usize>],
    n_public: usize,
    n_secret: usize,
    dropped_public: usize,
) -> Result<Vec<LogEntry>, Error> {
    logs.iter()
        .map(|entry| {
            let wires = entry
                .to_resolve
                .iter()
                .map(|t| {
                    resolve_wire(
                        t.var_id(),
                        t.visibility(),
                        internal_map,
                        n_public,
                        n_secret,
                        dropped_public,
                    )
                })
                .collect::<Result<Vec<_>, Error>>()?;

            Ok(LogEntry {
                format: entry.format.clone(),
                wires,
            })
        })
        .collect()
}
