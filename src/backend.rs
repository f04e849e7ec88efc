// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Curve-specific backends and the dispatcher that selects one.
//!
//! A backend receives the lowered system together with the coefficient
//! pool and converts the pooled big integers into its scalar field. The
//! set of curves is closed; curves without a wired backend are rejected.

use crate::compiled::SparseSystem;
use crate::constraint_system::ConstraintSystem;
use crate::error::Error;
use crate::lowering;

pub mod bls12_381;
pub mod bn254;

/// Identifier of a pairing-friendly curve whose scalar field can host a
/// lowered system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveId {
    /// BLS12-381
    Bls12_381,
    /// BN254
    Bn254,
    /// BLS12-377
    Bls12_377,
    /// BW6-761
    Bw6_761,
}

impl std::fmt::Display for CurveId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bls12_381 => write!(f, "BLS12-381"),
            Self::Bn254 => write!(f, "BN254"),
            Self::Bls12_377 => write!(f, "BLS12-377"),
            Self::Bw6_761 => write!(f, "BW6-761"),
        }
    }
}

/// A lowered system bound to the scalar field of its curve.
#[derive(Debug, Clone)]
pub enum CompiledCircuit {
    /// System bound to the BLS12-381 scalar field
    Bls12_381(bls12_381::CompiledCircuit),
    /// System bound to the BN254 scalar field
    Bn254(bn254::CompiledCircuit),
}

impl CompiledCircuit {
    /// Curve this system is bound to.
    pub fn curve(&self) -> CurveId {
        match self {
            Self::Bls12_381(_) => CurveId::Bls12_381,
            Self::Bn254(_) => CurveId::Bn254,
        }
    }

    /// The lowered constraint system.
    pub fn system(&self) -> &SparseSystem {
        match self {
            Self::Bls12_381(circuit) => circuit.system(),
            Self::Bn254(circuit) => circuit.system(),
        }
    }
}

/// Lower `cs` and hand the compiled system to the backend of `curve`.
///
/// Fails with [`Error::UnsupportedCurve`] when no backend is wired for the
/// requested curve.
pub fn compile(
    cs: ConstraintSystem,
    curve: CurveId,
) -> Result<CompiledCircuit, Error> {
    let (system, coeffs) = lowering::lower(cs)?;

    match curve {
        CurveId::Bls12_381 => Ok(CompiledCircuit::Bls12_381(
            bls12_381::CompiledCircuit::new(system, &coeffs),
        )),
        CurveId::Bn254 => Ok(CompiledCircuit::Bn254(
            bn254::CompiledCircuit::new(system, &coeffs),
        )),
        id => Err(Error::UnsupportedCurve(id)),
    }
}
