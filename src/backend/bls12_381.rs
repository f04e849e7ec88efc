// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! BLS12-381 backend: the lowered system over `BlsScalar`.

use dusk_bls12_381::BlsScalar;
use dusk_bytes::Serializable;
use num_bigint::{BigInt, Sign};

use crate::compiled::SparseSystem;
use crate::constraint_system::Coefficients;
use crate::error::Error;
use crate::witness::Assignment;

// Scalar field modulus of BLS12-381, big endian.
const FR_MODULUS: [u8; 32] = [
    0x73, 0xed, 0xa7, 0x53, 0x29, 0x9d, 0x7d, 0x48, 0x33, 0x39, 0xd8, 0x08,
    0x09, 0xa1, 0xd8, 0x05, 0x53, 0xbd, 0xa4, 0x02, 0xff, 0xfe, 0x5b, 0xfe,
    0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x01,
];

/// Reduce a signed big integer into the BLS12-381 scalar field.
pub fn scalar(value: &BigInt) -> BlsScalar {
    let modulus = BigInt::from_bytes_be(Sign::Plus, &FR_MODULUS);

    let mut reduced = value % &modulus;
    if reduced.sign() == Sign::Minus {
        reduced += &modulus;
    }

    let (_, bytes) = reduced.to_bytes_le();
    let mut wide = [0u8; 64];
    wide[..bytes.len()].copy_from_slice(&bytes);

    BlsScalar::from_bytes_wide(&wide)
}

/// A lowered constraint system with its coefficient pool converted into
/// the BLS12-381 scalar field, ready for the proving pipeline.
#[derive(Debug, Clone)]
pub struct CompiledCircuit {
    system: SparseSystem,
    coefficients: Vec<BlsScalar>,
}

impl CompiledCircuit {
    /// Bind a lowered system to the curve by converting the pooled
    /// coefficients. Pool indices stamped into the gate terms keep their
    /// meaning.
    pub fn new(system: SparseSystem, coeffs: &Coefficients) -> Self {
        let coefficients = coeffs.values().iter().map(scalar).collect();

        Self {
            system,
            coefficients,
        }
    }

    /// The lowered constraint system.
    pub fn system(&self) -> &SparseSystem {
        &self.system
    }

    /// The converted coefficient pool, index-compatible with the pool the
    /// system was lowered with.
    pub fn coefficients(&self) -> &[BlsScalar] {
        &self.coefficients
    }
}

/// A witness over the BLS12-381 scalar field.
///
/// Encodes as a 4-byte big-endian element count followed by each scalar in
/// its canonical 32-byte representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Witness(Vec<BlsScalar>);

impl Witness {
    /// Extract the full witness `[public | secret]` from an assignment.
    pub fn from_full_assignment(assignment: &Assignment) -> Self {
        let values = assignment
            .public
            .iter()
            .chain(assignment.secret.iter())
            .map(scalar)
            .collect();

        Self(values)
    }

    /// Extract the public part of the witness from an assignment.
    pub fn from_public_assignment(assignment: &Assignment) -> Self {
        Self(assignment.public.iter().map(scalar).collect())
    }

    /// The witness values.
    pub fn values(&self) -> &[BlsScalar] {
        &self.0
    }

    /// Number of witness values.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the witness holds no values.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serialize the witness.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes =
            Vec::with_capacity(4 + BlsScalar::SIZE * self.0.len());

        bytes.extend_from_slice(&(self.0.len() as u32).to_be_bytes());
        for value in &self.0 {
            bytes.extend_from_slice(&value.to_bytes());
        }

        bytes
    }

    /// Deserialize a witness of exactly `expected` elements; the length
    /// prefix must match and no more than `expected` elements are read.
    pub fn from_slice(bytes: &[u8], expected: usize) -> Result<Self, Error> {
        if bytes.len() < 4 {
            return Err(Error::NotEnoughBytes);
        }

        let mut prefix = [0u8; 4];
        prefix.copy_from_slice(&bytes[..4]);
        let provided = u32::from_be_bytes(prefix) as usize;
        if provided != expected {
            return Err(Error::InvalidWitnessSize { expected, provided });
        }

        let mut values = Vec::with_capacity(expected);
        let mut rest = &bytes[4..];
        for _ in 0..expected {
            if rest.len() < BlsScalar::SIZE {
                return Err(Error::NotEnoughBytes);
            }

            let mut scalar_bytes = [0u8; BlsScalar::SIZE];
            scalar_bytes.copy_from_slice(&rest[..BlsScalar::SIZE]);
            let value =
                <BlsScalar as Serializable<32>>::from_bytes(&scalar_bytes)?;

            values.push(value);
            rest = &rest[BlsScalar::SIZE..];
        }

        Ok(Self(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_reduces_negative_values() {
        // -1 maps to r - 1
        assert_eq!(scalar(&BigInt::from(-1)), -BlsScalar::one());
        assert_eq!(scalar(&BigInt::from(42)), BlsScalar::from(42u64));
        assert_eq!(scalar(&BigInt::from(0)), BlsScalar::zero());
    }

    #[test]
    fn scalar_reduces_values_above_the_modulus() {
        let modulus = BigInt::from_bytes_be(Sign::Plus, &FR_MODULUS);
        let value = &modulus * BigInt::from(3) + BigInt::from(5);

        assert_eq!(scalar(&value), BlsScalar::from(5u64));
    }
}
