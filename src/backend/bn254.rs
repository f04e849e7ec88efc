// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! BN254 backend: the lowered system over the arkworks `Fr`.

use ark_bn254::Fr;
use ark_ff::{BigInteger, PrimeField};
use ark_serialize::CanonicalDeserialize;
use num_bigint::{BigInt, Sign};

use crate::compiled::SparseSystem;
use crate::constraint_system::Coefficients;
use crate::error::Error;
use crate::witness::Assignment;

// Scalar field modulus of BN254, big endian.
const FR_MODULUS: [u8; 32] = [
    0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6,
    0x81, 0x81, 0x58, 0x5d, 0x28, 0x33, 0xe8, 0x48, 0x79, 0xb9, 0x70, 0x91,
    0x43, 0xe1, 0xf5, 0x93, 0xf0, 0x00, 0x00, 0x01,
];

const FR_SIZE: usize = 32;

/// Reduce a signed big integer into the BN254 scalar field.
pub fn scalar(value: &BigInt) -> Fr {
    let modulus = BigInt::from_bytes_be(Sign::Plus, &FR_MODULUS);

    let mut reduced = value % &modulus;
    if reduced.sign() == Sign::Minus {
        reduced += &modulus;
    }

    let (_, bytes) = reduced.to_bytes_le();
    Fr::from_le_bytes_mod_order(&bytes)
}

/// A lowered constraint system with its coefficient pool converted into
/// the BN254 scalar field, ready for the proving pipeline.
#[derive(Debug, Clone)]
pub struct CompiledCircuit {
    system: SparseSystem,
    coefficients: Vec<Fr>,
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
    pub fn coefficients(&self) -> &[Fr] {
        &self.coefficients
    }
}

/// A witness over the BN254 scalar field.
///
/// Encodes as a 4-byte big-endian element count followed by each scalar in
/// its canonical 32-byte little-endian representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Witness(Vec<Fr>);

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
    pub fn values(&self) -> &[Fr] {
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
        let mut bytes = Vec::with_capacity(4 + FR_SIZE * self.0.len());

        bytes.extend_from_slice(&(self.0.len() as u32).to_be_bytes());
        for value in &self.0 {
            bytes.extend_from_slice(&value.into_bigint().to_bytes_le());
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
            if rest.len() < FR_SIZE {
                return Err(Error::NotEnoughBytes);
            }

            let value = Fr::deserialize_compressed(&rest[..FR_SIZE])
                .map_err(|_| Error::ScalarMalformed)?;

            values.push(value);
            rest = &rest[FR_SIZE..];
        }

        Ok(Self(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::Field;

    #[test]
    fn scalar_reduces_negative_values() {
        assert_eq!(scalar(&BigInt::from(-1)), -Fr::ONE);
        assert_eq!(scalar(&BigInt::from(42)), Fr::from(42u64));
    }

    #[test]
    fn scalar_reduces_values_above_the_modulus() {
        let modulus = BigInt::from_bytes_be(Sign::Plus, &FR_MODULUS);
        let value = &modulus * BigInt::from(7) + BigInt::from(11);

        assert_eq!(scalar(&value), Fr::from(11u64));
    }
}
