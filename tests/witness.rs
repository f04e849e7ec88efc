// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use dusk_bls12_381::BlsScalar;
use plonk_lowering::backend::{bls12_381, bn254};
use plonk_lowering::prelude::*;

fn assignment() -> Assignment {
    Assignment::new(
        vec![BigInt::from(1), BigInt::from(2)],
        vec![BigInt::from(3)],
    )
}

#[test]
fn full_assignment_lays_out_public_then_secret() {
    let witness = bls12_381::Witness::from_full_assignment(&assignment());

    assert_eq!(
        witness.values(),
        &[
            BlsScalar::from(1),
            BlsScalar::from(2),
            BlsScalar::from(3)
        ]
    );

    let public = bls12_381::Witness::from_public_assignment(&assignment());
    assert_eq!(
        public.values(),
        &[BlsScalar::from(1), BlsScalar::from(2)]
    );
}

#[test]
fn encoding_is_length_prefixed() {
    let witness = bls12_381::Witness::from_full_assignment(&assignment());
    let bytes = witness.to_bytes();

    // 4-byte big-endian element count, then 32 bytes per element
    assert_eq!(bytes.len(), 4 + 3 * 32);
    assert_eq!(&bytes[..4], &[0, 0, 0, 3]);
}

#[test]
fn encoding_roundtrip() {
    let witness = bls12_381::Witness::from_full_assignment(&assignment());
    let bytes = witness.to_bytes();

    let decoded = bls12_381::Witness::from_slice(&bytes, 3).unwrap();
    assert_eq!(decoded, witness);

    // trailing bytes beyond the declared count are not read
    let mut padded = bytes.clone();
    padded.extend_from_slice(&[0xff; 7]);
    let decoded = bls12_381::Witness::from_slice(&padded, 3).unwrap();
    assert_eq!(decoded, witness);
}

#[test]
fn reader_enforces_the_expected_size() {
    let witness = bls12_381::Witness::from_full_assignment(&assignment());
    let bytes = witness.to_bytes();

    assert_eq!(
        bls12_381::Witness::from_slice(&bytes, 2),
        Err(Error::InvalidWitnessSize {
            expected: 2,
            provided: 3
        })
    );

    // truncated payloads are rejected
    assert_eq!(
        bls12_381::Witness::from_slice(&bytes[..bytes.len() - 1], 3),
        Err(Error::NotEnoughBytes)
    );
    assert_eq!(
        bls12_381::Witness::from_slice(&bytes[..3], 3),
        Err(Error::NotEnoughBytes)
    );
}

#[test]
fn non_canonical_scalars_are_rejected() {
    // a 32-byte block of 0xff is larger than the field modulus
    let mut bytes = vec![0, 0, 0, 1];
    bytes.extend_from_slice(&[0xff; 32]);

    assert!(bls12_381::Witness::from_slice(&bytes, 1).is_err());
    assert!(bn254::Witness::from_slice(&bytes, 1).is_err());
}

#[test]
fn negative_assignments_reduce_into_the_field() {
    let assignment =
        Assignment::new(vec![BigInt::from(-1)], Vec::new());

    let witness = bls12_381::Witness::from_full_assignment(&assignment);
    assert_eq!(witness.values(), &[-BlsScalar::one()]);
}

#[test]
fn bn254_encoding_roundtrip() {
    let witness = bn254::Witness::from_full_assignment(&assignment());
    let bytes = witness.to_bytes();

    assert_eq!(bytes.len(), 4 + 3 * 32);
    assert_eq!(&bytes[..4], &[0, 0, 0, 3]);

    let decoded = bn254::Witness::from_slice(&bytes, 3).unwrap();
    assert_eq!(decoded, witness);

    assert_eq!(
        bn254::Witness::from_slice(&bytes, 4),
        Err(Error::InvalidWitnessSize {
            expected: 4,
            provided: 3
        })
    );
}
