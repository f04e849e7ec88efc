// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! A collection of all possible errors encountered during lowering.

use dusk_bytes::Error as DuskBytesError;

use crate::backend::CurveId;

/// Defines all possible errors that can be encountered while lowering a
/// constraint system and handing it to a backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    // Lowering errors
    /// This error occurs when a term with `Unset` visibility reaches the
    /// renumbering pass.
    UnsetInput,
    /// This error occurs when a constraint tagged as single-output carries
    /// no unsolved internal variable, or when an internal variable is
    /// referenced before any constraint has defined it.
    UnsolvableConstraint,
    /// This error occurs when the left expression of a binary decomposition
    /// does not contain exactly one term per bit with coefficients
    /// `1, 2, 4, …`.
    MalformedBinaryDecomp,
    /// This error occurs when a sub-field of a packed term would overflow
    /// its bit layout.
    CoefficientOverflow,

    // Dispatch errors
    /// This error occurs when the dispatcher receives a curve without a
    /// wired backend.
    UnsupportedCurve(CurveId),

    // Witness serialization errors
    /// This error occurs when there are not enough bytes to read out of a
    /// slice during deserialization.
    NotEnoughBytes,
    /// This error occurs when the length prefix of an encoded witness does
    /// not match the expected element count.
    InvalidWitnessSize {
        /// Expected element count
        expected: usize,
        /// Count read from the length prefix
        provided: usize,
    },
    /// Dusk-bytes serialization error
    BytesError(DuskBytesError),
    /// This error occurs when a field element is decoded from a
    /// non-canonical byte representation.
    ScalarMalformed,
}

#[cfg(feature = "std")]
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsetInput => {
                write!(f, "a term with unset visibility reached renumbering")
            }
            Self::UnsolvableConstraint => {
                write!(f, "constraint has no solvable internal variable")
            }
            Self::MalformedBinaryDecomp => {
                write!(f, "binary decomposition is missing a power-of-two term")
            }
            Self::CoefficientOverflow => {
                write!(f, "packed term sub-field overflow")
            }
            Self::UnsupportedCurve(id) => {
                write!(f, "no backend is wired for curve {}", id)
            }
            Self::NotEnoughBytes => write!(f, "not enough bytes left to read"),
            Self::InvalidWitnessSize { expected, provided } => write!(
                f,
                "witness length prefix {} doesn't match the expected element count {}",
                provided, expected
            ),
            Self::BytesError(err) => write!(f, "{:?}", err),
            Self::ScalarMalformed => write!(f, "scalar bytes malformed"),
        }
    }
}

impl From<DuskBytesError> for Error {
    fn from(bytes_err: DuskBytesError) -> Self {
        Self::BytesError(bytes_err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
