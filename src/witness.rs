// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Curve-agnostic assignment of the declared circuit inputs.
//!
//! The curve-specific witness containers live in the backend modules; this
//! is the value carrier they extract from. The one-wire is never part of an
//! assignment.

use num_bigint::BigInt;

/// Values assigned to the declared public and secret inputs of a circuit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    /// Public input values, in declaration order
    pub public: Vec<BigInt>,
    /// Secret input values, in declaration order
    pub secret: Vec<BigInt>,
}

impl Assignment {
    /// Create an assignment from the public and secret input values.
    pub fn new(public: Vec<BigInt>, secret: Vec<BigInt>) -> Self {
        Self { public, secret }
    }

    /// Total number of assigned inputs.
    pub fn len(&self) -> usize {
        self.public.len() + self.secret.len()
    }

    /// Whether no inputs are assigned.
    pub fn is_empty(&self) -> bool {
        self.public.is_empty() && self.secret.is_empty()
    }
}
