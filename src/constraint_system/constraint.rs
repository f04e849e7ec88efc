// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use crate::constraint_system::LinearExpression;

/// How the prover derives the unknown wire of a constraint.
///
/// Every rank-1 constraint is both an assertion and a solver hint: the tag
/// tells the downstream witness solver which strategy recovers the wire the
/// constraint defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolverKind {
    /// The constraint isolates a single unknown wire linearly.
    #[default]
    SingleOutput,
    /// The constraint asserts the binary decomposition of its output; the
    /// solver recovers one bit per gate.
    BinaryDec,
}

/// A rank-1 constraint `⟨L,w⟩·⟨R,w⟩ = ⟨O,w⟩` over the witness vector `w`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraint {
    /// Left linear expression
    pub l: LinearExpression,
    /// Right linear expression
    pub r: LinearExpression,
    /// Output linear expression
    pub o: LinearExpression,
    /// Solving strategy intended by the frontend
    pub solver: SolverKind,
}

impl Constraint {
    /// Create a constraint from its three linear expressions and solver
    /// tag.
    pub fn new(
        l: LinearExpression,
        r: LinearExpression,
        o: LinearExpression,
        solver: SolverKind,
    ) -> Self {
        Self { l, r, o, solver }
    }
}
