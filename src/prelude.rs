// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Collection of the types needed to use the lowering library.
//!
//! Use this as the only import that you need to interact with the
//! principal data structures of the crate.

pub use crate::backend::{compile, CompiledCircuit, CurveId};
pub use crate::compiled::{Gate, SparseSystem};
pub use crate::constraint_system::{
    Coefficients, Constraint, ConstraintSystem, LinearExpression, LogEntry,
    SolverKind, Term, Visibility,
};
pub use crate::error::Error;
pub use crate::lowering::{lower, renumber};
pub use crate::witness::Assignment;
// Re-export the coefficient integer type
pub use num_bigint::BigInt;
