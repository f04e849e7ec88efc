//! Lowering of rank-1 constraint systems (R1CS) into sparse PLONK-style
//! constraint systems.
//!
//! An R1CS constraint `⟨L,w⟩·⟨R,w⟩ = ⟨O,w⟩` carries arbitrarily wide linear
//! expressions; a PLONK gate has the fixed shape
//! `qL·a + qR·b + qM·a·b + qO·c + qK = 0`. This crate implements the pass
//! that decomposes each R1CS constraint into a minimal sequence of such
//! gates, preserving the constraint's role as a solver hint for the
//! downstream prover, and renumbers every variable into the unified
//! `[public | secret | internal]` wire layout expected by the backends.
//!
//! The lowered system, together with its coefficient pool, is handed to a
//! curve-specific backend selected through [`backend::compile`].
// Variables have always the same names in respect to wires.
#![allow(clippy::many_single_char_names)]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod backend;
pub mod compiled;
pub mod constraint_system;
pub mod error;
pub mod lowering;
pub mod prelude;
pub mod runtime;
pub mod witness;
