// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Interning pool for big-integer coefficients.

use hashbrown::HashMap;
use num_bigint::BigInt;
use num_traits::{One, Zero};

/// Pool index of the coefficient `0`.
pub const COEFF_ZERO: usize = 0;
/// Pool index of the coefficient `1`.
pub const COEFF_ONE: usize = 1;
/// Pool index of the coefficient `-1`.
pub const COEFF_MINUS_ONE: usize = 2;
/// Pool index of the coefficient `2`.
pub const COEFF_TWO: usize = 3;

/// Append-only interning table of big-integer coefficients.
///
/// Terms reference coefficients by pool index, so the pool is shared
/// between the lowering pass and the backend that eventually receives the
/// lowered system: indices stamped into terms stay valid after hand-off.
/// Existing indices are never invalidated.
#[derive(Debug, Clone)]
pub struct Coefficients {
    values: Vec<BigInt>,
    indexes: HashMap<BigInt, usize>,
}

impl Default for Coefficients {
    fn default() -> Self {
        Self::new()
    }
}

impl Coefficients {
    /// Create a pool seeded with the reserved coefficients `0`, `1`, `-1`
    /// and `2` at the indices [`COEFF_ZERO`], [`COEFF_ONE`],
    /// [`COEFF_MINUS_ONE`] and [`COEFF_TWO`].
    pub fn new() -> Self {
        let mut pool = Self {
            values: Vec::new(),
            indexes: HashMap::new(),
        };

        pool.coeff_id(&BigInt::zero());
        pool.coeff_id(&BigInt::one());
        pool.coeff_id(&-BigInt::one());
        pool.coeff_id(&BigInt::from(2));

        pool
    }

    /// Index of `value` in the pool, interning it first if it isn't present
    /// yet.
    pub fn coeff_id(&mut self, value: &BigInt) -> usize {
        if let Some(id) = self.indexes.get(value) {
            return *id;
        }

        let id = self.values.len();
        self.values.push(value.clone());
        self.indexes.insert(value.clone(), id);

        id
    }

    /// Coefficient stored at `id`.
    ///
    /// # Panics
    /// Panics if `id` was not produced by [`Self::coeff_id`].
    pub fn value(&self, id: usize) -> &BigInt {
        &self.values[id]
    }

    /// All pooled coefficients, in interning order.
    pub fn values(&self) -> &[BigInt] {
        &self.values
    }

    /// Number of pooled coefficients.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the pool is empty. A freshly created pool never is.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_indices() {
        let pool = Coefficients::new();

        assert_eq!(pool.value(COEFF_ZERO), &BigInt::zero());
        assert_eq!(pool.value(COEFF_ONE), &BigInt::one());
        assert_eq!(pool.value(COEFF_MINUS_ONE), &-BigInt::one());
        assert_eq!(pool.value(COEFF_TWO), &BigInt::from(2));
        assert_eq!(pool.len(), 4);
    }

    #[test]
    fn interning_is_by_value() {
        let mut pool = Coefficients::new();

        let id = pool.coeff_id(&BigInt::from(42));
        assert_eq!(id, 4);
        assert_eq!(pool.coeff_id(&BigInt::from(42)), id);
        assert_eq!(pool.coeff_id(&BigInt::from(2)), COEFF_TWO);
        assert_eq!(pool.len(), 5);
    }

    #[test]
    fn appending_is_monotone() {
        let mut pool = Coefficients::new();

        let a = pool.coeff_id(&BigInt::from(-7));
        let b = pool.coeff_id(&BigInt::from(100));

        assert!(a < b);
        assert_eq!(pool.value(a), &BigInt::from(-7));
        assert_eq!(pool.value(b), &BigInt::from(100));
    }
}
