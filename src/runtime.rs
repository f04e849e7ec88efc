// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Lowering runtime controller

use crate::compiled::Gate;

/// Runtime events
#[derive(Debug, Clone, Copy)]
pub enum RuntimeEvent {
    /// An internal wire was allocated in the output system
    InternalAllocated {
        /// Allocated wire index
        id: usize,
    },

    /// A gate was appended to the output system
    GateAppended {
        /// Appended gate
        gate: Gate,
    },

    /// An assertion gate was recorded in the output system
    AssertionAppended {
        /// Recorded gate
        gate: Gate,
    },

    /// The lowering pass finished
    LoweringFinished,
}

/// Runtime structure recording lowering events
#[derive(Debug, Clone)]
pub struct Runtime {
    #[cfg(feature = "debug")]
    events: Vec<RuntimeEvent>,
}

impl Runtime {
    /// Create a new lowering runtime with the provided capacity
    #[allow(unused_variables)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            #[cfg(feature = "debug")]
            events: Vec::with_capacity(capacity),
        }
    }

    #[allow(unused_variables)]
    pub(crate) fn event(&mut self, event: RuntimeEvent) {
        #[cfg(feature = "debug")]
        self.events.push(event);
    }

    /// Events recorded by the pass, in emission order
    #[cfg(feature = "debug")]
    pub fn events(&self) -> &[RuntimeEvent] {
        &self.events
    }
}
