//! Generation tokens for discarding stale completions.

use std::fmt;

/// Tag stamped on an outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic source of generations, one per controller.
#[derive(Debug, Clone, Default)]
pub struct GenerationCounter {
    current: Generation,
}

impl GenerationCounter {
    /// Start a new generation, invalidating every earlier one.
    pub fn advance(&mut self) -> Generation {
        self.current = Generation(self.current.0.wrapping_add(1));
        self.current
    }

    pub fn current(&self) -> Generation {
        self.current
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.current == generation
    }
}
