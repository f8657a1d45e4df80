//! RNG module - seeded random source for figure and apple selection
//!
//! Both engines draw from a small LCG so that a fixed seed replays the same
//! sequence of figures and apple positions (used heavily by the tests).

use crate::figure::ShapeKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are the well-distributed ones.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Uniformly pick one element of `items`, or `None` when it is empty
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.next_range(items.len() as u32) as usize;
        items.get(idx)
    }

    /// Uniformly pick one of the seven figure templates
    pub fn next_shape(&mut self) -> ShapeKind {
        ShapeKind::ALL[self.next_range(ShapeKind::ALL.len() as u32) as usize]
    }
}
