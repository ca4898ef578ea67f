//! Seeded random source for lane placement.
//!
//! A 32-bit linear congruential generator (multiplier 1664525, increment
//! 1013904223). The same seed always yields the same level.

#[derive(Debug, Clone)]
pub struct SimpleRng {
    seed: u32,
    state: u32,
}

impl SimpleRng {
    /// Seed 0 is remapped to 1; the reported seed stays 0.
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            state: seed.max(1),
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.state
    }

    /// Uniform-ish value in `[0, max)`, or 0 when `max` is 0.
    ///
    /// Drops the low 8 bits first; they cycle with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        match max {
            0 => 0,
            _ => (self.next_u32() >> 8) % max,
        }
    }

    /// Whole-pixel coordinate in `[0, extent)`.
    pub fn next_coord(&mut self, extent: f32) -> f32 {
        if extent < 1.0 {
            return 0.0;
        }
        self.next_range(extent as u32) as f32
    }
}
