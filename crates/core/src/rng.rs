//! RNG module - uniform random shape selection
//!
//! Every spawn draws one of the seven shapes with equal probability and no
//! bag memory. Seeded pickers are deterministic, which tests rely on.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::types::ShapeName;

/// Uniform shape source
#[derive(Debug, Clone)]
pub struct ShapePicker {
    rng: StdRng,
}

impl ShapePicker {
    /// Picker seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic picker for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is given, entropy otherwise
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// Draw the next shape name
    pub fn pick(&mut self) -> ShapeName {
        *ShapeName::ALL
            .choose(&mut self.rng)
            .unwrap_or(&ShapeName::ALL[0])
    }
}
