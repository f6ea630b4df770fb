use mondrian_recolor::Rgb;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of random background colors.
///
/// Seeded generators repeat the same sequence, which keeps CLI renders
/// reproducible.
#[derive(Debug, Clone)]
pub struct BackgroundGenerator {
    rng: StdRng,
}

impl BackgroundGenerator {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is set, otherwise from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// Draw the next background; each channel uniform over 0..=255.
    pub fn next_color(&mut self) -> Rgb {
        let [r, g, b]: [u8; 3] = self.rng.gen();
        Rgb::new(r, g, b)
    }
}
