use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const MIN_DELIVERY_DAYS: u32 = 1;
pub const MAX_DELIVERY_DAYS: u32 = 10;

/// Draws a delivery estimate, uniform over 1-10 days inclusive.
pub fn estimate_delivery_days<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(MIN_DELIVERY_DAYS..=MAX_DELIVERY_DAYS)
}

/// Seeded when a seed is configured so runs can be replayed.
pub fn delivery_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            tracing::debug!("Seeding delivery estimates with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}
