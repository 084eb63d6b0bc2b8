/// Deterministic scalar noise driving the shake displacement.
///
/// Cheap sine hash: equal seeds give equal outputs within a run, and the
/// result always lands in [0, 1). Not statistically strong - it only has
/// to look irregular frame to frame while staying reproducible. Non-finite
/// seeds pass NaN/Inf straight through.
pub fn random(seed: f32) -> f32 {
    let dot = seed * 3525.46 + seed * -54.3415;
    fract(543.2543 * dot.sin())
}

/// Fractional part via floor, so negative inputs still map into [0, 1).
fn fract(x: f32) -> f32 {
    x - x.floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn same_seed_same_value() {
        for seed in [0.0, 0.25, 1.0, -3.7, 1234.5] {
            assert_eq!(random(seed), random(seed));
        }
    }

    #[test]
    fn output_stays_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..10_000 {
            let seed: f32 = rng.random_range(-1000.0..1000.0);
            let value = random(seed);
            assert!(
                (0.0..1.0).contains(&value),
                "random({seed}) = {value} out of range"
            );
        }
    }

    #[test]
    fn matches_sine_hash_formula() {
        let seed = 0.25_f32;
        let dot = seed * 3525.46 + seed * -54.3415;
        let expected = 543.2543 * dot.sin();
        assert_eq!(random(seed), expected - expected.floor());
    }

    #[test]
    fn fract_wraps_negatives_into_unit_interval() {
        assert_eq!(fract(-0.25), 0.75);
        assert_eq!(fract(2.5), 0.5);
        assert_eq!(fract(-3.0), 0.0);
    }
}
