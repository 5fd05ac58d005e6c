mod framework;
mod one_of;

use ark_bn254::Fr;
use ark_ff::UniformRand as _;
use proptest::prelude::*;
use rand::SeedableRng as _;

prop_compose! {
    /// Random field elements, seeded by proptest.
    pub(crate) fn arb_fr()(seed: [u8; 32]) -> Fr {
        let rng = &mut rand::rngs::StdRng::from_seed(seed);
        Fr::rand(rng)
    }
}

pub(crate) fn fr(x: u64) -> Fr {
    Fr::from(x)
}
