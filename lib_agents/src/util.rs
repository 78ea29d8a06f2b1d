use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

pub fn random_pick<'a, T, R: Rng>(choices: &'a [T], rng: &mut R) -> Option<&'a T> {
    choices.choose(rng)
}

pub fn random_choice<T, R: Rng>(choices: &[T], rng: &mut R) -> Option<T>
where
    T: Copy,
{
    random_pick(choices, rng).copied()
}

/// A fast rng, reproducible when given a seed.
pub fn get_rng(seed: Option<u64>) -> XorShiftRng {
    XorShiftRng::seed_from_u64(seed.unwrap_or_else(rand::random))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_choice_on_empty_is_none() {
        let empty: [u8; 0] = [];
        assert_eq!(None, random_choice(&empty, &mut get_rng(Some(1))));
    }

    #[test]
    fn seeded_rngs_agree() {
        let choices: Vec<usize> = (0..100).collect();

        let mut a = get_rng(Some(42));
        let mut b = get_rng(Some(42));

        for _ in 0..20 {
            assert_eq!(random_choice(&choices, &mut a), random_choice(&choices, &mut b));
        }
    }
}
