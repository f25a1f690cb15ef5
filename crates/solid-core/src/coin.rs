//! Injectable coin flips for examples whose outcome is a random yes/no.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;

pub trait Coin {
    fn flip(&self) -> bool;
}

/// Fair coin backed by a `StdRng`; reproducible when built from a seed.
#[derive(Debug)]
pub struct RandomCoin {
    rng: RefCell<StdRng>,
}

impl RandomCoin {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: RefCell::new(StdRng::from_entropy()),
        }
    }
}

impl Coin for RandomCoin {
    fn flip(&self) -> bool {
        self.rng.borrow_mut().gen_bool(0.5)
    }
}

/// Always lands the same way.
#[derive(Debug, Clone, Copy)]
pub struct FixedCoin(pub bool);

impl Coin for FixedCoin {
    fn flip(&self) -> bool {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_coins_agree() {
        let a = RandomCoin::seeded(42);
        let b = RandomCoin::seeded(42);

        let left: Vec<bool> = (0..32).map(|_| a.flip()).collect();
        let right: Vec<bool> = (0..32).map(|_| b.flip()).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_seeded_coin_lands_both_ways() {
        let coin = RandomCoin::seeded(7);
        let flips: Vec<bool> = (0..64).map(|_| coin.flip()).collect();
        assert!(flips.iter().any(|f| *f));
        assert!(flips.iter().any(|f| !*f));
    }

    #[test]
    fn test_fixed_coin() {
        assert!(FixedCoin(true).flip());
        assert!(!FixedCoin(false).flip());
    }
}
