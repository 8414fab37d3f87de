use crate::mod_int::ModInt;
use crate::random;
use crate::Result;
use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_prime::{nt_funcs, PrimalityTestConfig};
use num_traits::{One, Zero};
use rand::{CryptoRng, Rng};
use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};

/// Probabilistic primality oracle. Implementations answer "probably prime"
/// with their own confidence bound; a `true` answer is never a certainty.
pub trait Primality {
    fn is_probably_prime(&self, n: &BigUint) -> bool;
}

impl<T: Primality + ?Sized> Primality for &T {
    fn is_probably_prime(&self, n: &BigUint) -> bool {
        (**self).is_probably_prime(n)
    }
}

/// Maximal-confidence oracle backed by num-prime's strict test battery.
#[derive(Clone, Copy, Debug, Default)]
pub struct StrictTest;

impl Primality for StrictTest {
    fn is_probably_prime(&self, n: &BigUint) -> bool {
        if n.is_zero() || n.is_one() {
            return false;
        }
        let config = PrimalityTestConfig::strict();
        nt_funcs::is_prime(n, Some(config)).probably()
    }
}

const DEFAULT_REPS: usize = 20;

/// Miller-Rabin with random witnesses plus the fixed witness 2.
#[derive(Clone, Copy, Debug)]
pub struct MillerRabin {
    reps: usize,
}

impl MillerRabin {
    pub fn new(reps: usize) -> Self {
        MillerRabin { reps }
    }
}

impl Default for MillerRabin {
    fn default() -> Self {
        MillerRabin::new(DEFAULT_REPS)
    }
}

impl Primality for MillerRabin {
    fn is_probably_prime(&self, n: &BigUint) -> bool {
        if n.is_zero() || n.is_one() {
            return false;
        }
        if *n == BigUint::from(2_u8) || *n == BigUint::from(3_u8) {
            return true;
        }
        if n.is_even() {
            return false;
        }

        let m = ModInt::new(n);
        let nm1 = n - 1_u8;
        let k = nm1.trailing_zeros().unwrap_or(0);
        let q = &nm1 >> k;
        let nm3 = n - 3_u8;

        let mut rng = rand::thread_rng();
        let samples: Vec<_> = (1..=self.reps)
            .map(|idx| {
                if idx == self.reps {
                    BigUint::from(2_u8)
                } else {
                    let a = rng.gen_biguint_below(&nm3);
                    a + 2_u8
                }
            })
            .collect();

        samples.par_iter().all(|x| {
            let mut y = m.pow(x, &q);
            if y.is_one() || y == nm1 {
                return true;
            }

            for _ in 1..k {
                y = m.mul(&y, &y);
                if y == nm1 {
                    return true;
                }
                if y.is_one() {
                    return false;
                }
            }
            false
        })
    }
}

pub mod simple_check {
    use num_bigint::BigUint;
    use num_traits::ToPrimitive;
    use once_cell::sync::Lazy;

    const SMALL_PRIMES: [u8; 15] = [3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53];

    static SMALL_PRIMES_PRODUCT: Lazy<BigUint> = Lazy::new(|| {
        SMALL_PRIMES
            .iter()
            .fold(1_u128, |acc, p| acc * (*p as u128))
            .into()
    });

    /// Cheap filter for odd candidates: `false` means v has a small odd
    /// prime factor (and is not that prime itself).
    pub fn no_small_factor(v: &BigUint) -> bool {
        let m = (v % &*SMALL_PRIMES_PRODUCT).to_u128().unwrap();
        SMALL_PRIMES.into_iter().all(|p| {
            let prime = p as u128;
            m == prime || m % prime != 0
        })
    }
}

/// Draws probable primes of exactly `bits` bits until the oracle accepts one.
/// There is no iteration bound: termination relies on prime density and the
/// loop can in principle run forever.
pub fn random_prime<R, P>(rng: &mut R, bits: u64, oracle: &P) -> Result<BigUint>
where
    R: Rng + CryptoRng,
    P: Primality,
{
    loop {
        let v = random::get_random_odd_int(rng, bits)?;
        if simple_check::no_small_factor(&v) && oracle.is_probably_prime(&v) {
            return Ok(v);
        }
    }
}
