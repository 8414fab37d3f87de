use crate::error::KeyExchangeError;
use crate::validate::ParameterValidator;
use crate::Result;
use common::prime::{self, Primality};
use log::debug;
use num_bigint::BigUint;
use rand::{CryptoRng, Rng};

const GENERATOR_ATTEMPTS: u32 = 100;

/// Double-speed safe-prime search: each drawn prime q is accepted directly
/// when (q - 1) / 2 is prime, otherwise its companion 2q + 1 is tested.
/// Acceptance through the companion branch yields a prime of bits + 1 bits,
/// which is expected. The search has no iteration bound and runs until it
/// succeeds.
pub fn safe_prime<R, P>(bits: u64, rng: &mut R, oracle: &P) -> Result<BigUint>
where
    R: Rng + CryptoRng,
    P: Primality,
{
    let mut draws = 0_u64;
    loop {
        let q = prime::random_prime(rng, bits, oracle)?;
        draws += 1;
        if oracle.is_probably_prime(&((&q - 1_u8) >> 1_u8)) {
            debug!("safe prime of {} bits found after {draws} draws", q.bits());
            return Ok(q);
        }
        let p = (&q << 1_u8) + 1_u8;
        if oracle.is_probably_prime(&p) {
            debug!("safe prime of {} bits found after {draws} draws", p.bits());
            return Ok(p);
        }
    }
}

/// Searches for a primitive root of `prime` among prime-filtered draws of
/// exactly `bits` bits. The attempt budget is deliberate: some (bits, prime)
/// pairs admit no such root, so unbounded retry would never terminate.
pub fn primitive_root<R, P>(bits: u64, rng: &mut R, prime: &BigUint, oracle: &P) -> Result<BigUint>
where
    R: Rng + CryptoRng,
    P: Primality,
{
    let validator = ParameterValidator::new(oracle);
    for attempt in 1..=GENERATOR_ATTEMPTS {
        let g = prime::random_prime(rng, bits, oracle)?;
        if validator.is_primitive_root(&g, prime) {
            debug!("generator found after {attempt} attempts");
            return Ok(g);
        }
    }
    Err(KeyExchangeError::generator_attempts_exhausted())
}
