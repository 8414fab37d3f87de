use crate::{CommonError, Result};
use num_bigint::{BigUint, RandBigInt};
use rand::{CryptoRng, Rng};

pub const MIN_BIT_LENGTH: u64 = 2;

/// Draws a random odd integer of exactly `bits` bits (top and low bit forced).
pub fn get_random_odd_int<R: Rng + CryptoRng>(rng: &mut R, bits: u64) -> Result<BigUint> {
    if bits < MIN_BIT_LENGTH {
        return Err(CommonError::bit_length_below_minimum(bits));
    }

    let mut v = rng.gen_biguint(bits);
    v.set_bit(bits - 1, true);
    v.set_bit(0, true);
    Ok(v)
}
