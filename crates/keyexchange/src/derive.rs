use common::mod_int::ModInt;
use num_bigint::BigUint;

// Pure derivations over the shared modular-exponentiation routine.

/// g^secret mod p.
pub fn modulo_key(generator: &BigUint, secret: &BigUint, prime: &BigUint) -> BigUint {
    ModInt::new(prime).pow(generator, secret)
}

/// partner_modulo_key^secret mod p.
pub fn common_secret(partner_modulo_key: &BigUint, secret: &BigUint, prime: &BigUint) -> BigUint {
    ModInt::new(prime).pow(partner_modulo_key, secret)
}
