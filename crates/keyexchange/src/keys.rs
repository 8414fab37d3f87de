use crate::error::KeyExchangeError;
use crate::validate::ParameterValidator;
use crate::{derive, generate, Result};
use common::prime::StrictTest;
use num_bigint::BigUint;
use rand::{CryptoRng, Rng};

// Validated value wrappers. Each constructor either yields a value that
// satisfies its invariant or a classified error; nothing is mutable after
// construction.

/// Caller secret, at least two. Held only for the duration of the derivation
/// that consumes it and intentionally without Debug or Clone.
#[cfg_attr(test, derive(Debug))]
pub struct SecretKey(BigUint);

impl SecretKey {
    pub fn new(value: BigUint) -> Result<Self> {
        if value < BigUint::from(2_u8) {
            return Err(KeyExchangeError::secret_below_minimum());
        }
        Ok(SecretKey(value))
    }

    pub fn value(&self) -> &BigUint {
        &self.0
    }
}

/// Public prime modulus p, a validated safe prime.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PublicPrime(BigUint);

impl PublicPrime {
    pub fn new(value: BigUint) -> Result<Self> {
        if value < BigUint::from(2_u8) {
            return Err(KeyExchangeError::prime_below_minimum());
        }
        if !ParameterValidator::strict().is_safe_prime(&value) {
            return Err(KeyExchangeError::not_safe_prime());
        }
        Ok(PublicPrime(value))
    }

    /// Generated primes hold the invariant by construction and skip the
    /// re-validation pass.
    pub fn generate<R: Rng + CryptoRng>(bits: u64, rng: &mut R) -> Result<Self> {
        generate::safe_prime(bits, rng, &StrictTest).map(PublicPrime)
    }

    pub fn value(&self) -> &BigUint {
        &self.0
    }
}

/// Public generator g. The default value 2 is accepted without a
/// primitive-root check; any other value must be a primitive root of p.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PublicGenerator(BigUint);

impl PublicGenerator {
    pub fn new(value: BigUint, prime: &PublicPrime) -> Result<Self> {
        let two = BigUint::from(2_u8);
        if value < two {
            return Err(KeyExchangeError::generator_below_minimum());
        }
        if value != two && !ParameterValidator::strict().is_primitive_root(&value, prime.value()) {
            return Err(KeyExchangeError::not_primitive_root());
        }
        Ok(PublicGenerator(value))
    }

    pub fn generate<R: Rng + CryptoRng>(
        bits: u64,
        rng: &mut R,
        prime: &PublicPrime,
    ) -> Result<Self> {
        generate::primitive_root(bits, rng, prime.value(), &StrictTest).map(PublicGenerator)
    }

    pub fn value(&self) -> &BigUint {
        &self.0
    }
}

impl Default for PublicGenerator {
    fn default() -> Self {
        PublicGenerator(BigUint::from(2_u8))
    }
}

/// Own public value g^secret mod p.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ModuloKey(BigUint);

impl ModuloKey {
    pub fn derive(generator: &PublicGenerator, secret: &SecretKey, prime: &PublicPrime) -> Self {
        ModuloKey(derive::modulo_key(
            generator.value(),
            secret.value(),
            prime.value(),
        ))
    }

    pub fn value(&self) -> &BigUint {
        &self.0
    }
}

/// The peer's modulo key as received from the channel. Nothing about it can
/// be validated here; authenticity is the channel's concern.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PartnerModuloKey(BigUint);

impl PartnerModuloKey {
    pub fn new(value: BigUint) -> Self {
        PartnerModuloKey(value)
    }

    pub fn value(&self) -> &BigUint {
        &self.0
    }
}

/// The shared value partner^secret mod p, computed fresh for every call and
/// never cached.
pub struct CommonSecretKey(BigUint);

impl CommonSecretKey {
    pub fn derive(partner: &PartnerModuloKey, secret: &SecretKey, prime: &PublicPrime) -> Self {
        CommonSecretKey(derive::common_secret(
            partner.value(),
            secret.value(),
            prime.value(),
        ))
    }

    pub fn into_value(self) -> BigUint {
        self.0
    }
}
