use common::mod_int::ModInt;
use common::prime::{Primality, StrictTest};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::collections::BTreeSet;

/// Checks Diffie-Hellman public parameters against an injected primality
/// oracle. Every method classifies its input, none of them fail.
pub struct ParameterValidator<P: Primality> {
    oracle: P,
}

impl ParameterValidator<StrictTest> {
    pub fn strict() -> Self {
        ParameterValidator::new(StrictTest)
    }
}

impl<P: Primality> ParameterValidator<P> {
    pub fn new(oracle: P) -> Self {
        ParameterValidator { oracle }
    }

    /// True iff p is probably prime and (p - 1) / 2 is probably prime.
    pub fn is_safe_prime(&self, p: &BigUint) -> bool {
        self.oracle.is_probably_prime(p) && self.oracle.is_probably_prime(&((p - 1_u8) >> 1_u8))
    }

    /// True iff g generates the full multiplicative group mod p: g < p - 1
    /// and g^(n/f) != 1 (mod p) for every prime factor f of n = p - 1.
    /// A g >= p - 1 cannot be a primitive root and is rejected outright.
    pub fn is_primitive_root(&self, g: &BigUint, p: &BigUint) -> bool {
        if p.is_zero() {
            return false;
        }
        let n = p - 1_u8;
        if *g >= n {
            return false;
        }
        let m = ModInt::new(p);
        self.prime_factors(&n)
            .iter()
            .all(|f| !m.pow(g, &(&n / f)).is_one())
    }

    /// Trial division up to sqrt(n), stopping early once the residual
    /// cofactor is itself probably prime (it is then the last factor).
    /// Worst case is exponential in the size of n; tractable here because
    /// n = p - 1 for a safe prime p, which factors as 2 * q.
    pub fn prime_factors(&self, n: &BigUint) -> BTreeSet<BigUint> {
        let mut factors = BTreeSet::new();
        let mut rest = n.clone();
        let mut i = BigUint::from(2_u8);
        while &i * &i <= rest {
            while (&rest % &i).is_zero() {
                factors.insert(i.clone());
                rest /= &i;
                if self.oracle.is_probably_prime(&rest) {
                    factors.insert(rest);
                    return factors;
                }
            }
            i += 1_u8;
        }
        if !rest.is_zero() && !rest.is_one() {
            factors.insert(rest);
        }
        factors
    }
}
