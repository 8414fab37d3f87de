use crate::keys::{
    CommonSecretKey, ModuloKey, PartnerModuloKey, PublicGenerator, PublicPrime, SecretKey,
};
use crate::Result;
use num_bigint::BigUint;
use rand::{CryptoRng, Rng};

/// A Diffie-Hellman exchange side. Construction resolves the prime, then the
/// generator, then the own modulo key; any failure aborts the whole
/// construction. Once built, a session is immutable and safe to share
/// read-only. The secret itself is never kept.
#[derive(Clone, Debug)]
pub struct Session {
    prime: PublicPrime,
    generator: PublicGenerator,
    modulo_key: ModuloKey,
}

impl Session {
    /// Both parameters supplied by the caller and validated against each other.
    pub fn with_parameters(secret: BigUint, prime: BigUint, generator: BigUint) -> Result<Session> {
        let secret = SecretKey::new(secret)?;
        let prime = PublicPrime::new(prime)?;
        let generator = PublicGenerator::new(generator, &prime)?;
        Ok(Session::build(&secret, prime, generator))
    }

    /// Supplied prime, generator defaulted to 2.
    pub fn with_prime(secret: BigUint, prime: BigUint) -> Result<Session> {
        let secret = SecretKey::new(secret)?;
        let prime = PublicPrime::new(prime)?;
        let generator = PublicGenerator::default();
        Ok(Session::build(&secret, prime, generator))
    }

    /// Both parameters generated; the prime may come out one bit wider than
    /// requested (see `generate::safe_prime`).
    pub fn generate<RP, RG>(
        secret: BigUint,
        prime_bits: u64,
        prime_rng: &mut RP,
        generator_bits: u64,
        generator_rng: &mut RG,
    ) -> Result<Session>
    where
        RP: Rng + CryptoRng,
        RG: Rng + CryptoRng,
    {
        let secret = SecretKey::new(secret)?;
        let prime = PublicPrime::generate(prime_bits, prime_rng)?;
        let generator = PublicGenerator::generate(generator_bits, generator_rng, &prime)?;
        Ok(Session::build(&secret, prime, generator))
    }

    /// Generated prime, generator defaulted to 2.
    pub fn generate_with_default_generator<R: Rng + CryptoRng>(
        secret: BigUint,
        prime_bits: u64,
        prime_rng: &mut R,
    ) -> Result<Session> {
        let secret = SecretKey::new(secret)?;
        let prime = PublicPrime::generate(prime_bits, prime_rng)?;
        let generator = PublicGenerator::default();
        Ok(Session::build(&secret, prime, generator))
    }

    fn build(secret: &SecretKey, prime: PublicPrime, generator: PublicGenerator) -> Session {
        let modulo_key = ModuloKey::derive(&generator, secret, &prime);
        Session {
            prime,
            generator,
            modulo_key,
        }
    }

    pub fn public_prime(&self) -> &BigUint {
        self.prime.value()
    }

    pub fn public_generator(&self) -> &BigUint {
        self.generator.value()
    }

    pub fn modulo_key(&self) -> &BigUint {
        self.modulo_key.value()
    }

    /// Derives the shared value from the peer's modulo key, fresh on every
    /// call. Any valid secret is accepted, not only the construction-time
    /// one, which permits re-derivation with a rotated secret.
    pub fn common_secret_key(
        &self,
        partner_modulo_key: BigUint,
        secret: BigUint,
    ) -> Result<BigUint> {
        let partner = PartnerModuloKey::new(partner_modulo_key);
        let secret = SecretKey::new(secret)?;
        Ok(CommonSecretKey::derive(&partner, &secret, &self.prime).into_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KeyExchangeError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn uint(v: u32) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn with_parameters_known_values() {
        let alice = Session::with_parameters(uint(6), uint(23), uint(5)).unwrap();
        let bob = Session::with_parameters(uint(15), uint(23), uint(5)).unwrap();

        assert_eq!(alice.public_prime(), &uint(23));
        assert_eq!(alice.public_generator(), &uint(5));
        assert_eq!(alice.modulo_key(), &uint(8)); // 5^6 mod 23
        assert_eq!(bob.modulo_key(), &uint(19)); // 5^15 mod 23

        let shared_a = alice
            .common_secret_key(bob.modulo_key().clone(), uint(6))
            .unwrap();
        let shared_b = bob
            .common_secret_key(alice.modulo_key().clone(), uint(15))
            .unwrap();
        assert_eq!(shared_a, shared_b);
        assert_eq!(shared_a, uint(2));
    }

    #[test]
    fn with_prime_defaults_generator_to_two() {
        let session = Session::with_prime(uint(6), uint(23)).unwrap();
        assert_eq!(session.public_generator(), &uint(2));
        assert_eq!(session.modulo_key(), &uint(18)); // 2^6 mod 23
    }

    #[test]
    fn construction_rejections() {
        let err = Session::with_parameters(uint(1), uint(23), uint(5)).unwrap_err();
        assert_eq!(err, KeyExchangeError::secret_below_minimum());

        let err = Session::with_prime(uint(6), uint(1)).unwrap_err();
        assert_eq!(err, KeyExchangeError::prime_below_minimum());

        let err = Session::with_prime(uint(6), uint(8)).unwrap_err();
        assert_eq!(err, KeyExchangeError::not_safe_prime());

        let err = Session::with_parameters(uint(6), uint(23), uint(3)).unwrap_err();
        assert_eq!(err, KeyExchangeError::not_primitive_root());
    }

    #[test]
    fn boundary_values() {
        // secret = 2 and the smallest safe prime are both acceptable.
        let session = Session::with_prime(uint(2), uint(5)).unwrap();
        assert_eq!(session.modulo_key(), &uint(4));

        let mut rng = StdRng::seed_from_u64(0);
        let err =
            Session::generate_with_default_generator(uint(2), 1, &mut rng).unwrap_err();
        assert!(matches!(err, KeyExchangeError::InvalidArgument(_)));

        let session = Session::generate_with_default_generator(uint(2), 2, &mut rng).unwrap();
        assert_eq!(session.public_prime(), &uint(7));
        assert_eq!(session.public_generator(), &uint(2));
    }

    #[test]
    fn end_to_end_generated_parameters() {
        let mut prime_rng = StdRng::seed_from_u64(1001);
        let mut generator_rng = StdRng::seed_from_u64(2002);
        let alice =
            Session::generate(uint(6), 64, &mut prime_rng, 8, &mut generator_rng).unwrap();

        let bits = alice.public_prime().bits();
        assert!(bits == 64 || bits == 65);

        let bob = Session::with_parameters(
            uint(15),
            alice.public_prime().clone(),
            alice.public_generator().clone(),
        )
        .unwrap();

        let shared_a = alice
            .common_secret_key(bob.modulo_key().clone(), uint(6))
            .unwrap();
        let shared_b = bob
            .common_secret_key(alice.modulo_key().clone(), uint(15))
            .unwrap();
        assert_eq!(shared_a, shared_b);
    }

    #[test]
    fn common_secret_accepts_any_valid_secret() {
        let session = Session::with_parameters(uint(6), uint(23), uint(5)).unwrap();

        let err = session.common_secret_key(uint(19), uint(1)).unwrap_err();
        assert_eq!(err, KeyExchangeError::secret_below_minimum());

        // Re-derivation with a secret other than the construction-time one.
        let first = session.common_secret_key(uint(19), uint(6)).unwrap();
        let second = session.common_secret_key(uint(19), uint(9)).unwrap();
        assert_eq!(first, session.common_secret_key(uint(19), uint(6)).unwrap());
        assert_ne!(first, second);
    }
}
