use num_bigint::BigUint;
use num_modular::{ModularCoreOps, ModularPow};

/// Arithmetic modulo a fixed modulus. Exponentiation is the single shared
/// square-and-multiply routine for the whole workspace.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ModInt(BigUint);

impl ModInt {
    pub fn new(modulus: &BigUint) -> Self {
        ModInt(modulus.clone())
    }

    pub fn module(&self) -> &BigUint {
        &self.0
    }

    pub fn mul(&self, x: &BigUint, y: &BigUint) -> BigUint {
        x.clone().mulm(y, &self.0)
    }

    pub fn pow(&self, base: &BigUint, exponent: &BigUint) -> BigUint {
        base.clone().powm(exponent, &self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mod_int_mul() {
        let m = ModInt::new(&BigUint::from(10_u32));
        let check = |x: u32, y: u32, expected: u32| {
            assert_eq!(
                m.mul(&BigUint::from(x), &BigUint::from(y)),
                BigUint::from(expected)
            );
        };
        check(0, 0, 0);
        check(1, 2, 2);
        check(9, 8, 2);
        check(4, 6, 4);
        check(11, 1, 1);
    }

    #[test]
    fn mod_int_pow() {
        let m = ModInt::new(&BigUint::from(10_u32));
        let check = |x: u32, y: u32, expected: u32| {
            assert_eq!(
                m.pow(&BigUint::from(x), &BigUint::from(y)),
                BigUint::from(expected)
            );
        };
        check(7, 1, 7);
        check(7, 2, 9);
        check(9, 3, 9);
        check(2, 3, 8);
        check(11, 1, 1);
    }

    #[test]
    fn mod_int_module() {
        let modulus = BigUint::from(23_u32);
        let m = ModInt::new(&modulus);
        assert_eq!(m.module(), &modulus);
    }
}
