use common::CommonError;
use std::fmt;

/// Failures raised while constructing a session or deriving a key.
/// `InvalidArgument` marks input below the protocol minimums;
/// `Parameter` marks input that fails a cryptographic soundness check or a
/// generation budget that ran out. Both are non-recoverable: the caller must
/// supply corrected input and construct again.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyExchangeError {
    InvalidArgument(String),
    Parameter(String),
}

impl KeyExchangeError {
    pub fn secret_below_minimum() -> KeyExchangeError {
        KeyExchangeError::InvalidArgument("Secret key is less than two".to_owned())
    }

    pub fn prime_below_minimum() -> KeyExchangeError {
        KeyExchangeError::InvalidArgument("Public prime is less than two".to_owned())
    }

    pub fn generator_below_minimum() -> KeyExchangeError {
        KeyExchangeError::InvalidArgument("Public generator is less than two".to_owned())
    }

    pub fn not_safe_prime() -> KeyExchangeError {
        KeyExchangeError::Parameter("Public prime is not a safe prime".to_owned())
    }

    pub fn not_primitive_root() -> KeyExchangeError {
        KeyExchangeError::Parameter(
            "Public generator is not a primitive root of the prime".to_owned(),
        )
    }

    pub fn generator_attempts_exhausted() -> KeyExchangeError {
        KeyExchangeError::Parameter(
            "Cannot construct a generator with the provided parameters, \
             change the bit length or use the default generator"
                .to_owned(),
        )
    }
}

impl From<CommonError> for KeyExchangeError {
    fn from(src: CommonError) -> Self {
        KeyExchangeError::InvalidArgument(src.to_string())
    }
}

impl fmt::Display for KeyExchangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyExchangeError::InvalidArgument(msg) | KeyExchangeError::Parameter(msg) => {
                f.write_str(msg)
            }
        }
    }
}

impl std::error::Error for KeyExchangeError {}
