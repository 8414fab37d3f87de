pub mod derive;
pub mod error;
pub mod generate;
pub mod keys;
pub mod session;
pub mod validate;

pub use error::KeyExchangeError;
pub use session::Session;

type Result<T> = std::result::Result<T, KeyExchangeError>;
