//! Cryptographic adapters: password hashing, token verification, secret
//! generation and hashing. Each submodule implements one `core::usecases::ports`
//! trait; nothing here is reachable from `core`.

pub mod error;
pub mod password;
pub mod token;

pub use error::CryptoError;
pub use password::Argon2PasswordHasher;
pub use token::{HmacKey, HmacTokenVerifier, RandSecretGenerator, Sha256TokenHasher};
