//! CSPRNG-backed secret generation for session tokens and service-account
//! secrets.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::RngExt;

use crate::core::usecases::ports::SecretGenerator;

/// 256 bits of randomness, the floor the `SecretGenerator` port requires.
const SECRET_BYTES: usize = 32;

/// `SecretGenerator` implementation over the OS CSPRNG, base64url-encoded.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandSecretGenerator;

impl SecretGenerator for RandSecretGenerator {
    fn generate(&self) -> String {
        let mut bytes = [0u8; SECRET_BYTES];
        rand::rng().fill(&mut bytes);
        URL_SAFE_NO_PAD.encode(bytes)
    }
}
