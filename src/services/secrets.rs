//! Fresh key and salt generation for new deployments.

use rand::Rng;
use serde::Serialize;

use crate::domain::models::SECRET_VARIABLES;

/// Length of each generated key or salt
pub const SECRET_LENGTH: usize = 64;

/// Printable ASCII without whitespace, quotes or backslash, so values survive
/// shell, dotenv and compose quoting unchanged.
const CHARSET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()-_[]{}<>~`+=,.;:/?|";

/// One generated secret and the variable it is meant for
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GeneratedSecret {
    pub variable: &'static str,
    pub value: String,
}

/// Generate one value per key/salt variable, in lookup order
pub fn generate_secrets() -> Vec<GeneratedSecret> {
    let mut rng = rand::thread_rng();
    SECRET_VARIABLES
        .iter()
        .map(|&(variable, _)| GeneratedSecret {
            variable,
            value: random_string(&mut rng, SECRET_LENGTH),
        })
        .collect()
}

fn random_string<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(CHARSET[rng.gen_range(0..CHARSET.len())]))
        .collect()
}

/// Render as dotenv lines; single quotes keep `$` and `#` literal
pub fn to_dotenv(secrets: &[GeneratedSecret]) -> String {
    secrets
        .iter()
        .map(|s| format!("{}='{}'\n", s.variable, s.value))
        .collect()
}
