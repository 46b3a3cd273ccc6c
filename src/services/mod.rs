pub mod bootstrap;
pub mod secrets;

pub use bootstrap::Bootstrap;
pub use secrets::{generate_secrets, GeneratedSecret};
