mod alphabet;
mod code;
mod generator;
mod validation;

pub use alphabet::{is_allowed, ALPHABET};
pub use code::{JoinCode, JoinCodeError};
pub use generator::{generate_join_code, JoinCodeGenerator, DEFAULT_LENGTH};
pub use validation::{is_valid, VALID_LENGTH};
