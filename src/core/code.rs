use super::generator::JoinCodeGenerator;
use super::validation::{is_valid, VALID_LENGTH};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error types for join code handling
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JoinCodeError {
    #[error("'{code}' is not a valid join code: expected {expected} characters from A-Z, a-z, 0-9 or '-'")]
    InvalidFormat { code: String, expected: usize },
}

/// A join code known to pass validation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JoinCode(String);

impl JoinCode {
    /// Validate `code` and wrap it
    pub fn parse(code: &str) -> Result<Self, JoinCodeError> {
        Self::try_from(code.to_string())
    }

    /// Generate a fresh code of the validated length
    pub fn generate() -> Self {
        Self(JoinCodeGenerator::default().generate())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for JoinCode {
    type Err = JoinCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for JoinCode {
    type Error = JoinCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_valid(value.as_str()) {
            Ok(Self(value))
        } else {
            Err(JoinCodeError::InvalidFormat {
                code: value,
                expected: VALID_LENGTH,
            })
        }
    }
}

impl From<JoinCode> for String {
    fn from(code: JoinCode) -> Self {
        code.0
    }
}

impl AsRef<str> for JoinCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JoinCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
