//! One-time token entity.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::GenerationError;

/// Length of a token in ASCII digits
pub const TOKEN_LENGTH: usize = 6;

/// A one-time numeric token
///
/// Always exactly [`TOKEN_LENGTH`] ASCII digits. Tokens are transient values:
/// created by a generator, handed to a sender once, then dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Token(String);

impl Token {
    /// Parse a token, rejecting anything that is not six ASCII digits
    pub fn parse(value: impl Into<String>) -> Result<Self, GenerationError> {
        let value = value.into();
        if value.len() == TOKEN_LENGTH && value.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(value))
        } else {
            Err(GenerationError::Malformed { value })
        }
    }

    /// Build a token from a number in `0..=999_999`, zero-padded to six digits
    pub fn from_number(value: u32) -> Result<Self, GenerationError> {
        Self::parse(format!("{:06}", value))
    }

    /// The token's digits
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the token, returning its digits
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Token {
    type Error = GenerationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}
