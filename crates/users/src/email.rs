//! Email value object.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use userdesk_core::{DomainError, ValueObject};

/// Single source of truth for what counts as an email address:
/// `local@domain.tld` with no whitespace and exactly one `@`.
///
/// The `regex` crate matches in linear time, so this is safe on untrusted input.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

pub const INVALID_EMAIL: &str = "Invalid email format";

/// A validated, lowercased email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl ValueObject for Email {}

impl Email {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if !EMAIL_PATTERN.is_match(raw) {
            return Err(DomainError::validation(INVALID_EMAIL));
        }
        Ok(Self(raw.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Email {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl core::str::FromStr for Email {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}
