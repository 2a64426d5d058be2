use std::fmt;

const PREFIX: &str = "0x";
const ADDRESS_HEX_LEN: usize = 16;

/// Removes a leading `0x` if present. Idempotent.
pub fn sans_prefix(address: &str) -> &str {
    let trimmed = address.trim();
    trimmed.strip_prefix(PREFIX).unwrap_or(trimmed)
}

/// Adds a leading `0x` unless one is already there. Idempotent.
pub fn with_prefix(address: &str) -> String {
    format!("{PREFIX}{}", sans_prefix(address))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    Empty,
    TooLong(usize),
    InvalidCharacter(char),
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::Empty => f.write_str("address is empty"),
            AddressError::TooLong(len) => {
                write!(f, "address has {len} hex digits, at most {ADDRESS_HEX_LEN} allowed")
            }
            AddressError::InvalidCharacter(c) => write!(f, "address contains non-hex character {c:?}"),
        }
    }
}

impl std::error::Error for AddressError {}

/// Canonical 8-byte Flow address, stored as 16 lowercase hex digits without prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    /// Accepts 1 to 16 hex digits in any case, with or without `0x`. Short
    /// inputs are left-padded with zeros.
    pub fn parse(input: &str) -> Result<Self, AddressError> {
        let digits = sans_prefix(input);
        if digits.is_empty() {
            return Err(AddressError::Empty);
        }
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(AddressError::InvalidCharacter(bad));
        }
        if digits.len() > ADDRESS_HEX_LEN {
            return Err(AddressError::TooLong(digits.len()));
        }
        Ok(Self(format!(
            "{:0>width$}",
            digits.to_ascii_lowercase(),
            width = ADDRESS_HEX_LEN
        )))
    }

    /// Request form, no prefix.
    pub fn as_hex(&self) -> &str {
        &self.0
    }

    /// Display form, `0x` prefixed.
    pub fn prefixed(&self) -> String {
        with_prefix(&self.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{PREFIX}{}", self.0)
    }
}
