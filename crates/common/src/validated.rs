//! Validated primitive wrappers.
//!
//! Each type checks its invariant once, at construction, and keeps it
//! through serde deserialization. Code that receives one of these values
//! never needs to revalidate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a primitive fails validation at construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The string was empty or contained only whitespace.
    #[error("value cannot be empty")]
    Empty,

    /// A negative value was given where a non-negative one is required.
    #[error("value must be non-negative, got {0}")]
    Negative(i32),

    /// A zero or negative value was given where a positive one is required.
    #[error("value must be positive, got {0}")]
    NotPositive(i32),
}

/// A string guaranteed to contain at least one non-whitespace character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Creates a non-empty string, rejecting empty or blank input.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty);
        }
        Ok(Self(value))
    }

    /// Returns the wrapped string as a slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NonEmptyString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for NonEmptyString {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

impl AsRef<str> for NonEmptyString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// An integer guaranteed to be zero or greater.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(try_from = "i32", into = "i32")]
pub struct NonNegativeInt(i32);

impl NonNegativeInt {
    /// Creates a non-negative integer, rejecting negative input.
    pub fn new(value: i32) -> Result<Self, ValidationError> {
        if value < 0 {
            return Err(ValidationError::Negative(value));
        }
        Ok(Self(value))
    }

    /// Returns zero.
    pub fn zero() -> Self {
        Self(0)
    }

    /// Builds from an unsigned count, clamping at `i32::MAX`.
    pub fn from_count(value: u32) -> Self {
        Self(value.min(i32::MAX as u32) as i32)
    }

    /// Returns the wrapped value.
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for NonNegativeInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for NonNegativeInt {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NonNegativeInt> for i32 {
    fn from(value: NonNegativeInt) -> Self {
        value.0
    }
}

/// An integer guaranteed to be one or greater.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i32", into = "i32")]
pub struct PositiveInt(i32);

impl PositiveInt {
    /// Creates a positive integer, rejecting zero and negative input.
    pub fn new(value: i32) -> Result<Self, ValidationError> {
        if value <= 0 {
            return Err(ValidationError::NotPositive(value));
        }
        Ok(Self(value))
    }

    /// Returns the wrapped value.
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for PositiveInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for PositiveInt {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PositiveInt> for i32 {
    fn from(value: PositiveInt) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_string_accepts_text() {
        let s = NonEmptyString::new("hello").unwrap();
        assert_eq!(s.as_str(), "hello");
    }

    #[test]
    fn non_empty_string_rejects_empty() {
        assert_eq!(NonEmptyString::new(""), Err(ValidationError::Empty));
    }

    #[test]
    fn non_empty_string_rejects_blank() {
        assert_eq!(NonEmptyString::new("   "), Err(ValidationError::Empty));
    }

    #[test]
    fn non_empty_string_deserialization_validates() {
        let ok: Result<NonEmptyString, _> = serde_json::from_str("\"title\"");
        assert!(ok.is_ok());

        let err: Result<NonEmptyString, _> = serde_json::from_str("\"\"");
        assert!(err.is_err());
    }

    #[test]
    fn non_negative_int_accepts_zero_and_up() {
        assert_eq!(NonNegativeInt::new(0).unwrap().value(), 0);
        assert_eq!(NonNegativeInt::new(42).unwrap().value(), 42);
    }

    #[test]
    fn non_negative_int_rejects_negative() {
        assert_eq!(NonNegativeInt::new(-1), Err(ValidationError::Negative(-1)));
    }

    #[test]
    fn non_negative_int_from_count_clamps() {
        assert_eq!(NonNegativeInt::from_count(7).value(), 7);
        assert_eq!(NonNegativeInt::from_count(u32::MAX).value(), i32::MAX);
    }

    #[test]
    fn positive_int_accepts_one_and_up() {
        assert_eq!(PositiveInt::new(1).unwrap().value(), 1);
        assert_eq!(PositiveInt::new(500).unwrap().value(), 500);
    }

    #[test]
    fn positive_int_rejects_zero_and_negative() {
        assert_eq!(PositiveInt::new(0), Err(ValidationError::NotPositive(0)));
        assert_eq!(PositiveInt::new(-5), Err(ValidationError::NotPositive(-5)));
    }

    #[test]
    fn validated_int_deserialization_validates() {
        let err: Result<NonNegativeInt, _> = serde_json::from_str("-3");
        assert!(err.is_err());

        let err: Result<PositiveInt, _> = serde_json::from_str("0");
        assert!(err.is_err());

        let ok: Result<PositiveInt, _> = serde_json::from_str("3");
        assert_eq!(ok.unwrap().value(), 3);
    }

    #[test]
    fn validated_int_serialization_roundtrip() {
        let n = PositiveInt::new(12).unwrap();
        let json = serde_json::to_string(&n).unwrap();
        assert_eq!(json, "12");
        let back: PositiveInt = serde_json::from_str(&json).unwrap();
        assert_eq!(back, n);
    }
}
