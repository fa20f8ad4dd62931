//! Error types for the crate.
//!
//! Byte-order queries and conversions are total; the only fallible
//! operation is reading an [`Endian`](crate::Endian) tag back from text.

use thiserror::Error;

/// Returned when a string does not name a byte order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised byte order {input:?}; expected one of little, big, native, unknown")]
pub struct ParseEndianError {
    input: String,
}

impl ParseEndianError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// The text that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str { &self.input }
}

#[cfg(test)]
mod tests {
    use super::ParseEndianError;

    #[test]
    fn message_names_rejected_input() {
        let err = ParseEndianError::new("middle");
        assert_eq!(err.input(), "middle");
        assert_eq!(
            err.to_string(),
            "unrecognised byte order \"middle\"; expected one of little, big, native, unknown"
        );
    }
}
