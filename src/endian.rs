//! Byte-order tags.
//!
//! [`Endian`] names the order in which a multi-byte integer is laid out in
//! memory. The platform's own order is available as [`Endian::NATIVE`],
//! which is an alias for one of the concrete variants rather than a variant
//! of its own.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ParseEndianError;

/// Byte order of a multi-byte integer.
///
/// Serialises as its lowercase label. Deserialisation goes through
/// [`FromStr`], so `"native"` is accepted there too.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Endian {
    /// Least significant byte at the lowest address.
    Little,
    /// Most significant byte at the lowest address.
    Big,
    /// The order could not be determined.
    Unknown,
}

impl Endian {
    /// Byte order of the target platform.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Endian = Endian::Little;

    /// Byte order of the target platform.
    #[cfg(target_endian = "big")]
    pub const NATIVE: Endian = Endian::Big;

    /// Byte order used on the wire.
    pub const NETWORK: Endian = Endian::Big;

    /// Display name of the tag.
    ///
    /// ```
    /// use netorder::Endian;
    ///
    /// assert_eq!(Endian::Little.as_str(), "little");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Endian::Little => "little",
            Endian::Big => "big",
            Endian::Unknown => "unknown",
        }
    }

    /// Returns `true` for [`Endian::Little`].
    #[must_use]
    pub const fn is_little(self) -> bool { matches!(self, Endian::Little) }

    /// Returns `true` for [`Endian::Big`].
    #[must_use]
    pub const fn is_big(self) -> bool { matches!(self, Endian::Big) }

    /// Returns `true` for [`Endian::Little`] and [`Endian::Big`].
    #[must_use]
    pub const fn is_known(self) -> bool { !matches!(self, Endian::Unknown) }
}

impl Default for Endian {
    fn default() -> Self { Endian::NATIVE }
}

impl fmt::Display for Endian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for Endian {
    type Err = ParseEndianError;

    /// Parses a display name, ignoring ASCII case. `"native"` resolves to
    /// [`Endian::NATIVE`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        [
            ("little", Endian::Little),
            ("big", Endian::Big),
            ("unknown", Endian::Unknown),
            ("native", Endian::NATIVE),
        ]
        .into_iter()
        .find_map(|(name, endian)| label.eq_ignore_ascii_case(name).then_some(endian))
        .ok_or_else(|| ParseEndianError::new(s))
    }
}

impl TryFrom<String> for Endian {
    type Error = ParseEndianError;

    fn try_from(value: String) -> Result<Self, Self::Error> { value.parse() }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde::{
        Deserialize,
        de::{IntoDeserializer, value::StrDeserializer},
    };

    use super::Endian;

    #[rstest]
    #[case::little(Endian::Little, "little")]
    #[case::big(Endian::Big, "big")]
    #[case::unknown(Endian::Unknown, "unknown")]
    fn display_uses_lowercase_label(#[case] endian: Endian, #[case] label: &str) {
        assert_eq!(endian.to_string(), label);
        assert_eq!(label.parse::<Endian>(), Ok(endian));
    }

    #[rstest]
    #[case("LITTLE", Endian::Little)]
    #[case(" Big ", Endian::Big)]
    #[case("native", Endian::NATIVE)]
    fn parse_is_lenient_about_case_and_padding(#[case] input: &str, #[case] expected: Endian) {
        assert_eq!(input.parse::<Endian>(), Ok(expected));
    }

    #[test]
    fn parse_rejects_middle_endian() {
        let err = "middle".parse::<Endian>().expect_err("middle is not a byte order");
        assert_eq!(err.input(), "middle");
    }

    #[test]
    fn native_is_a_concrete_order() {
        assert!(Endian::NATIVE.is_known());
        assert_ne!(Endian::NATIVE.is_little(), Endian::NATIVE.is_big());
        assert_eq!(Endian::default(), Endian::NATIVE);
        assert_eq!(cfg!(target_endian = "little"), Endian::NATIVE.is_little());
    }

    #[test]
    fn unknown_is_neither_order() {
        assert!(!Endian::Unknown.is_known());
        assert!(!Endian::Unknown.is_little());
        assert!(!Endian::Unknown.is_big());
    }

    #[rstest]
    #[case("big", Endian::Big)]
    #[case("little", Endian::Little)]
    #[case("native", Endian::NATIVE)]
    fn deserializes_like_from_str(#[case] label: &str, #[case] expected: Endian) {
        let de: StrDeserializer<'_, serde::de::value::Error> = label.into_deserializer();
        assert_eq!(Endian::deserialize(de), Ok(expected));
        assert_eq!(label.parse::<Endian>(), Ok(expected));
    }

    #[test]
    fn deserialize_rejects_unrecognised_label() {
        let de: StrDeserializer<'_, serde::de::value::Error> = "middle".into_deserializer();
        assert!(Endian::deserialize(de).is_err());
    }
}
