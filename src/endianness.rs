//! Platform byte-order detection.
//!
//! [`Endianness::value`] is the single query callers use. Behind it sit two
//! interchangeable [`ByteOrderOracle`] strategies:
//!
//! - [`StaticOracle`] reads the order the compiler targets. It is the default
//!   and resolves to a constant.
//! - [`ProbeOracle`] looks at the memory layout of a known integer at run
//!   time. It is selected with the `runtime-probe` feature.
//!
//! Both report the same tag on every supported platform. Neither holds
//! state, so concurrent first use needs no synchronisation.

use crate::endian::Endian;

/// Source of the platform's native byte order.
pub trait ByteOrderOracle {
    /// The byte order this oracle reports. Repeated calls return the same tag.
    fn endian(&self) -> Endian;
}

/// Oracle answering from the compiler's target configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StaticOracle;

impl StaticOracle {
    #[must_use]
    pub const fn value() -> Endian { Endian::NATIVE }
}

impl ByteOrderOracle for StaticOracle {
    fn endian(&self) -> Endian { Self::value() }
}

/// Oracle that inspects how the platform stores a known 32-bit pattern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProbeOracle;

impl ProbeOracle {
    /// Most significant bytes set, least significant bytes clear.
    const PATTERN: u32 = 0xFFFF_0000;

    /// Probes the platform's memory layout.
    ///
    /// The lowest-addressed byte of [`Self::PATTERN`] is zero only when the
    /// least significant byte is stored first.
    #[must_use]
    pub fn value() -> Endian {
        let endian = Self::classify(lowest_addressed_byte(Self::PATTERN));
        tracing::trace!(endian = %endian, "probed platform byte order");
        endian
    }

    const fn classify(first: u8) -> Endian {
        if first == 0 {
            Endian::Little
        } else {
            Endian::Big
        }
    }
}

impl ByteOrderOracle for ProbeOracle {
    fn endian(&self) -> Endian { Self::value() }
}

/// The only place an integer is viewed as raw memory. `black_box` keeps the
/// pattern opaque so the layout is observed at run time.
fn lowest_addressed_byte(pattern: u32) -> u8 {
    let bytes = std::hint::black_box(pattern).to_ne_bytes();
    bytes[0]
}

/// The platform oracle selected at build time.
///
/// ```
/// use netorder::{Endian, Endianness};
///
/// let endian: Endian = Endianness.into();
/// assert_eq!(endian, Endianness::value());
/// assert!(endian.is_known());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Endianness;

impl Endianness {
    /// Byte order of the running platform.
    #[cfg(not(feature = "runtime-probe"))]
    #[must_use]
    #[inline]
    pub const fn value() -> Endian { StaticOracle::value() }

    /// Byte order of the running platform.
    #[cfg(feature = "runtime-probe")]
    #[must_use]
    #[inline]
    pub fn value() -> Endian { ProbeOracle::value() }
}

impl ByteOrderOracle for Endianness {
    fn endian(&self) -> Endian { Self::value() }
}

impl From<Endianness> for Endian {
    fn from(_: Endianness) -> Self { Endianness::value() }
}
