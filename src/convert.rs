//! Conversion between host and network byte order.
//!
//! Network order is big-endian. A value is converted by reversing its bytes
//! when the host is little-endian and leaving it alone otherwise. Reversal
//! is its own inverse, so host-to-network and network-to-host are the same
//! operation: [`hton`] and [`ntoh`] may be used interchangeably on a given
//! width, and each undoes the other.

use crate::endianness::{ByteOrderOracle, Endianness};

mod sealed {
    pub trait Sealed {}
}

/// Fixed-width unsigned integers with a network byte order.
///
/// Implemented for `u8`, `u16`, `u32` and `u64`. A single byte has no byte
/// order, so the `u8` conversions are the identity.
pub trait NetworkOrder: Copy + sealed::Sealed {
    /// Returns the value with its bytes in reverse order.
    #[must_use]
    fn reverse_bytes(self) -> Self;

    /// Converts from the order reported by `oracle` to network order.
    ///
    /// Only a little-endian answer triggers a reversal; big and unknown
    /// leave the value unchanged.
    #[must_use]
    fn to_network_with<O: ByteOrderOracle + ?Sized>(self, oracle: &O) -> Self {
        if oracle.endian().is_little() {
            self.reverse_bytes()
        } else {
            self
        }
    }

    /// Converts from network order to the order reported by `oracle`.
    #[must_use]
    fn to_host_with<O: ByteOrderOracle + ?Sized>(self, oracle: &O) -> Self {
        self.to_network_with(oracle)
    }

    /// Converts from host order to network order.
    #[must_use]
    fn to_network(self) -> Self;

    /// Converts from network order to host order.
    #[must_use]
    fn to_host(self) -> Self;
}

impl sealed::Sealed for u8 {}

impl NetworkOrder for u8 {
    #[inline]
    fn reverse_bytes(self) -> Self { self }

    #[inline]
    fn to_network_with<O: ByteOrderOracle + ?Sized>(self, _: &O) -> Self { self }

    #[inline]
    fn to_network(self) -> Self { self }

    #[inline]
    fn to_host(self) -> Self { self }
}

macro_rules! impl_network_order {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl NetworkOrder for $ty {
                #[inline]
                fn reverse_bytes(self) -> Self { self.swap_bytes() }

                #[inline]
                fn to_network(self) -> Self { self.to_network_with(&Endianness) }

                #[inline]
                fn to_host(self) -> Self { self.to_network() }
            }
        )+
    };
}

impl_network_order!(u16, u32, u64);

/// Converts `host` from host byte order to network byte order.
///
/// ```
/// use netorder::{Endian, Endianness, hton};
///
/// let expected = match Endianness::value() {
///     Endian::Little => 0x7856_3412,
///     _ => 0x1234_5678,
/// };
/// assert_eq!(hton(0x1234_5678u32), expected);
/// ```
#[inline]
#[must_use]
pub fn hton<T: NetworkOrder>(host: T) -> T { host.to_network() }

/// Converts `network` from network byte order to host byte order.
///
/// ```
/// use netorder::{hton, ntoh};
///
/// let value = 0x0102_0304_0506_0708u64;
/// assert_eq!(ntoh(hton(value)), value);
/// ```
#[inline]
#[must_use]
pub fn ntoh<T: NetworkOrder>(network: T) -> T { network.to_host() }

/// Reverses the bytes of `value` regardless of the platform order.
#[inline]
#[must_use]
pub fn reverse_bytes<T: NetworkOrder>(value: T) -> T { value.reverse_bytes() }
