//! Helpers for writing and reading integers in their on-wire form.
//!
//! Each helper converts with [`hton`] or [`ntoh`] and then takes the
//! native-order byte view, so the array always holds the big-endian byte
//! sequence whatever the host's order.

use crate::convert::{hton, ntoh};

/// Serialise a `u16` in network byte order (big-endian).
///
/// # Examples
///
/// ```
/// use netorder::byte_order::write_network_u16;
///
/// assert_eq!(write_network_u16(0x1234), [0x12, 0x34]);
/// ```
#[must_use]
pub fn write_network_u16(value: u16) -> [u8; 2] { hton(value).to_ne_bytes() }

/// Parse a network-order `u16` from its on-wire representation.
///
/// # Examples
///
/// ```
/// use netorder::byte_order::read_network_u16;
///
/// assert_eq!(read_network_u16([0x12, 0x34]), 0x1234);
/// ```
#[must_use]
pub fn read_network_u16(bytes: [u8; 2]) -> u16 { ntoh(u16::from_ne_bytes(bytes)) }

/// Serialise a `u32` in network byte order (big-endian).
///
/// # Examples
///
/// ```
/// use netorder::byte_order::write_network_u32;
///
/// assert_eq!(write_network_u32(0x1234_5678), [0x12, 0x34, 0x56, 0x78]);
/// ```
#[must_use]
pub fn write_network_u32(value: u32) -> [u8; 4] { hton(value).to_ne_bytes() }

/// Parse a network-order `u32` from its on-wire representation.
///
/// # Examples
///
/// ```
/// use netorder::byte_order::read_network_u32;
///
/// assert_eq!(read_network_u32([0x12, 0x34, 0x56, 0x78]), 0x1234_5678);
/// ```
#[must_use]
pub fn read_network_u32(bytes: [u8; 4]) -> u32 { ntoh(u32::from_ne_bytes(bytes)) }

/// Serialise a `u64` in network byte order (big-endian).
///
/// # Examples
///
/// ```
/// use netorder::byte_order::write_network_u64;
///
/// assert_eq!(
///     write_network_u64(0x1122_3344_5566_7788),
///     [0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88]
/// );
/// ```
#[must_use]
pub fn write_network_u64(value: u64) -> [u8; 8] { hton(value).to_ne_bytes() }

/// Parse a network-order `u64` from its on-wire representation.
///
/// # Examples
///
/// ```
/// use netorder::byte_order::read_network_u64;
///
/// assert_eq!(
///     read_network_u64([0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88]),
///     0x1122_3344_5566_7788
/// );
/// ```
#[must_use]
pub fn read_network_u64(bytes: [u8; 8]) -> u64 { ntoh(u64::from_ne_bytes(bytes)) }
