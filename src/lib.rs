#![doc(html_root_url = "https://docs.rs/netorder/latest")]
//! Public API for the `netorder` library.
//!
//! This crate reports the platform's native byte order and converts
//! fixed-width unsigned integers between host order and network order
//! (big-endian). Protocol codecs call it once per field.
//!
//! ```
//! use netorder::{Endian, Endianness, hton, ntoh};
//!
//! let wire = hton(0x1234u16);
//! if Endianness::value() == Endian::Little {
//!     assert_eq!(wire, 0x3412);
//! }
//! assert_eq!(ntoh(wire), 0x1234);
//! ```

pub mod byte_order;
pub mod convert;
pub mod endian;
pub mod endianness;
pub mod error;

pub use convert::{NetworkOrder, hton, ntoh, reverse_bytes};
pub use endian::Endian;
pub use endianness::{ByteOrderOracle, Endianness, ProbeOracle, StaticOracle};
pub use error::ParseEndianError;
