//! Byte-valued fields of the workload wire format.
//!
//! Every byte field travels as `0x`-prefixed lowercase hex. Fixed-width fields
//! are always encoded at full width; words decode from shorter input by
//! left-padding with zeros.

pub mod codec;
pub mod word;
pub mod bytes;

pub use bytes::Bytes;
pub use word::{Address, Word};
