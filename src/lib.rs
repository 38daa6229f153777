//! Bounds-checked cursors for encoding and decoding packets in caller-owned buffers.
//!
//! [`MemoryReader`] walks an immutable byte slice and extracts values from it. [`MemoryWriter`]
//! walks a mutable byte slice and stores values into it. Both track how many bytes remain and
//! fail with an error, leaving the cursor untouched, when an operation would run past the end.
//!
//! Values are copied using their raw in-memory representation. No byte-order conversion happens
//! anywhere in this crate; a `u32` written on a little-endian host is stored little-endian.
//! Protocol code that needs network byte order converts before writing and after reading.
//!
//! ```
//! use packet_memory::{MemoryReader, MemoryWriter};
//!
//! let mut buf = [0u8; 8];
//! let mut w = MemoryWriter::new(&mut buf);
//! w.write(0x1234u16).unwrap();
//! w.fill(2, 0xff).unwrap();
//! w.write(7u32).unwrap();
//! assert_eq!(w.size(), 0);
//!
//! let mut r = MemoryReader::new(&buf);
//! assert_eq!(r.read::<u16>(), Ok(0x1234));
//! r.skip(2);
//! assert_eq!(r.read::<u32>(), Ok(7));
//! assert!(r.is_empty());
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

/// Emits a trace event for a failed capacity check, when the `tracing` feature is enabled.
macro_rules! trace_capacity {
    ($kind:literal, $needed:expr, $available:expr) => {
        #[cfg(feature = "tracing")]
        tracing::trace!(needed = $needed, available = $available, $kind);
    };
}

mod address;
mod raw;
mod reader;
mod writer;


pub use address::{FixedAddress, HwAddress, Ipv4Address, Ipv6Address};
pub use reader::{MemoryReader, ReaderError};
pub use writer::{MemoryWriter, WriterError};

pub use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};
