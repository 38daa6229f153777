use crate::address::{FixedAddress, Ipv4Address};
use crate::raw;
use zerocopy::{Immutable, IntoBytes};

/// Result of a `MemoryWriter` operation.
pub type Result<T> = core::result::Result<T, WriterError>;

/// Writes values into a fixed-size, caller-owned buffer, advancing past each value it writes.
///
/// Values are stored using their in-memory byte representation, in host byte order. The buffer
/// never grows; a write that does not fit in the remaining capacity fails with
/// `Err(WriterError::InsufficientCapacity { .. })` before any byte is modified.
pub struct MemoryWriter<'a> {
    /// The output buffer. Bytes before `position` have been written.
    out: &'a mut [u8],
    position: usize,
}

impl<'a> MemoryWriter<'a> {
    /// Creates a writer that fills `out` from the start.
    pub fn new(out: &'a mut [u8]) -> Self {
        Self { out, position: 0 }
    }

    /// Remaining capacity, in bytes.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.out.len() - self.position
    }

    /// Number of bytes written (or skipped) so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The bytes written so far.
    pub fn written(&self) -> &[u8] {
        &self.out[..self.position]
    }

    /// Consumes the writer and returns the part of the buffer it has written.
    pub fn into_written(self) -> &'a mut [u8] {
        let Self { out, position } = self;
        &mut out[..position]
    }

    /// The unwritten part of the buffer, for callers that fill in bytes by hand. Follow up with
    /// [`Self::skip`] to account for what was written.
    pub fn remaining_mut(&mut self) -> &mut [u8] {
        &mut self.out[self.position..]
    }

    /// Advances past `len` bytes without writing them. Their contents are left as they were.
    ///
    /// The caller must already know that `len` bytes of capacity remain. Use [`Self::try_skip`]
    /// when that is not known.
    ///
    /// # Panics
    ///
    /// Panics if less than `len` bytes of capacity remain.
    #[inline(always)]
    pub fn skip(&mut self, len: usize) {
        assert!(
            len <= self.size(),
            "skip({len}) past the end of the writer ({} bytes left)",
            self.size()
        );
        self.position += len;
    }

    /// Advances past `len` bytes without writing them, or fails if less capacity remains.
    pub fn try_skip(&mut self, len: usize) -> Result<()> {
        self.check(len)?;
        self.skip(len);
        Ok(())
    }

    #[inline(always)]
    fn check(&self, needed: usize) -> Result<()> {
        let available = self.size();
        if available >= needed {
            Ok(())
        } else {
            trace_capacity!("write past end of buffer", needed, available);
            Err(WriterError::InsufficientCapacity { needed, available })
        }
    }

    /// Writes the in-memory representation of `value`.
    #[inline(always)]
    pub fn write<T: IntoBytes + Immutable>(&mut self, value: T) -> Result<()> {
        let len = core::mem::size_of::<T>();
        self.check(len)?;
        raw::write_value(&mut self.out[self.position..], &value);
        self.skip(len);
        Ok(())
    }

    /// Writes `bytes` to the output.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.check(bytes.len())?;
        raw::write_data(&mut self.out[self.position..], bytes);
        self.skip(bytes.len());
        Ok(())
    }

    /// Writes every byte produced by `bytes`, in order. The iterator's reported length is checked
    /// against the remaining capacity before anything is written.
    pub fn write_iter<I>(&mut self, bytes: I) -> Result<()>
    where
        I: IntoIterator<Item = u8>,
        I::IntoIter: ExactSizeIterator,
    {
        let bytes = bytes.into_iter();
        let len = bytes.len();
        self.check(len)?;
        for (dst, src) in self.out[self.position..self.position + len].iter_mut().zip(bytes) {
            *dst = src;
        }
        self.skip(len);
        Ok(())
    }

    /// Writes an IPv4 address as its raw `u32` form.
    pub fn write_ipv4_address(&mut self, address: Ipv4Address) -> Result<()> {
        self.write(u32::from(address))
    }

    /// Writes the raw bytes of a fixed-length address, such as an
    /// [`Ipv6Address`](crate::Ipv6Address) or a [`HwAddress`](crate::HwAddress).
    pub fn write_address<A: FixedAddress>(&mut self, address: &A) -> Result<()> {
        self.write_iter(address.iter().copied())
    }

    /// Sets the next `len` bytes to `value`.
    pub fn fill(&mut self, len: usize, value: u8) -> Result<()> {
        self.check(len)?;
        self.out[self.position..self.position + len].fill(value);
        self.skip(len);
        Ok(())
    }
}

/// Error type for `MemoryWriter`
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum WriterError {
    /// A `write_*` or `fill` call needed more room than remains in the buffer. Nothing was
    /// written and the writer was not advanced.
    InsufficientCapacity {
        /// Number of bytes the operation needed.
        needed: usize,
        /// Number of bytes of capacity that remained.
        available: usize,
    },
}

impl core::error::Error for WriterError {}

impl core::fmt::Display for WriterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InsufficientCapacity { needed, available } => write!(
                f,
                "Serialization error: needed {needed} bytes, but only {available} remain"
            ),
        }
    }
}
