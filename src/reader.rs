use crate::address::{FixedAddress, Ipv4Address};
use crate::raw;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

/// Result of a `MemoryReader` operation.
pub type Result<T> = core::result::Result<T, ReaderError>;

/// Reads values from a slice of bytes, advancing past each value it reads.
///
/// Fixed-size values are copied out of the buffer using their in-memory byte representation, in
/// host byte order. The reader never converts between network and host byte order.
///
/// Every `read_*` method checks that enough bytes remain before it copies anything. If they do
/// not, it returns `Err(ReaderError::NeedsMoreData { .. })` and the reader is left exactly as it
/// was, so the caller can report a malformed packet or retry with different framing.
///
/// # Fences
///
/// The number of bytes a reader will hand out is its _logical_ size, which starts out as the
/// length of the slice. [`MemoryReader::set_size`] lowers it to bound a section whose declared
/// length is smaller than the data that physically follows it (a TLV value, an options block,
/// and so on). The position does not move, and the bytes past the fence stay in the view;
/// raising the size again, up to [`MemoryReader::physical_size`], makes them visible again.
#[derive(Clone, Debug)]
pub struct MemoryReader<'a> {
    /// Unconsumed bytes. Each successful read re-slices this to the bytes after the value.
    data: &'a [u8],
    /// Logical remaining length. Always `<= data.len()`.
    size: usize,
    /// Bytes consumed since the reader was created.
    position: usize,
}

impl<'a> MemoryReader<'a> {
    /// Creates a reader over all of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            size: data.len(),
            position: 0,
        }
    }

    /// Returns `true` if at least `len` bytes remain.
    #[inline(always)]
    pub fn can_read(&self, len: usize) -> bool {
        self.size >= len
    }

    /// Number of bytes remaining, as limited by any fence.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Sets the number of bytes remaining, without moving the current position.
    ///
    /// This is a fence: lowering the size hides the bytes past it from every `read_*` call.
    /// The size cannot exceed the bytes physically left in the slice; larger values are clamped
    /// to [`MemoryReader::physical_size`].
    pub fn set_size(&mut self, size: usize) {
        self.size = size.min(self.data.len());
    }

    /// Number of bytes physically left in the slice, ignoring any fence.
    pub fn physical_size(&self) -> usize {
        self.data.len()
    }

    /// Number of bytes consumed since the reader was created.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns `true` while any bytes remain.
    #[inline(always)]
    pub fn has_data(&self) -> bool {
        self.size > 0
    }

    /// Returns `true` once every byte has been consumed (or fenced off).
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The bytes that remain, starting at the current position and ending at the fence.
    ///
    /// This does not consume anything. It lets callers inspect or construct values directly
    /// from the buffer.
    pub fn remaining(&self) -> &'a [u8] {
        let data = self.data;
        &data[..self.size]
    }

    /// Advances past `len` bytes without reading them.
    ///
    /// The caller must already know that `len` bytes remain, usually from [`Self::can_read`].
    /// Use [`Self::try_skip`] when that is not known.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `len` bytes remain.
    #[inline(always)]
    pub fn skip(&mut self, len: usize) {
        assert!(
            len <= self.size,
            "skip({len}) past the end of the reader ({} bytes left)",
            self.size
        );
        self.data = &self.data[len..];
        self.size -= len;
        self.position += len;
    }

    /// Advances past `len` bytes without reading them, or fails if fewer remain.
    pub fn try_skip(&mut self, len: usize) -> Result<()> {
        self.check(len)?;
        self.skip(len);
        Ok(())
    }

    #[inline(always)]
    fn check(&self, needed: usize) -> Result<()> {
        if self.can_read(needed) {
            Ok(())
        } else {
            trace_capacity!("read past end of buffer", needed, self.size);
            Err(ReaderError::NeedsMoreData {
                needed,
                available: self.size,
            })
        }
    }

    /// Reads a fixed-size value, copying its bytes in host layout.
    ///
    /// ```
    /// # use packet_memory::MemoryReader;
    /// let bytes = 0x0102_0304u32.to_ne_bytes();
    /// let mut r = MemoryReader::new(&bytes);
    /// assert_eq!(r.read::<u32>(), Ok(0x0102_0304));
    /// assert!(r.is_empty());
    /// ```
    #[inline(always)]
    pub fn read<T: FromBytes + IntoBytes>(&mut self) -> Result<T> {
        let len = core::mem::size_of::<T>();
        self.check(len)?;
        let value = raw::read_value(self.data);
        self.skip(len);
        Ok(value)
    }

    /// Reads a fixed-size value into `value`. On failure, `value` is not modified.
    pub fn read_into<T: FromBytes + IntoBytes>(&mut self, value: &mut T) -> Result<()> {
        *value = self.read()?;
        Ok(())
    }

    /// Reads an IPv4 address.
    ///
    /// The address is read as a `u32` through [`Self::read`] and wrapped as-is; its bytes end up
    /// in the same order they had in the buffer.
    pub fn read_ipv4_address(&mut self) -> Result<Ipv4Address> {
        Ok(Ipv4Address::from(self.read::<u32>()?))
    }

    /// Reads a fixed-length address, such as an [`Ipv6Address`](crate::Ipv6Address) or a
    /// [`HwAddress`](crate::HwAddress), directly from the bytes at the current position.
    pub fn read_address<A: FixedAddress>(&mut self) -> Result<A> {
        self.check(A::ADDRESS_SIZE)?;
        let address = A::from_raw(&self.data[..A::ADDRESS_SIZE]);
        self.skip(A::ADDRESS_SIZE);
        Ok(address)
    }

    /// Copies the next `output.len()` bytes into `output`.
    pub fn read_bytes_into(&mut self, output: &mut [u8]) -> Result<()> {
        self.check(output.len())?;
        raw::read_data(self.data, output);
        self.skip(output.len());
        Ok(())
    }

    /// Reads a slice of bytes whose length is `len`. This function returns a slice reference
    /// to the bytes; it does not copy them.
    #[inline(always)]
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        self.check(len)?;
        let data = self.data;
        let bytes = &data[..len];
        self.skip(len);
        Ok(bytes)
    }

    /// Reads a small array of bytes, with a constant length.
    #[inline(always)]
    pub fn read_cbytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.read()
    }

    /// Returns a reference to a structure laid over the next `size_of::<T>()` bytes, without
    /// copying it. `T` must have no alignment requirement.
    pub fn read_ref<T>(&mut self) -> Result<&'a T>
    where
        T: FromBytes + KnownLayout + Immutable + Unaligned,
    {
        let len = core::mem::size_of::<T>();
        self.check(len)?;
        let data = self.data;
        let Ok(value) = T::ref_from_bytes(&data[..len]) else {
            return Err(ReaderError::NeedsMoreData {
                needed: len,
                available: self.size,
            });
        };
        self.skip(len);
        Ok(value)
    }

    /// Reads `len` bytes and returns them as a `bstr::BStr`, without copying them.
    ///
    /// Nothing about the contents is validated. This is meant for text-like protocol fields
    /// (host names, user agents, option strings) that are usually, but not always, ASCII.
    #[cfg(feature = "bstr")]
    pub fn read_bstr(&mut self, len: usize) -> Result<&'a bstr::BStr> {
        Ok(bstr::BStr::new(self.read_bytes(len)?))
    }
}

impl<'a> From<&'a [u8]> for MemoryReader<'a> {
    fn from(data: &'a [u8]) -> Self {
        Self::new(data)
    }
}

#[cfg(feature = "std")]
impl<'a> From<&'a Vec<u8>> for MemoryReader<'a> {
    fn from(data: &'a Vec<u8>) -> Self {
        Self::new(data)
    }
}

/// Error type for `MemoryReader`
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ReaderError {
    /// A `read_*` method needed more bytes than remain in the reader. The reader was not
    /// advanced.
    ///
    /// When reading a packet, this means the packet is truncated or malformed.
    NeedsMoreData {
        /// Number of bytes the operation needed.
        needed: usize,
        /// Number of bytes that remained.
        available: usize,
    },
}

impl core::error::Error for ReaderError {}

impl core::fmt::Display for ReaderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NeedsMoreData { needed, available } => write!(
                f,
                "Malformed packet: needed {needed} bytes, but only {available} remain"
            ),
        }
    }
}
