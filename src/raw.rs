//! Unchecked copies between a buffer and a value.
//!
//! Every function here assumes the caller has already checked that the buffer is long enough.
//! If it is not, slice indexing panics; nothing here reports an error.

use zerocopy::{FromBytes, Immutable, IntoBytes};

/// Copies `output.len()` bytes from the front of `buffer` into `output`.
#[inline(always)]
pub(crate) fn read_data(buffer: &[u8], output: &mut [u8]) {
    output.copy_from_slice(&buffer[..output.len()]);
}

/// Builds a `T` from the first `size_of::<T>()` bytes of `buffer`, in host layout.
#[inline(always)]
pub(crate) fn read_value<T: FromBytes + IntoBytes>(buffer: &[u8]) -> T {
    let mut value = T::new_zeroed();
    read_data(buffer, value.as_mut_bytes());
    value
}

/// Copies `input` into the front of `buffer`.
#[inline(always)]
pub(crate) fn write_data(buffer: &mut [u8], input: &[u8]) {
    buffer[..input.len()].copy_from_slice(input);
}

/// Copies the in-memory representation of `value` into the front of `buffer`.
#[inline(always)]
pub(crate) fn write_value<T: IntoBytes + Immutable>(buffer: &mut [u8], value: &T) {
    write_data(buffer, value.as_bytes());
}
