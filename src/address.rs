use core::fmt;
use core::net::{Ipv4Addr, Ipv6Addr};

/// An address with a fixed length, stored as its raw bytes.
///
/// [`MemoryReader::read_address`](crate::MemoryReader::read_address) builds one directly from the
/// bytes at the cursor, and [`MemoryWriter::write_address`](crate::MemoryWriter::write_address)
/// stores the bytes yielded by [`FixedAddress::iter`], first to last.
pub trait FixedAddress: Sized {
    /// Length of the address, in bytes.
    const ADDRESS_SIZE: usize;

    /// Builds an address from `raw`, which must be exactly `ADDRESS_SIZE` bytes long.
    ///
    /// # Panics
    ///
    /// Panics if `raw.len() != ADDRESS_SIZE`.
    fn from_raw(raw: &[u8]) -> Self;

    /// The raw bytes of the address.
    fn raw(&self) -> &[u8];

    /// Iterates the raw bytes of the address, first to last.
    fn iter(&self) -> core::slice::Iter<'_, u8> {
        self.raw().iter()
    }
}

/// An IPv4 address, held in the raw `u32` form it has inside a packet buffer.
///
/// The integer is not a numeric address value; its in-memory bytes are the four octets as they
/// appear on the wire. Use [`Ipv4Address::octets`] or the [`Ipv4Addr`] conversions to get at the
/// dotted form.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Ipv4Address(u32);

impl Ipv4Address {
    /// Length of the address, in bytes.
    pub const ADDRESS_SIZE: usize = 4;

    /// The four octets, in buffer order.
    pub fn octets(&self) -> [u8; 4] {
        self.0.to_ne_bytes()
    }
}

impl From<u32> for Ipv4Address {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<Ipv4Address> for u32 {
    fn from(address: Ipv4Address) -> Self {
        address.0
    }
}

impl From<Ipv4Addr> for Ipv4Address {
    fn from(address: Ipv4Addr) -> Self {
        Self(u32::from_ne_bytes(address.octets()))
    }
}

impl From<Ipv4Address> for Ipv4Addr {
    fn from(address: Ipv4Address) -> Self {
        Ipv4Addr::from(address.octets())
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Ipv4Addr::from(*self), f)
    }
}

impl fmt::Debug for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ipv4Address({self})")
    }
}

/// An IPv6 address, held as its 16 raw bytes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Ipv6Address([u8; 16]);

impl Ipv6Address {
    /// Length of the address, in bytes.
    pub const ADDRESS_SIZE: usize = 16;

    /// The 16 raw bytes.
    pub fn octets(&self) -> [u8; 16] {
        self.0
    }
}

impl FixedAddress for Ipv6Address {
    const ADDRESS_SIZE: usize = 16;

    fn from_raw(raw: &[u8]) -> Self {
        let mut octets = [0; 16];
        octets.copy_from_slice(raw);
        Self(octets)
    }

    fn raw(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 16]> for Ipv6Address {
    fn from(octets: [u8; 16]) -> Self {
        Self(octets)
    }
}

impl From<Ipv6Addr> for Ipv6Address {
    fn from(address: Ipv6Addr) -> Self {
        Self(address.octets())
    }
}

impl From<Ipv6Address> for Ipv6Addr {
    fn from(address: Ipv6Address) -> Self {
        Ipv6Addr::from(address.0)
    }
}

impl fmt::Display for Ipv6Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Ipv6Addr::from(*self), f)
    }
}

impl fmt::Debug for Ipv6Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ipv6Address({self})")
    }
}

/// A hardware address of `N` bytes. The default length is that of an Ethernet MAC address.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct HwAddress<const N: usize = 6>([u8; N]);

impl<const N: usize> HwAddress<N> {
    /// Length of the address, in bytes.
    pub const ADDRESS_SIZE: usize = N;

    /// The broadcast address, with every byte set to `0xff`.
    pub const BROADCAST: Self = Self([0xff; N]);

    /// The raw bytes.
    pub fn octets(&self) -> [u8; N] {
        self.0
    }

    /// Returns `true` if every byte is `0xff`.
    pub fn is_broadcast(&self) -> bool {
        self.0.iter().all(|&b| b == 0xff)
    }
}

impl<const N: usize> Default for HwAddress<N> {
    fn default() -> Self {
        Self([0; N])
    }
}

impl<const N: usize> FixedAddress for HwAddress<N> {
    const ADDRESS_SIZE: usize = N;

    fn from_raw(raw: &[u8]) -> Self {
        let mut octets = [0; N];
        octets.copy_from_slice(raw);
        Self(octets)
    }

    fn raw(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> From<[u8; N]> for HwAddress<N> {
    fn from(octets: [u8; N]) -> Self {
        Self(octets)
    }
}

impl<const N: usize> fmt::Display for HwAddress<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(":")?;
            }
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for HwAddress<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HwAddress({self})")
    }
}
