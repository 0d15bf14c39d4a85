//! Fixed-size hash blocks addressable as bytes, u32 lanes, or u64 lanes.
//!
//! All multi-byte reinterpretation is explicitly little-endian via
//! `byteorder`, so these types behave identically on big-endian hosts —
//! unlike the reference implementation's C union, which assumes a
//! little-endian host.

use byteorder::{ByteOrder, LittleEndian};
use bytemuck::{Pod, Zeroable};

const SIZE_U32: usize = std::mem::size_of::<u32>();
const SIZE_U64: usize = std::mem::size_of::<u64>();

/// Byte-addressable access to a fixed-size hash block, with little-endian
/// u32/u64 lane views layered on top.
pub trait HashWords {
    fn as_bytes(&self) -> &[u8];
    fn as_bytes_mut(&mut self) -> &mut [u8];

    fn word32(&self, index: usize) -> u32 {
        LittleEndian::read_u32(&self.as_bytes()[index * SIZE_U32..][..SIZE_U32])
    }

    fn set_word32(&mut self, index: usize, value: u32) {
        LittleEndian::write_u32(&mut self.as_bytes_mut()[index * SIZE_U32..][..SIZE_U32], value)
    }

    fn word64(&self, index: usize) -> u64 {
        LittleEndian::read_u64(&self.as_bytes()[index * SIZE_U64..][..SIZE_U64])
    }

    fn set_word64(&mut self, index: usize, value: u64) {
        LittleEndian::write_u64(&mut self.as_bytes_mut()[index * SIZE_U64..][..SIZE_U64], value)
    }
}

/// A 32-byte block: the seed, and the final digest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct Hash256(pub [u8; 32]);

impl HashWords for Hash256 {
    fn as_bytes(&self) -> &[u8] {
        &self.0
    }
    fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

/// A 64-byte block: one light-cache item, or the header-derived seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct Hash512(pub [u8; 64]);

impl Default for Hash512 {
    fn default() -> Self {
        Self([0u8; 64])
    }
}

impl HashWords for Hash512 {
    fn as_bytes(&self) -> &[u8] {
        &self.0
    }
    fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl std::ops::BitXor<&Hash512> for &Hash512 {
    type Output = Hash512;

    fn bitxor(self, rhs: &Hash512) -> Hash512 {
        let mut out = Hash512::default();
        for i in 0..64 {
            out.0[i] = self.0[i] ^ rhs.0[i];
        }
        out
    }
}

/// A 128-byte block: one dataset item, the pair of half-items concatenated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct Hash1024(pub [u8; 128]);

impl Default for Hash1024 {
    fn default() -> Self {
        Self([0u8; 128])
    }
}

impl HashWords for Hash1024 {
    fn as_bytes(&self) -> &[u8] {
        &self.0
    }
    fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl Hash1024 {
    /// Concatenates two 512-bit halves into a single 1024-bit block.
    pub fn from_halves(first: &Hash512, second: &Hash512) -> Self {
        let mut out = Hash1024::default();
        out.0[..64].copy_from_slice(&first.0);
        out.0[64..].copy_from_slice(&second.0);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word32_round_trips_little_endian() {
        let mut h = Hash512::default();
        h.set_word32(0, 0x0102_0304);
        assert_eq!(h.0[0..4], [0x04, 0x03, 0x02, 0x01]);
        assert_eq!(h.word32(0), 0x0102_0304);
    }

    #[test]
    fn word64_round_trips_little_endian() {
        let mut h = Hash1024::default();
        h.set_word64(3, 0x1122_3344_5566_7788);
        assert_eq!(h.word64(3), 0x1122_3344_5566_7788);
    }

    #[test]
    fn bitxor_is_bytewise() {
        let mut a = Hash512::default();
        let mut b = Hash512::default();
        a.0[0] = 0xff;
        b.0[0] = 0x0f;
        let x = &a ^ &b;
        assert_eq!(x.0[0], 0xf0);
    }

    #[test]
    fn from_halves_concatenates() {
        let mut first = Hash512::default();
        let mut second = Hash512::default();
        first.0[0] = 1;
        second.0[0] = 2;
        let combined = Hash1024::from_halves(&first, &second);
        assert_eq!(combined.0[0], 1);
        assert_eq!(combined.0[64], 2);
    }
}
