//! MurmurHash3, the crate's default hashing algorithm.
//!
//! MurmurHash3 was designed by Austin Appleby and placed in the public
//! domain. The x86 and x64 variants are optimized for their respective
//! platforms and do not produce the same results; [`hash`] picks the variant
//! matching the target's word size.
//!
//! [`Murmur3Hasher`] adapts the x64 128-bit variant to the standard
//! [`Hasher`] interface by streaming input through a 16-byte block buffer,
//! so hashing a value in one `write` call or many produces the same result.
//! [`Murmur3BuildHasher`] is the crate's [`DefaultHashBuilder`]: it is
//! deterministic (seed zero) unless seeded, which keeps table layouts
//! reproducible; it makes no attempt at flood resistance, matching the
//! table's trust in its hash adaptor.
//!
//! [`DefaultHashBuilder`]: crate::DefaultHashBuilder

use core::hash::BuildHasher;
use core::hash::Hasher;

use cfg_if::cfg_if;

const C1_64: u64 = 0x87C3_7B91_1142_53D5;
const C2_64: u64 = 0x4CF5_AD43_2745_937F;

const C1_32: u32 = 0xCC9E_2D51;
const C2_32: u32 = 0x1B87_3593;

/// 32-bit perfect integer hash (the murmur3 finalizer).
#[inline]
pub const fn mix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85EB_CA6B);
    h ^= h >> 13;
    h = h.wrapping_mul(0xC2B2_AE35);
    h ^= h >> 16;
    h
}

/// 64-bit perfect integer hash (the murmur3 finalizer).
#[inline]
pub const fn mix64(mut h: u64) -> u64 {
    h ^= h >> 33;
    h = h.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
    h ^= h >> 33;
    h = h.wrapping_mul(0xC4CE_B9FE_1A85_EC53);
    h ^= h >> 33;
    h
}

#[inline(always)]
fn scramble32(mut k1: u32) -> u32 {
    k1 = k1.wrapping_mul(C1_32);
    k1 = k1.rotate_left(15);
    k1.wrapping_mul(C2_32)
}

/// Produces a 32-bit hash; optimized for x86 platforms.
pub fn x86_32(data: &[u8], seed: u32) -> u32 {
    let mut h1 = seed;

    let mut blocks = data.chunks_exact(4);
    for block in &mut blocks {
        let k1 = u32::from_le_bytes(block.try_into().expect("4-byte block"));
        h1 ^= scramble32(k1);
        h1 = h1.rotate_left(13);
        h1 = h1.wrapping_mul(5).wrapping_add(0xE654_6B64);
    }

    let tail = blocks.remainder();
    if !tail.is_empty() {
        let mut k1 = 0u32;
        for (i, &byte) in tail.iter().enumerate() {
            k1 ^= u32::from(byte) << (8 * i);
        }
        h1 ^= scramble32(k1);
    }

    h1 ^= data.len() as u32;
    mix32(h1)
}

/// Produces a 128-bit hash; optimized for x64 platforms.
pub fn x64_128(data: &[u8], seed: u64) -> (u64, u64) {
    let mut h1 = seed;
    let mut h2 = seed;

    let mut blocks = data.chunks_exact(16);
    for block in &mut blocks {
        let k1 = u64::from_le_bytes(block[..8].try_into().expect("8-byte half"));
        let k2 = u64::from_le_bytes(block[8..].try_into().expect("8-byte half"));
        mix_block(&mut h1, &mut h2, k1, k2);
    }

    let (h1, h2) = finalize(h1, h2, blocks.remainder(), data.len() as u64);
    (h1, h2)
}

/// Mixes one 16-byte block into the running state.
#[inline(always)]
fn mix_block(h1: &mut u64, h2: &mut u64, mut k1: u64, mut k2: u64) {
    k1 = k1.wrapping_mul(C1_64);
    k1 = k1.rotate_left(31);
    k1 = k1.wrapping_mul(C2_64);
    *h1 ^= k1;

    *h1 = h1.rotate_left(27);
    *h1 = h1.wrapping_add(*h2);
    *h1 = h1.wrapping_mul(5).wrapping_add(0x52DC_E729);

    k2 = k2.wrapping_mul(C2_64);
    k2 = k2.rotate_left(33);
    k2 = k2.wrapping_mul(C1_64);
    *h2 ^= k2;

    *h2 = h2.rotate_left(31);
    *h2 = h2.wrapping_add(*h1);
    *h2 = h2.wrapping_mul(5).wrapping_add(0x3849_5AB5);
}

/// Mixes the sub-block tail into the state and applies the finalizer.
#[inline]
fn finalize(mut h1: u64, mut h2: u64, tail: &[u8], total_len: u64) -> (u64, u64) {
    debug_assert!(tail.len() < 16);

    if tail.len() > 8 {
        let mut k2 = 0u64;
        for (i, &byte) in tail[8..].iter().enumerate() {
            k2 ^= u64::from(byte) << (8 * i);
        }
        k2 = k2.wrapping_mul(C2_64);
        k2 = k2.rotate_left(33);
        k2 = k2.wrapping_mul(C1_64);
        h2 ^= k2;
    }
    if !tail.is_empty() {
        let mut k1 = 0u64;
        for (i, &byte) in tail[..tail.len().min(8)].iter().enumerate() {
            k1 ^= u64::from(byte) << (8 * i);
        }
        k1 = k1.wrapping_mul(C1_64);
        k1 = k1.rotate_left(31);
        k1 = k1.wrapping_mul(C2_64);
        h1 ^= k1;
    }

    h1 ^= total_len;
    h2 ^= total_len;

    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);

    h1 = mix64(h1);
    h2 = mix64(h2);

    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);

    (h1, h2)
}

cfg_if! {
    if #[cfg(target_pointer_width = "64")] {
        /// Hashes a byte slice, electing the murmur3 variant that matches
        /// the target's word size.
        pub fn hash(data: &[u8], seed: usize) -> usize {
            x64_128(data, seed as u64).0 as usize
        }
    } else {
        /// Hashes a byte slice, electing the murmur3 variant that matches
        /// the target's word size.
        pub fn hash(data: &[u8], seed: usize) -> usize {
            x86_32(data, seed as u32) as usize
        }
    }
}

/// A streaming [`Hasher`] over the murmur3 x64 128-bit algorithm.
///
/// Input is buffered into 16-byte blocks; the tail and length are folded in
/// at [`finish`], so the result matches [`x64_128`] (first word) over the
/// concatenation of all writes.
///
/// [`finish`]: Hasher::finish
#[derive(Clone)]
pub struct Murmur3Hasher {
    h1: u64,
    h2: u64,
    buf: [u8; 16],
    buf_len: usize,
    total_len: u64,
}

impl Murmur3Hasher {
    /// Creates a hasher with seed zero.
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    /// Creates a hasher with the given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            h1: seed,
            h2: seed,
            buf: [0; 16],
            buf_len: 0,
            total_len: 0,
        }
    }

    #[inline]
    fn process(&mut self, block: &[u8]) {
        debug_assert_eq!(block.len(), 16);
        let k1 = u64::from_le_bytes(block[..8].try_into().expect("8-byte half"));
        let k2 = u64::from_le_bytes(block[8..].try_into().expect("8-byte half"));
        mix_block(&mut self.h1, &mut self.h2, k1, k2);
    }
}

impl Default for Murmur3Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Murmur3Hasher {
    fn write(&mut self, mut bytes: &[u8]) {
        self.total_len += bytes.len() as u64;

        if self.buf_len > 0 {
            let take = (16 - self.buf_len).min(bytes.len());
            self.buf[self.buf_len..self.buf_len + take].copy_from_slice(&bytes[..take]);
            self.buf_len += take;
            bytes = &bytes[take..];
            if self.buf_len < 16 {
                return;
            }
            let block = self.buf;
            self.process(&block);
            self.buf_len = 0;
        }

        let mut blocks = bytes.chunks_exact(16);
        for block in &mut blocks {
            self.process(block);
        }

        let rest = blocks.remainder();
        self.buf[..rest.len()].copy_from_slice(rest);
        self.buf_len = rest.len();
    }

    fn finish(&self) -> u64 {
        finalize(self.h1, self.h2, &self.buf[..self.buf_len], self.total_len).0
    }
}

/// Builds [`Murmur3Hasher`]s sharing one seed.
///
/// The default seed is zero, so hashes (and therefore table layouts) are
/// reproducible across runs. Seed it explicitly if reproducibility is not
/// wanted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Murmur3BuildHasher {
    seed: u64,
}

impl Murmur3BuildHasher {
    /// Creates a builder producing hashers with the given seed.
    pub const fn with_seed(seed: u64) -> Self {
        Self { seed }
    }
}

impl BuildHasher for Murmur3BuildHasher {
    type Hasher = Murmur3Hasher;

    fn build_hasher(&self) -> Self::Hasher {
        Murmur3Hasher::with_seed(self.seed)
    }
}
