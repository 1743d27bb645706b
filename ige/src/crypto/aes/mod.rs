pub mod ige;
pub mod oracle;

use crate::crypto::Error;
use aes::{
    cipher::{BlockSizeUser, KeySizeUser, Unsigned},
    Aes128, Aes192, Aes256,
};
use strum::{EnumIter, IntoStaticStr};

/// Size of the key in bytes for AES128-based algorithms.
pub const KEY128_SIZE: usize = <Aes128 as KeySizeUser>::KeySize::USIZE;
/// Size of the key in bytes for AES192-based algorithms.
pub const KEY192_SIZE: usize = <Aes192 as KeySizeUser>::KeySize::USIZE;
/// Size of the key in bytes for AES256-based algorithms.
pub const KEY256_SIZE: usize = <Aes256 as KeySizeUser>::KeySize::USIZE;
/// Size of the block size in bytes for AES-based algorithms.
pub const BLOCK_SIZE: usize = <Aes128 as BlockSizeUser>::BlockSize::USIZE;
/// Size of the initialization vector in bytes for AES-IGE: two blocks.
pub const IGE_IV_SIZE: usize = 2 * BLOCK_SIZE;

/// A single AES block.
pub type Block = [u8; BLOCK_SIZE];

/// AES-IGE initialization vector.
///
/// The first block is the ciphertext block preceding the message, the second block is the
/// plaintext block preceding the message. After encryption it holds the last ciphertext and
/// the last plaintext block, in that order.
pub type IgeIv = [u8; IGE_IV_SIZE];

/// AES variant, selected by the size of the key.
#[derive(Copy, Clone, Debug, Eq, PartialEq, EnumIter, IntoStaticStr)]
pub enum Variant {
    Aes128,
    Aes192,
    Aes256,
}

impl Variant {
    /// Selects the variant matching a key of `key_size` bytes.
    ///
    /// # Errors
    ///
    /// * `InvalidSymmetricKeySize`: `key_size` is none of `KEY128_SIZE`, `KEY192_SIZE` and
    ///   `KEY256_SIZE`.
    pub const fn from_key_size(key_size: usize) -> Result<Self, Error> {
        match key_size {
            KEY128_SIZE => Ok(Variant::Aes128),
            KEY192_SIZE => Ok(Variant::Aes192),
            KEY256_SIZE => Ok(Variant::Aes256),
            _ => Err(Error::InvalidSymmetricKeySize),
        }
    }

    pub const fn key_size(self) -> usize {
        match self {
            Variant::Aes128 => KEY128_SIZE,
            Variant::Aes192 => KEY192_SIZE,
            Variant::Aes256 => KEY256_SIZE,
        }
    }
}

/// XOR `other` into `block`.
#[inline]
fn xor_block(block: &mut Block, other: &Block) {
    block
        .iter_mut()
        .zip(other.iter())
        .for_each(|(byte, other)| *byte ^= other);
}
