//! AES in Infinite Garble Extension (IGE) mode.
//!
//! Every output block depends on all preceding plaintext and ciphertext blocks:
//!
//! ```text
//! encryption: C[i] = E(P[i] ^ C[i-1]) ^ P[i-1]
//! decryption: P[i] = D(C[i] ^ P[i-1]) ^ C[i-1]
//! ```
//!
//! `C[0]` and `P[0]` are taken from the [`IgeIv`], in that order.

use crate::crypto::{
    aes::{
        oracle::{AesOracle, BlockOracle},
        xor_block, Block, IgeIv, Variant, BLOCK_SIZE,
    },
    check_buffer_size, Error,
};
use log::{debug, trace};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Direction of the transformation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Running chaining state. Only written back to the caller's IV after all blocks succeeded.
#[derive(Zeroize, ZeroizeOnDrop)]
struct ChainState {
    ciphertext: Block,
    plaintext: Block,
}

impl ChainState {
    fn new(iv: &IgeIv) -> Self {
        let mut state = ChainState {
            ciphertext: [0u8; BLOCK_SIZE],
            plaintext: [0u8; BLOCK_SIZE],
        };
        state.ciphertext.copy_from_slice(&iv[..BLOCK_SIZE]);
        state.plaintext.copy_from_slice(&iv[BLOCK_SIZE..]);
        state
    }

    fn store(&self, iv: &mut IgeIv) {
        iv[..BLOCK_SIZE].copy_from_slice(&self.ciphertext);
        iv[BLOCK_SIZE..].copy_from_slice(&self.plaintext);
    }

    fn encrypt<O: BlockOracle>(&mut self, oracle: &O, block: &mut Block) -> Result<(), Error> {
        let plaintext = Zeroizing::new(*block);
        xor_block(block, &self.ciphertext);
        oracle.encrypt_block(block).map_err(|_| Error::Encrypt)?;
        xor_block(block, &self.plaintext);
        self.ciphertext = *block;
        self.plaintext = *plaintext;
        Ok(())
    }

    fn decrypt<O: BlockOracle>(&mut self, oracle: &O, block: &mut Block) -> Result<(), Error> {
        let ciphertext = Zeroizing::new(*block);
        xor_block(block, &self.plaintext);
        oracle.decrypt_block(block).map_err(|_| Error::Decrypt)?;
        xor_block(block, &self.ciphertext);
        self.ciphertext = *ciphertext;
        self.plaintext = *block;
        Ok(())
    }
}

/// Validation of buffer and key sizes. Returns the variant selected by the key size.
pub(crate) fn check_sizes(buffer_size: usize, key_size: usize) -> Result<Variant, Error> {
    check_buffer_size(buffer_size, BLOCK_SIZE).inspect_err(|_| {
        debug!("buffer of {buffer_size} bytes is not a multiple of {BLOCK_SIZE}")
    })?;
    Variant::from_key_size(key_size)
        .inspect_err(|_| debug!("unsupported key size of {key_size} bytes"))
}

/// AES-IGE over a buffer with an already validated size.
fn transform_blocks<O: BlockOracle>(
    variant: Variant,
    key: &[u8],
    iv: &mut IgeIv,
    buffer: &mut [u8],
    direction: Direction,
) -> Result<(), Error> {
    let mut oracle = O::open(variant)?;
    oracle.set_key(key)?;

    let mut state = ChainState::new(iv);
    for (index, block) in buffer.chunks_exact_mut(BLOCK_SIZE).enumerate() {
        let block: &mut Block = block.try_into().map_err(|_| Error::InvalidBufferSize)?;
        let result = match direction {
            Direction::Encrypt => state.encrypt(&oracle, block),
            Direction::Decrypt => state.decrypt(&oracle, block),
        };
        result.inspect_err(|e| trace!("{direction:?} failed at block {index}: {e}"))?;
    }

    if direction == Direction::Encrypt && !buffer.is_empty() {
        state.store(iv);
    }
    Ok(())
}

/// AES-IGE in place: generic over the block cipher oracle.
///
/// The variant is selected by the size of `key`. On successful encryption of a non-empty buffer,
/// `iv` is updated to the final chaining state so that a following call continues the chain.
/// Decryption never modifies `iv`.
///
/// # Errors
///
/// * `InvalidBufferSize`: The length of `buffer` is not a multiple of `BLOCK_SIZE`.
/// * `InvalidSymmetricKeySize`: The length of `key` is not a supported AES key size.
/// * Any error of [`BlockOracle::open`] or [`BlockOracle::set_key`].
/// * `Encrypt`/`Decrypt`: A block operation failed. `iv` is left unchanged.
pub fn ige_transform_in_place<'data, O: BlockOracle>(
    key: &[u8],
    iv: &mut IgeIv,
    buffer: &'data mut [u8],
    direction: Direction,
) -> Result<&'data [u8], Error> {
    let variant = check_sizes(buffer.len(), key.len())?;
    transform_blocks::<O>(variant, key, iv, buffer, direction)?;
    Ok(buffer)
}

/// AES-IGE from `input` into the first `input.len()` bytes of `output`.
///
/// Behaves like [`ige_transform_in_place`].
///
/// # Errors
///
/// Same as [`ige_transform_in_place`], and additionally:
/// * `InvalidOutputSize`: `output` is shorter than `input`.
pub fn ige_transform<O: BlockOracle>(
    key: &[u8],
    iv: &mut IgeIv,
    input: &[u8],
    output: &mut [u8],
    direction: Direction,
) -> Result<(), Error> {
    let variant = check_sizes(input.len(), key.len())?;
    let output = output
        .get_mut(..input.len())
        .ok_or(Error::InvalidOutputSize)?;
    output.copy_from_slice(input);
    transform_blocks::<O>(variant, key, iv, output, direction)
}

/// AES-IGE encryption in place. The AES variant is selected by the size of `key`.
pub fn aes_ige_encrypt<'data>(
    key: &[u8],
    iv: &mut IgeIv,
    buffer: &'data mut [u8],
) -> Result<&'data [u8], Error> {
    ige_transform_in_place::<AesOracle>(key, iv, buffer, Direction::Encrypt)
}

/// AES-IGE decryption in place. The AES variant is selected by the size of `key`.
pub fn aes_ige_decrypt<'data>(
    key: &[u8],
    iv: &mut IgeIv,
    buffer: &'data mut [u8],
) -> Result<&'data [u8], Error> {
    ige_transform_in_place::<AesOracle>(key, iv, buffer, Direction::Decrypt)
}

/// AES-IGE from `input` into `output`. The AES variant is selected by the size of `key`.
pub fn aes_ige_transform(
    key: &[u8],
    iv: &mut IgeIv,
    input: &[u8],
    output: &mut [u8],
    direction: Direction,
) -> Result<(), Error> {
    ige_transform::<AesOracle>(key, iv, input, output, direction)
}

macro_rules! define_aes_ige_impl {
    (
        $encryptor:ident,
        $decryptor:ident,
        $variant:expr,
        $key_size:ident,
        $doc:expr
    ) => {
        #[doc = concat!($doc, " encryption in place.")]
        ///
        /// # Errors
        ///
        /// * `InvalidBufferSize`: The length of `buffer` is not a multiple of `BLOCK_SIZE`.
        /// * `InvalidSymmetricKeySize`:
        #[doc = concat!("The length of `key` is not `", stringify!($key_size), "` bytes.")]
        pub fn $encryptor<'data>(
            key: &[u8],
            iv: &mut IgeIv,
            buffer: &'data mut [u8],
        ) -> Result<&'data [u8], Error> {
            check_buffer_size(buffer.len(), BLOCK_SIZE)?;
            if key.len() != $variant.key_size() {
                return Err(Error::InvalidSymmetricKeySize);
            }
            aes_ige_encrypt(key, iv, buffer)
        }

        #[doc = concat!($doc, " decryption in place.")]
        ///
        /// # Errors
        ///
        /// * `InvalidBufferSize`: The length of `buffer` is not a multiple of `BLOCK_SIZE`.
        /// * `InvalidSymmetricKeySize`:
        #[doc = concat!("The length of `key` is not `", stringify!($key_size), "` bytes.")]
        pub fn $decryptor<'data>(
            key: &[u8],
            iv: &mut IgeIv,
            buffer: &'data mut [u8],
        ) -> Result<&'data [u8], Error> {
            check_buffer_size(buffer.len(), BLOCK_SIZE)?;
            if key.len() != $variant.key_size() {
                return Err(Error::InvalidSymmetricKeySize);
            }
            aes_ige_decrypt(key, iv, buffer)
        }
    };
}

define_aes_ige_impl!(
    aes128ige_encrypt,
    aes128ige_decrypt,
    Variant::Aes128,
    KEY128_SIZE,
    "AES128-IGE"
);
define_aes_ige_impl!(
    aes192ige_encrypt,
    aes192ige_decrypt,
    Variant::Aes192,
    KEY192_SIZE,
    "AES192-IGE"
);
define_aes_ige_impl!(
    aes256ige_encrypt,
    aes256ige_decrypt,
    Variant::Aes256,
    KEY256_SIZE,
    "AES256-IGE"
);
