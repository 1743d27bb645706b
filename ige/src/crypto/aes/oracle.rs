use crate::crypto::{
    aes::{Block, Variant},
    Error,
};
use aes::{
    cipher::{generic_array::GenericArray, BlockDecrypt, BlockEncrypt, KeyInit},
    Aes128, Aes192, Aes256,
};
use log::debug;

/// Single-block cipher operating without any feedback mode.
///
/// An oracle is opened for one variant, keyed once and then used block by block. It is closed by
/// dropping it.
pub trait BlockOracle: Sized {
    /// Create an oracle for `variant` without a key.
    fn open(variant: Variant) -> Result<Self, Error>;

    /// Install the key. The key length has to match the variant the oracle was opened for.
    fn set_key(&mut self, key: &[u8]) -> Result<(), Error>;

    /// Encrypt one block in place.
    fn encrypt_block(&self, block: &mut Block) -> Result<(), Error>;

    /// Decrypt one block in place.
    fn decrypt_block(&self, block: &mut Block) -> Result<(), Error>;
}

/// [`BlockOracle`] backed by the `aes` crate.
///
/// The expanded key is zeroized when the oracle is dropped.
pub enum AesOracle {
    Unkeyed(Variant),
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

impl AesOracle {
    pub fn variant(&self) -> Variant {
        match self {
            AesOracle::Unkeyed(variant) => *variant,
            AesOracle::Aes128(_) => Variant::Aes128,
            AesOracle::Aes192(_) => Variant::Aes192,
            AesOracle::Aes256(_) => Variant::Aes256,
        }
    }
}

fn new_cipher<C: KeyInit>(key: &[u8]) -> Result<C, Error> {
    C::new_from_slice(key).map_err(|_| Error::Setup)
}

impl BlockOracle for AesOracle {
    fn open(variant: Variant) -> Result<Self, Error> {
        Ok(AesOracle::Unkeyed(variant))
    }

    fn set_key(&mut self, key: &[u8]) -> Result<(), Error> {
        let variant = self.variant();
        if key.len() != variant.key_size() {
            debug!(
                "{} oracle rejected key of {} bytes",
                <&str>::from(variant),
                key.len()
            );
            return Err(Error::Setup);
        }
        *self = match variant {
            Variant::Aes128 => AesOracle::Aes128(new_cipher(key)?),
            Variant::Aes192 => AesOracle::Aes192(new_cipher(key)?),
            Variant::Aes256 => AesOracle::Aes256(new_cipher(key)?),
        };
        Ok(())
    }

    fn encrypt_block(&self, block: &mut Block) -> Result<(), Error> {
        let block = GenericArray::from_mut_slice(block);
        match self {
            AesOracle::Unkeyed(_) => return Err(Error::Encrypt),
            AesOracle::Aes128(cipher) => cipher.encrypt_block(block),
            AesOracle::Aes192(cipher) => cipher.encrypt_block(block),
            AesOracle::Aes256(cipher) => cipher.encrypt_block(block),
        }
        Ok(())
    }

    fn decrypt_block(&self, block: &mut Block) -> Result<(), Error> {
        let block = GenericArray::from_mut_slice(block);
        match self {
            AesOracle::Unkeyed(_) => return Err(Error::Decrypt),
            AesOracle::Aes128(cipher) => cipher.decrypt_block(block),
            AesOracle::Aes192(cipher) => cipher.decrypt_block(block),
            AesOracle::Aes256(cipher) => cipher.decrypt_block(block),
        }
        Ok(())
    }
}
