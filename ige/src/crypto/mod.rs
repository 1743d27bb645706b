pub mod aes;

/// Common errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq, displaydoc::Display)]
pub enum Error {
    /// Error during encryption.
    Encrypt,
    /// Error during decryption.
    Decrypt,
    /// Failed to set up the block cipher.
    Setup,
    /// Invalid size of the symmetric key.
    InvalidSymmetricKeySize,
    /// Size of the provided buffer is not a multiple of the block size.
    InvalidBufferSize,
    /// Output buffer is smaller than the input buffer.
    InvalidOutputSize,
}

/// Validation of the buffer size against the block size of the cipher.
fn check_buffer_size(buffer_size: usize, block_size: usize) -> Result<(), Error> {
    if buffer_size % block_size != 0 {
        return Err(Error::InvalidBufferSize);
    }
    Ok(())
}
