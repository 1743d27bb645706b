use crate::crypto;

/// Raw version of crypto::Error, returned through the C interface.
#[repr(C)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorCodeRaw {
    /// No error.
    Ok = 0,
    /// Size of the provided buffer is invalid.
    InvalidBufferSize = 1,
    /// Invalid size of the symmetric key.
    InvalidSymmetricKeySize = 2,
    /// Failed to set up the block cipher.
    Setup = 3,
    /// Encryption or decryption of a block failed.
    BlockOperation = 4,
    /// A required pointer was null.
    NullPointer = 5,
}

impl From<crypto::Error> for ErrorCodeRaw {
    fn from(value: crypto::Error) -> Self {
        match value {
            crypto::Error::Encrypt | crypto::Error::Decrypt => ErrorCodeRaw::BlockOperation,
            crypto::Error::Setup => ErrorCodeRaw::Setup,
            crypto::Error::InvalidSymmetricKeySize => ErrorCodeRaw::InvalidSymmetricKeySize,
            crypto::Error::InvalidBufferSize | crypto::Error::InvalidOutputSize => {
                ErrorCodeRaw::InvalidBufferSize
            }
        }
    }
}

impl From<Result<(), crypto::Error>> for ErrorCodeRaw {
    fn from(value: Result<(), crypto::Error>) -> Self {
        match value {
            Ok(()) => ErrorCodeRaw::Ok,
            Err(e) => e.into(),
        }
    }
}
