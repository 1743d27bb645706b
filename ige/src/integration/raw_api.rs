use crate::crypto::aes::{
    ige::{aes_ige_decrypt, aes_ige_encrypt, check_sizes},
    IgeIv,
};
use crate::integration::raw_errors::ErrorCodeRaw;
use core::{ptr, slice};
use log::trace;

/// AES-IGE encryption (`encrypt == true`) or decryption of `length` bytes from `input` to
/// `output`, with the AES variant selected by `key_length`.
///
/// `ivec` holds two blocks: the ciphertext block and the plaintext block preceding the message.
/// It is updated to the final chaining state after a successful encryption of at least one block
/// and is never modified by decryption.
///
/// Sizes are validated before `output` is written.
///
/// # Safety
///
/// * `input` must be valid for reads of `length` bytes.
/// * `output` must be valid for writes of `length` bytes. It may be equal to or overlap `input`.
/// * `key` must be valid for reads of `key_length` bytes.
/// * `ivec` must be valid for reads and writes of `IGE_IV_SIZE` bytes and must not overlap any
///   of the other buffers.
#[no_mangle]
pub unsafe extern "C" fn aes_ige_transform(
    input: *const u8,
    output: *mut u8,
    length: usize,
    key: *const u8,
    key_length: usize,
    ivec: *mut u8,
    encrypt: bool,
) -> ErrorCodeRaw {
    trace!("aes_ige_transform: length={length}, key_length={key_length}, encrypt={encrypt}");
    if input.is_null() || output.is_null() || key.is_null() || ivec.is_null() {
        return ErrorCodeRaw::NullPointer;
    }
    if let Err(e) = check_sizes(length, key_length) {
        return e.into();
    }

    // SAFETY: The caller guarantees that `key` is valid for reads of `key_length` bytes.
    let key = unsafe { slice::from_raw_parts(key, key_length) };
    // SAFETY: The caller guarantees that `ivec` is valid for `IGE_IV_SIZE` bytes and not aliased.
    // `IgeIv` is a byte array and has no alignment requirement.
    let iv = unsafe { &mut *ivec.cast::<IgeIv>() };
    if !ptr::eq(input, output) {
        // SAFETY: Both pointers are valid for `length` bytes. `ptr::copy` permits overlap.
        unsafe { ptr::copy(input, output, length) };
    }
    // SAFETY: `output` is valid for reads and writes of `length` bytes and holds the input now.
    let buffer = unsafe { slice::from_raw_parts_mut(output, length) };

    let result = if encrypt {
        aes_ige_encrypt(key, iv, buffer)
    } else {
        aes_ige_decrypt(key, iv, buffer)
    };
    result.map(|_| ()).into()
}
