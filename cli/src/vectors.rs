//! Known-answer vectors for the AES block cipher and AES-IGE.

use ige::crypto::{
    aes::{
        ige::{aes_ige_transform, Direction},
        oracle::{AesOracle, BlockOracle},
        Block, IgeIv, Variant,
    },
    Error,
};

/// Single-block AES vector.
pub struct BlockVector {
    pub name: &'static str,
    pub key: &'static [u8],
    pub plaintext: Block,
    pub ciphertext: Block,
}

/// AES-IGE vector.
pub struct IgeVector {
    pub name: &'static str,
    pub key: &'static [u8],
    pub iv: IgeIv,
    pub plaintext: &'static [u8],
    pub ciphertext: &'static [u8],
}

/// FIPS-197, appendix C.3.
pub const BLOCK_VECTORS: &[BlockVector] = &[BlockVector {
    name: "fips197_aes256",
    key: &[
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19, 0x1a, 0x1b, 0x1c, 0x1d,
        0x1e, 0x1f,
    ],
    plaintext: [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ],
    ciphertext: [
        0x8e, 0xa2, 0xb7, 0xca, 0x51, 0x67, 0x45, 0xbf, 0xea, 0xfc, 0x49, 0x90, 0x4b, 0x49, 0x60,
        0x89,
    ],
}];

pub const IGE_VECTORS: &[IgeVector] = &[
    IgeVector {
        name: "openssl_aes128_1",
        key: &[
            0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d,
            0x0e, 0x0f,
        ],
        iv: [
            0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d,
            0x0e, 0x0f, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19, 0x1a, 0x1b,
            0x1c, 0x1d, 0x1e, 0x1f,
        ],
        plaintext: &[0u8; 32],
        ciphertext: &[
            0x1a, 0x85, 0x19, 0xa6, 0x55, 0x7b, 0xe6, 0x52, 0xe9, 0xda, 0x8e, 0x43, 0xda, 0x4e,
            0xf4, 0x45, 0x3c, 0xf4, 0x56, 0xb4, 0xca, 0x48, 0x8a, 0xa3, 0x83, 0xc7, 0x9c, 0x98,
            0xb3, 0x47, 0x97, 0xcb,
        ],
    },
    // Easter egg by Ben Laurie, see http://www.links.org/files/openssl-ige.pdf
    IgeVector {
        name: "openssl_aes128_2",
        key: b"This is an imple",
        iv: *b"mentation of IGE mode for OpenSS",
        plaintext: &[
            0x99, 0x70, 0x64, 0x87, 0xa1, 0xcd, 0xe6, 0x13, 0xbc, 0x6d, 0xe0, 0xb6, 0xf2, 0x4b,
            0x1c, 0x7a, 0xa4, 0x48, 0xc8, 0xb9, 0xc3, 0x40, 0x3e, 0x34, 0x67, 0xa8, 0xca, 0xd8,
            0x93, 0x40, 0xf5, 0x3b,
        ],
        ciphertext: b"L. Let's hope Ben got it right!\n",
    },
    IgeVector {
        name: "aes192",
        key: b"Open sesame! ... Please!",
        iv: *b"Infinite Garble Extension mode!\n",
        plaintext: b"Greetings, Rustaceans!!!!!!!!!!!",
        ciphertext: &[
            0x62, 0x04, 0x2e, 0x97, 0xdc, 0x9f, 0xad, 0x08, 0x81, 0x1a, 0x92, 0x58, 0x22, 0xa9,
            0x85, 0xff, 0x65, 0xb8, 0x9a, 0x2c, 0x71, 0x30, 0x21, 0x31, 0xcb, 0x23, 0x30, 0x96,
            0x86, 0x74, 0x23, 0x89,
        ],
    },
    IgeVector {
        name: "aes256",
        key: b"Or was it 'open quinoa' instead?",
        iv: *b"Infinite Garble Extension mode!\n",
        plaintext: b"Greetings, Rustaceans!!!!!!!!!!!",
        ciphertext: &[
            0xa2, 0x47, 0x9f, 0x78, 0xdf, 0x85, 0xdd, 0xf8, 0x04, 0x5f, 0x19, 0x1f, 0x2c, 0x63,
            0x5e, 0x69, 0xa3, 0xef, 0x34, 0xfd, 0xe5, 0xa8, 0x1d, 0x23, 0x9f, 0xc6, 0x12, 0x20,
            0x91, 0x3f, 0x13, 0x17,
        ],
    },
];

/// Result of checking one direction of a vector.
#[derive(Debug, Eq, PartialEq)]
pub enum Outcome {
    Ok,
    Mismatch { expected: Vec<u8>, actual: Vec<u8> },
    Failed(Error),
}

impl Outcome {
    fn compare(expected: &[u8], actual: &[u8]) -> Self {
        if expected == actual {
            Outcome::Ok
        } else {
            Outcome::Mismatch {
                expected: expected.to_vec(),
                actual: actual.to_vec(),
            }
        }
    }
}

impl BlockVector {
    pub fn check(&self, direction: Direction) -> Outcome {
        let (input, expected) = match direction {
            Direction::Encrypt => (self.plaintext, self.ciphertext),
            Direction::Decrypt => (self.ciphertext, self.plaintext),
        };
        let result = Variant::from_key_size(self.key.len())
            .and_then(AesOracle::open)
            .and_then(|mut oracle| {
                oracle.set_key(self.key)?;
                let mut block = input;
                match direction {
                    Direction::Encrypt => oracle.encrypt_block(&mut block)?,
                    Direction::Decrypt => oracle.decrypt_block(&mut block)?,
                }
                Ok(block)
            });
        match result {
            Ok(actual) => Outcome::compare(&expected, &actual),
            Err(e) => Outcome::Failed(e),
        }
    }
}

impl IgeVector {
    /// Runs one direction starting from a fresh copy of the vector's IV.
    pub fn check(&self, direction: Direction) -> Outcome {
        let (input, expected) = match direction {
            Direction::Encrypt => (self.plaintext, self.ciphertext),
            Direction::Decrypt => (self.ciphertext, self.plaintext),
        };
        let mut iv = self.iv;
        let mut actual = vec![0u8; input.len()];
        match aes_ige_transform(self.key, &mut iv, input, &mut actual, direction) {
            Ok(()) => Outcome::compare(expected, &actual),
            Err(e) => Outcome::Failed(e),
        }
    }
}
