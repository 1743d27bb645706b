#![allow(dead_code)]

use ige::crypto::{
    aes::{oracle::BlockOracle, Block, IgeIv, Variant, IGE_IV_SIZE},
    Error,
};
use std::cell::RefCell;

pub struct KnownAnswer {
    pub name: &'static str,
    pub key: Vec<u8>,
    pub iv: IgeIv,
    pub plaintext: Vec<u8>,
    pub ciphertext: Vec<u8>,
}

pub fn decode_iv(iv: &str) -> IgeIv {
    let mut decoded = [0u8; IGE_IV_SIZE];
    hex::decode_to_slice(iv, &mut decoded).expect("invalid IV");
    decoded
}

pub fn known_answers() -> Vec<KnownAnswer> {
    vec![
        KnownAnswer {
            name: "openssl zero plaintext",
            key: hex::decode("000102030405060708090a0b0c0d0e0f").expect("invalid key"),
            iv: decode_iv("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f"),
            plaintext: vec![0u8; 32],
            ciphertext: hex::decode(
                "1a8519a6557be652e9da8e43da4ef4453cf456b4ca488aa383c79c98b34797cb",
            )
            .expect("invalid ciphertext"),
        },
        KnownAnswer {
            name: "openssl text",
            key: b"This is an imple".to_vec(),
            iv: *b"mentation of IGE mode for OpenSS",
            plaintext: hex::decode(
                "99706487a1cde613bc6de0b6f24b1c7aa448c8b9c3403e3467a8cad89340f53b",
            )
            .expect("invalid plaintext"),
            ciphertext: b"L. Let's hope Ben got it right!\n".to_vec(),
        },
        KnownAnswer {
            name: "aes256",
            key: b"Or was it 'open quinoa' instead?".to_vec(),
            iv: *b"Infinite Garble Extension mode!\n",
            plaintext: b"Greetings, Rustaceans!!!!!!!!!!!".to_vec(),
            ciphertext: hex::decode(
                "a2479f78df85ddf8045f191f2c635e69a3ef34fde5a81d239fc61220913f1317",
            )
            .expect("invalid ciphertext"),
        },
    ]
}

/// Deterministic test data of `size` bytes.
pub fn pattern(size: usize, seed: u8) -> Vec<u8> {
    (0..size)
        .map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed))
        .collect()
}

/// Oracle lifecycle events of the current test thread.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct OracleEvents {
    pub opened: usize,
    pub keyed: usize,
    pub blocks: usize,
    pub closed: usize,
}

thread_local! {
    static EVENTS: RefCell<OracleEvents> = RefCell::new(OracleEvents::default());
}

pub fn take_events() -> OracleEvents {
    EVENTS.with(|events| events.take())
}

fn record(update: impl FnOnce(&mut OracleEvents)) {
    EVENTS.with(|events| update(&mut events.borrow_mut()));
}

pub const FAIL_NEVER: u8 = 0;
pub const FAIL_OPEN: u8 = 1;
pub const FAIL_SET_KEY: u8 = 2;
/// Fail on the second block.
pub const FAIL_BLOCK: u8 = 3;

/// Identity cipher that records its lifecycle and fails at the stage selected by `FAILURE`.
pub struct TracingOracle<const FAILURE: u8> {
    blocks: RefCell<usize>,
}

impl<const FAILURE: u8> TracingOracle<FAILURE> {
    fn block(&self, _block: &mut Block, error: Error) -> Result<(), Error> {
        record(|events| events.blocks += 1);
        let mut blocks = self.blocks.borrow_mut();
        *blocks += 1;
        if FAILURE == FAIL_BLOCK && *blocks == 2 {
            return Err(error);
        }
        Ok(())
    }
}

impl<const FAILURE: u8> BlockOracle for TracingOracle<FAILURE> {
    fn open(_variant: Variant) -> Result<Self, Error> {
        if FAILURE == FAIL_OPEN {
            return Err(Error::Setup);
        }
        record(|events| events.opened += 1);
        Ok(TracingOracle {
            blocks: RefCell::new(0),
        })
    }

    fn set_key(&mut self, _key: &[u8]) -> Result<(), Error> {
        if FAILURE == FAIL_SET_KEY {
            return Err(Error::Setup);
        }
        record(|events| events.keyed += 1);
        Ok(())
    }

    fn encrypt_block(&self, block: &mut Block) -> Result<(), Error> {
        self.block(block, Error::Encrypt)
    }

    fn decrypt_block(&self, block: &mut Block) -> Result<(), Error> {
        self.block(block, Error::Decrypt)
    }
}

impl<const FAILURE: u8> Drop for TracingOracle<FAILURE> {
    fn drop(&mut self) {
        record(|events| events.closed += 1);
    }
}
