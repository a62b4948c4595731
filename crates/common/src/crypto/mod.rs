//! Payload encryption for sensitive request bodies.

pub mod encryption;

pub use encryption::{
    encrypt_payload, CryptoError, Envelope, PayloadCipher, KEY_LENGTH, NONCE_LENGTH, TAG_LENGTH,
};
