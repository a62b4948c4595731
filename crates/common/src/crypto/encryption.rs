//! AES-256-GCM payload envelopes.
//!
//! Card charges are not sent in the clear: the JSON payload is sealed with
//! AES-256-GCM under the merchant's encryption key and shipped as a single
//! colon-delimited hex string:
//!
//! ```text
//! <hex nonce (16 bytes)>:<hex ciphertext>:<hex auth tag (16 bytes)>
//! ```
//!
//! The remote side expects a 16-byte nonce rather than the 12-byte default,
//! so the cipher is instantiated as `AesGcm<Aes256, U16>`. A fresh nonce is
//! drawn from the OS RNG for every envelope.
//!
//! ## Usage
//!
//! ```rust
//! use korapay_common::crypto::PayloadCipher;
//! use serde_json::json;
//!
//! let cipher = PayloadCipher::new("0123456789abcdef0123456789abcdef")?;
//! let envelope = cipher.encrypt_json(&json!({"reference": "ref-1"}))?;
//! assert_eq!(envelope.split(':').count(), 3);
//! # Ok::<(), korapay_common::crypto::CryptoError>(())
//! ```

use std::fmt;

use aes_gcm::aead::consts::U16;
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::aes::Aes256;
use aes_gcm::AesGcm;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::Serialize;
use thiserror::Error;

/// Required key length in bytes (AES-256).
pub const KEY_LENGTH: usize = 32;
/// Nonce length in bytes expected by the remote API.
pub const NONCE_LENGTH: usize = 16;
/// GCM authentication tag length in bytes.
pub const TAG_LENGTH: usize = 16;

type Aes256Gcm16 = AesGcm<Aes256, U16>;

/// Errors raised while sealing a payload
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("An encryption key is required")]
    MissingKey,

    #[error("Invalid encryption key: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("Failed to serialize payload: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Encryption failed")]
    Encryption,
}

/// A sealed payload: nonce, ciphertext and authentication tag.
#[derive(Clone, PartialEq, Eq)]
pub struct Envelope {
    pub nonce: [u8; NONCE_LENGTH],
    pub ciphertext: Vec<u8>,
    pub tag: [u8; TAG_LENGTH],
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            hex::encode(self.nonce),
            hex::encode(&self.ciphertext),
            hex::encode(self.tag)
        )
    }
}

impl fmt::Debug for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Envelope")
            .field("nonce", &hex::encode(self.nonce))
            .field("ciphertext_len", &self.ciphertext.len())
            .finish()
    }
}

/// AES-256-GCM cipher bound to one merchant encryption key.
#[derive(Clone)]
pub struct PayloadCipher {
    cipher: Aes256Gcm16,
}

impl fmt::Debug for PayloadCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PayloadCipher").field("key", &"[REDACTED]").finish()
    }
}

impl PayloadCipher {
    /// Create a cipher from the merchant encryption key.
    ///
    /// The key is used as its UTF-8 bytes and must be exactly
    /// [`KEY_LENGTH`] bytes long.
    pub fn new(key: &str) -> Result<Self, CryptoError> {
        if key.is_empty() {
            return Err(CryptoError::MissingKey);
        }

        let cipher = Aes256Gcm16::new_from_slice(key.as_bytes()).map_err(|_| {
            CryptoError::InvalidKeyLength { expected: KEY_LENGTH, actual: key.len() }
        })?;

        Ok(Self { cipher })
    }

    /// Seal raw bytes under a freshly generated nonce.
    pub fn seal(&self, plaintext: &[u8]) -> Result<Envelope, CryptoError> {
        let nonce = generate_nonce();
        let mut sealed = self
            .cipher
            .encrypt(GenericArray::from_slice(&nonce), plaintext)
            .map_err(|_| CryptoError::Encryption)?;

        let tag_start = sealed.len().checked_sub(TAG_LENGTH).ok_or(CryptoError::Encryption)?;
        let tag_bytes = sealed.split_off(tag_start);
        let mut tag = [0u8; TAG_LENGTH];
        tag.copy_from_slice(&tag_bytes);

        Ok(Envelope { nonce, ciphertext: sealed, tag })
    }

    /// Serialize `payload` to JSON and seal it, returning the hex envelope.
    pub fn encrypt_json<T>(&self, payload: &T) -> Result<String, CryptoError>
    where
        T: Serialize + ?Sized,
    {
        let plaintext = serde_json::to_vec(payload)?;
        Ok(self.seal(&plaintext)?.to_string())
    }
}

/// One-shot helper: build a cipher for `key` and encrypt `payload`.
pub fn encrypt_payload<T>(key: &str, payload: &T) -> Result<String, CryptoError>
where
    T: Serialize + ?Sized,
{
    PayloadCipher::new(key)?.encrypt_json(payload)
}

fn generate_nonce() -> [u8; NONCE_LENGTH] {
    let mut nonce = [0u8; NONCE_LENGTH];
    OsRng.fill_bytes(&mut nonce);
    nonce
}
