//! Shared fixtures for `korapay-infra` integration tests.

#![allow(dead_code)]

use std::net::TcpListener;
use std::sync::Once;

use aes_gcm::aead::consts::U16;
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::aes::Aes256;
use aes_gcm::AesGcm;
use korapay_infra::{ClientConfig, CredentialResolver, KorapayClientBuilder};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

pub const PUBLIC_KEY: &str = "pk_test_infra";
pub const SECRET_KEY: &str = "sk_test_infra";
pub const ENCRYPTION_KEY: &str = "abcdefghijklmnopqrstuvwxyz012345";

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once; `RUST_LOG` controls the level.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Builder with fixed keys pointed at `base_url`; the environment is never
/// consulted.
pub fn builder(base_url: &str) -> KorapayClientBuilder {
    init_tracing();
    KorapayClientBuilder::new()
        .public_key(PUBLIC_KEY)
        .secret_key(SECRET_KEY)
        .encryption_key(ENCRYPTION_KEY)
        .resolver(CredentialResolver::with_lookup(|_| None))
        .config(ClientConfig::default().with_base_url(base_url))
}

pub fn bearer(key: &str) -> String {
    format!("Bearer {key}")
}

/// Origin on which nothing is listening.
pub fn closed_origin() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

/// Open a `nonce:ciphertext:tag` envelope sealed with [`ENCRYPTION_KEY`].
pub fn decrypt_envelope(envelope: &str) -> Value {
    let parts: Vec<&str> = envelope.split(':').collect();
    assert_eq!(parts.len(), 3, "envelope should have three segments");
    let nonce = hex::decode(parts[0]).expect("nonce hex");
    let mut sealed = hex::decode(parts[1]).expect("ciphertext hex");
    sealed.extend(hex::decode(parts[2]).expect("tag hex"));

    let cipher = AesGcm::<Aes256, U16>::new_from_slice(ENCRYPTION_KEY.as_bytes()).expect("key");
    let plain =
        cipher.decrypt(GenericArray::from_slice(&nonce), sealed.as_ref()).expect("decrypt");
    serde_json::from_slice(&plain).expect("payload json")
}
