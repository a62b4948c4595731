use std::fmt;

use crate::constants::{ENV_ENCRYPTION_KEY, ENV_PUBLIC_KEY, ENV_SECRET_KEY};

/// The three credentials a Korapay client needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialKind {
    Public,
    Secret,
    Encryption,
}

impl CredentialKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Secret => "secret",
            Self::Encryption => "encryption",
        }
    }

    /// Environment variable consulted when no explicit value is supplied.
    pub const fn env_var(self) -> &'static str {
        match self {
            Self::Public => ENV_PUBLIC_KEY,
            Self::Secret => ENV_SECRET_KEY,
            Self::Encryption => ENV_ENCRYPTION_KEY,
        }
    }
}

impl fmt::Display for CredentialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully resolved client credentials. Immutable once built.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    public_key: String,
    secret_key: String,
    encryption_key: String,
}

impl Credentials {
    pub fn new(
        public_key: impl Into<String>,
        secret_key: impl Into<String>,
        encryption_key: impl Into<String>,
    ) -> Self {
        Self {
            public_key: public_key.into(),
            secret_key: secret_key.into(),
            encryption_key: encryption_key.into(),
        }
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    pub fn encryption_key(&self) -> &str {
        &self.encryption_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("secret_key", &"[REDACTED]")
            .field("encryption_key", &"[REDACTED]")
            .finish()
    }
}
