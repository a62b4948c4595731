//! Credential resolution
//!
//! Each credential is taken from the explicit value when one is supplied and
//! non-empty, otherwise from its environment variable. The lookup is
//! injectable so resolution can be tested without touching process state.

use korapay_domain::{CredentialKind, Credentials, KorapayError, Result};
use tracing::debug;

type Lookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Resolves the three client credentials.
pub struct CredentialResolver {
    lookup: Lookup,
}

impl Default for CredentialResolver {
    fn default() -> Self {
        Self::from_env()
    }
}

impl CredentialResolver {
    /// Resolver backed by the process environment.
    pub fn from_env() -> Self {
        Self::with_lookup(|name| std::env::var(name).ok())
    }

    /// Resolver backed by an arbitrary name → value lookup.
    pub fn with_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self { lookup: Box::new(lookup) }
    }

    /// Resolve all three credentials.
    ///
    /// # Errors
    /// Returns [`KorapayError::MissingCredential`] for the first credential
    /// (public, secret, encryption) that has neither an explicit value nor
    /// a non-empty environment variable.
    pub fn resolve(
        &self,
        public_key: Option<&str>,
        secret_key: Option<&str>,
        encryption_key: Option<&str>,
    ) -> Result<Credentials> {
        let public_key = self.resolve_one(CredentialKind::Public, public_key)?;
        let secret_key = self.resolve_one(CredentialKind::Secret, secret_key)?;
        let encryption_key = self.resolve_one(CredentialKind::Encryption, encryption_key)?;
        Ok(Credentials::new(public_key, secret_key, encryption_key))
    }

    fn resolve_one(&self, kind: CredentialKind, explicit: Option<&str>) -> Result<String> {
        if let Some(value) = explicit.filter(|v| !v.is_empty()) {
            return Ok(value.to_string());
        }

        let env_var = kind.env_var();
        match (self.lookup)(env_var).filter(|v| !v.is_empty()) {
            Some(value) => {
                debug!(credential = %kind, env_var, "credential read from environment");
                Ok(value)
            }
            None => Err(KorapayError::MissingCredential { credential: kind, env_var }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn resolver(vars: &[(&str, &str)]) -> CredentialResolver {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        CredentialResolver::with_lookup(move |name| vars.get(name).cloned())
    }

    #[test]
    fn explicit_values_win_over_environment() {
        let resolver = resolver(&[
            ("KORAPAY_PUBLIC_KEY", "pk_env"),
            ("KORAPAY_SECRET_KEY", "sk_env"),
            ("KORAPAY_ENCRYPTION_KEY", "ek_env"),
        ]);

        let creds = resolver.resolve(Some("pk_arg"), Some("sk_arg"), Some("ek_arg")).unwrap();
        assert_eq!(creds.public_key(), "pk_arg");
        assert_eq!(creds.secret_key(), "sk_arg");
        assert_eq!(creds.encryption_key(), "ek_arg");
    }

    #[test]
    fn falls_back_to_environment() {
        let resolver = resolver(&[
            ("KORAPAY_PUBLIC_KEY", "pk_env"),
            ("KORAPAY_SECRET_KEY", "sk_env"),
            ("KORAPAY_ENCRYPTION_KEY", "ek_env"),
        ]);

        let creds = resolver.resolve(None, Some(""), Some("ek_arg")).unwrap();
        assert_eq!(creds.public_key(), "pk_env");
        assert_eq!(creds.secret_key(), "sk_env");
        assert_eq!(creds.encryption_key(), "ek_arg");
    }

    #[test]
    fn reports_first_missing_credential() {
        let resolver = resolver(&[("KORAPAY_PUBLIC_KEY", "pk_env")]);

        let err = resolver.resolve(None, None, None).unwrap_err();
        match err {
            KorapayError::MissingCredential { credential, env_var } => {
                assert_eq!(credential, CredentialKind::Secret);
                assert_eq!(env_var, "KORAPAY_SECRET_KEY");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_environment_value_counts_as_missing() {
        let resolver = resolver(&[
            ("KORAPAY_PUBLIC_KEY", "pk_env"),
            ("KORAPAY_SECRET_KEY", "sk_env"),
            ("KORAPAY_ENCRYPTION_KEY", ""),
        ]);

        let err = resolver.resolve(None, None, None).unwrap_err();
        assert!(matches!(
            err,
            KorapayError::MissingCredential { credential: CredentialKind::Encryption, .. }
        ));
    }
}
