use korapay_core::{AsyncTransport, CredentialResolver, Dispatcher, Transport};
use korapay_domain::{ClientConfig, Result};

use super::{AsyncKorapayClient, KorapayClient};
use crate::http::{BlockingHttpTransport, HttpTransport};

/// Builder shared by both clients.
///
/// Credentials not set explicitly are read through the resolver (the process
/// environment by default). The configuration defaults to
/// [`ClientConfig::default`]; use [`crate::config::load`] to read it from
/// files and the environment.
#[derive(Default)]
pub struct KorapayClientBuilder {
    public_key: Option<String>,
    secret_key: Option<String>,
    encryption_key: Option<String>,
    config: Option<ClientConfig>,
    resolver: Option<CredentialResolver>,
}

impl KorapayClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn public_key(mut self, key: impl Into<String>) -> Self {
        self.public_key = Some(key.into());
        self
    }

    pub fn secret_key(mut self, key: impl Into<String>) -> Self {
        self.secret_key = Some(key.into());
        self
    }

    pub fn encryption_key(mut self, key: impl Into<String>) -> Self {
        self.encryption_key = Some(key.into());
        self
    }

    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Where missing credentials are looked up.
    pub fn resolver(mut self, resolver: CredentialResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Blocking client over the default reqwest transport.
    pub fn build(self) -> Result<KorapayClient> {
        let dispatcher = self.dispatcher()?;
        let transport = BlockingHttpTransport::from_config(dispatcher.config())?;
        Ok(KorapayClient::from_parts(dispatcher, transport))
    }

    /// Async client over the default reqwest transport.
    pub fn build_async(self) -> Result<AsyncKorapayClient> {
        let dispatcher = self.dispatcher()?;
        let transport = HttpTransport::from_config(dispatcher.config())?;
        Ok(AsyncKorapayClient::from_parts(dispatcher, transport))
    }

    /// Blocking client over a caller-supplied transport.
    pub fn build_with<T: Transport>(self, transport: T) -> Result<KorapayClient<T>> {
        Ok(KorapayClient::from_parts(self.dispatcher()?, transport))
    }

    /// Async client over a caller-supplied transport.
    pub fn build_async_with<T: AsyncTransport>(self, transport: T) -> Result<AsyncKorapayClient<T>> {
        Ok(AsyncKorapayClient::from_parts(self.dispatcher()?, transport))
    }

    fn dispatcher(self) -> Result<Dispatcher> {
        let resolver = self.resolver.unwrap_or_default();
        let credentials = resolver.resolve(
            self.public_key.as_deref(),
            self.secret_key.as_deref(),
            self.encryption_key.as_deref(),
        )?;
        Ok(Dispatcher::new(credentials, self.config.unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use korapay_core::KorapayApi;
    use korapay_domain::{CredentialKind, KorapayError};

    use super::*;

    fn empty_env() -> CredentialResolver {
        CredentialResolver::with_lookup(|_| None)
    }

    #[test]
    fn explicit_keys_and_config_are_used() {
        let client = KorapayClientBuilder::new()
            .public_key("pk")
            .secret_key("sk")
            .encryption_key("ek")
            .config(ClientConfig::default().with_base_url("http://local"))
            .resolver(empty_env())
            .build()
            .unwrap();

        assert_eq!(client.credentials().secret_key(), "sk");
        assert_eq!(client.config().base_url, "http://local");
    }

    #[test]
    fn missing_keys_come_from_resolver() {
        let resolver = CredentialResolver::with_lookup(|name| match name {
            "KORAPAY_SECRET_KEY" => Some("sk_env".to_string()),
            "KORAPAY_ENCRYPTION_KEY" => Some("ek_env".to_string()),
            _ => None,
        });
        let client =
            KorapayClientBuilder::new().public_key("pk").resolver(resolver).build().unwrap();

        assert_eq!(client.credentials().secret_key(), "sk_env");
        assert_eq!(client.credentials().encryption_key(), "ek_env");
    }

    #[test]
    fn first_missing_credential_is_reported() {
        let err = KorapayClientBuilder::new()
            .public_key("pk")
            .resolver(empty_env())
            .build_async()
            .unwrap_err();

        assert!(matches!(
            err,
            KorapayError::MissingCredential { credential: CredentialKind::Secret, .. }
        ));
    }
}
