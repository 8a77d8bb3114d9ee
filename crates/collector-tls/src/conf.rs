//! Resolved TLS configuration of one sink

use collector_api::{OutputTlsSpec, TlsProfile};

use crate::paths::{CollectorPaths, MountPaths, configmap_or_secret_path, secret_path};
use crate::secrets::SecretLookup;

/// Component namespace every sink stanza lives under.
pub const SINKS_COMPONENT: &str = "sinks";

/// TLS settings of one sink, ready for rendering.
///
/// Empty strings mean "not configured" and are omitted when rendered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TlsConf {
    pub component: String,
    pub id: String,
    /// Whether a TLS stanza is emitted at all
    pub needs_enabled: bool,
    pub insecure_skip_verify: bool,
    pub tls_min_version: String,
    pub cipher_suites: String,
    pub ca_file_path: String,
    pub cert_path: String,
    pub key_path: String,
    pub pass_phrase: String,
}

impl TlsConf {
    /// Resolve with the collector's standard mount paths.
    pub fn new(
        id: impl Into<String>,
        spec: Option<&OutputTlsSpec>,
        secrets: &(impl SecretLookup + ?Sized),
        profile: &TlsProfile,
    ) -> Self {
        Self::resolve(id, spec, secrets, &CollectorPaths::default(), profile)
    }

    /// Resolve the TLS configuration of sink `id`.
    ///
    /// CA, certificate, key and passphrase come only from `spec`. Minimum
    /// version and ciphers come from `profile` when it sets them, replacing
    /// anything else. A present `spec` enables the stanza even when none of
    /// its fields resolve.
    pub fn resolve(
        id: impl Into<String>,
        spec: Option<&OutputTlsSpec>,
        secrets: &(impl SecretLookup + ?Sized),
        paths: &(impl MountPaths + ?Sized),
        profile: &TlsProfile,
    ) -> Self {
        let mut conf = Self {
            component: SINKS_COMPONENT.to_string(),
            id: id.into(),
            ..Self::default()
        };

        if let Some(spec) = spec {
            conf.ca_file_path = configmap_or_secret_path(spec.tls.ca.as_ref(), paths);
            conf.cert_path = configmap_or_secret_path(spec.tls.certificate.as_ref(), paths);
            conf.key_path = secret_path(spec.tls.key.as_ref(), paths);
            conf.pass_phrase = secrets.as_string(spec.tls.key_passphrase.as_ref());
            conf.insecure_skip_verify = spec.insecure_skip_verify;
        }

        conf.apply_profile(profile);

        conf.needs_enabled =
            !conf.cipher_suites.is_empty() || !conf.tls_min_version.is_empty() || spec.is_some();

        tracing::debug!(
            sink = %conf.id,
            needs_enabled = conf.needs_enabled,
            has_spec = spec.is_some(),
            "resolved sink tls"
        );
        conf
    }

    fn apply_profile(&mut self, profile: &TlsProfile) {
        if let Some(version) = &profile.min_tls_version {
            self.tls_min_version = version.clone();
        }
        if let Some(ciphers) = &profile.ciphers {
            self.cipher_suites = ciphers.clone();
        }
    }

    /// True when both halves of the client key pair resolved.
    pub fn has_key_pair(&self) -> bool {
        !self.key_path.is_empty() && !self.cert_path.is_empty()
    }
}
