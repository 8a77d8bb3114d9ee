//! TLS material references.
//!
//! Certificates and keys are never inlined in a forwarder spec. They are
//! referenced by resource name and data key, and mounted into the collector
//! by a separate layer.

use serde::{Deserialize, Serialize};

/// Reference to a named resource in the forwarder's namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalObjectReference {
    pub name: String,
}

/// A key in either a configmap or a secret.
///
/// Deserialized from `{ key, secret?: {name}, configMap?: {name} }`. When both
/// resources are populated the secret wins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawConfigMapOrSecretKey", into = "RawConfigMapOrSecretKey")]
pub enum ConfigMapOrSecretKey {
    Secret { name: String, key: String },
    ConfigMap { name: String, key: String },
    /// Neither resource was named.
    Unset,
}

impl ConfigMapOrSecretKey {
    pub fn secret(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self::Secret {
            name: name.into(),
            key: key.into(),
        }
    }

    pub fn config_map(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self::ConfigMap {
            name: name.into(),
            key: key.into(),
        }
    }

    /// Name of the referenced secret, if this points into a secret.
    pub fn secret_name(&self) -> Option<&str> {
        match self {
            Self::Secret { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Name of the referenced configmap, if this points into a configmap.
    pub fn config_map_name(&self) -> Option<&str> {
        match self {
            Self::ConfigMap { name, .. } => Some(name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfigMapOrSecretKey {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    config_map: Option<LocalObjectReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    secret: Option<LocalObjectReference>,
    #[serde(default)]
    key: String,
}

impl From<RawConfigMapOrSecretKey> for ConfigMapOrSecretKey {
    fn from(raw: RawConfigMapOrSecretKey) -> Self {
        match (raw.secret, raw.config_map) {
            (Some(secret), _) => Self::Secret {
                name: secret.name,
                key: raw.key,
            },
            (None, Some(config_map)) => Self::ConfigMap {
                name: config_map.name,
                key: raw.key,
            },
            (None, None) => Self::Unset,
        }
    }
}

impl From<ConfigMapOrSecretKey> for RawConfigMapOrSecretKey {
    fn from(value: ConfigMapOrSecretKey) -> Self {
        match value {
            ConfigMapOrSecretKey::Secret { name, key } => Self {
                secret: Some(LocalObjectReference { name }),
                key,
                ..Self::default()
            },
            ConfigMapOrSecretKey::ConfigMap { name, key } => Self {
                config_map: Some(LocalObjectReference { name }),
                key,
                ..Self::default()
            },
            ConfigMapOrSecretKey::Unset => Self::default(),
        }
    }
}

/// A key that may only come from a secret.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SecretKey {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<LocalObjectReference>,
    #[serde(default)]
    pub key: String,
}

impl SecretKey {
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            secret: Some(LocalObjectReference { name: name.into() }),
            key: key.into(),
        }
    }

    pub fn secret_name(&self) -> Option<&str> {
        self.secret.as_ref().map(|s| s.name.as_str())
    }
}

/// TLS material for an input receiver or an output sink.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TlsSpec {
    /// Certificate authority bundle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca: Option<ConfigMapOrSecretKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<ConfigMapOrSecretKey>,
    /// Private key; secret-only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<SecretKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_passphrase: Option<SecretKey>,
}

/// TLS settings of an output sink.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputTlsSpec {
    #[serde(flatten)]
    pub tls: TlsSpec,
    /// Disable certificate and hostname verification
    #[serde(default)]
    pub insecure_skip_verify: bool,
}

impl From<TlsSpec> for OutputTlsSpec {
    fn from(tls: TlsSpec) -> Self {
        Self {
            tls,
            insecure_skip_verify: false,
        }
    }
}
