//! Mount paths of referenced TLS material

use collector_api::{ConfigMapOrSecretKey, SecretKey};

/// Directory secrets are mounted under inside the collector.
pub const SECRETS_DIR: &str = "/var/run/ocp-collector/secrets";

/// Directory configmaps are mounted under inside the collector.
pub const CONFIGMAPS_DIR: &str = "/var/run/ocp-collector/config";

/// Names the file a resource key is mounted at.
///
/// Distinct `(name, key)` pairs must map to distinct paths.
pub trait MountPaths: Send + Sync {
    fn secret_path(&self, name: &str, key: &str) -> String;

    fn configmap_path(&self, name: &str, key: &str) -> String;
}

/// Paths under the collector's standard mount roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorPaths {
    secrets_dir: String,
    configmaps_dir: String,
}

impl CollectorPaths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom mount roots.
    pub fn with_roots(secrets_dir: impl Into<String>, configmaps_dir: impl Into<String>) -> Self {
        Self {
            secrets_dir: secrets_dir.into(),
            configmaps_dir: configmaps_dir.into(),
        }
    }
}

impl Default for CollectorPaths {
    fn default() -> Self {
        Self::with_roots(SECRETS_DIR, CONFIGMAPS_DIR)
    }
}

impl MountPaths for CollectorPaths {
    fn secret_path(&self, name: &str, key: &str) -> String {
        format!("{}/{}/{}", self.secrets_dir.trim_end_matches('/'), name, key)
    }

    fn configmap_path(&self, name: &str, key: &str) -> String {
        format!("{}/{}/{}", self.configmaps_dir.trim_end_matches('/'), name, key)
    }
}

/// Path of a configmap-or-secret reference, or `""` when nothing is named.
pub fn configmap_or_secret_path(
    reference: Option<&ConfigMapOrSecretKey>,
    paths: &(impl MountPaths + ?Sized),
) -> String {
    match reference {
        Some(ConfigMapOrSecretKey::Secret { name, key }) => paths.secret_path(name, key),
        Some(ConfigMapOrSecretKey::ConfigMap { name, key }) => paths.configmap_path(name, key),
        Some(ConfigMapOrSecretKey::Unset) | None => String::new(),
    }
}

/// Path of a secret-only reference, or `""` when no secret is named.
pub fn secret_path(reference: Option<&SecretKey>, paths: &(impl MountPaths + ?Sized)) -> String {
    match reference.and_then(|r| r.secret_name().map(|name| (name, r.key.as_str()))) {
        Some((name, key)) => paths.secret_path(name, key),
        None => String::new(),
    }
}
