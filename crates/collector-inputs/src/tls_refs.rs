//! Resource names referenced by TLS material

use collector_api::{ConfigMapOrSecretKey, TlsSpec};

/// Configmap names referenced by the CA and certificate of `tls`.
///
/// Keys and passphrases are secret-only and never contribute.
pub fn configmaps_for_tls(tls: &TlsSpec) -> Vec<String> {
    [&tls.ca, &tls.certificate]
        .into_iter()
        .flatten()
        .filter_map(ConfigMapOrSecretKey::config_map_name)
        .map(str::to_string)
        .collect()
}

/// Secret names referenced by any field of `tls`.
pub fn secrets_for_tls(tls: &TlsSpec) -> Vec<String> {
    let from_either = [&tls.ca, &tls.certificate]
        .into_iter()
        .flatten()
        .filter_map(ConfigMapOrSecretKey::secret_name);
    let from_secret_only = [&tls.key, &tls.key_passphrase]
        .into_iter()
        .flatten()
        .filter_map(|key| key.secret_name());

    from_either
        .chain(from_secret_only)
        .map(str::to_string)
        .collect()
}
