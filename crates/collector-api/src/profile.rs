//! Deployment-wide TLS security profile.
//!
//! The profile supplies minimum TLS version and cipher suite policy for every
//! sink. It is resolved once by the caller and passed to the resolver.
//!
//! # Example TOML
//!
//! ```toml
//! minTLSVersion = "VersionTLS12"
//! ciphers = "TLS_AES_128_GCM_SHA256,TLS_AES_256_GCM_SHA384"
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Option key carrying the minimum TLS version.
pub const MIN_TLS_VERSION: &str = "minTLSVersion";

/// Option key carrying the comma-separated cipher suites.
pub const CIPHERS: &str = "ciphers";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TlsProfile {
    #[serde(
        default,
        rename = "minTLSVersion",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_tls_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ciphers: Option<String>,
}

impl TlsProfile {
    pub fn new(min_tls_version: impl Into<String>, ciphers: impl Into<String>) -> Self {
        Self {
            min_tls_version: Some(min_tls_version.into()),
            ciphers: Some(ciphers.into()),
        }
    }

    /// Build a profile from an untyped option map.
    ///
    /// Only the [`MIN_TLS_VERSION`] and [`CIPHERS`] keys are read. A key that
    /// is present with an empty value is kept as `Some("")`.
    pub fn from_options(options: &HashMap<String, String>) -> Self {
        Self {
            min_tls_version: options.get(MIN_TLS_VERSION).cloned(),
            ciphers: options.get(CIPHERS).cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_options_reads_known_keys() {
        let options = HashMap::from([
            (MIN_TLS_VERSION.to_string(), "VersionTLS12".to_string()),
            ("unrelated".to_string(), "x".to_string()),
        ]);

        let profile = TlsProfile::from_options(&options);
        assert_eq!(profile.min_tls_version.as_deref(), Some("VersionTLS12"));
        assert_eq!(profile.ciphers, None);
    }

    #[test]
    fn test_default_profile_is_empty() {
        let profile = TlsProfile::default();
        assert!(profile.min_tls_version.is_none());
        assert!(profile.ciphers.is_none());
    }

    #[test]
    fn test_parse_profile_from_toml() {
        let profile: TlsProfile = toml::from_str(r#"minTLSVersion = "VersionTLS13""#).unwrap();
        assert_eq!(profile.min_tls_version.as_deref(), Some("VersionTLS13"));
        assert!(profile.ciphers.is_none());
    }
}
