//! Secret value lookup

use std::collections::HashMap;

use collector_api::SecretKey;

/// Resolves a secret reference to its string value.
pub trait SecretLookup: Send + Sync {
    /// The value at `reference`, or `""` when unset or unresolvable.
    fn as_string(&self, reference: Option<&SecretKey>) -> String;
}

/// In-memory secrets keyed by secret name, then data key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Secrets {
    data: HashMap<String, HashMap<String, Vec<u8>>>,
}

impl Secrets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace one data key of a secret.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<Vec<u8>>,
    ) {
        self.data
            .entry(name.into())
            .or_default()
            .insert(key.into(), value.into());
    }

    pub fn with(
        mut self,
        name: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<Vec<u8>>,
    ) -> Self {
        self.insert(name, key, value);
        self
    }

    /// Raw bytes at `name`/`key`.
    pub fn get(&self, name: &str, key: &str) -> Option<&[u8]> {
        self.data
            .get(name)
            .and_then(|secret| secret.get(key))
            .map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.data.contains_key(name)
    }
}

impl SecretLookup for Secrets {
    fn as_string(&self, reference: Option<&SecretKey>) -> String {
        let Some(reference) = reference else {
            return String::new();
        };
        let Some(name) = reference.secret_name() else {
            return String::new();
        };

        match self.get(name, &reference.key) {
            Some(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            None => {
                tracing::debug!(secret = name, key = %reference.key, "secret key not found");
                String::new()
            }
        }
    }
}
