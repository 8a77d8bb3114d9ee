//! Forwarder document: the inputs and outputs handed to the resolver.
//!
//! # Example YAML
//!
//! ```yaml
//! inputs:
//!   - name: audit-logs
//!     type: audit
//!     audit: {}
//! outputs:
//!   - name: remote-es
//!     tls:
//!       ca:
//!         key: ca-bundle.crt
//!         configMap:
//!           name: es-ca
//! ```

use serde::{Deserialize, Serialize};

use crate::input::InputSpec;
use crate::tls::OutputTlsSpec;

/// An output sink. Fields other than its name and TLS settings belong to
/// the rendering layer and are ignored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls: Option<OutputTlsSpec>,
}

impl OutputSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tls: None,
        }
    }

    pub fn with_tls(mut self, tls: OutputTlsSpec) -> Self {
        self.tls = Some(tls);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForwarderSpec {
    #[serde(default)]
    pub inputs: Vec<InputSpec>,
    #[serde(default)]
    pub outputs: Vec<OutputSpec>,
}
