//! Per-output resolution

use std::sync::LazyLock;

use collector_api::{OutputSpec, TlsProfile};
use regex::Regex;

use crate::conf::TlsConf;
use crate::secrets::SecretLookup;

static INVALID_ID_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9_]").expect("Invalid sink id regex"));

/// Component id of the sink generated for output `name`.
pub fn sink_id(name: &str) -> String {
    let lowered = name.to_lowercase();
    format!("output_{}", INVALID_ID_CHARS.replace_all(&lowered, "_"))
}

/// Resolve the TLS configuration of every output.
pub fn resolve_outputs(
    outputs: &[OutputSpec],
    secrets: &(impl SecretLookup + ?Sized),
    profile: &TlsProfile,
) -> Vec<TlsConf> {
    outputs
        .iter()
        .map(|output| TlsConf::new(sink_id(&output.name), output.tls.as_ref(), secrets, profile))
        .collect()
}
