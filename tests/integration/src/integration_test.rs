//! End-to-end tests over the forwarder fixtures
//!
//! Exercises the flow a generator runs: load forwarder + profile -> classify
//! inputs -> resolve and render sink TLS, compared against golden files.

use collector_api::{AuditSource, ForwarderSpec, SpecStore, TlsProfile};
use collector_inputs::{Inputs, max_records_per_second};
use collector_tls::{Fragment, Secrets, TlsConf, resolve_outputs};
use pretty_assertions::assert_eq;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    // tests/integration -> ../../test-fixtures
    manifest_dir.join("../../test-fixtures")
}

fn load_forwarder(name: &str) -> ForwarderSpec {
    SpecStore::new()
        .load(fixtures_dir().join("forwarders").join(name))
        .unwrap_or_else(|e| panic!("Failed to load forwarder fixture {name}: {e}"))
}

fn load_profile() -> TlsProfile {
    SpecStore::new()
        .load(fixtures_dir().join("profiles/intermediate.toml"))
        .unwrap()
}

fn load_expected(name: &str) -> String {
    let path = fixtures_dir().join("expected").join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read expected output at {}: {}", path.display(), e))
        .replace("\r\n", "\n")
}

fn set(values: &[&str]) -> HashSet<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_full_forwarder_classification() {
    let forwarder = load_forwarder("full.yaml");
    let inputs = Inputs::from(forwarder.inputs);

    assert!(inputs.has_journal_source());
    assert!(inputs.has_container_source());
    assert!(inputs.has_any_audit_source());
    assert!(inputs.has_audit_source(AuditSource::KubeApi));
    assert!(inputs.has_audit_source(AuditSource::OpenshiftApi));
    assert!(!inputs.has_audit_source(AuditSource::Auditd));
    assert!(inputs.has_receiver_source());

    assert_eq!(inputs.configmap_names(), set(&["receiver-ca"]));
    assert_eq!(
        inputs.secret_names(),
        set(&["receiver-tls", "syslog-passphrase"])
    );

    assert_eq!(max_records_per_second(&inputs[0]), (250, true));
    assert_eq!(max_records_per_second(&inputs[1]), (0, false));
}

#[test]
fn test_implicit_sources_forwarder_classification() {
    let forwarder = load_forwarder("implicit-sources.yaml");
    let inputs = Inputs::from(forwarder.inputs);

    assert!(inputs.has_journal_source());
    assert!(inputs.has_container_source());
    assert!(inputs.has_audit_source(AuditSource::Auditd));
    assert!(inputs.has_audit_source(AuditSource::Ovn));
    assert!(!inputs.has_receiver_source());
    assert!(inputs.configmap_names().is_empty());
    assert!(inputs.secret_names().is_empty());
}

#[test]
fn test_full_forwarder_sink_tls_matches_golden() {
    let forwarder = load_forwarder("full.yaml");
    let secrets = Secrets::new().with("es-tls", "passphrase", "changeit");

    let confs = resolve_outputs(&forwarder.outputs, &secrets, &load_profile());

    assert_eq!(confs.len(), 2);
    assert_eq!(confs[0].render(), load_expected("output_remote_es.toml"));

    // The profile alone enables a stanza for an output without TLS.
    assert_eq!(confs[1].id, "output_plain_http");
    assert!(confs[1].needs_enabled);
    assert!(confs[1].ca_file_path.is_empty());
}

#[test]
fn test_partial_key_pair_matches_golden() {
    let forwarder = load_forwarder("implicit-sources.yaml");

    let confs = resolve_outputs(&forwarder.outputs, &Secrets::new(), &load_profile());

    assert_eq!(confs[0].id, "output_loki_central");
    assert!(!confs[0].cert_path.is_empty());
    assert_eq!(confs[0].render(), load_expected("output_loki_central.toml"));
}

#[test]
fn test_without_profile_only_tls_outputs_render() {
    let forwarder = load_forwarder("full.yaml");
    let secrets = Secrets::new();
    let profile = TlsProfile::default();

    let rendered: Vec<String> = forwarder
        .outputs
        .iter()
        .map(|output| {
            TlsConf::new(
                collector_tls::sink_id(&output.name),
                output.tls.as_ref(),
                &secrets,
                &profile,
            )
            .render()
        })
        .collect();

    assert!(rendered[0].starts_with("[sinks.output_remote_es.tls]\n"));
    assert!(!rendered[0].contains("key_pass"));
    assert_eq!(rendered[1], "");
}
