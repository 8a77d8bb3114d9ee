//! Deserialization of the declarative shapes callers hand to the resolver

use collector_api::{
    AuditSource, AuditSpec, ConfigMapOrSecretKey, InfrastructureSource, InfrastructureSpec,
    InputSpec, ReceiverType, SecretKey, SourceSelection,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("sources: []", true)]
#[case("{}", true)]
#[case("sources: [node]", false)]
fn test_infrastructure_selection(#[case] yaml: &str, #[case] implicit_all: bool) {
    let spec: InfrastructureSpec = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(spec.sources.is_implicit_all(), implicit_all);
    assert!(spec.sources.includes(&InfrastructureSource::Node));
}

#[rstest]
#[case("auditd", AuditSource::Auditd)]
#[case("kubeAPI", AuditSource::KubeApi)]
#[case("openshiftAPI", AuditSource::OpenshiftApi)]
#[case("ovn", AuditSource::Ovn)]
fn test_audit_source_names(#[case] name: &str, #[case] expected: AuditSource) {
    let spec: AuditSpec = serde_yaml::from_str(&format!("sources: [{name}]")).unwrap();
    assert_eq!(
        spec.sources,
        SourceSelection::Only([expected].into_iter().collect())
    );
}

#[test]
fn test_receiver_with_tls() {
    let yaml = r#"
name: http-in
type: receiver
receiver:
  type: http
  port: 8443
  tls:
    ca:
      key: ca.crt
      configMap:
        name: receiver-ca
    certificate:
      key: tls.crt
      secret:
        name: receiver-tls
    key:
      key: tls.key
      secret:
        name: receiver-tls
    keyPassphrase:
      key: passphrase
      secret:
        name: receiver-pass
"#;
    let input: InputSpec = serde_yaml::from_str(yaml).unwrap();
    let receiver = input.as_receiver().unwrap();
    assert_eq!(receiver.receiver_type, ReceiverType::Http);

    let tls = receiver.tls.as_ref().unwrap();
    assert_eq!(
        tls.ca,
        Some(ConfigMapOrSecretKey::config_map("receiver-ca", "ca.crt"))
    );
    assert_eq!(
        tls.certificate,
        Some(ConfigMapOrSecretKey::secret("receiver-tls", "tls.crt"))
    );
    assert_eq!(tls.key, Some(SecretKey::new("receiver-tls", "tls.key")));
    assert_eq!(
        tls.key_passphrase.as_ref().and_then(SecretKey::secret_name),
        Some("receiver-pass")
    );
}

#[test]
fn test_serialize_roundtrip_keeps_reference_shape() {
    let input = InputSpec::infrastructure(
        "infra",
        InfrastructureSpec {
            sources: [InfrastructureSource::Container].into_iter().collect(),
        },
    );

    let yaml = serde_yaml::to_string(&input).unwrap();
    assert!(yaml.contains("type: infrastructure"));
    assert!(yaml.contains("- container"));

    let parsed: InputSpec = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed, input);
}
