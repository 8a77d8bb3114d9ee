//! Aggregate queries over a forwarder's inputs

use std::collections::HashSet;
use std::ops::Deref;

use collector_api::{AuditSource, InfrastructureSource, InputSpec, InputType, TlsSpec};

use crate::tls_refs::{configmaps_for_tls, secrets_for_tls};

/// The inputs of one forwarder.
///
/// Order is irrelevant to every query. Absent sub-specs never match and
/// never fail.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inputs(Vec<InputSpec>);

impl Inputs {
    pub fn new(inputs: Vec<InputSpec>) -> Self {
        Self(inputs)
    }

    /// Unique, unordered configmap names needed by receiver TLS material.
    pub fn configmap_names(&self) -> HashSet<String> {
        let names: HashSet<String> = self
            .receiver_tls()
            .flat_map(configmaps_for_tls)
            .collect();
        tracing::trace!(count = names.len(), "collected receiver configmap names");
        names
    }

    /// Unique, unordered secret names needed by receiver TLS material.
    pub fn secret_names(&self) -> HashSet<String> {
        let names: HashSet<String> = self.receiver_tls().flat_map(secrets_for_tls).collect();
        tracing::trace!(count = names.len(), "collected receiver secret names");
        names
    }

    /// True if any infrastructure input collects the node journal.
    pub fn has_journal_source(&self) -> bool {
        self.has_infrastructure_source(InfrastructureSource::Node)
    }

    /// True if any input collects container logs.
    ///
    /// Any application input counts, whether or not its sub-spec is set.
    pub fn has_container_source(&self) -> bool {
        self.0
            .iter()
            .any(|input| input.input_type == InputType::Application)
            || self.has_infrastructure_source(InfrastructureSource::Container)
    }

    pub fn has_any_audit_source(&self) -> bool {
        self.0.iter().any(|input| input.as_audit().is_some())
    }

    /// True if any audit input collects `source`, explicitly or implicitly.
    pub fn has_audit_source(&self, source: AuditSource) -> bool {
        self.0
            .iter()
            .filter_map(InputSpec::as_audit)
            .any(|audit| audit.sources.includes(&source))
    }

    pub fn has_receiver_source(&self) -> bool {
        self.0.iter().any(|input| input.as_receiver().is_some())
    }

    fn has_infrastructure_source(&self, source: InfrastructureSource) -> bool {
        self.0
            .iter()
            .filter_map(InputSpec::as_infrastructure)
            .any(|infra| infra.sources.includes(&source))
    }

    fn receiver_tls(&self) -> impl Iterator<Item = &TlsSpec> {
        // Receiver TLS is read regardless of the declared input type.
        self.0
            .iter()
            .filter_map(|input| input.receiver.as_ref())
            .filter_map(|receiver| receiver.tls.as_ref())
    }
}

impl From<Vec<InputSpec>> for Inputs {
    fn from(inputs: Vec<InputSpec>) -> Self {
        Self::new(inputs)
    }
}

impl FromIterator<InputSpec> for Inputs {
    fn from_iter<I: IntoIterator<Item = InputSpec>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Deref for Inputs {
    type Target = [InputSpec];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
