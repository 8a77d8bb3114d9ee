//! Input specifications: the sources a forwarder collects log records from.
//!
//! # Example YAML
//!
//! ```yaml
//! - name: app-logs
//!   type: application
//!   application:
//!     tuning:
//!       rateLimitPerContainer:
//!         maxRecordsPerSecond: 100
//! - name: node-logs
//!   type: infrastructure
//!   infrastructure:
//!     sources: [node]
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::selection::SourceSelection;
use crate::tls::TlsSpec;

/// The category of an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputType {
    Application,
    Infrastructure,
    Audit,
    Receiver,
}

impl FromStr for InputType {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "application" => Ok(InputType::Application),
            "infrastructure" => Ok(InputType::Infrastructure),
            "audit" => Ok(InputType::Audit),
            "receiver" => Ok(InputType::Receiver),
            _ => Err(Error::InvalidInputType {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputType::Application => write!(f, "application"),
            InputType::Infrastructure => write!(f, "infrastructure"),
            InputType::Audit => write!(f, "audit"),
            InputType::Receiver => write!(f, "receiver"),
        }
    }
}

/// One logical input source.
///
/// Only the sub-spec matching `input_type` is meaningful; the others are
/// ignored even when populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub input_type: InputType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<ApplicationSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infrastructure: Option<InfrastructureSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit: Option<AuditSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver: Option<ReceiverSpec>,
}

impl InputSpec {
    /// An input of the given type with no sub-spec populated.
    pub fn new(name: impl Into<String>, input_type: InputType) -> Self {
        Self {
            name: name.into(),
            input_type,
            application: None,
            infrastructure: None,
            audit: None,
            receiver: None,
        }
    }

    pub fn application(name: impl Into<String>, spec: ApplicationSpec) -> Self {
        Self {
            application: Some(spec),
            ..Self::new(name, InputType::Application)
        }
    }

    pub fn infrastructure(name: impl Into<String>, spec: InfrastructureSpec) -> Self {
        Self {
            infrastructure: Some(spec),
            ..Self::new(name, InputType::Infrastructure)
        }
    }

    pub fn audit(name: impl Into<String>, spec: AuditSpec) -> Self {
        Self {
            audit: Some(spec),
            ..Self::new(name, InputType::Audit)
        }
    }

    pub fn receiver(name: impl Into<String>, spec: ReceiverSpec) -> Self {
        Self {
            receiver: Some(spec),
            ..Self::new(name, InputType::Receiver)
        }
    }

    /// The infrastructure sub-spec, if this is an infrastructure input.
    pub fn as_infrastructure(&self) -> Option<&InfrastructureSpec> {
        match self.input_type {
            InputType::Infrastructure => self.infrastructure.as_ref(),
            _ => None,
        }
    }

    /// The audit sub-spec, if this is an audit input.
    pub fn as_audit(&self) -> Option<&AuditSpec> {
        match self.input_type {
            InputType::Audit => self.audit.as_ref(),
            _ => None,
        }
    }

    /// The receiver sub-spec, if this is a receiver input.
    pub fn as_receiver(&self) -> Option<&ReceiverSpec> {
        match self.input_type {
            InputType::Receiver => self.receiver.as_ref(),
            _ => None,
        }
    }
}

/// Container logs from user workloads.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuning: Option<ContainerInputTuningSpec>,
}

/// Per-container tuning for application inputs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerInputTuningSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_limit_per_container: Option<LimitSpec>,
}

/// A rate limit. An absent limit means no limiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitSpec {
    pub max_records_per_second: i64,
}

/// Node-level infrastructure sub-sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InfrastructureSource {
    /// The node journal
    Node,
    /// Platform container logs
    Container,
}

impl FromStr for InfrastructureSource {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "node" => Ok(InfrastructureSource::Node),
            "container" => Ok(InfrastructureSource::Container),
            _ => Err(Error::InvalidSource {
                kind: "infrastructure",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InfrastructureSpec {
    #[serde(default)]
    pub sources: SourceSelection<InfrastructureSource>,
}

/// Audit log sub-sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AuditSource {
    #[serde(rename = "auditd")]
    Auditd,
    #[serde(rename = "kubeAPI")]
    KubeApi,
    #[serde(rename = "openshiftAPI")]
    OpenshiftApi,
    #[serde(rename = "ovn")]
    Ovn,
}

impl FromStr for AuditSource {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "auditd" => Ok(AuditSource::Auditd),
            "kubeAPI" => Ok(AuditSource::KubeApi),
            "openshiftAPI" => Ok(AuditSource::OpenshiftApi),
            "ovn" => Ok(AuditSource::Ovn),
            _ => Err(Error::InvalidSource {
                kind: "audit",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AuditSpec {
    #[serde(default)]
    pub sources: SourceSelection<AuditSource>,
}

/// Protocol a receiver input listens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReceiverType {
    #[default]
    Http,
    Syslog,
}

/// A push-based input. Presence alone marks the forwarder as receiving.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiverSpec {
    #[serde(default, rename = "type")]
    pub receiver_type: ReceiverType,
    #[serde(default)]
    pub port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls: Option<TlsSpec>,
}
