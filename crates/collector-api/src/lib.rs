//! Forwarder specification types for the collector config resolver.
//!
//! This crate holds the declarative objects the resolver consumes: inputs,
//! outputs, TLS references and the deployment-wide TLS profile. It also
//! provides `SpecStore` for loading them from YAML, JSON or TOML files.

pub mod error;
pub mod forwarder;
pub mod input;
pub mod loader;
pub mod profile;
pub mod selection;
pub mod tls;

pub use error::{Error, Result};
pub use forwarder::{ForwarderSpec, OutputSpec};
pub use input::{
    ApplicationSpec, AuditSource, AuditSpec, ContainerInputTuningSpec, InfrastructureSource,
    InfrastructureSpec, InputSpec, InputType, LimitSpec, ReceiverSpec, ReceiverType,
};
pub use loader::SpecStore;
pub use profile::TlsProfile;
pub use selection::SourceSelection;
pub use tls::{ConfigMapOrSecretKey, LocalObjectReference, OutputTlsSpec, SecretKey, TlsSpec};
