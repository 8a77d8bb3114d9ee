//! Sink TLS resolution for the collector config resolver.
//!
//! Turns an optional output TLS spec plus the deployment-wide
//! [`TlsProfile`](collector_api::TlsProfile) into a [`TlsConf`], and renders
//! that into the agent's `[sinks.<id>.tls]` table.
//!
//! Two collaborators are injected:
//!
//! - [`SecretLookup`] resolves the key passphrase to its value.
//! - [`MountPaths`] names the file each referenced key is mounted at.
//!
//! Nothing here fails. Missing references resolve to empty values, and empty
//! values are left out of the rendered stanza.

pub mod conf;
pub mod logging;
pub mod paths;
pub mod render;
pub mod secrets;
pub mod sink;

pub use conf::{SINKS_COMPONENT, TlsConf};
pub use paths::{CollectorPaths, MountPaths, configmap_or_secret_path, secret_path};
pub use render::Fragment;
pub use secrets::{SecretLookup, Secrets};
pub use sink::{resolve_outputs, sink_id};
