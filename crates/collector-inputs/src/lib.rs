//! Input classification for the collector config resolver.
//!
//! Answers the questions the topology layer asks before wiring up collection
//! components: which source kinds are present, which configmaps and secrets
//! receiver TLS needs mounted, and what rate limits apply.
//!
//! Infrastructure and audit inputs that list no sources collect from all of
//! them; see [`collector_api::SourceSelection`].

pub mod inputs;
pub mod limits;
pub mod tls_refs;

pub use inputs::Inputs;
pub use limits::{max_records_per_second, rate_limit, threshold};
pub use tls_refs::{configmaps_for_tls, secrets_for_tls};
