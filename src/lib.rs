//! ResQ Incident Classifier & Filter Engine — deterministic, rule-based.
//!
//! Ingests incident records from the ResQ backend, resolves each record's
//! lifecycle status (backend value, or an age-based fallback), maps
//! type/severity/status to presentation descriptors, and applies compound
//! status+search filters with month grouping and aggregate counts.
//!
//! The engine is total: any well-typed-but-partially-null record produces an
//! output. No DB, no network; pure computation + in-memory view state.

pub mod config;
pub mod descriptors;
pub mod engine;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod status;
pub mod types;

pub use config::Config;
pub use descriptors::{classify, Classification};
pub use engine::{FeedSnapshot, IncidentFeed};
pub use error::EngineError;
pub use filter::{aggregate, filter_incidents, group_by_month};
pub use status::{progress_steps, resolve_status, resolve_status_at};
pub use types::{InboundIncident, Incident, LifecycleStatus, StatusFilter};
