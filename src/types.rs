//! Core types for the ResQ engine (JSON contracts + internal models).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Inbound types (JSON contract — what the backend sends)
// ---------------------------------------------------------------------------

/// One incident record as delivered by the backend. The record is an
/// untrusted, possibly-incomplete document: every field tolerates absence.
/// Unknown fields are silently ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InboundIncident {
  #[serde(default)]
  pub incident_id: Option<String>,
  #[serde(default)]
  pub incident_type: Option<String>,
  #[serde(default)]
  pub severity_level: Option<String>,
  #[serde(default)]
  pub status: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  /// Wire spelling follows the backend.
  #[serde(default)]
  pub baranggay: Option<InboundBarangay>,
  #[serde(default)]
  pub latitude: Option<Coordinate>,
  #[serde(default)]
  pub longitude: Option<Coordinate>,
  #[serde(default)]
  pub created_at: Option<String>,
  #[serde(default)]
  pub updated_at: Option<String>,
  #[serde(default)]
  pub photo: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InboundBarangay {
  #[serde(default)]
  pub baranggay_name: Option<String>,
  /// Older backend responses expose the name under this key instead.
  #[serde(default)]
  pub baranggay: Option<String>,
}

/// A coordinate arrives as a JSON number or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
  Number(f64),
  Text(String),
}

// ---------------------------------------------------------------------------
// Lifecycle status
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleStatus {
  Pending,
  Ongoing,
  Resolved,
}

impl LifecycleStatus {
  pub fn from_str_loose(s: &str) -> Option<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "pending" => Some(Self::Pending),
      "ongoing" => Some(Self::Ongoing),
      "resolved" => Some(Self::Resolved),
      _ => None,
    }
  }

  /// Fixed lifecycle order used by the progress indicator.
  pub const ORDER: [Self; 3] = [Self::Pending, Self::Ongoing, Self::Resolved];
}

// ---------------------------------------------------------------------------
// Incident type / severity enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentType {
  Flood,
  Fire,
  Medical,
  Accident,
  Crime,
  Landslide,
  Power,
  Other,
}

impl IncidentType {
  pub fn from_str_loose(s: &str) -> Option<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "flood" => Some(Self::Flood),
      "fire" => Some(Self::Fire),
      "medical" => Some(Self::Medical),
      "accident" => Some(Self::Accident),
      "crime" => Some(Self::Crime),
      "landslide" => Some(Self::Landslide),
      "power" => Some(Self::Power),
      "other" => Some(Self::Other),
      _ => None,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
  Low,
  Medium,
  High,
}

impl Severity {
  pub fn from_str_loose(s: &str) -> Option<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "low" => Some(Self::Low),
      "medium" => Some(Self::Medium),
      "high" => Some(Self::High),
      // "critical" shows up in sample data but has no defined display
      // mapping; it falls through to the default descriptor.
      _ => None,
    }
  }
}

// ---------------------------------------------------------------------------
// Filter state (session-local, owned by the view)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
  All,
  Pending,
  Ongoing,
  Resolved,
}

impl StatusFilter {
  /// Parse a filter chip value. Anything unrecognized falls back to `All`
  /// rather than erroring.
  pub fn from_str_loose(s: &str) -> Self {
    match s.trim().to_ascii_lowercase().as_str() {
      "pending" => Self::Pending,
      "ongoing" => Self::Ongoing,
      "resolved" => Self::Resolved,
      _ => Self::All,
    }
  }

  pub fn matches(self, status: LifecycleStatus) -> bool {
    match self {
      Self::All => true,
      Self::Pending => status == LifecycleStatus::Pending,
      Self::Ongoing => status == LifecycleStatus::Ongoing,
      Self::Resolved => status == LifecycleStatus::Resolved,
    }
  }
}

impl Default for StatusFilter {
  fn default() -> Self {
    Self::All
  }
}

/// Current status filter + free-text search term. Not persisted across page
/// loads.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
  pub status: StatusFilter,
  pub search: String,
}

// ---------------------------------------------------------------------------
// Canonical internal record after normalization
// ---------------------------------------------------------------------------

/// Canonical incident after normalization. Raw type/severity strings are kept
/// for substring search; enums are derived at classification time.
#[derive(Debug, Clone, Serialize)]
pub struct Incident {
  pub id: String,
  pub incident_type: String,
  pub severity_level: String,
  /// Backend-supplied status when recognized; `None` triggers the age-based
  /// fallback in `resolve_status`.
  pub status: Option<LifecycleStatus>,
  pub description: String,
  pub location_name: Option<String>,
  pub latitude: Option<f64>,
  pub longitude: Option<f64>,
  pub created_at: Option<DateTime<Utc>>,
  pub updated_at: Option<DateTime<Utc>>,
  /// Photo reference that passed validity checks (non-blank, not the literal
  /// strings "null"/"undefined").
  pub photo: Option<String>,
}

// ---------------------------------------------------------------------------
// Output types (what the view layer renders from)
// ---------------------------------------------------------------------------

/// Aggregate counts over a (possibly filtered) collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
  pub total: usize,
  pub pending: usize,
  pub ongoing: usize,
  pub resolved: usize,
}

/// One display section: a month label plus the incidents first reported in
/// that month, in their original relative order.
#[derive(Debug, Clone, Serialize)]
pub struct MonthSection<'a> {
  pub label: String,
  pub incidents: Vec<&'a Incident>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
  Completed,
  Active,
  Upcoming,
}

/// One step of the three-step lifecycle progress indicator.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProgressStep {
  pub status: LifecycleStatus,
  pub label: &'static str,
  pub icon: &'static str,
  pub state: StepState,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for invalid input lines.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
    }
  }
}
