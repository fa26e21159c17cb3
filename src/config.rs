//! Engine configuration with sane defaults.

/// Day boundaries for the age-based status fallback.
#[derive(Debug, Clone)]
pub struct Config {
  /// Incidents younger than this many whole days resolve to Pending.
  pub pending_under_days: i64,
  /// Incidents younger than this many whole days (but at least
  /// `pending_under_days`) resolve to Ongoing; older ones to Resolved.
  pub ongoing_under_days: i64,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      pending_under_days: 1,
      ongoing_under_days: 3,
    }
  }
}
