//! Lifecycle status resolution and the progress indicator derived from it.

use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::descriptors::status_descriptor;
use crate::types::{Incident, LifecycleStatus, ProgressStep, StepState};

/// Resolve an incident's lifecycle status at the given instant.
///
/// A backend-supplied status wins unconditionally. Without one, the status is
/// approximated from age-since-creation using the configured day boundaries
/// (age < 1 day: Pending, 1–3 days: Ongoing, 3+ days: Resolved with the
/// defaults). A missing creation timestamp counts as age zero.
pub fn resolve_status_at(
  incident: &Incident,
  now: DateTime<Utc>,
  config: &Config,
) -> LifecycleStatus {
  if let Some(status) = incident.status {
    return status;
  }

  let days_ago = incident
    .created_at
    .map(|created| (now - created).num_days().max(0))
    .unwrap_or(0);

  if days_ago < config.pending_under_days {
    LifecycleStatus::Pending
  } else if days_ago < config.ongoing_under_days {
    LifecycleStatus::Ongoing
  } else {
    LifecycleStatus::Resolved
  }
}

/// Convenience wrapper over [`resolve_status_at`] using the current wall
/// clock and default boundaries.
pub fn resolve_status(incident: &Incident) -> LifecycleStatus {
  resolve_status_at(incident, Utc::now(), &Config::default())
}

/// Build the three-step progress indicator for a resolved status.
///
/// Steps follow the fixed order [Pending, Ongoing, Resolved]: steps before
/// the current status are Completed, the current one Active, later ones
/// Upcoming. The engine never writes status; transitions are backend-driven.
pub fn progress_steps(current: LifecycleStatus) -> [ProgressStep; 3] {
  LifecycleStatus::ORDER.map(|step| {
    let descriptor = status_descriptor(step);
    ProgressStep {
      status: step,
      label: descriptor.label,
      icon: descriptor.icon,
      state: if step == current {
        StepState::Active
      } else if step < current {
        StepState::Completed
      } else {
        StepState::Upcoming
      },
    }
  })
}
