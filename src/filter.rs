//! Compound filtering, month grouping, and aggregate counts over an
//! in-memory incident collection.
//!
//! Nothing here mutates or re-sorts the source collection: every operation
//! produces a new view in the collection's original (arrival) order.

use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::status::resolve_status_at;
use crate::types::{Incident, LifecycleStatus, MonthSection, StatusCounts, StatusFilter};

/// Apply the compound status + search predicate (conjunctive).
///
/// Search is case-insensitive substring matching over the description, the
/// raw incident type, and the resolved location name; a missing location
/// name matches as the empty string.
pub fn filter_incidents<'a>(
  incidents: &'a [Incident],
  filter: StatusFilter,
  search: &str,
  now: DateTime<Utc>,
  config: &Config,
) -> Vec<&'a Incident> {
  let term = search.trim().to_lowercase();
  incidents
    .iter()
    .filter(|incident| filter.matches(resolve_status_at(incident, now, config)))
    .filter(|incident| term.is_empty() || matches_search(incident, &term))
    .collect()
}

fn matches_search(incident: &Incident, term: &str) -> bool {
  incident.description.to_lowercase().contains(term)
    || incident.incident_type.to_lowercase().contains(term)
    || incident
      .location_name
      .as_deref()
      .unwrap_or("")
      .to_lowercase()
      .contains(term)
}

/// Group incidents by the calendar month/year of their creation timestamp.
///
/// Sections appear in insertion order of each label's first occurrence, not
/// chronologically re-sorted. Incidents without a creation timestamp group
/// under "Unknown date".
pub fn group_by_month<'a>(incidents: &[&'a Incident]) -> Vec<MonthSection<'a>> {
  let mut sections: Vec<MonthSection<'a>> = Vec::new();
  for incident in incidents {
    let label = match incident.created_at {
      Some(created) => created.format("%B %Y").to_string(),
      None => "Unknown date".to_string(),
    };
    match sections.iter_mut().find(|s| s.label == label) {
      Some(section) => section.incidents.push(incident),
      None => sections.push(MonthSection {
        label,
        incidents: vec![incident],
      }),
    }
  }
  sections
}

/// Count incidents by resolved status in a single pass.
///
/// `total` always equals `pending + ongoing + resolved` because status
/// resolution is total.
pub fn aggregate(
  incidents: &[&Incident],
  now: DateTime<Utc>,
  config: &Config,
) -> StatusCounts {
  let mut counts = StatusCounts::default();
  for incident in incidents {
    counts.total += 1;
    match resolve_status_at(incident, now, config) {
      LifecycleStatus::Pending => counts.pending += 1,
      LifecycleStatus::Ongoing => counts.ongoing += 1,
      LifecycleStatus::Resolved => counts.resolved += 1,
    }
  }
  counts
}
