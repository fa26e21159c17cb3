//! View-state feed: owns the incident collection and filter state, exposes a
//! single "apply state and produce a render snapshot" entry point.
//!
//! The feed replaces the page-global collection/filter/page variables of the
//! original views with an explicit state object. It owns its collection
//! exclusively: refresh replaces it wholesale, pagination appends to the end
//! preserving prior order, and the current filter state is re-applied on
//! every snapshot.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::Config;
use crate::filter::{aggregate, filter_incidents, group_by_month};
use crate::normalize::normalize;
use crate::types::{
  FilterState, InboundIncident, Incident, MonthSection, StatusCounts, StatusFilter,
};

/// Everything the rendering layer needs for one paint: the filtered sequence
/// in arrival order, its month sections, and aggregate counts over the
/// filtered subset. Borrowed from the feed; the caller may read freely but
/// the feed retains no reference to the snapshot after the call returns.
#[derive(Debug, Clone, Serialize)]
pub struct FeedSnapshot<'a> {
  pub filter: StatusFilter,
  pub search: String,
  pub incidents: Vec<&'a Incident>,
  pub sections: Vec<MonthSection<'a>>,
  pub counts: StatusCounts,
}

/// In-memory incident feed for one view.
pub struct IncidentFeed {
  config: Config,
  incidents: Vec<Incident>,
  filter: FilterState,
}

impl IncidentFeed {
  pub fn new(config: Config) -> Self {
    Self {
      config,
      incidents: Vec::new(),
      filter: FilterState::default(),
    }
  }

  pub fn with_defaults() -> Self {
    Self::new(Config::default())
  }

  /// Replace the whole collection (refresh / superseding fetch). The filter
  /// state is kept; a later snapshot re-applies it.
  pub fn replace(&mut self, records: &[InboundIncident]) {
    self.incidents = records.iter().map(normalize).collect();
  }

  /// Append a further page ("load more"), preserving prior order.
  pub fn append(&mut self, records: &[InboundIncident]) {
    self.incidents.extend(records.iter().map(normalize));
  }

  pub fn set_status_filter(&mut self, filter: StatusFilter) {
    self.filter.status = filter;
  }

  /// Set the status filter from a raw chip value; unrecognized values fall
  /// back to `All`.
  pub fn set_status_filter_str(&mut self, value: &str) {
    self.filter.status = StatusFilter::from_str_loose(value);
  }

  pub fn set_search(&mut self, term: &str) {
    self.filter.search = term.to_string();
  }

  pub fn filter_state(&self) -> &FilterState {
    &self.filter
  }

  pub fn len(&self) -> usize {
    self.incidents.len()
  }

  pub fn is_empty(&self) -> bool {
    self.incidents.is_empty()
  }

  pub fn incidents(&self) -> &[Incident] {
    &self.incidents
  }

  pub fn get(&self, id: &str) -> Option<&Incident> {
    self.incidents.iter().find(|incident| incident.id == id)
  }

  /// Apply the current filter state at the given instant and produce a
  /// render snapshot. Pure with respect to the feed: the collection is never
  /// mutated or re-sorted.
  pub fn snapshot_at(&self, now: DateTime<Utc>) -> FeedSnapshot<'_> {
    let incidents = filter_incidents(
      &self.incidents,
      self.filter.status,
      &self.filter.search,
      now,
      &self.config,
    );
    let sections = group_by_month(&incidents);
    let counts = aggregate(&incidents, now, &self.config);
    FeedSnapshot {
      filter: self.filter.status,
      search: self.filter.search.clone(),
      incidents,
      sections,
      counts,
    }
  }

  /// [`Self::snapshot_at`] using the current wall clock.
  pub fn snapshot(&self) -> FeedSnapshot<'_> {
    self.snapshot_at(Utc::now())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::LifecycleStatus;

  fn record(id: &str, ty: &str, status: &str, created: &str) -> InboundIncident {
    InboundIncident {
      incident_id: Some(id.into()),
      incident_type: Some(ty.into()),
      severity_level: Some("medium".into()),
      status: Some(status.into()),
      description: Some(format!("{} reported", ty)),
      created_at: Some(created.into()),
      ..Default::default()
    }
  }

  fn t0() -> DateTime<Utc> {
    "2025-01-15T10:30:00Z".parse().unwrap()
  }

  #[test]
  fn replace_then_snapshot_returns_everything() {
    let mut feed = IncidentFeed::with_defaults();
    feed.replace(&[
      record("a", "flood", "pending", "2025-01-10T08:00:00Z"),
      record("b", "fire", "resolved", "2025-01-12T08:00:00Z"),
    ]);
    let snapshot = feed.snapshot_at(t0());
    assert_eq!(snapshot.incidents.len(), 2);
    assert_eq!(snapshot.counts.total, 2);
    assert_eq!(snapshot.filter, StatusFilter::All);
  }

  #[test]
  fn replace_is_wholesale() {
    let mut feed = IncidentFeed::with_defaults();
    feed.replace(&[record("a", "flood", "pending", "2025-01-10T08:00:00Z")]);
    feed.replace(&[record("b", "fire", "resolved", "2025-01-12T08:00:00Z")]);
    assert_eq!(feed.len(), 1);
    assert!(feed.get("a").is_none());
    assert!(feed.get("b").is_some());
  }

  #[test]
  fn append_preserves_prior_order_and_filter_state() {
    let mut feed = IncidentFeed::with_defaults();
    feed.set_status_filter(StatusFilter::Resolved);
    feed.replace(&[
      record("a", "flood", "resolved", "2025-01-10T08:00:00Z"),
      record("b", "fire", "pending", "2025-01-11T08:00:00Z"),
    ]);
    feed.append(&[record("c", "crime", "resolved", "2025-01-12T08:00:00Z")]);

    let all: Vec<_> = feed.incidents().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(all, ["a", "b", "c"]);

    let snapshot = feed.snapshot_at(t0());
    let shown: Vec<_> = snapshot.incidents.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(shown, ["a", "c"]);
  }

  #[test]
  fn search_and_filter_compose_in_snapshot() {
    let mut feed = IncidentFeed::with_defaults();
    feed.replace(&[
      record("a", "flood", "pending", "2025-01-10T08:00:00Z"),
      record("b", "flood", "resolved", "2025-01-11T08:00:00Z"),
      record("c", "fire", "resolved", "2025-01-12T08:00:00Z"),
    ]);
    feed.set_status_filter_str("resolved");
    feed.set_search("flood");
    let snapshot = feed.snapshot_at(t0());
    assert_eq!(snapshot.incidents.len(), 1);
    assert_eq!(snapshot.incidents[0].id, "b");
    assert_eq!(snapshot.counts.resolved, 1);
  }

  #[test]
  fn bogus_filter_value_falls_back_to_all() {
    let mut feed = IncidentFeed::with_defaults();
    feed.replace(&[
      record("a", "flood", "pending", "2025-01-10T08:00:00Z"),
      record("b", "fire", "resolved", "2025-01-12T08:00:00Z"),
    ]);
    feed.set_status_filter_str("nonsense");
    assert_eq!(feed.filter_state().status, StatusFilter::All);
    assert_eq!(feed.snapshot_at(t0()).incidents.len(), 2);
  }

  #[test]
  fn counts_cover_fallback_statuses() {
    let mut feed = IncidentFeed::with_defaults();
    // One explicit pending, one status-less 2-day-old (ongoing by fallback),
    // one explicit resolved.
    let mut unstated = record("b", "fire", "", "2025-01-13T10:30:00Z");
    unstated.status = None;
    feed.replace(&[
      record("a", "flood", "pending", "2025-01-15T10:30:00Z"),
      unstated,
      record("c", "crime", "resolved", "2025-01-05T10:30:00Z"),
    ]);
    let snapshot = feed.snapshot_at(t0());
    assert_eq!(snapshot.counts.total, 3);
    assert_eq!(snapshot.counts.pending, 1);
    assert_eq!(snapshot.counts.ongoing, 1);
    assert_eq!(snapshot.counts.resolved, 1);
    assert_eq!(
      crate::status::resolve_status_at(
        feed.get("b").unwrap(),
        t0(),
        &Config::default()
      ),
      LifecycleStatus::Ongoing
    );
  }
}
