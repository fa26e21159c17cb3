//! Presentation descriptors: typed lookup tables keyed by closed enums.
//!
//! Each table maps an enum value to a display label, icon identifier, and
//! style classes. Lookups are total: unrecognized raw values collapse to a
//! designated fallback entry (`other` / `medium` / `pending`) before the
//! table is consulted, so absence of a mapping is never an error. The
//! descriptors are ephemeral presentation metadata, recomputed per render
//! and never persisted.

use crate::types::{Incident, IncidentType, LifecycleStatus, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct TypeDescriptor {
  pub label: &'static str,
  pub icon: &'static str,
  pub bg_class: &'static str,
  pub text_class: &'static str,
  pub border_class: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SeverityDescriptor {
  pub label: &'static str,
  pub icon: &'static str,
  pub bg_class: &'static str,
  pub text_class: &'static str,
  pub border_class: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct StatusDescriptor {
  pub label: &'static str,
  pub icon: &'static str,
  pub bg_class: &'static str,
  pub text_class: &'static str,
  pub border_class: &'static str,
  /// Map-pin color for the dashboard view.
  pub pin_color: &'static str,
}

pub fn type_descriptor(ty: IncidentType) -> &'static TypeDescriptor {
  match ty {
    IncidentType::Flood => &TypeDescriptor {
      label: "Flood",
      icon: "fa-water",
      bg_class: "bg-blue-100",
      text_class: "text-blue-800",
      border_class: "border-blue-200",
    },
    IncidentType::Fire => &TypeDescriptor {
      label: "Fire",
      icon: "fa-fire",
      bg_class: "bg-red-100",
      text_class: "text-red-800",
      border_class: "border-red-200",
    },
    IncidentType::Medical => &TypeDescriptor {
      label: "Medical Emergency",
      icon: "fa-heartbeat",
      bg_class: "bg-green-100",
      text_class: "text-green-800",
      border_class: "border-green-200",
    },
    IncidentType::Accident => &TypeDescriptor {
      label: "Accident",
      icon: "fa-car-crash",
      bg_class: "bg-yellow-100",
      text_class: "text-yellow-800",
      border_class: "border-yellow-200",
    },
    IncidentType::Crime => &TypeDescriptor {
      label: "Crime",
      icon: "fa-shield-alt",
      bg_class: "bg-purple-100",
      text_class: "text-purple-800",
      border_class: "border-purple-200",
    },
    IncidentType::Landslide => &TypeDescriptor {
      label: "Landslide",
      icon: "fa-mountain",
      bg_class: "bg-orange-100",
      text_class: "text-orange-800",
      border_class: "border-orange-200",
    },
    IncidentType::Power => &TypeDescriptor {
      label: "Power Outage",
      icon: "fa-bolt",
      bg_class: "bg-gray-100",
      text_class: "text-gray-800",
      border_class: "border-gray-200",
    },
    IncidentType::Other => &TypeDescriptor {
      label: "Other Incident",
      icon: "fa-ellipsis-h",
      bg_class: "bg-gray-100",
      text_class: "text-gray-800",
      border_class: "border-gray-200",
    },
  }
}

pub fn severity_descriptor(severity: Severity) -> &'static SeverityDescriptor {
  match severity {
    Severity::Low => &SeverityDescriptor {
      label: "Low Severity",
      icon: "fa-arrow-down",
      bg_class: "bg-green-100",
      text_class: "text-green-800",
      border_class: "border-green-200",
    },
    Severity::Medium => &SeverityDescriptor {
      label: "Medium Severity",
      icon: "fa-minus",
      bg_class: "bg-yellow-100",
      text_class: "text-yellow-800",
      border_class: "border-yellow-200",
    },
    Severity::High => &SeverityDescriptor {
      label: "High Severity",
      icon: "fa-arrow-up",
      bg_class: "bg-red-100",
      text_class: "text-red-800",
      border_class: "border-red-200",
    },
  }
}

pub fn status_descriptor(status: LifecycleStatus) -> &'static StatusDescriptor {
  match status {
    LifecycleStatus::Pending => &StatusDescriptor {
      label: "Pending",
      icon: "fa-clock",
      bg_class: "bg-blue-100",
      text_class: "text-blue-800",
      border_class: "border-blue-200",
      pin_color: "#f59e0b",
    },
    LifecycleStatus::Ongoing => &StatusDescriptor {
      label: "Ongoing",
      icon: "fa-spinner",
      bg_class: "bg-yellow-100",
      text_class: "text-yellow-800",
      border_class: "border-yellow-200",
      pin_color: "#3b82f6",
    },
    LifecycleStatus::Resolved => &StatusDescriptor {
      label: "Resolved",
      icon: "fa-check-circle",
      bg_class: "bg-green-100",
      text_class: "text-green-800",
      border_class: "border-green-200",
      pin_color: "#10b981",
    },
  }
}

/// The three descriptors for one incident, looked up independently.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct Classification {
  pub incident_type: &'static TypeDescriptor,
  pub severity: &'static SeverityDescriptor,
  pub status: &'static StatusDescriptor,
}

/// Classify an incident for rendering. Three independent lookups, each
/// defaulting when the record's raw value is absent or unrecognized.
pub fn classify(incident: &Incident) -> Classification {
  let ty = IncidentType::from_str_loose(&incident.incident_type).unwrap_or(IncidentType::Other);
  let severity =
    Severity::from_str_loose(&incident.severity_level).unwrap_or(Severity::Medium);
  let status = incident.status.unwrap_or(LifecycleStatus::Pending);
  Classification {
    incident_type: type_descriptor(ty),
    severity: severity_descriptor(severity),
    status: status_descriptor(status),
  }
}
