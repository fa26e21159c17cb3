//! Normalize inbound records into canonical internal Incident models.
//!
//! Normalization is total: any well-typed-but-partially-null record produces
//! a canonical Incident. Missing or malformed fields collapse to their
//! defined fallbacks instead of erroring.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::types::{Coordinate, InboundIncident, Incident, LifecycleStatus};

/// Normalize an InboundIncident into a canonical Incident. Never fails.
pub fn normalize(raw: &InboundIncident) -> Incident {
  Incident {
    id: raw.incident_id.clone().unwrap_or_default(),
    incident_type: raw
      .incident_type
      .as_deref()
      .unwrap_or_default()
      .trim()
      .to_string(),
    severity_level: raw
      .severity_level
      .as_deref()
      .unwrap_or_default()
      .trim()
      .to_string(),
    status: raw
      .status
      .as_deref()
      .and_then(LifecycleStatus::from_str_loose),
    description: raw.description.clone().unwrap_or_default(),
    location_name: location_name(raw),
    latitude: raw.latitude.as_ref().and_then(parse_coordinate),
    longitude: raw.longitude.as_ref().and_then(parse_coordinate),
    created_at: raw.created_at.as_deref().and_then(parse_timestamp),
    updated_at: raw.updated_at.as_deref().and_then(parse_timestamp),
    photo: raw.photo.as_deref().and_then(valid_photo),
  }
}

fn location_name(raw: &InboundIncident) -> Option<String> {
  let barangay = raw.baranggay.as_ref()?;
  barangay
    .baranggay_name
    .clone()
    .or_else(|| barangay.baranggay.clone())
    .filter(|name| !name.trim().is_empty())
}

/// Parse a timestamp leniently: RFC 3339 first, then the backend's
/// `YYYY-MM-DD HH:MM:SS` form (assumed UTC). Unparseable values are `None`.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
  let trimmed = s.trim();
  if trimmed.is_empty() {
    return None;
  }
  if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
    return Some(dt.with_timezone(&Utc));
  }
  NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S")
    .ok()
    .map(|naive| naive.and_utc())
}

fn parse_coordinate(c: &Coordinate) -> Option<f64> {
  let value = match c {
    Coordinate::Number(n) => *n,
    Coordinate::Text(s) => s.trim().parse::<f64>().ok()?,
  };
  value.is_finite().then_some(value)
}

/// A photo reference is valid when it is non-blank and not one of the literal
/// junk strings the backend serializes for absent photos.
fn valid_photo(photo: &str) -> Option<String> {
  let trimmed = photo.trim();
  if trimmed.is_empty() || trimmed == "null" || trimmed == "undefined" {
    None
  } else {
    Some(trimmed.to_string())
  }
}

/// Format a coordinate with fixed precision for display. `N/A` when absent.
pub fn format_coordinate(value: Option<f64>, decimals: usize) -> String {
  match value {
    Some(v) => format!("{:.*}", decimals, v),
    None => "N/A".to_string(),
  }
}

/// Format a timestamp for display: "January 15, 2025, 10:30". "Unknown" when
/// absent.
pub fn format_date(ts: Option<DateTime<Utc>>) -> String {
  match ts {
    Some(t) => t.format("%B %-d, %Y, %H:%M").to_string(),
    None => "Unknown".to_string(),
  }
}

/// Truncated display reference for an incident id: "#" + first 8 characters.
pub fn short_id(id: &str) -> String {
  let prefix: String = id.chars().take(8).collect();
  format!("#{}", prefix)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_record_normalizes_to_defaults() {
    let incident = normalize(&InboundIncident::default());
    assert_eq!(incident.id, "");
    assert_eq!(incident.incident_type, "");
    assert!(incident.status.is_none());
    assert!(incident.location_name.is_none());
    assert!(incident.latitude.is_none());
    assert!(incident.created_at.is_none());
    assert!(incident.photo.is_none());
  }

  #[test]
  fn full_record_normalizes() {
    let raw: InboundIncident = serde_json::from_str(
      r#"{
        "incident_id": "abc123def456",
        "incident_type": "flood",
        "severity_level": "high",
        "status": "Ongoing",
        "description": "Flooding in low-lying areas",
        "baranggay": {"baranggay_name": "San Pablo"},
        "latitude": "14.2769",
        "longitude": 121.4164,
        "created_at": "2025-01-15T10:30:00Z",
        "updated_at": "2025-01-15 12:00:00",
        "photo": "uploads/flood.jpg"
      }"#,
    )
    .unwrap();
    let incident = normalize(&raw);
    assert_eq!(incident.status, Some(LifecycleStatus::Ongoing));
    assert_eq!(incident.location_name.as_deref(), Some("San Pablo"));
    assert_eq!(incident.latitude, Some(14.2769));
    assert_eq!(incident.longitude, Some(121.4164));
    assert!(incident.created_at.is_some());
    assert!(incident.updated_at.is_some());
    assert_eq!(incident.photo.as_deref(), Some("uploads/flood.jpg"));
  }

  #[test]
  fn unrecognized_status_becomes_none() {
    let raw = InboundIncident {
      status: Some("escalated".into()),
      ..Default::default()
    };
    assert!(normalize(&raw).status.is_none());
  }

  #[test]
  fn legacy_barangay_key_used_as_fallback() {
    let raw: InboundIncident =
      serde_json::from_str(r#"{"baranggay": {"baranggay": "Santa Cruz"}}"#).unwrap();
    assert_eq!(normalize(&raw).location_name.as_deref(), Some("Santa Cruz"));
  }

  #[test]
  fn junk_photo_strings_are_absent() {
    for junk in ["", "   ", "null", "undefined"] {
      let raw = InboundIncident {
        photo: Some(junk.into()),
        ..Default::default()
      };
      assert!(normalize(&raw).photo.is_none(), "{:?}", junk);
    }
  }

  #[test]
  fn non_numeric_coordinate_is_absent() {
    let raw = InboundIncident {
      latitude: Some(Coordinate::Text("not-a-number".into())),
      ..Default::default()
    };
    assert!(normalize(&raw).latitude.is_none());
  }

  #[test]
  fn coordinate_display_formatting() {
    assert_eq!(format_coordinate(Some(14.2769), 6), "14.276900");
    assert_eq!(format_coordinate(None, 6), "N/A");
  }

  #[test]
  fn date_display_formatting() {
    let ts = parse_timestamp("2025-01-15T10:30:00Z");
    assert_eq!(format_date(ts), "January 15, 2025, 10:30");
    assert_eq!(format_date(None), "Unknown");
  }

  #[test]
  fn short_id_truncates_to_eight() {
    assert_eq!(short_id("abc123def456"), "#abc123de");
    assert_eq!(short_id("ab"), "#ab");
  }
}
