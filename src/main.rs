//! Binary entrypoint: read incident JSON lines from stdin, write one feed
//! snapshot JSON document to stdout.
//!
//! Each input line is an InboundIncident. Optional arguments select the view
//! state: arg 1 is a status filter (pending|ongoing|resolved, anything else
//! means all), arg 2 is a free-text search term. Malformed lines produce an
//! ErrorOutput JSON line on stderr and are skipped; stdout stays a single
//! snapshot document.

use resq_engine::types::ErrorOutput;
use resq_engine::{EngineError, InboundIncident, IncidentFeed};
use std::io::{self, BufRead, Write};

/// Decode one stdin line into a record. Blank lines decode to `None`.
fn decode_line(line: &str) -> Result<Option<InboundIncident>, EngineError> {
  let trimmed = line.trim();
  if trimmed.is_empty() {
    return Ok(None);
  }
  let record = serde_json::from_str(trimmed)?;
  Ok(Some(record))
}

fn run(filter: &str, search: &str) -> Result<(), EngineError> {
  let stdin = io::stdin();
  let mut records: Vec<InboundIncident> = Vec::new();

  for line in stdin.lock().lines() {
    let line = line?;
    match decode_line(&line) {
      Ok(Some(record)) => records.push(record),
      Ok(None) => {}
      Err(e) => {
        // Bad line: report it structured on stderr, keep going.
        let err = ErrorOutput::new(e.to_string());
        if let Ok(json) = serde_json::to_string(&err) {
          let _ = writeln!(io::stderr(), "{}", json);
        }
      }
    }
  }

  let mut feed = IncidentFeed::with_defaults();
  feed.replace(&records);
  feed.set_status_filter_str(filter);
  feed.set_search(search);

  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());
  let snapshot = feed.snapshot();
  serde_json::to_writer(&mut out, &snapshot)?;
  writeln!(out)?;
  out.flush()?;
  Ok(())
}

fn main() {
  let mut args = std::env::args().skip(1);
  let filter = args.next().unwrap_or_default();
  let search = args.next().unwrap_or_default();

  if let Err(e) = run(&filter, &search) {
    let _ = writeln!(io::stderr(), "resq-engine: {}", e);
    std::process::exit(1);
  }
}
