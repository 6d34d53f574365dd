//! Telemetry decoding and per-player aggregation.

use std::io::Read;

use erangel_types::{telemetry::Telemetry, Result};
use tracing::info;

pub mod aggregator;
pub mod decoder;
pub mod report;

mod wire;

pub use aggregator::{aggregate, Aggregator};
pub use decoder::decode_events;
pub use report::MatchSummary;

/// Decode and aggregate a fully buffered telemetry document.
pub fn parse_bytes(bytes: &[u8]) -> Result<Telemetry> {
    let events = decode_events(bytes)?;
    Ok(aggregate(events))
}

/// Read `reader` to the end, then decode and aggregate it.
pub fn parse_telemetry<R: Read>(mut reader: R) -> Result<Telemetry> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    info!(bytes = buffer.len(), "telemetry payload buffered");
    parse_bytes(&buffer)
}
