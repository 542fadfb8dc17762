//! Trace-file reader.
//!
//! Parses dinero-style text traces: one access per line, three
//! whitespace-separated fields `kind address data`, where `kind` is `0`
//! (read), `1` (write), or `2` (instruction fetch) and `address`/`data` are
//! hexadecimal. The `data` field is carried through but unused by the access
//! protocol.
//!
//! Lines with any other field count are skipped; benchmark traces carry
//! headers and blank lines. A three-field line whose fields fail to parse is
//! an error — that is trace corruption, not formatting noise.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::common::data::AccessKind;
use crate::common::error::TraceError;

/// One trace entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceRecord {
    /// Kind of access.
    pub kind: AccessKind,
    /// Accessed address.
    pub address: u64,
    /// Data value from the trace; accepted but unused by the protocol.
    pub data: u64,
}

fn parse_hex(field: &str, line: usize) -> Result<u64, TraceError> {
    let digits = field
        .strip_prefix("0x")
        .or_else(|| field.strip_prefix("0X"))
        .unwrap_or(field);
    u64::from_str_radix(digits, 16).map_err(|_| TraceError::Malformed {
        line,
        reason: format!("bad hex value {field:?}"),
    })
}

fn parse_kind(field: &str, line: usize) -> Result<AccessKind, TraceError> {
    match field {
        "0" => Ok(AccessKind::Read),
        "1" => Ok(AccessKind::Write),
        "2" => Ok(AccessKind::Fetch),
        other => Err(TraceError::Malformed {
            line,
            reason: format!("unknown access kind {other:?}"),
        }),
    }
}

/// Reads every access record from `reader`.
///
/// # Errors
///
/// Returns [`TraceError::Io`] on read failure and [`TraceError::Malformed`]
/// for a three-field line that does not parse.
pub fn read_trace<R: Read>(reader: R) -> Result<Vec<TraceRecord>, TraceError> {
    let mut records = Vec::new();
    for (number, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [kind, address, data] = fields.as_slice() else {
            continue;
        };
        let number = number + 1;
        records.push(TraceRecord {
            kind: parse_kind(kind, number)?,
            address: parse_hex(address, number)?,
            data: parse_hex(data, number)?,
        });
    }
    debug!(records = records.len(), "trace loaded");
    Ok(records)
}

/// Reads every access record from the trace file at `path`.
///
/// # Errors
///
/// As [`read_trace`], plus [`TraceError::Io`] if the file cannot be opened.
pub fn read_trace_file<P: AsRef<Path>>(path: P) -> Result<Vec<TraceRecord>, TraceError> {
    read_trace(File::open(path)?)
}
