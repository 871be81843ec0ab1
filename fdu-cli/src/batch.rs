//! Line-oriented batch conversion
//!
//! One JSON request per input line, one JSON response per output line.

use std::io::{BufRead, Write};

use fdu_units::ConversionError;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub value: f64,
    pub unit: String,
    pub output: String,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum BatchResponse {
    Value { value: f64 },
    Error { error: serde_json::Value },
}

impl From<ConversionError> for BatchResponse {
    fn from(e: ConversionError) -> Self {
        let mut error = serde_json::to_value(&e).unwrap_or_else(|_| json!({}));
        error["message"] = json!(e.to_string());
        BatchResponse::Error { error }
    }
}

fn parse_error(e: impl std::fmt::Display) -> BatchResponse {
    warn!("Rejected batch line: {}", e);
    BatchResponse::Error {
        error: json!({ "kind": "parse_error", "message": e.to_string() }),
    }
}

/// Handle a single request line. `None` for blank lines.
pub fn handle_line(line: &str) -> Option<BatchResponse> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let request: BatchRequest = match serde_json::from_str(line) {
        Ok(r) => r,
        Err(e) => return Some(parse_error(e)),
    };

    let response = match fdu_units::convert(request.value, &request.unit, &request.output) {
        Ok(value) => BatchResponse::Value { value },
        Err(e) => {
            debug!(unit = %request.unit, output = %request.output, "{}", e);
            e.into()
        }
    };
    Some(response)
}

/// Read requests until EOF, writing one response per request.
///
/// Lines that are not valid UTF-8 get a parse error response; only I/O errors
/// stop the loop.
pub fn run<R: BufRead, W: Write>(reader: R, mut writer: W) -> anyhow::Result<usize> {
    let mut handled = 0;
    for raw in reader.split(b'\n') {
        let response = match String::from_utf8(raw?) {
            Ok(line) => handle_line(&line),
            Err(e) => Some(parse_error(e)),
        };
        if let Some(response) = response {
            serde_json::to_writer(&mut writer, &response)?;
            writeln!(writer)?;
            writer.flush()?;
            handled += 1;
        }
    }
    Ok(handled)
}
