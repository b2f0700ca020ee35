//! Pin loaders
//!
//! Pins come either as a JSON array of objects carrying `lat` and `lng`, or
//! as CSV with `latitude,longitude` in the first two columns. Whatever else
//! the file holds is kept as the pin's payload.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::cluster::{PinList, PinRecord};

/// Pin payload as loaded from disk
pub type Payload = Value;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Top level of a JSON pin file has to be an array.
    #[error("expected a JSON array of pins")]
    NotAnArray,

    #[error("unsupported pin file {0:?}, expected .json or .csv")]
    UnsupportedFormat(PathBuf),
}

/// Loads pins from a `.json` or `.csv` file
pub fn load_pins(path: &Path) -> Result<PinList<Payload>, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let pins = match ext.as_deref() {
        Some("json") => read_json_pins(file)?,
        Some("csv") => read_csv_pins(file)?,
        _ => return Err(LoadError::UnsupportedFormat(path.to_path_buf())),
    };
    debug!("loaded {} pins from {:?}", pins.len(), path);
    Ok(pins)
}

/// Reads a JSON array of pin objects
///
/// Each object needs numeric `lat` and `lng` fields; the whole object
/// becomes the payload. Entries without them are skipped.
pub fn read_json_pins<R: Read>(reader: R) -> Result<PinList<Payload>, LoadError> {
    let json: Value = serde_json::from_reader(reader)?;
    let Value::Array(entries) = json else {
        return Err(LoadError::NotAnArray);
    };

    let mut pins = Vec::with_capacity(entries.len());
    for (i, entry) in entries.into_iter().enumerate() {
        let lat = entry.get("lat").and_then(Value::as_f64);
        let lng = entry.get("lng").and_then(Value::as_f64);
        match (lat, lng) {
            (Some(lat), Some(lng)) => pins.push(PinRecord::new(lat, lng, entry)),
            _ => warn!("pin #{i} has no numeric lat/lng, skipped"),
        }
    }

    Ok(pins)
}

/// Reads pins from CSV
///
/// Expected format: `latitude,longitude[,...]` (header row is optional).
/// With a header the payload is an object keyed by column name, without
/// one it is the array of raw cells.
pub fn read_csv_pins<R: Read>(reader: R) -> Result<PinList<Payload>, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        records.push(record.iter().map(|s| s.to_string()).collect::<Vec<String>>());
    }

    let mut pins: PinList<Payload> = Vec::new();
    if records.is_empty() {
        return Ok(pins);
    }

    // Determine if first row is header
    let has_header = records[0]
        .first()
        .is_some_and(|cell| cell.trim().parse::<f64>().is_err());
    let header = if has_header { Some(&records[0]) } else { None };
    let start_idx = if has_header { 1 } else { 0 };

    for (row, record) in records.iter().enumerate().skip(start_idx) {
        if record.len() < 2 {
            warn!("CSV row {row} has fewer than two columns, skipped");
            continue;
        }

        let lat = record[0].trim().parse::<f64>();
        let lng = record[1].trim().parse::<f64>();
        let (Ok(lat), Ok(lng)) = (lat, lng) else {
            warn!("CSV row {row} has no numeric latitude/longitude, skipped");
            continue;
        };

        pins.push(PinRecord::new(lat, lng, csv_payload(header, record)));
    }

    Ok(pins)
}

fn csv_payload(header: Option<&Vec<String>>, record: &[String]) -> Payload {
    match header {
        Some(names) => {
            let mut obj = Map::new();
            for (i, cell) in record.iter().enumerate() {
                let key = names.get(i).cloned().unwrap_or_else(|| format!("column{i}"));
                obj.insert(key, Value::String(cell.clone()));
            }
            Value::Object(obj)
        }
        None => Value::Array(record.iter().cloned().map(Value::String).collect()),
    }
}
