//! CLI command implementations.

pub mod areas;
pub mod check_in;
pub mod contacts;
pub mod distance;
pub mod names;

use std::path::{Path, PathBuf};

use marshal_checkin_core::checkin::CheckInError;
use marshal_checkin_core::snapshot::{EventSnapshot, EventSnapshotRecord};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// An input file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An input file was not valid JSON for the expected shape.
    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Output could not be serialized.
    #[error("Failed to write output: {0}")]
    Output(#[from] serde_json::Error),

    /// Neither arguments nor an input file were given.
    #[error("No input given")]
    NoInput,

    /// A referenced record is missing from the snapshot.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// The check-in was rejected.
    #[error("Check-in rejected: {0}")]
    CheckIn(#[from] CheckInError),
}

/// Read a file to a string.
pub async fn read_file(path: &Path) -> Result<String, CommandError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CommandError::Read {
            path: path.to_path_buf(),
            source,
        })
}

/// Read and decode a JSON file.
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CommandError> {
    let content = read_file(path).await?;
    serde_json::from_str(&content).map_err(|source| CommandError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load an event snapshot export.
pub async fn load_snapshot(path: &Path) -> Result<EventSnapshot, CommandError> {
    let record: EventSnapshotRecord = read_json(path).await?;
    let snapshot = EventSnapshot::from(record);
    info!(
        event_id = %snapshot.event_id,
        areas = snapshot.areas.len(),
        locations = snapshot.locations.len(),
        marshals = snapshot.marshals.len(),
        assignments = snapshot.assignments.len(),
        roles = snapshot.event_roles.len(),
        "Loaded event snapshot"
    );
    Ok(snapshot)
}

/// Write a value to stdout as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), CommandError> {
    let json = serde_json::to_string_pretty(value)?;
    print_line(&json);
    Ok(())
}

/// Write one line to stdout.
#[allow(clippy::print_stdout)]
pub fn print_line(line: &str) {
    println!("{line}");
}
