//! Marshal name expansion for CSV imports.
//!
//! # Usage
//!
//! ```bash
//! # Expand cells given on the command line
//! checkin names "Mike and Jenna Jones" "Killian Murphy + 2"
//!
//! # Expand one cell per line from a file, as JSON
//! checkin names --file names.txt --json
//! ```

use std::path::Path;

use marshal_checkin_core::names::expand_marshal_names;
use serde::Serialize;
use tracing::info;

use super::{CommandError, print_json, print_line, read_file};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExpandedCell<'a> {
    input: &'a str,
    names: Vec<String>,
}

/// Expand each cell into individual marshal names.
///
/// # Errors
///
/// Returns an error if the file cannot be read or no cells were given.
pub async fn expand(cells: &[String], file: Option<&Path>, json: bool) -> Result<(), CommandError> {
    let file_content = match file {
        Some(path) => Some(read_file(path).await?),
        None => None,
    };

    let inputs: Vec<&str> = cells
        .iter()
        .map(String::as_str)
        .chain(file_content.iter().flat_map(|content| content.lines()))
        .filter(|line| !line.trim().is_empty())
        .collect();

    if inputs.is_empty() {
        return Err(CommandError::NoInput);
    }

    let expanded: Vec<ExpandedCell<'_>> = inputs
        .into_iter()
        .map(|input| ExpandedCell {
            input,
            names: expand_marshal_names(input),
        })
        .collect();

    let total: usize = expanded.iter().map(|cell| cell.names.len()).sum();
    info!(cells = expanded.len(), names = total, "Expanded marshal names");

    if json {
        return print_json(&expanded);
    }

    for name in expanded.iter().flat_map(|cell| &cell.names) {
        print_line(name);
    }
    Ok(())
}
