use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::Combo;
use crate::error::GrooveResult;

/// Reads a combo library from a JSON array. Validation is a separate step
/// (`library::validate_library`) so callers can decide how strict to be.
pub fn load_library<R: Read>(reader: R) -> GrooveResult<Vec<Combo>> {
    let combos = serde_json::from_reader(reader)?;
    Ok(combos)
}

pub fn load_library_file<P: AsRef<Path>>(path: P) -> GrooveResult<Vec<Combo>> {
    let file = File::open(path)?;
    load_library(BufReader::new(file))
}
