//! JSON export of the full deck collection.
//!
//! The output is the canonical Deck/Card shape, so exporting and importing
//! the same file reproduces equivalent decks (modulo id reassignment on the
//! import side).

use crate::models::Collection;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Pretty-printed JSON for the whole collection.
pub fn to_json(collection: &Collection) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(collection)
}

/// Exports the collection to a JSON file at the specified path.
pub fn export_json_to_path(
    collection: &Collection,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_string = to_json(collection)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;
    Ok(())
}
