//! CSV export of the full deck collection.
//!
//! Header row `deck_name,deck_description,front,back`, one data row per
//! card. Every field is double-quoted with internal quotes doubled per
//! RFC4180. Deck grouping is not preserved by a later import (the importer
//! flattens), but the multiset of (front, back) pairs round-trips.

use crate::models::Collection;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const HEADER: &str = "deck_name,deck_description,front,back";

fn escape(field: &str) -> String {
    field.replace('"', "\"\"")
}

/// Renders the collection as CSV text.
///
/// Decks with zero cards still emit one row with empty front/back so the
/// deck itself is visible in the export.
pub fn to_csv(collection: &Collection) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');

    for deck in &collection.decks {
        let name = if deck.name.is_empty() {
            "Untitled Deck"
        } else {
            &deck.name
        };
        let name = escape(name);
        let description = escape(&deck.description);

        if deck.cards.is_empty() {
            out.push_str(&format!("\"{name}\",\"{description}\",\"\",\"\"\n"));
        } else {
            for card in &deck.cards {
                out.push_str(&format!(
                    "\"{name}\",\"{description}\",\"{}\",\"{}\"\n",
                    escape(&card.front),
                    escape(&card.back)
                ));
            }
        }
    }

    out
}

/// Exports the collection to a CSV file at the specified path.
pub fn export_csv_to_path(
    collection: &Collection,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = File::create(path)?;
    file.write_all(to_csv(collection).as_bytes())?;
    Ok(())
}
