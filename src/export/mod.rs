pub mod csv;
pub mod json;

pub use csv::{export_csv_to_path, to_csv};
pub use json::{export_json_to_path, to_json};
