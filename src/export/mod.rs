pub mod csv;

pub use crate::error::ExportError;
pub use self::csv::{export_csv, report_file_name, report_path, write_rows};
