pub mod criterion;
pub mod element;
pub mod report;
pub mod supplier;

pub use criterion::SortCriterion;
pub use element::{ModelElement, UNKNOWN};
pub use report::{ElementRecord, ReportRow, REPORT_COLUMNS};
pub use supplier::{SupplierOffer, SupplierRow, REQUIRED_COLUMNS};
