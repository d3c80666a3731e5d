pub mod error;
pub mod workbook;

pub use error::ReportError;
pub use workbook::write_report;
