use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("failed to create report directory {path}: {source}")]
    ReportDirIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("refusing to write a report with no records")]
    NoRecords,
}
