use thiserror::Error;

/// Failure while rendering a word list into one of the export formats.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("could not flush csv writer: {0}")]
    CsvFlush(#[from] csv::IntoInnerError<csv::Writer<Vec<u8>>>),
    #[error("write error: {0}")]
    Io(#[from] std::io::Error),
    #[error("export is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
