use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("{table} table is missing required column \"{column}\"")]
    MissingColumn { table: String, column: String },

    #[error("{path} has no header row")]
    EmptyTable { path: String },
}
