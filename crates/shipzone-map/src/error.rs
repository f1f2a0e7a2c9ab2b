use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("map template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("marker serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write map {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
