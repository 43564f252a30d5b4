//! Error types for loading selections and rendering output.
//!
//! Problems with the selection itself are reported as [`crate::models::Alert`]s,
//! not as errors.

use std::path::PathBuf;

/// Failures that stop a run from producing output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A file could not be read or written.
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A selection document is not valid JSON for the reference model.
    #[error("error parsing {path}: path={json_path} error={message}")]
    Parse {
        path: PathBuf,
        json_path: String,
        message: String,
    },

    /// An output document could not be serialized.
    #[error("error serializing {document}: {source}")]
    Serialize {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A setting has a value outside its allowed set.
    #[error("invalid setting {name}={value}")]
    Setting { name: String, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
