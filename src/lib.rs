//! Generates resource-manager deployment templates for resources selected for
//! migration from the legacy deployment model.
//!
//! - [`models`] - the selected resources
//! - [`processing`] - validation and template synthesis
//! - [`arm`] - the template document model
//! - [`output`] - rendering and writing the output documents

pub mod arm;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use config::{BuildMode, Settings};
pub use error::{Error, Result};
pub use models::Selection;
pub use output::{render, RenderedOutput};
pub use processing::{generate, Generation, GenerationSummary, LogStatus, StatusProvider};
