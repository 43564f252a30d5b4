//! JSON documents: the deployment template and the copy manifest.

use crate::arm::Template;
use crate::error::{Error, Result};
use crate::processing::CopyBlobDetail;
use serde::Serialize;

pub const TEMPLATE_FILE_NAME: &str = "export.json";
pub const COPY_BLOB_DETAILS_FILE_NAME: &str = "copyblobdetails.json";

fn to_pretty_json<T: Serialize + ?Sized>(document: &'static str, value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|source| Error::Serialize { document, source })
}

/// Serialize the template, keeping resources in the order they were built.
pub fn render_template(template: &Template) -> Result<String> {
    to_pretty_json(TEMPLATE_FILE_NAME, template)
}

/// Serialize the copy manifest, or `None` when there is nothing to copy.
pub fn render_copy_blob_details(details: &[CopyBlobDetail]) -> Result<Option<String>> {
    if details.is_empty() {
        return Ok(None);
    }
    to_pretty_json(COPY_BLOB_DETAILS_FILE_NAME, details).map(Some)
}
