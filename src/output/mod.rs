//! Rendering and writing the output documents of a generation.
//!
//! - [`documents`] - template and copy manifest JSON
//! - [`instructions`] - deployment instructions
//! - [`terminal`] - alert and summary printing for the CLI

mod documents;
mod instructions;
mod terminal;

pub use documents::{
    render_copy_blob_details, render_template, COPY_BLOB_DETAILS_FILE_NAME, TEMPLATE_FILE_NAME,
};
pub use instructions::{
    load_instructions_template, render_instructions, render_messages, InstructionValues,
    INSTRUCTIONS_FILE_NAME,
};
pub use terminal::{alert_line, print_alerts, print_summary};

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::models::Selection;
use crate::processing::{Generation, StatusProvider};
use std::path::{Path, PathBuf};

/// The three output documents of one run, as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutput {
    pub template: String,
    /// `None` when no disk needs copying.
    pub copy_blob_details: Option<String>,
    pub instructions: String,
}

/// Render every output document of `generation`.
///
/// # Arguments
/// * `generation` - The finished run
/// * `selection` - Supplies resource group and target subscription details
/// * `settings` - Output directory, install path and instructions template
/// * `status` - Progress sink
pub fn render(
    generation: &Generation,
    selection: &Selection,
    settings: &Settings,
    status: &dyn StatusProvider,
) -> Result<RenderedOutput> {
    status.update_status(&format!("BUSY: Generating {TEMPLATE_FILE_NAME}"));
    let template = render_template(&generation.template)?;

    status.update_status(&format!("BUSY: Generating {COPY_BLOB_DETAILS_FILE_NAME}"));
    let copy_blob_details = render_copy_blob_details(&generation.copy_blob_details)?;

    status.update_status(&format!("BUSY: Generating {INSTRUCTIONS_FILE_NAME}"));
    let values = InstructionValues::new(
        selection.target_subscription.as_ref(),
        selection.resource_group.as_ref(),
        &generation.alerts,
        settings,
        &settings.output_directory,
    );
    let instructions = render_instructions(&load_instructions_template(settings)?, &values);

    status.update_status("Ready");
    Ok(RenderedOutput {
        template,
        copy_blob_details,
        instructions,
    })
}

impl RenderedOutput {
    /// Write the documents into `directory`, creating it if needed.
    ///
    /// # Returns
    /// The paths written, template first
    pub fn write_to(&self, directory: &Path) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(directory).map_err(|source| Error::Io {
            path: directory.to_path_buf(),
            source,
        })?;

        let mut documents = vec![(TEMPLATE_FILE_NAME, &self.template)];
        if let Some(copy_blob_details) = &self.copy_blob_details {
            documents.push((COPY_BLOB_DETAILS_FILE_NAME, copy_blob_details));
        }
        documents.push((INSTRUCTIONS_FILE_NAME, &self.instructions));

        let mut written = Vec::with_capacity(documents.len());
        for (file_name, contents) in documents {
            let path = directory.join(file_name);
            std::fs::write(&path, contents).map_err(|source| Error::Io {
                path: path.clone(),
                source,
            })?;
            log::info!("Wrote {}", path.display());
            written.push(path);
        }
        Ok(written)
    }
}
