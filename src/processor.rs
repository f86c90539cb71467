//! Runs a request: resolve every document, confirm when the request asks
//! for it, then write the files under the context output root.

use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    context::Context,
    error::{Error, Result},
    generator::Request,
    prompt::Prompter,
};

pub struct Processor<'a> {
    prompt: &'a dyn Prompter,
    context: &'a Context,
    skip_confirm: bool,
}

impl<'a> Processor<'a> {
    pub fn new(prompt: &'a dyn Prompter, context: &'a Context, skip_confirm: bool) -> Self {
        Self {
            prompt,
            context,
            skip_confirm,
        }
    }

    /// Generates and writes all documents of `request`.
    ///
    /// # Returns
    /// * `Result<Vec<PathBuf>>` - Written files, empty when the user declined
    ///
    /// # Errors
    /// * `Error::ContextError` if the request belongs to another category
    /// * Any generation error, before anything is written
    /// * `Error::IoError` while writing
    pub fn process(&self, request: &Request) -> Result<Vec<PathBuf>> {
        if request.category() != self.context.category {
            return Err(Error::ContextError(format!(
                "this command must be run in {}, not {}",
                request.category().expected_layout(),
                self.context.category.expected_layout()
            )));
        }

        let documents = request.generate(self.context)?;
        let rendered = documents
            .iter()
            .map(|doc| -> Result<(PathBuf, String)> {
                Ok((self.context.output_root.join(&doc.path), doc.render()?))
            })
            .collect::<Result<Vec<_>>>()?;

        if let Some(lines) = request.summary(self.context) {
            for line in lines {
                println!("{line}");
            }
            if !self.prompt.confirm(self.skip_confirm, "Is this okay?".to_string())? {
                info!("Declined, nothing written");
                return Ok(Vec::new());
            }
        }

        let mut written = Vec::with_capacity(rendered.len());
        for (target, content) in rendered {
            write_file(&target, &content)?;
            debug!("Wrote {}", target.display());
            written.push(target);
        }
        Ok(written)
    }
}

/// Writes `content`, creating missing parent directories first.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    fs::write(path, content).map_err(Error::IoError)
}
