//! Generation driver: ensures each set's directory, renders every component and
//! writes it to disk, collecting per-file outcomes into a [`Report`].

use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    component::{ComponentDescriptor, GeneratorSet},
    error::{Error, Result},
    filter::ComponentFilter,
    prompt::Prompter,
    renderer::{render_component, TemplateRenderer},
};

/// Creates `path` and any missing parents. Succeeds if the directory already exists.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    debug!("Ensuring directory: {}", path.display());
    fs::create_dir_all(path).map_err(Error::IoError)
}

/// Creates or truncates `path` and writes `content`. Parent directories are not created.
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    fs::write(path, content).map_err(Error::IoError)
}

/// What to do when a single entry fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Record the failure and keep going
    #[default]
    Continue,
    /// Stop at the first failure
    Abort,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessorOptions {
    pub policy: ErrorPolicy,
    pub dry_run: bool,
}

/// A path that could not be generated.
#[derive(Debug)]
pub struct Failure {
    pub path: PathBuf,
    pub error: Error,
}

/// Outcome of a generation run.
#[derive(Debug, Default)]
pub struct Report {
    /// Files written, or that would have been written on a dry run
    pub created: Vec<PathBuf>,
    /// Existing files the user chose not to overwrite
    pub skipped: Vec<PathBuf>,
    pub failures: Vec<Failure>,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Turns recorded failures into `Error::GenerationFailed`.
    pub fn into_result(self) -> Result<Self> {
        if self.is_success() {
            return Ok(self);
        }
        Err(Error::GenerationFailed {
            failed: self.failures.len(),
            total: self.created.len() + self.skipped.len() + self.failures.len(),
        })
    }
}

enum Outcome {
    Created,
    Skipped,
}

pub struct Processor<'a> {
    renderer: &'a dyn TemplateRenderer,
    /// Consulted before overwriting; `None` overwrites unconditionally
    prompter: Option<&'a dyn Prompter>,
    filter: &'a ComponentFilter,
    options: ProcessorOptions,
}

impl<'a> Processor<'a> {
    pub fn new(
        renderer: &'a dyn TemplateRenderer,
        prompter: Option<&'a dyn Prompter>,
        filter: &'a ComponentFilter,
        options: ProcessorOptions,
    ) -> Self {
        Self {
            renderer,
            prompter,
            filter,
            options,
        }
    }

    /// Generates every set under `root`.
    ///
    /// # Errors
    /// Only with `ErrorPolicy::Abort`, returning the first failure. Under `Continue`
    /// failures end up in the returned report.
    pub fn generate<P: AsRef<Path>>(&self, sets: &[GeneratorSet], root: P) -> Result<Report> {
        let mut report = Report::default();
        for set in sets {
            self.generate_set(set, root.as_ref(), &mut report)?;
        }
        Ok(report)
    }

    fn generate_set(&self, set: &GeneratorSet, root: &Path, report: &mut Report) -> Result<()> {
        let dir = root.join(&set.dir);
        info!("Generating {} set into {}", set.kind, dir.display());

        if !self.options.dry_run {
            if let Err(error) = ensure_dir(&dir) {
                self.record(report, dir, error)?;
                return Ok(());
            }
        }

        for component in &set.components {
            if !self.filter.allows(&component.file_name) {
                debug!("Skipping {} (not selected)", component.file_name);
                continue;
            }

            let path = dir.join(&component.file_name);
            match self.generate_component(component, &path) {
                Ok(Outcome::Created) => {
                    if self.options.dry_run {
                        println!("Would create: {}", path.display());
                    } else {
                        println!("Created: {}", path.display());
                    }
                    report.created.push(path);
                }
                Ok(Outcome::Skipped) => {
                    println!("Skipped: {}", path.display());
                    report.skipped.push(path);
                }
                Err(error) => self.record(report, path, error)?,
            }
        }
        Ok(())
    }

    fn generate_component(&self, component: &ComponentDescriptor, path: &Path) -> Result<Outcome> {
        let content = render_component(self.renderer, component)?;
        debug!("Rendered {} ({} bytes)", component.name, content.len());

        if self.options.dry_run {
            return Ok(Outcome::Created);
        }

        if let Some(prompter) = self.prompter {
            if path.exists() && !prompter.confirm_overwrite(path)? {
                return Ok(Outcome::Skipped);
            }
        }

        write_file(path, &content)?;
        Ok(Outcome::Created)
    }

    /// Stores a failure, or hands it back when the policy is to abort.
    fn record(&self, report: &mut Report, path: PathBuf, error: Error) -> Result<()> {
        eprintln!("Failed: {}: {}", path.display(), error);
        if self.options.policy == ErrorPolicy::Abort {
            return Err(error);
        }
        report.failures.push(Failure { path, error });
        Ok(())
    }
}
