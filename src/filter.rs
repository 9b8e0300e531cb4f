//! Component selection by file name.
//! `--only` patterns are compiled into a glob set; an empty filter selects everything.

use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;

/// Compiled `--only` patterns.
#[derive(Debug, Clone)]
pub struct ComponentFilter {
    globs: Option<GlobSet>,
}

impl ComponentFilter {
    /// Compiles the given glob patterns.
    ///
    /// # Errors
    /// * `Error::FilterError` if a pattern is not a valid glob
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        if patterns.is_empty() {
            return Ok(Self::all());
        }

        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            debug!("Adding filter pattern: {pattern}");
            builder.add(Glob::new(pattern).map_err(|e| {
                Error::FilterError(format!("invalid pattern '{pattern}': {e}"))
            })?);
        }
        let globs = builder
            .build()
            .map_err(|e| Error::FilterError(format!("filter build failed: {e}")))?;

        Ok(Self { globs: Some(globs) })
    }

    /// A filter that accepts every file.
    pub fn all() -> Self {
        Self { globs: None }
    }

    pub fn allows(&self, file_name: &str) -> bool {
        self.globs.as_ref().map_or(true, |globs| globs.is_match(file_name))
    }
}

impl Default for ComponentFilter {
    fn default() -> Self {
        Self::all()
    }
}
