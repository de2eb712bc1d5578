//! Core pipeline orchestration: resolve sources, build entries, render the
//! template and write the result.

use std::io::{Read, Write};

use chrono::{DateTime, Local, TimeZone};
use log::{debug, warn};

use crate::config::{Config, OutputTarget};
use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::output::write_output;
use crate::renderer::{render_source, GenerationContext, TemplateRenderer};
use crate::resolver::{resolve_sources, Source};

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Number of constants written
    pub entries: usize,
    /// Patterns and sources that were reported and skipped
    pub skipped: usize,
    pub output: OutputTarget,
}

/// Drives one generation run.
pub struct Generator<'a> {
    /// Template engine rendering the output
    engine: &'a dyn TemplateRenderer,
    config: &'a Config,
}

impl<'a> Generator<'a> {
    pub fn new(engine: &'a dyn TemplateRenderer, config: &'a Config) -> Self {
        Self { engine, config }
    }

    /// Runs the pipeline stamped with the current local time.
    pub fn generate(&self, stdin: &mut dyn Read, stdout: &mut dyn Write) -> Result<Summary> {
        self.generate_at(&Local::now(), stdin, stdout)
    }

    /// Runs the pipeline.
    ///
    /// # Arguments
    /// * `now` - Generation time written to the header
    /// * `stdin` - Read when no patterns were given
    /// * `stdout` - Receives the output when the target is `-`
    ///
    /// # Errors
    /// * `Error::NoFilesError` if patterns were given and none resolved; nothing is written
    /// * `Error::IoError` if the output cannot be written
    pub fn generate_at<Tz: TimeZone>(
        &self,
        now: &DateTime<Tz>,
        stdin: &mut dyn Read,
        stdout: &mut dyn Write,
    ) -> Result<Summary>
    where
        Tz::Offset: std::fmt::Display,
    {
        let resolution = resolve_sources(&self.config.patterns);
        let mut skipped = resolution.skipped_patterns();
        for problem in &resolution.problems {
            warn!("{}", problem);
        }
        if resolution.sources.is_empty() {
            return Err(Error::NoFilesError {
                patterns: self.config.patterns.clone(),
            });
        }

        let entries = self.build_entries(&resolution.sources, stdin, &mut skipped);
        let context = GenerationContext::new(now, &self.config.package, entries);
        let source = render_source(self.engine, &context)?;

        write_output(&self.config.output, &source, stdout)?;
        debug!(
            "Wrote {} constant(s) to {}",
            context.entries.len(),
            self.config.output
        );

        Ok(Summary {
            entries: context.entries.len(),
            skipped,
            output: self.config.output.clone(),
        })
    }

    /// Builds an entry per source, logging and skipping sources that fail.
    fn build_entries(
        &self,
        sources: &[Source],
        stdin: &mut dyn Read,
        skipped: &mut usize,
    ) -> Vec<Entry> {
        let mut entries = Vec::with_capacity(sources.len());
        for source in sources {
            debug!("Processing source file: {}", source);
            match Entry::build(source, stdin, self.config.encoding, self.config.naming) {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    warn!("{}", e);
                    *skipped += 1;
                }
            }
        }
        entries
    }
}
