//! Runs an engine operation over every eligible file of a vault
//!
//! # The High-Level Concept
//!
//!     Each file is read, transformed in memory and written back only when the result
//!     differs. Files never share state, so they are processed in parallel with rayon,
//!     each holding its own tree. Failures are collected per file instead of aborting
//!     the run; the caller decides the exit code.
//!
//!     In a dry run nothing is written and every would-be change is returned as a diff.

use crate::diff;
use crate::vault::{self, VaultError};
use mdvault_config::MdvaultConfig;
use mdvault_engine::{
    archive_with_report, format, parse, render_with_rules, ArchiveRules, FormattingRules,
};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Which vault-wide job to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Job {
    Format,
    Archive,
}

impl Job {
    pub fn verb(&self) -> &'static str {
        match self {
            Job::Format => "Formatted",
            Job::Archive => "Archived",
        }
    }
}

/// What happened to one file.
#[derive(Debug)]
pub enum Outcome {
    /// Output equals input, or nothing was eligible to move
    Unchanged,
    /// Not part of the job (an archive run on an untagged note)
    Skipped,
    Written { archived: usize },
    /// Dry run: the change that would have been written
    WouldWrite { archived: usize, diff: String },
}

#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: Result<Outcome, VaultError>,
}

#[derive(Debug)]
pub struct Runner {
    pub formatting: FormattingRules,
    pub archive: ArchiveRules,
    pub tag: String,
    pub extensions: Vec<String>,
    pub dry_run: bool,
}

impl Runner {
    pub fn from_config(config: &MdvaultConfig, dry_run: bool) -> Self {
        Runner {
            formatting: FormattingRules::from(&config.formatting.rules),
            archive: ArchiveRules::from(&config.archive),
            tag: config.archive.tag.clone(),
            extensions: config.vault.extensions.clone(),
            dry_run,
        }
    }

    /// Run `job` over the vault at `root`. Reports come back sorted by path.
    pub fn run(&self, job: Job, root: &Path) -> Result<Vec<FileReport>, VaultError> {
        let files = vault::discover(root, &self.extensions)?;
        log::debug!("{} candidate file(s) under {}", files.len(), root.display());

        let mut reports: Vec<FileReport> = files
            .into_par_iter()
            .map(|path| {
                let outcome = self.run_file(job, &path);
                FileReport { path, outcome }
            })
            .collect();
        reports.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(reports)
    }

    fn run_file(&self, job: Job, path: &Path) -> Result<Outcome, VaultError> {
        let source = vault::read(path)?;
        let (output, archived) = match job {
            Job::Format => (self.format_text(&source), 0),
            Job::Archive => {
                if !vault::has_tag(&source, &self.tag) {
                    log::debug!("{}: no #{} tag, skipping", path.display(), self.tag);
                    return Ok(Outcome::Skipped);
                }
                match self.archive_text(&source) {
                    Some((output, archived)) => (output, archived),
                    None => return Ok(Outcome::Unchanged),
                }
            }
        };

        if output == source {
            return Ok(Outcome::Unchanged);
        }
        if self.dry_run {
            return Ok(Outcome::WouldWrite {
                archived,
                diff: diff::unified(path, &source, &output),
            });
        }
        vault::write_atomic(path, &output)?;
        log::info!("{} {}", job.verb(), path.display());
        Ok(Outcome::Written { archived })
    }

    /// Canonical text of `source`.
    pub fn format_text(&self, source: &str) -> String {
        render_with_rules(&format(&parse(source)), &self.formatting)
    }

    /// Archived and formatted text of `source`, with the number of items moved.
    /// `None` when nothing was complete.
    pub fn archive_text(&self, source: &str) -> Option<(String, usize)> {
        let report = archive_with_report(&parse(source), &self.archive);
        if report.archived == 0 {
            return None;
        }
        let text = render_with_rules(&format(&report.document), &self.formatting);
        Some((text, report.archived))
    }
}
