use crate::error::{BumpyError, Result, Warning};
use crate::locator::{self, VersionRecord};
use crate::rewriter;
use crate::version::VersionTriple;
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Per-file result of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Written,
    /// Excluded from the write set before any write was attempted.
    Skipped,
    /// The write itself failed; other files are unaffected.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub path: PathBuf,
    pub old: VersionTriple,
    pub new: VersionTriple,
    pub outcome: Outcome,
}

/// Ordered outcome of one bump or explicit-set run. Entry order matches
/// configuration order.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub entries: Vec<ReportEntry>,
    pub warnings: Vec<Warning>,
}

/// Holds the version records discovered from the configured files and
/// drives bump and explicit-set runs across them.
///
/// All new values are computed and validated before any file is written
/// (compute-then-commit); writes across files stay independent, so one
/// failed write never rolls back or blocks another.
#[derive(Debug)]
pub struct Engine {
    records: Vec<VersionRecord>,
    warnings: Vec<Warning>,
}

impl Engine {
    /// Scan the configured files in order and build one [`VersionRecord`]
    /// per file with a quoted version literal. Missing files and files
    /// without a literal produce warnings and are skipped; an empty result
    /// set is fatal. This phase performs no writes.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut records = Vec::new();
        let mut warnings = Vec::new();

        for path in paths {
            let path = path.as_ref();
            if !path.is_file() {
                warn!("File '{}' not found", path.display());
                warnings.push(Warning::FileNotFound(path.to_path_buf()));
                continue;
            }
            let contents = match std::fs::read_to_string(path) {
                Ok(contents) => contents,
                Err(err) => {
                    warn!("Failed to read '{}': {}", path.display(), err);
                    warnings.push(Warning::FileNotFound(path.to_path_buf()));
                    continue;
                }
            };
            match locator::locate(&contents) {
                Some(located) => {
                    debug!("Found version {} in '{}'", located.triple, path.display());
                    records.push(VersionRecord::new(path.to_path_buf(), located));
                }
                None => {
                    warn!("No version literal in '{}'", path.display());
                    warnings.push(Warning::NoVersionLiteral(path.to_path_buf()));
                }
            }
        }

        if records.is_empty() {
            return Err(BumpyError::NoVersionsFound);
        }
        Ok(Engine { records, warnings })
    }

    /// Records discovered during the load phase, in configuration order.
    pub fn records(&self) -> &[VersionRecord] {
        &self.records
    }

    /// Warnings collected during the load phase.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Bump every record by the given deltas. Each file's new value is
    /// computed from its own current triple, so files with differing
    /// versions stay independent.
    pub fn bump(&self, major: u64, minor: u64, patch: u64) -> Report {
        let targets: Vec<_> = self
            .records
            .iter()
            .map(|record| (record, record.triple.bump(major, minor, patch)))
            .collect();
        self.commit(targets)
    }

    /// Set every record to the same explicit value, re-quoted per file.
    /// The requested string must be a bare `digits.digits.digits` value;
    /// re-prompting on failure is the caller's concern.
    pub fn apply_explicit(&self, requested: &str) -> Result<Report> {
        let triple = locator::validate_bare(requested)
            .ok_or_else(|| BumpyError::BadFormat(requested.to_string()))?;
        let targets: Vec<_> = self.records.iter().map(|record| (record, triple)).collect();
        Ok(self.commit(targets))
    }

    /// Two-phase commit: re-validate every planned literal against the
    /// version pattern first, then rewrite file by file. A record whose
    /// re-quoted value fails validation is skipped with a warning; the run
    /// continues for the rest.
    fn commit(&self, targets: Vec<(&VersionRecord, VersionTriple)>) -> Report {
        let mut planned = Vec::with_capacity(targets.len());
        let mut warnings = Vec::new();

        for (record, new) in targets {
            let literal = record.requote(new);
            if locator::locate(&literal).is_some() {
                planned.push((record, new, Some(literal)));
            } else {
                warn!(
                    "Computed version {} for '{}' failed validation, skipping",
                    new,
                    record.path.display()
                );
                warnings.push(Warning::InvalidResult(record.path.clone()));
                planned.push((record, new, None));
            }
        }

        let mut entries = Vec::with_capacity(planned.len());
        for (record, new, literal) in planned {
            let outcome = match literal {
                Some(literal) => {
                    match rewriter::rewrite(&record.path, &record.raw_literal, &literal) {
                        Ok(()) => Outcome::Written,
                        Err(err) => {
                            warn!("Failed to write '{}': {}", record.path.display(), err);
                            Outcome::Failed(err.to_string())
                        }
                    }
                }
                None => Outcome::Skipped,
            };
            entries.push(ReportEntry {
                path: record.path.clone(),
                old: record.triple,
                new,
                outcome,
            });
        }

        Report { entries, warnings }
    }
}
