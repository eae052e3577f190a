use crate::models::{DEFAULT_ORDER_FILE, ModEntry, ModList};
use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexSet;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use thiserror::Error;

/// Line terminator used in the order file.
///
/// The order file is plain text, so it follows the platform text convention.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Prompt shown once per refresh when some folder names need normalizing
pub const RENAME_PROMPT: &str = "Some folder names contain white-spaces. Rename them?";

/// Errors that can occur while scanning, renaming or writing
///
/// None of these are fatal to the process; the caller reports them and goes
/// back to waiting for the next user action.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Cannot read directory {path}: {source}")]
    DirectoryUnreadable {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Folder not found. Cannot rename {name}")]
    RenameSourceMissing { name: String },

    #[error("Error renaming folder {from} to {to}: {cause}")]
    RenameFailed {
        from: String,
        to: String,
        cause: String,
    },

    #[error("Cannot rename {from} to {to}: a folder or file with that name already exists")]
    RenameCollision { from: String, to: String },

    #[error("Folder {name} was left out of the list: its name is not valid Unicode")]
    NonUnicodeName { name: String },

    #[error("Failed to write {path}: {source}")]
    FileWriteError {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Yes/no decision supplied by the caller.
///
/// The pipeline calls this synchronously and does not continue until it
/// returns. The UI answers it with a modal dialog; tests inject
/// [`FixedAnswer`].
#[cfg_attr(test, mockall::automock)]
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

/// A [`Confirm`] that always gives the same answer
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Confirm for FixedAnswer {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

/// What happened to the confirmation question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameDecision {
    /// No entry needed normalizing, so nobody was asked
    NothingToRename,
    /// The caller said no; names are left as they are
    Declined,
    /// The caller said yes; renames were attempted
    Accepted,
}

/// A rename that was applied on disk and in the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedRename {
    pub index: usize,
    pub from: String,
    pub to: String,
}

/// Outcome of [`ModPipeline::normalize_names`]
#[derive(Debug)]
pub struct NormalizeReport {
    pub decision: RenameDecision,
    pub renamed: Vec<AppliedRename>,
    pub failures: Vec<PipelineError>,
}

impl NormalizeReport {
    fn new(decision: RenameDecision) -> Self {
        Self {
            decision,
            renamed: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Outcome of [`ModPipeline::scan_report`]
#[derive(Debug, Default)]
pub struct ScanReport {
    pub list: ModList,
    /// Folders that exist but could not be listed, one
    /// [`PipelineError::NonUnicodeName`] each
    pub skipped: Vec<PipelineError>,
}

/// Outcome of [`ModPipeline::refresh`]
#[derive(Debug)]
pub struct RefreshOutcome {
    pub list: ModList,
    pub skipped: Vec<PipelineError>,
    pub report: NormalizeReport,
}

/// Discovers mod folders, normalizes their names and persists the order file.
///
/// All operations are synchronous and run to completion on the calling
/// thread. The pipeline holds no list of its own; the caller owns the
/// [`ModList`] and passes it in, so a writer can never observe a list that is
/// halfway through a rebuild.
#[derive(Debug, Clone)]
pub struct ModPipeline {
    base_dir: Utf8PathBuf,
    order_file_name: String,
}

impl ModPipeline {
    /// Create a pipeline rooted at `base_dir`, writing [`DEFAULT_ORDER_FILE`].
    pub fn new(base_dir: impl Into<Utf8PathBuf>) -> Self {
        Self::with_order_file(base_dir, DEFAULT_ORDER_FILE)
    }

    /// Create a pipeline that writes a differently named order file.
    ///
    /// `order_file_name` must be a bare file name; see
    /// [`ToolSettings::order_file_name`](crate::models::ToolSettings::order_file_name).
    pub fn with_order_file(base_dir: impl Into<Utf8PathBuf>, order_file_name: &str) -> Self {
        Self {
            base_dir: base_dir.into(),
            order_file_name: order_file_name.to_string(),
        }
    }

    pub fn base_dir(&self) -> &Utf8Path {
        &self.base_dir
    }

    /// Full path of the order file
    pub fn order_file_path(&self) -> Utf8PathBuf {
        self.base_dir.join(&self.order_file_name)
    }

    /// Enumerate the immediate subdirectories of the base directory.
    ///
    /// Regular files are skipped. Symlinks count if they resolve to a
    /// directory. The list keeps the order the filesystem reports, which is
    /// platform defined. Folders whose names are not valid Unicode are left
    /// out; use [`scan_report`](Self::scan_report) to find out which.
    ///
    /// # Errors
    ///
    /// [`PipelineError::DirectoryUnreadable`] if the directory cannot be opened
    /// or an entry cannot be read during enumeration.
    pub fn scan(&self) -> Result<ModList, PipelineError> {
        self.scan_report().map(|report| report.list)
    }

    /// Like [`scan`](Self::scan), but also returns the folders that were
    /// left out.
    ///
    /// A name that is not valid Unicode cannot be written to the UTF-8 order
    /// file, so the folder is reported as [`PipelineError::NonUnicodeName`]
    /// with a lossy rendering of its name.
    pub fn scan_report(&self) -> Result<ScanReport, PipelineError> {
        let unreadable = |source: io::Error| PipelineError::DirectoryUnreadable {
            path: self.base_dir.clone(),
            source,
        };

        let mut report = ScanReport::default();

        for entry in fs::read_dir(&self.base_dir).map_err(unreadable)? {
            let entry = entry.map_err(unreadable)?;

            if !entry.path().is_dir() {
                continue;
            }

            match entry.file_name().into_string() {
                Ok(name) => report.list.push(ModEntry::new(name)),
                Err(raw) => {
                    let name = raw.to_string_lossy().into_owned();
                    tracing::warn!("Skipping folder with non-Unicode name: {:?}", raw);
                    report.skipped.push(PipelineError::NonUnicodeName { name });
                }
            }
        }

        tracing::info!(
            "Scanned {}: found {} mod folders, skipped {}",
            self.base_dir,
            report.list.len(),
            report.skipped.len()
        );
        Ok(report)
    }

    /// Strip spaces and underscores from folder names, on disk and in `list`.
    ///
    /// If any entry needs normalizing, `confirm` is asked exactly once. On a
    /// "no" nothing is touched. On a "yes" every such entry is renamed in
    /// list order; a failed entry is recorded in the report and the
    /// remaining entries are still attempted. An entry is never renamed onto a
    /// name that another entry in the list already has, or onto anything that
    /// already exists in the base directory.
    pub fn normalize_names(&self, list: &mut ModList, confirm: &dyn Confirm) -> NormalizeReport {
        let pending = list.pending_normalization();
        if pending.is_empty() {
            return NormalizeReport::new(RenameDecision::NothingToRename);
        }

        if !confirm.confirm(RENAME_PROMPT) {
            tracing::info!(
                "Rename declined, {} folder names left unnormalized",
                pending.len()
            );
            return NormalizeReport::new(RenameDecision::Declined);
        }

        let mut report = NormalizeReport::new(RenameDecision::Accepted);

        for index in pending {
            let Some(entry) = list.get(index) else {
                continue;
            };
            let from = entry.name().to_string();
            let to = entry.normalized_name();

            match self.rename_entry(list, index, &from, &to) {
                Ok(()) => {
                    list.rename_at(index, to.clone());
                    tracing::info!("Renamed folder {} -> {}", from, to);
                    report.renamed.push(AppliedRename { index, from, to });
                }
                Err(e) => {
                    tracing::warn!("{}", e);
                    report.failures.push(e);
                }
            }
        }

        tracing::info!(
            "Normalization finished: {} renamed, {} failed",
            report.renamed.len(),
            report.failures.len()
        );
        report
    }

    /// Rename one folder on disk after checking it is safe to do so
    fn rename_entry(
        &self,
        list: &ModList,
        index: usize,
        from: &str,
        to: &str,
    ) -> Result<(), PipelineError> {
        let old_path = self.base_dir.join(from);
        if !old_path.exists() {
            return Err(PipelineError::RenameSourceMissing {
                name: from.to_string(),
            });
        }

        if to.is_empty() {
            return Err(PipelineError::RenameFailed {
                from: from.to_string(),
                to: to.to_string(),
                cause: "normalized name would be empty".to_string(),
            });
        }

        let new_path = self.base_dir.join(to);
        let taken: IndexSet<&str> = list
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, e)| e.name())
            .collect();

        if taken.contains(to) || new_path.symlink_metadata().is_ok() {
            return Err(PipelineError::RenameCollision {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        fs::rename(&old_path, &new_path).map_err(|e| PipelineError::RenameFailed {
            from: from.to_string(),
            to: to.to_string(),
            cause: e.to_string(),
        })
    }

    /// Write one name per line to the order file, in list order.
    ///
    /// The file is created or truncated. There is no atomic replace: if the
    /// write fails part way, the old contents may already be gone. An empty
    /// list produces an empty file.
    ///
    /// # Returns
    /// The path that was written
    pub fn write_order_file(&self, list: &ModList) -> Result<Utf8PathBuf, PipelineError> {
        let path = self.order_file_path();

        let write = || -> io::Result<()> {
            let mut writer = BufWriter::new(File::create(&path)?);
            for entry in list {
                writer.write_all(entry.name().as_bytes())?;
                writer.write_all(LINE_ENDING.as_bytes())?;
            }
            writer.into_inner().map_err(|e| e.into_error())?.sync_all()
        };

        write().map_err(|source| PipelineError::FileWriteError {
            path: path.clone(),
            source,
        })?;

        tracing::info!("Wrote {} entries to {}", list.len(), path);
        Ok(path)
    }

    /// Scan, then normalize with a single confirmation.
    ///
    /// Returns the fresh list together with the skipped folders and the
    /// rename report. On error no list is produced.
    pub fn refresh(&self, confirm: &dyn Confirm) -> Result<RefreshOutcome, PipelineError> {
        let ScanReport { mut list, skipped } = self.scan_report()?;
        let report = self.normalize_names(&mut list, confirm);
        Ok(RefreshOutcome {
            list,
            skipped,
            report,
        })
    }
}
