/*!
 * Directory traversal and aggregation
 *
 * The scanner walks the root top-down. In each directory it writes every
 * matching file first, then descends into the subdirectories that survive
 * the exclusion set. Excluded subtrees are pruned before recursion, so
 * nothing below them is ever listed.
 */

use std::fs;
use std::io::Write;
use std::path::{self, Path};
use std::sync::Arc;
use std::time::Instant;

use indicatif::ProgressBar;
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::ensure;
use crate::error::{Result, SrcDumpError};
use crate::types::{ReadFailure, RunState, ScanOutcome, ScanStatistics};
use crate::utils::{has_allowed_extension, is_excluded_dir, relative_path};
use crate::writer::DumpWriter;

/// Scanner for one run over a directory tree
pub struct Scanner {
    /// Scanner configuration
    config: Config,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
    /// Current lifecycle state
    state: RunState,
    /// Scanner statistics
    statistics: ScanStatistics,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self {
            config,
            progress,
            state: RunState::NotStarted,
            statistics: ScanStatistics::default(),
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Get scanner statistics
    pub fn get_statistics(&self) -> ScanStatistics {
        self.statistics.clone()
    }

    /// Scan the target directory into the output file.
    ///
    /// Fails with [`SrcDumpError::InvalidRoot`] before the output is touched
    /// when the root is not a directory, and with
    /// [`SrcDumpError::OutputOpen`] when the output cannot be created.
    /// Unreadable files are recorded inline and do not abort the run.
    pub fn run(&mut self) -> Result<ScanOutcome> {
        ensure!(
            !self.state.is_terminal(),
            Unexpected,
            "scanner cannot be run again from state {:?}",
            self.state
        );

        let result = self.execute();
        self.state = if result.is_ok() {
            RunState::Completed
        } else {
            RunState::Failed
        };
        result
    }

    fn execute(&mut self) -> Result<ScanOutcome> {
        let start_time = Instant::now();

        self.config.validate()?;
        let mut writer = DumpWriter::create(&self.config.output_file)?;
        self.state = RunState::Scanning;

        let root = self.config.target_dir.clone();
        let entries = list_directory(&root)
            .map_err(|e| SrcDumpError::Traversal(format!("{}: {}", root.display(), e)))?;
        self.scan_entries(entries, &mut writer)?;

        self.statistics.content_bytes = writer.content_bytes();
        // Dropping the flushed BufWriter closes the file
        drop(writer.finish()?);

        let output_file = path::absolute(&self.config.output_file).map_err(|e| {
            SrcDumpError::Unexpected(format!(
                "cannot resolve {}: {}",
                self.config.output_file.display(),
                e
            ))
        })?;

        Ok(ScanOutcome {
            files_processed: self.statistics.files_processed,
            output_file,
            statistics: self.statistics.clone(),
            duration: start_time.elapsed(),
        })
    }

    /// Scan a subdirectory, skipping it when it cannot be listed
    fn scan_directory<W: Write>(&mut self, dir: &Path, writer: &mut DumpWriter<W>) -> Result<()> {
        match list_directory(dir) {
            Ok(entries) => self.scan_entries(entries, writer),
            Err(e) => {
                self.progress
                    .suspend(|| log::warn!("Skipping unreadable directory {}: {}", dir.display(), e));
                Ok(())
            }
        }
    }

    /// Write matching files of one directory, then recurse into kept subdirectories
    fn scan_entries<W: Write>(
        &mut self,
        entries: Vec<DirEntry>,
        writer: &mut DumpWriter<W>,
    ) -> Result<()> {
        // Split into directories and files
        let (dirs, files): (Vec<_>, Vec<_>) = entries.into_iter().partition(is_directory);

        for entry in files {
            let file_name = entry.file_name().to_string_lossy();
            if has_allowed_extension(&file_name) {
                self.process_file(entry.path(), writer)?;
            }
        }

        for entry in dirs {
            // Directory symlinks are listed but never followed
            if entry.path_is_symlink() {
                continue;
            }

            let dir_name = entry.file_name().to_string_lossy();
            if is_excluded_dir(&dir_name) {
                log::debug!("Pruning excluded directory {}", entry.path().display());
                continue;
            }

            self.scan_directory(entry.path(), writer)?;
        }

        Ok(())
    }

    /// Write one matched file, or an inline notice when it cannot be read
    fn process_file<W: Write>(&mut self, abs_path: &Path, writer: &mut DumpWriter<W>) -> Result<()> {
        self.statistics.files_processed += 1;
        let rel_path = relative_path(&self.config.target_dir, abs_path);

        self.progress.inc(1);
        self.progress
            .set_message(format!("Processing: {}", rel_path.display()));
        self.progress
            .suspend(|| log::info!("Processing: {}", abs_path.display()));

        writer.write_header(&rel_path)?;

        match read_source(abs_path) {
            Ok(content) => {
                writer.write_content(&content)?;
                self.statistics.files_read += 1;
            }
            Err(SrcDumpError::FileRead { path, source }) => {
                let message = source.to_string();
                self.progress
                    .suspend(|| log::warn!("Could not read {}: {}", path.display(), message));
                writer.write_read_failure(&rel_path, &message)?;
                self.statistics.read_failures.push(ReadFailure {
                    path: rel_path,
                    message,
                });
            }
            Err(err) => return Err(err),
        }

        Ok(())
    }
}

/// Direct children of `dir`, sorted by file name
fn list_directory(dir: &Path) -> walkdir::Result<Vec<DirEntry>> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .collect()
}

/// Whether an entry belongs with the subdirectories, symlinks to directories included
fn is_directory(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}

/// Read a matched file as UTF-8 text
fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| SrcDumpError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}
