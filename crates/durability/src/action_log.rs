//! Append-only action log
//!
//! The action log is the only durable record of vocabulary edits. It is
//! opened once, kept open for sequential appends, and flushed after every
//! write. Current vocabulary state is rebuilt by replaying it (see
//! [`crate::replayer`]).
//!
//! ## File Operations
//!
//! - `ActionLog::open()` - Open existing log or create a new one
//! - `ActionLog::append()` - Write one record and flush it
//! - `ActionLog::replay()` - Flush, then replay the whole file
//! - `ActionLog::close()` - Final sync and release the handle (idempotent)

use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use lexicon_core::WordAction;

use crate::error::{ActionLogError, ActionLogResult};
use crate::mode::DurabilityMode;
use crate::record::{ActionRecord, FIELD_SEPARATOR};
use crate::replayer::{ActionReplayer, ReplayOutcome};

/// Append-only log of word add/remove events
///
/// # Example
///
/// ```ignore
/// let mut log = ActionLog::open("data/action.txt", DurabilityMode::Standard)?;
/// log.append("数据库", WordAction::Add)?;
///
/// let outcome = log.replay(Some(&base_vocabulary))?;
/// ```
pub struct ActionLog {
    /// File path
    path: PathBuf,

    /// Buffered handle, `None` once closed
    writer: Option<BufWriter<File>>,

    /// Sequence number for the next record
    next_sequence: u64,

    /// Durability mode
    durability_mode: DurabilityMode,

    /// Records appended by this handle
    appended: u64,
}

impl ActionLog {
    /// Open existing log or create a new one
    ///
    /// Creates parent directories if they don't exist. The sequence counter
    /// resumes after the highest sequence number already in the file.
    ///
    /// If the last line has no trailing newline (an interrupted write, or a
    /// file edited by hand) it is terminated first, so the next append starts
    /// on a line of its own. A complete record on that line is kept; a torn
    /// fragment is left for replay to skip as malformed.
    pub fn open<P: AsRef<Path>>(path: P, durability_mode: DurabilityMode) -> ActionLogResult<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        terminate_last_line(&path, &mut file, durability_mode)?;

        let next_sequence = ActionReplayer::new(&path)
            .max_sequence()?
            .map_or(0, |max| max + 1);

        tracing::info!(
            target: "lexicon::durability",
            path = %path.display(),
            next_sequence,
            mode = durability_mode.description(),
            "Action log opened"
        );

        Ok(ActionLog {
            path,
            writer: Some(BufWriter::new(file)),
            next_sequence,
            durability_mode,
            appended: 0,
        })
    }

    /// Append one action and flush it.
    ///
    /// Returns `Ok(false)` without writing anything when `word` is empty or
    /// contains a tab or line break (it could not be read back as one record).
    ///
    /// # Errors
    ///
    /// [`ActionLogError::Closed`] after `close()`, or an I/O error.
    pub fn append(&mut self, word: &str, action: WordAction) -> ActionLogResult<bool> {
        if word.is_empty() || word.contains(|c: char| c == FIELD_SEPARATOR || c == '\n' || c == '\r') {
            tracing::debug!(
                target: "lexicon::durability",
                word,
                "Rejected unloggable word"
            );
            return Ok(false);
        }

        let writer = self.writer.as_mut().ok_or(ActionLogError::Closed)?;
        let record = ActionRecord::new(self.next_sequence, word, action);

        writer.write_all(record.to_line().as_bytes())?;
        writer.flush()?;
        if self.durability_mode.requires_immediate_fsync() {
            writer.get_ref().sync_all()?;
        }

        self.next_sequence += 1;
        self.appended += 1;
        Ok(true)
    }

    /// Append an add action
    pub fn add_word(&mut self, word: &str) -> ActionLogResult<bool> {
        self.append(word, WordAction::Add)
    }

    /// Append a remove action
    pub fn remove_word(&mut self, word: &str) -> ActionLogResult<bool> {
        self.append(word, WordAction::Remove)
    }

    /// Replay the persisted log on top of `base`.
    ///
    /// Pending writes are flushed first so the replay sees every append made
    /// through this handle. Works on a closed log as well.
    pub fn replay(&mut self, base: Option<&HashSet<String>>) -> ActionLogResult<ReplayOutcome> {
        self.flush()?;
        ActionReplayer::new(&self.path).replay(base)
    }

    /// Flush buffered writes to OS buffers (no-op when closed)
    pub fn flush(&mut self) -> ActionLogResult<()> {
        if let Some(writer) = self.writer.as_mut() {
            writer.flush()?;
        }
        Ok(())
    }

    /// Flush, fsync and release the file handle.
    ///
    /// Safe to call more than once; later calls do nothing.
    pub fn close(&mut self) -> ActionLogResult<()> {
        let Some(mut writer) = self.writer.take() else {
            return Ok(());
        };
        writer.flush()?;
        writer.get_ref().sync_all()?;

        tracing::info!(
            target: "lexicon::durability",
            path = %self.path.display(),
            appended = self.appended,
            "Action log closed"
        );
        Ok(())
    }

    /// Check if `close()` has been called
    pub fn is_closed(&self) -> bool {
        self.writer.is_none()
    }

    /// Sequence number the next append will use
    pub fn next_sequence(&self) -> u64 {
        self.next_sequence
    }

    /// Number of records appended through this handle
    pub fn appended(&self) -> u64 {
        self.appended
    }

    /// Get file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get durability mode
    pub fn durability_mode(&self) -> DurabilityMode {
        self.durability_mode
    }
}

/// Append a newline if the file is non-empty and does not end with one.
///
/// Returns whether a newline was written.
fn terminate_last_line(
    path: &Path,
    file: &mut File,
    durability_mode: DurabilityMode,
) -> ActionLogResult<bool> {
    let mut reader = File::open(path)?;
    if reader.metadata()?.len() == 0 {
        return Ok(false);
    }

    let mut last = [0u8; 1];
    reader.seek(SeekFrom::End(-1))?;
    reader.read_exact(&mut last)?;
    if last[0] == b'\n' {
        return Ok(false);
    }

    file.write_all(b"\n")?;
    file.flush()?;
    if durability_mode.requires_immediate_fsync() {
        file.sync_all()?;
    }

    tracing::warn!(
        target: "lexicon::durability",
        path = %path.display(),
        "Terminated unfinished last line of action log"
    );
    Ok(true)
}

impl Drop for ActionLog {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            tracing::warn!(
                target: "lexicon::durability",
                path = %self.path.display(),
                error = %e,
                "Failed to close action log"
            );
        }
    }
}
