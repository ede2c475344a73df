// File-backed append-only ledger
use crate::entry::HistoryEntry;
use crate::error::LedgerResult;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::debug;

/// Durable append-only log of past prescription events.
///
/// Cloning shares the write lock, so every handle in a process serializes
/// its appends against the others.
#[derive(Debug, Clone)]
pub struct HistoryLedger {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl HistoryLedger {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the entire ledger verbatim.
    ///
    /// A ledger that has never been written reads as an empty string;
    /// callers render that as "no history" rather than treating it as an
    /// error.
    ///
    /// # Errors
    ///
    /// Any I/O failure other than the file being absent.
    pub async fn read_all(&self) -> LedgerResult<String> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Append one entry and flush it to disk before returning.
    ///
    /// The whole line goes out in a single write under the process-wide
    /// lock; `sync_all` runs before the append is reported complete.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the file cannot be opened or
    /// written.
    pub async fn append(&self, entry: &HistoryEntry) -> LedgerResult<()> {
        let line = entry.to_line();
        let _guard = self.write_lock.lock().await;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.sync_all().await?;

        debug!(patient_id = %entry.patient_id, "History entry appended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger_in(dir: &tempfile::TempDir) -> HistoryLedger {
        HistoryLedger::new(dir.path().join("past_prescriptions.txt"))
    }

    #[tokio::test]
    async fn unwritten_ledger_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = ledger_in(&dir);
        assert_eq!(ledger.read_all().await.unwrap(), "");
    }

    #[tokio::test]
    async fn append_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = ledger_in(&dir);

        let entry = HistoryEntry::new("P1", "fever, cough", "Paracetamol 500mg");
        ledger.append(&entry).await.unwrap();

        let content = ledger.read_all().await.unwrap();
        assert!(content.ends_with(&entry.to_line()));
        assert!(content.contains("Patient:P1"));
        assert!(content.contains("Symptoms:fever, cough"));
        assert!(content.contains("Paracetamol 500mg"));
    }

    #[tokio::test]
    async fn concurrent_appends_do_not_corrupt_lines() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = ledger_in(&dir);

        let mut handles = Vec::new();
        for i in 0..50 {
            let ledger = ledger.clone();
            handles.push(tokio::spawn(async move {
                let entry = HistoryEntry::new(
                    format!("P{i}"),
                    format!("symptom-{i}"),
                    format!("rx-{i}"),
                );
                ledger.append(&entry).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let content = ledger.read_all().await.unwrap();
        for i in 0..50 {
            let needle = format!("Patient:P{i} Symptoms:symptom-{i} → rx-{i}");
            assert!(content.contains(&needle), "entry {i} missing or corrupted");
        }
    }
}
