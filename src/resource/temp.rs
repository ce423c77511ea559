use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use uuid::Uuid;

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Hands out unique scratch paths inside one directory.
///
/// Names combine the process id, a random UUID and a process-wide counter, so
/// concurrent callers never collide. The allocator never creates or removes
/// files itself. Clones share one [`issued`](Self::issued) count.
#[derive(Debug, Clone)]
pub struct TempFileAllocator {
    dir: PathBuf,
    issued: Arc<AtomicU64>,
}

impl TempFileAllocator {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            issued: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of paths handed out by this allocator and its clones.
    pub fn issued(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }

    pub fn allocate(&self) -> PathBuf {
        self.issued.fetch_add(1, Ordering::SeqCst);
        let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
        self.dir.join(format!(
            "tencent-ai-{}-{}-{}.tmp",
            std::process::id(),
            Uuid::new_v4(),
            seq
        ))
    }

    /// Allocate a path and tie the file's lifetime to the returned guard.
    pub fn scratch(&self) -> ScratchFile {
        ScratchFile::new(self.allocate())
    }
}

impl Default for TempFileAllocator {
    fn default() -> Self {
        Self::new(std::env::temp_dir())
    }
}

/// Owns a scratch path and deletes the file exactly once.
///
/// Call [`remove`](Self::remove) when done with the file. If the guard is
/// dropped without it, for example when the owning future is cancelled, the
/// file is removed on drop instead. Removal is best-effort: a missing file is
/// ignored and other failures are only logged.
#[derive(Debug)]
pub struct ScratchFile {
    path: PathBuf,
    removed: bool,
}

impl ScratchFile {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            removed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn remove(mut self) {
        self.removed = true;
        log_removal(&self.path, tokio::fs::remove_file(&self.path).await);
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        if !self.removed {
            // Only reached when remove() never ran; a single unlink.
            log_removal(&self.path, std::fs::remove_file(&self.path));
        }
    }
}

fn log_removal(path: &Path, result: std::io::Result<()>) {
    match result {
        Ok(()) => tracing::debug!("Removed scratch file {}", path.display()),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => tracing::warn!("Failed to remove scratch file {}: {}", path.display(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_allocate_is_inside_dir() {
        let dir = tempfile::tempdir().unwrap();
        let allocator = TempFileAllocator::new(dir.path());

        let path = allocator.allocate();
        assert_eq!(path.parent(), Some(dir.path()));
        assert!(path.to_string_lossy().ends_with(".tmp"));
        assert!(!path.exists());
    }

    #[test]
    fn test_allocate_unique_across_threads() {
        let allocator = Arc::new(TempFileAllocator::default());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let allocator = Arc::clone(&allocator);
                std::thread::spawn(move || (0..100).map(|_| allocator.allocate()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for path in handle.join().unwrap() {
                assert!(seen.insert(path), "duplicate scratch path");
            }
        }
        assert_eq!(seen.len(), 800);
    }

    #[test]
    fn test_scratch_file_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let allocator = TempFileAllocator::new(dir.path());

        let path = {
            let scratch = allocator.scratch();
            std::fs::write(scratch.path(), b"bytes").unwrap();
            assert!(scratch.path().exists());
            scratch.path().to_path_buf()
        };

        assert!(!path.exists());
    }

    #[test]
    fn test_issued_counts_allocations_across_clones() {
        let allocator = TempFileAllocator::default();
        let clone = allocator.clone();
        assert_eq!(allocator.issued(), 0);

        allocator.allocate();
        clone.scratch();
        assert_eq!(allocator.issued(), 2);
        assert_eq!(clone.issued(), 2);

        let other = TempFileAllocator::default();
        assert_eq!(other.issued(), 0);
    }

    #[tokio::test]
    async fn test_scratch_file_remove_deletes_once() {
        let dir = tempfile::tempdir().unwrap();
        let scratch = TempFileAllocator::new(dir.path()).scratch();
        let path = scratch.path().to_path_buf();
        tokio::fs::write(&path, b"bytes").await.unwrap();

        scratch.remove().await;
        assert!(!path.exists());
    }

    #[test]
    fn test_scratch_file_never_written_drops_quietly() {
        let dir = tempfile::tempdir().unwrap();
        let scratch = TempFileAllocator::new(dir.path()).scratch();
        drop(scratch);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
