//! Exit handling: signal handlers, partial output cleanup, core dump suppression.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Dictionary file currently being written, removed if the process is killed.
static IN_PROGRESS: Mutex<Option<PathBuf>> = Mutex::new(None);

/// Cleanup function registered with atexit - runs on any exit
extern "C" fn cleanup_on_exit() {
    // try_lock: a signal may land while the writer holds the lock
    if let Ok(mut slot) = IN_PROGRESS.try_lock()
        && let Some(path) = slot.take()
    {
        let _ = std::fs::remove_file(path);
    }
    // Only print escape codes if stderr is a TTY (log colors go there)
    unsafe {
        if libc::isatty(2) == 1 {
            libc::write(2, b"\x1b[0m".as_ptr() as *const libc::c_void, 4);
        }
    }
}

/// Signal handler for SIGINT/SIGTERM/SIGHUP - exit, atexit handles cleanup
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers, register atexit cleanup and keep the
/// process out of core dumps (candidates hold personal data).
/// Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Marks `path` as partially written until [`OutputGuard::finish`] is called.
///
/// Dropping an unfinished guard removes the file.
pub struct OutputGuard {
    path: PathBuf,
    finished: bool,
}

impl OutputGuard {
    pub fn track(path: &Path) -> Self {
        if let Ok(mut slot) = IN_PROGRESS.lock() {
            *slot = Some(path.to_path_buf());
        }
        Self {
            path: path.to_path_buf(),
            finished: false,
        }
    }

    pub fn finish(mut self) {
        self.finished = true;
    }
}

impl Drop for OutputGuard {
    fn drop(&mut self) {
        if let Ok(mut slot) = IN_PROGRESS.lock()
            && slot.as_deref() == Some(self.path.as_path())
        {
            *slot = None;
        }
        if !self.finished {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfinished_guard_removes_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("dict.txt");
        std::fs::write(&path, "partial\n").expect("write");

        drop(OutputGuard::track(&path));
        assert!(!path.exists());
    }

    #[test]
    fn finished_guard_keeps_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("dict.txt");
        std::fs::write(&path, "done\n").expect("write");

        OutputGuard::track(&path).finish();
        assert!(path.exists());
    }
}
