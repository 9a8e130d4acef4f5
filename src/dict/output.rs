//! Dictionary output.

use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use zeroize::{Zeroize, Zeroizing};

use crate::error::WriteError;
use crate::exits::OutputGuard;

/// Where the dictionary goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    File(PathBuf),
    Stdout,
}

impl Sink {
    /// `-` selects stdout, anything else is a file path.
    pub fn from_path(path: &Path) -> Self {
        if path == Path::new("-") {
            Sink::Stdout
        } else {
            Sink::File(path.to_path_buf())
        }
    }
}

/// Buffered writer that zeroes its buffer every time it is drained.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    const CAPACITY: usize = 64 * 1024;

    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(Self::CAPACITY),
        }
    }

    fn drain(&mut self) -> io::Result<()> {
        let res = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        res
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > Self::CAPACITY {
            self.drain()?;
        }
        if data.len() >= Self::CAPACITY {
            self.inner.write_all(data)?;
        } else {
            self.buf.extend_from_slice(data);
        }
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.drain()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.drain();
    }
}

/// Write `candidates` to `out`, one per line. Returns the number written.
///
/// Candidates are zeroized once written, or on early return.
pub fn write_lines<W: Write>(
    out: W,
    candidates: HashSet<String>,
    sorted: bool,
) -> io::Result<usize> {
    let mut list = Zeroizing::new(candidates.into_iter().collect::<Vec<String>>());
    if sorted {
        list.sort_unstable();
    }

    let mut out = SecureBufWriter::new(out);
    for candidate in list.iter() {
        out.write_all(candidate.as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    Ok(list.len())
}

/// Write the dictionary to `sink`, creating missing parent directories.
///
/// An existing file is truncated. If writing fails or the process is
/// interrupted midway, the partial file is removed.
pub fn write(sink: &Sink, candidates: HashSet<String>, sorted: bool) -> Result<usize, WriteError> {
    match sink {
        Sink::Stdout => {
            let stdout = io::stdout();
            write_lines(stdout.lock(), candidates, sorted).map_err(|source| WriteError::Write {
                path: PathBuf::from("-"),
                source,
            })
        }
        Sink::File(path) => {
            ensure_parent(path)?;

            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(path)
                .map_err(|source| WriteError::Open {
                    path: path.clone(),
                    source,
                })?;

            let guard = OutputGuard::track(path);
            let count = write_lines(file, candidates, sorted).map_err(|source| {
                WriteError::Write {
                    path: path.clone(),
                    source,
                }
            })?;
            guard.finish();

            Ok(count)
        }
    }
}

fn ensure_parent(path: &Path) -> Result<(), WriteError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|source| WriteError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(list: &[&str]) -> HashSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn one_line_per_candidate() {
        let mut out = Vec::new();
        let count = write_lines(&mut out, set(&["ann0", "annann", "ann!ann"]), false)
            .expect("write");

        assert_eq!(count, 3);
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.ends_with('\n'));
        assert!(!text.contains("\r"));
        let mut lines: Vec<&str> = text.lines().collect();
        lines.sort_unstable();
        assert_eq!(lines, vec!["ann!ann", "ann0", "annann"]);
    }

    #[test]
    fn sorted_output() {
        let mut out = Vec::new();
        write_lines(&mut out, set(&["b", "c", "a"]), true).expect("write");
        assert_eq!(out, b"a\nb\nc\n");
    }

    #[test]
    fn empty_set_writes_nothing() {
        let mut out = Vec::new();
        let count = write_lines(&mut out, HashSet::new(), false).expect("write");
        assert_eq!(count, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn large_output_crosses_buffer() {
        let many: HashSet<String> = (0..20_000).map(|n| format!("candidate{n:05}")).collect();
        let mut out = Vec::new();
        let count = write_lines(&mut out, many, true).expect("write");

        assert_eq!(count, 20_000);
        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(text.lines().count(), 20_000);
        assert_eq!(text.lines().next(), Some("candidate00000"));
        assert_eq!(text.lines().last(), Some("candidate19999"));
    }

    #[test]
    fn creates_parent_and_truncates() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested/out/dict.txt");
        let sink = Sink::File(path.clone());

        write(&sink, set(&["first", "second"]), true).expect("write");
        write(&sink, set(&["third"]), true).expect("rewrite");

        assert_eq!(fs::read_to_string(&path).expect("read"), "third\n");
    }

    #[test]
    fn dash_is_stdout() {
        assert_eq!(Sink::from_path(Path::new("-")), Sink::Stdout);
        assert_eq!(
            Sink::from_path(Path::new("dict.txt")),
            Sink::File(PathBuf::from("dict.txt"))
        );
    }
}
